use entity::error_reports::{self, constants::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(error_reports::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(error_reports::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::Titulo)
                            .string_len(TITULO_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::Descripcion)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::TipoError)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::Url)
                            .string_len(URL_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::MetodoHttp)
                            .string_len(METODO_HTTP_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::IpCliente)
                            .string_len(IP_CLIENTE_MAX_LENGTH)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::FechaReporte)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(error_reports::Column::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(error_reports::Entity).to_owned())
            .await
    }
}
