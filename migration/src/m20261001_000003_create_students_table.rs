use entity::students::{self, constants::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(students::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(students::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Nombre)
                            .string_len(NOMBRE_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Apellido)
                            .string_len(APELLIDO_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(students::Column::Edad).integer().not_null())
                    .col(ColumnDef::new(students::Column::Email).string().not_null())
                    .col(
                        ColumnDef::new(students::Column::Sexo)
                            .string_len(SEXO_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Telefono)
                            .string_len(TELEFONO_MAX_LENGTH)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(students::Entity).to_owned())
            .await
    }
}
