use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

pub mod constants {
    pub const TITULO_MAX_LENGTH: u32 = 150;
    pub const URL_MAX_LENGTH: u32 = 200;
    pub const METODO_HTTP_MAX_LENGTH: u32 = 10;
    pub const IP_CLIENTE_MAX_LENGTH: u32 = 39;

    /// Layout of `fecha_reporte` wherever a report is shown to a client.
    pub const FECHA_REPORTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "error_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titulo: String,
    #[sea_orm(column_type = "Text")]
    pub descripcion: String,
    pub tipo_error: String,
    pub url: String,
    pub metodo_http: String,
    pub ip_cliente: Option<String>,
    pub fecha_reporte: DateTimeUtc,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            fecha_reporte: Set(Utc::now()),
            activo: Set(true),
            ..ActiveModelTrait::default()
        }
    }
}

impl Entity {
    /// Every report, oldest first.
    pub fn find_listed() -> Select<Entity> {
        Self::find().order_by_asc(Column::Id)
    }
}

impl Model {
    pub fn fecha_reporte_display(&self) -> String {
        self.fecha_reporte
            .format(constants::FECHA_REPORTE_FORMAT)
            .to_string()
    }
}
