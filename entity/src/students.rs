use sea_orm::entity::prelude::*;

pub mod constants {
    pub const NOMBRE_MAX_LENGTH: u32 = 70;
    pub const APELLIDO_MAX_LENGTH: u32 = 70;
    pub const SEXO_MAX_LENGTH: u32 = 1;
    pub const TELEFONO_MAX_LENGTH: u32 = 10;
}

/// Part of the schema only; no route reads or writes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub edad: i32,
    pub email: String,
    pub sexo: String,
    pub telefono: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
