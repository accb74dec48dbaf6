crate::utils::create_table_migration!(entity::contacts::Entity);
