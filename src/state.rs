use crate::Config;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn static_dir(&self) -> &Path;
}

pub struct State {
    database: DbConn,
    static_dir: PathBuf,
}

impl State {
    pub async fn new(config: &Config) -> Result<Arc<Self>, DbErr> {
        let database = Self::connect_database(&config.database_url).await?;

        if config.run_migrations {
            info!("Applying pending migrations");
            migration::Migrator::up(&database, None).await?;
        }

        Ok(Self::with_database(database, config.static_dir.clone()))
    }

    pub fn with_database(conn: DbConn, static_dir: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            static_dir: static_dir.into(),
        })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
