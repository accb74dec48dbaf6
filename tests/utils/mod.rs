pub mod macros;
pub mod prelude;
mod request;
mod response;

use error_pages::State;
use migration::MigratorTrait;
use request::RequestBuilder;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::log::LevelFilter;

const DATABASE_URL: &str = "sqlite::memory:";

#[derive(Clone, Debug)]
pub struct App {
    addr: SocketAddr,
    db: DbConn,
    client: Client,
}

impl App {
    pub async fn new() -> Self {
        let mut opts = ConnectOptions::new(DATABASE_URL.to_owned());
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        migration::Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");

        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("failed to bind tcp listener");
        let addr = listener.local_addr().unwrap();

        let state = State::with_database(db.clone(), concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

        tokio::spawn(async move {
            error_pages::run(listener, state).await.unwrap();
        });

        App {
            addr,
            db,
            client: Client::new(),
        }
    }

    pub fn db(&self) -> &DbConn {
        &self.db
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.url(path)))
    }
}
