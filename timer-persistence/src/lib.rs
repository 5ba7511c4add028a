pub mod connection;
pub mod entities;
pub mod error;
pub mod repositories;

pub use error::{StoreError, parse_id};

use sea_orm::{DatabaseConnection, DbErr};

pub struct DatabaseManager {
    connection: DatabaseConnection,
}

impl From<DatabaseConnection> for DatabaseManager {
    fn from(connection: DatabaseConnection) -> Self {
        Self { connection }
    }
}

impl DatabaseManager {
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let connection = connection::connect_and_prepare(database_url).await?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}
