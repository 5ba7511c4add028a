use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DbErr;
use timer_persistence::DatabaseManager;
use timer_persistence::repositories::{SolveRepository, UserRepository};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::create_routes;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(#[source] DbErr),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] warp::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    #[error("failed to close database connection: {0}")]
    Database(#[source] DbErr),
    #[error("listener task failed: {0}")]
    Listener(#[source] tokio::task::JoinError),
}

/// Owned handle to a running server: the store connection plus the bound listener.
pub struct RunningServer {
    addr: SocketAddr,
    database: DatabaseManager,
    shutdown: oneshot::Sender<()>,
    listener: JoinHandle<()>,
}

/// Opens the store, then binds the listener. Nothing is left open on failure.
pub async fn start(config: &Config) -> Result<RunningServer, StartupError> {
    let database = DatabaseManager::connect(&config.database_url)
        .await
        .map_err(StartupError::Database)?;
    info!("Connected to database");

    bind(database, config.address(), config.static_dir.clone()).await
}

async fn bind(
    database: DatabaseManager,
    addr: SocketAddr,
    static_dir: PathBuf,
) -> Result<RunningServer, StartupError> {
    let connection = database.get_connection().clone();
    let routes = create_routes(
        Arc::new(SolveRepository::new(connection.clone())),
        Arc::new(UserRepository::new(connection)),
        static_dir,
    );

    let (shutdown, shutdown_signal) = oneshot::channel::<()>();
    let bound = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async move {
        // A dropped sender also counts as a shutdown request.
        let _ = shutdown_signal.await;
    });

    let (addr, server) = match bound {
        Ok(bound) => bound,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            if let Err(close_err) = database.close().await {
                tracing::error!("Failed to close database after bind failure: {}", close_err);
            }
            return Err(StartupError::Bind(err));
        }
    };

    info!("Your app is listening on {}", addr);
    Ok(RunningServer {
        addr,
        database,
        shutdown,
        listener: tokio::spawn(server),
    })
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Closes the store connection, then the listener. The listener is always
    /// awaited, even when closing the store fails.
    pub async fn stop(self) -> Result<(), ShutdownError> {
        let closed = self.database.close().await;
        if let Err(err) = &closed {
            tracing::error!("Failed to close database connection: {}", err);
        }
        info!("Closing server");

        // The listener may already be gone, in which case the join below reports it.
        let _ = self.shutdown.send(());
        self.listener.await.map_err(ShutdownError::Listener)?;
        closed.map_err(ShutdownError::Database)?;

        info!("Server shutdown complete");
        Ok(())
    }
}
