mod clock;
mod clubs;
mod coach;
mod common;
mod competitions;
mod error;
mod routes;

#[cfg(test)]
mod testing;

pub use clock::Clock;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use axum::Router;
use engine::ClubData;
use log::{error, info, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub const BIND_ADDRESS_ENV: &str = "PROTACTIC_ADDR";

const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 18000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let addr = match env::var(BIND_ADDRESS_ENV) {
            Ok(raw) => Self::parse_addr(&raw),
            Err(_) => SocketAddr::from(DEFAULT_BIND_ADDRESS),
        };

        ServerConfig { addr }
    }

    fn parse_addr(raw: &str) -> SocketAddr {
        raw.trim().parse().unwrap_or_else(|_| {
            warn!(
                "invalid {} value '{}', falling back to {}",
                BIND_ADDRESS_ENV,
                raw,
                SocketAddr::from(DEFAULT_BIND_ADDRESS)
            );
            SocketAddr::from(DEFAULT_BIND_ADDRESS)
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(DEFAULT_BIND_ADDRESS),
        }
    }
}

pub struct ProtacticServer {
    data: AppData,
    config: ServerConfig,
}

impl ProtacticServer {
    pub fn new(data: AppData, config: ServerConfig) -> Self {
        ProtacticServer { data, config }
    }

    pub fn router(data: AppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(self) -> std::io::Result<()> {
        let app = Self::router(self.data);

        let listener = TcpListener::bind(self.config.addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", self.config.addr, e);
            e
        })?;

        info!("listen at: http://{}", self.config.addr);

        axum::serve(listener, app).await.map_err(|e| {
            error!("Server error: {}", e);
            e
        })
    }
}

#[derive(Clone)]
pub struct AppData {
    pub data: Arc<ClubData>,
    pub clock: Clock,
}

impl AppData {
    pub fn new(data: ClubData, clock: Clock) -> Self {
        AppData {
            data: Arc::new(data),
            clock,
        }
    }
}
