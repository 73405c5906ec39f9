//! HTTP server. Mounts the GraphQL schema on an axum router.
//!
//! ```text
//!   POST {graphql_path}   execute a query or mutation
//!   GET  {graphql_path}   GraphiQL explorer (when enabled)
//! ```

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::{get, post_service};
use axum::Router;
use tokio::net::{lookup_host, TcpListener};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{Result, RosterError};
use crate::graphql::{build_schema, RosterSchema};
use crate::store::StoreHandle;

/// HTTP server for the roster API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`.
    pub fn new(config: ServerConfig, store: StoreHandle) -> Self {
        let schema = build_schema(store, config.update_semantics);
        let router = build_router(&config, schema);
        Self { config, router }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Resolve the configured `host:port` and bind a listener to it.
    ///
    /// Hostnames such as `localhost` are resolved; a host that resolves to
    /// nothing is an [`RosterError::InvalidAddress`].
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.socket_addr();
        let resolved: Vec<SocketAddr> = lookup_host(addr.as_str())
            .await
            .map_err(|_| RosterError::InvalidAddress(addr.clone()))?
            .collect();
        if resolved.is_empty() {
            return Err(RosterError::InvalidAddress(addr));
        }
        Ok(TcpListener::bind(resolved.as_slice()).await?)
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<()> {
        let listener = self.bind().await?;
        info!(
            addr = %listener.local_addr()?,
            path = %self.config.graphql_path,
            graphiql = self.config.graphiql,
            "server is up"
        );
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Build the router for `schema` according to `config`.
pub fn build_router(config: &ServerConfig, schema: RosterSchema) -> Router {
    let endpoint = if config.graphiql {
        let page = GraphiQLSource::build()
            .endpoint(&config.graphql_path)
            .finish();
        get(move || async move { Html(page) }).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(&config.graphql_path, endpoint)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_host_is_rejected_on_start() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        let server = HttpServer::new(config, StoreHandle::seeded());
        let err = server.start().await.unwrap_err();
        assert!(matches!(err, RosterError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = HttpServer::new(config, StoreHandle::seeded());
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_config_is_kept() {
        let server = HttpServer::new(ServerConfig::default(), StoreHandle::seeded());
        assert_eq!(server.config().port, 3000);
    }
}
