//! Static asset server with SPA fallback routing.
//!
//! Every request maps to a file under a fixed asset root and is served
//! with a content type from a fixed extension table. A path that
//! resolves outside the root is rejected with 403 before any file
//! access. An absent file falls back to the SPA shell (`index.html`)
//! only when the request path does not look like a file request, so
//! client-side routes like `/tasks/42` load the app while a missing
//! `/logo.png` stays a genuine 404.

pub mod assets;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

use assets::{content_type_for, resolve, Resolution, INDEX_FILE};

/// Listen port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration, read once at startup and passed to
/// [`create_router`].
///
/// Deployment platforms assign the port through the `PORT` environment
/// variable and route traffic from outside the host, so the listener
/// binds all interfaces rather than loopback.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub asset_root: PathBuf,
}

impl ServerConfig {
    pub fn new(asset_root: PathBuf) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            asset_root,
        }
    }

    /// Like [`ServerConfig::new`], with the port taken from `PORT`
    /// when present.
    pub fn from_env(asset_root: PathBuf) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            ..Self::new(asset_root)
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub fn create_router(config: ServerConfig) -> Router {
    Router::new()
        .fallback(serve_asset)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Serve one request. Any method and any path land here; the response
/// is 200 (file or shell), 403 (path escaped the root), or 404.
async fn serve_asset(State(config): State<ServerConfig>, method: Method, uri: Uri) -> Response {
    tracing::info!("{} {}", method, uri);

    // The query string plays no part in file lookup.
    let request_path = uri.path();

    let file = match resolve(&config.asset_root, request_path) {
        Resolution::Serve(file) => file,
        Resolution::Forbidden => {
            tracing::warn!("Forbidden path: {}", request_path);
            return (StatusCode::FORBIDDEN, "403: Forbidden").into_response();
        }
    };

    match tokio::fs::read(&file).await {
        Ok(contents) => {
            let content_type = content_type_for(&file);
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], contents).into_response()
        }
        // A dotted path asked for a concrete file; the shell is not a
        // substitute for it.
        Err(_) if request_path.contains('.') => not_found(request_path),
        Err(_) => match tokio::fs::read(config.asset_root.join(INDEX_FILE)).await {
            Ok(shell) => {
                (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], shell).into_response()
            }
            Err(_) => not_found(request_path),
        },
    }
}

fn not_found(request_path: &str) -> Response {
    tracing::error!("File not found: {}", request_path);
    (StatusCode::NOT_FOUND, "404: File not found").into_response()
}
