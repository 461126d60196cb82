//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use blog_router::config::{load_config, AppConfig};
use blog_router::controllers::{default_callbacks, default_registry};
use blog_router::{App, HttpServer, Router, Shutdown};

/// The shipped `config/app.toml`.
pub fn blog_config() -> AppConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/app.toml");
    load_config(&path).unwrap()
}

/// Router compiled from the shipped route table.
#[allow(dead_code)]
pub fn blog_router() -> Router {
    Router::from_config(&blog_config().routes, &default_callbacks()).unwrap()
}

/// Start the blog on `addr`, mounted at `base_path`.
#[allow(dead_code)]
pub async fn start_blog(addr: SocketAddr, base_path: &str) -> Shutdown {
    let mut config = blog_config();
    config.listener.bind_address = addr.to_string();
    config.listener.base_path = base_path.to_string();
    start_server(config).await
}

/// Bootstrap `config` with the built-in controllers and serve it in the
/// background. Trigger the returned `Shutdown` to stop.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> Shutdown {
    let app = App::bootstrap(config, default_registry(), &default_callbacks()).unwrap();
    start_app(app).await
}

/// Serve an already bootstrapped `app` on its configured bind address.
#[allow(dead_code)]
pub async fn start_app(app: App) -> Shutdown {
    let listener = tokio::net::TcpListener::bind(&app.config().listener.bind_address)
        .await
        .unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = HttpServer::new(app).run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Client that neither pools nor follows redirects.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
