//! End-to-end tests: the blog served over HTTP.

use std::net::SocketAddr;

use axum::http::StatusCode;
use serde_json::Value;

use blog_router::config::{AppConfig, RouteConfig};
use blog_router::dispatch::{ActionController, HandlerRegistry, Reply};
use blog_router::http::X_REQUEST_ID;
use blog_router::routing::CallbackRegistry;
use blog_router::App;

mod common;

#[tokio::test]
async fn test_path_routes() {
    let addr: SocketAddr = "127.0.0.1:28201".parse().unwrap();
    let shutdown = common::start_blog(addr, "/").await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/cat-id-prop/books/42/title", addr))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "Displaying property <b>title</b> of item <b>#42</b> from category <b>books</b>."
    );

    let res = client
        .get(format!("http://{}/cat-id-prop/books/42/title/author/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.text().await.unwrap(),
        "Displaying properties <b>title,author</b> of item #42 from category 'books'."
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_single_rest_segment_redirects() {
    let addr: SocketAddr = "127.0.0.1:28202".parse().unwrap();
    let shutdown = common::start_blog(addr, "/").await;

    let res = common::client()
        .get(format!("http://{}/cat-id-props/books/42/title", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers()["location"].to_str().unwrap(),
        "/cat-id-prop/books/42/title"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_regex_and_callback_routes() {
    let addr: SocketAddr = "127.0.0.1:28203".parse().unwrap();
    let shutdown = common::start_blog(addr, "/").await;
    let client = common::client();

    let res = client.get(format!("http://{}/regex/route", addr)).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "Regex route works.");

    let res = client.get(format!("http://{}/callback-route", addr)).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "Callback route works");

    shutdown.trigger();
}

#[tokio::test]
async fn test_not_found() {
    let addr: SocketAddr = "127.0.0.1:28204".parse().unwrap();
    let shutdown = common::start_blog(addr, "/").await;
    let client = common::client();

    // No route matches.
    let res = client.get(format!("http://{}/no/such/page", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "<h2>Not Found</h2>");

    // Routed to an action that answers 404 itself.
    let res = client.get(format!("http://{}/not-found", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Page not found.");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_controller_is_internal_error() {
    let addr: SocketAddr = "127.0.0.1:28205".parse().unwrap();
    let mut config = common::blog_config();
    config.listener.bind_address = addr.to_string();
    config
        .routes
        .insert(0, RouteConfig::path("admin/:page", "admin/Dashboard::show"));
    let shutdown = common::start_server(config).await;

    let res = common::client()
        .get(format!("http://{}/admin/users", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "<h2>Internal Server Error</h2>");

    shutdown.trigger();
}

#[tokio::test]
async fn test_mounted_under_base_path() {
    let addr: SocketAddr = "127.0.0.1:28206".parse().unwrap();
    let shutdown = common::start_blog(addr, "/blog").await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/blog/print-request?page=2", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["base_url"], "/blog/");
    assert_eq!(body["query"]["page"], "2");
    assert_eq!(body["data"]["print_args"], true);

    let res = client.get(format!("http://{}/print-request", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id() {
    let addr: SocketAddr = "127.0.0.1:28207".parse().unwrap();
    let shutdown = common::start_blog(addr, "/").await;
    let client = common::client();

    // Generated when absent.
    let res = client.get(format!("http://{}/regex/route", addr)).send().await.unwrap();
    let id = res.headers()[X_REQUEST_ID].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    // Propagated when supplied, and visible to controllers.
    let res = client
        .get(format!("http://{}/print-request", addr))
        .header(X_REQUEST_ID, "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[X_REQUEST_ID], "trace-me");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["request_id"], "trace-me");

    shutdown.trigger();
}

#[tokio::test]
async fn test_panic_is_internal_error() {
    let addr: SocketAddr = "127.0.0.1:28208".parse().unwrap();

    let mut config = AppConfig::default();
    config.listener.bind_address = addr.to_string();
    config.routes = vec![
        RouteConfig::path("boom", "Crashy::boom"),
        RouteConfig::callback("explode", "Crashy::ok"),
    ];

    let mut registry = HandlerRegistry::new();
    registry.register(
        "Crashy",
        ActionController::new()
            .action("boom", |_| {
                let empty: Vec<u8> = Vec::new();
                Ok(Reply::text(empty[0].to_string()))
            })
            .action("ok", |_| Ok(Reply::text("ok"))),
    );

    let mut callbacks = CallbackRegistry::new();
    callbacks.register("explode", |_: &str| panic!("callback blew up"));

    let app = App::bootstrap(config, registry, &callbacks).unwrap();
    let shutdown = common::start_app(app).await;
    let client = common::client();

    // Panicking action.
    let res = client.get(format!("http://{}/boom", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key(X_REQUEST_ID));
    assert_eq!(res.text().await.unwrap(), "<h2>Internal Server Error</h2>");

    // Panicking callback predicate.
    let res = client.get(format!("http://{}/anything", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "<h2>Internal Server Error</h2>");

    // The server keeps serving afterwards.
    let res = client.get(format!("http://{}/boom", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    shutdown.trigger();
}
