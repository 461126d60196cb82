//! Route table behavior against the shipped blog configuration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;

use blog_router::config::RouteConfig;
use blog_router::dispatch::{ActionController, Dispatcher, HandlerRegistry, Outcome, Reply};
use blog_router::http::RequestContext;
use blog_router::routing::{CallbackRegistry, RouteErrorKind, Router};

mod common;

#[test]
fn test_first_match_wins() {
    let router = common::blog_router();

    // Both `cat-id-prop/:cat/:id/:prop` and `cat-id-prop/:cat/:id/...` accept
    // this path; the earlier declaration wins.
    let matched = router.match_url("cat-id-prop/books/42/title").unwrap();
    let route = matched.route().unwrap();
    assert_eq!(route.index(), 1);
    assert_eq!(route.handler().action(), "catIdProp");
    assert_eq!(matched.params().get_str("prop"), Some("title"));
    assert_eq!(matched.params().rest(), None);
}

#[test]
fn test_rest_capture() {
    let router = common::blog_router();

    let matched = router.match_url("cat-id-prop/books/42/title/author").unwrap();
    assert_eq!(matched.route().unwrap().index(), 2);
    assert_eq!(
        matched.params().to_json(),
        json!({ "cat": "books", "id": "42", "rest_params": ["title", "author"] })
    );

    let matched = router.match_url("cat-id-props/books/42").unwrap();
    assert_eq!(matched.route().unwrap().index(), 3);
    assert!(matched.params().rest().unwrap().is_empty());
}

#[test]
fn test_regex_route() {
    let router = common::blog_router();
    let matched = router.match_url("regex/route").unwrap();
    assert_eq!(matched.route().unwrap().handler().action(), "regexRoute");
    assert!(matched.params().is_empty());
}

#[test]
fn test_callback_route() {
    let router = common::blog_router();

    let matched = router.match_url("callback-route").unwrap();
    assert_eq!(matched.route().unwrap().handler().action(), "callbackRoute");
    assert_eq!(matched.params().get("works"), Some(&json!(true)));

    // Falls through the callback to the last route.
    let matched = router.match_url("not-found").unwrap();
    assert_eq!(matched.route().unwrap().handler().action(), "notFound");
}

#[test]
fn test_route_data() {
    let router = common::blog_router();
    let matched = router.match_url("print-request").unwrap();
    assert_eq!(matched.data().unwrap()["print_args"], json!(true));

    let matched = router.match_url("nowhere").unwrap();
    assert!(matched.data().is_none());
}

#[test]
fn test_unmatched_invokes_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut registry = HandlerRegistry::new();
    registry.register(
        "Posts",
        ActionController::new().action("show", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Reply::text("post"))
        }),
    );

    let routes = vec![RouteConfig::path("posts/:id", "Posts::show")];
    let router = Router::from_config(&routes, &CallbackRegistry::new()).unwrap();
    let dispatcher = Dispatcher::new(Arc::new(registry));

    let request = RequestContext::new("/posts");
    let outcome = dispatcher.dispatch(router.match_url("posts").unwrap(), &request);
    assert!(matches!(outcome, Outcome::NotFound));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let request = RequestContext::new("/posts/1");
    let outcome = dispatcher.dispatch(router.match_url("posts/1").unwrap(), &request);
    assert!(matches!(outcome, Outcome::Dispatched(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_rest_not_last_fails_build() {
    let routes = vec![
        RouteConfig::path("ok", "A::b"),
        RouteConfig::path("cat/.../:id", "A::b"),
    ];
    let err = Router::from_config(&routes, &CallbackRegistry::new()).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.kind, RouteErrorKind::RestNotLast);
}
