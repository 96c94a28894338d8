use crate::routes;
use axum::{
    extract::RawQuery,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};

/// Sends `/items` to the canonical `/items/`, keeping the query string.
pub async fn add_trailing_slash(RawQuery(query): RawQuery) -> Redirect {
    match query {
        Some(query) => Redirect::temporary(&format!("{}?{}", routes::ITEMS, query)),
        None => Redirect::temporary(routes::ITEMS),
    }
}

/// Router fallback: an unmatched path ending in `/` is retried without it.
///
/// The redirect target is not checked against the route table, so an unknown
/// path answers 307 and then 404.
pub async fn strip_trailing_slash(uri: Uri) -> Response {
    let path = uri.path();
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => {
            let target = match uri.query() {
                Some(query) => format!("{}?{}", trimmed, query),
                None => trimmed.to_string(),
            };
            tracing::debug!("Redirecting {} to {}", path, target);
            Redirect::temporary(&target).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{read_router, write_router};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_redirect_keeps_query() {
        let response = send(read_router(), "GET", "/items?skip=1").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/items/?skip=1");
    }

    #[tokio::test]
    async fn test_redirect_on_write_service() {
        let response = write_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"A","price":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/items/");
    }

    #[tokio::test]
    async fn test_extra_slash_is_stripped() {
        let response = send(read_router(), "GET", "/items/foo/?short=1").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/items/foo?short=1");

        let response = send(read_router(), "GET", "/models/alexnet/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/models/alexnet");
    }

    #[tokio::test]
    async fn test_extra_slash_on_write_service() {
        let response = send(write_router(), "PUT", "/items/5/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/items/5");
    }

    #[tokio::test]
    async fn test_unknown_path_without_slash_is_not_found() {
        let response = send(read_router(), "GET", "/nowhere").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_canonical_collection_path_is_served() {
        let response = send(read_router(), "GET", "/items/").await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
