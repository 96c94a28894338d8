use axum::{
    Router,
    routing::{any, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{ReadApiDoc, WriteApiDoc};
use crate::config::ServiceKind;
use crate::handlers::*;
use crate::routes;

/// Router for the requested service.
pub fn build_router(kind: ServiceKind) -> Router {
    match kind {
        ServiceKind::Read => read_router(),
        ServiceKind::Write => write_router(),
    }
}

/// GET-only endpoints over the fake item list.
pub fn read_router() -> Router {
    Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(routes::ITEMS, get(list_items_handler))
        .route(routes::ITEMS_NO_SLASH, any(add_trailing_slash))
        .route(routes::ITEM, get(read_item_handler))
        .route(routes::MODEL, get(model_handler))
        .route(routes::USER_ITEM, get(user_item_handler))
        .route(routes::REQUIRED_ITEM, get(read_required_item_handler))
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, ReadApiDoc::openapi()))
        .merge(Redoc::with_url(routes::REDOC, ReadApiDoc::openapi()))
        .fallback(strip_trailing_slash)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Request-body endpoints.
pub fn write_router() -> Router {
    Router::new()
        .route(routes::ITEMS, post(create_item_handler))
        .route(routes::ITEMS_NO_SLASH, any(add_trailing_slash))
        .route(routes::ITEM, put(update_item_handler))
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, WriteApiDoc::openapi()))
        .merge(Redoc::with_url(routes::REDOC, WriteApiDoc::openapi()))
        .fallback(strip_trailing_slash)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::get as get_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_read_openapi_lists_paths() {
        let (status, body) = get_json(read_router(), routes::OPENAPI).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["paths"].as_object().unwrap();
        for path in [
            routes::ROOT,
            routes::ITEMS,
            routes::ITEM,
            routes::MODEL,
            routes::USER_ITEM,
            routes::REQUIRED_ITEM,
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn test_write_openapi_lists_paths() {
        let (status, body) = get_json(write_router(), routes::OPENAPI).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"][routes::ITEMS]["post"].is_object());
        assert!(body["paths"][routes::ITEM]["put"].is_object());
    }

    async fn html_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_redoc_served_by_both_services() {
        for app in [read_router(), write_router()] {
            let (status, page) = html_page(app, routes::REDOC).await;
            assert_eq!(status, StatusCode::OK);
            assert!(page.to_lowercase().contains("redoc"));
        }
    }

    #[tokio::test]
    async fn test_redoc_embeds_service_document() {
        let (_, page) = html_page(read_router(), routes::REDOC).await;
        assert!(page.contains("/models/{model_name}"));

        let (_, page) = html_page(write_router(), routes::REDOC).await;
        assert!(page.contains("first-steps write API"));
    }

    #[tokio::test]
    async fn test_services_do_not_share_routes() {
        let (status, _) = get_json(build_router(ServiceKind::Write), "/models/alexnet").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_json(build_router(ServiceKind::Read), "/items/5").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_write_service_rejects_get_on_items() {
        let (status, _) = get_json(write_router(), "/items/5").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
