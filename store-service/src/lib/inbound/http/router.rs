use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::create_review::create_review;
use super::handlers::create_user::create_user;
use super::handlers::delete_product::delete_product;
use super::handlers::list_products::list_products;
use super::handlers::list_reviews::list_reviews;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::handlers::root::root;
use super::middleware::authenticate as auth_middleware;
use crate::domain::product::service::ProductService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::MongoProductRepository;
use crate::outbound::repositories::MongoUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<MongoUserRepository>>,
    pub product_service: Arc<ProductService<MongoProductRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<MongoUserRepository>>,
    product_service: Arc<ProductService<MongoProductRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        product_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/login", post(login))
        .route("/users", get(list_users).post(create_user))
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", delete(delete_product))
        .route(
            "/products/:id/reviews",
            get(list_reviews).post(create_review),
        );

    let protected_routes = Router::new()
        .route("/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use mongodb::Client;
    use tower::ServiceExt;

    use super::*;

    // The Mongo client connects lazily, so building the router does not
    // need a running database; these requests are rejected before any
    // repository call.
    async fn test_router() -> Router {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let database = client.database("test");

        let user_repository = Arc::new(MongoUserRepository::new(&database));
        let product_repository = Arc::new(MongoProductRepository::new(&database));

        create_router(
            Arc::new(UserService::new(user_repository)),
            Arc::new(ProductService::new(product_repository)),
            Arc::new(Authenticator::new(b"test_secret_key_at_least_32_bytes!")),
        )
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_wrong_typed_review_rating_is_bad_request() {
        let router = test_router().await;

        let status = post_json(
            router,
            "/products/0123456789abcdef01234567/reviews",
            r#"{"user":"alice","rating":"5","comment":"ok"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_login_body_is_bad_request() {
        let router = test_router().await;

        let status = post_json(router, "/login", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_typed_user_email_is_bad_request() {
        let router = test_router().await;

        let status = post_json(router, "/users", r#"{"email":42,"password":"pw"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
