use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use newsdesk_core::content::{CollectionItem, NewsItem, TrendingItem, VideoItem};

use crate::{
    handlers::{
        articles::{filename_required, get_article, put_article},
        collections::{create, delete, get_item, id_required, list_items, update},
        fallback::{method_not_allowed, not_found, timeout_body},
        health::{livez, readyz},
        subscribe::subscribe,
        upload::{upload, upload_typed},
    },
    state::AppState,
};

/// Routes for one content collection, mounted at `/{resource}`.
fn collection_routes<T: CollectionItem>() -> Router<AppState> {
    let resource = T::KIND.resource();

    let item = get(get_item::<T>)
        .put(update::<T>)
        .delete(delete::<T>)
        .fallback(method_not_allowed);

    Router::new()
        .route(
            &format!("/{resource}"),
            get(list_items::<T>)
                .post(create::<T>)
                .put(id_required)
                .delete(id_required)
                .fallback(method_not_allowed),
        )
        .route(&format!("/{resource}/{{id}}"), item.clone())
        .route(&format!("/{resource}/{{id}}/{{*sub}}"), item)
}

/// The router wrapped so that `/api/news/` routes like `/api/news`.
pub type App = NormalizePath<Router>;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> App {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let article = get(get_article)
        .put(put_article)
        .fallback(method_not_allowed);

    let api_routes = Router::new()
        .merge(collection_routes::<NewsItem>())
        .merge(collection_routes::<VideoItem>())
        .merge(collection_routes::<TrendingItem>())
        // Article routes
        .route("/articles", any(filename_required))
        .route("/articles/{filename}", article.clone())
        .route("/articles/{filename}/{*sub}", article)
        .route("/subscribe", post(subscribe).fallback(method_not_allowed))
        .route("/upload", post(upload).fallback(method_not_allowed))
        .route("/upload/{type}", post(upload_typed).fallback(method_not_allowed))
        .layer(cors);

    let router = Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(middleware::map_response(timeout_body))
        .with_state(state);

    // Path normalization has to run before routing, so it wraps the router.
    NormalizePath::trim_trailing_slash(router)
}
