//! Routes and handlers for the album API.
//!
//! - `GET  /albums`     list every album in order
//! - `GET  /albums/:id` first album with a matching id, or 404
//! - `POST /albums`     append an album decoded from the body
//! - `GET  /api/`       liveness ping
//!
//! `/albums/` and `/api` redirect to their canonical paths, and a method a
//! route does not register answers 404 rather than 405. Anything else falls
//! through to the static asset directory, if one is configured.

use std::path::Path;

use albums_catalog::{Album, AlbumStore};
use axum::body::Bytes;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::response::IndentedJson;

/// Build the complete application router around `store`.
pub fn router(store: AlbumStore, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/albums", get(list_albums).post(create_album).fallback(not_found))
        .route(
            "/albums/",
            get(|| async { redirect(StatusCode::MOVED_PERMANENTLY, "/albums") })
                .post(|| async { redirect(StatusCode::TEMPORARY_REDIRECT, "/albums") })
                .fallback(not_found),
        )
        .route("/albums/:id", get(get_album).fallback(not_found))
        .route("/api/", get(ping).fallback(not_found))
        .route(
            "/api",
            get(|| async { redirect(StatusCode::MOVED_PERMANENTLY, "/api/") })
                .fallback(not_found),
        )
        .with_state(store);

    if let Some(dir) = static_dir {
        debug!("Serving static assets from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    with_middleware(router)
}

/// Request tracing, and a 500 instead of a dropped connection when a
/// handler panics.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn redirect(status: StatusCode, location: &'static str) -> impl IntoResponse {
    (status, [(header::LOCATION, location)])
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}

async fn list_albums(State(store): State<AlbumStore>) -> IndentedJson<Vec<Album>> {
    let albums = store.list().await;
    debug!("Listing {} albums", albums.len());
    IndentedJson::ok(albums)
}

async fn get_album(
    State(store): State<AlbumStore>,
    UrlPath(id): UrlPath<String>,
) -> Result<IndentedJson<Album>, ApiError> {
    let album = store.get(&id).await;
    match album {
        Some(album) => Ok(IndentedJson::ok(album)),
        None => Err(ApiError::AlbumNotFound { id }),
    }
}

/// The body is decoded as JSON whatever its declared content type. See
/// [`Album::from_json_slice`] for what is accepted.
async fn create_album(
    State(store): State<AlbumStore>,
    body: Bytes,
) -> Result<IndentedJson<Album>, ApiError> {
    let album = Album::from_json_slice(&body)?;
    let created = store.create(album).await;
    info!("Created album {} ({})", created.id, created.title);
    Ok(IndentedJson::created(created))
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
