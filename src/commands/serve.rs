use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, FromRef, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::Paste;
use crate::store::{paste_url, AppStore};
use crate::types::api::{CreatePaste, PasteCreated, PasteDeleted, PasteExists};

/// Usage instructions served at the root path.
const USAGE: &str = include_str!("../../assets/usage.txt");

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub store: AppStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/pastes", post(create_paste))
        .route("/api/pastes/:code", get(get_paste).delete(delete_paste))
        .route("/api/pastes/:code/exists", get(paste_exists))
        .route("/paste/:code", get(get_paste_raw))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            state.config.limits.max_content_size,
        ))
        .layer(TraceLayer::new_for_http())
        .route_layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(state)
}

pub async fn run(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));
    let app = router(state);

    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn index() -> &'static str {
    USAGE
}

async fn create_paste(
    State(config): State<Config>,
    State(mut store): State<AppStore>,
    Json(request): Json<CreatePaste>,
) -> crate::ApiResult<impl IntoResponse> {
    let paste = store.create_paste(&request.content).await?;

    let path = format!("/paste/{code}", code = paste.code);
    let url = paste_url(&config.base_url, &paste.code);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, path)],
        Json(PasteCreated {
            code: paste.code,
            url,
            created_at: paste.created_at,
        }),
    ))
}

async fn get_paste(
    State(mut store): State<AppStore>,
    Path(code): Path<String>,
) -> crate::ApiResult<Json<Paste>> {
    let paste = store.get_paste(&code).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(paste))
}

// share-link target: the stored text, nothing else
async fn get_paste_raw(
    State(mut store): State<AppStore>,
    Path(code): Path<String>,
) -> crate::ApiResult<String> {
    let paste = store.get_paste(&code).await?.ok_or(ApiError::NotFound)?;
    Ok(paste.content)
}

async fn paste_exists(
    State(mut store): State<AppStore>,
    Path(code): Path<String>,
) -> crate::ApiResult<Json<PasteExists>> {
    let exists = store.paste_exists(&code).await?;
    Ok(Json(PasteExists { exists }))
}

async fn delete_paste(
    State(mut store): State<AppStore>,
    Path(code): Path<String>,
) -> crate::ApiResult<Json<PasteDeleted>> {
    let deleted = store.delete_paste(&code).await?;
    Ok(Json(PasteDeleted { deleted }))
}
