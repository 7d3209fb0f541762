pub mod page;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{RegistryFilter, StudentFilter};
use crate::state::AppState;
use crate::views::Layout;

pub use page::Page;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/pages/{page}", get(load_page))
        .route("/fecha/buscar", post(search_registry))
        .route("/fecha/borrar", post(clear_registry))
        .route("/fecha/siguiente", post(next_registry_page))
        .route("/fecha/anterior", post(previous_registry_page))
        .route("/fecha/excel", get(export_registry))
        .route("/estudiantes/buscar", post(search_students))
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/pages/dashboard")
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn load_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Ok(page) = slug.parse::<Page>() else {
        warn!("unknown page requested: {}", slug);
        let html = render_shell(&state, None, state.views.missing()?)?;
        return Ok((StatusCode::NOT_FOUND, Html(html)).into_response());
    };

    info!("loading page {}", page.slug());
    let content = match page {
        Page::Dashboard => state.views.dashboard(&state.dashboard.init().await)?,
        Page::Fecha => {
            state.registry.init().await;
            state.views.registry(&state.registry.page())?
        }
        Page::Estudiantes => state.views.students(&state.students.init().await)?,
    };

    Ok(Html(render_shell(&state, Some(page), content)?).into_response())
}

async fn search_registry(
    State(state): State<AppState>,
    Form(filter): Form<RegistryFilter>,
) -> Result<Html<String>, AppError> {
    state.registry.apply(filter).await;
    registry_screen(&state)
}

async fn clear_registry(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.registry.clear().await;
    registry_screen(&state)
}

async fn next_registry_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.registry.next().await;
    registry_screen(&state)
}

async fn previous_registry_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    state.registry.previous().await;
    registry_screen(&state)
}

async fn export_registry(State(state): State<AppState>) -> Result<Response, AppError> {
    let link = state.registry.export()?;
    match state.client.download(&link).await {
        Ok(download) => {
            let disposition = attachment(&download.filename);
            Ok((
                [
                    (header::CONTENT_TYPE, download.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                download.bytes,
            )
                .into_response())
        }
        // the notice is shown on the registry screen
        Err(e) if e.is_auth() => Ok(Redirect::to("/pages/fecha").into_response()),
        Err(e) => Err(e),
    }
}

async fn search_students(
    State(state): State<AppState>,
    Form(filter): Form<StudentFilter>,
) -> Result<Html<String>, AppError> {
    let page = state.students.search(filter).await;
    let content = state.views.students(&page)?;
    Ok(Html(render_shell(&state, Some(Page::Estudiantes), content)?))
}

fn registry_screen(state: &AppState) -> Result<Html<String>, AppError> {
    let content = state.views.registry(&state.registry.page())?;
    Ok(Html(render_shell(state, Some(Page::Fecha), content)?))
}

/// `Content-Disposition` value; quotes, backslashes and control characters
/// in the name cannot break out of the quoted string.
fn attachment(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '"' || c == '\\' { '_' } else { c })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

fn render_shell(state: &AppState, page: Option<Page>, content: String) -> Result<String, AppError> {
    let notices = state
        .notices
        .drain()
        .into_iter()
        .map(|notice| notice.to_string())
        .collect();

    state.views.layout(&Layout {
        title: page.map(Page::title).unwrap_or("Cafetería"),
        active: page.map(Page::slug).unwrap_or_default(),
        nav: page::nav(),
        notices,
        content,
    })
}
