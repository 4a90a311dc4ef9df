use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tokio::time::MissedTickBehavior;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::AppState;
use crate::chat::{ChatSession, HttpReplyClient, Ignored, Mode, ReplyService, SessionStore};
use crate::config::AppConfig;
use crate::ui::{Theme, ViewContext, chat::chat_area, pages};

/// Cookie holding the chat session id.
pub const SESSION_COOKIE: &str = "ilmai_session";

/// Cookie holding the chosen theme.
pub const THEME_COOKIE: &str = "ilmai_theme";

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let config = Arc::new(config);

    let replies: Arc<dyn ReplyService> = Arc::new(
        HttpReplyClient::new(&config.reply.base_url).context("invalid reply service URL")?,
    );
    let sessions = SessionStore::new(replies, config.ui.session_defaults());
    spawn_session_sweeper(sessions.clone(), config.ui.session_timeout());

    let state = AppState {
        sessions,
        config: Arc::clone(&config),
    };
    let app = build_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        name: "server.started",
        address = %addr,
        reply_url = %config.reply.base_url,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(chat_page_handler))
        .route("/home", get(landing_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/chat/area", get(chat_area_handler))
        .route("/chat/messages", post(submit_handler))
        .route("/chat/mode", post(select_mode_handler))
        .route("/chat/new", post(new_chat_handler))
        .route("/theme", post(toggle_theme_handler))
        .route("/health", get(|| async { "ok" }))
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drop idle sessions.
fn spawn_session_sweeper(sessions: SessionStore, timeout: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = sessions.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                debug!(removed, remaining = sessions.len(), "Expired sessions swept");
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Request helpers
// ─────────────────────────────────────────────────────────────────────────────

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

fn theme_from(jar: &CookieJar, config: &AppConfig) -> Theme {
    jar.get(THEME_COOKIE)
        .and_then(|cookie| Theme::from_str(cookie.value()).ok())
        .unwrap_or(config.ui.default_theme)
}

/// Site-wide cookie without an expiry; the browser drops it at the end of
/// its session.
fn site_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Resolve the caller's session, issuing a new cookie when it was unknown.
fn session_from(state: &AppState, jar: CookieJar) -> (CookieJar, ChatSession) {
    let requested = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string());
    let session = state.sessions.get_or_create(requested.as_deref());
    session.touch();

    let jar = if requested.as_deref() == Some(session.id()) {
        jar
    } else {
        jar.add(site_cookie(SESSION_COOKIE, session.id().to_string()))
    };
    (jar, session)
}

/// Answer a chat action: the fresh chat area for HTMX, a redirect otherwise.
fn chat_response(state: &AppState, jar: CookieJar, headers: &HeaderMap, session: &ChatSession) -> Response {
    if is_htmx(headers) {
        let html = render_chat_area(state, &jar, session);
        (jar, Html(html)).into_response()
    } else {
        (jar, Redirect::to("/")).into_response()
    }
}

fn render_chat_area(state: &AppState, jar: &CookieJar, session: &ChatSession) -> String {
    let ctx = ViewContext::new(theme_from(jar, &state.config), session.active_mode());
    let notification = session.take_notification();
    chat_area(ctx, &session.snapshot(), notification.as_ref())
}

/// Only same-site absolute paths are followed after a theme switch.
fn safe_return_path(path: Option<&str>) -> &str {
    match path {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p,
        _ => "/",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Chat page.
async fn chat_page_handler(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, session) = session_from(&state, jar);
    let ctx = ViewContext::new(theme_from(&jar, &state.config), session.active_mode());
    let notification = session.take_notification();
    let html = pages::chat_page(ctx, &session.snapshot(), notification.as_ref());
    (jar, Html(html))
}

/// GET /home - Landing page.
async fn landing_handler(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    Html(pages::landing_page(theme_from(&jar, &state.config), "/home"))
}

/// GET /dashboard - Dashboard page.
async fn dashboard_handler(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    Html(pages::dashboard_page(theme_from(&jar, &state.config)))
}

async fn not_found_handler(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found_page(theme_from(&jar, &state.config))),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /chat/area - Chat area fragment, polled while a reply is outstanding.
async fn chat_area_handler(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, session) = session_from(&state, jar);
    let html = render_chat_area(&state, &jar, &session);
    (jar, Html(html))
}

#[derive(Debug, Deserialize)]
struct MessageForm {
    #[serde(default)]
    message: String,
}

/// POST /chat/messages - Submit a message.
///
/// The reply is fetched on its own task. HTMX callers get the chat area
/// back right away and poll for the reply; plain form posts wait for the
/// task, then redirect.
async fn submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<MessageForm>,
) -> Response {
    let (jar, session) = session_from(&state, jar);

    match session.begin_submit(&form.message) {
        Ok(pending) => {
            // The reply task outlives the request if the client goes away.
            let settle = tokio::spawn(pending.settle());
            if !is_htmx(&headers)
                && let Err(err) = settle.await
            {
                error!(session_id = %session.id(), error = %err, "Reply task failed");
            }
        }
        // Keep the draft so the user can send it once the reply lands.
        Err(Ignored::RequestInFlight) => session.set_input(form.message),
        Err(Ignored::EmptyInput) => {}
    }

    chat_response(&state, jar, &headers, &session)
}

#[derive(Debug, Deserialize)]
struct ModeForm {
    mode: String,
}

/// POST /chat/mode - Switch the active mode.
async fn select_mode_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ModeForm>,
) -> Response {
    let mode = match Mode::from_str(&form.mode) {
        Ok(mode) => mode,
        Err(err) => {
            warn!(requested = %form.mode, "Rejected mode selection");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let (jar, session) = session_from(&state, jar);
    session.select_mode(mode);
    chat_response(&state, jar, &headers, &session)
}

/// POST /chat/new - Discard the current conversation and start a new one.
async fn new_chat_handler(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value());
    }
    let session = state.sessions.create();
    let jar = jar.add(site_cookie(SESSION_COOKIE, session.id().to_string()));
    chat_response(&state, jar, &headers, &session)
}

#[derive(Debug, Deserialize)]
struct ThemeForm {
    return_to: Option<String>,
}

/// POST /theme - Flip between light and dark.
async fn toggle_theme_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ThemeForm>,
) -> (CookieJar, Redirect) {
    let theme = theme_from(&jar, &state.config).toggled();
    debug!(theme = %theme, "Theme toggled");
    let jar = jar.add(site_cookie(THEME_COOKIE, theme.as_str().to_string()));
    (jar, Redirect::to(safe_return_path(form.return_to.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_path_stays_on_site() {
        assert_eq!(safe_return_path(Some("/home")), "/home");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(None), "/");
    }

    #[test]
    fn site_cookie_is_scoped_and_unexpiring() {
        let cookie = site_cookie(SESSION_COOKIE, "abc".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert!(cookie.max_age().is_none());
        assert!(cookie.expires().is_none());
    }

    #[test]
    fn detects_htmx_requests() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("hx-request", "true".parse().unwrap());
        assert!(is_htmx(&headers));
    }
}
