//! # HTTP handlers
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`home`] |
//! | POST | `/toggle` | [`toggle`] |
//! | POST | `/clear-comments` | [`clear_comments`] |
//! | GET/POST | `/login` | [`login_form`], [`login`] |
//! | GET | `/logout` | [`logout`] |
//! | GET/POST | `/comments` | [`list_comments`], [`post_comment`] |
//! | GET | `/profile` | [`profile`] |
//! | POST | `/change-email` | [`change_email`] |
//! | GET | `/attacker` | [`attacker`] |
//!
//! Redirects are `302 Found`. Several handlers are insecure on purpose: `/clear-comments`
//! has no access control, `/change-email` skips the token check while the session's CSRF
//! flag is on and follows any `next` path that starts with `/`.

use api::comments::resolve_author;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{AppendHeaders, Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use serde_json::Value;
use tower_sessions::cookie::Cookie;
use tower_sessions::Session;

use crate::error::AppError;
use crate::extract::{DemoSession, FormOrJson};
use crate::state::AppState;

/// Cookie cleared by `/clear-comments` and `/logout`.
pub const DEMO_COOKIE: &str = "insecure_demo";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/toggle", post(toggle))
        .route("/clear-comments", post(clear_comments))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .route("/comments", get(list_comments).post(post_comment))
        .route("/profile", get(profile))
        .route("/change-email", post(change_email))
        .route("/attacker", get(attacker))
}

/// Bytes escaped in a `Location` value. Everything else URL syntax allows is kept,
/// including reserved characters and existing `%XX` escapes.
const LOCATION_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a redirect target so it is always a valid header value.
/// A `%` that does not start a valid escape becomes `%25`.
fn encode_location(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    let mut rest = target;
    while let Some(pos) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..pos], LOCATION_ESCAPES));
        let escape = rest.as_bytes().get(pos + 1..pos + 3);
        if escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            out.push('%');
        } else {
            out.push_str("%25");
        }
        rest = &rest[pos + 1..];
    }
    out.extend(utf8_percent_encode(rest, LOCATION_ESCAPES));
    out
}

/// `302 Found` to `location`.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, encode_location(location))]).into_response()
}

/// `Set-Cookie` header that expires the demo cookie.
fn expire_demo_cookie() -> AppendHeaders<[(header::HeaderName, String); 1]> {
    let mut cookie = Cookie::new(DEMO_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    AppendHeaders([(header::SET_COOKIE, cookie.to_string())])
}

/// Checkbox semantics: only the string `"on"` counts as checked. A repeated field
/// arrives as an array and is therefore off, as are JSON booleans.
fn is_on(field: Option<&Value>) -> bool {
    matches!(field, Some(Value::String(value)) if value == "on")
}

/// The `next` target honoured by `/change-email`: any non-empty path starting with `/`.
///
/// Protocol-relative values such as `//evil.example` pass this check; that open
/// redirect is part of the demo.
pub fn redirect_target(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/'))
}

async fn home(session: DemoSession) -> Html<String> {
    let data = &session.data;
    Html(ui::render_home(
        data.xss_vulnerable,
        data.csrf_vulnerable,
        data.user(),
    ))
}

#[derive(Debug, Deserialize)]
struct ToggleForm {
    xssvuln: Option<Value>,
    csrfvuln: Option<Value>,
}

async fn toggle(
    mut session: DemoSession,
    FormOrJson(form): FormOrJson<ToggleForm>,
) -> Result<Response, AppError> {
    session.data.set_toggles(is_on(form.xssvuln.as_ref()), is_on(form.csrfvuln.as_ref()));
    session.save().await?;
    tracing::info!(
        "Toggles set: xss_vulnerable={} csrf_vulnerable={}",
        session.data.xss_vulnerable,
        session.data.csrf_vulnerable
    );
    Ok(found("/"))
}

async fn clear_comments(State(state): State<AppState>) -> Response {
    state.comments.clear();
    tracing::info!("Comment board cleared");
    (expire_demo_cookie(), found("/")).into_response()
}

async fn login_form() -> Html<String> {
    Html(ui::render_login(""))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login(
    State(state): State<AppState>,
    mut session: DemoSession,
    FormOrJson(form): FormOrJson<LoginForm>,
) -> Result<Html<String>, AppError> {
    match state
        .users
        .find_by_credentials(&form.username, &form.password)
        .await
    {
        Ok(Some(user)) => {
            session.data.log_in(&user);
            session.save().await?;
            tracing::info!("User {} logged in with role {}", user.username, user.role);
            Ok(Html(ui::render_login_result(&user.username)))
        }
        Ok(None) => {
            tracing::warn!("Failed login for {}", form.username);
            Ok(Html(ui::render_login("Login failed")))
        }
        Err(e) => {
            tracing::error!("Login error: {}", e);
            Ok(Html(ui::render_login("Error during login")))
        }
    }
}

async fn logout(session: Session) -> Result<Response, AppError> {
    session.flush().await.map_err(api::ApiError::from)?;
    Ok((expire_demo_cookie(), found("/")).into_response())
}

async fn list_comments(State(state): State<AppState>, session: DemoSession) -> Html<String> {
    let data = &session.data;
    Html(ui::render_comments(
        state.comments.list(),
        data.xss_vulnerable,
        data.user(),
    ))
}

#[derive(Debug, Deserialize)]
struct CommentForm {
    text: Option<String>,
    author: Option<String>,
}

async fn post_comment(
    State(state): State<AppState>,
    session: DemoSession,
    FormOrJson(form): FormOrJson<CommentForm>,
) -> Response {
    let author = resolve_author(session.data.user(), form.author.as_deref());
    let comment = state
        .comments
        .post(author, form.text.unwrap_or_default());
    tracing::info!("Comment #{} posted by {}", comment.id, comment.author);
    found("/comments")
}

async fn profile(mut session: DemoSession) -> Result<Response, AppError> {
    let Some(user) = session.data.user().map(str::to_string) else {
        return Ok(found("/login"));
    };

    if session.data.csrf_protected() && session.data.csrf_token.is_none() {
        session.data.ensure_csrf_token();
        session.save().await?;
    }

    let data = &session.data;
    let html = ui::render_profile(
        &user,
        data.display_email(),
        data.csrf_vulnerable,
        data.csrf_token.as_deref().unwrap_or_default(),
    );
    Ok(Html(html).into_response())
}

#[derive(Debug, Deserialize)]
struct ChangeEmailForm {
    email: Option<String>,
    #[serde(rename = "csrfToken")]
    csrf_token: Option<String>,
    next: Option<String>,
}

async fn change_email(
    mut session: DemoSession,
    FormOrJson(form): FormOrJson<ChangeEmailForm>,
) -> Result<Response, AppError> {
    if !session.data.is_authenticated() {
        return Err(AppError::LoginRequired);
    }

    if let Err(rejected) = session.data.check_csrf(form.csrf_token.as_deref()) {
        tracing::warn!(
            "Rejected email change for {}: {}",
            session.data.user().unwrap_or_default(),
            rejected
        );
        return Err(rejected.into());
    }

    let email = form.email.unwrap_or_default();
    tracing::info!(
        "Email for {} changed to {}",
        session.data.user().unwrap_or_default(),
        email
    );
    session.data.email = Some(email);
    session.save().await?;

    Ok(found(redirect_target(form.next.as_deref()).unwrap_or("/profile")))
}

async fn attacker() -> Html<String> {
    Html(ui::render_attacker())
}
