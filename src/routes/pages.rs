//! Page routes: home, admin, logout, and the mobile menu toggles.

use axum::Extension;
use axum::extract::State;
use axum::http::header::{REFERER, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::session::SessionState;
use crate::session::auth::{self, Navigator};
use crate::state::AppState;
use crate::ui::menu::MobileMenu;
use crate::ui::notice::take_flash;
use crate::views::{self, Chrome};

use super::middleware::bad_gateway_page;

/// Consume the flash notice and read the menu flag for this render.
fn chrome(jar: CookieJar) -> (CookieJar, Chrome) {
    let menu = MobileMenu::from_jar(&jar);
    let (jar, notice) = take_flash(jar);
    (jar, Chrome { menu, notice })
}

/// `GET /` — home page.
pub async fn home(Extension(session): Extension<SessionState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, chrome) = chrome(jar);
    (jar, Html(views::home_page(&session, chrome)))
}

/// `GET /admin` — public admin landing page.
pub async fn admin_landing(Extension(session): Extension<SessionState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, chrome) = chrome(jar);
    (jar, Html(views::admin_landing_page(&session, chrome)))
}

/// `GET /admin/dashboard` — admin-only. The `admin_only` guard owns the
/// redirect; reaching here without an admin means the route was mounted
/// outside it.
pub async fn admin_dashboard(Extension(session): Extension<SessionState>, jar: CookieJar) -> Response {
    let Some(admin) = session.admin().cloned() else {
        tracing::error!("admin dashboard reached without an admin session");
        return (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page(500, "Admin session missing")))
            .into_response();
    };
    let (jar, chrome) = chrome(jar);
    (jar, Html(views::admin_dashboard_page(&session, &admin, chrome))).into_response()
}

// =============================================================================
// LOGOUT
// =============================================================================

/// Turns the logout navigation into the redirect of this response.
#[derive(Default)]
struct RedirectNavigator {
    target: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, to: &str) {
        self.target = Some(to.to_owned());
    }
}

/// `GET /logout` — sign out via the Auth API, then redirect home with a
/// flash notice carrying the server's message. Runs without a bootstrapped
/// session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Response {
    let api = state.api_for(&headers);
    let mut session = SessionState::new();
    let mut navigator = RedirectNavigator::default();

    let out = match auth::logout(&api, &mut session, &mut navigator).await {
        Ok(out) => out,
        Err(e) => {
            tracing::error!(error = %e, "logout failed");
            return bad_gateway_page();
        }
    };

    let target = navigator.target.unwrap_or_else(|| auth::AFTER_LOGOUT_PATH.to_owned());
    let jar = jar.add(out.notice.to_flash_cookie(state.config.cookie_secure));
    let mut resp = (jar, Redirect::to(&target)).into_response();
    for raw in out.set_cookies {
        match HeaderValue::from_str(&raw) {
            Ok(value) => {
                resp.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "dropping invalid upstream set-cookie"),
        }
    }
    resp
}

// =============================================================================
// MOBILE MENU
// =============================================================================

/// `POST /ui/mobile-menu/toggle`.
pub async fn toggle_menu(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> (CookieJar, Redirect) {
    let mut menu = MobileMenu::from_jar(&jar);
    menu.toggle();
    let jar = jar.add(menu.to_cookie(state.config.cookie_secure));
    (jar, Redirect::to(&back_path(&headers)))
}

/// `POST /ui/mobile-menu/close`.
pub async fn close_menu(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> (CookieJar, Redirect) {
    let mut menu = MobileMenu::from_jar(&jar);
    menu.close();
    let jar = jar.add(menu.to_cookie(state.config.cookie_secure));
    (jar, Redirect::to(&back_path(&headers)))
}

/// Local path of the referring page, or `/`. Never an off-site URL.
pub(crate) fn back_path(headers: &HeaderMap) -> String {
    let Some(referer) = headers.get(REFERER).and_then(|v| v.to_str().ok()) else {
        return "/".to_owned();
    };
    let path = match referer.find("://") {
        Some(idx) => {
            let rest = &referer[idx + 3..];
            rest.find('/').map_or("/", |slash| &rest[slash..])
        }
        None => referer,
    };
    if path.starts_with('/') && !path.starts_with("//") { path.to_owned() } else { "/".to_owned() }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
