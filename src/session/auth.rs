//! Session refresh and logout over the Auth API.
//!
//! ERROR HANDLING
//! ==============
//! Every `ApiError` is returned to the caller untouched. An absent payload
//! is a successful answer and simply empties the slot.

use crate::api::AuthApi;
use crate::api::types::{ApiError, SessionAdmin, SessionUser};
use crate::ui::notice::Notice;

use super::{SessionState, Slot};

/// Where the visitor lands after logging out.
pub const AFTER_LOGOUT_PATH: &str = "/";

/// What a successful logout leaves behind for the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedOut {
    pub notice: Notice,
    /// `Set-Cookie` values from the Auth API, relayed to the browser.
    pub set_cookies: Vec<String>,
}

/// Client-side navigation sink.
pub trait Navigator {
    fn navigate(&mut self, to: &str);
}

/// `GET /api/auth` and store the answer in the `auth` slot.
///
/// # Errors
///
/// Propagates any transport, status, or decode failure. The slot is left
/// unchanged in that case.
pub async fn check_auth(api: &dyn AuthApi, slot: &mut Slot<SessionUser>) -> Result<(), ApiError> {
    let user = api.fetch_auth().await?;
    slot.set(user);
    Ok(())
}

/// `GET /api/admin` and store the answer in the `admin` slot.
///
/// # Errors
///
/// Propagates any transport, status, or decode failure. The slot is left
/// unchanged in that case.
pub async fn check_admin(api: &dyn AuthApi, slot: &mut Slot<SessionAdmin>) -> Result<(), ApiError> {
    let admin = api.fetch_admin().await?;
    slot.set(admin);
    Ok(())
}

/// Log out: clear the signed-in user, navigate home once, and hand back the
/// success notice built from the server's message.
///
/// The `admin` slot is not touched.
///
/// # Errors
///
/// Propagates the Auth API failure; nothing is cleared and no navigation
/// happens in that case.
pub async fn logout<N: Navigator + ?Sized>(
    api: &dyn AuthApi,
    state: &mut SessionState,
    navigator: &mut N,
) -> Result<LoggedOut, ApiError> {
    let reply = api.logout().await?;
    state.auth.clear();
    navigator.navigate(AFTER_LOGOUT_PATH);
    tracing::info!("session logged out");
    Ok(LoggedOut { notice: Notice::success(reply.message), set_cookies: reply.set_cookies })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
