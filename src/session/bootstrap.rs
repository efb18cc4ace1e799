//! Pre-render session bootstrap.
//!
//! Both lookups are in flight at once and the join is all-or-nothing: the
//! first failure fails the bootstrap, and the caller discards the state.

use crate::api::AuthApi;
use crate::api::types::ApiError;

use super::SessionState;
use super::auth::{check_admin, check_auth};

/// Fill `state` from the Auth API before a page renders.
///
/// # Errors
///
/// Returns the first `ApiError` from either lookup. `state` may then hold a
/// partial result and must not be used.
pub async fn bootstrap(api: &dyn AuthApi, state: &mut SessionState) -> Result<(), ApiError> {
    let SessionState { auth, admin } = state;
    tokio::try_join!(check_auth(api, auth), check_admin(api, admin))?;
    tracing::debug!(user = auth.is_present(), admin = admin.is_present(), "session bootstrapped");
    Ok(())
}

/// Build and fill a fresh `SessionState` for one request.
///
/// # Errors
///
/// See [`bootstrap`].
pub async fn load_session(api: &dyn AuthApi) -> Result<SessionState, ApiError> {
    let mut state = SessionState::new();
    bootstrap(api, &mut state).await?;
    Ok(state)
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
