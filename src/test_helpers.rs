//! Shared fixtures for unit tests: sample session records, a scripted
//! `AuthApi` mock, and a throwaway local upstream server.

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;

use crate::api::AuthApi;
use crate::api::types::{ApiError, Logout, SessionAdmin, SessionUser};

#[must_use]
pub fn sample_user() -> SessionUser {
    SessionUser {
        id: "u1".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        image: "/img/u1.png".into(),
        department_id: "d7".into(),
        role: "student".into(),
    }
}

#[must_use]
pub fn sample_admin() -> SessionAdmin {
    SessionAdmin { id: 1, username: "root".into(), created_at: "2024-08-16T10:00:00.000Z".into() }
}

/// Scripted reply for one mock endpoint.
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail(u16),
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T, ApiError> {
        match self {
            Self::Ok(v) => Ok(v.clone()),
            Self::Fail(status) => Err(ApiError::Status { status: *status, body: String::new() }),
        }
    }
}

/// `AuthApi` mock with fixed replies and per-endpoint call counters.
pub struct MockAuthApi {
    pub auth: Reply<Option<SessionUser>>,
    pub admin: Reply<Option<SessionAdmin>>,
    pub logout: Reply<Logout>,
    pub auth_calls: AtomicUsize,
    pub admin_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
}

impl MockAuthApi {
    #[must_use]
    pub fn new(auth: Reply<Option<SessionUser>>, admin: Reply<Option<SessionAdmin>>) -> Self {
        Self {
            auth,
            admin,
            logout: Reply::Ok(Logout { message: "Signed out".into(), set_cookies: Vec::new() }),
            auth_calls: AtomicUsize::new(0),
            admin_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_logout(mut self, logout: Reply<Logout>) -> Self {
        self.logout = logout;
        self
    }
}

#[async_trait::async_trait]
impl AuthApi for MockAuthApi {
    async fn fetch_auth(&self) -> Result<Option<SessionUser>, ApiError> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        self.auth.get()
    }

    async fn fetch_admin(&self) -> Result<Option<SessionAdmin>, ApiError> {
        self.admin_calls.fetch_add(1, Ordering::SeqCst);
        self.admin.get()
    }

    async fn logout(&self) -> Result<Logout, ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.logout.get()
    }
}

/// Records every navigation target it is asked to visit.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Vec<String>,
}

impl crate::session::auth::Navigator for RecordingNavigator {
    fn navigate(&mut self, to: &str) {
        self.visits.push(to.to_owned());
    }
}

/// Serve `router` on an ephemeral local port and return its origin.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("upstream server failed");
    });
    format!("http://{addr}")
}
