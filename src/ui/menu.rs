//! Mobile navigation menu state.
//!
//! Purely presentational; nothing else reads it. The open/closed flag is
//! kept in a cookie so the no-script toggle endpoints can flip it between
//! renders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const MENU_COOKIE_NAME: &str = "mobile_menu";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub is_open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        let is_open = jar.get(MENU_COOKIE_NAME).is_some_and(|c| c.value() == "open");
        Self { is_open }
    }

    #[must_use]
    pub fn to_cookie(self, secure: bool) -> Cookie<'static> {
        let value = if self.is_open { "open" } else { "closed" };
        Cookie::build((MENU_COOKIE_NAME, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure)
            .build()
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
