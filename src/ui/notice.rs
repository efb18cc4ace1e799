//! Transient success notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logout redirects to `/`, so its notice has to survive one redirect. It
//! travels in a short-lived flash cookie that the next page render consumes
//! and expires.

use std::fmt::Write;
use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE_NAME: &str = "portal_notice";

/// How long a notice stays on screen before dismissing itself.
pub const NOTICE_TIMER: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIcon {
    Success,
}

impl NoticeIcon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

/// A toast with no confirm button that dismisses itself after `timer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub icon: NoticeIcon,
    pub title: String,
    pub show_confirm_button: bool,
    pub timer: Duration,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self { icon: NoticeIcon::Success, title: title.into(), show_confirm_button: false, timer: NOTICE_TIMER }
    }

    #[must_use]
    pub fn timer_ms(&self) -> u128 {
        self.timer.as_millis()
    }

    /// Flash cookie carrying this notice across a redirect.
    #[must_use]
    pub fn to_flash_cookie(&self, secure: bool) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE_NAME, bytes_to_hex(self.title.as_bytes())))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure)
            .max_age(time::Duration::minutes(1))
            .build()
    }
}

/// Take the pending notice out of `jar`, expiring the flash cookie.
///
/// A malformed cookie is dropped without producing a notice.
#[must_use]
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(raw) = jar.get(FLASH_COOKIE_NAME).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"));
    let notice = hex_to_bytes(&raw)
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(Notice::success);
    (jar, notice)
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

pub(crate) fn hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    if !hex.len().is_multiple_of(2) {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| hex.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;
