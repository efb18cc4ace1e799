//! Server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page carries the session snapshot it was rendered with in a
//! `#__session` JSON script, so client code picks up the same `auth` and
//! `admin` values instead of fetching them again.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::api::types::{SessionAdmin, SessionUser};
use crate::session::SessionState;
use crate::ui::menu::MobileMenu;
use crate::ui::notice::Notice;

const DISMISS_SCRIPT: &str = "document.querySelectorAll('[data-timer]').forEach(function (el) { \
     setTimeout(function () { el.remove(); }, Number(el.dataset.timer)); });";

/// Per-render page chrome that is independent of the session.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub menu: MobileMenu,
    pub notice: Option<Notice>,
}

/// Session snapshot as JSON, safe to inline inside a `<script>` element.
#[must_use]
pub fn session_payload_json(session: &SessionState) -> String {
    serde_json::to_string(&session.payload())
        .unwrap_or_else(|_| "{}".to_owned())
        .replace("</", "<\\/")
}

// =============================================================================
// LAYOUT
// =============================================================================

#[component]
fn NavBar(user: Option<SessionUser>, menu_open: bool) -> impl IntoView {
    let menu_state = if menu_open { "open" } else { "closed" };
    let expanded = if menu_open { "true" } else { "false" };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"Portal"</a>
            <form class="nav__toggle" method="post" action="/ui/mobile-menu/toggle">
                <button type="submit" aria-expanded=expanded>"Menu"</button>
            </form>
            <nav class="nav__links" data-state=menu_state>
                <a href="/">"Home"</a>
                <a href="/admin">"Admin"</a>
                {match user {
                    Some(user) => view! {
                        <span class="nav__user">{user.display_name()}</span>
                        <a class="nav__logout" href="/logout">"Log out"</a>
                    }
                    .into_any(),
                    None => view! { <span class="nav__user nav__user--guest">"Guest"</span> }.into_any(),
                }}
                {menu_open.then(|| view! {
                    <form method="post" action="/ui/mobile-menu/close">
                        <button type="submit">"Close"</button>
                    </form>
                })}
            </nav>
        </header>
    }
}

#[component]
fn NoticeToast(notice: Notice) -> impl IntoView {
    let icon = notice.icon.as_str();
    let confirm = if notice.show_confirm_button { "true" } else { "false" };
    let timer = notice.timer_ms().to_string();
    let title = notice.title;
    view! {
        <div class="notice" role="status" data-icon=icon data-confirm=confirm data-timer=timer>
            <p class="notice__title">{title}</p>
        </div>
        <script inner_html=DISMISS_SCRIPT></script>
    }
}

#[component]
fn Shell(
    title: String,
    user: Option<SessionUser>,
    menu_open: bool,
    notice: Option<Notice>,
    payload: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
            </head>
            <body>
                <NavBar user=user menu_open=menu_open />
                {notice.map(|notice| view! { <NoticeToast notice=notice /> })}
                <main>{children()}</main>
                <script id="__session" type="application/json" inner_html=payload></script>
            </body>
        </html>
    }
}

fn document(title: &str, session: &SessionState, chrome: Chrome, body: impl IntoView + Send + 'static) -> String {
    let title = title.to_owned();
    let user = session.user().cloned();
    let payload = session_payload_json(session);
    let Chrome { menu, notice } = chrome;
    let menu_open = menu.is_open;

    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <Shell title=title user=user menu_open=menu_open notice=notice payload=payload>
                {body}
            </Shell>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

// =============================================================================
// PAGES
// =============================================================================

#[must_use]
pub fn home_page(session: &SessionState, chrome: Chrome) -> String {
    let greeting = match session.user() {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome, guest".to_owned(),
    };
    let body = view! {
        <section class="home">
            <h1>{greeting}</h1>
            <p>"Browse activities and manage your department's events."</p>
        </section>
    };
    document("Portal", session, chrome, body)
}

#[must_use]
pub fn admin_landing_page(session: &SessionState, chrome: Chrome) -> String {
    let body = match session.admin().cloned() {
        Some(admin) => view! {
            <section class="admin">
                <h1>"Administration"</h1>
                <p>"Signed in as " <strong>{admin.username}</strong></p>
                <a href="/admin/dashboard">"Open dashboard"</a>
            </section>
        }
        .into_any(),
        None => view! {
            <section class="admin admin--signed-out">
                <h1>"Administration"</h1>
                <p>"Admin sign-in is required to manage the portal."</p>
            </section>
        }
        .into_any(),
    };
    document("Admin", session, chrome, body)
}

#[must_use]
pub fn admin_dashboard_page(session: &SessionState, admin: &SessionAdmin, chrome: Chrome) -> String {
    let SessionAdmin { id, username, created_at } = admin.clone();
    let body = view! {
        <section class="dashboard">
            <h1>"Dashboard"</h1>
            <dl>
                <dt>"Admin"</dt>
                <dd>{username}</dd>
                <dt>"ID"</dt>
                <dd>{id}</dd>
                <dt>"Since"</dt>
                <dd>{created_at}</dd>
            </dl>
        </section>
    };
    document("Admin dashboard", session, chrome, body)
}

/// Error page used when a render cannot proceed. No session is shown.
#[must_use]
pub fn error_page(status: u16, message: &str) -> String {
    let message = message.to_owned();
    let body = view! {
        <section class="error">
            <h1>{format!("Error {status}")}</h1>
            <p>{message}</p>
        </section>
    };
    document("Error", &SessionState::new(), Chrome::default(), body)
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
