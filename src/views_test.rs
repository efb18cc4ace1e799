use super::*;
use crate::test_helpers::{sample_admin, sample_user};

fn signed_in() -> SessionState {
    let mut state = SessionState::new();
    state.auth.set(Some(sample_user()));
    state
}

#[test]
fn payload_escapes_script_close_sequences() {
    let mut state = SessionState::new();
    let mut user = sample_user();
    user.first_name = "</script><b>".into();
    state.auth.set(Some(user));

    let json = session_payload_json(&state);
    assert!(!json.contains("</script>"));
    assert!(json.contains("<\\/script>"));
}

#[test]
fn payload_reports_absent_slots_as_null() {
    assert_eq!(session_payload_json(&SessionState::new()), r#"{"auth":null,"admin":null}"#);
}

#[test]
fn home_page_greets_signed_in_user() {
    let html = home_page(&signed_in(), Chrome::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Welcome back, Ada Lovelace"));
    assert!(html.contains("/logout"));
    assert!(html.contains("__session"));
    assert!(html.contains("\"UserID\":\"u1\""));
}

#[test]
fn home_page_for_guest_has_no_logout_link() {
    let html = home_page(&SessionState::new(), Chrome::default());
    assert!(html.contains("Welcome, guest"));
    assert!(!html.contains("/logout"));
}

#[test]
fn notice_renders_with_timer_and_no_confirm() {
    let chrome = Chrome { notice: Some(Notice::success("Signed out")), ..Chrome::default() };
    let html = home_page(&SessionState::new(), chrome);
    assert!(html.contains("Signed out"));
    assert!(html.contains("data-timer=\"1800\""));
    assert!(html.contains("data-confirm=\"false\""));
}

#[test]
fn menu_state_is_reflected_in_nav() {
    let open = Chrome { menu: MobileMenu { is_open: true }, notice: None };
    let html = home_page(&SessionState::new(), open);
    assert!(html.contains("data-state=\"open\""));
    assert!(html.contains("/ui/mobile-menu/close"));

    let html = home_page(&SessionState::new(), Chrome::default());
    assert!(html.contains("data-state=\"closed\""));
    assert!(!html.contains("/ui/mobile-menu/close"));
}

#[test]
fn admin_landing_page_varies_with_admin_slot() {
    let html = admin_landing_page(&SessionState::new(), Chrome::default());
    assert!(html.contains("Admin sign-in is required"));

    let mut state = SessionState::new();
    state.admin.set(Some(sample_admin()));
    let html = admin_landing_page(&state, Chrome::default());
    assert!(html.contains("root"));
    assert!(html.contains("/admin/dashboard"));
}

#[test]
fn admin_dashboard_lists_admin_details() {
    let mut state = SessionState::new();
    state.admin.set(Some(sample_admin()));
    let html = admin_dashboard_page(&state, &sample_admin(), Chrome::default());
    assert!(html.contains("Dashboard"));
    assert!(html.contains("2024-08-16T10:00:00.000Z"));
}

#[test]
fn error_page_shows_status() {
    let html = error_page(502, "Session lookup failed");
    assert!(html.contains("Error 502"));
    assert!(html.contains("Session lookup failed"));
}
