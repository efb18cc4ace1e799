use super::*;
use serde_json::json;

fn user_json() -> serde_json::Value {
    json!({
        "UserID": "u1",
        "UserFirstName": "Ada",
        "UserLastName": "Lovelace",
        "UserImage": "/img/u1.png",
        "DepartmentID": "d7",
        "Role": "student",
    })
}

#[test]
fn auth_response_parses_present_user() {
    let resp: AuthResponse = serde_json::from_value(json!({ "auth": user_json() })).unwrap();
    let user = resp.auth.expect("user should be present");
    assert_eq!(user.id, "u1");
    assert_eq!(user.department_id, "d7");
    assert_eq!(user.role, "student");
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn auth_response_missing_field_is_absent() {
    let resp: AuthResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.auth.is_none());
}

#[test]
fn auth_response_null_is_absent() {
    let resp: AuthResponse = serde_json::from_value(json!({ "auth": null })).unwrap();
    assert!(resp.auth.is_none());
}

#[test]
fn admin_response_parses_camel_case_timestamp() {
    let resp: AdminResponse = serde_json::from_value(json!({
        "admin": { "id": 3, "username": "root", "createdAt": "2024-08-16T10:00:00.000Z" }
    }))
    .unwrap();
    let admin = resp.admin.expect("admin should be present");
    assert_eq!(admin.id, 3);
    assert_eq!(admin.username, "root");
    assert_eq!(admin.created_at, "2024-08-16T10:00:00.000Z");
}

#[test]
fn admin_response_missing_field_is_absent() {
    let resp: AdminResponse = serde_json::from_value(json!({ "message": "not admin" })).unwrap();
    assert!(resp.admin.is_none());
}

#[test]
fn session_user_serializes_with_wire_names() {
    let user: SessionUser = serde_json::from_value(user_json()).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), user_json());
}

#[test]
fn display_name_trims_missing_last_name() {
    let mut user: SessionUser = serde_json::from_value(user_json()).unwrap();
    user.last_name = String::new();
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn api_error_status_message_includes_code() {
    let err = ApiError::Status { status: 503, body: "down".into() };
    assert_eq!(err.to_string(), "auth api responded with status 503");
}
