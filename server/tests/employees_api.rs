//! Employee creation, validation order, filtering, and meta options

mod common;

use std::time::Duration;

use common::*;
use http::StatusCode;
use idms_server::services::photo::MAX_PHOTO_BYTES;

fn fields_with<'a>(name: &'a str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    valid_employee_fields()
        .into_iter()
        .map(|(n, v)| if n == name { (n, value) } else { (n, v) })
        .collect()
}

fn fields_without<'a>(name: &str) -> Vec<(&'a str, &'a str)> {
    valid_employee_fields()
        .into_iter()
        .filter(|(n, _)| *n != name)
        .collect()
}

async fn create_employee(
    app: &TestApp,
    token: &str,
    fields: &[(&str, &str)],
    photo: Option<(&str, &str, &[u8])>,
) -> (StatusCode, serde_json::Value) {
    send(app, multipart_request("/api/employees", token, fields, photo)).await
}

#[tokio::test]
async fn create_requires_every_field() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let jpeg = small_jpeg();

    for missing in ["fullName", "dateOfBirth", "email", "department", "phoneNumber", "designation", "gender"] {
        let (status, body) = create_employee(
            &app,
            &token,
            &fields_without(missing),
            Some(("jane.jpg", "image/jpeg", &jpeg)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert_eq!(body["message"], "All fields are required", "missing {missing}");
    }
}

#[tokio::test]
async fn create_validates_fields_in_order() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let jpeg = small_jpeg();
    let photo = Some(("jane.jpg", "image/jpeg", jpeg.as_slice()));

    let cases = [
        ("email", "not-an-email", "Invalid email format"),
        ("phoneNumber", "12345", "Phone number must be exactly 10 digits"),
        ("department", "Nonexistent", "Department must be a valid selection"),
        ("designation", "Astronaut", "Designation must be a valid selection"),
        ("gender", "Unknown", "Gender must be a valid selection"),
        ("dateOfBirth", "not-a-date", "Invalid date of birth"),
    ];

    for (field, value, message) in cases {
        let (status, body) = create_employee(&app, &token, &fields_with(field, value), photo).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(body["message"], message, "field {field}");
    }
}

#[tokio::test]
async fn create_requires_a_photo() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;

    let (status, body) = create_employee(&app, &token, &valid_employee_fields(), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Employee photo is required");
}

#[tokio::test]
async fn create_rejects_non_image_uploads() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;

    let (status, body) = create_employee(
        &app,
        &token,
        &valid_employee_fields(),
        Some(("resume.txt", "text/plain", b"plain text")),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "unsupported_media_type");
}

#[tokio::test]
async fn create_rejects_oversized_photos() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let huge = vec![0u8; MAX_PHOTO_BYTES + 1];

    let (status, body) = create_employee(
        &app,
        &token,
        &valid_employee_fields(),
        Some(("huge.png", "image/png", &huge)),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn create_normalizes_email_and_stores_the_photo() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let jpeg = small_jpeg();

    let (status, body) = create_employee(
        &app,
        &token,
        &valid_employee_fields(),
        Some(("jane photo.JPG", "image/jpeg", &jpeg)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    assert_eq!(body["fullName"], "Jane Doe");
    assert_eq!(body["email"], "jane@ex.com");
    assert_eq!(body["dateOfBirth"], "1990-01-01");
    assert_eq!(body["photoOriginalName"], "jane photo.JPG");

    let photo_path = body["photoPath"].as_str().unwrap();
    assert!(photo_path.starts_with("/uploads/"));
    assert!(photo_path.ends_with(".jpg"));

    // The stored file is served back at the recorded path
    let (status, _) = send(&app, get(photo_path, None)).await;
    assert_eq!(status, StatusCode::OK);

    // And exists under the configured upload directory
    let stored_name = photo_path.trim_start_matches("/uploads/");
    let on_disk = app.state.config.upload_dir_path().join(stored_name);
    assert!(on_disk.exists());
}

#[tokio::test]
async fn list_filters_and_searches() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let jpeg = small_jpeg();
    let photo = Some(("p.jpg", "image/jpeg", jpeg.as_slice()));

    let (status, _) = create_employee(&app, &token, &valid_employee_fields(), photo).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut bob = fields_with("fullName", "Bob Stone");
    for pair in bob.iter_mut() {
        if pair.0 == "email" {
            pair.1 = "bob@ex.com";
        } else if pair.0 == "department" {
            pair.1 = "Finance";
        }
    }
    let (status, _) = create_employee(&app, &token, &bob, photo).await;
    assert_eq!(status, StatusCode::CREATED);

    // Case-insensitive substring search over name/email/department
    let (status, body) = send(&app, get("/api/employees?search=jAnE", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["email"], "jane@ex.com");

    // Exact-match filters conjoin
    let (status, body) = send(
        &app,
        get("/api/employees?department=Finance&gender=Female", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // No matches is an empty set, not an error
    let (status, body) = send(&app, get("/api/employees?department=Sales", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    // Empty filter values narrow nothing
    let (status, body) = send(
        &app,
        get("/api/employees?search=&department=&designation=&gender=", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;
    let jpeg = small_jpeg();
    let photo = Some(("p.jpg", "image/jpeg", jpeg.as_slice()));

    for (name, email) in [
        ("Alice Amber", "alice@ex.com"),
        ("Bob Stone", "bob@ex.com"),
        ("Cara Flint", "cara@ex.com"),
    ] {
        let mut fields = fields_with("fullName", name);
        for pair in fields.iter_mut() {
            if pair.0 == "email" {
                pair.1 = email;
            }
        }
        let (status, _) = create_employee(&app, &token, &fields, photo).await;
        assert_eq!(status, StatusCode::CREATED);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let (status, body) = send(&app, get("/api/employees", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cara Flint", "Bob Stone", "Alice Amber"]);
}

#[tokio::test]
async fn meta_options_are_fixed_and_idempotent() {
    let app = spawn_app().await;
    let token = auth_token(&app).await;

    let (status, first) = send(&app, get("/api/employees/meta", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        first["departments"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Engineering"))
    );
    assert!(
        first["designations"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Developer"))
    );
    assert!(
        first["genders"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Female"))
    );

    // Stored data never changes the vocabularies
    let jpeg = small_jpeg();
    let (status, _) = create_employee(
        &app,
        &token,
        &valid_employee_fields(),
        Some(("p.jpg", "image/jpeg", jpeg.as_slice())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, second) = send(&app, get("/api/employees/meta", Some(&token))).await;
    assert_eq!(first, second);

    let (_, third) = send(&app, get("/api/employees/meta", Some(&token))).await;
    assert_eq!(first, third);
}

#[tokio::test]
async fn meta_requires_authentication() {
    let app = spawn_app().await;

    let (status, _) = send(&app, get("/api/employees/meta", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
