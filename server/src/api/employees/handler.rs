//! Employee API Handlers

use axum::extract::{Extension, Multipart, Query, State};
use axum::{Json, http::StatusCode};
use shared::{EmployeeListQuery, MetaOptions};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::filter::EmployeeFilter;
use crate::db::models::EmployeeCreate;
use crate::db::repository::EmployeeRepository;
use crate::db::models::Employee;
use crate::utils::AppResult;
use crate::utils::validation::{is_valid_email, is_valid_phone, parse_date_of_birth};

/// One uploaded file part, pulled out of the multipart stream
struct PhotoUpload {
    original_name: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// Text fields plus the photo part of the create form
#[derive(Default)]
struct EmployeeForm {
    full_name: Option<String>,
    date_of_birth: Option<String>,
    email: Option<String>,
    department: Option<String>,
    phone_number: Option<String>,
    designation: Option<String>,
    gender: Option<String>,
    photo: Option<PhotoUpload>,
}

async fn read_form(mut multipart: Multipart) -> Result<EmployeeForm, AppError> {
    let mut form = EmployeeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        match name.as_str() {
            "photo" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(|s| s.to_string());
                let data = field.bytes().await?.to_vec();
                form.photo = Some(PhotoUpload {
                    original_name,
                    content_type,
                    data,
                });
            }
            "fullName" => form.full_name = Some(field.text().await?),
            "dateOfBirth" => form.date_of_birth = Some(field.text().await?),
            "email" => form.email = Some(field.text().await?),
            "department" => form.department = Some(field.text().await?),
            "phoneNumber" => form.phone_number = Some(field.text().await?),
            "designation" => form.designation = Some(field.text().await?),
            "gender" => form.gender = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Create a new employee record
///
/// Validation runs in a fixed order so a given bad payload always fails
/// the same way: required fields, email, phone, the three vocabularies,
/// photo presence, then the date. The photo is persisted before the
/// insert; an insert failure discards the stored file.
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let form = read_form(multipart).await?;

    let fields = (
        required(&form.full_name),
        required(&form.date_of_birth),
        required(&form.email),
        required(&form.department),
        required(&form.phone_number),
        required(&form.designation),
        required(&form.gender),
    );
    let (
        Some(full_name),
        Some(date_of_birth),
        Some(email),
        Some(department),
        Some(phone_number),
        Some(designation),
        Some(gender),
    ) = fields
    else {
        return Err(AppError::validation("All fields are required"));
    };

    if !is_valid_email(&email) {
        return Err(AppError::validation("Invalid email format"));
    }

    if !is_valid_phone(&phone_number) {
        return Err(AppError::validation(
            "Phone number must be exactly 10 digits",
        ));
    }

    let catalog = state.catalog();
    if !catalog.is_department(&department) {
        return Err(AppError::validation("Department must be a valid selection"));
    }

    if !catalog.is_designation(&designation) {
        return Err(AppError::validation(
            "Designation must be a valid selection",
        ));
    }

    if !catalog.is_gender(&gender) {
        return Err(AppError::validation("Gender must be a valid selection"));
    }

    let Some(photo) = form.photo else {
        return Err(AppError::validation("Employee photo is required"));
    };

    let Some(date_of_birth) = parse_date_of_birth(&date_of_birth) else {
        return Err(AppError::validation("Invalid date of birth"));
    };

    let stored = state
        .photos
        .store(&photo.original_name, photo.content_type.as_deref(), &photo.data)
        .await?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = EmployeeCreate {
        full_name,
        date_of_birth,
        email: email.to_lowercase(),
        department,
        phone_number,
        designation,
        gender,
        photo_path: stored.public_path.clone(),
        photo_original_name: stored.original_name.clone(),
    };

    let created = match repo.create(employee).await {
        Ok(record) => record,
        Err(e) => {
            // Never leave a photo on disk that no record references
            stored.discard().await;
            return Err(e.into());
        }
    };

    tracing::info!(
        employee_id = %created.id,
        created_by = %current_user.id,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// List employees matching the query filters, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let filter = EmployeeFilter::from_query(&query);
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.list(&filter).await?;
    Ok(Json(employees))
}

/// The fixed selection vocabularies, for form rendering and validation
pub async fn meta(State(state): State<ServerState>) -> Json<MetaOptions> {
    Json(state.catalog().to_meta_options())
}
