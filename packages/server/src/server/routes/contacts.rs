use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domains::contacts::models::ContactDraft;
use crate::domains::contacts::{ConflictError, DirectoryError, ValidationError};
use crate::server::app::AppState;
use crate::server::middleware::CurrentIdentity;

// Validation and conflict outcomes are 200 responses carrying a
// message; downstream callers match on the exact text. Only a missing
// contact on delete is a real error status (404).

fn internal_error(err: DirectoryError) -> Response {
    tracing::error!(error = %err, "contact operation failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Response body for a rejected add
fn add_failure_body(err: &DirectoryError) -> Option<String> {
    match err {
        DirectoryError::Conflict(ConflictError::DuplicateName) => {
            Some("Contact with that name exists".to_string())
        }
        DirectoryError::Conflict(ConflictError::DuplicateEmail(_)) => {
            Some("Contact with that email exists".to_string())
        }
        DirectoryError::Conflict(ConflictError::DuplicatePhone(_)) => {
            Some("Contact with that phone number exists".to_string())
        }
        DirectoryError::Validation(ValidationError::InvalidEmail(value)) => {
            Some(format!("Invalid email format: {value}"))
        }
        DirectoryError::Validation(ValidationError::InvalidPhone(value)) => {
            Some(format!("Invalid phone number format: {value}"))
        }
        _ => None,
    }
}

/// Response body for a rejected edit (conflict wording differs from add)
fn edit_failure_body(err: &DirectoryError) -> Option<String> {
    match err {
        DirectoryError::NotFound(name) => Some(format!("Contact {name} does not exist")),
        DirectoryError::Conflict(ConflictError::DuplicateName) => {
            Some("Contact with that name already exists".to_string())
        }
        DirectoryError::Conflict(ConflictError::DuplicateEmail(_)) => {
            Some("Contact with that email already exists".to_string())
        }
        DirectoryError::Conflict(ConflictError::DuplicatePhone(_)) => {
            Some("Contact with that phone number already exists".to_string())
        }
        DirectoryError::Validation(ValidationError::InvalidEmail(value)) => {
            Some(format!("Invalid email format: {value}"))
        }
        DirectoryError::Validation(ValidationError::InvalidPhone(value)) => {
            Some(format!("Invalid phone number format: {value}"))
        }
        _ => None,
    }
}

/// POST /contacts/new
pub async fn add_contact(
    Extension(state): Extension<AppState>,
    Extension(CurrentIdentity(owner)): Extension<CurrentIdentity>,
    Json(draft): Json<ContactDraft>,
) -> Response {
    match state.directory.add(&owner, draft).await {
        Ok(_) => (StatusCode::OK, "Contact has been added").into_response(),
        Err(err) => match add_failure_body(&err) {
            Some(body) => (StatusCode::OK, body).into_response(),
            None => internal_error(err),
        },
    }
}

/// PUT /contacts/edit/{name}
pub async fn edit_contact(
    Extension(state): Extension<AppState>,
    Extension(CurrentIdentity(owner)): Extension<CurrentIdentity>,
    Path(name): Path<String>,
    Json(draft): Json<ContactDraft>,
) -> Response {
    match state.directory.edit(&owner, &name, draft).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => match edit_failure_body(&err) {
            Some(body) => (StatusCode::OK, body).into_response(),
            None => internal_error(err),
        },
    }
}

/// DELETE /contacts/delete/{name} - returns the remaining contact list
pub async fn delete_contact(
    Extension(state): Extension<AppState>,
    Extension(CurrentIdentity(owner)): Extension<CurrentIdentity>,
    Path(name): Path<String>,
) -> Response {
    match state.directory.delete(&owner, &name).await {
        Ok(true) => match state.directory.list_all(&owner).await {
            Ok(remaining) => Json(remaining).into_response(),
            Err(err) => internal_error(err.into()),
        },
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(err.into()),
    }
}

/// GET /contacts/get/{name}
pub async fn get_contact(
    Extension(state): Extension<AppState>,
    Extension(CurrentIdentity(owner)): Extension<CurrentIdentity>,
    Path(name): Path<String>,
) -> Response {
    match state.directory.find_by_name(&owner, &name).await {
        Ok(Some(contact)) => Json(contact).into_response(),
        Ok(None) => (StatusCode::OK, "Contact not found").into_response(),
        Err(err) => internal_error(err.into()),
    }
}

/// GET /contacts/all
pub async fn all_contacts(
    Extension(state): Extension<AppState>,
    Extension(CurrentIdentity(owner)): Extension<CurrentIdentity>,
) -> Response {
    match state.directory.list_all(&owner).await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(err) => internal_error(err.into()),
    }
}
