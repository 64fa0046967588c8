//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schemas so serde round-trips stay
//! lossless. Timestamps are kept as the ISO 8601 strings the API emits.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message shown when an error payload carries no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Platform role attached to every user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Student browsing and applying to offers.
    #[default]
    Stagiaire,
    /// Company representative publishing offers.
    Company,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Stagiaire => "stagiaire",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stagiaire" => Ok(Role::Stagiaire),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An authenticated user as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Platform role.
    pub role: Role,
    /// Public path of the uploaded CV, if any.
    #[serde(default)]
    pub cv_url: Option<String>,
    /// ISO 8601 account creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Email/password pair sent to `/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The account email; the backend's OAuth2 form calls it `username`.
    pub username: String,
    pub password: String,
}

/// Account creation payload for `/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful `/auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Response of `/auth/upload-cv`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvUploadResponse {
    pub cv_url: String,
}

/// An internship offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub location: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload for offers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub location: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Optional filters for the public offer listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl OfferQuery {
    /// Non-empty filters as query-string pairs.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.as_deref()),
            ("category", self.category.as_deref()),
            ("location", self.location.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

/// Review state of an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// A stagiaire's application to an offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub offer_id: i64,
    pub stagiaire_id: i64,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub offer: Option<Offer>,
    #[serde(default)]
    pub stagiaire: Option<User>,
}

/// Payload for `POST /applications/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub offer_id: i64,
}

/// Payload for `PATCH /applications/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// Aggregate counters for the admin console.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_offers: i64,
    #[serde(default)]
    pub total_applications: i64,
    #[serde(default)]
    pub total_companies: i64,
    #[serde(default)]
    pub total_stagiaires: i64,
}

/// Error body emitted by the backend: `{"detail": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// One field-level validation error inside a list-shaped `detail`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl FieldError {
    /// `loc` segments joined with `.`; strings unquoted, numbers verbatim.
    pub fn location(&self) -> String {
        self.loc
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl ApiErrorBody {
    /// Human-readable message for this body, if the `detail` shape is known.
    ///
    /// A string detail is returned as-is. A list of field errors becomes one
    /// `loc: msg` line per entry. Anything else, including an empty list,
    /// yields `None`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) if !items.is_empty() => {
                let errors: Vec<FieldError> = items
                    .iter()
                    .map(|item| serde_json::from_value(item.clone()))
                    .collect::<Result<_, _>>()
                    .ok()?;
                Some(
                    errors
                        .iter()
                        .map(|e| format!("{}: {}", e.location(), e.msg))
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
            _ => None,
        }
    }
}

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ApiErrorBody> },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
    /// HTTP is only available in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from the raw response text.
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ApiErrorBody>(raw_body).ok();
        ApiError::Status { status, body }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { body: Some(body), .. } => body
                .message()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}
