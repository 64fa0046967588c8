//! Typed wrapper over the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! `net::http` interceptor.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics; pages turn failures
//! into messages with [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::Method;
#[cfg(feature = "hydrate")]
use super::http::RequestAuth;
#[cfg(feature = "hydrate")]
use super::types::CvUploadResponse;
use super::types::{
    AdminStats, ApiError, Application, ApplicationStatus, Credentials, LoginResponse,
    NewApplication, Offer, OfferInput, OfferQuery, RegisterRequest, StatusUpdate, User,
};
use crate::state::session::{AuthApi, SessionContext};

fn offer_endpoint(id: i64) -> String {
    format!("/offers/{id}")
}

fn application_endpoint(id: i64) -> String {
    format!("/applications/{id}")
}

fn admin_user_endpoint(id: i64) -> String {
    format!("/admin/users/{id}")
}

enum Payload {
    Empty,
    Json(serde_json::Value),
}

impl Payload {
    fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Payload::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(feature = "hydrate")]
    fn into_body(self) -> super::http::Body {
        match self {
            Payload::Empty => super::http::Body::Empty,
            Payload::Json(value) => super::http::Body::Json(value),
        }
    }
}

/// Backend client bound to the current session.
///
/// Every call goes through the interceptor with the session as its hooks,
/// so a 401 from any endpoint logs the user out.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionContext,
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        payload: Payload,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::send_json(&self.session, RequestAuth::Session, method, path, query, payload.into_body()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.session, method, path, query, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_unit(&self, method: Method, path: &str, payload: Payload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::send(&self.session, RequestAuth::Session, method, path, &[], payload.into_body())
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.session, method, path, payload);
            Err(ApiError::Unavailable)
        }
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Upload a CV file (`POST /auth/upload-cv`, multipart field `file`).
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection (e.g. unsupported file type) or a
    /// transport error.
    #[cfg(feature = "hydrate")]
    pub async fn upload_cv(&self, file: &web_sys::File) -> Result<CvUploadResponse, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
        super::http::send_json(
            &self.session,
            RequestAuth::Session,
            Method::Post,
            "/auth/upload-cv",
            &[],
            super::http::Body::Multipart(form),
        )
        .await
    }

    // =========================================================================
    // Offers
    // =========================================================================

    /// `GET /offers/` with optional filters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_offers(&self, query: &OfferQuery) -> Result<Vec<Offer>, ApiError> {
        self.fetch_json(Method::Get, "/offers/", &query.pairs(), Payload::Empty).await
    }

    /// `GET /offers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_offer(&self, id: i64) -> Result<Offer, ApiError> {
        self.fetch_json(Method::Get, &offer_endpoint(id), &[], Payload::Empty).await
    }

    /// `POST /offers/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_offer(&self, input: &OfferInput) -> Result<Offer, ApiError> {
        self.fetch_json(Method::Post, "/offers/", &[], Payload::json(input)?).await
    }

    /// `PUT /offers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_offer(&self, id: i64, input: &OfferInput) -> Result<Offer, ApiError> {
        self.fetch_json(Method::Put, &offer_endpoint(id), &[], Payload::json(input)?).await
    }

    /// `DELETE /offers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_offer(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_unit(Method::Delete, &offer_endpoint(id), Payload::Empty).await
    }

    /// `GET /offers/company`: offers owned by the logged-in company.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn company_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.fetch_json(Method::Get, "/offers/company", &[], Payload::Empty).await
    }

    // =========================================================================
    // Applications
    // =========================================================================

    /// `POST /applications/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn apply(&self, offer_id: i64) -> Result<Application, ApiError> {
        let payload = Payload::json(&NewApplication { offer_id })?;
        self.fetch_json(Method::Post, "/applications/", &[], payload).await
    }

    /// `GET /applications/my-applications`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.fetch_json(Method::Get, "/applications/my-applications", &[], Payload::Empty).await
    }

    /// `GET /applications/company`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn company_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.fetch_json(Method::Get, "/applications/company", &[], Payload::Empty).await
    }

    /// `PATCH /applications/{id}` with the new review status.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Application, ApiError> {
        let payload = Payload::json(&StatusUpdate { status })?;
        self.fetch_json(Method::Patch, &application_endpoint(id), &[], payload).await
    }

    /// `GET /applications/all`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn all_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.fetch_json(Method::Get, "/applications/all", &[], Payload::Empty).await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_json(Method::Get, "/admin/users", &[], Payload::Empty).await
    }

    /// `GET /admin/stats`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.fetch_json(Method::Get, "/admin/stats", &[], Payload::Empty).await
    }

    /// `GET /admin/applications`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn admin_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.fetch_json(Method::Get, "/admin/applications", &[], Payload::Empty).await
    }

    /// `DELETE /admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_unit(Method::Delete, &admin_user_endpoint(id), Payload::Empty).await
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::UrlSearchParams::new()
                .map_err(|_| ApiError::Transport("URLSearchParams unavailable".to_owned()))?;
            form.append("username", &credentials.username);
            form.append("password", &credentials.password);
            super::http::send_json(
                &self.session,
                RequestAuth::Anonymous,
                Method::Post,
                "/auth/login",
                &[],
                super::http::Body::Form(form),
            )
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        let payload = Payload::json(data)?;
        #[cfg(feature = "hydrate")]
        {
            super::http::send_json(
                &self.session,
                RequestAuth::Anonymous,
                Method::Post,
                "/auth/register",
                &[],
                payload.into_body(),
            )
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch_json(Method::Get, "/auth/me", &[], Payload::Empty).await
    }
}
