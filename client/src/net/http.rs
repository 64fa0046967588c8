//! Request/response interceptor shared by every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! All `net::api` functions funnel through [`send`], so the bearer header and
//! the 401 policy apply no matter which page or component issued the call.
//! The transport knows nothing about navigation: a rejected token is reported
//! through [`SessionHooks::on_unauthorized`] and the app shell reacts to the
//! resulting session change.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::ApiError;

pub const UNAUTHORIZED: u16 = 401;

/// What the transport needs from the session.
pub trait SessionHooks {
    /// Token to attach as `Authorization: Bearer`, if logged in.
    fn bearer_token(&self) -> Option<String>;
    /// The backend rejected the attached credential.
    fn on_unauthorized(&self);
}

/// Whether a request carries the session credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAuth {
    /// Attach the bearer token; a 401 clears the session.
    Session,
    /// Credential-issuing endpoints: no token, and a 401 is an ordinary failure.
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// `Authorization` header value for this request, if any.
pub fn authorization_header<H: SessionHooks + ?Sized>(hooks: &H, auth: RequestAuth) -> Option<String> {
    match auth {
        RequestAuth::Session => hooks.bearer_token().map(|token| format!("Bearer {token}")),
        RequestAuth::Anonymous => None,
    }
}

/// Apply the response policy to a status code.
///
/// Returns `true` when the session hook fired.
pub fn inspect_status<H: SessionHooks + ?Sized>(hooks: &H, auth: RequestAuth, status: u16) -> bool {
    if status == UNAUTHORIZED && auth == RequestAuth::Session {
        hooks.on_unauthorized();
        return true;
    }
    false
}

/// Request body variants the backend accepts.
#[cfg(feature = "hydrate")]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Form(web_sys::UrlSearchParams),
    Multipart(web_sys::FormData),
}

/// Send one request through the interceptor.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when no response arrives and
/// [`ApiError::Status`] for any non-2xx answer.
#[cfg(feature = "hydrate")]
pub async fn send<H: SessionHooks + ?Sized>(
    hooks: &H,
    auth: RequestAuth,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Body,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::{Request, RequestBuilder};

    let url = crate::config::api_url(path);
    let mut builder: RequestBuilder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    if !query.is_empty() {
        builder = builder.query(query.iter().copied());
    }
    if let Some(value) = authorization_header(hooks, auth) {
        builder = builder.header("Authorization", &value);
    }

    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(params) => builder
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params),
        // The browser sets the multipart boundary itself.
        Body::Multipart(form) => builder.body(form),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = resp.status();
    inspect_status(hooks, auth, status);
    if resp.ok() {
        return Ok(resp);
    }
    let raw = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("{path} failed with status {status}");
    Err(ApiError::from_status(status, &raw))
}

/// Send a request and decode its JSON response.
///
/// # Errors
///
/// Same as [`send`], plus [`ApiError::Decode`] when the body does not match `T`.
#[cfg(feature = "hydrate")]
pub async fn send_json<H: SessionHooks + ?Sized, T: DeserializeOwned>(
    hooks: &H,
    auth: RequestAuth,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Body,
) -> Result<T, ApiError> {
    let resp = send(hooks, auth, method, path, query, body).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
