//! REST API client for the QA backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with a network error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response passes through [`ApiClient::settle`] before a view sees it.
//! That is the single place where a rejected session is evicted and the
//! browser is sent back to the login view; everything else becomes an
//! [`ApiResult`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult, extract_error_message};
use super::interceptor::{Interception, LOGIN_ENDPOINT, intercept};
use super::types::{
    AnswerPayload, Consult, ConsultRequest, ConsultUpdate, Credentials, FineTuneStatus, LikeRequest, LoginResponse,
    SearchResult, User, UserPayload,
};
use crate::state::auth::SessionContext;
use crate::state::session::Session;
use crate::util::auth::LOGIN_PATH;

pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const SEARCH_ENDPOINT: &str = "/api/qa/search";
pub const LIKE_ENDPOINT: &str = "/api/qa/like";
pub const REQUEST_CONSULT_ENDPOINT: &str = "/api/qa/consult";
pub const UNANSWERED_ENDPOINT: &str = "/api/consult/unanswered";
pub const CONSULTANT_ANSWER_ENDPOINT: &str = "/api/consult/answer";
pub const ADMIN_ANSWER_ENDPOINT: &str = "/api/admin/consult/answer";
pub const ADMIN_CONSULTS_ENDPOINT: &str = "/api/admin/consults";
pub const ADMIN_USERS_ENDPOINT: &str = "/api/admin/users";
pub const FINE_TUNE_STATUS_ENDPOINT: &str = "/api/admin/get-auto-fine-tune-status";
pub const FINE_TUNE_ENABLE_ENDPOINT: &str = "/api/admin/enable-auto-fine-tune";
pub const FINE_TUNE_DISABLE_ENDPOINT: &str = "/api/admin/disable-auto-fine-tune";
pub const UPLOAD_EXCEL_ENDPOINT: &str = "/api/admin/upload-excel";

type Redirect = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Status and body of a response, before interception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Which role is answering a consult; each has its own endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerChannel {
    Consultant,
    Admin,
}

impl AnswerChannel {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Consultant => CONSULTANT_ANSWER_ENDPOINT,
            Self::Admin => ADMIN_ANSWER_ENDPOINT,
        }
    }
}

pub(crate) fn consult_endpoint(id: i64) -> String {
    format!("{ADMIN_CONSULTS_ENDPOINT}/{id}")
}

pub(crate) fn user_endpoint(id: i64) -> String {
    format!("{ADMIN_USERS_ENDPOINT}/{id}")
}

pub(crate) fn fine_tune_endpoint(target: FineTuneStatus) -> &'static str {
    match target {
        FineTuneStatus::Enabled => FINE_TUNE_ENABLE_ENDPOINT,
        FineTuneStatus::Disabled => FINE_TUNE_DISABLE_ENDPOINT,
    }
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<P: Serialize>(payload: &P) -> ApiResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(format!("encode: {e}")))
}

/// Injected HTTP client. Attaches the session token and owns 401 handling.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionContext,
    redirect: StoredValue<Redirect>,
}

impl ApiClient {
    /// Client that performs a full page load to the login view on eviction.
    pub fn new(session: SessionContext) -> Self {
        Self::with_redirect(session, crate::util::nav::hard_redirect)
    }

    pub fn with_redirect<F>(session: SessionContext, redirect: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { session, redirect: StoredValue::new(Arc::new(redirect)) }
    }

    /// Apply the unauthorized interceptor and map the status to a result.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] after evicting the session, or
    /// [`ApiError::Backend`] for any other non-2xx status.
    pub fn settle(&self, endpoint: &str, response: RawResponse) -> ApiResult<String> {
        if intercept(response.status, endpoint) == Interception::EvictSession {
            leptos::logging::warn!("session rejected by {endpoint}; signing out");
            self.session.clear();
            self.redirect.try_with_value(|redirect| redirect(LOGIN_PATH));
            return Err(ApiError::Unauthorized);
        }
        if (200..300).contains(&response.status) {
            Ok(response.body)
        } else {
            Err(ApiError::Backend { status: response.status, message: extract_error_message(&response.body) })
        }
    }

    async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
        authenticated: bool,
    ) -> ApiResult<String> {
        let token = if authenticated { self.session.token_untracked() } else { None };
        let response = send(method, endpoint, token.as_deref(), body.as_ref()).await?;
        self.settle(endpoint, response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let body = self.call(Method::Get, endpoint, None, true).await?;
        decode(&body)
    }

    async fn send_json<P: Serialize>(&self, method: Method, endpoint: &str, payload: &P) -> ApiResult<String> {
        self.call(method, endpoint, Some(encode(payload)?), true).await
    }

    // -------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------

    /// `POST /api/auth/login`. Does not store the session; the caller does.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or an unroutable role.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let payload = encode(&Credentials { email: email.to_owned(), password: password.to_owned() })?;
        let body = self.call(Method::Post, LOGIN_ENDPOINT, Some(payload), false).await?;
        let response: LoginResponse = decode(&body)?;
        response.into_session(email).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        let payload = encode(&Credentials { email: email.to_owned(), password: password.to_owned() })?;
        self.call(Method::Post, REGISTER_ENDPOINT, Some(payload), false).await?;
        Ok(())
    }

    /// `POST /api/auth/logout` with the current token.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure. Callers clear the session either way.
    pub async fn logout(&self) -> ApiResult<()> {
        self.send_json(Method::Post, LOGOUT_ENDPOINT, &serde_json::json!({})).await?;
        Ok(())
    }

    // -------------------------------------------------------------
    // Search
    // -------------------------------------------------------------

    /// `POST /api/qa/search`.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or a malformed result list.
    pub async fn search(&self, question: &str) -> ApiResult<Vec<SearchResult>> {
        let body = self
            .send_json(Method::Post, SEARCH_ENDPOINT, &serde_json::json!({ "question": question }))
            .await?;
        decode(&body)
    }

    /// `POST /api/qa/like`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn like(&self, question: &str, answer: &str) -> ApiResult<()> {
        let payload = LikeRequest { question: question.to_owned(), answer: answer.to_owned() };
        self.send_json(Method::Post, LIKE_ENDPOINT, &payload).await?;
        Ok(())
    }

    /// `POST /api/qa/consult`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn request_consult(&self, question: &str, user_email: &str) -> ApiResult<()> {
        let payload = ConsultRequest { question: question.to_owned(), user_email: user_email.to_owned() };
        self.send_json(Method::Post, REQUEST_CONSULT_ENDPOINT, &payload).await?;
        Ok(())
    }

    // -------------------------------------------------------------
    // Consults
    // -------------------------------------------------------------

    /// `GET /api/consult/unanswered`.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or a malformed list.
    pub async fn unanswered_consults(&self) -> ApiResult<Vec<Consult>> {
        self.get_json(UNANSWERED_ENDPOINT).await
    }

    /// `GET /api/admin/consults`.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or a malformed list.
    pub async fn admin_consults(&self) -> ApiResult<Vec<Consult>> {
        self.get_json(ADMIN_CONSULTS_ENDPOINT).await
    }

    /// Answer a consult through the consultant or admin endpoint.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn answer_consult(&self, channel: AnswerChannel, payload: &AnswerPayload) -> ApiResult<()> {
        self.send_json(Method::Post, channel.endpoint(), payload).await?;
        Ok(())
    }

    /// `PUT /api/admin/consults/{id}`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn update_consult(&self, id: i64, update: &ConsultUpdate) -> ApiResult<()> {
        self.send_json(Method::Put, &consult_endpoint(id), update).await?;
        Ok(())
    }

    /// `DELETE /api/admin/consults/{id}`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn delete_consult(&self, id: i64) -> ApiResult<()> {
        self.call(Method::Delete, &consult_endpoint(id), None, true).await?;
        Ok(())
    }

    // -------------------------------------------------------------
    // Users
    // -------------------------------------------------------------

    /// `GET /api/admin/users`.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or a malformed list.
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        self.get_json(ADMIN_USERS_ENDPOINT).await
    }

    /// `POST /api/admin/users`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn create_user(&self, payload: &UserPayload) -> ApiResult<()> {
        self.send_json(Method::Post, ADMIN_USERS_ENDPOINT, payload).await?;
        Ok(())
    }

    /// `PUT /api/admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> ApiResult<()> {
        self.send_json(Method::Put, &user_endpoint(id), payload).await?;
        Ok(())
    }

    /// `DELETE /api/admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.call(Method::Delete, &user_endpoint(id), None, true).await?;
        Ok(())
    }

    // -------------------------------------------------------------
    // Fine-tuning
    // -------------------------------------------------------------

    /// `GET /api/admin/get-auto-fine-tune-status`.
    ///
    /// # Errors
    ///
    /// Backend rejection, network failure, or an unknown status string.
    pub async fn fine_tune_status(&self) -> ApiResult<FineTuneStatus> {
        let body = self.call(Method::Get, FINE_TUNE_STATUS_ENDPOINT, None, true).await?;
        FineTuneStatus::parse(&body).ok_or_else(|| ApiError::Decode(format!("unknown fine-tune status: {body}")))
    }

    /// Switch automatic fine-tuning to `target`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    pub async fn set_fine_tune(&self, target: FineTuneStatus) -> ApiResult<()> {
        self.call(Method::Post, fine_tune_endpoint(target), None, true).await?;
        Ok(())
    }

    /// `POST /api/admin/upload-excel` as `multipart/form-data` field `file`.
    ///
    /// # Errors
    ///
    /// Backend rejection or network failure.
    #[cfg(feature = "hydrate")]
    pub async fn upload_excel(&self, file: &web_sys::File) -> ApiResult<()> {
        use gloo_net::http::Request;

        let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob("file", file).map_err(js_error)?;

        let mut builder = Request::post(UPLOAD_EXCEL_ENDPOINT);
        if let Some(token) = self.session.token_untracked() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let raw = RawResponse { status: response.status(), body: response.text().await.unwrap_or_default() };
        self.settle(UPLOAD_EXCEL_ENDPOINT, raw)?;
        Ok(())
    }
}

/// Perform one HTTP exchange. Any received response, whatever its status, is
/// `Ok`; only transport failures are errors.
async fn send(
    method: Method,
    endpoint: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> ApiResult<RawResponse> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(endpoint),
            Method::Post => Request::post(endpoint),
            Method::Put => Request::put(endpoint),
            Method::Delete => Request::delete(endpoint),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let request = match body {
            Some(value) => builder.json(value),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            leptos::logging::warn!("request to {endpoint} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, token, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
