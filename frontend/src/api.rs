//! HTTP client for the remote Aurora scoring service.
//!
//! Four single-shot operations, no retry, no caching, no explicit
//! timeout (the browser's fetch defaults apply). HTTP failures are
//! translated into [`ApiError`]; the message carried is what the views
//! show the user.

use std::fmt;

use aurora_shared::protocol::{
    AnalysisRequest, AnalysisResponse, Essay, LoginResponse, RegisterRequest,
};
use aurora_shared::text;
use gloo_net::http::{Request, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub const API_BASE: &str = "http://72.60.8.246/api/v1";

const MSG_REGISTER_REJECTED: &str =
    "Não foi possível criar a conta. Verifique os dados e tente novamente.";
const MSG_REGISTER_FAILED: &str = "Falha ao criar conta. Tente novamente mais tarde.";
const MSG_LOGIN_FAILED: &str = "Erro ao fazer login";
const MSG_ANALYZE_FAILED: &str = "Erro ao analisar texto";
const MSG_ESSAYS_FAILED: &str = "Erro ao carregar redações";

/// Failure of a remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 4xx: user-correctable (bad credentials, duplicate username, ...).
    Client(String),
    /// 5xx or a transport failure: transient, not the user's fault.
    Service(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Client(msg) | ApiError::Service(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

/// Build an `application/x-www-form-urlencoded` body.
fn form_encode(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuroraApi {
    base_url: String,
}

impl Default for AuroraApi {
    fn default() -> Self {
        Self::new(API_BASE.to_string())
    }
}

impl AuroraApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Error for a non-2xx response: the raw body text when the service
    /// sent one, otherwise `fallback`. Classified by status class.
    async fn body_error(res: Response, fallback: &str) -> ApiError {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        let msg = if body.trim().is_empty() {
            fallback.to_string()
        } else {
            body
        };
        if (400..500).contains(&status) {
            ApiError::Client(msg)
        } else {
            ApiError::Service(msg)
        }
    }

    /// `POST /register` with a JSON body.
    ///
    /// The username is normalized (trim + lowercase) before transmit.
    /// The response body is intentionally not parsed: 4xx and 5xx map
    /// to fixed messages.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let payload = RegisterRequest {
            username: text::normalize_username(username),
            password: password.to_string(),
        };
        let res = Request::post(&self.url("/register"))
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| ApiError::Service(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))?;

        if res.ok() {
            Ok(())
        } else if (400..500).contains(&res.status()) {
            Err(ApiError::Client(MSG_REGISTER_REJECTED.to_string()))
        } else {
            Err(ApiError::Service(MSG_REGISTER_FAILED.to_string()))
        }
    }

    /// `POST /login` with a form-urlencoded body.
    ///
    /// The service authenticates against form fields, not JSON; this
    /// asymmetry with `register` is part of the wire contract.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = form_encode(&[
            ("username", &text::normalize_username(username)),
            ("password", password),
        ]);
        let res = Request::post(&self.url("/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| ApiError::Service(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))?;

        if !res.ok() {
            return Err(Self::body_error(res, MSG_LOGIN_FAILED).await);
        }
        res.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))
    }

    /// `POST /analysis/text`, bearer-authenticated.
    ///
    /// The text goes through [`text::clean_for_analysis`] first; what
    /// the service receives is not byte-identical to the user's input.
    pub async fn analyze_text(
        &self,
        input: &str,
        token: &str,
    ) -> Result<AnalysisResponse, ApiError> {
        let payload = AnalysisRequest {
            text: text::clean_for_analysis(input),
        };
        let res = Request::post(&self.url("/analysis/text"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(&payload)
            .map_err(|e| ApiError::Service(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))?;

        if !res.ok() {
            return Err(Self::body_error(res, MSG_ANALYZE_FAILED).await);
        }
        res.json::<AnalysisResponse>()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))
    }

    /// `GET /users/essays`, bearer-authenticated. Order is whatever the
    /// service returns; the client does not re-sort.
    pub async fn list_essays(&self, token: &str) -> Result<Vec<Essay>, ApiError> {
        let res = Request::get(&self.url("/users/essays"))
            .header("Accept", "application/json")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))?;

        if !res.ok() {
            return Err(Self::body_error(res, MSG_ESSAYS_FAILED).await);
        }
        res.json::<Vec<Essay>>()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))
    }
}

#[cfg(test)]
mod tests;
