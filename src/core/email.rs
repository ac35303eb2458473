//! Recipient address handling and the creation email sent to the external
//! notification service.

use crate::db::storage::{REC_EMAIL_KEY, SnapshotStorage};
use crate::errors::{AppError, AppResult};
use crate::models::interview::Interview;
use crate::models::notification::EmailPayload;
use regex::Regex;
use reqwest::blocking::Client;
use std::sync::LazyLock;
use std::time::Duration;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

const FALLBACK_ERROR: &str = "Error sending email.";

/// Local part, `@`, and a domain containing a dot.
pub fn is_valid_email(addr: &str) -> bool {
    EMAIL_RE.is_match(addr.trim())
}

pub fn validate_email(addr: &str) -> AppResult<String> {
    let addr = addr.trim();
    if is_valid_email(addr) {
        Ok(addr.to_string())
    } else {
        Err(AppError::Validation(format!(
            "Invalid email address '{}'.",
            addr
        )))
    }
}

pub fn recipient_email<S: SnapshotStorage + ?Sized>(storage: &S) -> AppResult<Option<String>> {
    Ok(storage
        .read(REC_EMAIL_KEY)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Recipient needed before scheduling; missing → validation error.
pub fn require_recipient<S: SnapshotStorage + ?Sized>(storage: &S) -> AppResult<String> {
    recipient_email(storage)?.ok_or_else(|| {
        AppError::Validation(
            "Recipient email not found. Please set up your email notifications.".into(),
        )
    })
}

pub fn set_recipient_email<S: SnapshotStorage + ?Sized>(
    storage: &mut S,
    addr: &str,
) -> AppResult<String> {
    let addr = validate_email(addr)?;
    storage.write(REC_EMAIL_KEY, &addr)?;
    Ok(addr)
}

/// Outbound side of the creation email.
pub trait Notifier {
    fn send(&self, payload: &EmailPayload) -> AppResult<()>;
}

/// POSTs the payload as JSON to `{api_url}/sendemail`.
pub struct HttpNotifier {
    client: Client,
    endpoint: String,
}

pub fn endpoint(api_url: &str) -> String {
    format!("{}/sendemail", api_url.trim_end_matches('/'))
}

impl HttpNotifier {
    pub fn new(api_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::NotificationDispatch(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint(api_url),
        })
    }
}

impl Notifier for HttpNotifier {
    fn send(&self, payload: &EmailPayload) -> AppResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|e| AppError::NotificationDispatch(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(AppError::NotificationDispatch(error_message(&body)))
    }
}

/// `message` field of an error response body, or a generic text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

/// Send the creation email for a freshly scheduled interview.
pub fn notify_created<N: Notifier + ?Sized>(
    notifier: &N,
    iv: &Interview,
    rec_email: &str,
) -> AppResult<EmailPayload> {
    let payload = EmailPayload::for_interview(iv, rec_email);
    notifier.send(&payload)?;
    Ok(payload)
}
