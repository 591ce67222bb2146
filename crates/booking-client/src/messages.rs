//! User-facing error messages.
//!
//! [`user_message`] maps any failure to a short sentence a customer can act
//! on. [`redact`] masks credential-looking words and must be applied to any
//! text that leaves the process (UI, logs). [`display_message`] does both.

use std::error::Error;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ClientError;

/// Shown when a request exceeded its timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Shown when the backend could not be reached at all.
pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to the server. Please check your connection.";

/// Shown for everything else.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Replacement for masked words.
pub const REDACTION_MARKER: &str = "[REDACTED]";

static SENSITIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)password|token|key|secret").expect("valid redaction pattern"));

/// Map a failure to a message suitable for end users.
pub fn user_message(cause: &(dyn Error + 'static)) -> String {
    if let Some(err) = cause.downcast_ref::<ClientError>() {
        match err {
            ClientError::Application(message) if !message.trim().is_empty() => {
                return message.clone();
            }
            ClientError::Timeout => return TIMEOUT_MESSAGE.to_string(),
            ClientError::Http(e) => {
                if let Some(message) = classify_reqwest(e) {
                    return message.to_string();
                }
            }
            _ => {}
        }
    }

    if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
        if let Some(message) = classify_reqwest(e) {
            return message.to_string();
        }
    }

    if cause.is::<tokio::time::error::Elapsed>() {
        return TIMEOUT_MESSAGE.to_string();
    }

    if mentions_fetch_failure(&cause.to_string()) {
        return CANNOT_CONNECT_MESSAGE.to_string();
    }

    GENERIC_MESSAGE.to_string()
}

/// Mask every case-insensitive occurrence of "password", "token", "key" and
/// "secret".
pub fn redact(text: &str) -> String {
    SENSITIVE.replace_all(text, REDACTION_MARKER).into_owned()
}

/// [`user_message`] followed by [`redact`].
pub fn display_message(cause: &(dyn Error + 'static)) -> String {
    redact(&user_message(cause))
}

fn classify_reqwest(e: &reqwest::Error) -> Option<&'static str> {
    if e.is_timeout() {
        Some(TIMEOUT_MESSAGE)
    } else if e.is_connect() {
        Some(CANNOT_CONNECT_MESSAGE)
    } else {
        None
    }
}

fn mentions_fetch_failure(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("fetch") || lower.contains("error sending request")
}
