//! Durable client-side preferences.
//!
//! Preferences are small string values keyed by name. In the browser they
//! live in long-lived cookies; tests use the in-memory store.

use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderValue, header};
use thiserror::Error;
use tower_sessions::cookie::{Cookie, SameSite};

/// Prefix applied to every preference cookie name.
pub const COOKIE_PREFIX: &str = "inventory_";

/// Errors writing a preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("invalid preference value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Key/value storage that outlives the session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError` if the value cannot be stored.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local preferences.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences read from the request's cookies.
///
/// Writes are collected and turned into `Set-Cookie` headers with
/// [`CookiePreferences::into_set_cookie_headers`].
#[derive(Debug, Default)]
pub struct CookiePreferences {
    values: HashMap<String, String>,
    writes: Vec<Cookie<'static>>,
    secure: bool,
}

impl CookiePreferences {
    /// Collect the preference cookies present on a request.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        let values = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .filter_map(|cookie| {
                cookie
                    .name()
                    .strip_prefix(COOKIE_PREFIX)
                    .map(|key| (key.to_string(), cookie.value().to_string()))
            })
            .collect();

        Self {
            values,
            writes: Vec::new(),
            secure,
        }
    }

    /// Render pending writes as `Set-Cookie` header values.
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError` if a cookie is not a valid header value.
    pub fn into_set_cookie_headers(self) -> Result<Vec<HeaderValue>, PreferenceError> {
        self.writes
            .into_iter()
            .map(|cookie| {
                HeaderValue::from_str(&cookie.to_string()).map_err(|e| {
                    PreferenceError::InvalidValue {
                        key: cookie.name().to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(PreferenceError::InvalidValue {
                key: key.to_string(),
                reason: "only letters, digits, '-' and '_' are allowed".to_string(),
            });
        }

        let cookie = Cookie::build((format!("{COOKIE_PREFIX}{key}"), value.to_string()))
            .path("/")
            .permanent()
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure)
            .build();

        self.values.insert(key.to_string(), value.to_string());
        self.writes.push(cookie);
        Ok(())
    }
}
