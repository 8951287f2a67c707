//! `X-<app>-alert` / `X-<app>-error` / `X-<app>-params` response headers.
//!
//! Clients show the alert text as a toast after a mutating request.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Builds alert headers for one client application name.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    /// Create a builder for `application_name`.
    ///
    /// Falls back to `app` when the name is not a valid header token.
    pub fn new(application_name: &str) -> Self {
        let name = |suffix: &str| {
            HeaderName::from_bytes(format!("x-{application_name}-{suffix}").as_bytes())
                .unwrap_or_else(|_| HeaderName::from_static(fallback(suffix)))
        };
        Self {
            alert: name("alert"),
            error: name("error"),
            params: name("params"),
        }
    }

    /// Headers for a successful creation.
    pub fn entity_created(&self, entity_name: &str, id: &str) -> HeaderMap {
        self.alert(
            &format!("A new {entity_name} is created with identifier {id}"),
            id,
        )
    }

    /// Headers for a successful update.
    pub fn entity_updated(&self, entity_name: &str, id: &str) -> HeaderMap {
        self.alert(&format!("A {entity_name} is updated with identifier {id}"), id)
    }

    /// Headers for a deletion.
    pub fn entity_deleted(&self, entity_name: &str, id: &str) -> HeaderMap {
        self.alert(&format!("A {entity_name} is deleted with identifier {id}"), id)
    }

    /// Headers for a rejected request.
    pub fn failure(&self, entity_name: &str, message: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.error, message);
        insert(&mut headers, &self.params, entity_name);
        headers
    }

    fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.alert, message);
        insert(&mut headers, &self.params, param);
        headers
    }
}

/// Values that cannot be sent as header text are skipped.
fn insert(headers: &mut HeaderMap, name: &HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name.clone(), value);
    }
}

fn fallback(suffix: &str) -> &'static str {
    match suffix {
        "alert" => "x-app-alert",
        "error" => "x-app-error",
        _ => "x-app-params",
    }
}
