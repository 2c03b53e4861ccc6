/**
 * Cookie-Backed Session Middleware
 *
 * The session is a string-keyed JSON mapping kept entirely in the browser,
 * inside a signed cookie named `session`. The server never stores it.
 *
 * For each request the middleware:
 * 1. Reads and verifies the `session` cookie (a bad signature or an
 *    undecodable value yields an empty session)
 * 2. Puts a [`Session`] handle into the request extensions
 * 3. Runs the handler
 * 4. If the handler changed the session, writes the cookie back, or removes
 *    it when the mapping became empty
 */

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use cookie::time::Duration;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Name of the signed session cookie
pub const SESSION_COOKIE: &str = "session";

/// Session cookie lifetime
const SESSION_MAX_AGE: Duration = Duration::days(14);

#[derive(Debug, Default)]
struct SessionInner {
    data: BTreeMap<String, Value>,
    modified: bool,
}

/// Per-request handle to the session mapping
///
/// Cloning is cheap; all clones see the same mapping, which is how the
/// middleware observes changes made by the handler.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    /// Decode a session from a verified cookie value
    pub fn from_cookie_value(value: &str) -> Self {
        let data = URL_SAFE_NO_PAD
            .decode(value)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<BTreeMap<String, Value>>(&bytes).ok())
            .unwrap_or_else(|| {
                tracing::debug!("Discarding undecodable session cookie");
                BTreeMap::new()
            });

        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                data,
                modified: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read a value without removing it
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let inner = self.lock();
        inner
            .data
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Store a value under `key`, replacing any previous one
    pub fn insert<T: Serialize>(&self, key: &str, value: T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        let mut inner = self.lock();
        inner.data.insert(key.to_string(), value);
        inner.modified = true;
        Ok(())
    }

    /// Remove and return the value under `key`
    pub fn remove<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut inner = self.lock();
        let value = inner.data.remove(key)?;
        inner.modified = true;
        serde_json::from_value(value).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().data.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.lock().modified
    }

    /// Encoded cookie value, or `None` for an empty session
    pub fn encode(&self) -> Option<String> {
        let inner = self.lock();
        if inner.data.is_empty() {
            return None;
        }
        match serde_json::to_vec(&inner.data) {
            Ok(bytes) => Some(URL_SAFE_NO_PAD.encode(bytes)),
            Err(e) => {
                tracing::error!("Failed to encode session: {:?}", e);
                None
            }
        }
    }

    /// Apply this session to an outgoing cookie jar
    pub fn write_to(&self, jar: SignedCookieJar) -> SignedCookieJar {
        match self.encode() {
            Some(value) => jar.add(
                Cookie::build((SESSION_COOKIE, value))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .max_age(SESSION_MAX_AGE),
            ),
            None => jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        }
    }
}

/// Session middleware
///
/// Must wrap every route that reads or writes flash messages.
pub async fn session_middleware(jar: SignedCookieJar, mut request: Request, next: Next) -> Response {
    let session = jar
        .get(SESSION_COOKIE)
        .map(|cookie| Session::from_cookie_value(cookie.value()))
        .unwrap_or_default();

    request.extensions_mut().insert(session.clone());

    let response = next.run(request).await;

    if !session.is_modified() {
        return response;
    }

    (session.write_to(jar), response).into_response()
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            tracing::error!("Session not found in request extensions, is the session middleware installed?");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let session = Session::default();
        assert!(!session.is_modified());

        session.insert("answer", 42).unwrap();
        assert!(session.is_modified());
        assert_eq!(session.get::<i32>("answer"), Some(42));

        assert_eq!(session.remove::<i32>("answer"), Some(42));
        assert_eq!(session.get::<i32>("answer"), None);
        assert!(session.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_not_a_modification() {
        let session = Session::default();
        assert_eq!(session.remove::<String>("missing"), None);
        assert!(!session.is_modified());
    }

    #[test]
    fn test_cookie_value_roundtrip() {
        let session = Session::default();
        session.insert("name", "alice").unwrap();

        let encoded = session.encode().unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = Session::from_cookie_value(&encoded);
        assert_eq!(decoded.get::<String>("name").as_deref(), Some("alice"));
        assert!(!decoded.is_modified());
    }

    #[test]
    fn test_garbage_cookie_gives_empty_session() {
        let session = Session::from_cookie_value("%%% not base64 %%%");
        assert!(session.is_empty());
    }

    #[test]
    fn test_empty_session_encodes_to_none() {
        assert_eq!(Session::default().encode(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::default();
        let handle = session.clone();
        handle.insert("k", true).unwrap();
        assert_eq!(session.get::<bool>("k"), Some(true));
        assert!(session.is_modified());
    }
}
