//! One-shot flash messages carried in a signed cookie.
//!
//! A handler that wants to show a message after a redirect calls [`set`];
//! the page that renders next calls [`take`], which hands the message back
//! and queues the cookie's removal. The payload is JSON wrapped in
//! URL-safe base64 so it stays within the cookie value alphabet, and the
//! jar's signature keeps clients from forging it.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::SignedCookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

const FLASH_COOKIE: &str = "pantry_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A message shown exactly once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Queues `flash` for the next page load.
pub fn set(jar: SignedCookieJar, flash: &Flash) -> SignedCookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, encode(flash)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Takes the pending flash, if any, and queues the cookie's removal.
///
/// A cookie that fails to decode is dropped silently; it is removed
/// either way, so a bad value cannot stick around.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = decode(cookie.value());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, flash)
}

fn encode(flash: &Flash) -> String {
    // Serializing two plain fields cannot fail.
    let payload = serde_json::to_vec(flash).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(payload)
}

fn decode(value: &str) -> Option<Flash> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}
