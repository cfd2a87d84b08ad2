//! HTTP application wiring (Axum router + state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per page area)
//! - `templates.rs`: the compiled-in Tera templates
//! - `dto.rs`: form payloads and their mapping to domain types
//! - `errors.rs`: the error page for failures nothing can recover from

use std::sync::Arc;

use axum::extract::FromRef;
use axum::Router;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use tera::Tera;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use pantry_store::ItemStore;

use crate::config::Config;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod templates;

/// Shared handler state: the item store, the template set, and the
/// cookie signing key.
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub templates: Arc<Tera>,
    key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Opens the database, runs the schema migration, and wires every route
/// behind request tracing.
pub async fn build_app(config: &Config) -> anyhow::Result<Router> {
    let store = ItemStore::open(&config.database).await?;
    store.migrate().await?;

    let state = AppState {
        store,
        templates: Arc::new(templates::build()?),
        key: signing_key(&config.secret_key),
    };

    Ok(routes::router()
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state))
}

/// Stretches the configured secret into the 64 bytes the signing key
/// requires, so short development secrets still produce a valid key.
fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secrets_still_yield_a_key() {
        // Key::from requires 64 bytes of material; the stretch must cover
        // secrets far shorter than that.
        let _ = signing_key("x");
        let _ = signing_key(crate::config::DEFAULT_SECRET);
    }

    #[test]
    fn distinct_secrets_yield_distinct_keys() {
        let a = signing_key("first-secret");
        let b = signing_key("second-secret");
        assert_ne!(a.master(), b.master());
    }
}
