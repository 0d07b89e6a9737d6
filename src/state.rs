//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the per-session workspace store and the content generator used by
//! every "AI" button. Nothing here is global; tests build their own state.

use std::sync::Arc;

use crate::services::ai::{ContentGenerator, StubGenerator};
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub generator: Arc<dyn ContentGenerator>,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Arc<dyn ContentGenerator>, cookie_secure: bool) -> Self {
        Self { sessions: SessionStore::new(), generator, cookie_secure }
    }

    /// State wired to the placeholder generator.
    #[must_use]
    pub fn with_stub_generator(cookie_secure: bool) -> Self {
        Self::new(Arc::new(StubGenerator), cookie_secure)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
