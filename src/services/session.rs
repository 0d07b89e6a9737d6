//! Session service — browser-session tokens and their workspaces.
//!
//! DESIGN
//! ======
//! A session is identified by a random hex token held in a cookie. The store
//! maps each token to an `Arc<Workspace>` snapshot; updates run the
//! copy-on-write transition under the write lock and swap the `Arc`, so
//! readers holding an older snapshot keep a consistent view.
//!
//! Nothing is persisted. A background sweeper evicts sessions that have been
//! idle longer than the configured TTL, which is what "lives for the
//! duration of the browser session" amounts to on the server side.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::workspace::{Workspace, WorkspaceCommand, WorkspaceError};

const TOKEN_BYTES: usize = 32;

// =============================================================================
// TOKENS
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// True if `token` has the shape produced by [`generate_token`].
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    token.len() == TOKEN_BYTES * 2 && token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Short prefix of a token, safe to put in logs.
#[must_use]
pub fn token_tag(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

// =============================================================================
// STORE
// =============================================================================

struct SessionEntry {
    workspace: Arc<Workspace>,
    last_seen: Instant,
}

impl SessionEntry {
    fn fresh(now: Instant) -> Self {
        Self { workspace: Arc::new(Workspace::default()), last_seen: now }
    }
}

/// In-memory workspaces keyed by session token.
/// Clone is cheap; all clones share the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workspace for `token`, starting a fresh one if the session is new.
    pub async fn snapshot(&self, token: &str) -> Arc<Workspace> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(token.to_owned()).or_insert_with(|| {
            debug!(session = token_tag(token), "session started");
            SessionEntry::fresh(now)
        });
        entry.last_seen = now;
        entry.workspace.clone()
    }

    /// Replace the session's workspace with the result of `transition`.
    /// On error the stored workspace is left as it was.
    ///
    /// # Errors
    ///
    /// Returns whatever error `transition` reports.
    pub async fn update<F>(&self, token: &str, transition: F) -> Result<Arc<Workspace>, WorkspaceError>
    where
        F: FnOnce(&Workspace) -> Result<Workspace, WorkspaceError>,
    {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(token.to_owned()).or_insert_with(|| SessionEntry::fresh(now));
        entry.last_seen = now;

        let next = Arc::new(transition(&entry.workspace)?);
        entry.workspace = next.clone();
        Ok(next)
    }

    /// Apply one command to the session's workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is invalid for the current workspace.
    pub async fn apply(&self, token: &str, command: WorkspaceCommand) -> Result<Arc<Workspace>, WorkspaceError> {
        self.update(token, |ws| ws.apply(command)).await
    }

    /// Apply several commands as one transition; either all land or none do.
    ///
    /// # Errors
    ///
    /// Returns the first command's error; the stored workspace is unchanged.
    pub async fn apply_all(
        &self,
        token: &str,
        commands: Vec<WorkspaceCommand>,
    ) -> Result<Arc<Workspace>, WorkspaceError> {
        self.update(token, |ws| {
            commands
                .into_iter()
                .try_fold(ws.clone(), |next, command| next.apply(command))
        })
        .await
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drop sessions not seen within `ttl`. Returns how many were removed.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        self.evict_idle_at(Instant::now(), ttl).await
    }

    async fn evict_idle_at(&self, now: Instant, ttl: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < ttl);
        before - sessions.len()
    }
}

// =============================================================================
// SWEEPER
// =============================================================================

/// Spawn the background task that evicts idle sessions. Returns a handle for shutdown.
pub fn spawn_session_sweeper(store: SessionStore, every: Duration, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let evicted = store.evict_idle(ttl).await;
            if evicted > 0 {
                let remaining = store.len().await;
                info!(evicted, remaining, "idle sessions evicted");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
