use std::sync::Arc;

use tokio::sync::RwLock;

use crate::spotify::SpotifyClient;

/// Holds the Spotify session established by the most recent login.
///
/// The store starts empty; operations that need Spotify check it first
/// and tell the user to log in when nothing is there. A new login simply
/// replaces whatever session was installed before.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<SpotifyClient>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Installs a freshly authorized client.
    pub async fn set(&self, client: SpotifyClient) {
        *self.inner.write().await = Some(client);
    }

    /// Returns the current session, if a login happened.
    pub async fn get(&self) -> Option<SpotifyClient> {
        self.inner.read().await.clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
