mod target;
pub use target::{Credentials, SessionTarget, RPC_PATH};

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

#[cfg(test)]
use mockall::automock;

use crate::{errors::SessionError, prefs::Prefs};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionController: Send + Sync {
    /// Re-establishes the session from the current preference values.
    async fn restart(&self, prefs: &Prefs) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
struct SessionState {
    target: Option<SessionTarget>,
    restarts: u64,
}

/// Session controller that tracks which target is active.
pub struct ManagedSession {
    config_dir: PathBuf,
    state: Mutex<SessionState>,
}

impl ManagedSession {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub async fn start(&self, prefs: &Prefs) -> Result<SessionTarget, SessionError> {
        let target = SessionTarget::from_prefs(prefs, self.config_dir.clone())?;
        let mut state = self.state.lock().await;
        log::info!("Starting {}", target);
        state.target = Some(target.clone());
        Ok(target)
    }

    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        if let Some(target) = state.target.take() {
            log::info!("Stopping {}", target);
        }
    }

    pub async fn target(&self) -> Option<SessionTarget> {
        self.state.lock().await.target.clone()
    }

    pub async fn restart_count(&self) -> u64 {
        self.state.lock().await.restarts
    }
}

#[async_trait]
impl SessionController for ManagedSession {
    async fn restart(&self, prefs: &Prefs) -> Result<(), SessionError> {
        let target = SessionTarget::from_prefs(prefs, self.config_dir.clone())?;

        let mut state = self.state.lock().await;
        if let Some(previous) = state.target.take() {
            log::info!("Stopping {}", previous);
        }
        log::info!("Starting {}", target);
        state.target = Some(target);
        state.restarts += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PrefKey;

    #[tokio::test]
    async fn restart_switches_target() {
        let session = ManagedSession::new("/var/lib/trem");
        let mut prefs = Prefs::new();

        session.start(&prefs).await.unwrap();
        assert_eq!(
            session.target().await,
            Some(SessionTarget::Local { config_dir: PathBuf::from("/var/lib/trem") })
        );

        prefs.set(PrefKey::SessionIsRemote, true).unwrap();
        prefs.set(PrefKey::SessionRemoteHost, "example.com").unwrap();
        session.restart(&prefs).await.unwrap();

        let target = session.target().await.unwrap();
        assert_eq!(
            target.rpc_url().as_deref(),
            Some("http://example.com:9091/transmission/rpc")
        );
        assert_eq!(session.restart_count().await, 1);
    }

    #[tokio::test]
    async fn stop_clears_target() {
        let session = ManagedSession::new(".");
        session.start(&Prefs::new()).await.unwrap();
        session.stop().await;
        assert_eq!(session.target().await, None);
        assert_eq!(session.restart_count().await, 0);
    }
}
