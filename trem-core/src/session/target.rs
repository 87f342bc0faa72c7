use std::{fmt, path::PathBuf};

use crate::{errors::PrefsError, models::settings::ConnectionSettings, prefs::Prefs};

pub const RPC_PATH: &str = "/transmission/rpc";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Where a session runs, as derived from the current preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTarget {
    Local {
        config_dir: PathBuf,
    },
    Remote {
        host: String,
        port: i64,
        credentials: Option<Credentials>,
    },
}

impl SessionTarget {
    pub fn from_settings(settings: &ConnectionSettings, config_dir: PathBuf) -> Self {
        if !settings.is_remote {
            return SessionTarget::Local { config_dir };
        }

        let credentials = settings.use_auth.then(|| Credentials {
            username: settings.username.clone(),
            password: settings.password.clone(),
        });

        SessionTarget::Remote {
            host: settings.remote_host.clone(),
            port: settings.remote_port,
            credentials,
        }
    }

    pub fn from_prefs(prefs: &Prefs, config_dir: PathBuf) -> Result<Self, PrefsError> {
        let settings = ConnectionSettings::from_prefs(prefs)?;
        Ok(Self::from_settings(&settings, config_dir))
    }

    pub fn rpc_url(&self) -> Option<String> {
        match self {
            SessionTarget::Local { .. } => None,
            SessionTarget::Remote { host, port, .. } => {
                Some(format!("http://{}:{}{}", host, port, RPC_PATH))
            }
        }
    }
}

impl fmt::Display for SessionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionTarget::Local { config_dir } => {
                write!(f, "local session ({})", config_dir.display())
            }
            SessionTarget::Remote { host, port, credentials } => {
                write!(f, "remote session {}:{}", host, port)?;
                if let Some(credentials) = credentials {
                    write!(f, " as {}", credentials.username)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(use_auth: bool) -> ConnectionSettings {
        ConnectionSettings {
            is_remote: true,
            remote_host: "example.com".to_string(),
            remote_port: 9091,
            use_auth,
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn local_settings_ignore_remote_fields() {
        let mut settings = remote(true);
        settings.is_remote = false;
        let target = SessionTarget::from_settings(&settings, PathBuf::from("/tmp/trem"));
        assert_eq!(
            target,
            SessionTarget::Local { config_dir: PathBuf::from("/tmp/trem") }
        );
        assert_eq!(target.rpc_url(), None);
    }

    #[test]
    fn credentials_only_with_auth() {
        let target = SessionTarget::from_settings(&remote(false), PathBuf::new());
        assert!(matches!(target, SessionTarget::Remote { credentials: None, .. }));

        let target = SessionTarget::from_settings(&remote(true), PathBuf::new());
        assert!(matches!(target, SessionTarget::Remote { credentials: Some(_), .. }));
    }

    #[test]
    fn remote_rpc_url() {
        let target = SessionTarget::from_settings(&remote(false), PathBuf::new());
        assert_eq!(
            target.rpc_url().as_deref(),
            Some("http://example.com:9091/transmission/rpc")
        );
    }

    #[test]
    fn password_is_masked() {
        let target = SessionTarget::from_settings(&remote(true), PathBuf::new());
        let debug = format!("{:?}", target);
        assert!(!debug.contains("secret"));
        assert!(!target.to_string().contains("secret"));
    }
}
