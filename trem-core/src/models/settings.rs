use crate::{
    errors::PrefsError,
    prefs::{PrefKey, Prefs},
};

/// Connection settings edited by the session dialog. Fields are independent
/// and are never validated against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub is_remote: bool,
    pub remote_host: String,
    pub remote_port: i64,
    pub use_auth: bool,
    pub username: String,
    pub password: String,
}

impl ConnectionSettings {
    pub fn from_prefs(prefs: &Prefs) -> Result<Self, PrefsError> {
        Ok(Self {
            is_remote: prefs.get(PrefKey::SessionIsRemote)?,
            remote_host: prefs.get(PrefKey::SessionRemoteHost)?,
            remote_port: prefs.get(PrefKey::SessionRemotePort)?,
            use_auth: prefs.get(PrefKey::SessionRemoteAuth)?,
            username: prefs.get(PrefKey::SessionRemoteUsername)?,
            password: prefs.get(PrefKey::SessionRemotePassword)?,
        })
    }

    /// Writes the six session keys and nothing else.
    pub fn write_to(&self, prefs: &mut Prefs) -> Result<(), PrefsError> {
        prefs.set(PrefKey::SessionIsRemote, self.is_remote)?;
        prefs.set(PrefKey::SessionRemoteHost, self.remote_host.as_str())?;
        prefs.set(PrefKey::SessionRemotePort, self.remote_port)?;
        prefs.set(PrefKey::SessionRemoteAuth, self.use_auth)?;
        prefs.set(PrefKey::SessionRemoteUsername, self.username.as_str())?;
        prefs.set(PrefKey::SessionRemotePassword, self.password.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_what_was_written() {
        let settings = ConnectionSettings {
            is_remote: true,
            remote_host: String::new(),
            remote_port: 0,
            use_auth: true,
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };

        let mut prefs = Prefs::new();
        settings.write_to(&mut prefs).unwrap();
        assert_eq!(ConnectionSettings::from_prefs(&prefs).unwrap(), settings);
    }
}
