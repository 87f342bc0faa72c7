/// Interactive controls of the connection dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogField {
    LocalSession,
    RemoteSession,
    Host,
    Port,
    Auth,
    Username,
    Password,
}

impl DialogField {
    pub const ALL: [DialogField; 7] = [
        DialogField::LocalSession,
        DialogField::RemoteSession,
        DialogField::Host,
        DialogField::Port,
        DialogField::Auth,
        DialogField::Username,
        DialogField::Password,
    ];

    pub fn label(&self) -> &str {
        match self {
            DialogField::LocalSession => "Start local session",
            DialogField::RemoteSession => "Connect to remote session",
            DialogField::Host => "Host",
            DialogField::Port => "Port",
            DialogField::Auth => "Authentication required",
            DialogField::Username => "Username",
            DialogField::Password => "Password",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            DialogField::Host | DialogField::Username | DialogField::Password
        )
    }
}

/// Fields usable only in remote mode.
pub const REMOTE_FIELDS: [DialogField; 3] =
    [DialogField::Host, DialogField::Port, DialogField::Auth];

/// Fields usable only in remote mode with authentication on.
pub const AUTH_FIELDS: [DialogField; 2] = [DialogField::Username, DialogField::Password];

/// Enabled state of the two dependent field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensitivity {
    pub remote: bool,
    pub auth: bool,
}

impl Sensitivity {
    pub fn compute(is_remote: bool, use_auth: bool) -> Self {
        Self {
            remote: is_remote,
            auth: is_remote && use_auth,
        }
    }

    pub fn is_enabled(&self, field: DialogField) -> bool {
        if REMOTE_FIELDS.contains(&field) {
            self.remote
        } else if AUTH_FIELDS.contains(&field) {
            self.auth
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mode_disables_everything_dependent() {
        for use_auth in [false, true] {
            let s = Sensitivity::compute(false, use_auth);
            for field in REMOTE_FIELDS.iter().chain(AUTH_FIELDS.iter()) {
                assert!(!s.is_enabled(*field), "{:?} enabled", field);
            }
        }
    }

    #[test]
    fn remote_without_auth() {
        let s = Sensitivity::compute(true, false);
        assert!(REMOTE_FIELDS.iter().all(|f| s.is_enabled(*f)));
        assert!(AUTH_FIELDS.iter().all(|f| !s.is_enabled(*f)));
    }

    #[test]
    fn remote_with_auth() {
        let s = Sensitivity::compute(true, true);
        assert!(DialogField::ALL.iter().all(|f| s.is_enabled(*f)));
    }

    #[test]
    fn mode_radios_are_always_enabled() {
        let s = Sensitivity::compute(false, false);
        assert!(s.is_enabled(DialogField::LocalSession));
        assert!(s.is_enabled(DialogField::RemoteSession));
    }
}
