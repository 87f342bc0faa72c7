pub mod dialog;
pub mod errors;
pub mod models;
pub mod prefs;
pub mod session;

pub use dialog::ConnectionSettingsDialog;
pub use models::settings::ConnectionSettings;
pub use prefs::{PrefKey, Prefs};
pub use session::{ManagedSession, SessionController, SessionTarget};
