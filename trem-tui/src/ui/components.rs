pub mod dialog_input;
pub mod session_client;
pub mod types;
