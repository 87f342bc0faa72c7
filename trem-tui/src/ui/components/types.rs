#[derive(Clone, Debug, PartialEq)]
pub enum ScreenState {
    SessionOverview,
    ConnectionDialog,
    MessagePopup,
}
