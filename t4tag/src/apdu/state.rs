// t4tag/src/apdu/state.rs
//! Selection state machine.

/// File selection state of one emulation session.
///
/// `Initial -> AppSelected -> CcSelected | NdefSelected`. Once the
/// application is selected either file can be selected from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected since activation.
    #[default]
    Initial,
    /// NDEF Tag Application selected, no file yet.
    AppSelected,
    /// Capability Container selected.
    CcSelected,
    /// NDEF file selected.
    NdefSelected,
}

impl SelectionState {
    /// Application selected, with or without a selected file.
    pub fn is_app_selected(&self) -> bool {
        !matches!(self, Self::Initial)
    }
}
