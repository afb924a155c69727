//! Controller layer: per-entity update flows and list screens.

pub mod area_list;
pub mod area_update;
pub mod curso_list;
pub mod curso_update;

/// Shown when a failed save carries no server-provided message.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Ocorreu um erro desconhecido. Tente novamente mais tarde.";

/// States one update screen moves through. Failure paths land back in
/// `Editing` with the user's edits intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlowState {
    Idle,
    LoadingRelatedData,
    Editing,
    Saving,
}

/// Scoped saving indicator: flips the flow state to `Saving` and guarantees
/// the reset to `Editing` on every exit path, success and failure alike.
pub(crate) struct SavingGuard<'a>(&'a mut UpdateFlowState);

impl<'a> SavingGuard<'a> {
    pub(crate) fn new(state: &'a mut UpdateFlowState) -> Self {
        *state = UpdateFlowState::Saving;
        Self(state)
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = UpdateFlowState::Editing;
    }
}
