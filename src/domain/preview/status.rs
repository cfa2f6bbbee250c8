//! Preview session lifecycle.

use crate::domain::foundation::StateMachine;

/// Lifecycle of a preview session.
///
/// ```text
/// Uninitialized -> SchemaLoading -> Ready <-> Rendering
///                        |            \
///                        v             -> Disposed
///                    LoadFailed ------------^
/// ```
///
/// `LoadFailed` keeps the panel open with the load error on screen but
/// accepts no further updates, since there is no validator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreviewStatus {
    #[default]
    Uninitialized,
    SchemaLoading,
    Ready,
    Rendering,
    LoadFailed,
    Disposed,
}

impl PreviewStatus {
    /// Returns true if an update cycle may run in this state.
    pub fn accepts_updates(&self) -> bool {
        matches!(self, PreviewStatus::Ready)
    }

    /// Returns true once the panel has been closed.
    pub fn is_disposed(&self) -> bool {
        matches!(self, PreviewStatus::Disposed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewStatus::Uninitialized => "uninitialized",
            PreviewStatus::SchemaLoading => "schema_loading",
            PreviewStatus::Ready => "ready",
            PreviewStatus::Rendering => "rendering",
            PreviewStatus::LoadFailed => "load_failed",
            PreviewStatus::Disposed => "disposed",
        }
    }
}

impl StateMachine for PreviewStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PreviewStatus::*;
        matches!(
            (self, target),
            (Uninitialized, SchemaLoading)
                | (SchemaLoading, Ready)
                | (SchemaLoading, LoadFailed)
                | (Ready, Rendering)
                | (Rendering, Ready)
                | (Uninitialized, Disposed)
                | (SchemaLoading, Disposed)
                | (Ready, Disposed)
                | (Rendering, Disposed)
                | (LoadFailed, Disposed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PreviewStatus::*;
        match self {
            Uninitialized => vec![SchemaLoading, Disposed],
            SchemaLoading => vec![Ready, LoadFailed, Disposed],
            Ready => vec![Rendering, Disposed],
            Rendering => vec![Ready, Disposed],
            LoadFailed => vec![Disposed],
            Disposed => vec![],
        }
    }
}
