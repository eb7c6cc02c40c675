use siba::engine::session::Session;

/// Progress of the one-time dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The load failed; pages render with empty collections.
    Failed,
}

/// Application-wide state shared through context as a `Signal<SessionState>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub load: LoadState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            load: LoadState::Loading,
        }
    }
}
