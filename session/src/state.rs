use crate::models::User;

/// Coarse progress indicator shared by all session operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
}

/// Read-only view of the session: the signed-in user and the busy flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: Status,
}

impl SessionState {
    /// Returns true while an operation is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == Status::Loading
    }
}
