use tokio::sync::watch;

use crate::{
    notify::Notifier,
    state::{SessionState, Status},
    transport::Transport,
};

/// Owns the [`SessionState`] and the collaborators its operations talk to.
///
/// All operations take `&self` and may overlap. They share one busy flag,
/// so whichever operation resolves last decides whether the state reads as
/// busy. Nothing is persisted: a fresh store starts signed out and is
/// rehydrated with `fetch_current_user`.
pub struct SessionStore<T, N> {
    pub(crate) transport: T,
    pub(crate) notifier: N,
    state: watch::Sender<SessionState>,
}

impl<T, N> SessionStore<T, N>
where
    T: Transport,
    N: Notifier,
{
    /// Creates a signed-out, idle store.
    pub fn new(transport: T, notifier: N) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            transport,
            notifier,
            state,
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver is marked changed on every transition of the user or the
    /// busy flag.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub(crate) fn set_status(&self, status: Status) {
        self.state.send_modify(|state| state.status = status);
    }

    pub(crate) fn modify<F>(&self, func: F)
    where
        F: FnOnce(&mut SessionState),
    {
        self.state.send_modify(func);
    }

    pub(crate) fn with_state<F, R>(&self, func: F) -> R
    where
        F: FnOnce(&SessionState) -> R,
    {
        func(&*self.state.borrow())
    }
}
