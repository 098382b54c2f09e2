use tracing::{instrument, warn};

use crate::{notify::Notifier, state::Status, store::SessionStore, transport::Transport};

impl<T, N> SessionStore<T, N>
where
    T: Transport,
    N: Notifier,
{
    /// Logs the current user out.
    ///
    /// The local user is only cleared once the backend confirmed the logout.
    /// A failed request leaves the user signed in.
    #[instrument(skip_all)]
    pub async fn logout(&self) {
        self.set_status(Status::Loading);

        match self.transport.logout().await {
            Ok(()) => self.modify(|state| {
                state.user = None;
                state.status = Status::Idle;
            }),
            Err(err) => {
                warn!(error = %err, "logout failed");
                self.set_status(Status::Idle);
            }
        }
    }
}
