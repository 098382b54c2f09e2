use tracing::{instrument, warn};

use crate::{notify::Notifier, state::Status, store::SessionStore, transport::Transport};

impl<T, N> SessionStore<T, N>
where
    T: Transport,
    N: Notifier,
{
    /// Rehydrates the user from the existing server session.
    ///
    /// Same shape as `login`, without credentials: busy while the request is
    /// in flight, user replaced on success and kept on failure.
    #[instrument(skip_all, fields(user_id))]
    pub async fn fetch_current_user(&self) {
        self.set_status(Status::Loading);

        match self.transport.current_user().await {
            Ok(user) => {
                tracing::Span::current().record("user_id", user.id);
                self.modify(|state| {
                    state.user = Some(user);
                    state.status = Status::Idle;
                });
            }
            Err(err) => {
                warn!(error = %err, "fetching current user failed");
                self.set_status(Status::Idle);
            }
        }
    }
}
