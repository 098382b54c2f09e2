use tracing::{info, instrument, warn};

use crate::{
    models::ProfileValues,
    notify::{Notice, Notifier},
    state::Status,
    store::SessionStore,
    transport::Transport,
};

pub(crate) const NO_CHANGES_MESSAGE: &str = "no changes were entered";
pub(crate) const PROFILE_SAVED_MESSAGE: &str = "profile changes saved";

impl<T, N> SessionStore<T, N>
where
    T: Transport,
    N: Notifier,
{
    /// Updates name, email and phone of the signed-in user.
    ///
    /// Values identical to the current user are not sent: an info notice is
    /// emitted and the state is left alone, including the busy flag.
    ///
    /// Otherwise the values are patched on the backend and, on success, merged
    /// into the current user followed by a success notice. A failure with
    /// status 419 signs the user out; any other failure keeps the user.
    #[instrument(skip_all)]
    pub async fn update_profile(&self, values: &ProfileValues) {
        let unchanged = self.with_state(|state| {
            state
                .user
                .as_ref()
                .is_some_and(|user| values.matches(user))
        });
        if unchanged {
            info!("profile unchanged, skipping update");
            self.notifier.notify(Notice::info(NO_CHANGES_MESSAGE));
            return;
        }

        self.set_status(Status::Loading);

        match self.transport.update_myself(values).await {
            Ok(()) => {
                let mut merged = false;
                self.modify(|state| {
                    if let Some(user) = state.user.as_mut() {
                        user.apply(values);
                        merged = true;
                    }
                    state.status = Status::Idle;
                });
                if merged {
                    self.notifier.notify(Notice::success(PROFILE_SAVED_MESSAGE));
                }
            }
            Err(err) => {
                let expired = err.is_session_expired();
                warn!(error = %err, expired, "profile update failed");
                self.modify(|state| {
                    state.status = Status::Idle;
                    if expired {
                        state.user = None;
                    }
                });
            }
        }
    }
}
