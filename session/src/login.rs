use tracing::{instrument, warn};

use crate::{
    models::Credentials, notify::Notifier, state::Status, store::SessionStore,
    transport::Transport,
};

impl<T, N> SessionStore<T, N>
where
    T: Transport,
    N: Notifier,
{
    /// Logs a user in with email and password.
    ///
    /// Marks the session busy for the duration of the request. On success the
    /// returned user replaces the current one; on failure the user is kept.
    #[instrument(skip_all, fields(user_id))]
    pub async fn login(&self, credentials: &Credentials) {
        self.set_status(Status::Loading);

        match self.transport.login(credentials).await {
            Ok(user) => {
                tracing::Span::current().record("user_id", user.id);
                self.modify(|state| {
                    state.user = Some(user);
                    state.status = Status::Idle;
                });
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.set_status(Status::Idle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tokio::sync::Mutex;

    use crate::{
        error::Error,
        models::User,
        state::{SessionState, Status},
        store::SessionStore,
        transport::MockTransport,
        utils::test::{
            RecordingNotifier, fixture_credentials, fixture_user, server_error,
            session_expired_error, signed_in,
        },
    };

    #[rstest]
    #[case::happy_path(None, Ok(fixture_user(|_| {})), Some(fixture_user(|_| {})))]
    #[case::replaces_user(
        Some(fixture_user(|u| u.id = 2)),
        Ok(fixture_user(|_| {})),
        Some(fixture_user(|_| {}))
    )]
    #[case::rejected_signed_out(None, Err(server_error()), None)]
    #[case::rejected_keeps_user(
        Some(fixture_user(|_| {})),
        Err(server_error()),
        Some(fixture_user(|_| {}))
    )]
    #[case::expired_keeps_user(
        Some(fixture_user(|_| {})),
        Err(session_expired_error()),
        Some(fixture_user(|_| {}))
    )]
    #[tokio::test]
    async fn test_login(
        #[case] initial: Option<User>,
        #[case] login_result: Result<User, Error>,
        #[case] want: Option<User>,
    ) {
        // given
        let transport = MockTransport {
            login: Mutex::new(Some(login_result)),
            ..Default::default()
        };
        let store = signed_in(SessionStore::new(transport, RecordingNotifier::default()), initial);
        let changes = store.subscribe();

        // when
        store.login(&fixture_credentials()).await;

        // then
        assert_eq!(
            store.snapshot(),
            SessionState {
                user: want,
                status: Status::Idle,
            }
        );
        assert!(changes.has_changed().unwrap());
        assert_eq!(store.transport.login_calls(), 1);
        assert_eq!(store.transport.login_args(), vec![(fixture_credentials(),)]);
        assert!(store.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_login_scenario() {
        let returned: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "A",
            "email": "a@b.com",
            "type": "client",
        }))
        .unwrap();
        let transport = MockTransport {
            login: Mutex::new(Some(Ok(returned.clone()))),
            ..Default::default()
        };
        let store = SessionStore::new(transport, RecordingNotifier::default());
        assert_eq!(store.snapshot(), SessionState::default());

        store
            .login(&crate::models::Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
                remember_me: true,
            })
            .await;

        assert_eq!(
            store.snapshot(),
            SessionState {
                user: Some(returned),
                status: Status::Idle,
            }
        );
    }
}
