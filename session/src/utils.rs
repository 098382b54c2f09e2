#[cfg(test)]
pub(crate) mod test {
    use std::sync::Mutex;

    use reqwest::StatusCode;

    use crate::{
        error::Error,
        models::{Credentials, ProfileValues, User, UserRole},
        notify::{Notice, Notifier},
        store::SessionStore,
        transport::Transport,
    };

    /// Notifier that keeps every notice for later inspection.
    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        pub(crate) fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    /// Seeds the store with `user` without going through an operation.
    pub(crate) fn signed_in<T, N>(store: SessionStore<T, N>, user: Option<User>) -> SessionStore<T, N>
    where
        T: Transport,
        N: Notifier,
    {
        store.modify(|state| state.user = user);
        store
    }

    pub(crate) fn fixture_user<F>(mut func: F) -> User
    where
        F: FnMut(&mut User),
    {
        let mut user = User {
            id: 1,
            name: "name".to_string(),
            email: "name@example.com".to_string(),
            role: UserRole::Client,
            phone: Some("(555) 123-4567".to_string()),
            avatar: None,
        };
        func(&mut user);
        user
    }

    pub(crate) fn fixture_profile_values<F>(mut func: F) -> ProfileValues
    where
        F: FnMut(&mut ProfileValues),
    {
        let mut values = ProfileValues {
            name: "name".to_string(),
            email: "name@example.com".to_string(),
            phone: Some("(555) 123-4567".to_string()),
        };
        func(&mut values);
        values
    }

    pub(crate) fn fixture_credentials() -> Credentials {
        Credentials {
            email: "name@example.com".to_string(),
            password: "password".to_string(),
            remember_me: false,
        }
    }

    pub(crate) fn session_expired_error() -> Error {
        Error::UnexpectedStatusCode {
            status: StatusCode::from_u16(419).unwrap(),
            body: r#"{"message":"session expired"}"#.to_string(),
        }
    }

    pub(crate) fn server_error() -> Error {
        Error::UnexpectedStatusCode {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        }
    }
}
