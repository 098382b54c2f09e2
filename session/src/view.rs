use crate::state::SessionState;

/// Entries of the account menu of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    EditProfile,
    Logout,
}

/// What the account slot of the navigation bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountMenu {
    /// A session operation is in flight. Takes precedence over the user.
    Loading,
    /// No user: offer the login link.
    SignedOut,
    SignedIn {
        name: String,
        email: String,
        entries: [MenuEntry; 2],
    },
}

impl From<&SessionState> for AccountMenu {
    fn from(state: &SessionState) -> Self {
        if state.is_busy() {
            return Self::Loading;
        }
        match &state.user {
            None => Self::SignedOut,
            Some(user) => Self::SignedIn {
                name: user.name.clone(),
                email: user.email.clone(),
                entries: [MenuEntry::EditProfile, MenuEntry::Logout],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{AccountMenu, MenuEntry};
    use crate::{
        models::User,
        state::{SessionState, Status},
        utils::test::fixture_user,
    };

    #[rstest]
    #[case::idle_signed_out(None, Status::Idle, AccountMenu::SignedOut)]
    #[case::loading_signed_out(None, Status::Loading, AccountMenu::Loading)]
    #[case::loading_signed_in(Some(fixture_user(|_| {})), Status::Loading, AccountMenu::Loading)]
    #[case::signed_in(
        Some(fixture_user(|_| {})),
        Status::Idle,
        AccountMenu::SignedIn {
            name: "name".to_string(),
            email: "name@example.com".to_string(),
            entries: [MenuEntry::EditProfile, MenuEntry::Logout],
        }
    )]
    fn test_account_menu(
        #[case] user: Option<User>,
        #[case] status: Status,
        #[case] want: AccountMenu,
    ) {
        let state = SessionState { user, status };
        assert_eq!(AccountMenu::from(&state), want);
    }
}
