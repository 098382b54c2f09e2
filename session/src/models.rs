use serde::{Deserialize, Serialize};

/// Role tag of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Administrative account.
    SuperAdmin,
    /// Standard customer account.
    Client,
}

/// The authenticated user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Overwrites name, email and phone with `values`.
    ///
    /// Identifier, role and avatar are left untouched.
    pub fn apply(&mut self, values: &ProfileValues) {
        self.name.clone_from(&values.name);
        self.email.clone_from(&values.email);
        self.phone.clone_from(&values.phone);
    }
}

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Editable part of the user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileValues {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfileValues {
    /// Returns true if submitting these values would not change `user`.
    ///
    /// An absent phone and an empty phone are considered equal.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.name == user.name
            && self.email == user.email
            && same_phone(self.phone.as_deref(), user.phone.as_deref())
    }
}

fn same_phone(a: Option<&str>, b: Option<&str>) -> bool {
    a == b || (a.unwrap_or_default().is_empty() && b.unwrap_or_default().is_empty())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::utils::test::{fixture_profile_values, fixture_user};

    #[test]
    fn test_deserialize_user() {
        let body = json!({
            "id": 1,
            "name": "A",
            "email": "a@b.com",
            "type": "client",
        });

        let got: User = serde_json::from_value(body).unwrap();

        assert_eq!(
            got,
            User {
                id: 1,
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                role: UserRole::Client,
                phone: None,
                avatar: None,
            }
        );
    }

    #[test]
    fn test_deserialize_admin_with_contact() {
        let body = json!({
            "id": 7,
            "name": "Root",
            "email": "root@example.com",
            "type": "super-admin",
            "phone": "(555) 123-4567",
            "avatar": "avatars/7.png",
        });

        let got: User = serde_json::from_value(body).unwrap();

        assert_eq!(got.role, UserRole::SuperAdmin);
        assert_eq!(got.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(got.avatar.as_deref(), Some("avatars/7.png"));
    }

    #[test]
    fn test_deserialize_unknown_role_fails() {
        let body = json!({ "id": 1, "name": "A", "email": "a@b.com", "type": "guest" });
        assert!(serde_json::from_value::<User>(body).is_err());
    }

    #[test]
    fn test_serialize_credentials() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            remember_me: true,
        };

        let got = serde_json::to_value(&credentials).unwrap();

        assert_eq!(
            got,
            json!({ "email": "a@b.com", "password": "x", "rememberMe": true })
        );
    }

    #[test]
    fn test_serialize_profile_values_without_phone() {
        let values = fixture_profile_values(|v| v.phone = None);

        let got = serde_json::to_value(&values).unwrap();

        assert_eq!(got, json!({ "name": "name", "email": "name@example.com" }));
    }

    #[rstest]
    #[case::identical(fixture_profile_values(|_| {}), fixture_user(|_| {}), true)]
    #[case::both_absent(
        fixture_profile_values(|v| v.phone = None),
        fixture_user(|u| u.phone = None),
        true
    )]
    #[case::empty_vs_absent(
        fixture_profile_values(|v| v.phone = Some(String::new())),
        fixture_user(|u| u.phone = None),
        true
    )]
    #[case::absent_vs_empty(
        fixture_profile_values(|v| v.phone = None),
        fixture_user(|u| u.phone = Some(String::new())),
        true
    )]
    #[case::name_changed(fixture_profile_values(|v| v.name = "other".to_string()), fixture_user(|_| {}), false)]
    #[case::email_changed(fixture_profile_values(|v| v.email = "o@example.com".to_string()), fixture_user(|_| {}), false)]
    #[case::phone_added(
        fixture_profile_values(|_| {}),
        fixture_user(|u| u.phone = None),
        false
    )]
    #[case::phone_removed(
        fixture_profile_values(|v| v.phone = None),
        fixture_user(|_| {}),
        false
    )]
    fn test_matches(#[case] values: ProfileValues, #[case] user: User, #[case] want: bool) {
        assert_eq!(values.matches(&user), want);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut user = fixture_user(|u| u.avatar = Some("avatars/1.png".to_string()));
        let values = ProfileValues {
            name: "B".to_string(),
            email: "b@example.com".to_string(),
            phone: None,
        };

        user.apply(&values);

        assert_eq!(
            user,
            fixture_user(|u| {
                u.name = "B".to_string();
                u.email = "b@example.com".to_string();
                u.phone = None;
                u.avatar = Some("avatars/1.png".to_string());
            })
        );
    }
}
