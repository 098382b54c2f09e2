//! # Session state container
//!
//! Holds the signed-in user of the tour-booking client together with a
//! single busy flag, and mediates every change to them:
//! - `login` authenticates with email and password
//! - `fetch_current_user` rehydrates the user from the server session cookie
//! - `logout` invalidates the server session
//! - `update_profile` patches name, email and phone of the signed-in user
//!
//! Each operation performs at most one request and always resolves into a
//! state transition. Consumers read [`SessionState`] snapshots or subscribe
//! to changes.
mod error;
mod fetch_current_user;
mod http;
mod login;
mod logout;
mod models;
mod notify;
mod state;
mod store;
mod transport;
mod update_profile;
mod view;

#[cfg(test)]
mod utils;

pub use error::{Error, SESSION_EXPIRED};
pub use http::HttpTransport;
pub use models::{Credentials, ProfileValues, User, UserRole};
pub use notify::{ChannelNotifier, Notice, NoticeKind, Notifier, TracingNotifier};
pub use state::{SessionState, Status};
pub use store::SessionStore;
pub use transport::Transport;
pub use view::{AccountMenu, MenuEntry};
