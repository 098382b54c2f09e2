use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Error,
    models::{Credentials, ProfileValues, User},
};

/// Backend calls the session store depends on.
///
/// Every method maps to exactly one request.
#[cfg_attr(test, mock::async_client)]
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Authenticates with email and password and returns the user.
    async fn login(&self, credentials: &Credentials) -> Result<User, Error>;

    /// Returns the user owning the current server session.
    async fn current_user(&self) -> Result<User, Error>;

    /// Invalidates the current server session.
    async fn logout(&self) -> Result<(), Error>;

    /// Patches the profile of the signed-in user.
    async fn update_myself(&self, values: &ProfileValues) -> Result<(), Error>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn login(&self, credentials: &Credentials) -> Result<User, Error> {
        (**self).login(credentials).await
    }

    async fn current_user(&self) -> Result<User, Error> {
        (**self).current_user().await
    }

    async fn logout(&self) -> Result<(), Error> {
        (**self).logout().await
    }

    async fn update_myself(&self, values: &ProfileValues) -> Result<(), Error> {
        (**self).update_myself(values).await
    }
}
