use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, header::HeaderMap};
use setup::{Config, tracing::inject_trace_context};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    error::Error,
    models::{Credentials, ProfileValues, User},
    transport::Transport,
};

const LOGIN_PATH: &str = "auth/login";
const LOGOUT_PATH: &str = "auth/logout";
const MYSELF_PATH: &str = "users/myself";

/// [`Transport`] backed by the tour-booking REST backend.
///
/// Keeps a cookie store so the session cookie set by `login` is sent with
/// every later request.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a new [`HttpTransport`] for the configured backend.
    ///
    /// # Errors
    /// - the http client cannot be built
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|_| Error::BuildHttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends the request and turns non-2xx answers into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);

        let response = request.headers(headers).send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatusCode { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, err)]
    async fn login(&self, credentials: &Credentials) -> Result<User, Error> {
        let url = self.endpoint(LOGIN_PATH)?;
        let response = self.send(self.client.post(url).json(credentials)).await?;
        Ok(response.json::<User>().await?)
    }

    #[instrument(skip_all, err)]
    async fn current_user(&self) -> Result<User, Error> {
        let url = self.endpoint(LOGIN_PATH)?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json::<User>().await?)
    }

    #[instrument(skip_all, err)]
    async fn logout(&self) -> Result<(), Error> {
        let url = self.endpoint(LOGOUT_PATH)?;
        self.send(self.client.get(url)).await?;
        Ok(())
    }

    #[instrument(skip_all, err)]
    async fn update_myself(&self, values: &ProfileValues) -> Result<(), Error> {
        let url = self.endpoint(MYSELF_PATH)?;
        self.send(self.client.patch(url).json(values)).await?;
        Ok(())
    }
}
