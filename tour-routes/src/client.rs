use reqwest::{Client, header::HeaderMap};
use serde::de::DeserializeOwned;
use setup::{Config, tracing::inject_trace_context};
use tracing::instrument;
use url::Url;

use crate::{
    error::Error,
    models::{TourRoute, TourRoutesPage},
};

const FIND_PATH: &str = "tour-routes/find";

/// Read-only client for the tour-route listing.
#[derive(Clone, Debug)]
pub struct TourRoutesClient {
    client: Client,
    base_url: Url,
}

impl TourRoutesClient {
    /// Creates a new [`TourRoutesClient`] for the configured backend.
    ///
    /// # Errors
    /// - the http client cannot be built
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|_| Error::BuildHttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    /// Gets a single tour route.
    ///
    /// # Errors
    /// - the backend answers with a non-2xx status, e.g. 404 for unknown ids
    /// - the response body is not a tour route
    #[instrument(skip(self), err)]
    pub async fn get_tour_route_by_id(&self, id: &str) -> Result<TourRoute, Error> {
        let mut url = self.base_url.join(FIND_PATH)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id);
        self.get(url).await
    }

    /// Gets one page of the tour-route listing.
    ///
    /// # Errors
    /// - the backend answers with a non-2xx status
    /// - the response body is not a page of tour routes
    #[instrument(skip(self), err)]
    pub async fn get_all_tour_routes(&self, page: u32) -> Result<TourRoutesPage, Error> {
        let mut url = self.base_url.join(FIND_PATH)?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);

        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatusCode { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use setup::Config;
    use url::Url;

    use super::TourRoutesClient;
    use crate::models::test::fixture_route_json;

    fn client_for(server: &MockServer) -> TourRoutesClient {
        let endpoint = Url::parse(&server.url("/api")).unwrap();
        TourRoutesClient::new(&Config::new(endpoint)).unwrap()
    }

    #[tokio::test]
    async fn test_get_tour_route_by_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/tour-routes/find/7");
            then.status(200).json_body(fixture_route_json(7));
        });

        let got = client_for(&server).get_tour_route_by_id("7").await.unwrap();

        mock.assert();
        assert_eq!(got.id, 7);
        assert_eq!(got.title, "Old town walk");
    }

    #[tokio::test]
    async fn test_get_tour_route_by_id_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/tour-routes/find/404");
            then.status(404).json_body(json!({ "message": "not found" }));
        });

        let got = client_for(&server)
            .get_tour_route_by_id("404")
            .await
            .unwrap_err();

        assert_eq!(got.status().map(|s| s.as_u16()), Some(404));
    }

    #[tokio::test]
    async fn test_get_all_tour_routes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/tour-routes/find")
                .query_param("page", "2");
            then.status(200).json_body(json!({
                "totalCount": 11,
                "data": [fixture_route_json(6), fixture_route_json(7)],
            }));
        });

        let got = client_for(&server).get_all_tour_routes(2).await.unwrap();

        mock.assert();
        assert_eq!(got.total_count, 11);
        assert_eq!(got.data.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_tour_routes_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/tour-routes/find");
            then.status(200).json_body(json!({ "routes": [] }));
        });

        let got = client_for(&server).get_all_tour_routes(1).await;

        assert!(got.is_err());
    }
}
