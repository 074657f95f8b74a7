use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::{ClientError, CollectionApi};
use crate::config::AdminConfig;
use crate::models::{Part, PartQuery, Resource};

/// Thin JSON wrapper over one backend host.
///
/// Implements [`CollectionApi`] for every schema; the paths come from the
/// [`Resource`] descriptor. Success is any 2xx status, anything else is a
/// uniform [`ClientError::Status`].
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn expect_success(
        response: Response,
        operation: &'static str,
    ) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status { status, operation })
        }
    }

    /// Server-side part search across multiple criteria.
    pub async fn search_parts(&self, query: &PartQuery) -> Result<Vec<Part>, ClientError> {
        let mut request = self.http.get(self.url(Part::COLLECTION));
        if !query.is_empty() {
            request = request.query(&query.to_query());
        }
        debug!(collection = Part::COLLECTION, "searching");
        let response = Self::expect_success(request.send().await?, "list")?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl<R: Resource> CollectionApi<R> for RestClient {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<R>, ClientError> {
        let mut request = self.http.get(self.url(R::COLLECTION));
        // A blank filter means an unfiltered list, same as no filter at all.
        if let Some(value) = filter {
            let value = value.trim();
            if !value.is_empty() {
                request = request.query(&[(R::FILTER_PARAM, value)]);
            }
        }
        debug!(collection = R::COLLECTION, filter, "listing");
        let response = Self::expect_success(request.send().await?, "list")?;
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &R::Payload) -> Result<R, ClientError> {
        debug!(collection = R::COLLECTION, "creating");
        let response = self
            .http
            .post(self.url(R::COLLECTION))
            .json(payload)
            .send()
            .await?;
        let response = Self::expect_success(response, "create")?;
        Ok(response.json().await?)
    }

    async fn update(&self, key: &R::Key, payload: &R::Payload) -> Result<R, ClientError> {
        debug!(collection = R::COLLECTION, key = %key, "updating");
        let response = self
            .http
            .put(self.url(&R::update_path(key)))
            .json(payload)
            .send()
            .await?;
        let response = Self::expect_success(response, "update")?;
        Ok(response.json().await?)
    }

    async fn delete(&self, key: &R::Key) -> Result<(), ClientError> {
        debug!(collection = R::COLLECTION, key = %key, "deleting");
        let response = self.http.delete(self.url(&R::delete_path(key))).send().await?;
        Self::expect_success(response, "delete")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn urls_join_under_the_configured_base() {
        let client = RestClient::new(&AdminConfig::new("http://localhost:8080/"));
        assert_eq!(client.url(Category::COLLECTION), "http://localhost:8080/categories");
        // Category updates land at the root; see Category::update_path.
        assert_eq!(client.url(&Category::update_path(&3)), "http://localhost:8080/3");
    }
}
