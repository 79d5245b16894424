//! Backend client for the portfolio REST API.

use super::query::{CompanyPage, ListingQuery, SemanticSearchResponse};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{CountryOption, SectorOption};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Listing endpoint, relative to the API base URL.
pub const COMPANIES_PATH: &str = "companies/";
/// Semantic search endpoint.
pub const SEMANTIC_SEARCH_PATH: &str = "semantic-search-portfolio-companies/";
/// Headquarters-country reference list.
pub const MAIN_OFFICES_PATH: &str = "main-offices/";
/// Technology-sector reference list.
pub const TECH_SECTORS_PATH: &str = "tech-sectors/";

/// Read-only view of the directory backend.
///
/// The worker is the only caller. Every method maps transport failures,
/// non-2xx statuses, and malformed bodies to a [`DirectoryError`]; none of them
/// retries.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetches one page of `companies/`.
    async fn list_companies(&self, query: &ListingQuery) -> Result<CompanyPage>;

    /// Runs a semantic search and returns matched names in relevance order.
    async fn semantic_search(&self, query: &str) -> Result<Vec<String>>;

    /// Fetches the headquarters-country reference list.
    async fn countries(&self) -> Result<Vec<CountryOption>>;

    /// Fetches the sector reference list.
    async fn sectors(&self) -> Result<Vec<SectorOption>>;
}

/// [`DirectoryApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectoryApi {
    client: Client,
    base_url: String,
}

impl HttpDirectoryApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// A trailing slash is appended when missing so endpoint paths can be
    /// joined by concatenation.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_directory::api::HttpDirectoryApi;
    ///
    /// let api = HttpDirectoryApi::new("http://localhost:8000/api");
    /// assert_eq!(api.base_url(), "http://localhost:8000/api/");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| DirectoryError::Payload(format!("{path}: {e}")))
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectoryApi {
    async fn list_companies(&self, query: &ListingQuery) -> Result<CompanyPage> {
        let pairs = query.to_pairs();
        tracing::debug!(params = ?pairs, "GET companies");
        self.get_json(COMPANIES_PATH, &pairs).await
    }

    async fn semantic_search(&self, query: &str) -> Result<Vec<String>> {
        tracing::debug!(query = %query, "GET semantic search");
        let response: SemanticSearchResponse = self
            .get_json(SEMANTIC_SEARCH_PATH, &[("query", query)])
            .await?;
        Ok(response.company)
    }

    async fn countries(&self) -> Result<Vec<CountryOption>> {
        self.get_json(MAIN_OFFICES_PATH, &[] as &[(&str, &str)]).await
    }

    async fn sectors(&self) -> Result<Vec<SectorOption>> {
        self.get_json(TECH_SECTORS_PATH, &[] as &[(&str, &str)]).await
    }
}

pub(crate) fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(normalize_base_url("http://x/api".into()), "http://x/api/");
        assert_eq!(normalize_base_url("http://x/api/".into()), "http://x/api/");
    }

    #[test]
    fn endpoints_join_onto_base() {
        let api = HttpDirectoryApi::new("http://localhost:8000/api");
        assert_eq!(
            api.endpoint(COMPANIES_PATH),
            "http://localhost:8000/api/companies/"
        );
    }
}
