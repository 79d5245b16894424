//! Query-string encoding for the `companies/` listing endpoint.

use crate::domain::{Company, FilterSelection};
use serde::Deserialize;

/// Parameters of one `companies/` request.
///
/// Filters are encoded as repeated parameters, one per selected id:
/// `tech_sectors=35&tech_sectors=7&hq_main_offices=5`. The backend treats
/// values within one dimension as alternatives and the two dimensions as a
/// conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// 1-based page number. `None` omits the parameter.
    pub page: Option<usize>,

    pub filters: FilterSelection,

    /// Restricts the listing to the company with this display name.
    pub company: Option<String>,
}

impl ListingQuery {
    /// Listing of one page under the given filters.
    #[must_use]
    pub fn page(page: usize, filters: &FilterSelection) -> Self {
        Self {
            page: Some(page),
            filters: filters.clone(),
            company: None,
        }
    }

    /// Lookup of a single company by name under the given filters.
    #[must_use]
    pub fn company(name: impl Into<String>, filters: &FilterSelection) -> Self {
        Self {
            page: None,
            filters: filters.clone(),
            company: Some(name.into()),
        }
    }

    /// Returns a copy of this query pointed at another page.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Encodes the query as ordered key/value pairs for `RequestBuilder::query`.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_directory::api::ListingQuery;
    /// use portfolio_directory::domain::{CountryId, FilterSelection, SectorId};
    ///
    /// let mut filters = FilterSelection::default();
    /// filters.toggle_sector(SectorId(35));
    /// filters.toggle_country(CountryId(5));
    ///
    /// let pairs = ListingQuery::page(2, &filters).to_pairs();
    /// assert_eq!(pairs, vec![
    ///     ("page", "2".to_string()),
    ///     ("tech_sectors", "35".to_string()),
    ///     ("hq_main_offices", "5".to_string()),
    /// ]);
    /// ```
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(name) = &self.company {
            pairs.push(("company", name.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs.extend(
            self.filters
                .sectors
                .iter()
                .map(|id| ("tech_sectors", id.to_string())),
        );
        pairs.extend(
            self.filters
                .countries
                .iter()
                .map(|id| ("hq_main_offices", id.to_string())),
        );

        pairs
    }
}

/// One page of the `companies/` listing.
///
/// `results` is required: a body without it is a malformed payload, not an
/// empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyPage {
    /// Total number of matching companies across all pages.
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    pub results: Vec<Company>,
}

impl CompanyPage {
    /// Number of pages needed to show `count` items at `page_size` per page.
    ///
    /// Returns `None` when the backend did not report a count.
    #[must_use]
    pub fn total_pages(&self, page_size: usize) -> Option<usize> {
        self.count
            .map(|count| total_pages(usize::try_from(count).unwrap_or(usize::MAX), page_size))
    }
}

/// Body of `semantic-search-portfolio-companies/`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SemanticSearchResponse {
    /// Matched company names, most relevant first.
    pub company: Vec<String>,
}

/// Ceiling division of `count` by `page_size`. A zero page size yields zero.
///
/// # Examples
///
/// ```
/// use portfolio_directory::api::query::total_pages;
///
/// assert_eq!(total_pages(268, 6), 45);
/// assert_eq!(total_pages(0, 6), 0);
/// ```
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}
