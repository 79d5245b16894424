//! Worker implementation for backend operations.
//!
//! The worker turns [`WorkerMessage`]s into backend calls and always answers
//! with exactly one [`WorkerResponse`]. Errors never escape: they are logged
//! and folded into the failure variant matching the request.

use crate::api::{DirectoryApi, ListingQuery};
use crate::domain::error::Result;
use crate::domain::{Company, FilterSelection};
use crate::worker::{WorkerMessage, WorkerResponse};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Default number of companies per listing page, matching the backend's.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Default number of listing pages scanned by a company lookup.
pub const DEFAULT_MAX_LOOKUP_PAGES: usize = 20;

/// Executes worker messages against a [`DirectoryApi`].
///
/// The worker holds no client state; it is shared behind an `Arc` and each
/// message is handled on its own task.
#[derive(Debug, Clone)]
pub struct DirectoryWorker<A> {
    api: A,
    page_size: usize,
    max_lookup_pages: usize,
}

impl<A: DirectoryApi> DirectoryWorker<A> {
    /// Creates a worker.
    ///
    /// # Parameters
    ///
    /// * `api` - Backend to query
    /// * `page_size` - Items per listing page, used to derive page counts
    /// * `max_lookup_pages` - Upper bound on pages scanned by a company lookup
    pub fn new(api: A, page_size: usize, max_lookup_pages: usize) -> Self {
        Self {
            api,
            page_size,
            max_lookup_pages,
        }
    }

    /// Processes a message and returns its response.
    ///
    /// Runs the operation inside a `worker_handle_message` span parented on
    /// the message's trace context.
    pub async fn handle(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", kind = message.kind());
        if let Some(parent) = parent_trace_context(&message) {
            span.set_parent(parent);
        }

        async move {
            match message {
                WorkerMessage::FetchPage {
                    request_id,
                    page,
                    filters,
                    company_ids,
                    ..
                } => self.handle_fetch_page(request_id, page, &filters, company_ids).await,

                WorkerMessage::Search { request_id, query, .. } => {
                    self.handle_search(request_id, query).await
                }

                WorkerMessage::LoadFilterOptions { .. } => self.handle_load_filter_options().await,

                WorkerMessage::LookupCompany { name, .. } => self.handle_lookup_company(name).await,
            }
        }
        .instrument(span)
        .await
    }

    async fn handle_fetch_page(
        &self,
        request_id: u64,
        page: usize,
        filters: &FilterSelection,
        company_ids: Option<Vec<String>>,
    ) -> WorkerResponse {
        let result = match company_ids {
            Some(ids) => self.fetch_search_results(&ids, filters).await.map(|c| (c, None)),
            None => self.fetch_listing_page(page, filters).await,
        };

        match result {
            Ok((companies, total_pages)) => {
                tracing::debug!(
                    request_id,
                    count = companies.len(),
                    total_pages = ?total_pages,
                    "page fetched"
                );
                WorkerResponse::PageLoaded {
                    request_id,
                    companies,
                    total_pages,
                }
            }
            Err(e) => {
                tracing::warn!(request_id, page, error = %e, "failed to fetch companies");
                WorkerResponse::PageFailed {
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Plain paginated listing.
    async fn fetch_listing_page(
        &self,
        page: usize,
        filters: &FilterSelection,
    ) -> Result<(Vec<Company>, Option<usize>)> {
        let response = self.api.list_companies(&ListingQuery::page(page, filters)).await?;
        let total_pages = response.total_pages(self.page_size);
        Ok((response.results, total_pages))
    }

    /// One request per identifier, concatenated in identifier order.
    ///
    /// No page-size truncation is applied. A record returned for more than one
    /// identifier is kept only at its first position.
    async fn fetch_search_results(
        &self,
        ids: &[String],
        filters: &FilterSelection,
    ) -> Result<Vec<Company>> {
        let mut companies: Vec<Company> = Vec::with_capacity(ids.len());

        for id in ids {
            let response = self.api.list_companies(&ListingQuery::company(id.as_str(), filters)).await?;
            for company in response.results {
                if !companies.iter().any(|c| c.name == company.name) {
                    companies.push(company);
                }
            }
        }

        Ok(companies)
    }

    async fn handle_search(&self, request_id: u64, query: String) -> WorkerResponse {
        match self.api.semantic_search(&query).await {
            Ok(company_ids) => {
                tracing::debug!(request_id, query = %query, matches = company_ids.len(), "search completed");
                WorkerResponse::SearchCompleted {
                    request_id,
                    query,
                    company_ids,
                }
            }
            Err(e) => {
                tracing::warn!(request_id, query = %query, error = %e, "semantic search failed");
                WorkerResponse::SearchFailed {
                    request_id,
                    query,
                    message: e.to_string(),
                }
            }
        }
    }

    async fn handle_load_filter_options(&self) -> WorkerResponse {
        let result = async {
            let countries = self.api.countries().await?;
            let sectors = self.api.sectors().await?;
            Ok::<_, crate::DirectoryError>((countries, sectors))
        }
        .await;

        match result {
            Ok((countries, sectors)) => {
                tracing::debug!(
                    countries = countries.len(),
                    sectors = sectors.len(),
                    "filter options loaded"
                );
                WorkerResponse::FilterOptionsLoaded { countries, sectors }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load filter options");
                WorkerResponse::FilterOptionsFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Scans `companies/?company=<name>` page by page for an exact name match.
    ///
    /// Stops at the first match, when the backend reports no further page, or
    /// after `max_lookup_pages` pages.
    async fn handle_lookup_company(&self, name: String) -> WorkerResponse {
        match self.find_company(&name).await {
            Ok(Some(company)) => WorkerResponse::CompanyFound { company },
            Ok(None) => {
                tracing::debug!(name = %name, "company not found");
                WorkerResponse::CompanyNotFound { name }
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "company lookup failed");
                WorkerResponse::CompanyNotFound { name }
            }
        }
    }

    async fn find_company(&self, name: &str) -> Result<Option<Company>> {
        let base = ListingQuery::company(name, &FilterSelection::default());

        for page in 1..=self.max_lookup_pages {
            let response = self.api.list_companies(&base.clone().with_page(page)).await?;

            if let Some(company) = response.results.into_iter().find(|c| c.name == name) {
                return Ok(Some(company));
            }
            if response.next.is_none() {
                return Ok(None);
            }
        }

        tracing::warn!(
            name = %name,
            max_pages = self.max_lookup_pages,
            "company lookup hit page limit"
        );
        Ok(None)
    }
}

/// Rebuilds the OpenTelemetry parent context carried by a message.
///
/// The worker span is parented on it so spans created while handling the
/// message link back to the span that built it.
fn parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::Context> {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

    let trace_context = message.trace_context()?;

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let span_context = SpanContext::new(
        trace_id,
        span_id,
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    );

    Some(opentelemetry::Context::current().with_remote_span_context(span_context))
}
