//! Worker message types for request/response communication.
//!
//! This module defines the protocol between the event loop, which owns all
//! client state, and the worker, which performs backend I/O. It also carries
//! distributed tracing context across the task boundary.

use crate::domain::{Company, CountryOption, FilterSelection, SectorOption};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so that spans
/// opened by the worker are linked to the event that requested the work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the
    /// case whenever tracing is not initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_directory::worker::TraceContext;
    ///
    /// // No subscriber is installed, so there is no span to capture.
    /// assert!(TraceContext::from_current().is_none());
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id = format!("{:032x}", span_context.trace_id());
            let parent_span_id = format!("{:016x}", span_context.span_id());

            tracing::trace!(trace_id = %trace_id, parent_span_id = %parent_span_id, "capturing trace context");

            Some(Self {
                trace_id,
                parent_span_id,
            })
        } else {
            None
        }
    }
}

/// Generates builder methods for `WorkerMessage` variants.
///
/// Each constructor attaches the current trace context automatically.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    fetch_page(FetchPage {
        request_id: u64,
        page: usize,
        filters: FilterSelection,
        company_ids: Option<Vec<String>>,
    }),
    search(Search { request_id: u64, query: String }),
    load_filter_options(LoadFilterOptions {}),
    lookup_company(LookupCompany { name: String }),
}

/// Requests sent from the event loop to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the companies visible on one page of the directory.
    ///
    /// With `company_ids` set, each id is looked up individually under the
    /// filters and `page` is ignored. Otherwise a single listing page is
    /// fetched.
    FetchPage {
        /// Sequence number from the shared request tracker.
        request_id: u64,

        /// 1-based page number.
        page: usize,

        filters: FilterSelection,

        /// Active search results, in relevance order.
        company_ids: Option<Vec<String>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Run a semantic search for a committed query.
    Search {
        /// Sequence number from the shared request tracker.
        request_id: u64,

        query: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load the country and sector reference lists.
    LoadFilterOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Find a single company by its display name.
    LookupCompany {
        name: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached when the message was built.
    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchPage { trace_context, .. }
            | Self::Search { trace_context, .. }
            | Self::LoadFilterOptions { trace_context }
            | Self::LookupCompany { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Short name of the variant, used as a span field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchPage { .. } => "fetch_page",
            Self::Search { .. } => "search",
            Self::LoadFilterOptions { .. } => "load_filter_options",
            Self::LookupCompany { .. } => "lookup_company",
        }
    }
}

/// Responses sent from the worker back to the event loop.
///
/// Tracked responses echo the `request_id` of the message that produced them
/// so the event loop can discard superseded results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A page of companies was fetched.
    PageLoaded {
        request_id: u64,
        companies: Vec<Company>,

        /// `None` when the page came from search results or the backend
        /// reported no count.
        total_pages: Option<usize>,
    },

    /// A page fetch failed.
    PageFailed { request_id: u64, message: String },

    /// A semantic search returned its identifier list.
    SearchCompleted {
        request_id: u64,
        query: String,

        /// Matched company names in relevance order.
        company_ids: Vec<String>,
    },

    /// A semantic search failed.
    SearchFailed {
        request_id: u64,
        query: String,
        message: String,
    },

    /// Reference lists were loaded.
    FilterOptionsLoaded {
        countries: Vec<CountryOption>,
        sectors: Vec<SectorOption>,
    },

    /// The detail lookup found its company.
    CompanyFound { company: Company },

    /// The detail lookup finished without an exact match.
    CompanyNotFound { name: String },

    /// Loading the reference lists failed.
    FilterOptionsFailed { message: String },
}
