//! Background worker for backend I/O.
//!
//! The event loop never awaits the network itself. It posts a
//! [`WorkerMessage`], the runtime hands it to [`DirectoryWorker`] on a spawned
//! task, and the [`WorkerResponse`] comes back as an event.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{DirectoryWorker, DEFAULT_MAX_LOOKUP_PAGES, DEFAULT_PAGE_SIZE};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
