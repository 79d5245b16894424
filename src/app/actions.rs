//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order: worker messages are spawned as tasks whose
//! responses come back as [`Event::WorkerResponse`](super::Event::WorkerResponse).
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::app::Action;
//! use portfolio_directory::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_filter_options())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a message to the background worker.
    PostToWorker(WorkerMessage),

    /// Stops the event loop.
    Quit,
}

impl Action {
    /// The worker message carried by this action, if any.
    #[must_use]
    pub const fn worker_message(&self) -> Option<&WorkerMessage> {
        match self {
            Self::PostToWorker(message) => Some(message),
            Self::Quit => None,
        }
    }
}
