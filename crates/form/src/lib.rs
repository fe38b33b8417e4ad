//! # Form Crate
//!
//! State management for the movie recommendation form.
//!
//! ## Main Components
//!
//! - **entries**: The editable list of titles (update / add / remove / filter)
//! - **types**: Submission state, result view, snapshots and submit outcomes
//! - **error**: Validation vs. transport errors and how each is displayed
//! - **controller**: `RecommendationFormController`, which runs submissions
//! - **view**: Presentation policy (remove controls, submit label, result order)
//!
//! ## Example Usage
//!
//! ```ignore
//! use form::{RecommendationFormController, SubmitOutcome};
//! use recs_client::HttpRecommendationClient;
//!
//! let client = HttpRecommendationClient::new("http://localhost:8000", None)?;
//! let controller = RecommendationFormController::new(client);
//!
//! controller.update_entry(0, "Inception")?;
//! controller.add_entry();
//!
//! match controller.submit().await {
//!     SubmitOutcome::Applied(view) => println!("{:?}", view),
//!     other => println!("no update: {:?}", other),
//! }
//! ```

pub mod controller;
pub mod entries;
pub mod error;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use controller::RecommendationFormController;
pub use entries::{EntryError, EntryList};
pub use error::{FALLBACK_TRANSPORT_MESSAGE, FormError, NO_TITLES_MESSAGE, ValidationError};
pub use types::{FormSnapshot, ResultView, SubmissionState, SubmitOutcome};
