pub mod api;
pub mod controller;
pub mod error;
pub mod view;

pub use controller::{ImportController, SubmissionOutcome, SubmissionState};
pub use error::ImportError;
pub use view::ImportPage;
