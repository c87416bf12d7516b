//! Submission flow of the Excel import form.
//!
//! ```text
//! idle -> validating -> rejected ------------------------------> idle
//!                    -> submitting -> succeeded | failed -------> idle
//! ```
//!
//! The flow talks to the page through [`ImportView`] and to the server
//! through [`ImportTransport`], so it runs the same against the DOM and
//! against the in-memory fakes in the tests below.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::usecases::u508_import_from_excel::{FieldError, ImportForm, ImportResult, Locale};

use super::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Another submission was still in flight
    Ignored,
    /// Validation failed, nothing was sent
    Rejected(Vec<FieldError>),
    Succeeded(ImportResult),
    /// Message that was shown to the user
    Failed(String),
}

/// UI side of the form: reads values, shows messages, toggles controls.
pub trait ImportView {
    /// Request body built from the current form fields
    type Payload;

    fn read_form(&self) -> ImportForm;

    fn show_field_errors(&self, errors: &[FieldError]);

    fn clear_field_errors(&self);

    /// Must be called while the inputs are still enabled.
    fn build_payload(&self) -> Result<Self::Payload, ImportError>;

    /// Shows the spinner and disables the submit button and both inputs,
    /// or the reverse.
    fn set_busy(&self, busy: bool);

    fn notify(&self, message: &str);

    fn reset_form(&self);
}

#[async_trait(?Send)]
pub trait ImportTransport<P> {
    /// Sends one import request. Called exactly once per valid submission.
    async fn send(&self, payload: P) -> Result<ImportResult, ImportError>;
}

/// Drives one submission at a time. Clones share the same state.
#[derive(Debug, Clone)]
pub struct ImportController {
    locale: Locale,
    state: Rc<Cell<SubmissionState>>,
}

impl ImportController {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            state: Rc::new(Cell::new(SubmissionState::Idle)),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub async fn submit<V, T>(&self, view: &V, transport: &T) -> SubmissionOutcome
    where
        V: ImportView,
        T: ImportTransport<V::Payload> + ?Sized,
    {
        if self.state.get() != SubmissionState::Idle {
            log::debug!("import already in progress, submit ignored");
            return SubmissionOutcome::Ignored;
        }

        self.state.set(SubmissionState::Validating);
        let form = view.read_form();
        if let Err(errors) = form.validate() {
            log::debug!("import form rejected: {:?}", errors);
            view.show_field_errors(&errors);
            self.state.set(SubmissionState::Rejected);
            self.state.set(SubmissionState::Idle);
            return SubmissionOutcome::Rejected(errors);
        }
        view.clear_field_errors();

        let payload = match view.build_payload() {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("failed to build import payload: {}", err);
                let message = err.to_string();
                view.notify(&message);
                view.reset_form();
                self.state.set(SubmissionState::Idle);
                return SubmissionOutcome::Failed(message);
            }
        };

        log::info!(
            "uploading {} (result to {})",
            form.file_name.as_deref().unwrap_or_default(),
            form.email
        );

        let _in_flight = InFlight::enter(view, &self.state);
        match transport.send(payload).await {
            Ok(result) => {
                log::info!(
                    "import finished: total={}, successful={}, failed={}",
                    result.total,
                    result.successful,
                    result.failed
                );
                self.state.set(SubmissionState::Succeeded);
                view.notify(&result.summary(self.locale));
                SubmissionOutcome::Succeeded(result)
            }
            Err(err) => {
                log::warn!("import failed: {:?}", err);
                self.state.set(SubmissionState::Failed);
                let message = err.to_string();
                view.notify(&message);
                SubmissionOutcome::Failed(message)
            }
        }
    }
}

/// Busy state of one request. Dropping it restores the form and returns
/// the controller to `Idle`, whichever way the request ended.
struct InFlight<'a, V: ImportView> {
    view: &'a V,
    state: &'a Cell<SubmissionState>,
}

impl<'a, V: ImportView> InFlight<'a, V> {
    fn enter(view: &'a V, state: &'a Cell<SubmissionState>) -> Self {
        state.set(SubmissionState::Submitting);
        view.set_busy(true);
        Self { view, state }
    }
}

impl<V: ImportView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
        self.view.reset_form();
        self.state.set(SubmissionState::Idle);
    }
}
