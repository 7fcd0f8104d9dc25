//! Synchronous form state.

use tracing::{debug, info, warn};

use flood_ingest::{ImportOutcome, ImportSummary, import_bytes};
use flood_model::{FieldName, FieldSet, SubmissionState};
use flood_submit::{Receipt, SubmissionEvent, SubmissionId, SubmissionTracker};
use flood_validate::{ValidationResult, validate};

use crate::error::{FormError, Result};

/// Field values, visible errors and submission state of one form.
///
/// Import and submit attempts replace the error list wholesale; they never
/// append to it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FieldSet,
    errors: Vec<String>,
    submission: SubmissionTracker,
}

impl FormState {
    /// Create a form holding default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    #[inline]
    pub fn field(&self, name: FieldName) -> &str {
        self.fields.get(name)
    }

    /// Errors currently shown to the user.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[inline]
    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.submission.state() == SubmissionState::Idle
    }

    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.submission.last_receipt()
    }

    /// Record a single user edit.
    ///
    /// Edits are accepted in every submission state; an in-flight
    /// submission works on its own snapshot.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    /// Record several edits in order.
    pub fn set_fields<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = (FieldName, String)>,
    {
        for (name, value) in edits {
            self.set_field(name, value);
        }
    }

    /// Record an edit addressed by schema name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = FieldName::parse(name).ok_or_else(|| FormError::UnknownField {
            name: name.to_string(),
        })?;
        self.set_field(field, value);
        Ok(())
    }

    /// Import uploaded content, replacing every field on success.
    ///
    /// On failure the fields are left untouched and the error list holds a
    /// single message describing the failure.
    pub fn apply_import(&mut self, file_name: &str, content: &[u8]) -> Result<ImportSummary> {
        self.apply_import_result(import_bytes(file_name, content))
    }

    /// Apply the result of an import performed elsewhere (e.g. on a
    /// blocking thread).
    pub fn apply_import_result(
        &mut self,
        result: flood_ingest::Result<ImportOutcome>,
    ) -> Result<ImportSummary> {
        match result {
            Ok(ImportOutcome { fields, summary }) => {
                self.fields = fields;
                self.errors.clear();
                info!(imported = summary.imported_count(), "form replaced from import");
                Ok(summary)
            }
            Err(err) => {
                warn!(error = %err, "import rejected");
                let err = FormError::from(err);
                self.errors = err.user_messages();
                Err(err)
            }
        }
    }

    /// Run the validator against the current fields.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.fields)
    }

    /// Start a submission.
    ///
    /// Rejected while sending. Otherwise the fields are validated; on
    /// failure the error list is replaced with the validation messages and
    /// the state stays idle. On success the errors are cleared, the state
    /// moves to sending and a by-value snapshot of the fields is returned.
    pub fn begin_submit(&mut self) -> Result<(SubmissionId, FieldSet)> {
        if self.submission.is_sending() {
            warn!("submit ignored while sending");
            return Err(FormError::SubmissionBusy);
        }

        let result = self.validate();
        if !result.is_valid() {
            let errors = result.messages();
            info!(error_count = errors.len(), "submit blocked by validation");
            self.errors = errors.clone();
            return Err(FormError::ValidationFailed { errors });
        }

        let id = match self.submission.begin() {
            Ok(id) => id,
            Err(err) => {
                let err = FormError::from(err);
                self.errors = err.user_messages();
                return Err(err);
            }
        };
        self.errors.clear();
        info!(submission = %id, "submission started");
        Ok((id, self.fields.clone()))
    }

    /// Apply progress from a submission task.
    ///
    /// Returns `false` when the event belongs to an abandoned submission and
    /// was ignored.
    pub fn apply_event(&mut self, event: &SubmissionEvent) -> bool {
        let applied = match event {
            SubmissionEvent::Succeeded { id, receipt } => {
                self.submission.complete(*id, receipt.clone())
            }
            SubmissionEvent::Failed { id, message } => {
                self.submission.fail(*id).map(|()| {
                    self.errors = vec![format!("Submission failed: {message}")];
                })
            }
            SubmissionEvent::Reset { id } => self.submission.reset(*id),
        };

        match applied {
            Ok(()) => {
                info!(submission = %event.id(), state = %self.submission.state(), "submission state changed");
                true
            }
            Err(err) => {
                debug!(submission = %event.id(), error = %err, "ignoring stale submission event");
                false
            }
        }
    }

    /// Abandon any submission and return to idle.
    pub fn cancel_submission(&mut self) {
        if self.submission.state() != SubmissionState::Idle {
            info!("submission cancelled");
        }
        self.submission.cancel();
    }

    /// Restore default values and clear errors.
    pub fn reset(&mut self) {
        self.fields.reset();
        self.errors.clear();
    }

    /// Pretty JSON rendering of the current fields.
    pub fn preview(&self) -> serde_json::Result<String> {
        self.fields.to_preview_json()
    }
}
