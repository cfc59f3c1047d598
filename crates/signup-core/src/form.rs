//! The lead-capture form: state, submit gating and outcome handling.
//!
//! A submission runs in two steps so a front end can keep handling input
//! while the request is in flight:
//!
//! 1. [`LeadForm::begin_submit`] validates, closes the submit gate and
//!    snapshots the payload.
//! 2. [`LeadForm::complete_submit`] reduces the transport outcome to a
//!    [`SubmissionStatus`] and reopens the gate.
//!
//! [`LeadForm::submit`] does both around a [`Submitter`] call. Dropping that
//! future before it resolves reopens the gate and leaves the fields as they
//! were.
//!
//! Each [`PendingSubmission`] carries a process-wide unique id. A form only
//! accepts the outcome of the submission it has in flight; anything else is
//! ignored.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info, warn};

use crate::error::{SubmitError, TransportError};
use crate::handoff::{SessionStore, TrainingDateHandoff};
use crate::payload::SubmissionPayload;
use crate::presentation::{ERROR_BANNER, Presentation, SUCCESS_BANNER};
use crate::state::FormState;
use crate::submit::{SubmitResponse, Submitter};
use crate::validation;
use crate::variant::Variant;

/// Outcome of the most recent completed submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Banner text for this status, if one is shown.
    #[must_use]
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some(SUCCESS_BANNER),
            Self::Error => Some(ERROR_BANNER),
        }
    }
}

static NEXT_SUBMISSION_ID: AtomicU64 = AtomicU64::new(1);

/// A validated submission waiting for its transport outcome.
///
/// Not `Clone`: one outcome per submission.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending submission must be completed to reopen the submit gate"]
pub struct PendingSubmission {
    id: u64,
    payload: SubmissionPayload,
}

impl PendingSubmission {
    #[must_use]
    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }
}

/// One mounted signup form.
#[derive(Debug, Clone)]
pub struct LeadForm {
    preselected_course: Option<String>,
    state: FormState,
    status: SubmissionStatus,
    in_flight: Option<u64>,
}

impl LeadForm {
    /// Create a form without looking at any handoff value.
    #[must_use]
    pub fn new(variant: Variant, preselected_course: Option<String>) -> Self {
        let state = FormState::initial(variant, preselected_course.as_deref());
        Self {
            preselected_course,
            state,
            status: SubmissionStatus::Idle,
            in_flight: None,
        }
    }

    /// Create a form the way the page mounts it.
    ///
    /// Training forms take the handed-off training date, if any, from the
    /// session store. Team forms leave the store alone.
    pub fn mount<S: SessionStore + ?Sized>(
        variant: Variant,
        preselected_course: Option<String>,
        store: &mut S,
    ) -> Self {
        let mut form = Self::new(variant, preselected_course);
        if variant == Variant::Training {
            if let Some(date) = TrainingDateHandoff::new(store).consume() {
                form.state.set_training_date(date);
            }
        }
        form
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.state.variant()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Field access for input handlers.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether a request is in flight. The submit control is disabled while
    /// this is `true`.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation::for_variant(self.variant())
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        self.presentation().submit_label(self.is_submitting())
    }

    /// Validate and close the submit gate.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InProgress`] while another submission is in
    /// flight, or [`SubmitError::Validation`] with the first failed check.
    /// The form state is untouched in both cases.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }
        validation::validate(&self.state)?;

        let id = NEXT_SUBMISSION_ID.fetch_add(1, Ordering::Relaxed);
        self.in_flight = Some(id);
        self.status = SubmissionStatus::Idle;
        info!(variant = %self.variant(), submission = id, "submitting signup form");
        Ok(PendingSubmission {
            id,
            payload: SubmissionPayload::from(&self.state),
        })
    }

    /// Record the outcome of a submission started with
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// A 2xx response resets the form to its initial values. Anything else
    /// leaves every field as it is so the person can retry.
    ///
    /// An outcome for a submission this form does not have in flight (one
    /// begun on another form, or already completed or cancelled) is ignored
    /// and the current status is returned unchanged.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<SubmitResponse, TransportError>,
    ) -> SubmissionStatus {
        if self.in_flight != Some(pending.id) {
            warn!(
                submission = pending.id,
                "ignoring outcome of a submission this form is not waiting for"
            );
            return self.status;
        }
        self.in_flight = None;
        self.status = match outcome {
            Ok(resp) if resp.is_success() => {
                info!(status = resp.status, "signup submission accepted");
                self.reset();
                SubmissionStatus::Success
            }
            Ok(resp) => {
                warn!(status = resp.status, "signup submission rejected");
                SubmissionStatus::Error
            }
            Err(err) => {
                error!(error = %err, "error submitting signup form");
                SubmissionStatus::Error
            }
        };
        self.status
    }

    /// Abandon a submission started with [`begin_submit`](Self::begin_submit)
    /// without an outcome. The gate reopens; status and fields are kept.
    pub fn cancel_submit(&mut self, pending: PendingSubmission) {
        self.abandon(pending.id);
    }

    /// Validate, send exactly one request and record the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] from [`begin_submit`](Self::begin_submit);
    /// in that case no request is made. Transport failures are not errors
    /// here; they become [`SubmissionStatus::Error`].
    pub async fn submit<T: Submitter + ?Sized>(
        &mut self,
        submitter: &T,
    ) -> Result<SubmissionStatus, SubmitError> {
        let pending = self.begin_submit()?;
        let mut guard = InFlight {
            form: self,
            id: pending.id,
        };
        let outcome = submitter.submit(pending.payload()).await;
        Ok(guard.form.complete_submit(pending, outcome))
    }

    fn abandon(&mut self, id: u64) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
            debug!(submission = id, "signup submission abandoned");
        }
    }

    fn reset(&mut self) {
        self.state = FormState::initial(self.variant(), self.preselected_course.as_deref());
    }
}

/// Reopens the gate if [`LeadForm::submit`] is dropped mid-request.
struct InFlight<'a> {
    form: &'a mut LeadForm,
    id: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.form.abandon(self.id);
    }
}
