//! # Recommendation Form Controller
//!
//! Owns the form's state and runs submissions against a
//! [`RecommendationService`]:
//! 1. Mark the form as loading and clear the previous result
//! 2. Filter the entries down to trimmed, non-blank titles
//! 3. Reject empty input without touching the network
//! 4. Send exactly one request
//! 5. Map the response (or failure) into the result view
//! 6. Return to idle
//!
//! ## Overlapping submissions
//!
//! The controller is a cheap `Clone` handle, so `submit()` can be running
//! on several tasks at once. Each submission gets a sequence number and its
//! own cancellation token:
//! - Starting a submission cancels the token of the one before it.
//! - A response whose sequence number is no longer the latest is dropped.
//! - `close()` cancels whatever is in flight and blocks any later update.
//!
//! The state mutex is never held across the network call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use recs_client::{RecommendationRequest, RecommendationService};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::entries::{EntryError, EntryList};
use crate::error::{FormError, ValidationError};
use crate::types::{FormSnapshot, ResultView, SubmissionState, SubmitOutcome};

/// Mutable state shared by every handle to one form
#[derive(Debug, Default)]
struct FormState {
    entries: EntryList,
    state: SubmissionState,
    result: ResultView,
    latest_seq: u64,
    in_flight: Option<CancellationToken>,
    closed: bool,
}

struct Inner<S> {
    service: S,
    form: Mutex<FormState>,
}

impl<S> Drop for Inner<S> {
    fn drop(&mut self) {
        let form = self.form.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = form.in_flight.take() {
            token.cancel();
        }
    }
}

/// Resets the form if a `submit()` future is dropped while awaiting the service.
///
/// Only acts when the dropped submission is still the latest one; a newer
/// submission owns the state otherwise.
struct PendingSubmission<'a> {
    form: &'a Mutex<FormState>,
    seq: u64,
    armed: bool,
}

impl<'a> PendingSubmission<'a> {
    fn new(form: &'a Mutex<FormState>, seq: u64) -> Self {
        Self {
            form,
            seq,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        if form.latest_seq != self.seq {
            return;
        }
        debug!("Submission {} dropped mid-request, returning to idle", self.seq);
        form.state = SubmissionState::Idle;
        if let Some(token) = form.in_flight.take() {
            token.cancel();
        }
    }
}

/// Controller for the movie recommendation form.
pub struct RecommendationFormController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for RecommendationFormController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RecommendationService> RecommendationFormController<S> {
    /// Create a controller with the default two blank rows.
    pub fn new(service: S) -> Self {
        Self::with_entries(service, EntryList::new())
    }

    /// Create a controller pre-filled with `entries`.
    pub fn with_entries(service: S, entries: EntryList) -> Self {
        Self {
            inner: Arc::new(Inner {
                service,
                form: Mutex::new(FormState {
                    entries,
                    ..FormState::default()
                }),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.inner.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Entry editing
    // ------------------------------------------------------------------

    /// Replace the title at `index`.
    pub fn update_entry(&self, index: usize, value: impl Into<String>) -> Result<(), EntryError> {
        self.lock().entries.update(index, value).inspect_err(|e| {
            warn!("Ignoring entry update: {}", e);
        })
    }

    /// Append a blank row.
    pub fn add_entry(&self) {
        let mut form = self.lock();
        form.entries.add();
        debug!("Added entry, form now has {} rows", form.entries.len());
    }

    /// Remove the row at `index`.
    ///
    /// Any valid index may be removed here, including the first row.
    /// Whether the user is *offered* that is [`crate::view::can_remove`]'s call.
    pub fn remove_entry(&self, index: usize) -> Result<String, EntryError> {
        let mut form = self.lock();
        let removed = form.entries.remove(index).inspect_err(|e| {
            warn!("Ignoring entry removal: {}", e);
        })?;
        debug!("Removed entry {}, form now has {} rows", index, form.entries.len());
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn entries(&self) -> EntryList {
        self.lock().entries.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    pub fn result(&self) -> ResultView {
        self.lock().result.clone()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let form = self.lock();
        FormSnapshot {
            entries: form.entries.clone(),
            state: form.state,
            result: form.result.clone(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Submit the current entries to the recommendation service.
    ///
    /// Makes at most one request. Always leaves the form idle unless a newer
    /// submission has taken over in the meantime.
    pub async fn submit(&self) -> SubmitOutcome {
        let (seq, token, movies) = {
            let mut form = self.lock();
            if form.closed {
                debug!("Submit called on a closed form");
                return SubmitOutcome::Cancelled;
            }

            form.state = SubmissionState::Loading;
            form.result = ResultView::None;
            form.latest_seq += 1;
            let seq = form.latest_seq;

            if let Some(previous) = form.in_flight.take() {
                debug!("Submission {} supersedes an in-flight request", seq);
                previous.cancel();
            }

            let movies = form.entries.filtered();
            if movies.is_empty() {
                let reason = ValidationError::NoTitles;
                debug!("Submission {} rejected: {}", seq, reason);
                form.result =
                    ResultView::Error(FormError::from(reason.clone()).display_message());
                form.state = SubmissionState::Idle;
                return SubmitOutcome::Rejected(reason);
            }

            let token = CancellationToken::new();
            form.in_flight = Some(token.clone());
            (seq, token, movies)
        };

        info!("Submission {}: requesting recommendations for {:?}", seq, movies);
        let request = RecommendationRequest::new(movies);

        let mut pending = PendingSubmission::new(&self.inner.form, seq);
        // A response already in hand wins over a cancellation seen in the same poll
        let response = tokio::select! {
            biased;
            response = self.inner.service.recommend(request) => response,
            _ = token.cancelled() => {
                pending.disarm();
                debug!("Submission {} cancelled before the service answered", seq);
                return SubmitOutcome::Cancelled;
            }
        };
        pending.disarm();

        let mut form = self.lock();
        if form.closed {
            debug!("Submission {} finished after close, dropping result", seq);
            return SubmitOutcome::Cancelled;
        }
        if form.latest_seq != seq {
            debug!(
                "Submission {} finished after submission {} started, dropping result",
                seq, form.latest_seq
            );
            return SubmitOutcome::Superseded;
        }

        let view = match response {
            Ok(response) => {
                info!(
                    "Submission {}: received {} recommendations",
                    seq,
                    response.recommendations.len()
                );
                ResultView::success(response.recommendations, response.message)
            }
            Err(err) => {
                debug!("Submission {} failed: {}", seq, err);
                ResultView::Error(FormError::from(err).display_message())
            }
        };

        form.in_flight = None;
        form.state = SubmissionState::Idle;
        form.result = view.clone();
        SubmitOutcome::Applied(view)
    }

    /// Tear the form down.
    ///
    /// Cancels any in-flight request. Responses that arrive afterwards are
    /// discarded and further submissions are refused.
    pub fn close(&self) {
        let mut form = self.lock();
        if form.closed {
            return;
        }
        form.closed = true;
        form.state = SubmissionState::Idle;
        if let Some(token) = form.in_flight.take() {
            token.cancel();
        }
        debug!("Form closed");
    }
}
