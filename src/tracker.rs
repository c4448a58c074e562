//! Soreness tracker: owns the editing session and submits it.
//!
//! All edits are synchronous and go through [`SorenessTracker::apply`]. Submit is
//! the only async operation: it sends one create-log request per selected muscle,
//! all in parallel, and awaits them together.
//!
//! Submission is **not atomic**. If some requests fail, the rows that were
//! created stay created; the session is kept so the user can retry, and a retry
//! re-sends every muscle (duplicates of the earlier successes are possible).

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::join_all;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::ClientError;
use crate::models::*;

/// Destination for soreness log rows.
#[async_trait]
pub trait SorenessLogSink: Send + Sync {
    async fn create_log(&self, input: &CreateSorenessLogInput) -> Result<SorenessLog, ClientError>;
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Select at least one muscle before submitting")]
    NothingSelected,

    #[error("Muscle '{0}' has no soreness level")]
    MissingLevel(MuscleGroup),

    #[error("Invalid RPE {0}: expected a finite, non-negative number")]
    InvalidRpe(f32),

    #[error("Failed to log {} muscles ({succeeded} created)", .failures.len())]
    Failed {
        /// Muscles whose request failed, with the reason.
        failures: Vec<(MuscleGroup, ClientError)>,
        /// Rows that were created anyway.
        succeeded: usize,
    },
}

impl SubmitError {
    /// Whether the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NothingSelected | Self::MissingLevel(_) | Self::InvalidRpe(_)
        )
    }
}

/// Per-submit fields. Each one, when set, replaces the session's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitOptions {
    pub log_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub rpe: Option<f32>,
}

type SuccessCallback = Box<dyn FnMut(&[SorenessLog]) + Send>;

pub struct SorenessTracker<S> {
    session: SelectionSession,
    sink: S,
    log_date: Option<NaiveDate>,
    on_success: Option<SuccessCallback>,
}

impl<S: SorenessLogSink> SorenessTracker<S> {
    pub fn new(sink: S) -> Self {
        Self::with_session(sink, SelectionSession::new())
    }

    pub fn with_session(sink: S, session: SelectionSession) -> Self {
        Self {
            session,
            sink,
            log_date: None,
            on_success: None,
        }
    }

    /// Register a callback run once after every fully successful submit.
    pub fn on_success(mut self, callback: impl FnMut(&[SorenessLog]) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        self.session.apply(action)
    }

    pub fn log_date(&self) -> Option<NaiveDate> {
        self.log_date
    }

    pub fn set_log_date(&mut self, log_date: Option<NaiveDate>) {
        self.log_date = log_date;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.session.set_notes(notes);
    }

    pub fn set_rpe(&mut self, rpe: Option<f32>) {
        self.session.set_rpe(rpe);
    }

    /// Drop the whole entry, including the log date.
    pub fn clear_all(&mut self) {
        self.session.clear_all();
        self.log_date = None;
    }

    /// Build one request per selected muscle, in selection order.
    pub fn build_requests(
        &self,
        options: SubmitOptions,
    ) -> Result<Vec<CreateSorenessLogInput>, SubmitError> {
        if self.session.is_empty() {
            return Err(SubmitError::NothingSelected);
        }

        let log_date = options.log_date.or(self.log_date);
        let notes = options
            .notes
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.session.notes().map(str::to_string));
        let last_rpe = options.rpe.or(self.session.rpe());
        if let Some(rpe) = last_rpe.filter(|r| !r.is_finite() || *r < 0.0) {
            return Err(SubmitError::InvalidRpe(rpe));
        }

        self.session
            .selected_muscles()
            .iter()
            .map(|&muscle| {
                let level = self
                    .session
                    .soreness_level(muscle)
                    .ok_or(SubmitError::MissingLevel(muscle))?;
                Ok(CreateSorenessLogInput {
                    log_date,
                    body_part: muscle,
                    soreness_1_5: level,
                    last_rpe,
                    notes: notes.clone(),
                })
            })
            .collect()
    }

    /// Log every selected muscle.
    ///
    /// Validation failures send nothing. If any request fails the session is
    /// left untouched for a retry; otherwise it is cleared and the success
    /// callback runs.
    pub async fn submit(&mut self, options: SubmitOptions) -> Result<Vec<SorenessLog>, SubmitError> {
        let inputs = self.build_requests(options)?;
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submit", %submission_id, muscles = inputs.len());

        let results = join_all(inputs.iter().map(|input| self.sink.create_log(input)))
            .instrument(span.clone())
            .await;

        let _guard = span.enter();
        let mut created = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (input, result) in inputs.iter().zip(results) {
            match result {
                Ok(log) => created.push(log),
                Err(e) => {
                    tracing::warn!("Failed to log {}: {}", input.body_part, e);
                    failures.push((input.body_part, e));
                }
            }
        }

        if !failures.is_empty() {
            tracing::error!(
                "Submission incomplete: {} failed, {} created",
                failures.len(),
                created.len()
            );
            return Err(SubmitError::Failed {
                failures,
                succeeded: created.len(),
            });
        }

        tracing::info!("Logged {} muscles", created.len());
        self.clear_all();
        if let Some(callback) = self.on_success.as_mut() {
            callback(&created);
        }
        Ok(created)
    }
}
