//! Booking form state as a single value transformed by discrete events.
//!
//! Lifecycle: `Idle -> Submitting -> {Succeeded, Rejected, Failed} -> Idle`.
//! The terminal phases return to `Idle` on the next field edit.

use crate::booking::{BookingField, BookingRecord, ValidationErrorSet};
use crate::rules;

pub const FAILED_FALLBACK_MESSAGE: &str = "Failed to submit booking. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded { booking_id: String },
    Rejected,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: BookingField, value: String },
    SubmitRequested,
    SubmitSucceeded { booking_id: String },
    SubmitRejected { errors: ValidationErrorSet },
    /// `None` when the failure carried no usable message.
    SubmitFailed { message: Option<String> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFormState {
    pub record: BookingRecord,
    pub errors: ValidationErrorSet,
    pub phase: FormPhase,
}

impl BookingFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn error_for(&self, field: BookingField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Applies one event and returns the next state.
    ///
    /// Edits and submit requests are ignored while a submission is in flight;
    /// outcome events are ignored unless one is.
    pub fn reduce(self, event: FormEvent) -> Self {
        match (self.phase.clone(), event) {
            (FormPhase::Submitting, FormEvent::FieldChanged { .. })
            | (FormPhase::Submitting, FormEvent::SubmitRequested) => self,

            (_, FormEvent::FieldChanged { field, value }) => {
                let mut next = self;
                next.record.set(field, value);
                // Cleared eagerly; the value is only re-checked on the next submit.
                next.errors.remove(field);
                next.phase = FormPhase::Idle;
                next
            }

            (_, FormEvent::SubmitRequested) => {
                let errors = rules::validate(&self.record);
                let phase = if errors.is_empty() {
                    FormPhase::Submitting
                } else {
                    FormPhase::Idle
                };
                Self { errors, phase, ..self }
            }

            (FormPhase::Submitting, FormEvent::SubmitSucceeded { booking_id }) => Self {
                record: BookingRecord::default(),
                errors: ValidationErrorSet::new(),
                phase: FormPhase::Succeeded { booking_id },
            },

            (FormPhase::Submitting, FormEvent::SubmitRejected { errors }) => Self {
                errors,
                phase: FormPhase::Rejected,
                ..self
            },

            (FormPhase::Submitting, FormEvent::SubmitFailed { message }) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FAILED_FALLBACK_MESSAGE.to_string());
                Self {
                    phase: FormPhase::Failed { message },
                    ..self
                }
            }

            (phase, event) => {
                tracing::debug!("Ignoring {:?} in phase {:?}", event, phase);
                self
            }
        }
    }
}
