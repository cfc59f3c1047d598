//! Error types for `signup-core`.
//!
//! Validation errors render as the exact notification text shown to the
//! person filling in the form. Transport and session store errors are for
//! diagnostics and never reach the user verbatim.

/// A submit attempt was blocked before any network call.
///
/// The first group mirrors the native field constraints (`required`,
/// `type=email`); the second group is the variant-aware rule set and is
/// checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name is blank.
    #[error("Naam is verplicht.")]
    MissingName,

    /// Email is blank.
    #[error("E-mailadres is verplicht.")]
    MissingEmail,

    /// Email is not shaped like `local@domain`.
    #[error("Vul een geldig e-mailadres in.")]
    InvalidEmail,

    /// Training variant without a selected course.
    #[error("Selecteer een training.")]
    MissingCourse,

    /// Privacy statement not accepted.
    #[error("Je moet akkoord gaan met de privacyverklaring.")]
    PrivacyNotAccepted,

    /// No province selected.
    #[error("Je moet ten minste één provincie selecteren.")]
    NoProvince,

    /// Training variant without a cost center.
    #[error("Kostenplaats is verplicht.")]
    MissingCostCenter,

    /// Training variant without a training date.
    #[error("Selecteer een beschikbare trainingsdatum.")]
    MissingTrainingDate,

    /// Team variant without a phone number.
    #[error("Telefoonnummer is verplicht.")]
    MissingPhone,

    /// Eenheid is blank.
    #[error("Eenheid is verplicht.")]
    MissingEenheid,

    /// Team is blank.
    #[error("Team is verplicht.")]
    MissingTeam,
}

impl ValidationError {
    /// Whether this failure comes from the native constraint layer rather
    /// than the variant-aware rules.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(
            self,
            Self::MissingName | Self::MissingEmail | Self::InvalidEmail | Self::MissingCourse
        )
    }
}

/// Errors from starting a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Local validation blocked the submission.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A submission is already in flight; the submit control is disabled.
    #[error("a submission is already in progress")]
    InProgress,
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, reset, and similar.
    #[error("failed to reach '{url}': {reason}")]
    Unreachable { url: String, reason: String },

    /// The configured request timeout elapsed.
    #[error("request to '{url}' timed out")]
    Timeout { url: String },

    /// The payload could not be encoded.
    #[error("failed to encode submission payload: {reason}")]
    Encode { reason: String },
}

/// Errors from a [`crate::handoff::SessionStore`].
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// Failed to read a value.
    #[error("failed to read session key '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Failed to write a value.
    #[error("failed to write session key '{key}': {reason}")]
    Write { key: String, reason: String },

    /// Failed to delete a value.
    #[error("failed to delete session key '{key}': {reason}")]
    Delete { key: String, reason: String },

    /// The key cannot be mapped onto the store (e.g. contains a path separator).
    #[error("invalid session key '{key}'")]
    InvalidKey { key: String },
}
