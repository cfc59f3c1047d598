//! Core library for the training signup form.
//!
//! Contains the variant-typed form state, the province toggle set, the
//! two-layer validation, the presentation contract per variant, the
//! consume-once training date handoff, and the [`form::LeadForm`] submission
//! flow. The HTTP transport lives in `signup-client`; this crate only defines
//! the [`submit::Submitter`] seam it plugs into.

pub mod catalog;
pub mod error;
pub mod form;
pub mod handoff;
pub mod hero;
pub mod payload;
pub mod presentation;
pub mod province;
pub mod state;
pub mod submit;
pub mod validation;
pub mod variant;

pub use error::{SessionStoreError, SubmitError, TransportError, ValidationError};
pub use form::{LeadForm, PendingSubmission, SubmissionStatus};
pub use handoff::{
    FileSessionStore, MemorySessionStore, SessionStore, TrainingDateHandoff, HANDOFF_KEY,
};
pub use payload::SubmissionPayload;
pub use province::{Province, ProvinceSet};
pub use state::FormState;
pub use submit::{SubmitResponse, Submitter};
pub use variant::{TeamFields, TrainingFields, Variant, VariantFields};
