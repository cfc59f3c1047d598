//! Pre-submit checks.
//!
//! Two layers run in sequence and stop at the first failure:
//!
//! 1. [`check_constraints`] covers what native field attributes enforce on
//!    the page (`required` on name/email/course, `type=email`).
//! 2. [`check_rules`] covers what those attributes cannot express: consent,
//!    a non-empty province selection and the variant-conditional fields.
//!    Its order is fixed: privacy, province, variant fields, eenheid, team.

use crate::error::ValidationError;
use crate::state::FormState;
use crate::variant::VariantFields;

/// Run both layers.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(state: &FormState) -> Result<(), ValidationError> {
    check_constraints(state)?;
    check_rules(state)
}

/// Native field constraints.
///
/// # Errors
///
/// Returns the first failing constraint.
pub fn check_constraints(state: &FormState) -> Result<(), ValidationError> {
    if is_blank(&state.name) {
        return Err(ValidationError::MissingName);
    }
    if is_blank(&state.email) {
        return Err(ValidationError::MissingEmail);
    }
    if !looks_like_email(&state.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if let VariantFields::Training(t) = &state.fields {
        if is_blank(&t.course) {
            return Err(ValidationError::MissingCourse);
        }
    }
    Ok(())
}

/// Variant-aware rules.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_rules(state: &FormState) -> Result<(), ValidationError> {
    if !state.privacy_accepted {
        return Err(ValidationError::PrivacyNotAccepted);
    }
    if state.provinces.is_empty() {
        return Err(ValidationError::NoProvince);
    }
    match &state.fields {
        VariantFields::Training(t) => {
            if is_blank(&t.cost_center) {
                return Err(ValidationError::MissingCostCenter);
            }
            if is_blank(&t.training_date) {
                return Err(ValidationError::MissingTrainingDate);
            }
        }
        VariantFields::Team(t) => {
            if is_blank(&t.phone) {
                return Err(ValidationError::MissingPhone);
            }
        }
    }
    if is_blank(&state.eenheid) {
        return Err(ValidationError::MissingEenheid);
    }
    if is_blank(&state.team) {
        return Err(ValidationError::MissingTeam);
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// Same shape a browser accepts for `type=email`: one `@`, non-empty parts,
// no whitespace.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
