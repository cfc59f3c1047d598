//! Form variants and the fields only one of them carries.
//!
//! A training signup needs a course, a training date and a cost center; a
//! team inquiry needs a phone number instead. Each arm of [`VariantFields`]
//! holds only its own fields, so "required in this variant" is a matter of
//! which struct exists rather than a runtime flag.

use std::fmt;
use std::str::FromStr;

use crate::catalog::TEAM_COURSE;

/// Which form is shown. Fixed when the form is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Individual signup for a scheduled training.
    #[default]
    Training,
    /// Inquiry for a team trajectory.
    Team,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Training => f.write_str("training"),
            Self::Team => f.write_str("team"),
        }
    }
}

/// Returned when a string does not name a variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}', expected 'training' or 'team'")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "training" => Ok(Self::Training),
            "team" => Ok(Self::Team),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Fields of the training variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingFields {
    pub course: String,
    pub training_date: String,
    pub cost_center: String,
}

/// Fields of the team variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFields {
    pub phone: String,
}

/// Variant-specific part of the form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantFields {
    Training(TrainingFields),
    Team(TeamFields),
}

impl VariantFields {
    /// Initial fields for a variant. The preselected course only applies to
    /// the training variant.
    #[must_use]
    pub fn initial(variant: Variant, preselected_course: Option<&str>) -> Self {
        match variant {
            Variant::Training => Self::Training(TrainingFields {
                course: preselected_course.unwrap_or_default().to_owned(),
                ..TrainingFields::default()
            }),
            Variant::Team => Self::Team(TeamFields::default()),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Training(_) => Variant::Training,
            Self::Team(_) => Variant::Team,
        }
    }

    /// Course value as submitted. Team forms always send [`TEAM_COURSE`].
    #[must_use]
    pub fn course(&self) -> &str {
        match self {
            Self::Training(t) => &t.course,
            Self::Team(_) => TEAM_COURSE,
        }
    }
}
