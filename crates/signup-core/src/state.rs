//! The values entered into one form session.

use tracing::debug;

use crate::province::{Province, ProvinceSet};
use crate::variant::{Variant, VariantFields};

/// Everything the person has entered so far.
///
/// Shared fields live directly on the struct; the fields that only one
/// variant has live in [`VariantFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub provinces: ProvinceSet,
    pub fields: VariantFields,
    pub eenheid: String,
    pub team: String,
    pub message: String,
    pub privacy_accepted: bool,
}

impl FormState {
    /// Empty state for a variant.
    #[must_use]
    pub fn initial(variant: Variant, preselected_course: Option<&str>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            provinces: ProvinceSet::new(),
            fields: VariantFields::initial(variant, preselected_course),
            eenheid: String::new(),
            team: String::new(),
            message: String::new(),
            privacy_accepted: false,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.fields.variant()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_eenheid(&mut self, value: impl Into<String>) {
        self.eenheid = value.into();
    }

    pub fn set_team(&mut self, value: impl Into<String>) {
        self.team = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    pub fn set_privacy_accepted(&mut self, accepted: bool) {
        self.privacy_accepted = accepted;
    }

    /// Toggle a province in or out of the selection.
    pub fn toggle_province(&mut self, province: Province) -> bool {
        let selected = self.provinces.toggle(province);
        debug!(%province, selected, "province toggled");
        selected
    }

    /// Remove a province from the selection.
    pub fn remove_province(&mut self, province: Province) -> bool {
        self.provinces.remove(province)
    }

    /// Set the course. Ignored on team forms, whose course is fixed.
    ///
    /// Returns whether the value was applied.
    pub fn set_course(&mut self, value: impl Into<String>) -> bool {
        match &mut self.fields {
            VariantFields::Training(t) => {
                t.course = value.into();
                true
            }
            VariantFields::Team(_) => {
                debug!(field = "course", "field not present on team form, ignored");
                false
            }
        }
    }

    /// Set the training date. Ignored on team forms.
    pub fn set_training_date(&mut self, value: impl Into<String>) -> bool {
        match &mut self.fields {
            VariantFields::Training(t) => {
                t.training_date = value.into();
                true
            }
            VariantFields::Team(_) => {
                debug!(field = "trainingDate", "field not present on team form, ignored");
                false
            }
        }
    }

    /// Set the cost center. Ignored on team forms.
    pub fn set_cost_center(&mut self, value: impl Into<String>) -> bool {
        match &mut self.fields {
            VariantFields::Training(t) => {
                t.cost_center = value.into();
                true
            }
            VariantFields::Team(_) => {
                debug!(field = "costCenter", "field not present on team form, ignored");
                false
            }
        }
    }

    /// Set the phone number. Ignored on training forms.
    pub fn set_phone(&mut self, value: impl Into<String>) -> bool {
        match &mut self.fields {
            VariantFields::Team(t) => {
                t.phone = value.into();
                true
            }
            VariantFields::Training(_) => {
                debug!(field = "phone", "field not present on training form, ignored");
                false
            }
        }
    }
}
