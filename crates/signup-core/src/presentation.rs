//! What each variant shows: sections, labels and status banners.

use crate::variant::Variant;

/// Submit label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Verzenden...";

/// Banner shown after a successful submission.
pub const SUCCESS_BANNER: &str =
    "✅ Aanmelding succesvol verzonden! We nemen zo snel mogelijk contact met je op.";

/// Banner shown after a failed submission. Stays until the next attempt.
pub const ERROR_BANNER: &str = "❌ Er is een fout opgetreden. Probeer het opnieuw of neem direct contact op via 088-5326720.";

/// Fixed texts and section visibility for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub heading: &'static str,
    pub intro: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit_idle_label: &'static str,
    /// Course selector, training-date selector and cost center.
    pub shows_training_section: bool,
    pub shows_phone: bool,
}

const TRAINING: Presentation = Presentation {
    heading: "Aanmelden voor training",
    intro: "Vul het formulier in en we nemen zo snel mogelijk contact met je op.",
    message_label: "Bericht",
    message_placeholder: "Vertel ons meer over je wensen of vragen...",
    submit_idle_label: "Aanmelden voor training",
    shows_training_section: true,
    shows_phone: false,
};

const TEAM: Presentation = Presentation {
    heading: "Heb je interesse in een team traject",
    intro: "Laat je gegevens achter en we plannen graag een moment om jullie teamtraject te bespreken.",
    message_label: "Vertel ons meer over je doelstelling voor het team traject",
    message_placeholder: "Vertel ons meer over je doelstelling team traject.",
    submit_idle_label: "Aanvraag indienen",
    shows_training_section: false,
    shows_phone: true,
};

impl Presentation {
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Training => TRAINING,
            Variant::Team => TEAM,
        }
    }

    /// Label of the submit control for the current submitting state.
    #[must_use]
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        if submitting {
            SUBMITTING_LABEL
        } else {
            self.submit_idle_label
        }
    }
}
