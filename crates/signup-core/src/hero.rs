//! Hero section call-to-action.
//!
//! Course pages show upcoming training dates as cards in the hero. "Direct
//! aanmelden" hands the first card's date to the form through the session
//! store before scrolling down to it.

use crate::error::SessionStoreError;
use crate::handoff::{SessionStore, TrainingDateHandoff};

/// A training date card in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTrainingDate {
    pub course_name: &'static str,
    pub dates: &'static str,
    pub location: &'static str,
}

const SCRUM_MASTER_DATES: HeroTrainingDate = HeroTrainingDate {
    course_name: "Scrum Master",
    dates: "7 & 9 april",
    location: "Utrecht",
};

const PRODUCT_OWNER_DATES: HeroTrainingDate = HeroTrainingDate {
    course_name: "Product Owner",
    dates: "20 & 21 april",
    location: "Utrecht",
};

/// Date cards shown for a course, if it has scheduled dates.
#[must_use]
pub fn course_training_dates(course_id: &str, course_title: &str) -> Option<Vec<HeroTrainingDate>> {
    let id = course_id.to_lowercase();
    let title = course_title.to_lowercase();
    if id != "basis" {
        return None;
    }
    if title.contains("scrum master") {
        Some(vec![SCRUM_MASTER_DATES])
    } else if title.contains("product owner") {
        Some(vec![PRODUCT_OWNER_DATES])
    } else {
        None
    }
}

/// Map a hero card to the training-date value the form submits.
#[must_use]
pub fn hero_date_value(course_name: &str, dates: &str) -> Option<&'static str> {
    match (course_name, dates) {
        ("Scrum Master", "7 & 9 april") => Some("Scrum Master: 7 en 9 april in Utrecht"),
        ("Product Owner", "20 & 21 april") => Some("Product Owner: 20 en 21 april in Utrecht"),
        _ => None,
    }
}

/// The "Direct aanmelden" action: leave the selected date for the form.
///
/// Nothing is written when no date was selected.
///
/// # Errors
///
/// Returns the store's error if the write fails.
pub fn scroll_to_signup<S: SessionStore + ?Sized>(
    selected_date: Option<&str>,
    store: &mut S,
) -> Result<bool, SessionStoreError> {
    match selected_date {
        Some(date) => TrainingDateHandoff::new(store).offer(date),
        None => Ok(false),
    }
}

/// Value of the first card, as used by "Direct aanmelden".
#[must_use]
pub fn first_card_value(cards: &[HeroTrainingDate]) -> Option<&'static str> {
    cards
        .first()
        .and_then(|card| hero_date_value(card.course_name, card.dates))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::handoff::{HANDOFF_KEY, MemorySessionStore};

    #[test]
    fn basis_courses_have_hero_dates() {
        let sm = course_training_dates("Basis", "Scrum Master Basis").unwrap();
        assert_eq!(sm, vec![SCRUM_MASTER_DATES]);
        let po = course_training_dates("basis", "Product Owner basis").unwrap();
        assert_eq!(po[0].dates, "20 & 21 april");
        assert!(course_training_dates("verdiept", "Scrum Master Verdiept").is_none());
        assert!(course_training_dates("basis", "Agile Coach").is_none());
    }

    #[test]
    fn cards_map_to_form_values() {
        assert_eq!(
            hero_date_value("Scrum Master", "7 & 9 april"),
            Some("Scrum Master: 7 en 9 april in Utrecht")
        );
        assert_eq!(hero_date_value("Scrum Master", "2 & 3 maart"), None);
        assert_eq!(
            first_card_value(&[PRODUCT_OWNER_DATES]),
            Some("Product Owner: 20 en 21 april in Utrecht")
        );
        assert_eq!(first_card_value(&[]), None);
    }

    #[test]
    fn scroll_without_date_leaves_store_untouched() {
        let mut store = MemorySessionStore::new();
        assert!(!scroll_to_signup(None, &mut store).unwrap());
        assert!(!scroll_to_signup(Some(""), &mut store).unwrap());
        assert!(!store.contains(HANDOFF_KEY));

        assert!(scroll_to_signup(first_card_value(&[SCRUM_MASTER_DATES]), &mut store).unwrap());
        assert!(store.contains(HANDOFF_KEY));
    }
}
