//! Option lists shown by the form.
//!
//! Values are what gets submitted; labels are what the selector displays.

/// Course value submitted by every team-variant form.
pub const TEAM_COURSE: &str = "Team trajecten";

/// A selectable value with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Trainings offered in the course selector.
pub const COURSES: [SelectOption; 9] = [
    option("Scrum Master Basis / Beginner", "Scrum Master Basis"),
    option("Scrum Master Verdiept / Gevorderd", "Scrum Master Verdiept"),
    option("Product Owner Basis / Beginner", "Product Owner Basis"),
    option("Product Owner Verdiept", "Product Owner Verdiept"),
    option(
        "Product Owner ism Scrum Master / Beginner",
        "Product Owner ism Scrum Master",
    ),
    option("Agile Coach Opleiding", "Agile Coach Opleiding"),
    option("Agile Leiderschap Opleiding", "Agile Leiderschap Opleiding"),
    option("Sturen met Obeya", "Sturen met Obeya"),
    option("Facilitator in Obeya", "Facilitator in Obeya"),
];

/// Scheduled dates in the training-date selector.
pub const TRAINING_SCHEDULE: [SelectOption; 4] = [
    option(
        "Scrum Master: 2 en 3 maart in Utrecht",
        "Scrum Master · 2 & 3 maart (Utrecht)",
    ),
    option(
        "Product Owner: 20 en 21 april in Utrecht",
        "Product Owner · 20 & 21 april (Utrecht)",
    ),
    option(
        "Gecombineerde PO/SM: 13-16 april in Utrecht",
        "Gecombineerde PO/SM · 13-16 april (Utrecht)",
    ),
    option("Andere datum in overleg", "Andere datum (in overleg)"),
];

/// Look up the display label of a course value.
#[must_use]
pub fn course_label(value: &str) -> Option<&'static str> {
    COURSES.iter().find(|o| o.value == value).map(|o| o.label)
}

/// Look up the display label of a schedule value.
#[must_use]
pub fn schedule_label(value: &str) -> Option<&'static str> {
    TRAINING_SCHEDULE
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
}
