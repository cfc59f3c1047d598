//! Provinces a participant is willing to travel to.
//!
//! [`ProvinceSet`] is a toggle set: selecting a province that is already
//! present removes it. It remembers selection order so chosen provinces can
//! be shown as removable tags in the order they were picked, while the list
//! of selectable options always follows [`Province::ALL`].

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::Serialize;

/// One of the twelve Dutch provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Province {
    Drenthe,
    Flevoland,
    Friesland,
    Gelderland,
    Groningen,
    Limburg,
    #[serde(rename = "Noord-Brabant")]
    NoordBrabant,
    #[serde(rename = "Noord-Holland")]
    NoordHolland,
    Overijssel,
    Utrecht,
    Zeeland,
    #[serde(rename = "Zuid-Holland")]
    ZuidHolland,
}

impl Province {
    /// Canonical display order of the selectable options.
    pub const ALL: [Self; 12] = [
        Self::Drenthe,
        Self::Flevoland,
        Self::Friesland,
        Self::Gelderland,
        Self::Groningen,
        Self::Limburg,
        Self::NoordBrabant,
        Self::NoordHolland,
        Self::Overijssel,
        Self::Utrecht,
        Self::Zeeland,
        Self::ZuidHolland,
    ];

    /// Display name, also the value sent in the submission payload.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Drenthe => "Drenthe",
            Self::Flevoland => "Flevoland",
            Self::Friesland => "Friesland",
            Self::Gelderland => "Gelderland",
            Self::Groningen => "Groningen",
            Self::Limburg => "Limburg",
            Self::NoordBrabant => "Noord-Brabant",
            Self::NoordHolland => "Noord-Holland",
            Self::Overijssel => "Overijssel",
            Self::Utrecht => "Utrecht",
            Self::Zeeland => "Zeeland",
            Self::ZuidHolland => "Zuid-Holland",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a province.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown province '{0}'")]
pub struct UnknownProvince(pub String);

impl FromStr for Province {
    type Err = UnknownProvince;

    /// Case-insensitive; spaces are accepted in place of hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(' ', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownProvince(s.to_owned()))
    }
}

/// Selected provinces, in selection order.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProvinceSet {
    selected: IndexSet<Province>,
}

impl ProvinceSet {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the province if absent, remove it if present.
    ///
    /// Returns `true` when the province is selected afterwards.
    pub fn toggle(&mut self, province: Province) -> bool {
        if self.selected.shift_remove(&province) {
            false
        } else {
            self.selected.insert(province);
            true
        }
    }

    /// Remove a province, e.g. from its tag's remove button.
    ///
    /// Returns `true` if it was selected.
    pub fn remove(&mut self, province: Province) -> bool {
        self.selected.shift_remove(&province)
    }

    /// Whether the province is currently selected.
    #[must_use]
    pub fn contains(&self, province: Province) -> bool {
        self.selected.contains(&province)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Selected provinces in the order they were picked (the tag row).
    pub fn tags(&self) -> impl Iterator<Item = Province> + '_ {
        self.selected.iter().copied()
    }

    /// Every province in canonical order, paired with its selection state
    /// (the option grid).
    pub fn options(&self) -> impl Iterator<Item = (Province, bool)> + '_ {
        Province::ALL.into_iter().map(|p| (p, self.contains(p)))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl FromIterator<Province> for ProvinceSet {
    fn from_iter<I: IntoIterator<Item = Province>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
