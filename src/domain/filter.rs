//! Filter selection value type.
//!
//! [`FilterSelection`] is the plain data behind the filter panel: which
//! headquarters countries and which sectors are currently ticked. It is a
//! value type with set semantics; change notification lives in
//! [`crate::app::FilterState`].

use super::company::{Company, CountryId, SectorId};
use serde::{Deserialize, Serialize};

/// The user's active filter choices.
///
/// Both lists behave as sets (no duplicates) but keep insertion order so
/// filter chips render in the order they were picked. Query encoding does not
/// depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub countries: Vec<CountryId>,
    pub sectors: Vec<SectorId>,
}

impl FilterSelection {
    /// Returns `true` when neither countries nor sectors are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.sectors.is_empty()
    }

    /// Flips membership of a country. Returns `true` if it is now selected.
    pub fn toggle_country(&mut self, id: CountryId) -> bool {
        toggle(&mut self.countries, id)
    }

    /// Flips membership of a sector. Returns `true` if it is now selected.
    pub fn toggle_sector(&mut self, id: SectorId) -> bool {
        toggle(&mut self.sectors, id)
    }

    /// Removes every selection.
    pub fn clear(&mut self) {
        self.countries.clear();
        self.sectors.clear();
    }

    /// Drops ids that are not in the given reference lists.
    ///
    /// Returns `true` if anything was removed.
    pub fn retain_known(&mut self, countries: &[CountryId], sectors: &[SectorId]) -> bool {
        let before = (self.countries.len(), self.sectors.len());
        self.countries.retain(|id| countries.contains(id));
        self.sectors.retain(|id| sectors.contains(id));
        before != (self.countries.len(), self.sectors.len())
    }

    /// Applies the backend's filter semantics locally.
    ///
    /// A company matches when its headquarters is one of the selected
    /// countries (or no country is selected) and it carries at least one of
    /// the selected sectors (or no sector is selected).
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        let country_ok = self.countries.is_empty()
            || company
                .headquarters
                .is_some_and(|hq| self.countries.contains(&hq));
        let sector_ok = self.sectors.is_empty()
            || company.sectors.iter().any(|s| self.sectors.contains(s));
        country_ok && sector_ok
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, id: T) -> bool {
    if let Some(pos) = items.iter().position(|existing| *existing == id) {
        items.remove(pos);
        false
    } else {
        items.push(id);
        true
    }
}
