//! Observable filter selection.

use crate::domain::{CountryId, FilterSelection, SectorId};
use std::fmt;

type Listener = Box<dyn FnMut(&FilterSelection) + Send>;

/// Holds the [`FilterSelection`] and broadcasts every change.
///
/// Listeners run synchronously, in subscription order, after the selection
/// has been updated.
///
/// # Examples
///
/// ```
/// use portfolio_directory::app::FilterState;
/// use portfolio_directory::domain::SectorId;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut filters = FilterState::default();
/// filters.subscribe(move |selection| sink.lock().unwrap().push(selection.sectors.len()));
///
/// filters.toggle_sector(SectorId(35));
/// filters.toggle_sector(SectorId(35));
/// assert_eq!(*seen.lock().unwrap(), vec![1, 0]);
/// ```
#[derive(Default)]
pub struct FilterState {
    selection: FilterSelection,
    listeners: Vec<Listener>,
}

impl fmt::Debug for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FilterState {
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&FilterSelection) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flips a country and notifies. Returns `true` if it is now selected.
    pub fn toggle_country(&mut self, id: CountryId) -> bool {
        let selected = self.selection.toggle_country(id);
        tracing::debug!(country = %id, selected, "country filter toggled");
        self.notify();
        selected
    }

    /// Flips a sector and notifies. Returns `true` if it is now selected.
    pub fn toggle_sector(&mut self, id: SectorId) -> bool {
        let selected = self.selection.toggle_sector(id);
        tracing::debug!(sector = %id, selected, "sector filter toggled");
        self.notify();
        selected
    }

    /// Empties both sets and notifies.
    pub fn clear(&mut self) {
        self.selection.clear();
        tracing::debug!("filters cleared");
        self.notify();
    }

    /// Drops ids missing from the reference lists, notifying only on change.
    pub fn retain_known(&mut self, countries: &[CountryId], sectors: &[SectorId]) -> bool {
        let before = self.selection.clone();
        let changed = self.selection.retain_known(countries, sectors);
        if changed {
            let pruned_countries: Vec<CountryId> = before
                .countries
                .into_iter()
                .filter(|id| !self.selection.countries.contains(id))
                .collect();
            let pruned_sectors: Vec<SectorId> = before
                .sectors
                .into_iter()
                .filter(|id| !self.selection.sectors.contains(id))
                .collect();
            tracing::debug!(
                countries = ?pruned_countries,
                sectors = ?pruned_sectors,
                "pruned filters not in reference lists"
            );
            self.notify();
        }
        changed
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (FilterState, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let mut state = FilterState::default();
        state.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        (state, count)
    }

    #[test]
    fn every_mutation_notifies() {
        let (mut state, count) = counting();
        state.toggle_country(CountryId(5));
        state.toggle_sector(SectorId(35));
        state.clear();
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn pruning_notifies_only_on_change() {
        let (mut state, count) = counting();
        state.toggle_country(CountryId(5));
        assert!(!state.retain_known(&[CountryId(5)], &[]));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(state.retain_known(&[], &[]));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_sees_updated_selection() {
        let seen = Arc::new(std::sync::Mutex::new(None));
        let sink = Arc::clone(&seen);
        let mut state = FilterState::default();
        state.subscribe(move |s| *sink.lock().unwrap() = Some(s.clone()));

        state.toggle_country(CountryId(9));
        let last = seen.lock().unwrap().clone().unwrap();
        assert_eq!(last.countries, vec![CountryId(9)]);
    }
}
