//! Command-line input parsing.
//!
//! The terminal runtime reads one command per line and turns it into an
//! [`Event`]. Country and sector arguments accept either a numeric id or a
//! name, which is resolved against the loaded reference lists with fuzzy
//! matching.

use super::handler::Event;
use super::state::AppState;
use crate::domain::{CountryId, SectorId};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Parses one input line.
///
/// Returns `None` for blank lines, unknown commands, and arguments that do
/// not resolve.
///
/// # Examples
///
/// ```
/// use portfolio_directory::app::{parse_command, AppState, Event};
/// use portfolio_directory::storage::MemoryResultCache;
/// use portfolio_directory::ui::Theme;
///
/// let state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
/// assert_eq!(parse_command("page 3", &state), Some(Event::GoToPage(3)));
/// assert_eq!(parse_command("search", &state), Some(Event::ClearSearch));
/// ```
#[must_use]
pub fn parse_command(line: &str, state: &AppState) -> Option<Event> {
    let line = line.trim();
    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, a)| (c, a.trim()));

    let event = match command.to_lowercase().as_str() {
        "" => return None,
        "search" | "s" | "/" if argument.is_empty() => Event::ClearSearch,
        "search" | "s" | "/" => Event::CommitSearch(argument.to_string()),
        "country" | "c" => Event::ToggleCountry(resolve_country(argument, state)?),
        "sector" | "t" => Event::ToggleSector(resolve_sector(argument, state)?),
        "clear" => Event::ClearFilters,
        "next" | "n" => Event::NextPage,
        "prev" | "p" => Event::PreviousPage,
        "page" => Event::GoToPage(argument.parse().ok()?),
        "down" | "j" => Event::ScrollDown,
        "up" | "k" => Event::ScrollUp,
        "open" | "o" => {
            let index: usize = argument.parse().ok()?;
            let company = state.companies.get(index.checked_sub(1)?)?;
            Event::OpenCompany {
                name: company.name.clone(),
            }
        }
        "back" | "b" => Event::CloseDetail,
        "refresh" | "r" => Event::Refresh,
        "quit" | "q" | "exit" => Event::Quit,
        other => {
            tracing::debug!(command = %other, "unknown command");
            return None;
        }
    };

    Some(event)
}

fn resolve_country(argument: &str, state: &AppState) -> Option<CountryId> {
    if let Ok(id) = argument.parse::<u32>() {
        return Some(CountryId(id));
    }
    best_match(argument, state.countries.iter().map(|c| (c.id, c.hq_name.as_str())))
}

fn resolve_sector(argument: &str, state: &AppState) -> Option<SectorId> {
    if let Ok(id) = argument.parse::<u32>() {
        return Some(SectorId(id));
    }
    best_match(argument, state.sectors.iter().map(|s| (s.id, s.sector_name.as_str())))
}

/// Picks the option whose name scores highest against `pattern`.
///
/// An exact case-insensitive name wins outright.
fn best_match<'a, T: Copy>(pattern: &str, options: impl Iterator<Item = (T, &'a str)>) -> Option<T> {
    if pattern.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    let pattern = pattern.to_lowercase();

    let mut best: Option<(i64, T)> = None;
    for (id, name) in options {
        let name = name.to_lowercase();
        if name == pattern {
            return Some(id);
        }
        if let Some(score) = matcher.fuzzy_match(&name, &pattern) {
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, id));
            }
        }
    }

    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Company, CountryOption, SectorOption};
    use crate::storage::MemoryResultCache;
    use crate::ui::Theme;

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default(), Box::new(MemoryResultCache::default()));
        state.countries = vec![
            CountryOption {
                id: CountryId(5),
                hq_name: "India".to_string(),
            },
            CountryOption {
                id: CountryId(7),
                hq_name: "Indonesia".to_string(),
            },
        ];
        state.sectors = vec![
            SectorOption {
                id: SectorId(35),
                sector_name: "Fintech".to_string(),
            },
            SectorOption {
                id: SectorId(12),
                sector_name: "Healthtech".to_string(),
            },
        ];
        state.companies = vec![Company::new("Nium", ""), Company::new("Aspire", "")];
        state
    }

    #[test]
    fn search_with_and_without_query() {
        let state = state();
        assert_eq!(
            parse_command("search  neo bank ", &state),
            Some(Event::CommitSearch("neo bank".to_string()))
        );
        assert_eq!(parse_command("search", &state), Some(Event::ClearSearch));
    }

    #[test]
    fn filters_resolve_by_id_or_name() {
        let state = state();
        assert_eq!(parse_command("country 5", &state), Some(Event::ToggleCountry(CountryId(5))));
        assert_eq!(parse_command("country india", &state), Some(Event::ToggleCountry(CountryId(5))));
        assert_eq!(parse_command("country indo", &state), Some(Event::ToggleCountry(CountryId(7))));
        assert_eq!(parse_command("sector fin", &state), Some(Event::ToggleSector(SectorId(35))));
        assert_eq!(parse_command("sector zzz", &state), None);
    }

    #[test]
    fn open_maps_card_index_to_name() {
        let state = state();
        assert_eq!(
            parse_command("open 2", &state),
            Some(Event::OpenCompany {
                name: "Aspire".to_string()
            })
        );
        assert_eq!(parse_command("open 0", &state), None);
        assert_eq!(parse_command("open 3", &state), None);
    }

    #[test]
    fn scroll_commands() {
        let state = state();
        assert_eq!(parse_command("down", &state), Some(Event::ScrollDown));
        assert_eq!(parse_command("k", &state), Some(Event::ScrollUp));
    }

    #[test]
    fn unknown_and_blank_lines_are_ignored() {
        let state = state();
        assert_eq!(parse_command("   ", &state), None);
        assert_eq!(parse_command("dance", &state), None);
        assert_eq!(parse_command("page two", &state), None);
    }
}
