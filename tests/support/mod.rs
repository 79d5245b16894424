//! Shared fixtures: an in-memory backend and an event pump.

#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_directory::api::{CompanyPage, DirectoryApi, ListingQuery};
use portfolio_directory::domain::{Company, CountryId, CountryOption, SectorId, SectorOption};
use portfolio_directory::storage::MemoryResultCache;
use portfolio_directory::worker::{DirectoryWorker, WorkerMessage, WorkerResponse};
use portfolio_directory::{handle_event, Action, AppState, DirectoryError, Event, Result, Theme};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Listing queries seen by a [`FakeApi`], readable after the api has moved
/// into a worker.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<ListingQuery>>>);

impl CallLog {
    fn record(&self, query: &ListingQuery) {
        self.0.lock().unwrap().push(query.clone());
    }

    pub fn all(&self) -> Vec<ListingQuery> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<ListingQuery> {
        self.0.lock().unwrap().last().cloned()
    }
}

/// Backend double that answers from fixtures and records every listing query.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub companies: Vec<Company>,
    pub searches: HashMap<String, Vec<String>>,
    pub countries: Vec<CountryOption>,
    pub sectors: Vec<SectorOption>,
    pub page_size: usize,
    pub fail: bool,
    pub listing_calls: CallLog,
}

impl FakeApi {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            page_size: 6,
            countries: vec![
                CountryOption {
                    id: CountryId(5),
                    hq_name: "India".to_string(),
                },
                CountryOption {
                    id: CountryId(9),
                    hq_name: "Singapore".to_string(),
                },
            ],
            sectors: vec![
                SectorOption {
                    id: SectorId(35),
                    sector_name: "Fintech".to_string(),
                },
                SectorOption {
                    id: SectorId(12),
                    sector_name: "Healthtech".to_string(),
                },
            ],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![])
        }
    }

    pub fn with_search(mut self, query: &str, ids: &[&str]) -> Self {
        self.searches
            .insert(query.to_string(), ids.iter().map(|s| (*s).to_string()).collect());
        self
    }

    pub fn call_log(&self) -> CallLog {
        self.listing_calls.clone()
    }

    fn outage() -> DirectoryError {
        DirectoryError::Status {
            status: 502,
            url: "http://fake/api/".to_string(),
        }
    }
}

#[async_trait]
impl DirectoryApi for FakeApi {
    async fn list_companies(&self, query: &ListingQuery) -> Result<CompanyPage> {
        self.listing_calls.record(query);
        if self.fail {
            return Err(Self::outage());
        }

        let matching: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| query.filters.matches(c))
            .filter(|c| {
                query
                    .company
                    .as_ref()
                    .map_or(true, |name| c.name.to_lowercase().contains(&name.to_lowercase()))
            })
            .cloned()
            .collect();

        let page = query.page.unwrap_or(1);
        let start = (page - 1) * self.page_size;
        let results: Vec<Company> = matching.iter().skip(start).take(self.page_size).cloned().collect();
        let next = (start + self.page_size < matching.len()).then(|| format!("http://fake/api/companies/?page={}", page + 1));

        Ok(CompanyPage {
            count: Some(matching.len() as u64),
            next,
            results,
        })
    }

    async fn semantic_search(&self, query: &str) -> Result<Vec<String>> {
        if self.fail {
            return Err(Self::outage());
        }
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn countries(&self) -> Result<Vec<CountryOption>> {
        if self.fail {
            return Err(Self::outage());
        }
        Ok(self.countries.clone())
    }

    async fn sectors(&self) -> Result<Vec<SectorOption>> {
        if self.fail {
            return Err(Self::outage());
        }
        Ok(self.sectors.clone())
    }
}

pub fn company(name: &str, country: Option<u32>, sectors: &[u32]) -> Company {
    let mut company = Company::new(name, format!("{name} description"));
    company.headquarters = country.map(CountryId);
    company.sectors = sectors.iter().copied().map(SectorId).collect();
    company
}

pub fn names(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}

pub fn new_state() -> AppState {
    AppState::new(Theme::default(), Box::new(MemoryResultCache::default()))
}

pub fn worker(api: FakeApi) -> DirectoryWorker<FakeApi> {
    DirectoryWorker::new(api, 6, 20)
}

/// Worker messages carried by `actions`.
pub fn messages(actions: Vec<Action>) -> Vec<WorkerMessage> {
    actions
        .into_iter()
        .filter_map(|action| match action {
            Action::PostToWorker(message) => Some(message),
            Action::Quit => None,
        })
        .collect()
}

/// Handles `event` and then every worker round trip it causes, in FIFO order,
/// until no work is left.
pub async fn pump(state: &mut AppState, worker: &DirectoryWorker<FakeApi>, event: Event) {
    let mut events = VecDeque::from([event]);
    while let Some(event) = events.pop_front() {
        let (_, actions) = handle_event(state, &event).unwrap();
        for message in messages(actions) {
            let response: WorkerResponse = worker.handle(message).await;
            events.push_back(Event::WorkerResponse(response));
        }
    }
}
