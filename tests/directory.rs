//! End-to-end behaviour of the directory view against a fake backend.

mod support;

use portfolio_directory::app::{handle_event, parse_command, SearchPhase, ViewMode};
use portfolio_directory::domain::{CountryId, SectorId};
use portfolio_directory::storage::{CachedSearch, JsonStore, ResultCache};
use portfolio_directory::worker::{WorkerMessage, WorkerResponse};
use portfolio_directory::{AppState, Event, Theme};
use support::{company, messages, names, new_state, pump, worker, FakeApi};
use tempfile::TempDir;

fn listing(count: usize) -> Vec<portfolio_directory::Company> {
    (1..=count).map(|i| company(&format!("Company {i:03}"), Some(5), &[35])).collect()
}

#[tokio::test]
async fn navigate_loads_options_and_first_page() {
    let worker = worker(FakeApi::new(listing(268)));
    let mut state = new_state();

    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    assert_eq!(state.countries.len(), 2);
    assert_eq!(state.sectors.len(), 2);
    assert_eq!(state.companies.len(), 6);
    assert_eq!(state.pagination.current_page(), 1);
    assert_eq!(state.pagination.total_pages(), 45);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn filter_change_resets_to_first_page() {
    let api = FakeApi::new(listing(60));
    let calls = api.call_log();
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(&mut state, &worker, Event::GoToPage(7)).await;
    assert_eq!(state.pagination.current_page(), 7);

    for event in [
        Event::ToggleSector(SectorId(35)),
        Event::ToggleCountry(CountryId(5)),
        Event::ClearFilters,
    ] {
        pump(&mut state, &worker, Event::NextPage).await;
        assert!(state.pagination.current_page() > 1);

        pump(&mut state, &worker, event).await;
        assert_eq!(state.pagination.current_page(), 1);
    }

    let last = calls.last().unwrap();
    assert_eq!(last.page, Some(1));
    assert!(last.filters.is_empty());
}

#[tokio::test]
async fn active_search_suppresses_pagination() {
    let api = FakeApi::new(listing(30)).with_search("fintech", &["Company 004", "Company 002"]);
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(&mut state, &worker, Event::CommitSearch("fintech".to_string())).await;
    assert!(matches!(state.search.phase(), SearchPhase::Populated { .. }));
    assert_eq!(names(&state.companies), vec!["Company 004", "Company 002"]);

    let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    let (_, actions) = handle_event(&mut state, &Event::PreviousPage).unwrap();
    assert!(actions.is_empty());
    let (_, actions) = handle_event(&mut state, &Event::GoToPage(3)).unwrap();
    assert!(actions.is_empty());

    let viewmodel = state.compute_viewmodel(40, 100);
    assert!(viewmodel.pagination.is_none());
    assert_eq!(viewmodel.cards.len(), 2);
}

#[tokio::test]
async fn every_search_match_is_reachable_by_scrolling() {
    let all: Vec<String> = (1..=10).map(|i| format!("Company {i:03}")).collect();
    let ids: Vec<&str> = all.iter().map(String::as_str).collect();
    let api = FakeApi::new(listing(10)).with_search("fintech", &ids);
    let worker = worker(api);
    let mut state = new_state();

    pump(
        &mut state,
        &worker,
        Event::Navigate {
            query: Some("fintech".to_string()),
        },
    )
    .await;
    assert_eq!(state.companies.len(), 10);

    let top = state.compute_viewmodel(32, 100);
    assert!(top.pagination.is_none());
    assert_eq!(top.cards.len(), 6);
    let scroll = top.scroll.unwrap();
    assert_eq!((scroll.first, scroll.last, scroll.total), (1, 6, 10));

    let (render, actions) = handle_event(&mut state, &Event::ScrollDown).unwrap();
    assert!(render);
    assert!(actions.is_empty());

    let bottom = state.compute_viewmodel(32, 100);
    let indices: Vec<usize> = bottom.cards.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![5, 6, 7, 8, 9, 10]);
    assert!(portfolio_directory::ui::render(&state, 32, 100).contains("5-10 of 10"));

    let mut seen: Vec<String> = top.cards.into_iter().chain(bottom.cards).map(|c| c.name).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen, all);

    let (render, _) = handle_event(&mut state, &Event::ScrollDown).unwrap();
    assert!(!render);
    assert_eq!(
        parse_command("open 10", &state),
        Some(Event::OpenCompany {
            name: "Company 010".to_string()
        })
    );

    handle_event(&mut state, &Event::ScrollUp).unwrap();
    assert_eq!(state.compute_viewmodel(32, 100).cards[0].index, 1);
}

#[tokio::test]
async fn short_result_lists_have_no_scroll_position() {
    let api = FakeApi::new(listing(30)).with_search("fintech", &["Company 004", "Company 002"]);
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::CommitSearch("fintech".to_string())).await;

    let viewmodel = state.compute_viewmodel(32, 100);
    assert_eq!(viewmodel.cards.len(), 2);
    assert!(viewmodel.scroll.is_none());
    let (render, _) = handle_event(&mut state, &Event::ScrollDown).unwrap();
    assert!(!render);
}

#[tokio::test]
async fn filter_changes_during_a_search_return_to_first_page() {
    let api = FakeApi::new(listing(30)).with_search("pay", &["Company 003", "Company 001"]);
    let calls = api.call_log();
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(&mut state, &worker, Event::GoToPage(4)).await;
    pump(&mut state, &worker, Event::CommitSearch("pay".to_string())).await;
    assert!(matches!(state.search.phase(), SearchPhase::Populated { .. }));
    assert_eq!(state.pagination.current_page(), 1);

    for event in [Event::ToggleSector(SectorId(35)), Event::ClearFilters] {
        // A page number left over from the listing.
        assert!(state.pagination.go_to(3));

        pump(&mut state, &worker, event).await;
        assert_eq!(state.pagination.current_page(), 1);
        assert!(calls.last().unwrap().company.is_some());
        assert_eq!(names(&state.companies), vec!["Company 003", "Company 001"]);
    }
}

#[tokio::test]
async fn clearing_the_query_drops_the_cache_and_uses_plain_listing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local-storage.json");

    let api = FakeApi::new(listing(10)).with_search("fintech", &["Company 001"]);
    let worker = worker(api);
    let mut state = AppState::new(Theme::default(), Box::new(JsonStore::open(&path).unwrap()));

    pump(&mut state, &worker, Event::CommitSearch("fintech".to_string())).await;
    let stored = JsonStore::open(&path).unwrap().get().unwrap().unwrap();
    assert_eq!(stored.query, "fintech");
    assert_eq!(stored.company_ids, vec!["Company 001"]);

    let (_, actions) = handle_event(&mut state, &Event::CommitSearch(String::new())).unwrap();
    assert_eq!(state.search.phase(), &SearchPhase::Idle);
    assert!(JsonStore::open(&path).unwrap().get().unwrap().is_none());

    match messages(actions).as_slice() {
        [WorkerMessage::FetchPage { page, company_ids, .. }] => {
            assert_eq!(*page, 1);
            assert!(company_ids.is_none());
        }
        other => panic!("expected one branch B fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn navigating_with_the_cached_query_restores_results_without_searching() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local-storage.json");
    {
        let mut store = JsonStore::open(&path).unwrap();
        store
            .set(&CachedSearch::new("neo bank", vec!["Company 003".to_string()]))
            .unwrap();
    }

    let worker = worker(FakeApi::new(listing(10)));
    let mut state = AppState::new(Theme::default(), Box::new(JsonStore::open(&path).unwrap()));

    let (_, actions) = handle_event(
        &mut state,
        &Event::Navigate {
            query: Some("neo bank".to_string()),
        },
    )
    .unwrap();

    let messages = messages(actions);
    assert!(!messages.iter().any(|m| matches!(m, WorkerMessage::Search { .. })));
    let fetch = messages
        .into_iter()
        .find(|m| matches!(m, WorkerMessage::FetchPage { .. }))
        .unwrap();
    assert!(matches!(
        &fetch,
        WorkerMessage::FetchPage { company_ids: Some(ids), .. } if ids == &vec!["Company 003".to_string()]
    ));

    let response = worker.handle(fetch).await;
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    assert_eq!(names(&state.companies), vec!["Company 003"]);
}

#[tokio::test]
async fn navigating_with_a_new_query_searches() {
    let api = FakeApi::new(listing(10)).with_search("payments", &["Company 007"]);
    let worker = worker(api);
    let mut state = new_state();

    pump(
        &mut state,
        &worker,
        Event::Navigate {
            query: Some(" payments ".to_string()),
        },
    )
    .await;

    assert_eq!(
        state.search.phase(),
        &SearchPhase::Populated {
            query: "payments".to_string(),
            company_ids: vec!["Company 007".to_string()],
        }
    );
    assert_eq!(names(&state.companies), vec!["Company 007"]);
}

async fn stale_response_scenario(page_two_first: bool) {
    let worker = worker(FakeApi::new(listing(30)));
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    // Leave page 1, then ask for page 1 and page 2 back to back.
    pump(&mut state, &worker, Event::GoToPage(3)).await;
    let (_, first) = handle_event(&mut state, &Event::GoToPage(1)).unwrap();
    let (_, second) = handle_event(&mut state, &Event::GoToPage(2)).unwrap();

    let first = worker.handle(messages(first).remove(0)).await;
    let second = worker.handle(messages(second).remove(0)).await;

    let order = if page_two_first {
        [second.clone(), first]
    } else {
        [first, second.clone()]
    };
    for response in order {
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    }

    let WorkerResponse::PageLoaded { companies, .. } = second else {
        panic!("page 2 should load");
    };
    assert_eq!(state.companies, companies);
    assert_eq!(state.companies[0].name, "Company 007");
    assert_eq!(state.pagination.current_page(), 2);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn superseded_page_is_discarded_when_it_arrives_last() {
    stale_response_scenario(true).await;
}

#[tokio::test]
async fn superseded_page_is_discarded_when_it_arrives_first() {
    stale_response_scenario(false).await;
}

#[tokio::test]
async fn search_response_superseded_by_filter_fetch_is_discarded() {
    let api = FakeApi::new(listing(10)).with_search("fintech", &["Company 001"]);
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    let (_, search) = handle_event(&mut state, &Event::CommitSearch("fintech".to_string())).unwrap();
    let (_, clear) = handle_event(&mut state, &Event::ClearSearch).unwrap();

    let search = worker.handle(messages(search).remove(0)).await;
    let listing = worker.handle(messages(clear).remove(0)).await;

    handle_event(&mut state, &Event::WorkerResponse(listing)).unwrap();
    let (render, actions) = handle_event(&mut state, &Event::WorkerResponse(search)).unwrap();

    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.search.phase(), &SearchPhase::Idle);
    assert_eq!(state.companies.len(), 6);
}

#[tokio::test]
async fn filtered_listing_returns_doubly_matching_companies_in_backend_order() {
    let api = FakeApi::new(vec![
        company("Nium", Some(5), &[35]),
        company("Practo", Some(5), &[12]),
        company("Razorpay", Some(5), &[35, 12]),
    ]);
    let calls = api.call_log();
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(&mut state, &worker, Event::ToggleSector(SectorId(35))).await;
    pump(&mut state, &worker, Event::ToggleCountry(CountryId(5))).await;

    assert_eq!(names(&state.companies), vec!["Nium", "Razorpay"]);
    assert_eq!(state.pagination.total_pages(), 1);

    let last = calls.last().unwrap();
    assert_eq!(last.filters.sectors, vec![SectorId(35)]);
    assert_eq!(last.filters.countries, vec![CountryId(5)]);
}

#[tokio::test]
async fn search_results_are_refiltered_on_filter_change() {
    let api = FakeApi::new(vec![
        company("Nium", Some(9), &[35]),
        company("Practo", Some(5), &[12]),
        company("Razorpay", Some(5), &[35]),
    ])
    .with_search("pay", &["Razorpay", "Practo", "Nium"]);
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(&mut state, &worker, Event::CommitSearch("pay".to_string())).await;
    assert_eq!(names(&state.companies), vec!["Razorpay", "Practo", "Nium"]);

    pump(&mut state, &worker, Event::ToggleSector(SectorId(35))).await;
    assert_eq!(names(&state.companies), vec!["Razorpay", "Nium"]);
    assert!(matches!(state.search.phase(), SearchPhase::Populated { .. }));
}

#[tokio::test]
async fn empty_search_result_shows_empty_grid_without_fetching() {
    let api = FakeApi::new(listing(10)).with_search("quantum", &[]);
    let calls = api.call_log();
    let worker = worker(api);
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;
    let calls_before = calls.len();

    pump(&mut state, &worker, Event::CommitSearch("quantum".to_string())).await;

    assert!(state.companies.is_empty());
    assert!(!state.is_loading());
    assert_eq!(calls.len(), calls_before);

    let viewmodel = state.compute_viewmodel(40, 100);
    assert!(viewmodel.empty_state.is_some());
}

#[tokio::test]
async fn backend_outage_degrades_to_empty_listing() {
    let worker = worker(FakeApi::failing());
    let mut state = new_state();

    pump(&mut state, &worker, Event::Navigate { query: None }).await;
    assert!(state.companies.is_empty());
    assert!(!state.is_loading());
    assert!(state.countries.is_empty());
    assert!(state.filter_options_failed);
    assert!(state.compute_viewmodel(32, 100).footer.notice.is_some());

    pump(&mut state, &worker, Event::CommitSearch("fintech".to_string())).await;
    assert!(matches!(state.search.phase(), SearchPhase::Failed { .. }));
    assert!(state.companies.is_empty());
}

#[tokio::test]
async fn opening_a_company_shows_its_detail() {
    let worker = worker(FakeApi::new(vec![
        company("Nium", Some(9), &[35]),
        company("Nium Labs", Some(5), &[12]),
    ]));
    let mut state = new_state();
    pump(&mut state, &worker, Event::Navigate { query: None }).await;

    pump(
        &mut state,
        &worker,
        Event::OpenCompany {
            name: "Nium Labs".to_string(),
        },
    )
    .await;

    let ViewMode::Detail(detail) = &state.view else {
        panic!("expected detail view");
    };
    assert_eq!(detail.name(), "Nium Labs");

    let frame = portfolio_directory::ui::render(&state, 32, 100);
    assert!(frame.contains("Nium Labs"));
    assert!(frame.contains("Singapore") || frame.contains("India"));

    pump(&mut state, &worker, Event::CloseDetail).await;
    assert_eq!(state.view, ViewMode::Directory);
}
