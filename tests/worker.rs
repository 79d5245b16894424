//! `DirectoryWorker` against a fake backend.

mod support;

use portfolio_directory::domain::{FilterSelection, SectorId};
use portfolio_directory::worker::{DirectoryWorker, WorkerMessage, WorkerResponse};
use support::{company, names, worker, FakeApi};

#[tokio::test]
async fn listing_page_reports_page_count() {
    let companies = (1..=268).map(|i| company(&format!("C{i}"), Some(5), &[35])).collect();
    let worker = worker(FakeApi::new(companies));

    let response = worker
        .handle(WorkerMessage::fetch_page(1, 45, FilterSelection::default(), None))
        .await;

    let WorkerResponse::PageLoaded {
        request_id,
        companies,
        total_pages,
    } = response
    else {
        panic!("expected a page");
    };
    assert_eq!(request_id, 1);
    assert_eq!(total_pages, Some(45));
    assert_eq!(names(&companies), vec!["C265", "C266", "C267", "C268"]);
}

#[tokio::test]
async fn search_results_follow_identifier_order_without_truncation() {
    let fixtures: Vec<_> = (1..=9).map(|i| company(&format!("Co{i}"), Some(5), &[35])).collect();
    let api = FakeApi::new(fixtures);
    let calls = api.call_log();
    let worker = worker(api);
    let ids: Vec<String> = ["Co9", "Co1", "Co7", "Co3", "Co5", "Co2", "Co8", "Co4"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    let response = worker
        .handle(WorkerMessage::fetch_page(3, 1, FilterSelection::default(), Some(ids.clone())))
        .await;

    let WorkerResponse::PageLoaded {
        companies,
        total_pages,
        ..
    } = response
    else {
        panic!("expected a page");
    };
    assert_eq!(total_pages, None);
    assert_eq!(
        companies.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
        ids
    );

    let calls = calls.all();
    assert_eq!(calls.len(), 8);
    assert!(calls.iter().all(|q| q.page.is_none() && q.company.is_some()));
}

#[tokio::test]
async fn search_results_apply_filters_and_skip_duplicates() {
    let worker = worker(FakeApi::new(vec![
        company("Acme", Some(5), &[35]),
        company("Acme Health", Some(5), &[35]),
        company("Beta", Some(5), &[35]),
        company("Gamma", Some(5), &[12]),
    ]));
    let mut filters = FilterSelection::default();
    filters.toggle_sector(SectorId(35));

    // "Acme" also matches "Acme Health", which then appears only once.
    let ids = ["Beta", "Gamma", "Acme", "Acme Health"].map(String::from).to_vec();
    let response = worker.handle(WorkerMessage::fetch_page(1, 1, filters, Some(ids))).await;

    let WorkerResponse::PageLoaded { companies, .. } = response else {
        panic!("expected a page");
    };
    assert_eq!(names(&companies), vec!["Beta", "Acme", "Acme Health"]);
}

#[tokio::test]
async fn lookup_picks_exact_name_across_pages() {
    let mut fixtures: Vec<_> = (1..=13).map(|i| company(&format!("Nova {i}"), None, &[])).collect();
    fixtures.push(company("Nova", Some(9), &[35]));
    let api = FakeApi::new(fixtures);
    let calls = api.call_log();
    let worker = worker(api);

    let response = worker.handle(WorkerMessage::lookup_company("Nova".to_string())).await;

    let WorkerResponse::CompanyFound { company } = response else {
        panic!("expected the company");
    };
    assert_eq!(company.name, "Nova");
    assert_eq!(calls.len(), 3);
}

#[tokio::test]
async fn lookup_gives_up_after_page_limit() {
    let fixtures: Vec<_> = (1..=100).map(|i| company(&format!("Zeta {i}"), None, &[])).collect();
    let api = FakeApi::new(fixtures);
    let calls = api.call_log();
    let worker = DirectoryWorker::new(api, 6, 4);

    let response = worker.handle(WorkerMessage::lookup_company("Zeta".to_string())).await;

    assert_eq!(
        response,
        WorkerResponse::CompanyNotFound {
            name: "Zeta".to_string()
        }
    );
    let pages: Vec<_> = calls.all().iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[tokio::test]
async fn lookup_stops_when_there_is_no_next_page() {
    let api = FakeApi::new(vec![company("Omega Pay", None, &[])]);
    let calls = api.call_log();
    let worker = worker(api);

    let response = worker.handle(WorkerMessage::lookup_company("Omega".to_string())).await;

    assert!(matches!(response, WorkerResponse::CompanyNotFound { .. }));
    assert_eq!(calls.len(), 1);
}

#[tokio::test]
async fn failures_map_to_failure_responses() {
    let worker = worker(FakeApi::failing());

    let page = worker
        .handle(WorkerMessage::fetch_page(4, 1, FilterSelection::default(), None))
        .await;
    assert!(matches!(page, WorkerResponse::PageFailed { request_id: 4, ref message } if message.contains("502")));

    let search = worker.handle(WorkerMessage::search(5, "fintech".to_string())).await;
    assert!(matches!(
        search,
        WorkerResponse::SearchFailed { request_id: 5, ref query, .. } if query == "fintech"
    ));

    let options = worker.handle(WorkerMessage::load_filter_options()).await;
    assert!(matches!(options, WorkerResponse::FilterOptionsFailed { .. }));

    let lookup = worker.handle(WorkerMessage::lookup_company("Nium".to_string())).await;
    assert!(matches!(lookup, WorkerResponse::CompanyNotFound { .. }));
}
