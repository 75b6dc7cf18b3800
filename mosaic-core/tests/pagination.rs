//! End-to-end pagination scenarios driven through the coordinator's public
//! surface, the way a gallery view drives it.

use chrono::Utc;
use mosaic_core::fetch::{
    ApplyOutcome, FetchCoordinator, FetchPhase, PageRequest, PageSizePolicy,
};
use mosaic_core::selection_from_query;
use mosaic_model::{ResourceItem, SearchResponse, UserMeta};

fn item(id: usize) -> ResourceItem {
    ResourceItem {
        resource_id: format!("res-{id}"),
        bucket_id: None,
        user_meta: UserMeta::default(),
        content_type: "video/mp4".to_string(),
        size_bytes: 1,
        width: 1280,
        height: 720,
        duration_ms: None,
        time_added: Utc::now(),
        thumbnail_url: String::new(),
        content_url: String::new(),
    }
}

fn page(request: &PageRequest, total: usize) -> SearchResponse {
    let end = (request.offset + request.limit).min(total);
    SearchResponse {
        offset: request.offset,
        total,
        results: (request.offset..end).map(item).collect(),
        tags: vec![],
    }
}

#[test]
fn three_pages_of_eight_drain_twenty_results() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::Grid {
        columns: 1,
        rows_per_batch: 8,
    });

    let first = coordinator.reset().expect("initial request");
    assert_eq!((first.offset, first.limit), (0, 8));
    coordinator.apply(&first, page(&first, 20));
    assert_eq!(coordinator.phase(), FetchPhase::Idle);
    assert_eq!(coordinator.offset(), 8);

    let second = coordinator.request_more().expect("second page");
    assert_eq!(second.offset, 8);
    coordinator.apply(&second, page(&second, 20));
    assert_eq!(coordinator.offset(), 16);

    let third = coordinator.request_more().expect("third page");
    assert_eq!(third.offset, 16);
    let outcome = coordinator.apply(&third, page(&third, 20));
    assert_eq!(
        outcome,
        ApplyOutcome::Appended {
            appended: 4,
            end_reached: true
        }
    );
    assert_eq!(coordinator.offset(), 20);
    assert_eq!(coordinator.phase(), FetchPhase::EndReached);
    assert_eq!(coordinator.request_more(), None);
}

#[test]
fn at_most_one_request_in_flight() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(2));
    let first = coordinator.reset().expect("initial request");
    // A scroll event lands while the first page is still loading.
    assert_eq!(coordinator.request_more(), None);
    assert_eq!(coordinator.request_more(), None);
    coordinator.apply(&first, page(&first, 100));
    // Back to Idle, exactly one new request becomes available.
    assert!(coordinator.request_more().is_some());
    assert_eq!(coordinator.request_more(), None);
}

#[test]
fn reset_clears_results_even_after_end_reached() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(1));
    let first = coordinator.reset().expect("initial request");
    coordinator.apply(&first, page(&first, 3));
    assert!(coordinator.is_end_reached());
    assert_eq!(coordinator.results().len(), 3);

    let fresh = coordinator.reset().expect("request after reset");
    assert_eq!(fresh.offset, 0);
    assert_eq!(coordinator.results().len(), 0);
    assert_eq!(coordinator.phase(), FetchPhase::Fetching);
}

#[test]
fn stale_generation_response_is_discarded() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(1));
    let old = coordinator.reset().expect("first selection request");

    // The user navigates again before the response arrives.
    let fresh = coordinator.reset().expect("second selection request");
    assert_ne!(old.generation, fresh.generation);

    assert_eq!(coordinator.apply(&old, page(&old, 50)), ApplyOutcome::Stale);
    assert_eq!(coordinator.results().len(), 0);
    assert_eq!(coordinator.phase(), FetchPhase::Fetching);

    // The current request still applies normally.
    let outcome = coordinator.apply(&fresh, page(&fresh, 50));
    assert!(matches!(outcome, ApplyOutcome::Appended { .. }));
}

#[test]
fn empty_page_with_outstanding_total_returns_to_idle() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(1));
    let first = coordinator.reset().expect("initial request");
    let outcome = coordinator.apply(
        &first,
        SearchResponse {
            offset: 0,
            total: 10,
            results: vec![],
            tags: vec![],
        },
    );
    assert_eq!(
        outcome,
        ApplyOutcome::Appended {
            appended: 0,
            end_reached: false
        }
    );
    // Idle, not EndReached: the next scroll tick retries.
    assert_eq!(coordinator.phase(), FetchPhase::Idle);
    assert!(coordinator.request_more().is_some());
}

#[test]
fn zero_total_selection_ends_immediately() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(1));
    let first = coordinator.reset().expect("initial request");
    coordinator.apply(&first, page(&first, 0));
    assert!(coordinator.is_end_reached());
}

#[test]
fn short_page_ends_pagination_despite_inflated_total() {
    // An admin deleted items mid-scroll: the server says 40 but only has 10.
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(2));
    let first = coordinator.reset().expect("initial request");
    let mut response = page(&first, 10);
    response.total = 40;
    coordinator.apply(&first, response);
    assert!(coordinator.is_end_reached());
}

#[test]
fn failed_fetch_keeps_results_and_retries() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(2));
    let first = coordinator.reset().expect("initial request");
    coordinator.apply(&first, page(&first, 100));

    let second = coordinator.request_more().expect("second page");
    coordinator.fail(&second);
    assert_eq!(coordinator.phase(), FetchPhase::Idle);
    assert_eq!(coordinator.results().len(), 16);

    // Retry picks up at the same offset.
    let retry = coordinator.request_more().expect("retry request");
    assert_eq!(retry.offset, second.offset);
}

#[test]
fn column_increase_triggers_immediate_refetch() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(3));
    let first = coordinator.reset().expect("initial request");
    assert_eq!(first.limit, 24);
    coordinator.apply(&first, page(&first, 200));
    assert_eq!(coordinator.phase(), FetchPhase::Idle);

    // Window grows from 3 to 5 columns: fetch without waiting for a scroll.
    let request = coordinator.set_columns(5).expect("refetch on growth");
    assert_eq!(request.offset, 24);
    assert_eq!(request.limit, 40);

    // Shrinking never fetches.
    coordinator.apply(&request, page(&request, 200));
    assert_eq!(coordinator.set_columns(2), None);
}

#[test]
fn column_increase_after_end_reached_is_a_noop() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(2));
    let first = coordinator.reset().expect("initial request");
    coordinator.apply(&first, page(&first, 5));
    assert!(coordinator.is_end_reached());
    assert_eq!(coordinator.set_columns(6), None);
}

#[test]
fn unmeasured_list_defers_initial_request_to_first_measurement() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::list(0.0));
    assert_eq!(coordinator.reset(), None);
    assert_eq!(coordinator.phase(), FetchPhase::Idle);

    let request = coordinator
        .set_viewport_height(900.0)
        .expect("deferred first page");
    assert_eq!(request.offset, 0);
    // ceil(900 / 36) rows
    assert_eq!(request.limit, 25);
}

#[test]
fn list_resize_with_results_present_never_fetches() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::list(900.0));
    let first = coordinator.reset().expect("initial request");
    // Resize while the first page is still in flight stays quiet.
    assert_eq!(coordinator.set_viewport_height(1200.0), None);
    coordinator.apply(&first, page(&first, 100));
    assert_eq!(coordinator.set_viewport_height(600.0), None);
    assert_eq!(coordinator.phase(), FetchPhase::Idle);
}

#[test]
fn unmeasured_grid_defers_initial_request_to_first_layout() {
    let mut coordinator = FetchCoordinator::new(PageSizePolicy::grid(0));
    assert_eq!(coordinator.reset(), None);
    assert_eq!(coordinator.phase(), FetchPhase::Idle);

    let request = coordinator.set_columns(4).expect("deferred first page");
    assert_eq!(request.offset, 0);
    assert_eq!(request.limit, 32);
}

#[test]
fn selection_change_is_detected_by_value() {
    let a = selection_from_query("q=sunset&tag=beach");
    let b = selection_from_query("tag=beach&q=sunset");
    let c = selection_from_query("q=sunset&tag=rocks");
    // Equal selections suppress the reset; different ones require it.
    assert_eq!(a, b);
    assert_ne!(a, c);
}
