// src/tests/router_tests/listing_page_tests.rs

use crate::domain::listing::tests::sample_caregiver;
use crate::domain::listing::ListingStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::store::{Directory, SourceError};
use crate::tests::utils::{body_string, get, init_test_directory};

#[test]
fn home_page_links_to_manager() {
    let directory = init_test_directory();

    let resp = handle(get("/"), &directory).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"href="/admin/listings""#));
}

#[test]
fn listing_page_shows_every_seed_listing() {
    let directory = init_test_directory();

    let resp = handle(get("/admin/listings"), &directory).expect("Handler failed");
    assert_eq!(resp.status(), 200, "Listing page should load");

    let body = body_string(resp);
    assert!(body.contains("Manage Listings"));
    assert!(body.contains("6 listings"));
    for id in 1001..=1006 {
        assert!(body.contains(&format!(r#"id="listing-{id}""#)), "row {id}");
    }
    assert!(body.contains(r#"<span class="pending-count"#));
    assert!(!body.contains(r#"class="modal"#));
}

#[test]
fn pending_filter_keeps_only_pending_rows() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings?status=pending"), &directory).unwrap());

    assert!(body.contains(r#"id="listing-1002""#));
    assert!(body.contains(r#"id="listing-1005""#));
    assert!(!body.contains(r#"id="listing-1001""#));
    assert!(body.contains("2 listings"));
    assert!(body.contains(r#"<option value="pending" selected>"#));
}

#[test]
fn search_matches_names() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings?q=Anna"), &directory).unwrap());

    assert!(body.contains(r#"id="listing-1002""#));
    assert!(body.contains("1 listings"));
    assert!(body.contains(r#"value="Anna""#));
}

#[test]
fn type_filter_without_status_filter() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings?status=all&type=careHome"), &directory).unwrap());

    assert!(body.contains(r#"id="listing-1001""#));
    assert!(body.contains(r#"id="listing-1005""#));
    assert!(!body.contains(r#"id="listing-1002""#));
}

#[test]
fn no_matches_shows_empty_state() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings?q=nobody-here"), &directory).unwrap());

    assert!(body.contains("No listings found"));
    assert!(body.contains("Try adjusting your search or filter criteria."));
    assert!(!body.contains("<table"));
}

#[test]
fn unknown_filter_value_is_bad_request() {
    let directory = init_test_directory();

    let result = handle(get("/admin/listings?type=hotel"), &directory);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn third_page_of_twenty_three() {
    let listings = (1..=23)
        .map(|id| sample_caregiver(id, ListingStatus::Pending))
        .collect();
    let directory = Directory::ready(listings).unwrap();

    let body = body_string(handle(get("/admin/listings?page=3"), &directory).unwrap());

    for id in 21..=23 {
        assert!(body.contains(&format!(r#"id="listing-{id}""#)), "row {id}");
    }
    assert!(!body.contains(r#"id="listing-20""#));
    assert!(body.contains(r#"aria-current="page">3<"#));
    assert!(body.contains(r#"href="/admin/listings?page=2">Previous<"#));
}

#[test]
fn view_modal_shows_listing_details() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings/1002"), &directory).unwrap());

    assert!(body.contains(r#"class="modal"#));
    assert!(body.contains("Description"));
    assert!(body.contains(r#"href="/admin/listings/1002/edit""#));
    assert!(body.contains(">Approve<"));
    assert!(body.contains(">Reject<"));
}

#[test]
fn edit_modal_posts_back_with_filters() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings/1002/edit?status=pending"), &directory).unwrap());

    assert!(body.contains("Edit Listing #1002"));
    assert!(body.contains(r#"action="/admin/listings/1002?status=pending""#));
    assert!(body.contains(r#"name="caregiver.hourlyRate""#));
}

#[test]
fn delete_modal_asks_for_confirmation() {
    let directory = init_test_directory();

    let body = body_string(handle(get("/admin/listings/1004/delete"), &directory).unwrap());

    assert!(body.contains("Are you sure you want to delete"));
    assert!(body.contains(r#"action="/admin/listings/1004/delete""#));
    assert!(body.contains("Cancel"));
}

#[test]
fn modal_for_missing_listing_is_not_found() {
    let directory = init_test_directory();

    let result = handle(get("/admin/listings/9999"), &directory);
    assert!(matches!(result, Err(ServerError::NotFound)));

    let result = handle(get("/admin/listings/abc"), &directory);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn loading_directory_renders_refreshing_placeholder() {
    let directory = Directory::pending();

    let resp = handle(get("/admin/listings/1002"), &directory).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Loading listings…"));
    assert!(body.contains(r#"http-equiv="refresh""#));
    assert!(!body.contains("<table"));
}

#[test]
fn failed_load_is_reported() {
    let directory = Directory::pending();
    directory
        .write(|store| {
            store.finish_load(Err(SourceError::DuplicateId(1001)));
            Ok(())
        })
        .unwrap();

    let body = body_string(handle(get("/admin/listings"), &directory).unwrap());

    assert!(body.contains("Listings could not be loaded"));
    assert!(body.contains("duplicate listing id 1001"));
    assert!(!body.contains(r#"http-equiv="refresh""#));
}

#[test]
fn unknown_route_is_not_found() {
    let directory = init_test_directory();

    let result = handle(get("/admin/users"), &directory);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn oversized_page_number_renders_without_rows() {
    let directory = init_test_directory();

    for page in ["2000000000000000000", "18446744073709551615"] {
        let resp = handle(get(&format!("/admin/listings?page={page}")), &directory)
            .expect("Handler failed");
        assert_eq!(resp.status(), 200);

        let body = body_string(resp);
        assert!(body.contains("6 listings"));
        assert!(!body.contains(r#"id="listing-1001""#));
    }

    let listings = (1..=23)
        .map(|id| sample_caregiver(id, ListingStatus::Pending))
        .collect();
    let directory = Directory::ready(listings).unwrap();

    let body = body_string(handle(get("/admin/listings?page=18446744073709551615"), &directory).unwrap());
    assert!(body.contains("No results on this page"));
    assert!(body.contains(r#"href="/admin/listings?page=3">Previous<"#));
}
