// src/tests/router_tests/mutation_tests.rs

use crate::domain::listing::{ListingDetails, ListingStatus};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_directory, location, post_form};

#[test]
fn approving_pending_listing_redirects_with_notice() {
    let directory = init_test_directory();

    let req = post_form("/admin/listings/1002/status?status=pending", "status=approved");
    let resp = handle(req, &directory).expect("Handler failed");

    assert_eq!(resp.status(), 303, "Should redirect after status change");
    let target = location(&resp).to_string();
    assert_eq!(
        target,
        "/admin/listings?status=pending&notice=status&id=1002&to=approved"
    );

    let status = directory
        .read(|store| Ok(store.get(1002).map(|l| l.status)))
        .unwrap();
    assert_eq!(status, Some(ListingStatus::Approved));

    // Following the redirect shows the notice and the shrunken pending list.
    let body = body_string(handle(get(&target), &directory).unwrap());
    assert!(body.contains("Listing #1002 has been approved"));
    assert!(!body.contains(r#"id="listing-1002""#));
    assert!(body.contains(r#"id="listing-1005""#));
    assert!(!body.contains(r#"class="modal"#));
}

#[test]
fn rejected_listing_cannot_be_reopened() {
    let directory = init_test_directory();

    let result = handle(post_form("/admin/listings/1006/status", "status=approved"), &directory);
    let Err(err) = result else {
        panic!("transition out of rejected must fail");
    };
    assert!(matches!(
        err,
        ServerError::InvalidTransition {
            from: ListingStatus::Rejected,
            to: ListingStatus::Approved
        }
    ));
    assert_eq!(error_to_response(err).status(), 409);

    let status = directory
        .read(|store| Ok(store.get(1006).map(|l| l.status)))
        .unwrap();
    assert_eq!(status, Some(ListingStatus::Rejected));
}

#[test]
fn hiding_and_unhiding_round_trip() {
    let directory = init_test_directory();

    handle(post_form("/admin/listings/1001/status", "status=hidden"), &directory).unwrap();
    handle(post_form("/admin/listings/1001/status", "status=approved"), &directory).unwrap();

    let status = directory
        .read(|store| Ok(store.get(1001).map(|l| l.status)))
        .unwrap();
    assert_eq!(status, Some(ListingStatus::Approved));
}

#[test]
fn status_form_without_status_is_bad_request() {
    let directory = init_test_directory();

    let result = handle(post_form("/admin/listings/1002/status", ""), &directory);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn deleting_removes_listing() {
    let directory = init_test_directory();

    let resp = handle(post_form("/admin/listings/1004/delete", ""), &directory).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin/listings?notice=deleted&id=1004");

    let (len, gone) = directory
        .read(|store| Ok((store.len(), store.get(1004).is_none())))
        .unwrap();
    assert_eq!(len, 5);
    assert!(gone);
}

#[test]
fn mutations_on_missing_listing_are_silent() {
    let directory = init_test_directory();

    let resp = handle(post_form("/admin/listings/9999/delete?q=x", ""), &directory).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin/listings?q=x");

    let resp = handle(post_form("/admin/listings/9999/status", "status=approved"), &directory).unwrap();
    assert_eq!(location(&resp), "/admin/listings");

    let resp = handle(post_form("/admin/listings/9999", "name=Ghost"), &directory).unwrap();
    assert_eq!(location(&resp), "/admin/listings");

    let len = directory.read(|store| Ok(store.len())).unwrap();
    assert_eq!(len, 6);
}

#[test]
fn edit_submission_updates_fields_and_timestamp() {
    let directory = init_test_directory();
    let before = directory
        .read(|store| Ok(store.get(1002).map(|l| l.last_updated)))
        .unwrap()
        .unwrap();

    let form = "name=Anna+Nowak&status=pending&city=Warszawa\
                &caregiver.hourlyRate=55&caregiver.specializations=Dementia%2C+Mobility\
                &caregiver.canDrive=on&careHome.capacity=99";
    let resp = handle(post_form("/admin/listings/1002?type=caregiver", form), &directory).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        location(&resp),
        "/admin/listings?type=caregiver&notice=updated&id=1002"
    );

    let listing = directory
        .read(|store| Ok(store.get(1002).cloned()))
        .unwrap()
        .unwrap();
    assert_eq!(listing.name, "Anna Nowak");
    assert_eq!(listing.city, "Warszawa");
    assert_eq!(listing.status, ListingStatus::Pending);
    assert!(listing.last_updated > before);

    let ListingDetails::Caregiver(details) = &listing.details else {
        panic!("listing type must not change");
    };
    assert_eq!(details.hourly_rate, "55");
    assert_eq!(details.specializations, vec!["Dementia", "Mobility"]);
    assert!(details.can_drive);
}

#[test]
fn edit_with_illegal_status_changes_nothing() {
    let directory = init_test_directory();

    let result = handle(
        post_form("/admin/listings/1006", "name=Renamed&status=approved"),
        &directory,
    );
    assert!(matches!(result, Err(ServerError::InvalidTransition { .. })));

    let name = directory
        .read(|store| Ok(store.get(1006).map(|l| l.name.clone())))
        .unwrap();
    assert_eq!(name.as_deref(), Some("Marek Nowak"));
}

#[test]
fn transport_edit_clears_unticked_flag() {
    let directory = init_test_directory();

    let form = "name=MediTransport+Senior&status=approved&transport.pricePerKm=3.0\
                &transport.operatingHours=Mon-Sat%3A+6-22";
    let resp = handle(post_form("/admin/listings/1003", form), &directory).unwrap();
    assert_eq!(location(&resp), "/admin/listings?notice=updated&id=1003");

    let listing = directory
        .read(|store| Ok(store.get(1003).cloned()))
        .unwrap()
        .unwrap();
    let ListingDetails::Transport(details) = &listing.details else {
        panic!("listing type must not change");
    };
    assert_eq!(details.price_per_km, "3.0");
    assert_eq!(details.operating_hours, "Mon-Sat: 6-22");
    assert_eq!(details.vehicle_type, "Van, Ambulance");
    assert!(!details.wheelchair_accessible);
}

#[test]
fn store_edit_splits_categories_and_clears_website() {
    let directory = init_test_directory();

    let form = "status=hidden&store.productCategories=Walkers%2C+Canes+%2C%2CWheelchairs\
                &store.websiteUrl=&store.deliveryAvailable=on";
    let resp = handle(post_form("/admin/listings/1004", form), &directory).unwrap();
    assert_eq!(resp.status(), 303);

    let listing = directory
        .read(|store| Ok(store.get(1004).cloned()))
        .unwrap()
        .unwrap();
    let ListingDetails::Store(details) = &listing.details else {
        panic!("listing type must not change");
    };
    assert_eq!(details.product_categories, vec!["Walkers", "Canes", "Wheelchairs"]);
    assert_eq!(details.website_url, None);
    assert!(details.delivery_available);
    assert_eq!(details.opening_hours, "Mon-Fri: 9-17, Sat: 10-14");
    assert_eq!(listing.status, ListingStatus::Hidden);
}
