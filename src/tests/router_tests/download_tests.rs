// src/tests/router_tests/download_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_directory};

#[test]
fn export_downloads_spreadsheet() {
    let directory = init_test_directory();

    let resp = handle(get("/admin/listings/export.xlsx?status=pending"), &directory)
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        r#"attachment; filename="listings.xlsx""#
    );
}

#[test]
fn bundled_assets_are_served() {
    let directory = init_test_directory();

    let resp = handle(get("/static/placeholder.svg"), &directory).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/svg+xml");
    assert!(body_string(resp).starts_with("<svg"));

    let resp = handle(get("/static/main.css"), &directory).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let result = handle(get("/static/missing.js"), &directory);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
