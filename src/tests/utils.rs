use crate::store::source::seed_listings;
use crate::store::Directory;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// A directory already holding the bundled listings.
pub fn init_test_directory() -> Directory {
    Directory::ready(seed_listings().expect("seed data parses"))
        .unwrap_or_else(|e| panic!("Directory initialization failed: {e}"))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
}
