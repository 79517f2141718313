// responses/asset.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Files bundled into the binary and served under `/static/`.
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "placeholder.svg",
        "image/svg+xml",
        include_str!("../../static/placeholder.svg"),
    ),
    (
        "main.css",
        "text/css; charset=utf-8",
        include_str!("../../static/main.css"),
    ),
];

pub fn asset_response(name: &str) -> ResultResp {
    let (_, content_type, body) = ASSETS
        .iter()
        .find(|(asset, _, _)| *asset == name)
        .ok_or(ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", *content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(*body))
        .map_err(|_| ServerError::InternalError)
}
