use crate::domain::listing::ListingStatus;
use crate::domain::workflow::{ManagerState, Modal, Notice};
use crate::domain::ListingPatch;
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, see_other, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::store::Directory;
use crate::templates;
use crate::templates::pages::ManageListingsVm;
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(req: Request, directory: &Directory) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let params = parse_query(&req);

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(templates::pages::home_page()),
        ("GET", ["static", name]) => asset_response(name),

        ("GET", ["admin", "listings"]) => manage_listings(directory, &params, None),
        ("GET", ["admin", "listings", "export.xlsx"]) => export_listings(directory, &params),
        ("GET", ["admin", "listings", id]) => {
            manage_listings(directory, &params, Some(Modal::View(parse_id(id)?)))
        }
        ("GET", ["admin", "listings", id, "edit"]) => {
            manage_listings(directory, &params, Some(Modal::Edit(parse_id(id)?)))
        }
        ("GET", ["admin", "listings", id, "delete"]) => {
            manage_listings(directory, &params, Some(Modal::ConfirmDelete(parse_id(id)?)))
        }

        ("POST", ["admin", "listings", id]) => {
            let id = parse_id(id)?;
            let form = parse_form(req)?;
            edit_listing(directory, &params, id, form)
        }
        ("POST", ["admin", "listings", id, "status"]) => {
            let id = parse_id(id)?;
            let form = parse_form(req)?;
            change_status(directory, &params, id, &form)
        }
        ("POST", ["admin", "listings", id, "delete"]) => {
            delete_listing(directory, &params, parse_id(id)?)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn manage_listings(
    directory: &Directory,
    params: &HashMap<String, String>,
    modal: Option<Modal>,
) -> ResultResp {
    let mut state = ManagerState::from_params(params)?;
    if let Some(modal) = modal {
        state.open(modal);
    }

    let markup = directory.read(|store| {
        if let Some(modal) = state.modal {
            // While loading nothing can be found yet; the page refreshes.
            if !store.is_loading() && store.get(modal.listing_id()).is_none() {
                return Err(ServerError::NotFound);
            }
        }

        let vm = ManageListingsVm::new(store, &state);
        Ok(templates::pages::manage_listings_page(&vm))
    })?;

    html_response(markup)
}

fn export_listings(directory: &Directory, params: &HashMap<String, String>) -> ResultResp {
    let state = ManagerState::from_params(params)?;

    directory.read(|store| {
        let rows: Vec<_> = state.query.filter(store.listings()).collect();
        tracing::info!(rows = rows.len(), "exporting listings");
        export_listings_xlsx(&rows, "listings.xlsx")
    })
}

fn change_status(
    directory: &Directory,
    params: &HashMap<String, String>,
    id: i64,
    form: &HashMap<String, String>,
) -> ResultResp {
    let mut state = ManagerState::from_params(params)?;
    let status: ListingStatus = form
        .get("status")
        .ok_or_else(|| ServerError::BadRequest("missing status".into()))?
        .parse()?;

    let applied = directory.write(|store| store.update_status(id, status, Utc::now()))?;

    state.finish_mutation(applied.then_some(Notice::StatusChanged { id, status }));
    see_other(&state.href())
}

fn edit_listing(
    directory: &Directory,
    params: &HashMap<String, String>,
    id: i64,
    form: Vec<(String, String)>,
) -> ResultResp {
    let mut state = ManagerState::from_params(params)?;

    let applied = directory.write(|store| {
        let Some(kind) = store.get(id).map(|l| l.kind()) else {
            return Ok(false);
        };
        let patch = ListingPatch::from_form(kind, form)?;
        store.update_fields(id, patch, Utc::now())
    })?;

    state.finish_mutation(applied.then_some(Notice::Updated { id }));
    see_other(&state.href())
}

fn delete_listing(directory: &Directory, params: &HashMap<String, String>, id: i64) -> ResultResp {
    let mut state = ManagerState::from_params(params)?;

    let applied = directory.write(|store| Ok(store.delete(id)))?;

    state.finish_mutation(applied.then_some(Notice::Deleted { id }));
    see_other(&state.href())
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid listing id: {raw}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Decode an `application/x-www-form-urlencoded` body, keeping field order.
fn parse_form<C>(req: Request) -> Result<C, ServerError>
where
    C: FromIterator<(String, String)>,
{
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
