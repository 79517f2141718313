// src/domain/workflow.rs

use crate::domain::listing::ListingStatus;
use crate::domain::query::ListingQuery;
use crate::errors::ServerError;
use std::collections::HashMap;
use url::form_urlencoded;

pub const LISTINGS_PATH: &str = "/admin/listings";

/// The single dialog open over the listings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    View(i64),
    Edit(i64),
    ConfirmDelete(i64),
}

impl Modal {
    pub fn listing_id(self) -> i64 {
        match self {
            Modal::View(id) | Modal::Edit(id) | Modal::ConfirmDelete(id) => id,
        }
    }

    pub fn path(self) -> String {
        match self {
            Modal::View(id) => format!("{LISTINGS_PATH}/{id}"),
            Modal::Edit(id) => format!("{LISTINGS_PATH}/{id}/edit"),
            Modal::ConfirmDelete(id) => format!("{LISTINGS_PATH}/{id}/delete"),
        }
    }
}

/// Confirmation shown after a mutation went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    StatusChanged { id: i64, status: ListingStatus },
    Updated { id: i64 },
    Deleted { id: i64 },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::StatusChanged { id, status } => {
                format!("Listing #{id} has been {}", status.action_name())
            }
            Notice::Updated { id } => format!("Listing #{id} has been updated"),
            Notice::Deleted { id } => format!("Listing #{id} has been deleted"),
        }
    }

    fn append_to(&self, qs: &mut form_urlencoded::Serializer<'_, String>) {
        match self {
            Notice::StatusChanged { id, status } => {
                qs.append_pair("notice", "status")
                    .append_pair("id", &id.to_string())
                    .append_pair("to", status.as_str());
            }
            Notice::Updated { id } => {
                qs.append_pair("notice", "updated").append_pair("id", &id.to_string());
            }
            Notice::Deleted { id } => {
                qs.append_pair("notice", "deleted").append_pair("id", &id.to_string());
            }
        }
    }

    /// Malformed notice parameters are dropped rather than rejected: the
    /// notice is cosmetic.
    fn from_params(params: &HashMap<String, String>) -> Option<Self> {
        let id = params.get("id")?.parse().ok()?;
        match params.get("notice")?.as_str() {
            "status" => {
                let status = params.get("to")?.parse().ok()?;
                Some(Notice::StatusChanged { id, status })
            }
            "updated" => Some(Notice::Updated { id }),
            "deleted" => Some(Notice::Deleted { id }),
            _ => None,
        }
    }
}

/// Everything the Manage Listings screen needs to know about what the user
/// is looking at. At most one modal can be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerState {
    pub query: ListingQuery,
    pub modal: Option<Modal>,
    pub notice: Option<Notice>,
}

impl ManagerState {
    /// Decode the table state from query-string parameters. `all` or an empty
    /// value means no filter; unknown filter values are a bad request.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let mut query = ListingQuery::default();

        if let Some(status) = params.get("status").filter(|v| is_filter(v)) {
            query.status = Some(status.parse()?);
        }
        if let Some(kind) = params.get("type").filter(|v| is_filter(v)) {
            query.kind = Some(kind.parse()?);
        }
        if let Some(search) = params.get("q") {
            query.search = search.clone();
        }
        if let Some(page) = params.get("page").and_then(|p| p.parse().ok()) {
            query.go_to(page);
        }

        Ok(Self {
            query,
            modal: None,
            notice: Notice::from_params(params),
        })
    }

    /// Opening a dialog replaces any other dialog and dismisses the notice.
    pub fn open(&mut self, modal: Modal) {
        self.modal = Some(modal);
        self.notice = None;
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    /// After any mutation: close the dialog, go back to the first page and
    /// report what happened. `None` when the mutation was a no-op.
    pub fn finish_mutation(&mut self, notice: Option<Notice>) {
        self.modal = None;
        self.query.go_to(1);
        self.notice = notice;
    }

    /// Where the browser should be to show this state.
    pub fn href(&self) -> String {
        let path = self
            .modal
            .map(Modal::path)
            .unwrap_or_else(|| LISTINGS_PATH.to_string());

        let mut qs = query_serializer(&self.query);
        if let Some(notice) = &self.notice {
            notice.append_to(&mut qs);
        }
        with_query(path, qs.finish())
    }

    /// Link to the table with `query`, no dialog and no notice.
    pub fn table_href(query: &ListingQuery) -> String {
        with_query(LISTINGS_PATH.to_string(), query_serializer(query).finish())
    }

    /// Link opening `modal` on top of the current table.
    pub fn modal_href(&self, modal: Modal) -> String {
        with_query(modal.path(), query_serializer(&self.query).finish())
    }

    /// Form action for `path` that carries the current filters along, so the
    /// redirect after the mutation lands on the same view.
    pub fn action_href(&self, path: &str) -> String {
        with_query(path.to_string(), query_serializer(&self.query).finish())
    }
}

fn is_filter(value: &str) -> bool {
    !value.is_empty() && value != "all"
}

fn query_serializer(query: &ListingQuery) -> form_urlencoded::Serializer<'static, String> {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    if let Some(status) = query.status {
        qs.append_pair("status", status.as_str());
    }
    if let Some(kind) = query.kind {
        qs.append_pair("type", kind.as_str());
    }
    if !query.search.is_empty() {
        qs.append_pair("q", &query.search);
    }
    if query.page > 1 {
        qs.append_pair("page", &query.page.to_string());
    }
    qs
}

fn with_query(path: String, qs: String) -> String {
    if qs.is_empty() {
        path
    } else {
        format!("{path}?{qs}")
    }
}
