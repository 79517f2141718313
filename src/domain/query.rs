// src/domain/query.rs

use crate::domain::listing::{Listing, ListingStatus, ListingType};

/// Rows per page of the listings table.
pub const PAGE_SIZE: usize = 10;

/// Most page numbers shown at once in the pagination control.
pub const PAGE_WINDOW: usize = 5;

/// Filters, search and page of the listings table.
///
/// `None` filters mean "all". Every setter that narrows or widens the result
/// set sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub status: Option<ListingStatus>,
    pub kind: Option<ListingType>,
    pub search: String,
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            status: None,
            kind: None,
            search: String::new(),
            page: 1,
        }
    }
}

/// One page of filtered results.
#[derive(Debug)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a Listing>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl ListingQuery {
    pub fn set_status(&mut self, status: Option<ListingStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_kind(&mut self, kind: Option<ListingType>) {
        self.kind = kind;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        *self = ListingQuery::default();
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Same filters, different page.
    pub fn with_page(&self, page: usize) -> Self {
        let mut query = self.clone();
        query.go_to(page);
        query
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.status.map_or(true, |status| listing.status == status)
            && self.kind.map_or(true, |kind| listing.kind() == kind)
            && self.matches_search(listing)
    }

    /// Case-insensitive substring match on name or contact email, or a
    /// substring match on the id's decimal form.
    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        listing.name.to_lowercase().contains(&needle)
            || listing.contact_email.to_lowercase().contains(&needle)
            || listing.id.to_string().contains(&self.search)
    }

    /// Every listing matching the filters, in collection order.
    pub fn filter<'a>(&'a self, listings: &'a [Listing]) -> impl Iterator<Item = &'a Listing> + 'a {
        listings.iter().filter(move |listing| self.matches(listing))
    }

    pub fn run<'a>(&self, listings: &'a [Listing], page_size: usize) -> ListingPage<'a> {
        let matching: Vec<&Listing> = listings.iter().filter(|l| self.matches(l)).collect();
        let total_count = matching.len();
        let total_pages = total_count.div_ceil(page_size);
        let page = self.page.max(1);

        let items = matching
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        ListingPage {
            items,
            page,
            total_pages,
            total_count,
        }
    }
}

impl ListingPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn previous(&self) -> usize {
        self.page.saturating_sub(1).min(self.total_pages).max(1)
    }

    pub fn next(&self) -> usize {
        self.page.saturating_add(1).min(self.total_pages).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn window(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages)
    }
}

/// Page numbers to show around `current`: all of them when there are few,
/// otherwise a run of [`PAGE_WINDOW`] centred on `current` and clamped to
/// the valid range.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }

    let half = PAGE_WINDOW / 2;
    let start = if current <= half + 1 {
        1
    } else if current.saturating_add(half) >= total {
        total + 1 - PAGE_WINDOW
    } else {
        current - half
    };

    (start..start + PAGE_WINDOW).collect()
}
