use crate::domain::query::{ListingPage, ListingQuery};
use crate::domain::workflow::ManagerState;
use maud::{html, Markup};

pub fn pagination(page: &ListingPage<'_>, query: &ListingQuery) -> Markup {
    let first_shown = (page.page - 1)
        .saturating_mul(crate::domain::query::PAGE_SIZE)
        .saturating_add(1);
    let last_shown = first_shown.saturating_add(page.items.len().saturating_sub(1));

    html! {
        nav class="pagination bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200" aria-label="Pagination" {
            p class="text-sm text-gray-700" {
                @if page.items.is_empty() {
                    "No results on this page"
                } @else {
                    "Showing " strong { (first_shown) } " to " strong { (last_shown) }
                    " of " strong { (page.total_count) } " results"
                }
            }

            div class="inline-flex -space-x-px" {
                (step_link("Previous", page.previous(), page.has_previous(), query))

                @for n in page.window() {
                    @if n == page.page {
                        span class="page current px-4 py-2 border bg-[#206645] text-white" aria-current="page" { (n) }
                    } @else {
                        a class="page px-4 py-2 border bg-white text-gray-500" href=(ManagerState::table_href(&query.with_page(n))) { (n) }
                    }
                }

                (step_link("Next", page.next(), page.has_next(), query))
            }
        }
    }
}

fn step_link(label: &str, target: usize, enabled: bool, query: &ListingQuery) -> Markup {
    html! {
        @if enabled {
            a class="px-2 py-2 border bg-white text-gray-500" href=(ManagerState::table_href(&query.with_page(target))) { (label) }
        } @else {
            span class="px-2 py-2 border bg-white text-gray-300 cursor-not-allowed" aria-disabled="true" { (label) }
        }
    }
}
