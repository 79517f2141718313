use crate::domain::listing::{Listing, ListingStatus, ListingType};
use crate::domain::query::{ListingPage, PAGE_SIZE};
use crate::domain::workflow::{ManagerState, Modal, LISTINGS_PATH};
use crate::store::{ListingStore, LoadState};
use crate::templates::components::{
    detail_fields, edit_form, format_timestamp, pagination, status_badge, type_badge,
};
use crate::templates::{desktop_layout, refreshing_layout};
use maud::{html, Markup};

const TITLE: &str = "Manage Listings";

pub struct ManageListingsVm<'a> {
    pub state: &'a ManagerState,
    pub load: &'a LoadState,
    pub page: ListingPage<'a>,
    /// Pending listings in the whole collection, regardless of filters.
    pub pending_count: usize,
    /// The listing the open modal is about, if any.
    pub selected: Option<&'a Listing>,
}

impl<'a> ManageListingsVm<'a> {
    pub fn new(store: &'a ListingStore, state: &'a ManagerState) -> Self {
        Self {
            state,
            load: store.state(),
            page: state.query.run(store.listings(), PAGE_SIZE),
            pending_count: store.pending_count(),
            selected: state.modal.and_then(|m| store.get(m.listing_id())),
        }
    }
}

pub fn manage_listings_page(vm: &ManageListingsVm) -> Markup {
    let content = html! {
        (page_header(vm))
        main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8" {
            @if let Some(notice) = &vm.state.notice {
                div class="notice mb-6 rounded-md bg-green-50 p-4 text-sm text-green-800" role="status" {
                    (notice.message())
                }
            }
            (filters(vm))
            div class="bg-white shadow rounded-lg overflow-hidden" {
                (listing_table(vm))
            }
        }
        (modal(vm))
    };

    match vm.load {
        LoadState::Pending => refreshing_layout(TITLE, 1, content),
        LoadState::Ready | LoadState::Failed(_) => desktop_layout(TITLE, content),
    }
}

fn page_header(vm: &ManageListingsVm) -> Markup {
    let query = &vm.state.query;

    html! {
        header class="bg-white shadow" {
            div class="max-w-7xl mx-auto py-6 px-4 flex justify-between items-center" {
                h1 class="text-2xl font-bold text-gray-900" { (TITLE) }
                div class="flex items-center space-x-4" {
                    span class="listing-count text-sm text-gray-500" { (vm.page.total_count) " listings" }
                    form method="get" action=(LISTINGS_PATH) {
                        @if let Some(status) = query.status {
                            input type="hidden" name="status" value=(status.as_str());
                        }
                        @if let Some(kind) = query.kind {
                            input type="hidden" name="type" value=(kind.as_str());
                        }
                        input type="search" name="q" value=(query.search) placeholder="Search listings..."
                            class="pl-3 pr-3 py-2 border border-gray-300 rounded-md sm:text-sm";
                    }
                }
            }
        }
    }
}

fn filters(vm: &ManageListingsVm) -> Markup {
    let query = &vm.state.query;
    let mut pending_query = query.clone();
    pending_query.set_status(Some(ListingStatus::Pending));

    html! {
        div class="bg-white shadow rounded-lg mb-6 px-4 py-5 sm:p-6" {
            div class="flex flex-col sm:flex-row sm:items-end sm:justify-between gap-4" {
                form method="get" action=(LISTINGS_PATH) class="flex flex-col sm:flex-row sm:items-end gap-4" {
                    div {
                        label for="status-filter" class="block text-sm font-medium text-gray-700 mb-1" { "Status" }
                        select id="status-filter" name="status" onchange="this.form.submit()" {
                            option value="all" selected[query.status.is_none()] { "All Statuses" }
                            @for status in ListingStatus::ALL {
                                option value=(status.as_str()) selected[query.status == Some(status)] { (status.label()) }
                            }
                        }
                    }
                    div {
                        label for="type-filter" class="block text-sm font-medium text-gray-700 mb-1" { "Type" }
                        select id="type-filter" name="type" onchange="this.form.submit()" {
                            option value="all" selected[query.kind.is_none()] { "All Types" }
                            @for kind in ListingType::ALL {
                                option value=(kind.as_str()) selected[query.kind == Some(kind)] { (kind.label()) }
                            }
                        }
                    }
                    @if !query.search.is_empty() {
                        input type="hidden" name="q" value=(query.search);
                    }
                    button type="submit" class="px-3 py-2 border border-gray-300 rounded-md text-sm" { "Apply" }
                }

                div class="flex items-center space-x-2" {
                    a href=(LISTINGS_PATH) class="px-3 py-2 border border-gray-300 rounded-md text-sm text-gray-700" {
                        "Clear Filters"
                    }
                    a href=(ManagerState::table_href(&pending_query)) class="px-3 py-2 rounded-md text-sm text-white bg-[#206645]" {
                        "View Pending"
                        span class="pending-count ml-2 px-2.5 py-0.5 rounded-full text-xs bg-white text-[#206645]" { (vm.pending_count) }
                    }
                }
            }
        }
    }
}

fn listing_table(vm: &ManageListingsVm) -> Markup {
    match vm.load {
        LoadState::Pending => html! {
            div class="loading flex justify-center items-center h-64 text-gray-500" { "Loading listings…" }
        },
        LoadState::Failed(reason) => html! {
            div class="px-4 py-5 sm:p-6 text-center" {
                h3 class="text-sm font-medium text-red-700" { "Listings could not be loaded" }
                p class="mt-1 text-sm text-gray-500" { (reason) }
            }
        },
        LoadState::Ready if vm.page.is_empty() => html! {
            div class="px-4 py-5 sm:p-6 text-center" {
                h3 class="mt-2 text-sm font-medium text-gray-900" { "No listings found" }
                p class="mt-1 text-sm text-gray-500" { "Try adjusting your search or filter criteria." }
            }
        },
        LoadState::Ready => html! {
            div class="overflow-x-auto" {
                table class="min-w-full divide-y divide-gray-200" {
                    thead class="bg-gray-50" {
                        tr {
                            @for heading in ["ID", "Name", "Type", "Status", "Submitted", "Last Updated"] {
                                th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { (heading) }
                            }
                            th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider" { "Actions" }
                        }
                    }
                    tbody class="bg-white divide-y divide-gray-200" {
                        @for listing in &vm.page.items {
                            (listing_row(vm.state, listing))
                        }
                    }
                }
            }
            @if vm.page.total_pages > 1 {
                (pagination(&vm.page, &vm.state.query))
            }
        },
    }
}

fn listing_row(state: &ManagerState, listing: &Listing) -> Markup {
    html! {
        tr id=(format!("listing-{}", listing.id)) class="hover:bg-gray-50" {
            td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900" { "#" (listing.id) }
            td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500" {
                div class="flex items-center" {
                    img class="h-10 w-10 rounded-full object-cover" src=(listing.primary_photo()) alt="" height="40" width="40";
                    div class="ml-4" {
                        div class="text-sm font-medium text-gray-900" { (listing.name) }
                        div class="text-sm text-gray-500" { (listing.contact_email) }
                    }
                }
            }
            td class="px-6 py-4 whitespace-nowrap" { (type_badge(listing.kind())) }
            td class="px-6 py-4 whitespace-nowrap" { (status_badge(listing.status)) }
            td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500" { (format_timestamp(&listing.submitted_at)) }
            td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500" { (format_timestamp(&listing.last_updated)) }
            td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium" {
                div class="flex justify-end space-x-2" {
                    a href=(state.modal_href(Modal::View(listing.id))) title="View" { "View" }
                    a href=(state.modal_href(Modal::Edit(listing.id))) title="Edit" { "Edit" }
                    (status_actions(state, listing))
                    a href=(state.modal_href(Modal::ConfirmDelete(listing.id))) title="Delete" class="text-red-600" { "Delete" }
                }
            }
        }
    }
}

/// One button per status the listing may move to next.
fn status_actions(state: &ManagerState, listing: &Listing) -> Markup {
    let action = state.action_href(&format!("{LISTINGS_PATH}/{}/status", listing.id));

    html! {
        @for (next, label) in listing.status.actions() {
            form method="post" action=(action) class="inline" {
                input type="hidden" name="status" value=(next.as_str());
                button type="submit" class=(format!("status-action to-{}", next.as_str())) {
                    (label)
                }
            }
        }
    }
}

fn modal(vm: &ManageListingsVm) -> Markup {
    let (Some(modal), Some(listing)) = (vm.state.modal, vm.selected) else {
        return html! {};
    };
    let close_href = ManagerState::table_href(&vm.state.query);

    let body = match modal {
        Modal::View(_) => view_modal(vm.state, listing, &close_href),
        Modal::Edit(_) => html! {
            h3 class="text-lg font-medium text-gray-900 mb-4" { "Edit Listing #" (listing.id) }
            (edit_form(
                listing,
                &vm.state.action_href(&format!("{LISTINGS_PATH}/{}", listing.id)),
                &close_href,
            ))
        },
        Modal::ConfirmDelete(_) => delete_modal(vm.state, listing, &close_href),
    };

    html! {
        div class="modal fixed inset-0 z-10 overflow-y-auto" role="dialog" aria-modal="true" {
            a href=(close_href) class="fixed inset-0 bg-gray-500 opacity-75" aria-label="Close" {}
            div class="relative mx-auto my-8 max-w-lg bg-white rounded-lg shadow-xl p-6" {
                (body)
            }
        }
    }
}

fn view_modal(state: &ManagerState, listing: &Listing, close_href: &str) -> Markup {
    html! {
        div class="flex justify-between items-start" {
            h3 class="text-lg font-medium text-gray-900" { (listing.name) }
            div class="flex items-center gap-2" {
                (type_badge(listing.kind()))
                (status_badge(listing.status))
            }
        }

        img class="mt-4 w-full h-48 object-cover rounded" src=(listing.primary_photo()) alt=(listing.name);

        div class="mt-2 text-xs text-gray-500" {
            span { "Submitted: " (format_timestamp(&listing.submitted_at)) }
            " · "
            span { "Last updated: " (format_timestamp(&listing.last_updated)) }
        }

        div class="mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2" {
            div { h4 class="text-sm font-medium text-gray-500" { "Email" } p class="mt-1 text-sm" { (listing.contact_email) } }
            div { h4 class="text-sm font-medium text-gray-500" { "Phone" } p class="mt-1 text-sm" { (listing.contact_phone) } }
            div class="sm:col-span-2" {
                h4 class="text-sm font-medium text-gray-500" { "Address" }
                p class="mt-1 text-sm" { (listing.address) ", " (listing.city) }
            }
        }

        div class="mt-4" {
            h4 class="text-sm font-medium text-gray-500" { "Description" }
            p class="mt-1 text-sm text-gray-900" { (listing.description) }
        }

        (detail_fields(&listing.details))

        div class="mt-6 flex flex-row-reverse gap-3" {
            (status_actions(state, listing))
            a href=(state.modal_href(Modal::Edit(listing.id))) class="rounded-md px-4 py-2 border border-gray-300" { "Edit" }
            a href=(close_href) class="rounded-md px-4 py-2 border border-gray-300" { "Close" }
        }
    }
}

fn delete_modal(state: &ManagerState, listing: &Listing, close_href: &str) -> Markup {
    let action = state.action_href(&format!("{LISTINGS_PATH}/{}/delete", listing.id));

    html! {
        h3 class="text-lg font-medium text-gray-900" { "Delete Listing" }
        p class="mt-2 text-sm text-gray-500" {
            "Are you sure you want to delete " strong { (listing.name) } "? "
            "This action cannot be undone."
        }
        div class="mt-6 flex flex-row-reverse gap-3" {
            form method="post" action=(action) {
                button type="submit" class="rounded-md px-4 py-2 bg-red-600 text-white" { "Delete" }
            }
            a href=(close_href) class="rounded-md px-4 py-2 border border-gray-300" { "Cancel" }
        }
    }
}
