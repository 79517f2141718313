// templates/pages/home.rs

use crate::domain::listing::ListingType;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

fn blurb(kind: ListingType) -> &'static str {
    match kind {
        ListingType::CareHome => "Residential homes with round-the-clock care and medical support.",
        ListingType::Caregiver => "Experienced carers for help at home, by the hour or for longer stays.",
        ListingType::Transport => "Accessible transport to appointments, shops and family visits.",
        ListingType::Store => "Mobility aids, medical equipment and everyday living products.",
    }
}

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="max-w-7xl mx-auto py-10 px-4" {
                h1 class="text-3xl font-bold text-gray-900" { "Find care and services for seniors" }
                p class="mt-4 text-gray-600" {
                    "A directory of care homes, caregivers, transport providers and stores, "
                    "reviewed before they are published."
                }

                div class="mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4" {
                    @for kind in ListingType::ALL {
                        (card(kind.label(), html! { p class="text-sm text-gray-600" { (blurb(kind)) } }))
                    }
                }

                p class="mt-10" {
                    a href="/admin/listings" class="text-[#206645] font-medium hover:underline" { "Manage listings →" }
                }
            }
        },
    )
}
