use crate::domain::listing::{ListingStatus, ListingType};
use maud::{html, Markup};

pub fn status_badge(status: ListingStatus) -> Markup {
    let style = match status {
        ListingStatus::Pending => "bg-yellow-100 text-yellow-800",
        ListingStatus::Approved => "bg-green-100 text-green-800",
        ListingStatus::Hidden => "bg-gray-100 text-gray-800",
        ListingStatus::Rejected => "bg-red-100 text-red-800",
    };

    html! {
        span class=(format!("badge status-{} inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {style}", status.as_str())) {
            (status.label())
        }
    }
}

pub fn type_badge(kind: ListingType) -> Markup {
    let style = match kind {
        ListingType::CareHome => "bg-blue-100 text-blue-800",
        ListingType::Caregiver => "bg-purple-100 text-purple-800",
        ListingType::Transport => "bg-amber-100 text-amber-800",
        ListingType::Store => "bg-emerald-100 text-emerald-800",
    };

    html! {
        span class=(format!("badge inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {style}")) {
            (kind.label())
        }
    }
}

/// Small grey chips for list-valued fields (amenities, specializations, ...).
pub fn tag_list(items: &[String]) -> Markup {
    html! {
        div class="mt-1 flex flex-wrap gap-1" {
            @for item in items {
                span class="inline-flex items-center px-2 py-0.5 rounded text-xs font-medium bg-gray-100 text-gray-800" { (item) }
            }
        }
    }
}
