// Read-only, type-specific part of the listing detail dialog.

use crate::domain::listing::{
    CareHomeDetails, CaregiverDetails, ListingDetails, StoreDetails, TransportDetails,
};
use crate::templates::components::badges::tag_list;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}

pub fn detail_fields(details: &ListingDetails) -> Markup {
    let fields = match details {
        ListingDetails::CareHome(d) => care_home(d),
        ListingDetails::Caregiver(d) => caregiver(d),
        ListingDetails::Transport(d) => transport(d),
        ListingDetails::Store(d) => store(d),
    };

    html! {
        div class="mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2" { (fields) }
    }
}

fn field(label: &str, value: Markup) -> Markup {
    html! {
        div {
            h4 class="text-sm font-medium text-gray-500" { (label) }
            p class="mt-1 text-sm text-gray-900" { (value) }
        }
    }
}

fn wide_field(label: &str, value: Markup) -> Markup {
    html! {
        div class="sm:col-span-2" {
            h4 class="text-sm font-medium text-gray-500" { (label) }
            (value)
        }
    }
}

fn yes_no(flag: bool) -> Markup {
    html! { @if flag { "Yes" } @else { "No" } }
}

fn care_home(d: &CareHomeDetails) -> Markup {
    html! {
        (field("Capacity", html! { (d.capacity) " residents" }))
        (field("Monthly Price", html! { (d.monthly_price) " PLN" }))
        (wide_field("Amenities", tag_list(&d.amenities)))
        (field("Medical Support", yes_no(d.medical_support)))
        (field("Accepts Insurance", yes_no(d.accepts_insurance)))
    }
}

fn caregiver(d: &CaregiverDetails) -> Markup {
    html! {
        (field("Experience", html! { (d.experience) " years" }))
        (field("Hourly Rate", html! { (d.hourly_rate) " PLN" }))
        (wide_field("Specializations", tag_list(&d.specializations)))
        (field("Availability", html! { (d.availability) }))
        (field("Can Drive", yes_no(d.can_drive)))
    }
}

fn transport(d: &TransportDetails) -> Markup {
    html! {
        (field("Vehicle Type", html! { (d.vehicle_type) }))
        (field("Service Area", html! { (d.service_area) }))
        (field("Price per km", html! { (d.price_per_km) " PLN" }))
        (field("Operating Hours", html! { (d.operating_hours) }))
        (field("Wheelchair Accessible", yes_no(d.wheelchair_accessible)))
    }
}

fn store(d: &StoreDetails) -> Markup {
    let website = match &d.website_url {
        Some(url) => html! {
            a href=(url) target="_blank" rel="noopener noreferrer" class="text-[#206645] hover:underline" { (url) }
        },
        None => html! { "Not provided" },
    };

    html! {
        (wide_field("Product Categories", tag_list(&d.product_categories)))
        (field("Opening Hours", html! { (d.opening_hours) }))
        (field("Website", website))
        (field("Delivery Available", yes_no(d.delivery_available)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::source::seed_listings;

    #[test]
    fn each_type_renders_its_own_fields() {
        let listings = seed_listings().unwrap();
        let rendered: Vec<String> = listings
            .iter()
            .map(|l| detail_fields(&l.details).into_string())
            .collect();

        assert!(rendered[0].contains("45 residents"));
        assert!(rendered[0].contains("Dining Service"));
        assert!(rendered[1].contains("30-35 PLN"));
        assert!(rendered[1].contains("Medication Management"));
        assert!(rendered[2].contains("Wheelchair Accessible"));
        assert!(rendered[2].contains("2.5 PLN"));
        assert!(rendered[3].contains("https://seniorcomfort.pl"));
        assert!(!rendered[3].contains("residents"));
    }

    #[test]
    fn store_without_website_says_so() {
        let details = ListingDetails::Store(StoreDetails {
            product_categories: vec![],
            opening_hours: "9-17".to_string(),
            website_url: None,
            delivery_available: false,
        });

        let html = detail_fields(&details).into_string();
        assert!(html.contains("Not provided"));
    }

    #[test]
    fn timestamps_are_human_readable() {
        let listings = seed_listings().unwrap();
        assert_eq!(format_timestamp(&listings[0].submitted_at), "May 10, 2023 14:30");
    }
}
