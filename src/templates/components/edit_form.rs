// Edit dialog form. Payload inputs use dotted names (`careHome.capacity`)
// which `ListingPatch::from_form` maps back onto the payload.

use crate::domain::listing::{
    CareHomeDetails, CaregiverDetails, Listing, ListingDetails, StoreDetails, TransportDetails,
};
use maud::{html, Markup};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm";

pub fn edit_form(listing: &Listing, action: &str, cancel_href: &str) -> Markup {
    html! {
        form method="post" action=(action) class="space-y-6" {
            div {
                h3 class="text-lg font-medium text-gray-900" { "Basic Information" }
                div class="mt-4 grid grid-cols-1 gap-y-6 gap-x-4 sm:grid-cols-2" {
                    (text_input("name", "Name / Business Name", &listing.name))
                    (text_input("contactEmail", "Email", &listing.contact_email))
                    (text_input("contactPhone", "Phone", &listing.contact_phone))
                    (text_input("address", "Address", &listing.address))
                    (text_input("city", "City", &listing.city))

                    div {
                        label for="status" class="block text-sm font-medium text-gray-700" { "Status" }
                        select id="status" name="status" class=(INPUT_CLASS) {
                            option value=(listing.status.as_str()) selected { (listing.status.label()) }
                            @for next in listing.status.successors() {
                                option value=(next.as_str()) { (next.label()) }
                            }
                        }
                    }
                }
            }

            div {
                label for="description" class="block text-sm font-medium text-gray-700" { "Description" }
                textarea id="description" name="description" rows="4" class=(INPUT_CLASS) { (listing.description) }
            }

            (type_fields(&listing.details))

            div class="flex flex-row-reverse gap-3" {
                button type="submit" class="rounded-md px-4 py-2 bg-[#206645] text-white" { "Save Changes" }
                a href=(cancel_href) class="rounded-md px-4 py-2 border border-gray-300 text-gray-700" { "Cancel" }
            }
        }
    }
}

fn type_fields(details: &ListingDetails) -> Markup {
    match details {
        ListingDetails::CareHome(d) => care_home(d),
        ListingDetails::Caregiver(d) => caregiver(d),
        ListingDetails::Transport(d) => transport(d),
        ListingDetails::Store(d) => store(d),
    }
}

fn section(title: &str, fields: Markup) -> Markup {
    html! {
        div {
            h3 class="text-lg font-medium text-gray-900" { (title) }
            div class="mt-4 grid grid-cols-1 gap-y-6 gap-x-4 sm:grid-cols-2" { (fields) }
        }
    }
}

fn text_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700" { (label) }
            input type="text" id=(name) name=(name) value=(value) class=(INPUT_CLASS);
        }
    }
}

fn list_input(name: &str, label: &str, values: &[String]) -> Markup {
    text_input(name, &format!("{label} (comma separated)"), &values.join(", "))
}

fn checkbox(name: &str, label: &str, checked: bool) -> Markup {
    html! {
        div class="sm:col-span-2 flex items-center" {
            input type="checkbox" id=(name) name=(name) checked[checked] class="h-4 w-4 rounded border-gray-300";
            label for=(name) class="ml-2 block text-sm text-gray-700" { (label) }
        }
    }
}

fn care_home(d: &CareHomeDetails) -> Markup {
    section(
        "Care Home Details",
        html! {
            (text_input("careHome.capacity", "Capacity", &d.capacity))
            (text_input("careHome.monthlyPrice", "Monthly Price", &d.monthly_price))
            (list_input("careHome.amenities", "Amenities", &d.amenities))
            (checkbox("careHome.medicalSupport", "24/7 Medical Support", d.medical_support))
            (checkbox("careHome.acceptsInsurance", "Accepts Insurance", d.accepts_insurance))
        },
    )
}

fn caregiver(d: &CaregiverDetails) -> Markup {
    section(
        "Caregiver Details",
        html! {
            (text_input("caregiver.experience", "Experience (years)", &d.experience))
            (text_input("caregiver.hourlyRate", "Hourly Rate", &d.hourly_rate))
            (text_input("caregiver.availability", "Availability", &d.availability))
            (list_input("caregiver.specializations", "Specializations", &d.specializations))
            (checkbox("caregiver.canDrive", "Can Drive", d.can_drive))
        },
    )
}

fn transport(d: &TransportDetails) -> Markup {
    section(
        "Transport Details",
        html! {
            (text_input("transport.vehicleType", "Vehicle Type", &d.vehicle_type))
            (text_input("transport.serviceArea", "Service Area", &d.service_area))
            (text_input("transport.pricePerKm", "Price per km", &d.price_per_km))
            (text_input("transport.operatingHours", "Operating Hours", &d.operating_hours))
            (checkbox("transport.wheelchairAccessible", "Wheelchair Accessible", d.wheelchair_accessible))
        },
    )
}

fn store(d: &StoreDetails) -> Markup {
    section(
        "Store Details",
        html! {
            (list_input("store.productCategories", "Product Categories", &d.product_categories))
            (text_input("store.openingHours", "Opening Hours", &d.opening_hours))
            (text_input("store.websiteUrl", "Website", d.website_url.as_deref().unwrap_or("")))
            (checkbox("store.deliveryAvailable", "Delivery Available", d.delivery_available))
        },
    )
}
