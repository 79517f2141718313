// src/domain/patch.rs

use crate::domain::listing::{
    CareHomeDetails, CaregiverDetails, Listing, ListingDetails, ListingStatus, ListingType,
    StoreDetails, TransportDetails,
};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};

/// A partial update to a listing. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub status: Option<ListingStatus>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub details: Option<DetailsPatch>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsPatch {
    CareHome(CareHomePatch),
    Caregiver(CaregiverPatch),
    Transport(TransportPatch),
    Store(StorePatch),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareHomePatch {
    pub capacity: Option<String>,
    pub monthly_price: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub medical_support: Option<bool>,
    pub accepts_insurance: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaregiverPatch {
    pub experience: Option<String>,
    pub hourly_rate: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub availability: Option<String>,
    pub can_drive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportPatch {
    pub vehicle_type: Option<String>,
    pub service_area: Option<String>,
    pub price_per_km: Option<String>,
    pub operating_hours: Option<String>,
    pub wheelchair_accessible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorePatch {
    pub product_categories: Option<Vec<String>>,
    pub opening_hours: Option<String>,
    /// `Some(None)` clears the website.
    pub website_url: Option<Option<String>>,
    pub delivery_available: Option<bool>,
}

// Copies every `Some` field of the patch onto the target.
macro_rules! merge_fields {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

impl CareHomePatch {
    fn merge_into(self, target: &mut CareHomeDetails) {
        merge_fields!(target, self, capacity, monthly_price, amenities, medical_support, accepts_insurance);
    }
}

impl CaregiverPatch {
    fn merge_into(self, target: &mut CaregiverDetails) {
        merge_fields!(target, self, experience, hourly_rate, specializations, availability, can_drive);
    }
}

impl TransportPatch {
    fn merge_into(self, target: &mut TransportDetails) {
        merge_fields!(
            target,
            self,
            vehicle_type,
            service_area,
            price_per_km,
            operating_hours,
            wheelchair_accessible,
        );
    }
}

impl StorePatch {
    fn merge_into(self, target: &mut StoreDetails) {
        merge_fields!(target, self, product_categories, opening_hours, website_url, delivery_available);
    }
}

impl DetailsPatch {
    pub fn kind(&self) -> ListingType {
        match self {
            DetailsPatch::CareHome(_) => ListingType::CareHome,
            DetailsPatch::Caregiver(_) => ListingType::Caregiver,
            DetailsPatch::Transport(_) => ListingType::Transport,
            DetailsPatch::Store(_) => ListingType::Store,
        }
    }

    /// The patch an HTML form submits when none of the listing's checkboxes
    /// are ticked: unchecked boxes are simply absent from the body.
    fn unchecked(kind: ListingType) -> Self {
        match kind {
            ListingType::CareHome => DetailsPatch::CareHome(CareHomePatch {
                medical_support: Some(false),
                accepts_insurance: Some(false),
                ..Default::default()
            }),
            ListingType::Caregiver => DetailsPatch::Caregiver(CaregiverPatch {
                can_drive: Some(false),
                ..Default::default()
            }),
            ListingType::Transport => DetailsPatch::Transport(TransportPatch {
                wheelchair_accessible: Some(false),
                ..Default::default()
            }),
            ListingType::Store => DetailsPatch::Store(StorePatch {
                delivery_available: Some(false),
                ..Default::default()
            }),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match self {
            DetailsPatch::CareHome(p) => match field {
                "capacity" => p.capacity = Some(value),
                "monthlyPrice" => p.monthly_price = Some(value),
                "amenities" => p.amenities = Some(split_list(&value)),
                "medicalSupport" => p.medical_support = Some(parse_flag(&value)),
                "acceptsInsurance" => p.accepts_insurance = Some(parse_flag(&value)),
                _ => ignore_field("careHome", field),
            },
            DetailsPatch::Caregiver(p) => match field {
                "experience" => p.experience = Some(value),
                "hourlyRate" => p.hourly_rate = Some(value),
                "specializations" => p.specializations = Some(split_list(&value)),
                "availability" => p.availability = Some(value),
                "canDrive" => p.can_drive = Some(parse_flag(&value)),
                _ => ignore_field("caregiver", field),
            },
            DetailsPatch::Transport(p) => match field {
                "vehicleType" => p.vehicle_type = Some(value),
                "serviceArea" => p.service_area = Some(value),
                "pricePerKm" => p.price_per_km = Some(value),
                "operatingHours" => p.operating_hours = Some(value),
                "wheelchairAccessible" => p.wheelchair_accessible = Some(parse_flag(&value)),
                _ => ignore_field("transport", field),
            },
            DetailsPatch::Store(p) => match field {
                "productCategories" => p.product_categories = Some(split_list(&value)),
                "openingHours" => p.opening_hours = Some(value),
                "websiteUrl" => {
                    let url = value.trim();
                    p.website_url = Some((!url.is_empty()).then(|| url.to_string()));
                }
                "deliveryAvailable" => p.delivery_available = Some(parse_flag(&value)),
                _ => ignore_field("store", field),
            },
        }
    }
}

impl ListingPatch {
    /// Build a patch from an edit-form submission for a listing of `kind`.
    ///
    /// Payload inputs are named with dotted paths (`careHome.capacity`). Paths
    /// addressing another type's payload are ignored, as are `id` and `type`.
    pub fn from_form<I>(kind: ListingType, fields: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut patch = ListingPatch::default();
        let mut details = DetailsPatch::unchecked(kind);

        for (name, value) in fields {
            match name.split_once('.') {
                Some((parent, child)) if parent == kind.as_str() => details.set(child, value),
                Some((parent, child)) => ignore_field(parent, child),
                None => match name.as_str() {
                    "name" => patch.name = Some(value),
                    "status" => patch.status = Some(value.parse()?),
                    "contactEmail" => patch.contact_email = Some(value),
                    "contactPhone" => patch.contact_phone = Some(value),
                    "address" => patch.address = Some(value),
                    "city" => patch.city = Some(value),
                    "description" => patch.description = Some(value),
                    _ => ignore_field("listing", &name),
                },
            }
        }

        patch.details = Some(details);
        Ok(patch)
    }

    /// Merge into `listing` and refresh its `last_updated`.
    ///
    /// A status change must be a legal transition; it is checked before any
    /// field is written so a rejected patch changes nothing.
    pub fn apply(self, listing: &mut Listing, now: DateTime<Utc>) -> Result<(), ServerError> {
        if let Some(next) = self.status {
            if next != listing.status && !listing.status.can_transition_to(next) {
                return Err(ServerError::InvalidTransition {
                    from: listing.status,
                    to: next,
                });
            }
        }

        merge_fields!(
            listing,
            self,
            name,
            status,
            contact_email,
            contact_phone,
            address,
            city,
            description,
        );

        match (&mut listing.details, self.details) {
            (ListingDetails::CareHome(d), Some(DetailsPatch::CareHome(p))) => p.merge_into(d),
            (ListingDetails::Caregiver(d), Some(DetailsPatch::Caregiver(p))) => p.merge_into(d),
            (ListingDetails::Transport(d), Some(DetailsPatch::Transport(p))) => p.merge_into(d),
            (ListingDetails::Store(d), Some(DetailsPatch::Store(p))) => p.merge_into(d),
            (details, Some(other)) => tracing::debug!(
                listing_id = listing.id,
                listing_type = %details.kind(),
                patch_type = %other.kind(),
                "ignoring payload patch for a different listing type"
            ),
            (_, None) => {}
        }

        listing.touch(now);
        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(value, "on" | "true" | "1" | "yes")
}

fn ignore_field(parent: &str, field: &str) {
    tracing::debug!(parent, field, "ignoring unknown form field");
}
