// src/domain/listing.rs

use crate::errors::ServerError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown in place of a listing photo when none were uploaded.
pub const PLACEHOLDER_PHOTO: &str = "/static/placeholder.svg";

/// Moderation status of a listing.
///
/// Allowed moves:
/// - pending  -> approved | rejected
/// - approved -> hidden
/// - hidden   -> approved
///
/// `rejected` is terminal. Deletion is not a status; it removes the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Hidden,
    Rejected,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::Pending,
        ListingStatus::Approved,
        ListingStatus::Hidden,
        ListingStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Approved => "approved",
            ListingStatus::Hidden => "hidden",
            ListingStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Pending => "Pending",
            ListingStatus::Approved => "Approved",
            ListingStatus::Hidden => "Hidden",
            ListingStatus::Rejected => "Rejected",
        }
    }

    pub fn successors(self) -> &'static [ListingStatus] {
        match self {
            ListingStatus::Pending => &[ListingStatus::Approved, ListingStatus::Rejected],
            ListingStatus::Approved => &[ListingStatus::Hidden],
            ListingStatus::Hidden => &[ListingStatus::Approved],
            ListingStatus::Rejected => &[],
        }
    }

    /// Moderation actions offered from this status, with their button labels.
    pub fn actions(self) -> &'static [(ListingStatus, &'static str)] {
        match self {
            ListingStatus::Pending => &[
                (ListingStatus::Approved, "Approve"),
                (ListingStatus::Rejected, "Reject"),
            ],
            ListingStatus::Approved => &[(ListingStatus::Hidden, "Hide")],
            ListingStatus::Hidden => &[(ListingStatus::Approved, "Unhide")],
            ListingStatus::Rejected => &[],
        }
    }

    pub fn can_transition_to(self, next: ListingStatus) -> bool {
        self.successors().contains(&next)
    }

    /// Past-tense phrase used in confirmation notices ("has been ...").
    pub fn action_name(self) -> &'static str {
        match self {
            ListingStatus::Approved => "approved",
            ListingStatus::Pending => "set to pending",
            ListingStatus::Hidden => "hidden",
            ListingStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown listing status '{s}'")))
    }
}

/// The kind of service a listing advertises. Derived from the payload variant,
/// so it can never change once a listing exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingType {
    CareHome,
    Caregiver,
    Transport,
    Store,
}

impl ListingType {
    pub const ALL: [ListingType; 4] = [
        ListingType::CareHome,
        ListingType::Caregiver,
        ListingType::Transport,
        ListingType::Store,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::CareHome => "careHome",
            ListingType::Caregiver => "caregiver",
            ListingType::Transport => "transport",
            ListingType::Store => "store",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingType::CareHome => "Care Home",
            ListingType::Caregiver => "Caregiver",
            ListingType::Transport => "Transport",
            ListingType::Store => "Store",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown listing type '{s}'")))
    }
}

// Payload fields such as capacity or prices are free text: the directory
// stores ranges like "4500-6000" as submitted.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareHomeDetails {
    pub capacity: String,
    pub monthly_price: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub medical_support: bool,
    pub accepts_insurance: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverDetails {
    pub experience: String,
    pub hourly_rate: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub availability: String,
    pub can_drive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetails {
    pub vehicle_type: String,
    pub service_area: String,
    pub price_per_km: String,
    pub operating_hours: String,
    pub wheelchair_accessible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDetails {
    #[serde(default)]
    pub product_categories: Vec<String>,
    pub opening_hours: String,
    #[serde(default)]
    pub website_url: Option<String>,
    pub delivery_available: bool,
}

/// Type-specific payload. The serialized `type` tag doubles as the listing type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListingDetails {
    CareHome(CareHomeDetails),
    Caregiver(CaregiverDetails),
    Transport(TransportDetails),
    Store(StoreDetails),
}

impl ListingDetails {
    pub fn kind(&self) -> ListingType {
        match self {
            ListingDetails::CareHome(_) => ListingType::CareHome,
            ListingDetails::Caregiver(_) => ListingType::Caregiver,
            ListingDetails::Transport(_) => ListingType::Transport,
            ListingDetails::Store(_) => ListingType::Store,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub status: ListingStatus,
    pub submitted_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub city: String,
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub details: ListingDetails,
}

impl Listing {
    pub fn kind(&self) -> ListingType {
        self.details.kind()
    }

    pub fn primary_photo(&self) -> &str {
        self.photos
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_PHOTO)
    }

    /// Refresh `last_updated`. The new value is always strictly later than the
    /// previous one, even when the clock has not advanced.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.last_updated + Duration::milliseconds(1);
        self.last_updated = now.max(floor);
    }

    /// Move to `next` if the status machine allows it.
    pub fn set_status(&mut self, next: ListingStatus, now: DateTime<Utc>) -> Result<(), ServerError> {
        if !self.status.can_transition_to(next) {
            return Err(ServerError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        self.touch(now);
        Ok(())
    }
}
