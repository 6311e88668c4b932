use serde::{Deserialize, Serialize};

/// Moderation state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

impl ListingStatus {
    /// Wire form of the status, matching its serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Approved => "status-approved",
            Self::Rejected => "status-rejected",
        }
    }
}

/// A car-rental submission under moderation.
///
/// `id` is unique within the store and immutable after seeding. Price is
/// a daily rate; non-negative by convention only, nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub status: ListingStatus,
}

/// Shallow-merge patch for a listing. Fields left `None` keep their
/// current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub status: Option<ListingStatus>,
}

impl ListingUpdate {
    /// Patch that only flips the moderation status.
    pub fn status(status: ListingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
