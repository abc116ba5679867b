use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime;

/// One service request, as returned by `/service/my-bookings`. All fields
/// are server-owned; the client never mutates a booking beyond quotation
/// approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub services: Vec<String>,
    #[serde(with = "datetime")]
    pub booking_date: NaiveDateTime,
    pub new_customer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_services: Option<String>,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotation_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
    #[serde(with = "datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "datetime")]
    pub updated_at: NaiveDateTime,
}

impl Booking {
    pub fn has_quotation(&self) -> bool {
        self.quotation.is_some()
    }

    /// Invoices exist only for completed bookings that carry a document.
    pub fn has_invoice(&self) -> bool {
        self.status == BookingStatus::Completed && self.invoice.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub name: String,
    pub contact: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Linear progress machine. The backend only ever moves a booking forward
/// through these states; no backward transitions are modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    InProgress,
    VendorAssigned,
    WorkInProgress,
    Completed,
}

pub const STATUS_STEPS: [BookingStatus; 4] = [
    BookingStatus::InProgress,
    BookingStatus::VendorAssigned,
    BookingStatus::WorkInProgress,
    BookingStatus::Completed,
];

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::InProgress => "in progress",
            BookingStatus::VendorAssigned => "vendor assigned",
            BookingStatus::WorkInProgress => "work in progress",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "vendor assigned" => BookingStatus::VendorAssigned,
            "work in progress" => BookingStatus::WorkInProgress,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::InProgress,
        }
    }

    /// Zero-based position in the progress sequence.
    pub fn step(&self) -> usize {
        STATUS_STEPS.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn progress_percent(&self) -> u8 {
        (((self.step() + 1) * 100) / STATUS_STEPS.len()) as u8
    }

    pub fn message(&self) -> &'static str {
        match self {
            BookingStatus::InProgress => "Your booking is currently being processed.",
            BookingStatus::VendorAssigned => "A vendor has been assigned to your booking.",
            BookingStatus::WorkInProgress => "Work is ongoing on your booking.",
            BookingStatus::Completed => "This booking has been successfully completed!",
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        BookingStatus::from_str(&s)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}
