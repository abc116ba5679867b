pub mod booking;
pub mod datetime;
pub mod filter;
pub mod user;

pub use booking::{Booking, BookingStatus, Vendor, STATUS_STEPS};
pub use filter::{CustomerFilter, DateFilter, FilterState, SortBy};
pub use user::UserProfile;

/// The bookable service categories offered by the platform.
pub const SERVICE_CATALOG: [&str; 6] = [
    "AC Service/Repair",
    "Deep Cleaning",
    "Pest Control",
    "Carpentry",
    "Plumbing",
    "Refrigerator Service/Repair",
];
