pub mod bookings;
pub mod drafts;
pub mod places;
pub mod rates;
