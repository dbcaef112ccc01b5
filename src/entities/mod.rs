mod booking;
mod draft;
mod estimate;
mod place;
mod rate;

pub use booking::Booking;
pub use draft::{BookingDraft, DraftField, ServiceType};
pub use estimate::{Distance, Estimate};
pub use place::{Coordinates, Place, PlaceSource, PlaceSuggestion};
pub use rate::RateTable;
