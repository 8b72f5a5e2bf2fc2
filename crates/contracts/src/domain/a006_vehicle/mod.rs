pub mod aggregate;

pub use aggregate::{FacilityStatus, FacilityTicket, Vehicle, VehicleBooking};
