pub mod error;
pub mod record;
pub mod roster;

pub use error::IntakeError;
pub use record::{parse_arrival, ArrivalReader};
pub use roster::{parse_roster, RosterLoader};
