pub mod config;
pub mod derive;
pub mod error;
pub mod intake;
pub mod model;
pub mod roster;

pub use config::RunConfig;
pub use error::CoreError;
pub use intake::{Habitats, IntakeContext};
pub use roster::Roster;
