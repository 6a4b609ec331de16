pub mod animal;
pub mod season;
pub mod species;

pub use animal::{Animal, AnimalId, Arrival};
pub use season::Season;
pub use species::Species;
