pub mod settings;

pub use settings::RunConfig;
