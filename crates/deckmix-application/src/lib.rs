pub mod mixing_service;

pub use mixing_service::{MixOutcome, MixingService};
