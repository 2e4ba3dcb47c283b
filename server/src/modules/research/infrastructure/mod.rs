// Research Infrastructure Layer

pub mod adapters;

pub use adapters::{OpenAlexAdapter, OpenAlexConfig};
