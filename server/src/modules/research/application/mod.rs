// Research Application Layer

mod aggregator;

pub use aggregator::*;
