// Quiz Ports Layer

mod quiz_store;

pub use quiz_store::*;
