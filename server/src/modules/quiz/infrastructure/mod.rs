// Quiz Infrastructure Layer

mod in_memory_quiz_store;

pub use in_memory_quiz_store::*;
