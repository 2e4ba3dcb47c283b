// Research Domain Layer

mod entities;
pub mod services;

pub use entities::*;
pub use services::{reconstruct_abstract, InvertedIndex};
