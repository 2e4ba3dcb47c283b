// Research Domain - Services

mod abstract_index;

pub use abstract_index::*;

#[cfg(test)]
pub(crate) use abstract_index::invert_abstract;
