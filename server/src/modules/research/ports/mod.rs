// Research Ports Layer

mod bibliography_port;

pub use bibliography_port::*;
