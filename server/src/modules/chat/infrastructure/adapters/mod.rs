// Chat Infrastructure - Adapters

pub mod llm;

pub use llm::{GeminiAdapter, GeminiConfig, MockLLMAdapter};
