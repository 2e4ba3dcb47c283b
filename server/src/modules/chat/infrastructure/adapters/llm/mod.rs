// LLM Adapters
// 模型提供商适配器实现

mod gemini;
mod mock;

pub use gemini::*;
pub use mock::*;
