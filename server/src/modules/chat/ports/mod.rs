// Chat Ports Layer
// 端口定义了模块与外部世界的接口

mod llm_port;
mod session_store;
mod transcript_store;

pub use llm_port::*;
pub use session_store::*;
pub use transcript_store::*;
