// Chat Infrastructure - Repositories
//
// 存储实现：会话句柄与聊天转录均保存在进程内存中

mod in_memory_session_store;
mod in_memory_transcript_store;

pub use in_memory_session_store::*;
pub use in_memory_transcript_store::*;
