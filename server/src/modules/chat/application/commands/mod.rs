// Chat Commands - 命令定义和处理器

mod initialize_context;
mod reset_session;
mod send_message;
mod stop_generation;

pub use initialize_context::*;
pub use reset_session::*;
pub use send_message::*;
pub use stop_generation::*;
