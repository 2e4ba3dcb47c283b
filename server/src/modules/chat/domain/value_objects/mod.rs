// Chat Domain - Value Objects
// 值对象是不可变的，通过值而非标识来比较

mod message_id;
mod prompt_format;
mod session_id;
mod tool;

pub use message_id::*;
pub use prompt_format::*;
pub use session_id::*;
pub use tool::*;
