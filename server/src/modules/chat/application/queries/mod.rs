// Chat Queries - 查询定义和处理器

mod get_transcript;

pub use get_transcript::*;
