// Quiz Application Layer
//
// 问卷提交命令与查询

pub mod commands;
pub mod queries;

pub use commands::*;
pub use queries::*;
