// Config Application Layer
//
// 应用层实现配置加载查询

pub mod queries;

pub use queries::*;
