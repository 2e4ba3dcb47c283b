// Bibliography Adapters
// 各学术资源来源的适配器实现

mod openalex;

pub use openalex::*;
