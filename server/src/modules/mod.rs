// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - chat: 聊天模块，处理会话句柄、模型调用和转录
// - config: 配置模块，合并配置文件与环境变量
// - quiz: 问卷模块，保存用户的问卷答案
// - research: 学术资源模块，检索 OpenAlex 文献

pub mod chat;
pub mod config;
pub mod quiz;
pub mod research;

pub use chat::ChatModule;
pub use config::ConfigModule;
pub use quiz::QuizModule;
pub use research::ResearchModule;
