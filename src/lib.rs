//! whatsapp-gpt - 聊天机器人启动配置
//!
//! 启动时从环境变量读取并校验 GPT / DALL-E / 语音相关配置，
//! 产出只读的 `BotConfig`，由入口显式传递给各个使用方。
//!
//! - config/: 字段描述、原始环境变量、校验与汇总错误
//! - logging: tracing 初始化

pub mod config;
pub mod logging;

pub use config::{load_config, BotConfig};
