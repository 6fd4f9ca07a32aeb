//! Configuration Module
//!
//! 启动时从环境变量构建机器人配置：
//! - 进程环境变量（优先）
//! - 本地定义文件 `.env`（仅补充缺失项）
//! - 字段默认值

mod env;
mod loader;
pub mod schema;
mod types;

pub use env::{RawEnvironment, DOTENV_PATH};
pub use loader::{
    load_config, load_config_from, load_config_with, print_config, report_config_error,
    BooleanCoercion, ConfigError, FieldError, ValidationErrors,
};
pub use schema::{FieldDescriptor, FieldKind, SCHEMA};
pub use types::{BotConfig, ConfigValue, TranscriptionMode};
