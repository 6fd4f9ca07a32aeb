//! 日志初始化
//!
//! 日志级别由 `RUST_LOG` 控制，未设置时使用 `info`

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// 安装全局 fmt subscriber，只能调用一次
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
