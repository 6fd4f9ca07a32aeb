//! whatsapp-gpt - 配置检查入口
//!
//! 合并 `.env`，校验环境变量，打印配置摘要。
//! 任一字段校验失败时逐项输出错误并以非零状态退出。

use whatsapp_gpt::config::{
    load_config_from, print_config, report_config_error, RawEnvironment, DOTENV_PATH,
};
use whatsapp_gpt::logging;

/// 默认的本地定义文件，可用 `DOTENV_PATH` 覆盖
const DEFAULT_DEFINITIONS_FILE: &str = ".env";

fn main() -> anyhow::Result<()> {
    logging::init();

    // 进程环境变量优先，`.env` 只补充缺失项
    let mut env = RawEnvironment::from_process()?;
    let definitions = env
        .get(DOTENV_PATH)
        .unwrap_or(DEFAULT_DEFINITIONS_FILE)
        .to_string();
    env.merge_definitions_file(&definitions)?;

    let config = match load_config_from(&env) {
        Ok(config) => config,
        Err(err) => {
            report_config_error(&err);
            return Err(anyhow::anyhow!("Failed to load config: {}", err));
        }
    };

    print_config(&config);
    tracing::info!("Configuration ready");

    Ok(())
}
