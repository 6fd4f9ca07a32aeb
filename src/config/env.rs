//! Raw Environment
//!
//! 未经校验的环境变量映射
//!
//! 来源：
//! 1. 进程环境变量（只读取 `SCHEMA` 中的字段与 `DOTENV_PATH`）
//! 2. 本地定义文件（`.env`，仅补充缺失的变量，不覆盖已有值）
//!
//! 变量名大小写敏感：`tts_enabled` 与 `TTS_ENABLED` 是两个不同的变量。

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;

use config::{Environment, Map, Source};

use super::loader::ConfigError;
use super::schema::SCHEMA;

/// 覆盖本地定义文件路径的变量
pub const DOTENV_PATH: &str = "DOTENV_PATH";

/// 原始环境变量映射
///
/// 构造完成后只读，不会回写进程环境。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnvironment {
    values: HashMap<String, String>,
    /// 值不是合法 UTF-8 的变量（有损转换后的文本，仅用于报错）
    non_unicode: HashMap<String, String>,
}

impl RawEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取进程中的配置字段与 `DOTENV_PATH`
    ///
    /// 其他变量不会被读取，即使它们的值不是 UTF-8 也不影响加载。
    pub fn from_process() -> Result<Self, ConfigError> {
        let names: Vec<&str> = SCHEMA
            .iter()
            .map(|d| d.name)
            .chain([DOTENV_PATH])
            .collect();
        Self::from_process_vars(&names)
    }

    /// 只读取给定名称的进程环境变量
    pub fn from_process_vars(names: &[&str]) -> Result<Self, ConfigError> {
        let mut env = Self::new();
        let mut source = Map::new();

        for name in names {
            let Some(value) = std::env::var_os(name) else {
                continue;
            };
            if let Some(text) = value.to_str() {
                source.insert(name.to_string(), text.to_string());
                continue;
            }
            env.insert_os(*name, value);
        }

        // 关闭 try_parsing，保证所有值都保持原始字符串；
        // config 会把键转成小写，按传入的原名还原
        let collected = Environment::default()
            .source(Some(source))
            .try_parsing(false)
            .collect()?;
        for (key, value) in collected {
            if let Some(name) = names.iter().find(|n| n.eq_ignore_ascii_case(&key)) {
                env.insert(*name, value.into_string()?);
            }
        }

        Ok(env)
    }

    /// 由显式键值对构造
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (key, value) in pairs {
            env.insert(key, value);
        }
        env
    }

    /// 设置变量，已存在时覆盖
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.non_unicode.remove(&key);
        self.values.insert(key, value.into());
    }

    /// 设置操作系统原始值；非 UTF-8 的值单独记录
    pub fn insert_os(&mut self, key: impl Into<String>, value: OsString) {
        match value.into_string() {
            Ok(text) => self.insert(key, text),
            Err(raw) => {
                let key = key.into();
                self.values.remove(&key);
                self.non_unicode
                    .insert(key, raw.to_string_lossy().into_owned());
            }
        }
    }

    /// 读取原始值；变量不存在或不是 UTF-8 时返回 None
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// 变量存在但不是 UTF-8 时，返回有损转换后的文本
    pub fn non_unicode(&self, name: &str) -> Option<&str> {
        self.non_unicode.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.non_unicode.is_empty()
    }

    /// 合并本地定义文件（`KEY=VALUE` 格式）
    ///
    /// - 已存在的变量优先，文件中的同名定义被忽略
    /// - 文件不存在不视为错误
    /// - 文件格式错误返回 `ConfigError::DefinitionsFile`
    ///
    /// # 返回
    /// 实际新增的变量数量
    pub fn merge_definitions_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let path = path.as_ref();

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(err) if err.not_found() => {
                tracing::debug!("No definitions file at {}", path.display());
                return Ok(0);
            }
            Err(err) => return Err(ConfigError::definitions_file(path, err)),
        };

        let mut merged = 0;
        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::definitions_file(path, e))?;
            if self.non_unicode.contains_key(&key) {
                continue;
            }
            if let Entry::Vacant(slot) = self.values.entry(key) {
                slot.insert(value);
                merged += 1;
            }
        }

        tracing::debug!(
            "Merged {} variable(s) from definitions file {}",
            merged,
            path.display()
        );
        Ok(merged)
    }
}
