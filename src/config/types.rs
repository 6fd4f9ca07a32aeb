//! Configuration Types
//!
//! 校验完成后的类型化配置

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::schema;

/// 语音转写模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptionMode {
    /// 本地转写
    #[default]
    Local,
    /// 远程 Speech API
    SpeechApi,
}

impl TranscriptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::SpeechApi => "speech-api",
        }
    }
}

impl FromStr for TranscriptionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "speech-api" => Ok(Self::SpeechApi),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TranscriptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个字段的类型化取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Integer(u64),
    String(String),
    Boolean(bool),
    Enum(&'static str),
}

/// 应用主配置
///
/// 启动时构造一次，之后只读，显式传递给各个使用方。
/// 序列化时键名与环境变量一致，API Key 会被遮蔽。
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BotConfig {
    #[serde(serialize_with = "serialize_masked")]
    pub openai_api_key: String,
    pub max_model_tokens: u64,

    /// 是否要求消息带命令前缀
    pub prefix_enabled: bool,
    pub gpt_prefix: String,
    pub dalle_prefix: String,
    pub ai_config_prefix: String,
    pub reset_prefix: String,

    /// Speech 服务基础 URL
    pub speech_api_url: String,
    pub transcription_mode: TranscriptionMode,
    pub transcription_enabled: bool,
    pub tts_enabled: bool,
}

impl BotConfig {
    /// 按环境变量名读取字段（大小写敏感）
    pub fn value(&self, name: &str) -> Option<ConfigValue> {
        let value = match name {
            schema::OPENAI_API_KEY => ConfigValue::String(self.openai_api_key.clone()),
            schema::MAX_MODEL_TOKENS => ConfigValue::Integer(self.max_model_tokens),
            schema::PREFIX_ENABLED => ConfigValue::Boolean(self.prefix_enabled),
            schema::GPT_PREFIX => ConfigValue::String(self.gpt_prefix.clone()),
            schema::DALLE_PREFIX => ConfigValue::String(self.dalle_prefix.clone()),
            schema::AI_CONFIG_PREFIX => ConfigValue::String(self.ai_config_prefix.clone()),
            schema::RESET_PREFIX => ConfigValue::String(self.reset_prefix.clone()),
            schema::SPEECH_API_URL => ConfigValue::String(self.speech_api_url.clone()),
            schema::TRANSCRIPTION_MODE => ConfigValue::Enum(self.transcription_mode.as_str()),
            schema::TRANSCRIPTION_ENABLED => ConfigValue::Boolean(self.transcription_enabled),
            schema::TTS_ENABLED => ConfigValue::Boolean(self.tts_enabled),
            _ => return None,
        };
        Some(value)
    }

    /// 遮蔽后的 API Key，用于日志输出
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.openai_api_key)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("openai_api_key", &self.masked_api_key())
            .field("max_model_tokens", &self.max_model_tokens)
            .field("prefix_enabled", &self.prefix_enabled)
            .field("gpt_prefix", &self.gpt_prefix)
            .field("dalle_prefix", &self.dalle_prefix)
            .field("ai_config_prefix", &self.ai_config_prefix)
            .field("reset_prefix", &self.reset_prefix)
            .field("speech_api_url", &self.speech_api_url)
            .field("transcription_mode", &self.transcription_mode)
            .field("transcription_enabled", &self.transcription_enabled)
            .field("tts_enabled", &self.tts_enabled)
            .finish()
    }
}

/// 只保留前 3 个字符；不超过 3 个字符时全部遮蔽
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 3 {
        return "***".to_string();
    }
    let visible: String = secret.chars().take(3).collect();
    format!("{}***", visible)
}

fn serialize_masked<S: Serializer>(secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&mask_secret(secret))
}
