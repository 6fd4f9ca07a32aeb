//! Configuration Schema
//!
//! 静态字段描述表：每个环境变量的名称、类型与默认值

/// 转写模式的可选值
pub const TRANSCRIPTION_MODES: &[&str] = &["local", "speech-api"];

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 十进制非负整数
    Integer,
    /// 任意字符串
    String,
    /// 布尔值（由字符串强制转换而来）
    Boolean,
    /// 固定取值集合
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// 用于错误信息的类型描述
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Integer => "non-negative integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Enum(_) => "enum",
        }
    }

    /// 枚举的可选值，非枚举类型为空
    pub fn allowed(&self) -> &'static [&'static str] {
        match self {
            Self::Enum(allowed) => *allowed,
            _ => &[],
        }
    }
}

/// 单个字段描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// 环境变量名（大小写敏感）
    pub name: &'static str,
    pub kind: FieldKind,
    /// 缺省值；为 None 时字段必填
    pub default: Option<&'static str>,
}

impl FieldDescriptor {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    const fn with_default(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }
}

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const MAX_MODEL_TOKENS: &str = "MAX_MODEL_TOKENS";
pub const PREFIX_ENABLED: &str = "PREFIX_ENABLED";
pub const GPT_PREFIX: &str = "GPT_PREFIX";
pub const DALLE_PREFIX: &str = "DALLE_PREFIX";
pub const AI_CONFIG_PREFIX: &str = "AI_CONFIG_PREFIX";
pub const RESET_PREFIX: &str = "RESET_PREFIX";
pub const SPEECH_API_URL: &str = "SPEECH_API_URL";
pub const TRANSCRIPTION_MODE: &str = "TRANSCRIPTION_MODE";
pub const TRANSCRIPTION_ENABLED: &str = "TRANSCRIPTION_ENABLED";
pub const TTS_ENABLED: &str = "TTS_ENABLED";

// General
pub const OPENAI_API_KEY_FIELD: FieldDescriptor =
    FieldDescriptor::required(OPENAI_API_KEY, FieldKind::String);
pub const MAX_MODEL_TOKENS_FIELD: FieldDescriptor =
    FieldDescriptor::with_default(MAX_MODEL_TOKENS, FieldKind::Integer, "4096");

// Prefix
pub const PREFIX_ENABLED_FIELD: FieldDescriptor =
    FieldDescriptor::required(PREFIX_ENABLED, FieldKind::Boolean);
pub const GPT_PREFIX_FIELD: FieldDescriptor =
    FieldDescriptor::with_default(GPT_PREFIX, FieldKind::String, "!gpt");
pub const DALLE_PREFIX_FIELD: FieldDescriptor =
    FieldDescriptor::with_default(DALLE_PREFIX, FieldKind::String, "!dalle");
pub const AI_CONFIG_PREFIX_FIELD: FieldDescriptor =
    FieldDescriptor::with_default(AI_CONFIG_PREFIX, FieldKind::String, "!config");
pub const RESET_PREFIX_FIELD: FieldDescriptor =
    FieldDescriptor::with_default(RESET_PREFIX, FieldKind::String, "!reset");

// Speech
pub const SPEECH_API_URL_FIELD: FieldDescriptor = FieldDescriptor::with_default(
    SPEECH_API_URL,
    FieldKind::String,
    "https://speech-service.verlekar.com",
);
pub const TRANSCRIPTION_MODE_FIELD: FieldDescriptor = FieldDescriptor::with_default(
    TRANSCRIPTION_MODE,
    FieldKind::Enum(TRANSCRIPTION_MODES),
    "local",
);
pub const TRANSCRIPTION_ENABLED_FIELD: FieldDescriptor =
    FieldDescriptor::required(TRANSCRIPTION_ENABLED, FieldKind::Boolean);
pub const TTS_ENABLED_FIELD: FieldDescriptor =
    FieldDescriptor::required(TTS_ENABLED, FieldKind::Boolean);

/// 全部字段，按校验与报错顺序排列
pub const SCHEMA: &[FieldDescriptor] = &[
    OPENAI_API_KEY_FIELD,
    MAX_MODEL_TOKENS_FIELD,
    PREFIX_ENABLED_FIELD,
    GPT_PREFIX_FIELD,
    DALLE_PREFIX_FIELD,
    AI_CONFIG_PREFIX_FIELD,
    RESET_PREFIX_FIELD,
    SPEECH_API_URL_FIELD,
    TRANSCRIPTION_MODE_FIELD,
    TRANSCRIPTION_ENABLED_FIELD,
    TTS_ENABLED_FIELD,
];
