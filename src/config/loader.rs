//! Configuration Loader
//!
//! 对原始环境变量执行一次声明式校验，产出类型化配置
//!
//! 流程：
//! 1. 按 `SCHEMA` 顺序逐个字段读取原始值
//! 2. 缺失时应用默认值，无默认值则记为缺失
//! 3. 按字段类型解析（整数 / 字符串 / 布尔 / 枚举）
//! 4. 所有错误一次性汇总返回，不在第一个错误处中断

use std::fmt;
use std::path::{Path, PathBuf};

use config::ConfigError as ConfigCrateError;
use thiserror::Error;

use super::env::RawEnvironment;
use super::schema::{self, FieldDescriptor, FieldKind, SCHEMA};
use super::types::{BotConfig, TranscriptionMode};

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// 必填字段缺失
    #[error("{field}: missing required value")]
    MissingRequiredField { field: &'static str },

    /// 类型不匹配
    #[error("{field}: expected {expected}, got '{value}'")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// 不在允许的取值集合中
    #[error("{field}: '{value}' is not one of [{}]", .allowed.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl FieldError {
    /// 出错的环境变量名
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field }
            | Self::TypeMismatch { field, .. }
            | Self::InvalidEnumValue { field, .. } => *field,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingRequiredField { .. })
    }
}

/// 汇总的校验错误，按 `SCHEMA` 顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// 所有出错字段名
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FieldError::field).collect()
    }

    /// 缺失的必填字段名
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|e| e.is_missing())
            .map(FieldError::field)
            .collect()
    }

    /// 查找某个字段的错误
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment: {0}")]
    LoadError(String),

    #[error("Failed to read definitions file {}: {message}", .path.display())]
    DefinitionsFile { path: PathBuf, message: String },

    #[error("Invalid environment variables: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl ConfigError {
    pub(crate) fn definitions_file(path: &Path, err: impl fmt::Display) -> Self {
        Self::DefinitionsFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// 校验失败时返回字段错误列表
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 布尔字段的字符串转换规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanCoercion {
    /// 非空即为 true（包括字面量 "false"），空字符串为 false
    #[default]
    Presence,
    /// 解析 true/false/1/0/yes/no/on/off，其他值为类型错误
    Literal,
}

const TRUE_LITERALS: &[&str] = &["1", "true", "yes", "on"];
const FALSE_LITERALS: &[&str] = &["0", "false", "no", "off"];

/// 从进程环境变量加载配置
///
/// 不读取 `.env`；需要时先用 `RawEnvironment::merge_definitions_file`
/// 合并，再调用 `load_config_from`。
pub fn load_config() -> Result<BotConfig, ConfigError> {
    let env = RawEnvironment::from_process()?;
    load_config_from(&env)
}

/// 使用默认布尔规则校验给定的环境变量映射
pub fn load_config_from(env: &RawEnvironment) -> Result<BotConfig, ConfigError> {
    load_config_with(env, BooleanCoercion::default())
}

/// 校验给定的环境变量映射
///
/// # 返回
/// - `Ok(BotConfig)` - 所有字段通过校验
/// - `Err(ConfigError::Invalid)` - 包含全部出错字段
pub fn load_config_with(
    env: &RawEnvironment,
    coercion: BooleanCoercion,
) -> Result<BotConfig, ConfigError> {
    let mut resolver = Resolver::new(env, coercion);

    // 解析顺序与 SCHEMA 一致，错误按此顺序汇总
    let openai_api_key = resolver.string(&schema::OPENAI_API_KEY_FIELD);
    let max_model_tokens = resolver.integer(&schema::MAX_MODEL_TOKENS_FIELD);
    let prefix_enabled = resolver.boolean(&schema::PREFIX_ENABLED_FIELD);
    let gpt_prefix = resolver.string(&schema::GPT_PREFIX_FIELD);
    let dalle_prefix = resolver.string(&schema::DALLE_PREFIX_FIELD);
    let ai_config_prefix = resolver.string(&schema::AI_CONFIG_PREFIX_FIELD);
    let reset_prefix = resolver.string(&schema::RESET_PREFIX_FIELD);
    let speech_api_url = resolver.string(&schema::SPEECH_API_URL_FIELD);
    let transcription_mode = resolver.mode(&schema::TRANSCRIPTION_MODE_FIELD);
    let transcription_enabled = resolver.boolean(&schema::TRANSCRIPTION_ENABLED_FIELD);
    let tts_enabled = resolver.boolean(&schema::TTS_ENABLED_FIELD);

    let (
        Some(openai_api_key),
        Some(max_model_tokens),
        Some(prefix_enabled),
        Some(gpt_prefix),
        Some(dalle_prefix),
        Some(ai_config_prefix),
        Some(reset_prefix),
        Some(speech_api_url),
        Some(transcription_mode),
        Some(transcription_enabled),
        Some(tts_enabled),
    ) = (
        openai_api_key,
        max_model_tokens,
        prefix_enabled,
        gpt_prefix,
        dalle_prefix,
        ai_config_prefix,
        reset_prefix,
        speech_api_url,
        transcription_mode,
        transcription_enabled,
        tts_enabled,
    )
    else {
        return Err(ValidationErrors(resolver.errors).into());
    };

    tracing::debug!("Configuration validated ({} fields)", SCHEMA.len());
    Ok(BotConfig {
        openai_api_key,
        max_model_tokens,
        prefix_enabled,
        gpt_prefix,
        dalle_prefix,
        ai_config_prefix,
        reset_prefix,
        speech_api_url,
        transcription_mode,
        transcription_enabled,
        tts_enabled,
    })
}

/// 单次校验过程：每个字段要么产出值，要么记录一条错误
struct Resolver<'a> {
    env: &'a RawEnvironment,
    coercion: BooleanCoercion,
    errors: Vec<FieldError>,
}

impl<'a> Resolver<'a> {
    fn new(env: &'a RawEnvironment, coercion: BooleanCoercion) -> Self {
        Self {
            env,
            coercion,
            errors: Vec::new(),
        }
    }

    fn reject<T>(&mut self, err: FieldError) -> Option<T> {
        self.errors.push(err);
        None
    }

    /// 取原始值并应用默认值
    fn raw(&mut self, descriptor: &FieldDescriptor) -> Option<&'a str> {
        let field = descriptor.name;
        let env = self.env;

        if let Some(lossy) = env.non_unicode(field) {
            return self.reject(FieldError::TypeMismatch {
                field,
                expected: "UTF-8 text",
                value: lossy.to_string(),
            });
        }

        // 非布尔字段的空白值视为未设置
        let raw = match descriptor.kind {
            FieldKind::Boolean => env.get(field),
            _ => env.get(field).filter(|v| !v.trim().is_empty()),
        };

        match (raw, descriptor.default) {
            (Some(raw), _) => Some(raw),
            (None, Some(default)) => {
                tracing::debug!("{} not set, using default '{}'", field, default);
                Some(default)
            }
            (None, None) => self.reject(FieldError::MissingRequiredField { field }),
        }
    }

    fn string(&mut self, descriptor: &FieldDescriptor) -> Option<String> {
        self.raw(descriptor).map(str::to_string)
    }

    fn integer(&mut self, descriptor: &FieldDescriptor) -> Option<u64> {
        let raw = self.raw(descriptor)?;
        match raw.trim().parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => self.reject(FieldError::TypeMismatch {
                field: descriptor.name,
                expected: descriptor.kind.describe(),
                value: raw.to_string(),
            }),
        }
    }

    fn boolean(&mut self, descriptor: &FieldDescriptor) -> Option<bool> {
        let raw = self.raw(descriptor)?;
        match coerce_bool(descriptor.name, raw, self.coercion) {
            Ok(value) => Some(value),
            Err(err) => self.reject(err),
        }
    }

    fn mode(&mut self, descriptor: &FieldDescriptor) -> Option<TranscriptionMode> {
        let raw = self.raw(descriptor)?;
        match raw.parse::<TranscriptionMode>() {
            Ok(mode) => Some(mode),
            Err(()) => self.reject(FieldError::InvalidEnumValue {
                field: descriptor.name,
                value: raw.to_string(),
                allowed: descriptor.kind.allowed(),
            }),
        }
    }
}

fn coerce_bool(
    field: &'static str,
    raw: &str,
    coercion: BooleanCoercion,
) -> Result<bool, FieldError> {
    let normalized = raw.trim().to_ascii_lowercase();

    match coercion {
        BooleanCoercion::Presence => {
            let value = !raw.is_empty();
            if value && FALSE_LITERALS.contains(&normalized.as_str()) {
                tracing::warn!(
                    "{}='{}' resolves to true: any non-empty value enables this flag",
                    field,
                    raw
                );
            }
            Ok(value)
        }
        BooleanCoercion::Literal => {
            if TRUE_LITERALS.contains(&normalized.as_str()) {
                Ok(true)
            } else if FALSE_LITERALS.contains(&normalized.as_str()) {
                Ok(false)
            } else {
                Err(FieldError::TypeMismatch {
                    field,
                    expected: "boolean (true/false/1/0/yes/no/on/off)",
                    value: raw.to_string(),
                })
            }
        }
    }
}

/// 输出加载失败的诊断信息，校验错误逐字段输出
pub fn report_config_error(err: &ConfigError) {
    match err.validation_errors() {
        Some(errors) => {
            for field_error in errors {
                tracing::error!("Invalid environment variable {}", field_error);
            }
        }
        None => tracing::error!("{}", err),
    }
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &BotConfig) {
    tracing::info!("=== Bot Configuration ===");
    tracing::info!("OpenAI API Key: {}", config.masked_api_key());
    tracing::info!("Max Model Tokens: {}", config.max_model_tokens);
    tracing::info!("Prefix Enabled: {}", config.prefix_enabled);
    if config.prefix_enabled {
        tracing::info!(
            "Prefixes: gpt={} dalle={} config={} reset={}",
            config.gpt_prefix,
            config.dalle_prefix,
            config.ai_config_prefix,
            config.reset_prefix
        );
    }
    tracing::info!("Transcription Enabled: {}", config.transcription_enabled);
    if config.transcription_enabled {
        tracing::info!("Transcription Mode: {}", config.transcription_mode);
    }
    tracing::info!("TTS Enabled: {}", config.tts_enabled);
    tracing::info!("Speech API URL: {}", config.speech_api_url);
    tracing::info!("=========================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    const REQUIRED: &[(&str, &str)] = &[
        ("OPENAI_API_KEY", "sk-test"),
        ("PREFIX_ENABLED", "true"),
        ("TRANSCRIPTION_ENABLED", "true"),
        ("TTS_ENABLED", "true"),
    ];

    fn env_with(extra: &[(&str, &str)]) -> RawEnvironment {
        let mut env = RawEnvironment::from_pairs(REQUIRED.iter().copied());
        for (key, value) in extra {
            env.insert(*key, *value);
        }
        env
    }

    fn env_without(field: &str) -> RawEnvironment {
        RawEnvironment::from_pairs(REQUIRED.iter().copied().filter(|(k, _)| *k != field))
    }

    fn errors_of(result: Result<BotConfig, ConfigError>) -> ValidationErrors {
        match result {
            Err(ConfigError::Invalid(errors)) => errors,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// 运行 f 并返回期间输出的日志文本
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_all_required_fields_missing() {
        let errors = errors_of(load_config_from(&RawEnvironment::new()));
        assert_eq!(
            errors.missing_fields(),
            vec![
                "OPENAI_API_KEY",
                "PREFIX_ENABLED",
                "TRANSCRIPTION_ENABLED",
                "TTS_ENABLED"
            ]
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_defaults_applied_when_optional_fields_absent() {
        let config = load_config_from(&env_with(&[])).unwrap();
        assert_eq!(config.max_model_tokens, 4096);
        assert_eq!(config.gpt_prefix, "!gpt");
        assert_eq!(config.dalle_prefix, "!dalle");
        assert_eq!(config.ai_config_prefix, "!config");
        assert_eq!(config.reset_prefix, "!reset");
        assert_eq!(config.speech_api_url, "https://speech-service.verlekar.com");
        assert_eq!(config.transcription_mode, TranscriptionMode::Local);
    }

    #[test]
    fn test_blank_defaulted_strings_fall_back_to_default() {
        let config = load_config_from(&env_with(&[("GPT_PREFIX", ""), ("RESET_PREFIX", "  ")]))
            .unwrap();
        assert_eq!(config.gpt_prefix, "!gpt");
        assert_eq!(config.reset_prefix, "!reset");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = load_config_from(&env_with(&[
            ("GPT_PREFIX", "!ask"),
            ("SPEECH_API_URL", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(config.gpt_prefix, "!ask");
        assert_eq!(config.speech_api_url, "http://localhost:9000");
    }

    #[test]
    fn test_max_model_tokens_parsed() {
        let config = load_config_from(&env_with(&[("MAX_MODEL_TOKENS", "1024")])).unwrap();
        assert_eq!(config.max_model_tokens, 1024);
    }

    #[test]
    fn test_max_model_tokens_beyond_u32() {
        let config =
            load_config_from(&env_with(&[("MAX_MODEL_TOKENS", "5000000000")])).unwrap();
        assert_eq!(config.max_model_tokens, 5_000_000_000);
    }

    #[test]
    fn test_max_model_tokens_not_a_number() {
        let errors = errors_of(load_config_from(&env_with(&[(
            "MAX_MODEL_TOKENS",
            "not-a-number",
        )])));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("MAX_MODEL_TOKENS"),
            Some(&FieldError::TypeMismatch {
                field: "MAX_MODEL_TOKENS",
                expected: "non-negative integer",
                value: "not-a-number".to_string(),
            })
        );
    }

    #[test]
    fn test_max_model_tokens_negative_rejected() {
        let errors = errors_of(load_config_from(&env_with(&[("MAX_MODEL_TOKENS", "-1")])));
        assert!(matches!(
            errors.get("MAX_MODEL_TOKENS"),
            Some(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_transcription_mode_speech_api_accepted() {
        let config =
            load_config_from(&env_with(&[("TRANSCRIPTION_MODE", "speech-api")])).unwrap();
        assert_eq!(config.transcription_mode, TranscriptionMode::SpeechApi);
    }

    #[test]
    fn test_transcription_mode_unknown_rejected() {
        let errors = errors_of(load_config_from(&env_with(&[("TRANSCRIPTION_MODE", "cloud")])));
        assert_eq!(
            errors.get("TRANSCRIPTION_MODE"),
            Some(&FieldError::InvalidEnumValue {
                field: "TRANSCRIPTION_MODE",
                value: "cloud".to_string(),
                allowed: schema::TRANSCRIPTION_MODES,
            })
        );
    }

    #[test]
    fn test_only_api_key_missing() {
        let errors = errors_of(load_config_from(&env_without("OPENAI_API_KEY")));
        assert_eq!(errors.fields(), vec!["OPENAI_API_KEY"]);
        assert!(errors.iter().all(FieldError::is_missing));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let errors = errors_of(load_config_from(&env_with(&[("OPENAI_API_KEY", " ")])));
        assert_eq!(errors.missing_fields(), vec!["OPENAI_API_KEY"]);
    }

    #[test]
    fn test_loading_is_idempotent() {
        let env = env_with(&[("MAX_MODEL_TOKENS", "2048"), ("TRANSCRIPTION_MODE", "speech-api")]);
        let first = load_config_from(&env).unwrap();
        let second = load_config_from(&env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_errors_are_aggregated_in_schema_order() {
        let env = RawEnvironment::from_pairs([
            ("MAX_MODEL_TOKENS", "lots"),
            ("TRANSCRIPTION_MODE", "cloud"),
            ("PREFIX_ENABLED", "1"),
        ]);
        let errors = errors_of(load_config_from(&env));
        assert_eq!(
            errors.fields(),
            vec![
                "OPENAI_API_KEY",
                "MAX_MODEL_TOKENS",
                "TRANSCRIPTION_MODE",
                "TRANSCRIPTION_ENABLED",
                "TTS_ENABLED"
            ]
        );

        let message = ConfigError::from(errors).to_string();
        assert!(message
            .starts_with("Invalid environment variables: 5 field(s) failed validation"));
        assert!(message
            .contains("\n  - TRANSCRIPTION_MODE: 'cloud' is not one of [local, speech-api]"));
        assert!(message.contains("\n  - OPENAI_API_KEY: missing required value"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_type_mismatch() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut env = env_with(&[]);
        env.insert_os("GPT_PREFIX", OsStr::from_bytes(&[b'!', 0xff]).to_os_string());

        let errors = errors_of(load_config_from(&env));
        assert_eq!(errors.fields(), vec!["GPT_PREFIX"]);
        assert!(matches!(
            errors.get("GPT_PREFIX"),
            Some(FieldError::TypeMismatch { expected: "UTF-8 text", .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_every_field_is_checked_in_schema_order() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut env = RawEnvironment::new();
        for descriptor in SCHEMA {
            env.insert_os(descriptor.name, OsStr::from_bytes(&[0xfe]).to_os_string());
        }

        let errors = errors_of(load_config_from(&env));
        let expected: Vec<_> = SCHEMA.iter().map(|d| d.name).collect();
        assert_eq!(errors.fields(), expected);
    }

    #[test]
    fn test_lowercase_names_do_not_satisfy_required_fields() {
        let env = RawEnvironment::from_pairs([
            ("openai_api_key", "sk-test"),
            ("prefix_enabled", "1"),
            ("transcription_enabled", "1"),
            ("tts_enabled", "1"),
        ]);
        let errors = errors_of(load_config_from(&env));
        assert_eq!(
            errors.missing_fields(),
            vec![
                "OPENAI_API_KEY",
                "PREFIX_ENABLED",
                "TRANSCRIPTION_ENABLED",
                "TTS_ENABLED"
            ]
        );
    }

    #[test]
    fn test_lowercase_name_does_not_override_exact_name() {
        let env = env_with(&[("TTS_ENABLED", ""), ("tts_enabled", "yes")]);
        let config = load_config_from(&env).unwrap();
        assert!(!config.tts_enabled);
    }

    // 现行规则：非空即 true，字面量 "false" 同样启用该开关
    #[test]
    fn test_presence_coercion_treats_false_literal_as_true() {
        let env = env_with(&[("PREFIX_ENABLED", "false")]);
        let mut result = None;
        let logs = capture_logs(|| result = Some(load_config_from(&env)));

        assert!(result.unwrap().unwrap().prefix_enabled);
        assert!(logs.contains("PREFIX_ENABLED='false' resolves to true"));
    }

    #[test]
    fn test_presence_coercion_empty_string_is_false() {
        let config = load_config_from(&env_with(&[("TTS_ENABLED", "")])).unwrap();
        assert!(!config.tts_enabled);
    }

    #[test]
    fn test_presence_coercion_absent_boolean_is_missing() {
        let errors = errors_of(load_config_from(&env_without("TTS_ENABLED")));
        assert_eq!(errors.missing_fields(), vec!["TTS_ENABLED"]);
    }

    // 可选规则：按字面量解析，"false" 得到 false
    #[test]
    fn test_literal_coercion_parses_false() {
        let env = env_with(&[("PREFIX_ENABLED", "false"), ("TTS_ENABLED", "Off")]);
        let config = load_config_with(&env, BooleanCoercion::Literal).unwrap();
        assert!(!config.prefix_enabled);
        assert!(!config.tts_enabled);
        assert!(config.transcription_enabled);
    }

    #[test]
    fn test_literal_coercion_rejects_garbage() {
        let env = env_with(&[("PREFIX_ENABLED", "maybe")]);
        let errors = errors_of(load_config_with(&env, BooleanCoercion::Literal));
        assert!(matches!(
            errors.get("PREFIX_ENABLED"),
            Some(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_print_config_masks_api_key() {
        let env = env_with(&[("OPENAI_API_KEY", "sk-very-secret-key")]);
        let config = load_config_from(&env).unwrap();

        let logs = capture_logs(|| print_config(&config));

        assert!(!logs.contains("sk-very-secret-key"));
        assert!(logs.contains("OpenAI API Key: sk-***"));
        assert!(logs.contains("Max Model Tokens: 4096"));
        assert!(logs.contains("Transcription Mode: local"));
    }

    #[test]
    fn test_report_lists_every_failing_field() {
        let env = RawEnvironment::from_pairs([("TRANSCRIPTION_MODE", "cloud")]);
        let err = load_config_from(&env).unwrap_err();

        let logs = capture_logs(|| report_config_error(&err));

        let lines: Vec<_> = logs.lines().filter(|l| l.contains("ERROR")).collect();
        assert_eq!(lines.len(), 5);
        for field in [
            "OPENAI_API_KEY",
            "PREFIX_ENABLED",
            "TRANSCRIPTION_MODE",
            "TRANSCRIPTION_ENABLED",
            "TTS_ENABLED",
        ] {
            assert!(logs.contains(field), "{} missing from report", field);
        }
    }

    #[test]
    fn test_report_non_validation_error() {
        let err = ConfigError::LoadError("boom".to_string());
        let logs = capture_logs(|| report_config_error(&err));
        assert!(logs.contains("Failed to load environment: boom"));
    }
}
