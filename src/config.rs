use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "client.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 远程文档服务地址（包含 `/api` 前缀）
    pub api_base_url: String,
    /// 待上传文件所在目录
    pub input_folder: String,
    /// 结果展示后隐藏"处理中"提示的延迟（毫秒）
    pub hide_indicator_delay_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            input_folder: "input_files".to_string(),
            hide_indicator_delay_ms: 2000,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParseFailed { source, .. } => ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: String::new(),
            source,
        })
    }

    /// 默认值 + 环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_overrides(env_var)
    }

    /// 加载配置：配置文件（可选）+ 环境变量覆盖
    ///
    /// 配置文件路径取自 `CONFIG_FILE`，默认 `client.toml`；文件不存在时等同于 `from_env`。
    pub fn load() -> Result<Self, ConfigError> {
        let path = env_var("CONFIG_FILE").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let path = Path::new(&path);
        if !path.exists() {
            return Ok(Self::from_env());
        }
        Ok(Self::from_toml_file(path)?.with_overrides(env_var))
    }

    fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup("API_BASE_URL").unwrap_or(self.api_base_url),
            input_folder: lookup("INPUT_FOLDER").unwrap_or(self.input_folder),
            hide_indicator_delay_ms: lookup("HIDE_INDICATOR_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.hide_indicator_delay_ms),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }

    pub fn hide_indicator_delay(&self) -> Duration {
        Duration::from_millis(self.hide_indicator_delay_ms)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
