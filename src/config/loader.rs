use crate::config::config::AppConfig;
use crate::error::{AppError, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "WONDER_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. 开发环境默认值
    /// 2. ./wonder.yaml
    /// 3. `WONDER_` 前缀环境变量，嵌套字段用 `__` 分隔
    pub fn load() -> Result<AppConfig> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        Ok(Self::figment(path.as_ref()).extract()?)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> std::result::Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.request_timeout == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if config.graph.matchup_limit == 0 {
            return Err(ConfigValidationError::InvalidMatchupLimit);
        }

        if config.graph.max_quiz_questions == 0 {
            return Err(ConfigValidationError::InvalidQuizLimit);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("请求超时必须大于 0 秒")]
    InvalidTimeout,

    #[error("matchup_limit 必须大于 0")]
    InvalidMatchupLimit,

    #[error("max_quiz_questions 必须大于 0")]
    InvalidQuizLimit,
}

impl From<ConfigValidationError> for AppError {
    fn from(e: ConfigValidationError) -> Self {
        AppError::Config(e.to_string())
    }
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("wonder.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_development_defaults() {
        let config = ConfigLoader::load_from("does-not-exist.yaml").unwrap();
        assert_eq!(config.app_name, "wonder");
        assert_eq!(config.graph.matchup_limit, 5);
    }

    #[test]
    fn test_malformed_yaml_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("wonder-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "server:\n  port: not-a-number\n").unwrap();

        let result = ConfigLoader::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validation_failure_converts_to_config_error() {
        let err: AppError = ConfigValidationError::InvalidTimeout.into();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("超时")));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::development();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_production_disables_seed() {
        let config = AppConfig::production();
        assert!(!config.graph.seed_demo_data);
        assert!(ConfigLoader::validate(&config).is_ok());
    }
}
