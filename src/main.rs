use clap::Parser;
use lms_core::app::commands::execute;
use lms_core::utils::{logger, validation::Validate};
use lms_core::{CliConfig, LmsError, TomlConfig};

fn load_config(path: Option<&str>) -> anyhow::Result<TomlConfig> {
    let config = match path {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// 設定檔載入失敗時的建議；驗證失敗與 TOML 語法錯誤分開說明
fn config_failure_hint(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<LmsError>() {
        Some(e) => e.recovery_suggestion(),
        None => "Make sure the file exists and is valid TOML format",
    }
}

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {:#}", e);
            eprintln!("💡 {}", config_failure_hint(&e));
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting lms-core CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match execute(&cli.command, &config) {
        Ok(output) => {
            if cli.json {
                match output.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("❌ {}", e.user_friendly_message());
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", output);
            }
            std::process::exit(output.exit_code());
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_out_of_range_value_gets_validation_hint() {
        let file = config_file("[password]\nmin_length = 0\n");
        let err = load_config(file.path().to_str()).unwrap_err();
        assert_eq!(config_failure_hint(&err), "Check the configuration file values");
    }

    #[test]
    fn test_bad_toml_gets_syntax_hint() {
        let file = config_file("[password\n");
        let err = load_config(file.path().to_str()).unwrap_err();
        assert_eq!(
            config_failure_hint(&err),
            "Make sure the configuration file is valid TOML"
        );
    }

    #[test]
    fn test_missing_file_gets_io_hint() {
        let err = load_config(Some("/nonexistent/lms-core.toml")).unwrap_err();
        assert_eq!(
            config_failure_hint(&err),
            "Check that the file exists and is readable/writable"
        );
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.password_policy().min_length, 8);
    }
}
