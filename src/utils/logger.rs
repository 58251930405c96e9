use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾條件；`level` 來自設定檔，`verbose` 會覆蓋成 debug
fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "lms_core=debug,info".to_string(),
        (false, Some(level)) => format!("lms_core={}", level),
        (false, None) => "lms_core=warn".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON 格式，給需要結構化日誌的呼叫端使用
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true, Some("error")), "lms_core=debug,info");
        assert_eq!(default_filter(false, Some("info")), "lms_core=info");
        assert_eq!(default_filter(false, None), "lms_core=warn");
    }

    #[test]
    fn test_verbose_overrides_json_config_level() {
        // [logging] format = "json", level = "warn" 搭配 --verbose
        assert_eq!(default_filter(true, Some("warn")), "lms_core=debug,info");
        assert_eq!(default_filter(true, None), "lms_core=debug,info");
    }
}
