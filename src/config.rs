//! アプリ設定
//!
//! 既定値 < ビルド時の APP_DEFAULT_REGISTRY < URLパラメータ (?registry=...&timeout=...)

use crate::utils::log_trace::{log_info_with_data, log_warn};

pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const TOKENS_KEY: &str = "savedTokens";

/// タイムアウトの上限（10分）
const MAX_REQUEST_TIMEOUT_MS: u32 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_registry: String,
    pub request_timeout_ms: u32,
    pub tokens_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_registry: option_env!("APP_DEFAULT_REGISTRY")
                .unwrap_or(DEFAULT_REGISTRY)
                .to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            tokens_key: TOKENS_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// ページURLのクエリを反映した設定を作る
    pub fn load() -> Self {
        let mut config = AppConfig::default();
        if let Some(search) = page_query() {
            config.apply_query(&search);
        }
        log_info_with_data(
            "config",
            "設定を読み込みました",
            serde_json::json!({
                "default_registry": config.default_registry,
                "request_timeout_ms": config.request_timeout_ms,
            }),
        );
        config
    }

    /// `?registry=<url>&timeout=<ms>` を適用（不正な値は警告して無視）
    pub fn apply_query(&mut self, search: &str) {
        let query = search.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "registry" => match url::Url::parse(value.trim()) {
                    Ok(_) => self.default_registry = value.trim().to_string(),
                    Err(e) => log_warn("config", &format!("registry パラメータを無視: {} ({})", value, e)),
                },
                "timeout" => match value.trim().parse::<u32>() {
                    Ok(ms) if ms > 0 && ms <= MAX_REQUEST_TIMEOUT_MS => self.request_timeout_ms = ms,
                    _ => log_warn("config", &format!("timeout パラメータを無視: {}", value)),
                },
                _ => {}
            }
        }
    }
}

fn page_query() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.is_empty() { None } else { Some(search) }
}

/// ビルド日時（build.rs で埋め込み）
pub fn format_build_time() -> String {
    let timestamp: i64 = option_env!("APP_BUILD_TIME")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    if timestamp == 0 {
        return "Build: unknown".to_string();
    }
    match chrono::DateTime::<chrono::Utc>::from_timestamp(timestamp, 0) {
        Some(dt) => format!("Build: {}", dt.format("%Y-%m-%d %H:%M UTC")),
        None => "Build: unknown".to_string(),
    }
}
