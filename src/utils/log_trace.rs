//! 時系列トレースログシステム
//! 操作とエラーを記録し、後からダウンロード・コピーできるようにする
//!
//! トークン値そのものは記録しないこと

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 1000;
pub const STORAGE_KEY: &str = "tokenKitLogTrace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "base64", "token-store", "token-test", "npmrc", ...
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    persist: bool,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            persist: cfg!(target_arch = "wasm32"),
        };
        if trace.persist {
            trace.load_from_storage();
        }
        trace
    }

    /// 永続化しないインスタンス
    #[cfg(test)]
    fn in_memory() -> Self {
        LogTrace {
            logs: VecDeque::new(),
            persist: false,
        }
    }

    pub fn log(&mut self, level: LogLevel, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let entry = LogEntry {
            timestamp,
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        // コンソールにも出力
        if self.persist {
            write_console(&entry);
        }

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        if self.persist {
            self.save_to_storage();
        }
    }

    #[cfg(test)]
    fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        if self.persist {
            self.save_to_storage();
        }
    }

    fn load_from_storage(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json_str)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                        let skip = logs.len().saturating_sub(MAX_LOG_ENTRIES);
                        self.logs = logs.into_iter().skip(skip).collect();
                    }
                }
            }
        }
    }

    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let json_str = serde_json::to_string(&self.logs).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(STORAGE_KEY, &json_str);
            }
        }
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&format!("[{}] {}", entry.category, entry.message));
    // data はオブジェクトとして展開表示する
    let data = entry
        .data
        .as_ref()
        .and_then(|d| d.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).ok())
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
    match entry.level {
        LogLevel::Error => web_sys::console::error_2(&line, &data),
        LogLevel::Warn => web_sys::console::warn_2(&line, &data),
        LogLevel::Info => web_sys::console::log_2(&line, &data),
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Info, category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Info, category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Warn, category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Error, category, message, None));
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Error, category, message, Some(data)));
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| trace.borrow_mut().clear());
}

/// `log_trace_<timestamp>.json` としてダウンロード
pub fn download_logs() {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
    let filename = format!("log_trace_{}.json", timestamp);
    if let Err(e) = super::export::download_text(&filename, &get_logs_json(), "application/json") {
        log_error("log-trace", &format!("ログのダウンロード失敗: {}", e));
    }
}

pub async fn copy_logs_to_clipboard_async() -> Result<(), crate::error::AppError> {
    match super::export::copy_to_clipboard(&get_logs_json()).await {
        Ok(()) => {
            log_info("log-trace", "ログをクリップボードにコピーしました");
            Ok(())
        }
        Err(e) => {
            log_error("log-trace", &e.to_string());
            Err(e)
        }
    }
}
