//! データ構造体モジュール

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// 保存トークン
// ============================================

/// トークン一覧のプレビュー表示文字数
pub const TOKEN_PREVIEW_CHARS: usize = 20;

/// LocalStorage に保存するトークンレコード
///
/// フィールド名は既存の保存データと互換
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// 作成時刻（ミリ秒）
    pub id: i64,
    pub token: String,
    pub registry: String,
    /// ISO-8601
    pub created: String,
    pub name: String,
}

impl TokenRecord {
    pub fn new(id: i64, token: String, registry: String) -> Self {
        TokenRecord {
            id,
            token,
            registry,
            created: iso_timestamp(id),
            name: format!("Token-{}", id),
        }
    }

    /// 先頭20文字 + "..."
    pub fn token_preview(&self) -> String {
        let head: String = self.token.chars().take(TOKEN_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }

    /// 作成日時のミリ秒。解釈できなければ None
    pub fn created_millis(&self) -> Option<i64> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.timestamp_millis())
    }

    /// 表示用の作成日時（ブラウザのロケール、テスト結果の日時と同じ書式）
    pub fn created_display(&self) -> String {
        match self.created_millis() {
            Some(millis) => format_local_millis(millis),
            None => self.created.clone(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn format_local_millis(millis: i64) -> String {
    js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64))
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}

/// ブラウザ外ではロケールが無いので UTC で表示
#[cfg(not(target_arch = "wasm32"))]
fn format_local_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}

/// ミリ秒タイムスタンプを `2025-01-01T00:00:00.000Z` 形式へ
pub fn iso_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================
// トークンテスト結果
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub timestamp: String,
}

impl TestResult {
    /// HTTPレスポンスを受け取った場合（2xx以外も失敗結果として返す）
    pub fn from_response(status: u16, status_text: &str, timestamp: String) -> Self {
        if (200..300).contains(&status) {
            TestResult {
                success: true,
                message: "Token authentication successful!".to_string(),
                status: Some(status),
                timestamp,
            }
        } else {
            TestResult {
                success: false,
                message: format!("Authentication failed: {} {}", status, status_text)
                    .trim_end()
                    .to_string(),
                status: Some(status),
                timestamp,
            }
        }
    }

    /// 通信自体が失敗した場合（ステータスなし）
    pub fn network_error(cause: &str, timestamp: String) -> Self {
        TestResult {
            success: false,
            message: format!("Network error: {}", cause),
            status: None,
            timestamp,
        }
    }
}

// ============================================
// UI状態
// ============================================

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    #[default]
    Encoder,
    Tokens,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CodecMode {
    #[default]
    Encode,
    Decode,
}

impl CodecMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecMode::Encode => "encode",
            CodecMode::Decode => "decode",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "decode" => CodecMode::Decode,
            _ => CodecMode::Encode,
        }
    }
}
