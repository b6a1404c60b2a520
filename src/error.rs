//! エラー型
//!
//! Display の文言はそのままアラートに表示する

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// 必須入力が空
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid Base64 string")]
    InvalidBase64,

    /// 1バイトで表現できない文字を含む
    #[error("character '{ch}' at position {position} is outside the Latin-1 range")]
    Encoding { ch: char, position: usize },

    #[error("Invalid registry URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    /// LocalStorage への書き込み失敗（容量超過など）
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// ファイルダウンロード失敗
    #[error("Download failed: {0}")]
    Export(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::InvalidUrl(e.to_string())
    }
}

/// JsValue から人が読めるメッセージを取り出す
///
/// `Error` オブジェクトなら message、文字列ならそのまま、それ以外は Debug 表示
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(s) = value.as_string() {
        return s;
    }
    format!("{:?}", value)
}
