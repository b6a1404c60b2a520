//! ユーティリティモジュール

pub mod clock;
pub mod codec;
pub mod export;
pub mod log_trace;
pub mod storage;

pub use codec::{decode_base64, encode_base64};
