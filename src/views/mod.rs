//! ビューモジュール（タブごとのパネル）

pub mod encoder_panel;
pub mod token_manager;

pub use encoder_panel::EncoderPanel;
pub use token_manager::TokenManager;
