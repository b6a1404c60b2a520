//! UIコンポーネントモジュール

pub mod output_box;
pub mod saved_tokens;
pub mod test_result_card;

pub use output_box::OutputBox;
pub use saved_tokens::SavedTokenList;
pub use test_result_card::TestResultCard;
