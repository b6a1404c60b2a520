//! Base64 エンコード/デコード
//!
//! ブラウザの btoa/atob と同じく、文字列を 1 文字 1 バイト (Latin-1) として扱う

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::AppError;

/// 標準アルファベット・パディング必須。atob と同じく末尾の余りビットは無視する
const ATOB_COMPATIBLE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// テキストを標準 Base64 へ変換
///
/// U+00FF を超える文字があれば `AppError::Encoding`
pub fn encode_base64(text: &str) -> Result<String, AppError> {
    let bytes = text
        .chars()
        .enumerate()
        .map(|(position, ch)| u8::try_from(u32::from(ch)).map_err(|_| AppError::Encoding { ch, position }))
        .collect::<Result<Vec<u8>, AppError>>()?;
    Ok(ATOB_COMPATIBLE.encode(bytes))
}

/// 標準 Base64 をテキストへ戻す
///
/// ASCII 空白は無視する。パディング不正・アルファベット外の文字は `AppError::InvalidBase64`
pub fn decode_base64(text: &str) -> Result<String, AppError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = ATOB_COMPATIBLE
        .decode(compact)
        .map_err(|_| AppError::InvalidBase64)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_round_trip() {
        let samples = [
            "",
            "a",
            "ab",
            "abc",
            "Hello, World!",
            " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~",
        ];
        for s in samples {
            let encoded = encode_base64(s).unwrap();
            assert_eq!(decode_base64(&encoded).unwrap(), s);
        }
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode_base64("Hello, World!").unwrap(), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode_base64("foobar").unwrap(), "Zm9vYmFy");
        assert_eq!(decode_base64("Zm9vYg==").unwrap(), "foob");
    }

    #[test]
    fn test_latin1_is_single_byte() {
        assert_eq!(encode_base64("é").unwrap(), "6Q==");
        assert_eq!(decode_base64("6Q==").unwrap(), "é");
        // UTF-8 バイト列はバイト単位の文字になる
        assert_eq!(decode_base64("w6k=").unwrap(), "\u{c3}\u{a9}");
    }

    #[test]
    fn test_encode_rejects_wide_characters() {
        let err = encode_base64("ok ✓").unwrap_err();
        assert_eq!(err, AppError::Encoding { ch: '✓', position: 3 });
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode_base64("abc$").unwrap_err(), AppError::InvalidBase64);
        assert_eq!(decode_base64("YQ").unwrap_err(), AppError::InvalidBase64);
        assert_eq!(decode_base64("Y===").unwrap_err(), AppError::InvalidBase64);
        assert_eq!(decode_base64("日本").unwrap_err(), AppError::InvalidBase64);
    }

    #[test]
    fn test_decode_accepts_nonzero_trailing_bits() {
        assert_eq!(decode_base64("YR==").unwrap(), "a");
        assert_eq!(decode_base64("QUJDRB==").unwrap(), "ABCD");
        // パディングは引き続き必須
        assert_eq!(decode_base64("YR").unwrap_err(), AppError::InvalidBase64);
    }

    #[test]
    fn test_decode_ignores_ascii_whitespace() {
        assert_eq!(decode_base64(" SGVs\nbG8=\t").unwrap(), "Hello");
    }
}
