//! .npmrc 設定テキストの生成

use crate::error::AppError;

pub const NPMRC_FILENAME: &str = ".npmrc";
pub const NPMRC_MIME: &str = "text/plain";

/// `<host>/:_authToken=<token>` と `registry=<url>` の2行を生成する
///
/// トークン・URL はエスケープせずそのまま埋め込む
pub fn generate(token: &str, registry_url: &str) -> Result<String, AppError> {
    if token.trim().is_empty() || registry_url.trim().is_empty() {
        return Err(AppError::invalid_input("Please enter both token and registry URL"));
    }

    let parsed = url::Url::parse(registry_url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| AppError::InvalidUrl(format!("{} has no host", registry_url)))?;

    Ok(format!("{}/:_authToken={}\nregistry={}", host, token, registry_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_two_lines() {
        assert_eq!(
            generate("tok", "https://registry.example.com/").unwrap(),
            "registry.example.com/:_authToken=tok\nregistry=https://registry.example.com/"
        );
    }

    #[test]
    fn test_host_drops_port_and_path() {
        assert_eq!(
            generate("tok", "http://localhost:4873/npm/").unwrap(),
            "localhost/:_authToken=tok\nregistry=http://localhost:4873/npm/"
        );
    }

    #[test]
    fn test_token_is_substituted_literally() {
        let text = generate("a=b;c\"d ${X}", "https://r.example/").unwrap();
        assert_eq!(text.lines().next(), Some("r.example/:_authToken=a=b;c\"d ${X}"));
    }

    #[test]
    fn test_missing_input() {
        for (token, registry) in [("", "https://r/"), ("tok", ""), ("  ", "https://r/"), ("tok", " \t")] {
            assert!(matches!(generate(token, registry), Err(AppError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(generate("tok", "registry.npmjs.org"), Err(AppError::InvalidUrl(_))));
        assert!(matches!(generate("tok", "mailto:someone@example.com"), Err(AppError::InvalidUrl(_))));
    }
}
