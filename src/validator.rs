//! トークン疎通テスト
//!
//! レジストリURLへ `Authorization: Bearer <token>` 付きの GET を1回だけ送る。
//! npm 本来の認証手順ではなく、単純な Bearer 認証の確認。

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use crate::error::{js_error_message, AppError};
use crate::models::TestResult;
use crate::utils::clock::local_timestamp;
use crate::utils::log_trace::{log_error_with_data, log_info_with_data};

/// レスポンスのうち判定に使う部分（本文は読まない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
}

/// HTTP送信部分の差し替え口
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// HTTPレスポンスが返れば Ok（ステータスに関わらず）、通信失敗は `AppError::Network`
    async fn get_with_bearer(&self, url: &str, token: &str, timeout_ms: u32) -> Result<HttpResponse, AppError>;
}

/// window.fetch による送信。タイムアウトで AbortController を発火する
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn get_with_bearer(&self, url: &str, token: &str, timeout_ms: u32) -> Result<HttpResponse, AppError> {
        let net = |e: wasm_bindgen::JsValue| AppError::Network(js_error_message(&e));

        let controller = AbortController::new().map_err(net)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_signal(Some(&controller.signal()));

        let request = Request::new_with_str_and_init(url, &opts).map_err(net)?;
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(net)?;

        let window = web_sys::window().ok_or_else(|| AppError::Network("window is not available".into()))?;

        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let timed_out = timed_out.clone();
            let controller = controller.clone();
            gloo::timers::callback::Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let result = JsFuture::from(window.fetch_with_request(&request)).await;
        // 完了したのでタイマーを解除
        drop(timer);

        let resp_value = result.map_err(|e| {
            if timed_out.get() {
                AppError::Network(format!("request timed out after {} ms", timeout_ms))
            } else {
                net(e)
            }
        })?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| AppError::Network("fetch did not return a Response".into()))?;

        Ok(HttpResponse {
            status: resp.status(),
            status_text: resp.status_text(),
        })
    }
}

pub struct TokenValidator<T> {
    transport: T,
    timeout_ms: u32,
    stamp: fn() -> String,
}

impl TokenValidator<FetchTransport> {
    pub fn browser(timeout_ms: u32) -> Self {
        TokenValidator::new(FetchTransport, timeout_ms, local_timestamp)
    }
}

impl<T: HttpTransport> TokenValidator<T> {
    pub fn new(transport: T, timeout_ms: u32, stamp: fn() -> String) -> Self {
        TokenValidator {
            transport,
            timeout_ms,
            stamp,
        }
    }

    /// 1回だけ送信し結果を返す（リトライなし）
    pub async fn test(&self, token: &str, registry_url: &str) -> TestResult {
        let outcome = self
            .transport
            .get_with_bearer(registry_url, token, self.timeout_ms)
            .await;
        let timestamp = (self.stamp)();

        match outcome {
            Ok(resp) => {
                let result = TestResult::from_response(resp.status, &resp.status_text, timestamp);
                log_info_with_data(
                    "token-test",
                    &result.message,
                    serde_json::json!({ "registry": registry_url, "status": resp.status }),
                );
                result
            }
            Err(e) => {
                let cause = match e {
                    AppError::Network(cause) => cause,
                    other => other.to_string(),
                };
                let result = TestResult::network_error(&cause, timestamp);
                log_error_with_data(
                    "token-test",
                    &result.message,
                    serde_json::json!({ "registry": registry_url }),
                );
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// 固定の応答を返し、受け取った引数を記録する
    struct FakeTransport {
        outcome: Result<HttpResponse, AppError>,
        calls: RefCell<Vec<(String, String, u32)>>,
    }

    impl FakeTransport {
        fn status(status: u16, text: &str) -> Self {
            FakeTransport {
                outcome: Ok(HttpResponse {
                    status,
                    status_text: text.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn unreachable(cause: &str) -> Self {
            FakeTransport {
                outcome: Err(AppError::Network(cause.to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for &FakeTransport {
        async fn get_with_bearer(&self, url: &str, token: &str, timeout_ms: u32) -> Result<HttpResponse, AppError> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), token.to_string(), timeout_ms));
            self.outcome.clone()
        }
    }

    fn stamp() -> String {
        "2025/1/1 0:00:00".to_string()
    }

    #[test]
    fn test_unauthorized() {
        let transport = FakeTransport::status(401, "Unauthorized");
        let validator = TokenValidator::new(&transport, 1000, stamp);
        let result = block_on(validator.test("tok", "https://registry.example.com/"));
        assert!(!result.success);
        assert_eq!(result.status, Some(401));
        assert_eq!(result.message, "Authentication failed: 401 Unauthorized");
        assert_eq!(result.timestamp, "2025/1/1 0:00:00");
    }

    #[test]
    fn test_ok() {
        let transport = FakeTransport::status(200, "OK");
        let validator = TokenValidator::new(&transport, 1000, stamp);
        let result = block_on(validator.test("tok", "https://registry.example.com/"));
        assert!(result.success);
        assert_eq!(result.status, Some(200));
    }

    #[test]
    fn test_server_error_is_a_failed_result() {
        let transport = FakeTransport::status(503, "Service Unavailable");
        let validator = TokenValidator::new(&transport, 1000, stamp);
        let result = block_on(validator.test("tok", "https://registry.example.com/"));
        assert!(!result.success);
        assert_eq!(result.status, Some(503));
    }

    #[test]
    fn test_unreachable_host() {
        let transport = FakeTransport::unreachable("Failed to fetch");
        let validator = TokenValidator::new(&transport, 1000, stamp);
        let result = block_on(validator.test("tok", "https://nowhere.invalid/"));
        assert!(!result.success);
        assert_eq!(result.status, None);
        assert_eq!(result.message, "Network error: Failed to fetch");
    }

    #[test]
    fn test_single_attempt_with_configured_timeout() {
        let transport = FakeTransport::unreachable("request timed out after 250 ms");
        let validator = TokenValidator::new(&transport, 250, stamp);
        let result = block_on(validator.test("npm_secret", "https://r.example/"));

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("https://r.example/".to_string(), "npm_secret".to_string(), 250));
        assert_eq!(result.message, "Network error: request timed out after 250 ms");
    }
}
