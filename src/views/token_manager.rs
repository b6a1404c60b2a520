//! NPMトークン管理パネル
//!
//! 入力欄のトークン・レジストリが「現在の編集状態」。保存済みトークンは
//! 読み込み時に編集欄へコピーされるだけで、保存データは書き換えない。

use leptos::*;

use crate::components::{SavedTokenList, TestResultCard};
use crate::config::AppConfig;
use crate::models::TestResult;
use crate::npmrc::{self, NPMRC_FILENAME, NPMRC_MIME};
use crate::token_store::TokenStore;
use crate::utils::clock::BrowserClock;
use crate::utils::export::{alert, copy_to_clipboard, download_text};
use crate::utils::log_trace::{log_error, log_info, log_warn};
use crate::utils::storage::LocalStorage;
use crate::validator::TokenValidator;

#[component]
pub fn TokenManager() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let timeout_ms = config.request_timeout_ms;
    let store = store_value(TokenStore::new(LocalStorage, BrowserClock, config.tokens_key.clone()));

    let (token, set_token) = create_signal(String::new());
    let (registry, set_registry) = create_signal(config.default_registry.clone());
    let (test_result, set_test_result) = create_signal(None::<TestResult>);
    let (is_loading, set_is_loading) = create_signal(false);
    let (saved_tokens, set_saved_tokens) = create_signal(store.with_value(|s| s.list()));

    let refresh = move || set_saved_tokens.set(store.with_value(|s| s.list()));

    // トークン保存
    let save_token = move |_| {
        match store.with_value(|s| s.add(&token.get(), &registry.get())) {
            Ok(_) => {
                refresh();
                alert("Token saved successfully!");
            }
            Err(e) => {
                log_warn("token-store", &format!("保存できません: {}", e));
                alert(&e.to_string());
            }
        }
    };

    let on_load = Callback::new(move |id: i64| {
        if let Some(record) = store.with_value(|s| s.load(id)) {
            set_token.set(record.token);
            set_registry.set(record.registry);
            log_info("token-store", &format!("{} を読み込みました", record.name));
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        if let Err(e) = store.with_value(|s| s.remove(id)) {
            log_error("token-store", &format!("削除できません: {}", e));
            alert(&e.to_string());
        }
        refresh();
    });

    // トークンテスト（実行中はボタンを無効化して二重送信を防ぐ）
    let test_token = move |_| {
        let current = token.get();
        if current.trim().is_empty() {
            alert("Please enter a token to test");
            return;
        }
        let registry_url = registry.get();
        set_is_loading.set(true);
        set_test_result.set(None);
        spawn_local(async move {
            let validator = TokenValidator::browser(timeout_ms);
            let result = validator.test(&current, &registry_url).await;
            set_test_result.set(Some(result));
            set_is_loading.set(false);
        });
    };

    let npmrc_content = move || match npmrc::generate(&token.get(), &registry.get()) {
        Ok(content) => Some(content),
        Err(e) => {
            log_warn("npmrc", &format!("生成できません: {}", e));
            alert(&e.to_string());
            None
        }
    };

    let copy_npmrc = move |_| {
        let Some(content) = npmrc_content() else { return };
        spawn_local(async move {
            match copy_to_clipboard(&content).await {
                Ok(()) => {
                    log_info("npmrc", ".npmrc をクリップボードにコピーしました");
                    alert("NPM configuration copied to clipboard!");
                }
                Err(e) => {
                    log_error("clipboard", &e.to_string());
                    alert("Failed to copy to clipboard");
                }
            }
        });
    };

    let download_npmrc = move |_| {
        let Some(content) = npmrc_content() else { return };
        match download_text(NPMRC_FILENAME, &content, NPMRC_MIME) {
            Ok(()) => log_info("npmrc", ".npmrc をダウンロードしました"),
            Err(e) => {
                log_error("npmrc", &e.to_string());
                alert(&e.to_string());
            }
        }
    };

    let token_blank = move || token.with(|t| t.trim().is_empty());
    let npmrc_blank = move || token_blank() || registry.with(|r| r.trim().is_empty());

    view! {
        <div class="token-manager">
            <div class="token-header">
                <h2>"🔑 NPM Token Manager"</h2>
                <p>"Manage and test your NPM authentication tokens"</p>
            </div>

            <div class="token-input-section">
                <div class="input-group">
                    <label>"NPM Registry URL:"</label>
                    <input type="url" id="registry" placeholder="https://registry.npmjs.org/"
                        prop:value=move || registry.get()
                        on:input=move |ev| set_registry.set(event_target_value(&ev))
                    />
                </div>

                <div class="input-group">
                    <label>"Authentication Token:"</label>
                    <textarea id="token" class="token-input" rows="3"
                        placeholder="npm_xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="button-group">
                    <button class="primary-button" on:click=test_token
                        disabled=move || is_loading.get() || token_blank()>
                        {move || if is_loading.get() { "⏳ Testing..." } else { "🧪 Test Token" }}
                    </button>
                    <button class="secondary-button" on:click=save_token disabled=token_blank>
                        "💾 Save Token"
                    </button>
                </div>
            </div>

            {move || test_result.get().map(|result| view! { <TestResultCard result=result /> })}

            <div class="npmrc-section">
                <h3>"📄 Generate .npmrc Configuration"</h3>
                <p>"Generate NPM configuration file with your token settings"</p>
                <div class="button-group">
                    <button class="secondary-button" on:click=copy_npmrc disabled=npmrc_blank>
                        "📋 Copy .npmrc Content"
                    </button>
                    <button class="secondary-button" on:click=download_npmrc disabled=npmrc_blank>
                        "💾 Download .npmrc"
                    </button>
                </div>
            </div>

            <SavedTokenList tokens=saved_tokens on_load=on_load on_delete=on_delete />

            <div class="info-section">
                <h3>"ℹ️ About NPM Tokens"</h3>
                <ul>
                    <li><strong>"Authentication:"</strong>" NPM tokens authenticate you with private registries"</li>
                    <li><strong>"Security:"</strong>" Never share your tokens publicly"</li>
                    <li><strong>"Scope:"</strong>" Tokens can have different permission levels"</li>
                    <li><strong>"Expiration:"</strong>" Some tokens may have expiration dates"</li>
                </ul>
            </div>
        </div>
    }
}
