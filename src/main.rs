use leptos::*;

mod components;
mod config;
mod error;
mod models;
mod npmrc;
mod token_store;
mod utils;
mod validator;
mod views;

use config::{format_build_time, AppConfig};
use models::Tab;
use utils::export::alert;
use utils::log_trace::{clear_logs, copy_logs_to_clipboard_async, download_logs, log_info};
use views::{EncoderPanel, TokenManager};

// ============================================
// メインアプリ（タブ切り替え）
// ============================================

#[component]
fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    let (current_tab, set_current_tab) = create_signal(Tab::default());

    let tab_button = move |tab: Tab, label: &'static str| view! {
        <button
            class=move || if current_tab.get() == tab { "tab-button active" } else { "tab-button" }
            on:click=move |_| set_current_tab.set(tab)
        >
            {label}
        </button>
    };

    view! {
        <div class="App">
            <header class="app-header">
                <h1>"🔐 Base64 Encoder & NPM Token Manager"</h1>
                <p>"Created by Adnan Al-Emran"</p>
            </header>

            <nav class="tab-navigation">
                {tab_button(Tab::Encoder, "📝 Base64 Encoder")}
                {tab_button(Tab::Tokens, "🔑 Token Manager")}
            </nav>

            <main class="main-content">
                {move || match current_tab.get() {
                    Tab::Encoder => view! { <EncoderPanel /> }.into_view(),
                    Tab::Tokens => view! { <TokenManager /> }.into_view(),
                }}
            </main>

            <Footer />
        </div>
    }
}

/// フッター（ビルド日時・ログ操作）
#[component]
fn Footer() -> impl IntoView {
    let copy_logs = move |_| {
        spawn_local(async move {
            if copy_logs_to_clipboard_async().await.is_ok() {
                alert("Log copied to clipboard!");
            } else {
                alert("Failed to copy log");
            }
        });
    };

    view! {
        <footer class="app-footer">
            <p>"© 2025 Base64 Encoder - ISC License"</p>
            <p class="build-info">{format_build_time()}</p>
            <div class="log-actions">
                <button class="link-button" on:click=move |_| download_logs()>"Download log"</button>
                <button class="link-button" on:click=copy_logs>"Copy log"</button>
                <button class="link-button" on:click=move |_| clear_logs()>"Clear log"</button>
            </div>
        </footer>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log_info("app", "起動しました");
    mount_to_body(App);
}
