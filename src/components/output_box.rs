//! 結果表示（読み取り専用テキスト + コピーボタン）

use leptos::*;

use crate::utils::export::{alert, copy_to_clipboard};
use crate::utils::log_trace::{log_error, log_info};

#[component]
pub fn OutputBox(label: &'static str, text: String) -> impl IntoView {
    let copy_text = text.clone();
    let on_copy = move |_| {
        let text = copy_text.clone();
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    log_info("clipboard", "結果をコピーしました");
                    alert("Copied to clipboard!");
                }
                Err(e) => {
                    log_error("clipboard", &e.to_string());
                    alert("Failed to copy to clipboard");
                }
            }
        });
    };

    view! {
        <div class="output-section">
            <label>{label}</label>
            <div class="output-container">
                <textarea class="output-text" rows="3" readonly prop:value=text></textarea>
                <button class="copy-button" title="Copy to clipboard" on:click=on_copy>"📋"</button>
            </div>
        </div>
    }
}
