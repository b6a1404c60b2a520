//! 保存トークン一覧

use leptos::*;

use crate::models::TokenRecord;

/// 保存済みトークンの一覧（空なら何も表示しない）
#[component]
pub fn SavedTokenList(
    #[prop(into)] tokens: Signal<Vec<TokenRecord>>,
    on_load: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        {move || {
            (!tokens.with(|t| t.is_empty())).then(|| view! {
                <div class="saved-tokens-section">
                    <h3>"💾 Saved Tokens"</h3>
                    <div class="tokens-list">
                        <For
                            each=move || tokens.get()
                            key=|record| record.id
                            children=move |record| view! {
                                <TokenItem record=record on_load=on_load on_delete=on_delete />
                            }
                        />
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn TokenItem(record: TokenRecord, on_load: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let id = record.id;
    let preview = record.token_preview();
    let created = record.created_display();

    view! {
        <div class="token-item">
            <div class="token-info">
                <strong>{record.name}</strong>
                <small>"Created: " {created}</small>
                <small>"Registry: " {record.registry}</small>
                <small>"Token: " {preview}</small>
            </div>
            <div class="token-actions">
                <button class="load-button" title="Load this token" on:click=move |_| on_load.call(id)>
                    "📤"
                </button>
                <button class="delete-button" title="Delete this token" on:click=move |_| on_delete.call(id)>
                    "🗑️"
                </button>
            </div>
        </div>
    }
}
