//! Base64 エンコード/デコード パネル

use leptos::*;

use crate::components::OutputBox;
use crate::models::CodecMode;
use crate::utils::export::alert;
use crate::utils::log_trace::{log_info_with_data, log_warn};
use crate::utils::{decode_base64, encode_base64};

#[component]
pub fn EncoderPanel() -> impl IntoView {
    let (input_text, set_input_text) = create_signal(String::new());
    let (encoded_text, set_encoded_text) = create_signal(String::new());
    let (decoded_text, set_decoded_text) = create_signal(String::new());
    let (mode, set_mode) = create_signal(CodecMode::Encode);

    let handle_encode = move || match encode_base64(&input_text.get()) {
        Ok(encoded) => {
            log_info_with_data("base64", "エンコードしました", serde_json::json!({ "output_len": encoded.len() }));
            set_encoded_text.set(encoded);
        }
        Err(e) => {
            log_warn("base64", &format!("エンコード失敗: {}", e));
            alert(&format!("Error encoding text: {}", e));
        }
    };

    let handle_decode = move || match decode_base64(&input_text.get()) {
        Ok(decoded) => {
            log_info_with_data("base64", "デコードしました", serde_json::json!({ "output_len": decoded.len() }));
            set_decoded_text.set(decoded);
        }
        Err(e) => {
            log_warn("base64", &format!("デコード失敗: {}", e));
            alert("Error decoding text: Invalid Base64 string");
        }
    };

    let on_run = move |_| match mode.get() {
        CodecMode::Encode => handle_encode(),
        CodecMode::Decode => handle_decode(),
    };

    let clear_all = move |_| {
        set_input_text.set(String::new());
        set_encoded_text.set(String::new());
        set_decoded_text.set(String::new());
    };

    let is_blank = move || input_text.with(|t| t.trim().is_empty());

    let mode_radio = move |value: CodecMode, label: &'static str| view! {
        <label>
            <input type="radio" name="codec-mode" value=value.as_str()
                prop:checked=move || mode.get() == value
                on:change=move |ev| set_mode.set(CodecMode::from_value(&event_target_value(&ev)))
            />
            {label}
        </label>
    };

    view! {
        <div class="base64-encoder">
            <div class="encoder-header">
                <h2>"🔄 Base64 Encoder/Decoder"</h2>
                <div class="mode-selector">
                    {mode_radio(CodecMode::Encode, "Encode")}
                    {mode_radio(CodecMode::Decode, "Decode")}
                </div>
            </div>

            <div class="input-section">
                <label>
                    {move || match mode.get() {
                        CodecMode::Encode => "Text to Encode:",
                        CodecMode::Decode => "Base64 to Decode:",
                    }}
                </label>
                <textarea id="input-text" rows="4"
                    placeholder=move || match mode.get() {
                        CodecMode::Encode => "Enter text to encode...",
                        CodecMode::Decode => "Enter Base64 string to decode...",
                    }
                    prop:value=move || input_text.get()
                    on:input=move |ev| set_input_text.set(event_target_value(&ev))
                ></textarea>
                <div class="button-group">
                    <button class="primary-button" on:click=on_run disabled=is_blank>
                        {move || match mode.get() {
                            CodecMode::Encode => "🔒 Encode",
                            CodecMode::Decode => "🔓 Decode",
                        }}
                    </button>
                    <button class="secondary-button" on:click=clear_all>"🗑️ Clear All"</button>
                </div>
            </div>

            // 現在のモードの結果だけ表示
            {move || {
                let (label, text) = match mode.get() {
                    CodecMode::Encode => ("Encoded Result:", encoded_text.get()),
                    CodecMode::Decode => ("Decoded Result:", decoded_text.get()),
                };
                (!text.is_empty()).then(|| view! { <OutputBox label=label text=text /> })
            }}

            <div class="info-section">
                <h3>"ℹ️ About Base64 Encoding"</h3>
                <p>
                    "Base64 is a binary-to-text encoding scheme that represents binary data in an ASCII string format. "
                    "It is commonly used for encoding data in email, storing complex data in XML, and web applications."
                </p>
                <ul>
                    <li><strong>"Encode:"</strong>" Convert text to Base64 format"</li>
                    <li><strong>"Decode:"</strong>" Convert Base64 back to original text"</li>
                    <li><strong>"Use Cases:"</strong>" Data transmission, storage, authentication tokens"</li>
                </ul>
            </div>
        </div>
    }
}
