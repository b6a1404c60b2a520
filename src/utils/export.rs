//! クリップボード・ファイルダウンロード

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_error_message, AppError};

/// テキストをクリップボードへ書き込む
pub async fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("window is not available".into()))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))
}

/// Blob + a[download] でテキストファイルを保存させる
pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<(), AppError> {
    let to_err = |e: JsValue| AppError::Export(js_error_message(&e));

    let window = web_sys::window().ok_or_else(|| AppError::Export("window is not available".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Export("document is not available".into()))?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options).map_err(to_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(to_err)?;

    let a = document.create_element("a").map_err(to_err)?;
    a.set_attribute("href", &url).map_err(to_err)?;
    a.set_attribute("download", filename).map_err(to_err)?;

    // Firefox は DOM に追加しないとクリックが効かない
    let body = document.body();
    if let Some(body) = &body {
        let _ = body.append_child(&a);
    }
    if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    if let Some(body) = &body {
        let _ = body.remove_child(&a);
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// ブロッキング通知
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
