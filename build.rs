use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // ビルド日時をフッター表示用に埋め込む
    if let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) {
        let timestamp = duration.as_secs();
        println!("cargo:rustc-env=APP_BUILD_TIME={}", timestamp);
    }

    // 既定レジストリの上書き（任意）
    match env::var("APP_DEFAULT_REGISTRY") {
        Ok(registry) if !registry.trim().is_empty() => {
            println!("cargo:warning=APP_DEFAULT_REGISTRY set to {}", registry.trim());
            println!("cargo:rustc-env=APP_DEFAULT_REGISTRY={}", registry.trim());
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=APP_DEFAULT_REGISTRY");
    // ソース変更時にビルド日時を更新
    println!("cargo:rerun-if-changed=src");
}
