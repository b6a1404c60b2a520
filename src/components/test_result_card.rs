//! トークンテスト結果カード

use leptos::*;

use crate::models::TestResult;

#[component]
pub fn TestResultCard(result: TestResult) -> impl IntoView {
    let (class, title) = if result.success {
        ("test-result success", "✅ Success")
    } else {
        ("test-result error", "❌ Failed")
    };

    view! {
        <div class=class>
            <h3>{title}</h3>
            <p>{result.message}</p>
            {result.status.map(|status| view! {
                <p>"Status Code: " {status}</p>
            })}
            <small>"Tested at: " {result.timestamp}</small>
        </div>
    }
}
