//! プログレスバーコンポーネント

use leptos::prelude::*;
use microspotter_common::progress;

#[component]
pub fn ProgressBar(spotted: Memo<usize>, total: usize) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress::percent(spotted.get(), total))
                />
            </div>
            <p class="progress-text">
                {move || progress::label(spotted.get(), total)}
            </p>
        </div>
    }
}
