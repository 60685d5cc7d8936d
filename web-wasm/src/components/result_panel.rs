//! 診断結果パネル

use leptos::prelude::*;
use crate::view_model::{ResultContent, FALLBACK_IMAGE};

#[component]
pub fn ResultPanel(
    content: ResultContent,
    image_url: Option<String>,
) -> impl IntoView {
    let image_url = image_url.unwrap_or_else(|| FALLBACK_IMAGE.to_string());

    view! {
        <div class="result-panel">
            <h1 class="result-heading">{content.headline}</h1>
            <img class="result-image" src=image_url alt="Uploaded plant" />
            <h1 class="result-heading">"Description:"</h1>
            <p class="result-text">{content.description}</p>
            <h1 class="result-heading">"Treatment:"</h1>
            <p class="result-text">{content.treatment}</p>
            <h1 class="result-heading">"Prevention Tip:"</h1>
            <p>{content.prevention}</p>
        </div>
    }
}
