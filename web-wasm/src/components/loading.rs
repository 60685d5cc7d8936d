use leptos::prelude::*;
use crate::view_model::LOADING_IMAGE;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <img src=LOADING_IMAGE alt="Analyzing..." />
        </div>
    }
}
