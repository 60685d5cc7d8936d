//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};
use crate::view_model::{picker_class, picker_style};

#[component]
pub fn UploadArea<FS, FU>(
    preview: Signal<Option<String>>,
    on_file_selected: FS,
    on_submit: FU,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone,
    FU: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        // 先頭の1枚だけ使う
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    view! {
        <p class="intro">
            "Diagnose plant diseases, find instant cures, and chat with our plant expert AI—all in one place!"
        </p>
        <p class="intro intro-call">"Upload an Image, Diagnose Now!"</p>

        <label
            class=move || picker_class(preview.with(|p| p.is_some()))
            style=move || picker_style(preview.get().as_deref())
        >
            <Show when=move || preview.with(|p| p.is_none())>
                <span class="picker-hint">"Click to upload image"</span>
            </Show>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />
        </label>

        <br />

        <button
            class="btn btn-primary"
            on:click={
                let on_submit = on_submit.clone();
                move |_| on_submit(())
            }
        >
            "Submit"
        </button>
    }
}
