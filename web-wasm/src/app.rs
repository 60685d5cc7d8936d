//! メインアプリケーションコンポーネント
//!
//! 画像選択 → 送信 → 結果表示 を1つのセッションで管理する

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, Url};
use plant_doctor_common::{UploadSession, View, DEFAULT_ENDPOINT};
use crate::api::{classifier::classify, file_reader::read_as_data_url};
use crate::components::{
    header::Header,
    loading::Loading,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::view_model::{start_submit, ResultContent, SubmitAction};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // web_sys::Fileを持つのでローカルストレージのシグナル
    let session = RwSignal::new_local(UploadSession::<File>::new());

    let preview = Signal::derive(move || {
        session.with(|s| s.selected().and_then(|sel| sel.preview_data_url.clone()))
    });

    // 画像選択ハンドラ
    let on_file_selected = move |file: File| {
        let file_name = file.name();
        let object_url = Url::create_object_url_with_blob(&file).ok();

        let Some((selection_id, replaced)) =
            session.try_update(|s| s.select_image(file.clone(), file_name))
        else {
            return;
        };

        if let Some(url) = replaced.and_then(|r| r.object_url) {
            let _ = Url::revoke_object_url(&url);
        }
        if let Some(url) = object_url {
            session.update(|s| {
                s.attach_object_url(selection_id, url);
            });
        }

        read_as_data_url(&file, move |data_url| {
            session.update(|s| {
                s.attach_preview(selection_id, data_url);
            });
        });
    };

    // 送信ハンドラ
    let on_submit = move |_: ()| {
        match session.try_update(|s| start_submit(s)) {
            Some(SubmitAction::Send { ticket, file }) => {
                spawn_local(async move {
                    let outcome = classify(DEFAULT_ENDPOINT, &file).await;
                    if let Err(e) = &outcome {
                        gloo::console::error!(format!("Error uploading file: {}", e));
                    }
                    session.update(|s| {
                        if let Err(e) = s.complete(ticket, outcome) {
                            gloo::console::warn!(format!("Ignored response: {}", e));
                        }
                    });
                });
            }
            Some(SubmitAction::Alert(message)) => gloo::dialogs::alert(message),
            Some(SubmitAction::Ignore(reason)) => gloo::console::warn!(reason),
            None => {}
        }
    };

    view! {
        <div class="app">
            <Header />

            {move || match session.with(|s| s.view()) {
                View::Upload => view! {
                    <UploadArea
                        preview=preview
                        on_file_selected=on_file_selected
                        on_submit=on_submit
                    />
                }.into_any(),
                View::Loading => view! { <Loading /> }.into_any(),
                View::Result | View::Error => {
                    let content = session
                        .with(|s| ResultContent::from_phase(s.phase()))
                        .unwrap_or_default();
                    let image_url = session
                        .with(|s| s.selected().and_then(|sel| sel.object_url.clone()));
                    view! { <ResultPanel content=content image_url=image_url /> }.into_any()
                }
            }}
        </div>
    }
}
