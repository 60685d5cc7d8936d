//! 画像プレビュー用の読み込み

use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// ファイルをData URLとして読み込み、完了時に `on_load` を呼ぶ
///
/// 読み込みに失敗した場合は何もしない
pub fn read_as_data_url<F>(file: &File, on_load: F)
where
    F: FnOnce(String) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    // 一度呼ばれたら解放される
    let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_load(data_url);
        }
    });

    reader.set_onload(Some(onload.unchecked_ref()));

    let _ = reader.read_as_data_url(file);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use futures::channel::oneshot;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_read_as_data_url_calls_back_with_data_url() {
        let parts = js_sys::Array::of1(&JsValue::from_str("hello"));
        let file = File::new_with_str_sequence(&parts, "leaf.txt").expect("File作成失敗");

        let (tx, rx) = oneshot::channel();
        read_as_data_url(&file, move |data_url| {
            let _ = tx.send(data_url);
        });

        let data_url = rx.await.expect("コールバックが呼ばれない");
        assert!(data_url.starts_with("data:"));
        assert!(data_url.ends_with("base64,aGVsbG8="));
    }
}
