//! 画面表示用の値
//!
//! セッションの状態から表示文字列を組み立てる。DOMには触れない。

use plant_doctor_common::{Error, Phase, SubmitTicket, UploadSession, NO_FILE_ALERT};

/// 結果画像が無い場合の表示
pub const FALLBACK_IMAGE: &str = "default_image_url.jpg";

/// 読込中アイコン
pub const LOADING_IMAGE: &str = "./load.gif";

/// 結果パネルの内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultContent {
    pub headline: String,
    pub description: String,
    pub treatment: String,
    pub prevention: String,
}

impl ResultContent {
    /// 結果またはエラーの段階からパネル内容を作る
    ///
    /// エラー時はラベルの位置にエラー文言を出し、詳細は空欄
    pub fn from_phase(phase: &Phase) -> Option<Self> {
        match phase {
            Phase::Result(diagnosis) => Some(Self {
                headline: diagnosis.headline(),
                description: diagnosis.description().to_string(),
                treatment: diagnosis.treatment().to_string(),
                prevention: diagnosis.prevention().to_string(),
            }),
            Phase::Error(message) => Some(Self {
                headline: message.clone(),
                ..Default::default()
            }),
            Phase::Idle | Phase::Submitting { .. } => None,
        }
    }
}

/// 送信ボタン押下時の動作
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction<F> {
    /// 分類サービスへ送る
    Send { ticket: SubmitTicket, file: F },
    /// アラートを出して送らない
    Alert(&'static str),
    /// 送信中などで何もしない
    Ignore(String),
}

/// 送信を開始し、呼び出し側がとるべき動作を返す
///
/// 画像未選択ならアラートのみで、チケットもファイルも渡さない
pub fn start_submit<F: Clone>(session: &mut UploadSession<F>) -> SubmitAction<F> {
    match session.begin_submit() {
        Ok(ticket) => match session.selected() {
            Some(selected) => SubmitAction::Send { ticket, file: selected.file.clone() },
            None => SubmitAction::Ignore(Error::NoFileSelected.to_string()),
        },
        Err(Error::NoFileSelected) => SubmitAction::Alert(NO_FILE_ALERT),
        Err(e) => SubmitAction::Ignore(e.to_string()),
    }
}

/// 選択欄のクラス
pub fn picker_class(has_preview: bool) -> &'static str {
    if has_preview {
        "picker"
    } else {
        "picker picker-empty"
    }
}

/// 選択欄の背景にプレビューを敷くstyle
pub fn picker_style(preview: Option<&str>) -> String {
    preview
        .map(|url| format!("background-image: url({})", url))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant_doctor_common::{Diagnosis, Prediction, View, ANALYSIS_ERROR_MESSAGE};

    fn result_phase(name: &str, probability: f64) -> Phase {
        Phase::Result(Diagnosis::from_prediction(&Prediction {
            name: name.to_string(),
            probability,
        }))
    }

    #[test]
    fn test_result_content_matched() {
        let content = ResultContent::from_phase(&result_phase("Rust", 0.87)).expect("内容なし");
        assert_eq!(content.headline, "Rust, 87%");
        assert_eq!(content.treatment, "Use fungicides and remove infected plant parts.");
        assert!(!content.description.is_empty());
        assert!(!content.prevention.is_empty());
    }

    #[test]
    fn test_result_content_unmatched() {
        let content = ResultContent::from_phase(&result_phase("unknown", 0.5)).expect("内容なし");
        assert_eq!(content.headline, "Unknown, 50%");
        assert_eq!(content.description, "");
        assert_eq!(content.treatment, "");
        assert_eq!(content.prevention, "");
    }

    #[test]
    fn test_result_content_error() {
        let phase = Phase::Error(ANALYSIS_ERROR_MESSAGE.to_string());
        let content = ResultContent::from_phase(&phase).expect("内容なし");
        assert_eq!(content.headline, ANALYSIS_ERROR_MESSAGE);
        assert_eq!(content.treatment, "");
    }

    #[test]
    fn test_result_content_none_while_idle() {
        assert!(ResultContent::from_phase(&Phase::Idle).is_none());
    }

    #[test]
    fn test_start_submit_without_file_alerts() {
        let mut session: UploadSession<&str> = UploadSession::new();
        assert_eq!(start_submit(&mut session), SubmitAction::Alert(NO_FILE_ALERT));
        assert_eq!(session.view(), View::Upload);
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_start_submit_sends_selected_file() {
        let mut session = UploadSession::new();
        session.select_image("leaf-bytes", "leaf.jpg");

        let SubmitAction::Send { file, .. } = start_submit(&mut session) else {
            panic!("送信にならない");
        };
        assert_eq!(file, "leaf-bytes");
        assert_eq!(session.view(), View::Loading);
    }

    #[test]
    fn test_start_submit_ignored_while_submitting() {
        let mut session = UploadSession::new();
        session.select_image("leaf-bytes", "leaf.jpg");
        let _ = start_submit(&mut session);

        assert!(matches!(start_submit(&mut session), SubmitAction::Ignore(_)));
    }

    #[test]
    fn test_picker_style() {
        assert_eq!(picker_style(None), "");
        assert_eq!(
            picker_style(Some("data:image/png;base64,AAA")),
            "background-image: url(data:image/png;base64,AAA)"
        );
    }

    #[test]
    fn test_picker_class() {
        assert_eq!(picker_class(true), "picker");
        assert_eq!(picker_class(false), "picker picker-empty");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::File;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_submit_without_file_alerts() {
        let mut session: UploadSession<File> = UploadSession::new();
        assert_eq!(start_submit(&mut session), SubmitAction::Alert(NO_FILE_ALERT));
        assert!(!session.is_submitting());
    }

    #[wasm_bindgen_test]
    fn wasm_submit_sends_picked_file() {
        let parts = js_sys::Array::of1(&JsValue::from_str("leaf"));
        let file = File::new_with_str_sequence(&parts, "leaf.jpg").expect("File作成失敗");

        let mut session = UploadSession::new();
        session.select_image(file, "leaf.jpg");

        match start_submit(&mut session) {
            SubmitAction::Send { file, .. } => assert_eq!(file.name(), "leaf.jpg"),
            other => panic!("送信にならない: {:?}", other),
        }
    }
}
