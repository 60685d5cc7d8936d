//! アップロードセッション
//!
//! 画像選択 → 送信 → 結果表示 の状態を1つの構造体で管理する。
//! 表示は `Phase` から一意に決まるので、読込中と結果表示が同時に立つことはない。
//!
//! `F` は選択されたファイルの実体（CLIではバイト列、Webでは `web_sys::File`）。

use crate::error::{ClassifyError, Error, Result};
use crate::parser::diagnose_response;
use crate::types::{ClassifyResponse, Diagnosis};
use crate::ANALYSIS_ERROR_MESSAGE;

/// 選択中の画像
#[derive(Debug, Clone)]
pub struct SelectedImage<F> {
    pub selection_id: u64,
    pub file_name: String,
    pub file: F,
    /// 選択欄のプレビュー（Data URL）
    pub preview_data_url: Option<String>,
    /// 結果表示用のURL
    pub object_url: Option<String>,
}

/// 送信中リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// セッションの段階
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Submitting { ticket: SubmitTicket },
    Result(Diagnosis),
    Error(String),
}

/// 表示する画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// 画像選択 + 送信ボタン
    Upload,
    /// 読込中
    Loading,
    /// 診断結果
    Result,
    /// エラー文言（ラベルの位置に表示）
    Error,
}

#[derive(Debug, Clone)]
pub struct UploadSession<F> {
    selected: Option<SelectedImage<F>>,
    phase: Phase,
    next_selection_id: u64,
    next_ticket: u64,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadSession<F> {
    pub fn new() -> Self {
        Self {
            selected: None,
            phase: Phase::Idle,
            next_selection_id: 1,
            next_ticket: 1,
        }
    }

    /// 画像を選択する
    ///
    /// 以前の選択はプレビューごと置き換わる。置き換えた選択を返すので、
    /// 呼び出し側でObject URLの解放などを行う。
    pub fn select_image(
        &mut self,
        file: F,
        file_name: impl Into<String>,
    ) -> (u64, Option<SelectedImage<F>>) {
        let selection_id = self.next_selection_id;
        self.next_selection_id += 1;

        let replaced = self.selected.replace(SelectedImage {
            selection_id,
            file_name: file_name.into(),
            file,
            preview_data_url: None,
            object_url: None,
        });

        (selection_id, replaced)
    }

    /// 非同期に読み込んだプレビューを反映
    ///
    /// 既に別の画像が選ばれていれば何もせず `false`
    pub fn attach_preview(&mut self, selection_id: u64, data_url: String) -> bool {
        match self.current_selection_mut(selection_id) {
            Some(selected) => {
                selected.preview_data_url = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// 結果表示用のURLを反映
    pub fn attach_object_url(&mut self, selection_id: u64, url: String) -> bool {
        match self.current_selection_mut(selection_id) {
            Some(selected) => {
                selected.object_url = Some(url);
                true
            }
            None => false,
        }
    }

    fn current_selection_mut(&mut self, selection_id: u64) -> Option<&mut SelectedImage<F>> {
        self.selected
            .as_mut()
            .filter(|s| s.selection_id == selection_id)
    }

    pub fn selected(&self) -> Option<&SelectedImage<F>> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match &self.phase {
            Phase::Result(diagnosis) => Some(diagnosis),
            _ => None,
        }
    }

    /// ラベル欄に表示する文字列（診断結果のラベルまたはエラー文言）
    pub fn result_label(&self) -> Option<&str> {
        match &self.phase {
            Phase::Result(diagnosis) => Some(&diagnosis.label),
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> View {
        match self.phase {
            Phase::Idle => View::Upload,
            Phase::Submitting { .. } => View::Loading,
            Phase::Result(_) => View::Result,
            Phase::Error(_) => View::Error,
        }
    }

    /// 送信を開始する
    ///
    /// 画像未選択なら `Error::NoFileSelected`、送信中なら `Error::AlreadySubmitting`。
    /// どちらの場合も状態は変わらない。
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.selected.is_none() {
            return Err(Error::NoFileSelected);
        }
        if self.is_submitting() {
            return Err(Error::AlreadySubmitting);
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::Submitting { ticket };
        Ok(ticket)
    }

    /// 送信結果を反映する
    ///
    /// 送信中のチケットと一致しない結果は捨てて `Error::StaleTicket` を返す。
    /// 失敗時は以前の診断結果を残さない。
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: std::result::Result<ClassifyResponse, ClassifyError>,
    ) -> Result<&Phase> {
        match self.phase {
            Phase::Submitting { ticket: current } if current == ticket => {}
            _ => return Err(Error::StaleTicket(ticket.id())),
        }

        self.phase = match outcome.map_err(Error::from).and_then(|r| diagnose_response(&r)) {
            Ok(diagnosis) => Phase::Result(diagnosis),
            Err(_) => Phase::Error(ANALYSIS_ERROR_MESSAGE.to_string()),
        };

        Ok(&self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prediction;

    fn response(name: &str, probability: f64) -> ClassifyResponse {
        ClassifyResponse {
            diseases: vec![Prediction { name: name.to_string(), probability }],
        }
    }

    #[test]
    fn test_initial_state() {
        let session: UploadSession<Vec<u8>> = UploadSession::new();
        assert_eq!(session.view(), View::Upload);
        assert!(session.selected().is_none());
        assert!(!session.is_submitting());
        assert!(session.result_label().is_none());
    }

    #[test]
    fn test_submit_without_file() {
        let mut session: UploadSession<Vec<u8>> = UploadSession::new();
        let result = session.begin_submit();
        assert!(matches!(result, Err(Error::NoFileSelected)));
        assert_eq!(session.phase(), &Phase::Idle);
    }

    #[test]
    fn test_submit_success_flow() {
        let mut session = UploadSession::new();
        session.select_image(vec![1u8, 2, 3], "leaf.jpg");

        let ticket = session.begin_submit().expect("送信開始失敗");
        assert_eq!(session.view(), View::Loading);
        assert!(session.result_label().is_none());

        session.complete(ticket, Ok(response("Rust", 0.87))).expect("反映失敗");
        assert_eq!(session.view(), View::Result);
        assert!(!session.is_submitting());

        let diagnosis = session.diagnosis().expect("診断結果なし");
        assert_eq!(diagnosis.label, "Rust");
        assert_eq!(diagnosis.headline(), "Rust, 87%");
        assert_eq!(diagnosis.record.map(|r| r.name), Some("rust"));
    }

    #[test]
    fn test_transport_failure_clears_previous_diagnosis() {
        let mut session = UploadSession::new();
        session.select_image("a", "a.jpg");

        let first = session.begin_submit().expect("送信開始失敗");
        session.complete(first, Ok(response("rust", 0.9))).expect("反映失敗");
        assert!(session.diagnosis().is_some());

        let second = session.begin_submit().expect("再送信失敗");
        session
            .complete(second, Err(ClassifyError::Transport("connection reset".into())))
            .expect("反映失敗");

        assert_eq!(session.view(), View::Error);
        assert_eq!(session.result_label(), Some(ANALYSIS_ERROR_MESSAGE));
        assert!(session.diagnosis().is_none());
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_empty_prediction_is_error() {
        let mut session = UploadSession::new();
        session.select_image("a", "a.jpg");
        let ticket = session.begin_submit().expect("送信開始失敗");
        session
            .complete(ticket, Ok(ClassifyResponse { diseases: vec![] }))
            .expect("反映失敗");
        assert_eq!(session.phase(), &Phase::Error(ANALYSIS_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_reject_overlapping_submit() {
        let mut session = UploadSession::new();
        session.select_image("a", "a.jpg");
        let ticket = session.begin_submit().expect("送信開始失敗");

        assert!(matches!(session.begin_submit(), Err(Error::AlreadySubmitting)));
        assert_eq!(session.phase(), &Phase::Submitting { ticket });
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut session = UploadSession::new();
        session.select_image("a", "a.jpg");
        let first = session.begin_submit().expect("送信開始失敗");
        session.complete(first, Ok(response("fungi", 0.4))).expect("反映失敗");

        let second = session.begin_submit().expect("再送信失敗");
        let late = session.complete(first, Ok(response("rust", 0.9)));
        assert!(matches!(late, Err(Error::StaleTicket(id)) if id == first.id()));
        assert_eq!(session.phase(), &Phase::Submitting { ticket: second });
    }

    #[test]
    fn test_select_twice_replaces_everything() {
        let mut session = UploadSession::new();
        let (first_id, replaced) = session.select_image("first", "first.jpg");
        assert!(replaced.is_none());
        assert!(session.attach_preview(first_id, "data:image/jpeg;base64,AAA".into()));
        assert!(session.attach_object_url(first_id, "blob:first".into()));

        let (second_id, replaced) = session.select_image("second", "second.png");
        let replaced = replaced.expect("置き換え対象なし");
        assert_eq!(replaced.file, "first");
        assert_eq!(replaced.object_url.as_deref(), Some("blob:first"));

        let selected = session.selected().expect("選択なし");
        assert_eq!(selected.selection_id, second_id);
        assert_eq!(selected.file, "second");
        assert_eq!(selected.file_name, "second.png");
        assert!(selected.preview_data_url.is_none());
        assert!(selected.object_url.is_none());

        // 古い選択のプレビューが後から届いても反映しない
        assert!(!session.attach_preview(first_id, "data:image/jpeg;base64,OLD".into()));
        assert!(session.selected().and_then(|s| s.preview_data_url.as_ref()).is_none());
    }

    #[test]
    fn test_unmatched_label_renders_blank_details() {
        let mut session = UploadSession::new();
        session.select_image("a", "a.jpg");
        let ticket = session.begin_submit().expect("送信開始失敗");
        session.complete(ticket, Ok(response("unknown", 0.5))).expect("反映失敗");

        let diagnosis = session.diagnosis().expect("診断結果なし");
        assert_eq!(diagnosis.headline(), "Unknown, 50%");
        assert!(diagnosis.record.is_none());
        assert_eq!(diagnosis.description(), "");
    }
}
