use anyhow::Result;

use crate::draft::{EntryDraft, EntryField};
use crate::time_entry::TimeEntryRecord;
use crate::validate::{validate, ErrorSet};

/// 受理されたレコードを受け取る外部sinkを表すtrait。
///
/// レコードの保存や送信といった後続処理はsinkの実装側の責務であり、
/// formはsubmit成功ごとにレコードを1件渡すだけで関与しない。
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// 検証を通過したレコードを1件受け取る。
    ///
    /// # Arguments
    ///
    /// * `record` - 受理されたレコード
    fn accept(&mut self, record: TimeEntryRecord) -> Result<()>;
}

/// formの状態を表す列挙型。
///
/// `Submitting`と`Success`はsubmit処理中のみ経由する一時状態で、
/// submitの完了後は`Editing`または`Failed`のいずれかに落ち着く。
#[derive(Clone, Debug, PartialEq)]
pub enum FormState {
    Editing,
    Submitting,
    Success,
    Failed(ErrorSet),
}

/// submitの結果を表す列挙型。
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Accepted(TimeEntryRecord),
    Rejected(ErrorSet),
}

/// time entryの入力を保持し、submit時に検証とsinkへの受け渡しを行うform。
///
/// 編集イベントではdraftの更新のみを行い、検証はsubmit時にまとめて実行する。
/// 前回のsubmitで報告されたエラーは、次のsubmitまで保持される。
pub struct TimeEntryForm<'a, S: SubmissionSink> {
    sink: &'a mut S,
    draft: EntryDraft,
    state: FormState,
}

impl<'a, S: SubmissionSink> TimeEntryForm<'a, S> {
    /// 初期値のdraftで新しい`TimeEntryForm`を返す。
    ///
    /// # Arguments
    ///
    /// * `sink` - 受理されたレコードを受け取るsink
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            draft: EntryDraft::new(),
            state: FormState::Editing,
        }
    }

    /// 指定されたフィールドの値を更新する。
    ///
    /// 検証は行わず、前回のsubmitで報告されたエラーもそのまま残る。
    pub fn edit(&mut self, field: EntryField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// 現在のdraftを検証し、成功時はレコードをsinkへ渡してdraftを初期値に戻す。
    ///
    /// 検証エラーはdataとして`SubmitOutcome::Rejected`で返し、`Err`にはならない。
    /// `Err`となるのはsinkがエラーを返した場合のみで、その際draftは維持される。
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.state = FormState::Submitting;

        match validate(&self.draft) {
            Ok(record) => {
                if let Err(err) = self.sink.accept(record.clone()) {
                    self.state = FormState::Editing;
                    return Err(err.context("Failed to hand the record to the submission sink"));
                }
                self.state = FormState::Success;
                self.draft.reset();
                self.state = FormState::Editing;

                Ok(SubmitOutcome::Accepted(record))
            }
            Err(errors) => {
                self.state = FormState::Failed(errors.clone());

                Ok(SubmitOutcome::Rejected(errors))
            }
        }
    }

    /// 現在のdraftを返す。
    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// 現在の状態を返す。
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 前回のsubmitで報告されたエラーを返す。
    pub fn errors(&self) -> Option<&ErrorSet> {
        match &self.state {
            FormState::Failed(errors) => Some(errors),
            _ => None,
        }
    }
}
