use anyhow::{Context, Result};
use log::info;

use crate::entry_args::EntryArgs;
use crate::form::{SubmissionSink, SubmitOutcome, TimeEntryForm};

/// `submit`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct SubmitArgs {
    #[clap(flatten)]
    pub entry: EntryArgs,
}

pub struct SubmitCommand<'a, S: SubmissionSink> {
    sink: &'a mut S,
}

impl<'a, S: SubmissionSink> SubmitCommand<'a, S> {
    /// 新しい`SubmitCommand`を返す。
    ///
    /// # Arguments
    /// * `sink` - 受理されたレコードを受け取るsink
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// `submit`サブコマンドの処理を行う。
    ///
    /// 指定されたオプションを編集イベントとしてformに適用してsubmitし、
    /// 受理または拒否の結果を返す。結果の表示は呼び出し側の責務とする。
    ///
    /// # Arguments
    ///
    /// * `submit` - `submit`サブコマンドの引数
    pub fn run(&mut self, submit: SubmitArgs) -> Result<SubmitOutcome> {
        let mut form = TimeEntryForm::new(&mut *self.sink);
        for (field, value) in submit.entry.edits() {
            form.edit(field, value);
        }

        let outcome = form
            .submit()
            .context("Failed to submit the time entry")?;

        match &outcome {
            SubmitOutcome::Accepted(record) => {
                info!("Time entry submitted successfully.");
                if let Some(minutes) = record.duration_minutes() {
                    info!("Captured {} minutes on project: {}", minutes, record.project);
                }
            }
            SubmitOutcome::Rejected(errors) => {
                info!("Time entry rejected with {} validation error(s).", errors.len());
            }
        }

        Ok(outcome)
    }
}
