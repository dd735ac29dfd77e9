use serde::Serialize;

use crate::draft::EntryDraft;

/// 検証を通過したtime entryを表す構造体。
///
/// 各フィールドの値はdraftの文字列をそのまま引き継ぐ。
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRecord {
    pub employee_name: String,
    pub project: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

impl TimeEntryRecord {
    /// draftの値をそのまま引き継いだレコードを作成する。
    pub(crate) fn from_draft(draft: &EntryDraft) -> Self {
        Self {
            employee_name: draft.employee_name.clone(),
            project: draft.project.clone(),
            date: draft.date.clone(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            notes: draft.notes.clone(),
        }
    }

    /// 開始から終了までの経過分を返す。
    ///
    /// 時刻が解釈できない場合や終了が開始より前の場合は`None`を返す。
    pub fn duration_minutes(&self) -> Option<u32> {
        let start = minutes_since_midnight(&self.start_time)?;
        let end = minutes_since_midnight(&self.end_time)?;

        end.checked_sub(start)
    }
}

/// HH:MM形式の文字列を0時からの経過分に変換する。
///
/// 24時間表記の範囲外や形式不正の場合は`None`を返す。
pub(crate) fn minutes_since_midnight(value: &str) -> Option<u32> {
    let (hour, minute) = value.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}
