use once_cell::sync::Lazy;
use regex::Regex;

use crate::draft::{EntryDraft, EntryField};
use crate::time_entry::{minutes_since_midnight, TimeEntryRecord};

/// 24時間表記のHH:MM形式にマッチするパターン。1桁の時も許容する。
static TIME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$")
        .expect("Failed to compile time format pattern")
});

const FIELD_COUNT: usize = EntryField::ALL.len();

/// フィールドごとの検証エラーメッセージを保持する構造体。
///
/// 走査は追加順ではなく、常にフィールドの宣言順となる。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorSet {
    messages: [Vec<String>; FIELD_COUNT],
}

impl ErrorSet {
    /// 指定されたフィールドにエラーメッセージを追加する。
    pub fn push(&mut self, field: EntryField, message: impl Into<String>) {
        self.messages[field as usize].push(message.into());
    }

    /// エラーが1件もないかどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.messages.iter().all(|messages| messages.is_empty())
    }

    /// エラーメッセージの総数を返す。
    pub fn len(&self) -> usize {
        self.messages.iter().map(|messages| messages.len()).sum()
    }

    /// 指定されたフィールドのエラーメッセージ一覧を返す。
    pub fn messages_for(&self, field: EntryField) -> &[String] {
        &self.messages[field as usize]
    }

    /// 指定されたフィールドの先頭のエラーメッセージを返す。
    pub fn first_message(&self, field: EntryField) -> Option<&str> {
        self.messages[field as usize].first().map(String::as_str)
    }

    /// フィールド宣言順に(フィールド, メッセージ)の組を走査する。
    pub fn iter(&self) -> impl Iterator<Item = (EntryField, &str)> + '_ {
        EntryField::ALL.into_iter().flat_map(|field| {
            self.messages[field as usize]
                .iter()
                .map(move |message| (field, message.as_str()))
        })
    }
}

/// draftを検証し、検証済みレコードまたはエラー一覧を返す。
///
/// 全フィールドのルールを独立に評価するため、複数のエラーが同時に報告される。
/// 開始・終了時刻の前後関係は、両方がHH:MM形式を満たす場合のみ
/// 0時からの経過分に変換して比較し、違反はendTimeのエラーとして報告する。
/// レコードの値はdraftの文字列をそのまま引き継ぐ。
pub fn validate(draft: &EntryDraft) -> Result<TimeEntryRecord, ErrorSet> {
    let mut errors = ErrorSet::default();

    if draft.employee_name.chars().count() < 2 {
        errors.push(
            EntryField::EmployeeName,
            "Employee name must be at least 2 characters long",
        );
    }
    if draft.project.is_empty() {
        errors.push(EntryField::Project, "Project/Task is required");
    }
    if draft.date.is_empty() {
        errors.push(EntryField::Date, "Date is required");
    }

    let start_matches = TIME_FORMAT.is_match(&draft.start_time);
    if !start_matches {
        errors.push(EntryField::StartTime, "Invalid start time format (HH:MM)");
    }
    let end_matches = TIME_FORMAT.is_match(&draft.end_time);
    if !end_matches {
        errors.push(EntryField::EndTime, "Invalid end time format (HH:MM)");
    }

    if draft.notes.chars().count() > 500 {
        errors.push(EntryField::Notes, "Notes cannot exceed 500 characters");
    }

    if start_matches && end_matches {
        let start = minutes_since_midnight(&draft.start_time);
        let end = minutes_since_midnight(&draft.end_time);
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.push(EntryField::EndTime, "End time must be after start time");
            }
        }
    }

    if errors.is_empty() {
        Ok(TimeEntryRecord::from_draft(draft))
    } else {
        Err(errors)
    }
}
