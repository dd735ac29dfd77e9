use std::fmt;

use crate::datetime;

/// フォームのフィールドを表す列挙型。
///
/// `ALL`の並びがフィールドの宣言順であり、エラー表示の順序にもなる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntryField {
    EmployeeName,
    Project,
    Date,
    StartTime,
    EndTime,
    Notes,
}

impl EntryField {
    /// 宣言順のフィールド一覧。
    pub const ALL: [Self; 6] = [
        Self::EmployeeName,
        Self::Project,
        Self::Date,
        Self::StartTime,
        Self::EndTime,
        Self::Notes,
    ];

    /// フィールド名を返す。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmployeeName => "employeeName",
            Self::Project => "project",
            Self::Date => "date",
            Self::StartTime => "startTime",
            Self::EndTime => "endTime",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 入力途中のtime entryを表す構造体。
///
/// 全フィールドは常に文字列として存在し、未入力は空文字列で表す。
#[derive(Clone, Debug, PartialEq)]
pub struct EntryDraft {
    pub employee_name: String,
    pub project: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

impl EntryDraft {
    /// 初期値で新しい`EntryDraft`を返す。
    ///
    /// dateには今日のローカル日付が設定され、その他のフィールドは空文字列となる。
    pub fn new() -> Self {
        Self {
            employee_name: String::new(),
            project: String::new(),
            date: datetime::today().format("%Y-%m-%d").to_string(),
            start_time: String::new(),
            end_time: String::new(),
            notes: String::new(),
        }
    }

    /// 指定されたフィールドの値を更新する。
    ///
    /// # Arguments
    ///
    /// * `field` - 更新するフィールド
    /// * `value` - 新しい値
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EntryField::EmployeeName => self.employee_name = value,
            EntryField::Project => self.project = value,
            EntryField::Date => self.date = value,
            EntryField::StartTime => self.start_time = value,
            EntryField::EndTime => self.end_time = value,
            EntryField::Notes => self.notes = value,
        }
    }

    /// 指定されたフィールドの値を返す。
    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::EmployeeName => &self.employee_name,
            EntryField::Project => &self.project,
            EntryField::Date => &self.date,
            EntryField::StartTime => &self.start_time,
            EntryField::EndTime => &self.end_time,
            EntryField::Notes => &self.notes,
        }
    }

    /// 全フィールドを初期値に戻す。
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::EntryDraft;
    use super::EntryField;
    use crate::datetime::mock_date;

    /// 初期値のdraftでdateのみ今日の日付が設定されることを確認する。
    #[test]
    fn test_new_defaults() {
        mock_date::set_mock_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let draft = EntryDraft::new();

        assert_eq!(draft.date, "2024-05-01");
        assert_eq!(draft.employee_name, "");
        assert_eq!(draft.project, "");
        assert_eq!(draft.start_time, "");
        assert_eq!(draft.end_time, "");
        assert_eq!(draft.notes, "");

        mock_date::clear_mock_today();
    }

    /// 各フィールドの更新が対象フィールドにのみ反映されることを確認する。
    #[rstest]
    #[case::employee_name(EntryField::EmployeeName)]
    #[case::project(EntryField::Project)]
    #[case::date(EntryField::Date)]
    #[case::start_time(EntryField::StartTime)]
    #[case::end_time(EntryField::EndTime)]
    #[case::notes(EntryField::Notes)]
    fn test_set_updates_single_field(#[case] field: EntryField) {
        let mut draft = EntryDraft::new();
        let before = draft.clone();

        draft.set(field, "value");

        assert_eq!(draft.get(field), "value");
        for other in EntryField::ALL {
            if other != field {
                assert_eq!(draft.get(other), before.get(other));
            }
        }
    }

    /// resetで全フィールドが初期値に戻ることを確認する。
    #[test]
    fn test_reset() {
        mock_date::set_mock_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let mut draft = EntryDraft::new();
        for field in EntryField::ALL {
            draft.set(field, "value");
        }

        draft.reset();

        assert_eq!(draft, EntryDraft::new());
        assert_eq!(draft.date, "2024-05-01");

        mock_date::clear_mock_today();
    }

    /// フィールド名が元のフォームのフィールド名と一致することを確認する。
    #[test]
    fn test_field_names() {
        let names: Vec<_> = EntryField::ALL.iter().map(|field| field.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "employeeName",
                "project",
                "date",
                "startTime",
                "endTime",
                "notes"
            ]
        );
    }
}
