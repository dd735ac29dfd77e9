use std::io::Write;

use anyhow::{Context, Result};

use crate::form::SubmissionSink;
use crate::time_entry::TimeEntryRecord;
use crate::validate::ErrorSet;

/// Consoleに検証エラーを表示するためのtrait。
pub trait ErrorPresenter {
    /// 検証エラーの一覧を表示する。
    ///
    /// # Arguments
    ///
    /// * `errors` - 表示する検証エラー
    fn show_errors(&mut self, errors: &ErrorSet) -> Result<()>;
}

/// 検証エラーをMarkdownのlist形式で表示する。
pub struct ConsoleErrorList<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleErrorList<'a, W> {
    /// 新しい`ConsoleErrorList`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> ErrorPresenter for ConsoleErrorList<'a, W> {
    // エラーをフィールド宣言順のlist形式で表示する。
    fn show_errors(&mut self, errors: &ErrorSet) -> Result<()> {
        for (field, message) in errors.iter() {
            writeln!(self.writer, "- {}: {}", field, message)
                .with_context(|| format!("Failed to write validation error for field: {}", field))?;
        }

        Ok(())
    }
}

/// 受理されたレコードを整形済みJSONとして書き出すsink。
pub struct JsonRecordSink<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> JsonRecordSink<'a, W> {
    /// 新しい`JsonRecordSink`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> SubmissionSink for JsonRecordSink<'a, W> {
    // レコードを1件ごとに整形済みJSONで書き出す。
    fn accept(&mut self, record: TimeEntryRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(&record)
            .with_context(|| format!("Failed to serialize time entry record: {:?}", record))?;
        writeln!(self.writer, "{}", json)
            .with_context(|| format!("Failed to write time entry record: {:?}", record))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::ConsoleErrorList;
    use super::ErrorPresenter;
    use super::JsonRecordSink;
    use crate::draft::EntryField;
    use crate::form::SubmissionSink;
    use crate::time_entry::TimeEntryRecord;
    use crate::validate::ErrorSet;

    /// 正常系のテスト。
    #[rstest]
    #[case::no_errors(dummy_errors(0), "")]
    #[case::single(dummy_errors(1), "- employeeName: Employee name must be at least 2 characters long\n")]
    #[case::declaration_order(
        dummy_errors(2),
        "- employeeName: Employee name must be at least 2 characters long\n- endTime: End time must be after start time\n"
    )]
    fn test_show_errors(#[case] errors: ErrorSet, #[case] expected: &str) {
        let mut writer = Vec::new();
        let mut presenter = ConsoleErrorList::new(&mut writer);

        presenter.show_errors(&errors).unwrap();

        assert_eq!(String::from_utf8(writer).unwrap(), expected);
    }

    /// レコードが元のフォームのフィールド名でJSON出力されることを確認する。
    #[test]
    fn test_accept_writes_record_as_json() {
        let record = TimeEntryRecord {
            employee_name: "Jane Doe".to_string(),
            project: "Acme".to_string(),
            date: "2024-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            notes: String::new(),
        };
        let mut writer = Vec::new();
        let mut sink = JsonRecordSink::new(&mut writer);

        sink.accept(record).unwrap();

        let output = String::from_utf8(writer).unwrap();
        assert!(output.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "employeeName": "Jane Doe",
                "project": "Acme",
                "date": "2024-05-01",
                "startTime": "09:00",
                "endTime": "17:00",
                "notes": "",
            })
        );
    }

    /// テスト用にダミーのErrorSetを作成する。
    fn dummy_errors(pattern: u8) -> ErrorSet {
        let mut errors = ErrorSet::default();
        match pattern {
            0 => {}
            1 => {
                errors.push(
                    EntryField::EmployeeName,
                    "Employee name must be at least 2 characters long",
                );
            }
            2 => {
                // 宣言順と逆に追加しても表示は宣言順になる
                errors.push(EntryField::EndTime, "End time must be after start time");
                errors.push(
                    EntryField::EmployeeName,
                    "Employee name must be at least 2 characters long",
                );
            }
            _ => panic!("Invalid pattern: {}", pattern),
        }
        errors
    }
}
