use crate::draft::EntryField;

/// time entryの各フィールドを指定するための共通オプション。
///
/// 指定されなかったフィールドは編集イベントにならず、初期値のまま残る。
#[derive(Debug, clap::Args)]
pub struct EntryArgs {
    #[clap(
        short = 'e',
        long = "employee",
        help = "Employee name (at least 2 characters)"
    )]
    pub employee: Option<String>,

    #[clap(short = 'p', long = "project", help = "Project or task name")]
    pub project: Option<String>,

    #[clap(
        short = 'd',
        long = "date",
        help = "Entry date in the format YYYY-MM-DD (defaults to today)"
    )]
    pub date: Option<String>,

    #[clap(short = 's', long = "start", help = "Start time in the format HH:MM")]
    pub start: Option<String>,

    #[clap(long = "end", help = "End time in the format HH:MM")]
    pub end: Option<String>,

    #[clap(
        short = 'n',
        long = "notes",
        help = "Optional notes (up to 500 characters)"
    )]
    pub notes: Option<String>,
}

impl EntryArgs {
    /// 指定されたオプションを(フィールド, 値)の編集イベント列に変換する。
    pub fn edits(&self) -> Vec<(EntryField, String)> {
        let values = [
            (EntryField::EmployeeName, &self.employee),
            (EntryField::Project, &self.project),
            (EntryField::Date, &self.date),
            (EntryField::StartTime, &self.start),
            (EntryField::EndTime, &self.end),
            (EntryField::Notes, &self.notes),
        ];

        values
            .into_iter()
            .filter_map(|(field, value)| value.as_ref().map(|value| (field, value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::EntryArgs;
    use crate::draft::EntryField;

    /// オプションを指定しない場合に編集イベントが発生しないことを確認する。
    #[test]
    fn test_edits_empty() {
        let args = EntryArgs {
            employee: None,
            project: None,
            date: None,
            start: None,
            end: None,
            notes: None,
        };

        assert!(args.edits().is_empty());
    }

    /// 指定したオプションのみが宣言順の編集イベントになることを確認する。
    #[test]
    fn test_edits_partial() {
        let args = EntryArgs {
            employee: Some("Jane Doe".to_string()),
            project: None,
            date: None,
            start: Some("09:00".to_string()),
            end: None,
            notes: None,
        };

        assert_eq!(
            args.edits(),
            vec![
                (EntryField::EmployeeName, "Jane Doe".to_string()),
                (EntryField::StartTime, "09:00".to_string()),
            ]
        );
    }
}
