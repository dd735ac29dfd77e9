use std::io;

use anyhow::{bail, Context, Result};
use log::info;

use crate::console::{ConsoleErrorList, ErrorPresenter};
use crate::draft::EntryDraft;
use crate::entry_args::EntryArgs;
use crate::validate::validate;

/// `check`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[clap(flatten)]
    pub entry: EntryArgs,
}

/// `check`サブコマンドの処理を行う。
///
/// sinkへ渡さずに検証だけを実行し、結果を表示する。
/// 指定されなかったフィールドは初期値のまま検証される。
///
/// # Arguments
///
/// * `check` - `check`サブコマンドの引数
pub fn check_command(check: CheckArgs) -> Result<()> {
    let mut draft = EntryDraft::new();
    for (field, value) in check.entry.edits() {
        draft.set(field, value);
    }

    match validate(&draft) {
        Ok(record) => {
            let json = serde_json::to_string_pretty(&record)
                .context("Failed to serialize time entry record")?;
            println!("{}", json);
            info!("Draft passed validation.");
        }
        Err(errors) => {
            let mut stdout = io::stdout();
            ConsoleErrorList::new(&mut stdout)
                .show_errors(&errors)
                .context("Failed to show validation errors")?;
            bail!("draft failed validation with {} error(s)", errors.len());
        }
    }

    Ok(())
}
