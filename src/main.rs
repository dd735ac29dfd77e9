use std::io;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

mod check_command;
mod console;
mod datetime;
mod draft;
mod entry_args;
mod form;
mod submit_command;
mod time_entry;
mod validate;

use check_command::{check_command, CheckArgs};
use console::{ConsoleErrorList, ErrorPresenter, JsonRecordSink};
use form::SubmitOutcome;
use submit_command::{SubmitArgs, SubmitCommand};

/// time entryを検証して取り込むためのCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- submit -e "Jane Doe" -p Acme -s 09:00 --end 17:00
/// $ cargo run -- check -s 09:00 --end 08:00
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    Submit(SubmitArgs),
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logger().context("Failed to set up logger")?;

    match args.subcommand {
        SubCommands::Submit(submit) => {
            let mut stdout = io::stdout();
            let mut sink = JsonRecordSink::new(&mut stdout);
            let outcome = SubmitCommand::new(&mut sink).run(submit)?;
            if let SubmitOutcome::Rejected(errors) = outcome {
                let mut stderr = io::stderr();
                ConsoleErrorList::new(&mut stderr)
                    .show_errors(&errors)
                    .context("Failed to show validation errors")?;
                bail!("time entry rejected with {} validation error(s)", errors.len());
            }
        }
        SubCommands::Check(check) => check_command(check)?,
    }

    Ok(())
}

/// ロガーを初期化する。
fn setup_logger() -> Result<()> {
    let colors = fern::colors::ColoredLevelConfig::new();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(io::stderr())
        .apply()
        .context("Failed to apply logger settings")?;

    Ok(())
}
