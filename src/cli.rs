// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{crate_version, value_parser, Arg, ArgAction, Command};

use crate::models::{MemoCategory, TxKind};

/// Arguments of the `moneynote` binary itself.
pub fn build_cli() -> Command {
    Command::new("moneynote")
        .version(crate_version!())
        .about("In-session income/expense ledger with budgets, statistics and analysis memos")
        .arg(
            Arg::new("config")
                .long("config")
                .env("MONEYNOTE_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (TOML)"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .short('s')
                .value_parser(value_parser!(PathBuf))
                .help("Run session commands from a file instead of stdin"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .help("Pin the session date (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Tracing filter, e.g. debug or moneynote=trace"),
        )
        .arg(
            Arg::new("no-prompt")
                .long("no-prompt")
                .action(ArgAction::SetTrue)
                .help("Do not print a prompt when reading stdin"),
        )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
    )
    .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue))
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("YYYY-MM-DD, defaults to today")
}

/// Commands accepted on each session line.
pub fn build_session_cli() -> Command {
    Command::new("moneynote")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .allow_negative_numbers(true)
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(PossibleValuesParser::new(TxKind::NAMES))
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").short('a'))
                        .arg(Arg::new("category").long("category").short('c'))
                        .arg(Arg::new("desc").long("desc").short('d'))
                        .arg(date_arg()),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Most recent transactions, newest date first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .conflicts_with("all"),
                        )
                        .arg(Arg::new("all").long("all").action(ArgAction::SetTrue)),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category spending ceilings")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .allow_negative_numbers(true)
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("memo")
                .about("Free-form analysis notes")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("content").long("content"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(PossibleValuesParser::new(MemoCategory::NAMES))
                                .default_value("general"),
                        )
                        .arg(date_arg()),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(json_flags(Command::new("list").arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(PossibleValuesParser::new(MemoCategory::NAMES)),
                ))),
        )
        .subcommand(json_flags(
            Command::new("stats").about("Totals, balance and transaction count"),
        ))
        .subcommand(
            Command::new("report")
                .about("Derived statistics")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("by-category")))
                .subcommand(json_flags(Command::new("trend").about("Expenses per day, last 30 days")))
                .subcommand(json_flags(Command::new("budget")))
                .subcommand(json_flags(Command::new("insights"))),
        )
        .subcommand(json_flags(
            Command::new("categories").about("Suggested category labels"),
        ))
        .subcommand(Command::new("help").about("Show this help"))
        .subcommand(Command::new("quit").alias("exit").about("End the session"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cli_is_consistent() {
        build_session_cli().debug_assert();
        build_cli().debug_assert();
    }
}
