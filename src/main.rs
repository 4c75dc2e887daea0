// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};

use moneynote::clock::Clock;
use moneynote::config::Settings;
use moneynote::session::Session;
use moneynote::{cli, logging, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let settings = Settings::load(matches.get_one::<PathBuf>("config").map(|p| p.as_path()))?;
    let filter = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| settings.log_level.clone());
    logging::init(&filter);

    let clock = match matches.get_one::<String>("today") {
        Some(d) => Clock::Fixed(utils::parse_date(d)?),
        None => Clock::System,
    };

    let mut session = Session::new(settings, clock);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.get_one::<PathBuf>("script") {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Open script {}", path.display()))?;
            session.run(BufReader::new(f), &mut out, false)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = !matches.get_flag("no-prompt") && stdin.is_terminal();
            session.run(stdin.lock(), &mut out, prompt)?;
        }
    }
    Ok(())
}
