use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use country_club_reports::config::Settings;
use country_club_reports::{run_all, ReportDatabase};
use tracing::info;

fn main() -> ExitCode {
    let settings = Settings::parse();
    settings.logging.init();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    info!(database = %settings.database.display(), "country-club-reports starting");

    let db = ReportDatabase::open(&settings.database)?;
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_all(&db, settings.format, &mut out)?;
    }
    db.close()?;

    Ok(())
}
