use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

use field_offsets::{write_offsets, ReportError};

fn run() -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_offsets(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
