#![warn(clippy::uninlined_format_args)]
#![warn(clippy::string_add_assign)]
#![warn(clippy::ref_option_ref)]
#![warn(clippy::option_as_ref_cloned)]
#![warn(clippy::assigning_clones)]
#![warn(clippy::inefficient_to_string)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::len_without_is_empty)]

mod actions;
mod app;
mod cli;
mod components;
mod settings;
mod structs;
mod term;
mod theme;
mod toml;
mod ui;

use std::{error::Error, io::stdout, thread};

use colored::{Color, Colorize};
use flexi_logger::{DeferredNow, FileSpec, Logger, WriteMode, style};
use log::{Record, debug, info};

use crate::{cli::cli, term::reset_terminal};

pub fn log_format(w: &mut dyn std::io::Write, now: &mut DeferredNow, record: &Record) -> Result<(), std::io::Error> {
    write!(w, "{}   ", now.format("%-l:%M:%S%P"))?;

    let level = format!("{: <8}", record.level());
    write!(w, "{}", style(record.level()).paint(level))?;

    write!(w, "{: <16}", thread::current().name().unwrap_or("<unnamed>"),)?;

    let target = record.target().to_string();

    let color = if target.starts_with("songbook") {
        Color::Green
    } else if target.starts_with("::") {
        Color::Blue
    } else {
        Color::Black
    };

    write!(w, "{:28}", truncate_target(&target).color(color))?;

    write!(w, "{}", record.args())?;
    Ok(())
}

fn truncate_target(target: &str) -> String {
    target.chars().take(25).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    cli();

    let _logger = Logger::try_with_str("songbook=trace,::=trace, warn")?
        .format(log_format)
        .log_to_file(FileSpec::default().suppress_timestamp())
        .write_mode(WriteMode::Direct)
        .use_utc()
        .start()?;

    info!("Starting");

    set_panic_hook();

    if let Err(err) = app::run() {
        log::error!("app::run error :( \n{err:#?}");
    }

    debug!("Resetting terminal");
    reset_terminal(&mut stdout());

    info!("Bye");
    Ok(())
}

fn set_panic_hook() {
    debug!("set_panic_hook");
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // intentionally ignore errors here since we're already in a panic
        reset_terminal(&mut stdout());
        original_hook(panic_info);
    }));
}
