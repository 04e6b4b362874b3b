// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Badger CLI entrypoint.
//!
//! Runs the interactive search box. On Enter the composed search URL is printed to stdout
//! (and opened with the system opener when `--open` is given).

use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use badger::api::{DemoSource, SuggestionSource, TypeaheadClient};
use badger::config::{Config, COOKIE_ENV, LOG_ENV};
use badger::controller::Controller;
use badger::tui::Navigation;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--cookie <cookie-string>] [--debounce-ms <ms>] [--open] [--log-file <path>]\n  {program} --demo [--debounce-ms <ms>] [--open] [--log-file <path>]\n\nType to get suggestions; `from: ` and `to: ` insert filter badges. Enter searches.\n\nThe session cookie string (must contain ct0 or gt) is read from --cookie or ${COOKIE_ENV}.\n--demo uses a built-in offline user list and cannot be combined with --cookie.\n--log-file enables logging (filter via ${LOG_ENV}, default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    open: bool,
    cookie: Option<String>,
    debounce_ms: Option<u64>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--open" => {
                if options.open {
                    return Err(());
                }
                options.open = true;
            }
            "--cookie" => {
                if options.cookie.is_some() {
                    return Err(());
                }
                options.cookie = Some(args.next().ok_or(())?);
            }
            "--debounce-ms" => {
                if options.debounce_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let ms: u64 = raw.parse().map_err(|_| ())?;
                options.debounce_ms = Some(ms);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                options.log_file = Some(args.next().ok_or(())?);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.cookie.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging(log_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    // The terminal UI owns stdout/stderr, so logs only go to an explicit file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err.to_string())?;
    Ok(())
}

fn run_tui<S: SuggestionSource>(
    runtime: &tokio::runtime::Runtime,
    controller: Controller,
    source: Arc<S>,
    debounce: Duration,
) -> Result<Option<Navigation>, Box<dyn Error>> {
    let handle = runtime.handle().clone();
    let navigation = runtime.block_on(async move {
        tokio::task::spawn_blocking(move || {
            badger::tui::run(controller, source, debounce, handle).map_err(|err| err.to_string())
        })
        .await
    })??;
    Ok(navigation)
}

fn open_in_browser(url: &str) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        std::process::Command::new("xdg-open")
    };
    command.arg(url).spawn()?;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "badger".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.log_file.as_deref())?;

        let mut config = if options.demo { Config::default() } else { Config::from_env() };
        if let Some(cookie) = options.cookie {
            config = config.with_cookie(cookie);
        }
        if let Some(ms) = options.debounce_ms {
            config = config.with_debounce(Duration::from_millis(ms));
        }
        config.validate()?;

        let controller = Controller::new(&config)?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let navigation = if options.demo {
            tracing::info!("starting with the demo suggestion source");
            run_tui(&runtime, controller, Arc::new(DemoSource::default()), config.debounce)?
        } else {
            let client = TypeaheadClient::new(&config).map_err(|err| err.to_string())?;
            run_tui(&runtime, controller, Arc::new(client), config.debounce)?
        };

        let Some(navigation) = navigation else {
            return Ok(());
        };
        println!("{}", navigation.url);
        if options.open {
            open_in_browser(&navigation.url)?;
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("badger: {err}");
        std::process::exit(1);
    }
}
