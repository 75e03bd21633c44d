// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use marea_app::AppState;
use runtime::FileRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `marea --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let table_path = options.table_path.or_else(|| config.table_path());
    let conversation_path = options
        .conversation_path
        .or_else(|| config.conversation_path());

    if options.check_only {
        if let Some(path) = &table_path {
            marea_data::load_table(path)?;
        }
        if let Some(path) = &conversation_path {
            marea_data::load_conversation(path)?;
        }
        return Ok(());
    }

    let mut state = AppState::default();
    state.theme = config.theme();
    state.active_view = config.start_view();

    let mut runtime = FileRuntime::new(
        table_path,
        conversation_path,
        config.sticky_header(),
        config.sort_icons(),
    );
    marea_tui::run_app(&mut state, &mut runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    table_path: Option<PathBuf>,
    conversation_path: Option<PathBuf>,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        table_path: None,
        conversation_path: None,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--table" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--table requires a JSON file path"))?;
                options.table_path = Some(PathBuf::from(value.as_ref()));
            }
            "--conversation" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--conversation requires a JSON file path"))?;
                options.conversation_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("marea");
    println!("  --config <path>          Use a specific config path");
    println!("  --table <path>           Load the orders table from a JSON file");
    println!("  --conversation <path>    Load the conversation from a JSON file");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and data files, then exit");
    println!("  --help                   Show this help");
}
