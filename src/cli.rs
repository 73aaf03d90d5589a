// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::core::config::{self, DEFAULT_CONFIG_FILE, ReportConfig};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    match language_arg(&args) {
        Some(lang) => crate::resolve_locale(lang),
        // Fallback to system language detection
        None => crate::detect_locale(),
    }
}

/// Finds the value of `--lang <VALUE>` or `--lang=<VALUE>` in raw arguments.
/// 在原始参数中查找 `--lang <VALUE>` 或 `--lang=<VALUE>` 的值。
pub fn language_arg(args: &[String]) -> Option<&str> {
    args.iter().enumerate().find_map(|(pos, arg)| {
        if arg == "--lang" {
            args.get(pos + 1).map(String::as_str)
        } else {
            arg.strip_prefix("--lang=")
        }
    })
}

/// Arguments shared by the commands that produce a report.
fn report_args(command: Command, locale: &str) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value(DEFAULT_CONFIG_FILE)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(t!("cli.arg_output", locale = locale).to_string())
                .value_name("OUTPUT")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help(t!("cli.arg_title", locale = locale).to_string())
                .value_name("TITLE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("short-names")
                .long("short-names")
                .help(t!("cli.arg_short_names", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emit-assets")
                .long("emit-assets")
                .help(t!("cli.arg_emit_assets", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help(t!("cli.arg_quiet", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("spectra")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            report_args(
                Command::new("run").about(t!("cli.cmd_run_about", locale = locale).to_string()),
                locale,
            )
            .arg(
                Arg::new("command")
                    .help(t!("cli.arg_command", locale = locale).to_string())
                    .value_name("COMMAND")
                    .num_args(1..)
                    .last(true)
                    .action(ArgAction::Append),
            ),
        )
        .subcommand(
            report_args(
                Command::new("report")
                    .about(t!("cli.cmd_report_about", locale = locale).to_string()),
                locale,
            )
            .arg(
                Arg::new("input")
                    .short('i')
                    .long("input")
                    .help(t!("cli.arg_input", locale = locale).to_string())
                    .value_name("INPUT")
                    .default_value("-")
                    .value_parser(clap::value_parser!(PathBuf))
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("exit-status")
                    .long("exit-status")
                    .help(t!("cli.arg_exit_status", locale = locale).to_string())
                    .value_name("STATUS")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i32))
                    .action(ArgAction::Set),
            ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help(t!("cli.arg_init_path", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Loads the configuration named by `--config` and applies the command line
/// overrides on top of it.
fn resolve_config(matches: &ArgMatches, lang_override: Option<&String>) -> Result<ReportConfig> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = config::load_config_or_default(&config_path)?;

    if let Some(lang) = lang_override {
        config.language = lang.clone();
    }
    config.language = crate::resolve_locale(&config.language);

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = commands::report_path(output);
    }
    if let Some(title) = matches.get_one::<String>("title") {
        config.title = crate::models::normalize_title(title);
    }
    if matches.get_flag("short-names") {
        config.short_names = true;
    }
    if matches.get_flag("emit-assets") {
        config.emit_assets = true;
    }
    if matches.get_flag("quiet") {
        config.quiet = true;
    }
    Ok(config)
}

/// Parses the command line and dispatches to the selected command. The
/// returned exit code mirrors the host runner's, so a failing test run is
/// never masked by a successful report.
pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let lang_override = matches.get_one::<String>("lang");

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let config = resolve_config(run_matches, lang_override)?;
            let command = run_matches
                .get_many::<String>("command")
                .map(|parts| parts.cloned().collect::<Vec<_>>());
            let status = commands::run::execute(config, command).await?;
            Ok(ExitCode::from(clamp_exit_code(status)))
        }
        Some(("report", report_matches)) => {
            let config = resolve_config(report_matches, lang_override)?;
            let input = report_matches
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-"));
            let exit_status = report_matches.get_one::<i32>("exit-status").copied();
            let status = commands::report::execute(config, &input, exit_status)?;
            Ok(ExitCode::from(clamp_exit_code(status)))
        }
        Some(("init", init_matches)) => {
            let path = init_matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::execute(&path, force, non_interactive, &language)?;
            Ok(ExitCode::SUCCESS)
        }
        // `subcommand_required` makes clap print help and exit before this.
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Maps a host exit status onto the range a process can return.
fn clamp_exit_code(status: i32) -> u8 {
    u8::try_from(status).unwrap_or(1)
}
