use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tystrings::TextEncoding;
use tystrings_cli::generate::{GenerateOptions, run_generate_command};
use tystrings_cli::lint::run_lint_command;
use tystrings_cli::translate::{TranslateCommandOptions, run_translate_command};
use tystrings_cli::validation::{
    validate_existing_path, validate_language_code, validate_source_file,
};
use tystrings_cli::{Config, ExitStatus, init_logger};

#[derive(Parser, Debug)]
#[command(name = "tystrings", author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./tystrings.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    commands: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Show more debugging information
    #[arg(short, long)]
    verbose: bool,

    /// Read and write strings files as UTF-8 instead of UTF-16
    #[arg(long)]
    utf8: bool,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate `Localizable.strings` from source files, keeping existing translations.
    Generate {
        /// Source files (.m, .c, .swift)
        #[arg(required = true, value_name = "FILE", value_parser = validate_source_file)]
        files: Vec<PathBuf>,

        /// Place output files in these directories
        #[arg(short, long, num_args = 1.., value_name = "DIR")]
        output: Vec<PathBuf>,

        /// Additional localization routines, like `NSLocalizedString`
        #[arg(short, long, num_args = 1..)]
        aliases: Vec<String>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Translate a `.strings` file with Baidu Translate.
    Translate {
        /// Source `.strings` file
        #[arg(value_parser = validate_existing_path)]
        source: PathBuf,

        /// Destination, a file or directory
        destination: PathBuf,

        /// Destination language
        #[arg(long, value_parser = validate_language_code)]
        dst_lang: String,

        /// Source language (detected when omitted)
        #[arg(short, long, value_parser = validate_language_code)]
        src_lang: Option<String>,

        /// Baidu Translate app id
        #[arg(long, env = "TYSTRINGS_BAIDU_APPID", hide_env_values = true)]
        appid: Option<String>,

        /// Baidu Translate secret key
        #[arg(long, env = "TYSTRINGS_BAIDU_SECRET", hide_env_values = true)]
        secret: Option<String>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Check a `.strings` file for duplicate keys.
    Lint {
        /// The `.strings` file
        #[arg(value_parser = validate_existing_path)]
        file: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

fn run(cli: Cli) -> Result<ExitStatus, String> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.commands {
        Commands::Generate {
            files,
            output,
            aliases,
            common,
        } => {
            let logger = init_logger(common.verbose);
            run_generate_command(
                GenerateOptions {
                    files,
                    outputs: output,
                    aliases,
                    encoding: TextEncoding::from_utf8_flag(common.utf8),
                },
                &config,
                &logger,
            )
        }
        Commands::Translate {
            source,
            destination,
            dst_lang,
            src_lang,
            appid,
            secret,
            common,
        } => {
            let logger = init_logger(common.verbose);
            run_translate_command(
                TranslateCommandOptions {
                    source,
                    destination,
                    dst_lang,
                    src_lang,
                    encoding: TextEncoding::from_utf8_flag(common.utf8),
                    appid,
                    secret,
                },
                &config,
                &logger,
            )
        }
        Commands::Lint { file, common } => {
            let logger = init_logger(common.verbose);
            run_lint_command(&file, TextEncoding::from_utf8_flag(common.utf8), &logger)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitStatus::Failure.into()
        }
    }
}
