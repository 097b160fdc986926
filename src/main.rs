use clap::{Parser, Subcommand};
use conversor::core::config;
use conversor::{Conversion, Mode, Unit, format_value, sanitize};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "conversor", about = "Speed and temperature converter")]
struct Args {
    /// Unit family to start in (overrides config and CONVERSOR_MODE)
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Log level written to conversor.log
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one value and print the result
    Convert {
        /// Value to convert; filtered like typed input
        value: String,
        #[arg(long, value_enum)]
        from: Unit,
        #[arg(long, value_enum)]
        to: Unit,
    },
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse()
        .map_err(|_| format!("unknown log level {raw:?} (off, error, warn, info, debug, trace)"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to conversor.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("conversor.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    match args.command {
        Some(Command::Convert { value, from, to }) => convert_once(&value, from, to),
        None => run_tui(args.mode),
    }
}

fn convert_once(value: &str, from: Unit, to: Unit) -> ExitCode {
    let conversion = match Conversion::from_units(from, to) {
        Ok(conversion) => conversion,
        Err(e) => {
            log::warn!("Rejected conversion: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let input = sanitize(value);
    let output = conversion.apply(&input).map(format_value).unwrap_or_default();
    log::info!("One-shot {:?}: {:?} -> {:?}", conversion, input, output);
    println!("{output}");
    ExitCode::SUCCESS
}

fn run_tui(cli_mode: Option<Mode>) -> ExitCode {
    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::ConversorConfig::default()
    });
    let resolved = config::resolve(&file_config, cli_mode);
    log::info!("Conversor starting with {:?}", resolved);

    match conversor::tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
