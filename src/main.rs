use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use smartlog::application::config::{AppConfig, ScanConfig};
use smartlog::application::error::{EXIT_FAILURE, RunError};
use smartlog::application::services::{Reporter, Session};
use smartlog::domain::ports::diagnostics::ScanError;
use smartlog::domain::ports::sink::LogSink;
use smartlog::domain::rules::ClassificationTables;
use smartlog::domain::value_objects::severity::Severity;
use smartlog::infrastructure::collectors::{DeviceScanner, SmartctlTool};
use smartlog::infrastructure::os::interrupt::install_interrupt_flag;
use smartlog::infrastructure::os::privilege::is_root;
use smartlog::infrastructure::sinks::{CompositeSink, LogFileSink, TerminalSink};
use smartlog::presentation::cli::app::{Cli, Commands};
use smartlog::presentation::cli::commands::config::{run_config_init, run_config_show};
use smartlog::presentation::cli::commands::devices::run_devices;
use smartlog::presentation::cli::commands::scan::run_scan;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_scanner(scan: &ScanConfig) -> Result<DeviceScanner, ScanError> {
    let scanner = DeviceScanner::new(&scan.device_root, &scan.device_prefix)?;
    if scan.devices.is_empty() {
        Ok(scanner)
    } else {
        Ok(scanner.with_devices(scan.devices.iter().map(PathBuf::from).collect()))
    }
}

fn emit(sink: &dyn LogSink, severity: Severity, message: &str) {
    if let Err(e) = sink.emit(severity, message) {
        tracing::warn!("Failed to emit {severity} message: {e}");
    }
}

fn scan(config: &AppConfig, json: bool) -> anyhow::Result<u8> {
    // Manual DI: main.rs is the only place that knows concrete types
    let mut sinks: Vec<Box<dyn LogSink>> = Vec::new();
    if !json {
        sinks.push(Box::new(TerminalSink::new(
            config.logging.verbosity(),
            config.logging.color,
        )));
    }
    let log_file_error = match LogFileSink::open(&config.logging.log_file) {
        Ok(file_sink) => {
            sinks.push(Box::new(file_sink));
            None
        }
        Err(e) => Some(e),
    };
    let sink = CompositeSink::new(sinks);
    let session = Session::new(&sink);

    if let Some(e) = log_file_error {
        emit(&sink, Severity::Warn, &e.to_string());
    }
    if !is_root() {
        emit(
            &sink,
            Severity::Warn,
            "not running as root; smartctl may be unable to query devices",
        );
    }

    let never = AtomicBool::new(false);
    let interrupt = install_interrupt_flag()
        .inspect_err(|e| tracing::warn!("Failed to install interrupt handler: {e}"))
        .ok();
    let cancel = interrupt.as_deref().unwrap_or(&never);

    let scanner = match build_scanner(&config.scan) {
        Ok(scanner) => scanner,
        Err(e) => {
            emit(&sink, Severity::Fatal, &e.to_string());
            return Ok(session.finish(&Err::<(), _>(RunError::from(e))));
        }
    };
    let tool = SmartctlTool::new(&config.scan.smartctl);
    let tables = ClassificationTables::standard();

    let mut reporter = Reporter::new(&scanner, &tool, &tables, &sink).with_cancel(cancel);
    if let Some(ref dir) = config.scan.scratch_dir {
        reporter = reporter.with_scratch_root(shellexpand::tilde(dir).into_owned());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Ok(run_scan(&reporter, session, json, &mut out))
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => AppConfig::config_path()?,
    };

    if let Some(Commands::Config { init: true }) = cli.command {
        run_config_init(&config_path, &mut std::io::stdout().lock())?;
        return Ok(0);
    }

    // An explicit --config must exist; the default location may be absent
    let mut config = if cli.config.is_some() {
        AppConfig::load_from(&config_path)?
    } else {
        AppConfig::load_or_default(&config_path)?
    };
    config.apply(&cli.overrides());

    if !config.logging.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Devices) => {
            let scanner = build_scanner(&config.scan)?;
            run_devices(&scanner, &mut std::io::stdout().lock())?;
            Ok(0)
        }
        Some(Commands::Config { .. }) => {
            run_config_show(&config, &mut std::io::stdout().lock())?;
            Ok(0)
        }
        Some(Commands::Scan { json, .. }) => scan(&config, json),
        None => scan(&config, false),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_tracing();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
