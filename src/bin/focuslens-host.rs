//! Native messaging host for focuslens.
//!
//! Serves the operation registry over stdin/stdout using length-prefixed
//! JSON frames. `--call` and `--list` answer once and exit instead.

use clap::Parser;
use focuslens_lib::{
    config::HostConfig,
    constants::DEFAULT_PROC_ROOT,
    inspector::Inspector,
    native_host::NativeHost,
    operations::{method_names, Operation},
};
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "focuslens-host")]
#[command(version)]
#[command(about = "Reports the focused window, its process and application context", long_about = None)]
struct Args {
    /// Directory holding per-process records
    #[arg(long, env = "FOCUSLENS_PROC_ROOT", value_name = "DIR", default_value = DEFAULT_PROC_ROOT)]
    proc_root: PathBuf,

    /// Largest frame accepted or sent, capped at 1 MiB
    #[arg(long, value_name = "BYTES")]
    max_message_size: Option<usize>,

    /// Invoke one operation, print its result and exit
    #[arg(long, value_name = "METHOD", conflicts_with = "list")]
    call: Option<String>,

    /// Print every operation name and exit
    #[arg(long)]
    list: bool,
}

fn print_line(line: &str) -> ExitCode {
    match writeln!(io::stdout().lock(), "{line}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Writing to stdout failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    // stdout carries protocol frames, so logs go to stderr (RUST_LOG)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let mut config = HostConfig::default().with_proc_root(args.proc_root);
    if let Some(max) = args.max_message_size {
        config = config.with_max_message_size(max);
    }

    if args.list {
        return print_line(&method_names().join("\n"));
    }

    let inspector = Inspector::native(&config);

    if let Some(method) = args.call {
        let Some(op) = Operation::from_method(&method) else {
            error!("Unknown method: {method}");
            return ExitCode::FAILURE;
        };
        return print_line(&op.invoke(&inspector));
    }

    info!("Starting native host with records under {}", config.proc_root.display());
    let host = NativeHost::new(inspector, config.max_message_size);
    match host.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Native host error: {e}");
            ExitCode::FAILURE
        }
    }
}
