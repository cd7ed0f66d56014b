use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use lexis::interpreter::{output::StdoutSink, session::Interpreter, value::Value};
use tracing_subscriber::EnvFilter;

/// lexis runs scripts of a small, runtime-typed console language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lexis to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last value of
    /// a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or
    /// `lexis=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// The script, or its path with `--file`. Without it, every line of
    /// standard input is run as its own unit.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let mut interpreter = Interpreter::new(StdoutSink);

    let Some(contents) = args.contents else {
        return run_lines(&mut interpreter, args.pipe_mode);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(error) => {
                eprintln!("Failed to read the input file '{contents}': {error}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if run_unit(&mut interpreter, &script, args.pipe_mode) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs every line of standard input as a unit, like a console would.
fn run_lines(interpreter: &mut Interpreter<StdoutSink>, pipe_mode: bool) -> ExitCode {
    let mut success = true;
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => success &= run_unit(interpreter, &line, pipe_mode),
            Err(error) => {
                eprintln!("Failed to read standard input: {error}");
                return ExitCode::FAILURE;
            },
        }
    }

    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Runs one unit and reports its errors. Returns `false` if anything failed.
fn run_unit(interpreter: &mut Interpreter<StdoutSink>, source: &str, pipe_mode: bool) -> bool {
    match interpreter.run(source) {
        Ok(result) => {
            if pipe_mode && let Some(value) = result.filter(|v| !matches!(v, Value::Null)) {
                println!("{value}");
            }
            let success = interpreter.is_success();
            interpreter.report_errors();
            success
        },
        Err(error) => {
            eprintln!("{error}");
            false
        },
    }
}
