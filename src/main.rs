// Mollang: compile Mollang programs to C++ or run them directly

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use log::LevelFilter;

use mollang::interpreter::{run_source, StdConsole};
use mollang::toolchain::{self, Toolchain, DEFAULT_CXX, DEFAULT_STD};

#[derive(Parser)]
#[command(name = "mollang", version, about = "Mollang to C++ compiler")]
struct Cli {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Translate FILE.mol to FILE.cpp and build the executable FILE
    Build {
        file: PathBuf,

        /// Stop after writing the .cpp file
        #[arg(long)]
        emit_only: bool,

        /// C++ compiler to invoke
        #[arg(long, env = "MOLLANG_CXX", default_value = DEFAULT_CXX)]
        cxx: String,

        /// C++ language standard
        #[arg(long = "std", default_value = DEFAULT_STD)]
        standard: String,
    },

    /// Print the generated C++ (or write it to OUT)
    Emit {
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interpret a program without compiling it
    Run { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn execute(cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::Build {
            file,
            emit_only,
            cxx,
            standard,
        } => {
            if emit_only {
                let paths = toolchain::emit_cpp(&file)?;
                println!("{}", paths.cpp.display());
            } else {
                let paths = toolchain::build(&file, &Toolchain::new(cxx, standard))?;
                println!("{}", paths.executable.display());
            }
        }
        Cmd::Emit { file, output } => match output {
            Some(out) => toolchain::emit_cpp_to(&file, &out)?,
            None => {
                let source = read_source(&file)?;
                let code = mollang::translate(&source)?;
                io::stdout()
                    .lock()
                    .write_all(code.as_bytes())
                    .context("failed to write to stdout")?;
            }
        },
        Cmd::Run { file } => {
            let source = read_source(&file)?;
            run_source(&source, StdConsole)
                .with_context(|| format!("while running {}", file.display()))?;
        }
    }
    Ok(())
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read '{}'", file.display()))
}
