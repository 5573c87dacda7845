// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small CLI that drives [`BoundedArray`] through a few call sequences and prints what
//! happens. Run it with `cargo run --bin bounded_array_demo -- --help`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_bounded_array::{BoundedArray, BoundedArrayError, BoundedArrayResult, CombineOp,
                         DisplayPreference, TracingConfig, WriterConfig,
                         try_initialize_logging_global};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "bounded_array_demo")]
#[command(about = "Exercise a bounded array of integers in [-100, 100]", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help = true)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log rejected operations to stderr (and to a file if `--log-file` is set)"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "path",
        help = "Also write the log to this file"
    )]
    pub log_file: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Set a few values, render the array, then try to set an out of range value.
    Scenario,

    /// Scenario, followed by a read past the end of a smaller array.
    Demo,

    /// Combine two arrays element-wise.
    Combine {
        #[arg(long, value_enum, default_value_t = CLICombineOp::Add)]
        op: CLICombineOp,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, num_args = 0..)]
        lhs: Vec<i32>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, num_args = 0..)]
        rhs: Vec<i32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CLICombineOp {
    Add,
    Subtract,
}

impl From<CLICombineOp> for CombineOp {
    fn from(op: CLICombineOp) -> Self {
        match op {
            CLICombineOp::Add => CombineOp::Add,
            CLICombineOp::Subtract => CombineOp::Subtract,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        let display = WriterConfig::Display(DisplayPreference::Stderr);
        let writer_config = match cli_arg.global_options.log_file.clone() {
            Some(log_file) => display + WriterConfig::File(log_file),
            None => display,
        };
        try_initialize_logging_global(TracingConfig {
            writer_config,
            level_filter: LevelFilter::DEBUG,
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    match cli_arg.command {
        CLICommand::Scenario => run_scenario()?,
        CLICommand::Demo => {
            run_scenario()?;
            run_read_past_end();
        }
        CLICommand::Combine { op, lhs, rhs } => run_combine(op.into(), &lhs, &rhs)?,
    }

    Ok(())
}

fn run_scenario() -> miette::Result<()> {
    let mut array = BoundedArray::new(5);
    array.set_unchecked(0, 10)?;
    array.set_unchecked(1, -50)?;
    array.set_unchecked(2, 100)?;
    array.print();

    report(array.set_checked(3, 150));
    array.print();
    Ok(())
}

fn run_read_past_end() {
    let array = BoundedArray::new(3);
    report(array.get(5));
}

fn run_combine(op: CombineOp, lhs: &[i32], rhs: &[i32]) -> miette::Result<()> {
    let lhs = BoundedArray::try_from(lhs)?;
    let rhs = BoundedArray::try_from(rhs)?;
    match lhs.combine(&rhs, op) {
        Ok(result) => println!("{lhs} {op} {rhs} = {result}"),
        Err(error) => report::<()>(Err(error)),
    }
    Ok(())
}

/// Print a rejected operation the same way for both error kinds.
fn report<T>(result: BoundedArrayResult<T>) {
    match result {
        Ok(_) => {}
        Err(error @ BoundedArrayError::OutOfRange { .. }) => {
            println!("Range error: {error}");
        }
        Err(error @ BoundedArrayError::InvalidArgument { .. }) => {
            println!("Argument error: {error}");
        }
    }
}
