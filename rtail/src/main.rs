// Copyright (C) 2024 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[macro_use]
extern crate tracing;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter},
    process::ExitCode,
};

use anyhow::{Context, Result};
use rtail_buffer::{tail, TailError, TailSummary};
use rtail_common::args::{Args, Input};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;

fn init_logging() {
    // use env for filtering
    // example
    // RUST_LOG=rtail_buffer=debug rtail -n 5 some.log

    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);
    // stdout carries the lines themselves, so logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_line_number(true)
        .compact();
    subscriber.with(fmt_layer).init();
}

fn open_input(input: &Input) -> Result<Box<dyn BufRead>> {
    match input {
        Input::Stdin => Ok(Box::new(io::stdin().lock())),
        Input::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open file \"{}\"", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn run(args: &Args) -> Result<TailSummary> {
    let mut reader = open_input(&args.input)?;
    let mut writer = BufWriter::new(io::stdout().lock());

    // Counts past the address space can never be allocated anyway.
    let lines = usize::try_from(args.lines).unwrap_or(usize::MAX);

    let summary = tail(&mut *reader, &mut writer, lines, |warning| {
        eprintln!("WARNING: {warning}");
    })
    .with_context(|| format!("Could not tail {}", args.input))?;

    Ok(summary)
}

fn main() -> ExitCode {
    init_logging();

    trace!("Starting rtail");

    let args = match Args::parse(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.show_help {
        print!("{}", Args::help(std::env::args().next().as_deref()));
        return ExitCode::SUCCESS;
    }

    if args.lines == 0 {
        debug!("Nothing to print");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(summary) => {
            debug!("Finished: {summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e
                .downcast_ref::<TailError>()
                .is_some_and(TailError::is_broken_pipe)
            {
                debug!("Output closed early");
                return ExitCode::SUCCESS;
            }

            eprintln!("ERROR: {}", error::backtraced_err(&*e));
            ExitCode::FAILURE
        }
    }
}
