/*
 * Description: Print a string reversed by the reversal generator.
 *
 * Copyright (C) 2022-2023 Danny McClanahan <dmcC2@hypnicjerk.ai>
 * SPDX-License-Identifier: LGPL-3.0-or-later
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Lesser General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Print a string reversed by the reversal generator.

#![deny(clippy::all)]

use grammar_generator::{
  error::{GenerateError, SinkError},
  sink::{Bounded, Sink, WriteSink},
  Generator, NullContext, REVERSE,
};

use clap::Parser;
use displaydoc::Display;
use thiserror::Error;
use tracing::debug;

use std::{io, process};

#[derive(Parser)]
#[command(name = "reverse-demo")]
#[command(about = "Write a string to stdout back to front")]
struct Cli {
  /// Text to reverse
  #[arg(default_value = "John Doe")]
  input: String,

  /// Reject output after this many characters
  #[arg(long)]
  capacity: Option<usize>,
}

#[derive(Debug, Display, Error)]
enum DemoError {
  /// {0}
  Generate(#[from] GenerateError),
  /// failed to terminate output: {0}
  Output(#[from] SinkError),
}

fn run(Cli { input, capacity }: Cli) -> Result<(), DemoError> {
  debug!(%input, ?capacity, "starting");
  let stdout = io::stdout();
  let mut sink = WriteSink::new(stdout.lock());
  let generated = match capacity {
    Some(capacity) => REVERSE.generate(&mut Bounded::new(&mut sink, capacity), &input, &NullContext),
    None => REVERSE.generate(&mut sink, &input, &NullContext),
  };
  /* Terminate the line even after a partial write. */
  let terminated = sink.write_one('\n').and_then(|()| sink.flush());
  generated?;
  terminated?;
  Ok(())
}

fn main() {
  if let Err(e) = run(Cli::parse()) {
    eprintln!("Failed!: {}", e);
    process::exit(1);
  }
}
