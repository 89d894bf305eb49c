/*
 * Description: Errors raised while generating output.
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

//! Errors raised while generating output.

use crate::descriptor::UniqueDescriptor;

use displaydoc::Display;
use thiserror::Error;

use std::io;

/// A sink rejected a write.
#[derive(Debug, Display, Error)]
pub enum SinkError {
  /// sink was closed
  Closed,
  /// sink is full (capacity {0})
  Full(usize),
  /// i/o error writing to sink: {0}
  Io(#[from] io::Error),
}

/// Generation stopped before all output was written.
#[derive(Debug, Display, Error)]
pub enum GenerateError {
  /// failed to write output chunk {index} of {len}: {source}
  Sink {
    /// Position of the rejected chunk in the output sequence.
    index: usize,
    /// Number of chunks the generator meant to write.
    len: usize,
    /// Why the sink refused.
    #[source]
    source: SinkError,
  },
}

/// Invalid use of a [`Registry`](crate::Registry).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// generator {0} was already registered
  Duplicate(UniqueDescriptor),
  /// generator {0} was never registered
  Unknown(UniqueDescriptor),
}
