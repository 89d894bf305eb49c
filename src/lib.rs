/*
 * Description: Pluggable output generators for grammars.
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

//! Pluggable output generators for grammars.
//!
//! A [`Generator`] consumes a fixed number of attributes and writes its output one chunk at a
//! time into a [`Sink`]. Each generator carries a [`Descriptor`] as an associated const, so a
//! composition engine can dispatch on its shape without inspecting it at runtime.
//!
//!```
//! use grammar_generator::{Generator, NullContext, REVERSE};
//!
//! let mut out = String::new();
//! REVERSE.generate(&mut out, "John Doe", &NullContext).unwrap();
//! assert!(out == "eoD nhoJ");
//!```

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
/* Make all doctests fail if they produce any warnings. */
#![doc(test(attr(deny(warnings))))]
#![deny(clippy::all)]

pub mod error;

/// Marker traits describing what flows through a stream-like object.
pub mod messaging {
  /// Something that accepts chunks of a single type.
  pub trait Writable {
    /// The unit accepted by each write.
    type WriteChunk;
  }
}

/// The opaque value threaded through every generator call.
pub mod context {
  /// Framework-defined state passed through a generator call.
  ///
  /// Generators may ignore it entirely; no methods are required.
  pub trait Context {}

  /// The empty context.
  #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
  pub struct NullContext;

  impl Context for NullContext {}
}

pub mod descriptor;
pub mod generator;
pub mod reverse;
pub mod sink;

pub use context::{Context, NullContext};
pub use descriptor::{Descriptor, Evaluation, Registry, UniqueDescriptor};
pub use generator::Generator;
pub use reverse::{StringReverseGenerator, REVERSE};
pub use sink::Sink;
