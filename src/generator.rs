/*
 * Description: The contract every pluggable output generator satisfies.
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

//! The contract every pluggable output generator satisfies.

use crate::{context::Context, descriptor::Descriptor, error::GenerateError, sink::Sink};

/// A unit which writes output into a sink from its attributes.
///
/// Implementing this trait is what marks a type as a generator. Its arity and evaluation mode
/// are declared through [`Self::DESCRIPTOR`].
pub trait Generator {
  /// The attribute(s) consumed by one invocation.
  type Attribute: ?Sized;
  /// The unit written to the sink.
  type Output;

  /// Compile-time shape of this generator.
  const DESCRIPTOR: Descriptor;

  /// Write output for `value` into `sink`.
  ///
  /// Stops at the first rejected write. Anything written before that stays written.
  fn generate<S, C>(&self, sink: &mut S, value: &Self::Attribute, context: &C) -> Result<(), GenerateError>
  where
    S: Sink<WriteChunk = Self::Output> + ?Sized,
    C: Context + ?Sized;

  /// Like [`Self::generate`], but only report whether every write succeeded.
  ///
  ///```
  /// use grammar_generator::{Generator, NullContext, REVERSE, sink::Bounded};
  ///
  /// assert!(REVERSE.generates(&mut String::new(), "ab", &NullContext));
  /// assert!(!REVERSE.generates(&mut Bounded::new(String::new(), 1), "ab", &NullContext));
  ///```
  fn generates<S, C>(&self, sink: &mut S, value: &Self::Attribute, context: &C) -> bool
  where
    S: Sink<WriteChunk = Self::Output> + ?Sized,
    C: Context + ?Sized,
  {
    self.generate(sink, value, context).is_ok()
  }
}
