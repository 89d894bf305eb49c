/*
 * Description: A generator writing its string attribute back to front.
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

//! A generator writing its string attribute back to front.

use crate::{
  context::Context,
  descriptor::{Descriptor, Evaluation, UniqueDescriptor},
  error::GenerateError,
  generator::Generator,
  sink::Sink,
};

use tracing::{debug, trace};

/// Write each character of a string to the sink, last character first.
///
///```
/// use grammar_generator::{Generator, NullContext, StringReverseGenerator};
///
/// let mut out = Vec::new();
/// StringReverseGenerator.generate(&mut out, "ab", &NullContext).unwrap();
/// assert!(out == vec!['b', 'a']);
///```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StringReverseGenerator;

/// The reversal generator, usable directly since it is eager.
pub const REVERSE: StringReverseGenerator = StringReverseGenerator;

impl Generator for StringReverseGenerator {
  type Attribute = str;
  type Output = char;

  const DESCRIPTOR: Descriptor = Descriptor {
    name: UniqueDescriptor("reverse"),
    evaluation: Evaluation::Eager,
    attributes_needed: 1,
  };

  fn generate<S, C>(&self, sink: &mut S, value: &str, _context: &C) -> Result<(), GenerateError>
  where
    S: Sink<WriteChunk = Self::Output> + ?Sized,
    C: Context + ?Sized,
  {
    let len = value.chars().count();
    trace!(len, "reversing");
    for (index, chunk) in value.chars().rev().enumerate() {
      if let Err(source) = sink.write_one(chunk) {
        debug!(index, len, error = %source, "sink rejected reversed output");
        return Err(GenerateError::Sink { index, len, source });
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::{
    context::NullContext,
    error::SinkError,
    sink::{Bounded, FnSink},
  };

  use proptest::prelude::*;

  fn reversed(value: &str) -> String {
    let mut out = String::new();
    REVERSE.generate(&mut out, value, &NullContext).unwrap();
    out
  }

  #[test]
  fn reverses_known_inputs() {
    assert_eq!(reversed("John Doe"), "eoD nhoJ");
    assert_eq!(reversed(""), "");
    assert_eq!(reversed("a"), "a");
    assert_eq!(reversed("ab"), "ba");
    assert_eq!(reversed("aabb"), "bbaa");
  }

  #[test]
  fn empty_input_writes_nothing() {
    let mut writes = 0;
    let mut sink = FnSink::new(|_: char| {
      writes += 1;
      Ok(())
    });
    assert!(REVERSE.generates(&mut sink, "", &NullContext));
    drop(sink);
    assert_eq!(writes, 0);
  }

  #[test]
  fn reverses_by_scalar_value() {
    assert_eq!(reversed("añb"), "bña");
    assert_eq!(reversed("日本"), "本日");
  }

  #[test]
  fn stops_at_first_rejected_write() {
    let mut sink = Bounded::new(String::new(), 3);
    let err = REVERSE
      .generate(&mut sink, "John Doe", &NullContext)
      .unwrap_err();
    let GenerateError::Sink { index, len, source } = err;
    assert_eq!((index, len), (3, 8));
    assert!(matches!(source, SinkError::Full(3)));
    /* Nothing is rolled back. */
    assert_eq!(sink.into_inner(), "eoD");
  }

  #[test]
  fn reports_failure_as_false() {
    let mut sink = FnSink::new(|_: char| Err(SinkError::Closed));
    assert!(!REVERSE.generates(&mut sink, "x", &NullContext));
    assert!(REVERSE.generates(&mut sink, "", &NullContext));
  }

  #[test]
  fn ignores_context() {
    struct Loud(#[allow(dead_code)] &'static str);
    impl Context for Loud {}

    let mut out = String::new();
    REVERSE.generate(&mut out, "ab", &Loud("ignored")).unwrap();
    assert_eq!(out, "ba");
  }

  #[test]
  fn declares_eager_unary_shape() {
    let descriptor = StringReverseGenerator::DESCRIPTOR;
    assert_eq!(descriptor.name, UniqueDescriptor("reverse"));
    assert!(descriptor.is_eager());
    assert_eq!(descriptor.attributes_needed, 1);
  }

  #[test]
  fn runs_from_several_threads() {
    let handles: Vec<_> = ["first", "second", "third"]
      .into_iter()
      .map(|value| std::thread::spawn(move || reversed(value)))
      .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, vec!["tsrif", "dnoces", "driht"]);
  }

  proptest! {
    #[test]
    fn writes_every_char_in_reverse(s in any::<String>()) {
      let mut out = Vec::new();
      REVERSE.generate(&mut out, &s, &NullContext).unwrap();
      prop_assert_eq!(out.len(), s.chars().count());
      let expected: Vec<char> = s.chars().rev().collect();
      prop_assert_eq!(out, expected);
    }

    #[test]
    fn independent_sinks_agree(s in "\\PC*") {
      prop_assert_eq!(reversed(&s), reversed(&s));
    }

    #[test]
    fn reversing_twice_round_trips(s in any::<String>()) {
      prop_assert_eq!(reversed(&reversed(&s)), s);
    }
  }
}
