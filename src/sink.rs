/*
 * Description: Write-only destinations for generated output.
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

//! Write-only destinations for generated output.

use crate::{error::SinkError, messaging::Writable};

use core::marker::PhantomData;
use std::io;

/// Accept one chunk at a time, advancing after each write.
pub trait Sink: Writable {
  /// Append `chunk`, or explain why it was refused.
  fn write_one(&mut self, chunk: Self::WriteChunk) -> Result<(), SinkError>;
}

impl<S> Writable for &mut S
where
  S: Writable + ?Sized,
{
  type WriteChunk = S::WriteChunk;
}

impl<S> Sink for &mut S
where
  S: Sink + ?Sized,
{
  fn write_one(&mut self, chunk: Self::WriteChunk) -> Result<(), SinkError> {
    (**self).write_one(chunk)
  }
}

impl Writable for String {
  type WriteChunk = char;
}

impl Sink for String {
  fn write_one(&mut self, chunk: char) -> Result<(), SinkError> {
    self.push(chunk);
    Ok(())
  }
}

impl<T> Writable for Vec<T> {
  type WriteChunk = T;
}

impl<T> Sink for Vec<T> {
  fn write_one(&mut self, chunk: T) -> Result<(), SinkError> {
    self.push(chunk);
    Ok(())
  }
}

/// Encode each character as UTF-8 into an [`io::Write`].
///
///```
/// use grammar_generator::sink::{Sink, WriteSink};
///
/// let mut sink = WriteSink::new(Vec::<u8>::new());
/// sink.write_one('é').unwrap();
/// sink.write_one('!').unwrap();
/// assert!(sink.into_inner() == "é!".as_bytes());
///```
#[derive(Debug)]
pub struct WriteSink<W> {
  inner: W,
}

impl<W> WriteSink<W>
where
  W: io::Write,
{
  /// Wrap a writer.
  pub fn new(inner: W) -> Self {
    Self { inner }
  }

  /// Flush the wrapped writer.
  pub fn flush(&mut self) -> Result<(), SinkError> {
    Ok(self.inner.flush()?)
  }

  /// Release the wrapped writer.
  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W> Writable for WriteSink<W> {
  type WriteChunk = char;
}

impl<W> Sink for WriteSink<W>
where
  W: io::Write,
{
  fn write_one(&mut self, chunk: char) -> Result<(), SinkError> {
    let mut buf = [0u8; 4];
    self.inner.write_all(chunk.encode_utf8(&mut buf).as_bytes())?;
    Ok(())
  }
}

/// Forward each chunk to a closure.
///
///```
/// use grammar_generator::sink::{FnSink, Sink};
///
/// let mut count = 0;
/// let mut sink = FnSink::new(|_: char| {
///   count += 1;
///   Ok(())
/// });
/// sink.write_one('a').unwrap();
/// sink.write_one('b').unwrap();
/// drop(sink);
/// assert!(count == 2);
///```
pub struct FnSink<T, F> {
  _ph: PhantomData<fn(T)>,
  f: F,
}

impl<T, F> FnSink<T, F>
where
  F: FnMut(T) -> Result<(), SinkError>,
{
  /// Wrap the closure `f`.
  pub fn new(f: F) -> Self {
    Self { _ph: PhantomData, f }
  }
}

impl<T, F> Writable for FnSink<T, F> {
  type WriteChunk = T;
}

impl<T, F> Sink for FnSink<T, F>
where
  F: FnMut(T) -> Result<(), SinkError>,
{
  fn write_one(&mut self, chunk: T) -> Result<(), SinkError> {
    (self.f)(chunk)
  }
}

/// Reject every write after the first `capacity`.
///
///```
/// use grammar_generator::{error::SinkError, sink::{Bounded, Sink}};
///
/// let mut sink = Bounded::new(String::new(), 1);
/// sink.write_one('a').unwrap();
/// assert!(matches!(sink.write_one('b'), Err(SinkError::Full(1))));
/// assert!(sink.into_inner() == "a");
///```
#[derive(Debug)]
pub struct Bounded<S> {
  inner: S,
  capacity: usize,
  written: usize,
}

impl<S> Bounded<S> {
  /// Wrap `inner`, allowing at most `capacity` writes.
  pub fn new(inner: S, capacity: usize) -> Self {
    Self {
      inner,
      capacity,
      written: 0,
    }
  }

  /// How many more writes will be accepted.
  pub fn remaining(&self) -> usize {
    self.capacity - self.written
  }

  /// Release the wrapped sink.
  pub fn into_inner(self) -> S {
    self.inner
  }
}

impl<S> Writable for Bounded<S>
where
  S: Writable,
{
  type WriteChunk = S::WriteChunk;
}

impl<S> Sink for Bounded<S>
where
  S: Sink,
{
  fn write_one(&mut self, chunk: Self::WriteChunk) -> Result<(), SinkError> {
    if self.written == self.capacity {
      return Err(SinkError::Full(self.capacity));
    }
    self.inner.write_one(chunk)?;
    self.written += 1;
    Ok(())
  }
}
