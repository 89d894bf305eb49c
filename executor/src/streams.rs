/*
 * Description: Sinks and sources backed by async channels.
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

//! Sinks and sources backed by [`async_channel`].

use grammar_generator::{error::SinkError, messaging::Writable, sink::Sink};

use displaydoc::Display;
use tracing::trace;

mod readable {
  use super::*;

  /// The receiving end of a channel that generators write into.
  #[derive(Debug, Clone)]
  pub struct ReadableChannel<T> {
    receiver: async_channel::Receiver<T>,
  }

  impl<T> ReadableChannel<T> {
    /// Create a new readable channel.
    pub fn new(receiver: async_channel::Receiver<T>) -> Self {
      Self { receiver }
    }

    /// Pick off the top element, if one is queued.
    pub fn peek(&self) -> Option<T> {
      match self.receiver.try_recv() {
        Ok(result) => Some(result),
        /* Closed channels may still be drained until they are also empty. */
        Err(async_channel::TryRecvError::Empty) | Err(async_channel::TryRecvError::Closed) => None,
      }
    }

    /// Remove the elements queued at the time of the call.
    ///
    /// Chunks sent by concurrent writers after this call begins are left for the next call.
    pub fn drain(&self) -> Vec<T> {
      (0..self.receiver.len()).map_while(|_| self.peek()).collect()
    }
  }
}
pub use readable::ReadableChannel;

mod writable {
  use super::*;

  /// The sending end of a channel, usable as a generator's [`Sink`].
  ///
  /// Writes never block: a full bounded channel rejects the write instead.
  #[derive(Debug, Clone)]
  pub struct WritableChannel<T> {
    sender: async_channel::Sender<T>,
  }

  impl<T> WritableChannel<T> {
    /// Create a new writable channel.
    pub fn new(sender: async_channel::Sender<T>) -> Self {
      Self { sender }
    }
  }

  impl<T> Writable for WritableChannel<T> {
    type WriteChunk = T;
  }

  impl<T> Sink for WritableChannel<T> {
    fn write_one(&mut self, chunk: T) -> Result<(), SinkError> {
      match self.sender.try_send(chunk) {
        Ok(()) => Ok(()),
        Err(async_channel::TrySendError::Full(_)) => {
          let capacity = self.sender.capacity().unwrap_or(0);
          trace!(capacity, "channel full");
          Err(SinkError::Full(capacity))
        },
        Err(async_channel::TrySendError::Closed(_)) => Err(SinkError::Closed),
      }
    }
  }
}
pub use writable::WritableChannel;

mod duplex {
  use super::*;

  /// Types of channel inside a [`DuplexChannel`].
  #[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
  #[ignore_extra_doc_attributes]
  pub enum BufferConfig {
    /// <finite buffer: {0}>
    ///
    /// Choose a [bounded](async_channel::bounded) channel.
    Finite(usize),
    /// <infinite buffer>
    ///
    /// Choose an [unbounded](async_channel::unbounded) channel.
    #[default]
    Infinite,
  }

  /// A channel whose write end collects generator output for the read end.
  ///
  ///```
  /// use grammar_generator::{Generator, NullContext, REVERSE};
  /// use grammar_generator_executor::streams::*;
  ///
  /// let (mut sender, receiver) = DuplexChannel::<char>::buffered(BufferConfig::Infinite).split_ends();
  /// REVERSE.generate(&mut sender, "ab", &NullContext).unwrap();
  /// assert!(receiver.drain() == vec!['b', 'a']);
  ///
  /// let (mut sender, receiver) = DuplexChannel::<char>::buffered(BufferConfig::Finite(1)).split_ends();
  /// assert!(REVERSE.generate(&mut sender, "ab", &NullContext).is_err());
  /// assert!(receiver.drain() == vec!['b']);
  ///```
  #[derive(Debug, Clone)]
  pub struct DuplexChannel<T> {
    sender: WritableChannel<T>,
    receiver: ReadableChannel<T>,
  }

  impl<T> DuplexChannel<T> {
    /// Generate a duplex channel with the given buffering specification.
    pub fn buffered(config: BufferConfig) -> Self {
      trace!(%config, "creating channel");
      let (sender, receiver) = match config {
        BufferConfig::Finite(size) => async_channel::bounded(size),
        BufferConfig::Infinite => async_channel::unbounded(),
      };
      Self {
        sender: WritableChannel::new(sender),
        receiver: ReadableChannel::new(receiver),
      }
    }

    /// Extract the write and read ends.
    pub fn split_ends(self) -> (WritableChannel<T>, ReadableChannel<T>) {
      let Self { sender, receiver } = self;
      (sender, receiver)
    }
  }

  impl<T> Default for DuplexChannel<T> {
    fn default() -> Self {
      Self::buffered(BufferConfig::default())
    }
  }

  impl<T> Writable for DuplexChannel<T> {
    type WriteChunk = T;
  }

  impl<T> Sink for DuplexChannel<T> {
    fn write_one(&mut self, chunk: T) -> Result<(), SinkError> {
      let Self { sender, .. } = self;
      sender.write_one(chunk)
    }
  }
}
pub use duplex::{BufferConfig, DuplexChannel};

#[cfg(test)]
mod tests {
  use super::*;

  use grammar_generator::{error::GenerateError, Generator, NullContext, REVERSE};

  use std::thread;

  #[test]
  fn full_channel_rejects_write() {
    let (mut sender, receiver) = DuplexChannel::buffered(BufferConfig::Finite(2)).split_ends();
    let err = REVERSE
      .generate(&mut sender, "abc", &NullContext)
      .unwrap_err();
    assert!(matches!(
      err,
      GenerateError::Sink {
        index: 2,
        len: 3,
        source: SinkError::Full(2),
      }
    ));
    assert_eq!(receiver.drain(), vec!['c', 'b']);
  }

  #[test]
  fn dropped_receiver_closes_channel() {
    let (mut sender, receiver) = DuplexChannel::<char>::default().split_ends();
    drop(receiver);
    assert!(matches!(sender.write_one('a'), Err(SinkError::Closed)));
  }

  #[test]
  fn drains_after_senders_are_dropped() {
    let mut duplex = DuplexChannel::default();
    REVERSE.generate(&mut duplex, "xy", &NullContext).unwrap();
    let (sender, receiver) = duplex.split_ends();
    drop(sender);
    assert_eq!(receiver.drain(), vec!['y', 'x']);
    assert_eq!(receiver.peek(), None);
  }

  #[test]
  fn collects_from_several_threads() {
    let (sender, receiver) = DuplexChannel::<char>::default().split_ends();
    let handles: Vec<_> = ["abc", "de", "f"]
      .into_iter()
      .map(|value| {
        let mut sender = sender.clone();
        thread::spawn(move || REVERSE.generate(&mut sender, value, &NullContext).is_ok())
      })
      .collect();
    for handle in handles {
      assert!(handle.join().unwrap());
    }
    let mut received = receiver.drain();
    received.sort_unstable();
    assert_eq!(received, vec!['a', 'b', 'c', 'd', 'e', 'f']);
  }

  #[test]
  fn drain_leaves_chunks_sent_afterwards() {
    let (mut sender, receiver) = DuplexChannel::<char>::default().split_ends();
    REVERSE.generate(&mut sender, "ab", &NullContext).unwrap();
    let mut late = sender.clone();
    let (late_sender, first) = thread::scope(|s| {
      let writer = s.spawn(move || {
        for _ in 0..1000 {
          late.write_one('z').unwrap();
        }
        late
      });
      let first = receiver.drain();
      (writer.join().unwrap(), first)
    });
    drop(late_sender);
    assert_eq!(&first[..2], &['b', 'a']);
    assert!(first[2..].iter().all(|c| *c == 'z'));
    let rest = receiver.drain();
    assert_eq!(first.len() + rest.len(), 1002);
  }

  #[test]
  fn displays_buffer_config() {
    assert_eq!(BufferConfig::Finite(3).to_string(), "<finite buffer: 3>");
    assert_eq!(BufferConfig::default().to_string(), "<infinite buffer>");
  }
}
