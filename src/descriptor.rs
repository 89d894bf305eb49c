/*
 * Description: Static metadata describing the shape of a generator.
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

//! Static metadata describing the shape of a generator.

use crate::{error::RegistryError, generator::Generator};

use displaydoc::Display;
use indexmap::IndexMap;
use tracing::debug;

/* TODO: make these use UUIDs once generators can be registered from a derive macro! */
/// {0}
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueDescriptor(pub &'static str);

/// How a composition engine should obtain a runnable generator.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[ignore_extra_doc_attributes]
pub enum Evaluation {
  /// <eager>
  ///
  /// The generator value is invoked as is.
  Eager,
  /// <deferred>
  ///
  /// The generator value is a factory, and must be converted by an adapter call before use.
  Deferred,
}

/// Shape of a generator, fixed at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
  /// Key for this generator in a [`Registry`].
  pub name: UniqueDescriptor,
  /// Whether an adapter step is needed before invocation.
  pub evaluation: Evaluation,
  /// How many attributes one invocation consumes from the attribute tuple.
  pub attributes_needed: usize,
}

impl Descriptor {
  /// Whether this generator can be invoked without an adapter.
  ///
  ///```
  /// use grammar_generator::{Generator, StringReverseGenerator};
  ///
  /// assert!(StringReverseGenerator::DESCRIPTOR.is_eager());
  ///```
  pub const fn is_eager(&self) -> bool {
    matches!(self.evaluation, Evaluation::Eager)
  }
}

/// Descriptors of every generator known to a composition engine, in registration order.
///
///```
/// use grammar_generator::{Registry, StringReverseGenerator, UniqueDescriptor};
///
/// let mut registry = Registry::new();
/// registry.register_generator::<StringReverseGenerator>().unwrap();
/// assert!(registry.register_generator::<StringReverseGenerator>().is_err());
///
/// let reverse = UniqueDescriptor("reverse");
/// assert!(registry.get(reverse).unwrap().attributes_needed == 1);
/// assert!(registry.attributes_needed(&[reverse, reverse]).unwrap() == 2);
///```
#[derive(Clone, Debug, Default)]
pub struct Registry {
  descriptors: IndexMap<UniqueDescriptor, Descriptor>,
}

impl Registry {
  /// An empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a descriptor, rejecting names which were already registered.
  pub fn register(&mut self, descriptor: Descriptor) -> Result<(), RegistryError> {
    if self.descriptors.contains_key(&descriptor.name) {
      return Err(RegistryError::Duplicate(descriptor.name));
    }
    debug!(
      name = %descriptor.name,
      evaluation = %descriptor.evaluation,
      attributes_needed = descriptor.attributes_needed,
      "registered generator"
    );
    self.descriptors.insert(descriptor.name, descriptor);
    Ok(())
  }

  /// Add the descriptor attached to `G`.
  pub fn register_generator<G>(&mut self) -> Result<(), RegistryError>
  where
    G: Generator,
  {
    self.register(G::DESCRIPTOR)
  }

  /// Look up a descriptor by name.
  pub fn get(&self, name: UniqueDescriptor) -> Option<&Descriptor> {
    self.descriptors.get(&name)
  }

  /// Iterate over descriptors in the order they were registered.
  pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
    self.descriptors.values()
  }

  /// Total number of attributes consumed by running each named generator in sequence.
  pub fn attributes_needed(&self, pipeline: &[UniqueDescriptor]) -> Result<usize, RegistryError> {
    pipeline.iter().try_fold(0, |acc, name| {
      let descriptor = self.get(*name).ok_or(RegistryError::Unknown(*name))?;
      Ok(acc + descriptor.attributes_needed)
    })
  }
}
