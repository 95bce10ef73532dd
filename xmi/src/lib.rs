// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! XMI (XML Metadata Interchange) loader for UML class models.
//!
//! This crate reads the packages, classes, enumerations and primitive types
//! of a UML model serialized as XMI into an immutable [`Model`] index. Entries
//! are looked up by identifier; the owning package is always derived from the
//! identifier's structure (see [`id`]).
//!
//! The loader does not interpret the entries. Their `xmi:type` tag, attribute
//! multiplicities and generalization references are kept as written so that
//! a compiler on top of this crate decides how to map them.

mod error;
mod model;
mod xml;

pub mod id;

pub use error::Error;
pub use model::{Attribute, Entry, Model, Package, DEFAULT_BOUND, PACKAGE_TAG};
