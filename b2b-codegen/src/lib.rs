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

//! Compiler of the NM B2B UML data model into Python typing definitions.
//!
//! The B2B services describe their request and reply payloads in a UML class
//! model distributed as XMI. This crate turns the entries a client needs into
//! one Python module per UML package:
//!
//! - enumerations become `Literal` types,
//! - primitive types become `str` aliases,
//! - classes become `TypedDict` records with single inheritance.
//!
//! Starting from a list of root identifiers, the [`Resolver`] compiles the
//! dependency closure of the roots in topological order and [`emit`] groups
//! the definitions by package, importing the sibling modules they reference.
//!
//! # Examples
//!
//! ```no_run
//! use b2b_codegen::{emit, Resolver};
//!
//! # fn main() -> Result<(), b2b_codegen::Error> {
//! let data = std::fs::read("model/datamodel.xmi")?;
//! let model = xmi::Model::load(&data)?;
//!
//! let specs = Resolver::new(&model).resolve(b2b_codegen::DEFAULT_ROOTS)?;
//! for (package, source) in emit(&specs)? {
//!     println!("# {package}.py\n{source}");
//! }
//! # Ok(())
//! # }
//! ```

mod compiler;
mod config;
mod emitter;
mod error;
mod kind;
mod python;
mod resolver;
mod types;

pub use compiler::{compile, Specification};
pub use config::{generate, Config, DEFAULT_MODEL, DEFAULT_OUTPUT, DEFAULT_ROOTS};
pub use emitter::{emit, write_units, PACKAGE_INIT};
pub use error::Error;
pub use kind::Kind;
pub use resolver::Resolver;
pub use types::{resolve_attribute, Arity, TypeExpr, TypeRef, BOOLEAN_ID, PRIMITIVE_TYPES};
