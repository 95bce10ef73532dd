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

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The XMI document could not be loaded or an identifier is malformed.
    MalformedModel(xmi::Error),
    /// An entry's `xmi:type` tag is neither a class, an enumeration nor a
    /// primitive type.
    UnsupportedEntryKind(String),
    /// An identifier references no entry of the model.
    UnresolvedReference(String),
    /// An attribute multiplicity outside of `0..1`, `1..1` and `*`.
    UnexpectedArity { lower: String, upper: String },
    /// The entries reference each other in a cycle. The path starts and ends
    /// with the same identifier.
    CyclicDependency(Vec<String>),
    /// Reading the model or writing the generated modules failed.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedModel(e) => write!(f, "{e}"),
            Self::UnsupportedEntryKind(tag) => write!(f, "unsupported entry kind \"{tag}\""),
            Self::UnresolvedReference(id) => write!(f, "unresolved reference to {id}"),
            Self::UnexpectedArity { lower, upper } => {
                write!(f, "unexpected arity {lower} - {upper}")
            }
            Self::CyclicDependency(path) => {
                write!(f, "cyclic dependency: {}", path.join(" -> "))
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<xmi::Error> for Error {
    fn from(e: xmi::Error) -> Self {
        Self::MalformedModel(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
