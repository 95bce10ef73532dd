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

use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The document is not well-formed XML or lacks the expected
    /// model/package/entry nesting.
    MalformedModel(String),
    /// A required element or attribute of an entry is missing.
    MissingField(&'static str),
    /// An identifier does not encode its owning package.
    InvalidIdentifier(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedModel(e) => write!(f, "malformed model: {e}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidIdentifier(id) => {
                write!(f, "identifier \"{id}\" does not encode a package")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Self::MalformedModel(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::MalformedModel(e.to_string())
    }
}
