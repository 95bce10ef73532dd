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

use xmi::Entry;

use crate::error::Error;

/// The kind of a model entry, read from its `xmi:type` tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Enumeration,
    Primitive,
    Class,
}

impl Kind {
    pub const ENUMERATION_TAG: &'static str = "uml:Enumeration";
    pub const PRIMITIVE_TAG: &'static str = "uml:PrimitiveType";
    pub const CLASS_TAG: &'static str = "uml:Class";

    /// Classifies the `entry` by its type tag.
    pub fn classify(entry: &Entry) -> Result<Self, Error> {
        Self::from_tag(entry.tag())
    }

    pub fn from_tag(tag: &str) -> Result<Self, Error> {
        match tag {
            Self::ENUMERATION_TAG => Ok(Self::Enumeration),
            Self::PRIMITIVE_TAG => Ok(Self::Primitive),
            Self::CLASS_TAG => Ok(Self::Class),
            _ => Err(Error::UnsupportedEntryKind(tag.to_string())),
        }
    }
}
