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

//! Helpers to read the structure of XMI identifiers.
//!
//! Identifiers such as `ID_eurocontrol.cfmu.cua.b2b.flight.FlightListRequest`
//! encode the package that owns the entry. The qualified package is the dotted
//! path without the `ID_` prefix and the trailing entry segment, the short
//! package is the last segment of that path.

use crate::error::Error;

/// Prefix every XMI identifier starts with.
pub const ID_PREFIX: &str = "ID_";

/// Returns the qualified package path encoded in `id`, e.g.
/// `eurocontrol.cfmu.cua.b2b.flight`.
pub fn qualified_package(id: &str) -> Result<&str, Error> {
    let path = id.strip_prefix(ID_PREFIX).unwrap_or(id);
    path.rsplit_once('.')
        .map(|(package, _)| package)
        .filter(|package| !package.is_empty())
        .ok_or_else(|| Error::InvalidIdentifier(id.to_string()))
}

/// Returns the short package name encoded in `id`, i.e. the second-to-last
/// dot-delimited segment (`flight` for the example above).
pub fn short_package(id: &str) -> Result<&str, Error> {
    let package = qualified_package(id)?;
    Ok(package.rsplit('.').next().unwrap_or(package))
}

/// Returns the last segment of `id`.
pub fn local_name(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}
