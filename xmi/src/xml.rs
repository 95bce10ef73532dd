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

//! Serde-deserializable structs that mirror the XMI 2.x document structure.
//!
//! These are internal types used by the loader. quick-xml matches element
//! and attribute names by their local part, so `xmi:id` maps to `@id` and
//! `uml:Model` to `Model`. The structs are converted into the public
//! [`Model`](crate::Model) index right after deserialization.

use serde::Deserialize;

/// The `xmi:XMI` document root.
#[derive(Debug, Deserialize)]
pub(crate) struct XmiXml {
    #[serde(rename = "Model")]
    pub model: ModelXml,
}

/// The `uml:Model` element.
#[derive(Debug, Deserialize)]
pub(crate) struct ModelXml {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "packagedElement", default)]
    pub elements: Vec<PackagedElementXml>,
}

/// Any `packagedElement`: a package, class, enumeration or primitive type.
///
/// UML reuses the same element name for all of them and distinguishes the
/// kind only by the `xmi:type` attribute, so every payload is optional here.
#[derive(Debug, Deserialize)]
pub(crate) struct PackagedElementXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub tag: Option<String>,
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "packagedElement", default)]
    pub elements: Vec<PackagedElementXml>,
    #[serde(rename = "ownedAttribute", default)]
    pub attributes: Vec<OwnedAttributeXml>,
    #[serde(rename = "ownedLiteral", default)]
    pub literals: Vec<OwnedLiteralXml>,
    #[serde(rename = "generalization", default)]
    pub generalizations: Vec<GeneralizationXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnedAttributeXml {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub type_ref: Option<IdRef>,
    #[serde(rename = "lowerValue", default)]
    pub lower: Option<BoundXml>,
    #[serde(rename = "upperValue", default)]
    pub upper: Option<BoundXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnedLiteralXml {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
}

/// An `xmi:idref` reference element (e.g. `<type xmi:idref="..."/>`).
#[derive(Debug, Deserialize)]
pub(crate) struct IdRef {
    #[serde(rename = "@idref", default)]
    pub idref: Option<String>,
}

/// A multiplicity bound (`lowerValue` or `upperValue`).
#[derive(Debug, Deserialize)]
pub(crate) struct BoundXml {
    #[serde(rename = "@value", default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneralizationXml {
    #[serde(rename = "@general", default)]
    pub general: Option<String>,
}
