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

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::Error;
use crate::id;
use crate::xml;

/// `xmi:type` tag of UML packages.
pub const PACKAGE_TAG: &str = "uml:Package";

/// Multiplicity bound assumed when an attribute omits `lowerValue` or
/// `upperValue`.
pub const DEFAULT_BOUND: &str = "1";

/// A UML class model loaded from an XMI document.
///
/// The model is an index of packages, each holding its entries keyed by their
/// globally unique identifier. It is built once by [`Model::load`] and only
/// read afterwards.
///
/// # Examples
///
/// ```
/// use xmi::Model;
///
/// let xmi = br#"
///   <xmi:XMI xmlns:xmi="http://www.omg.org/spec/XMI/20131001"
///            xmlns:uml="http://www.omg.org/spec/UML/20131001">
///     <uml:Model xmi:type="uml:Model" name="datamodel">
///       <packagedElement xmi:type="uml:Package" name="eurocontrol.cfmu.cua.b2b.common">
///         <packagedElement xmi:type="uml:PrimitiveType"
///                          xmi:id="ID_eurocontrol.cfmu.cua.b2b.common.FileId"
///                          name="FileId"/>
///       </packagedElement>
///     </uml:Model>
///   </xmi:XMI>"#;
///
/// let model = Model::load(&xmi[..]).unwrap();
/// let entry = model.find("ID_eurocontrol.cfmu.cua.b2b.common.FileId").unwrap();
/// assert_eq!(entry.name(), "FileId");
/// assert_eq!(entry.package(), Ok("common"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Model {
    packages: BTreeMap<String, Package>,
}

/// A named collection of entries.
#[derive(Clone, Debug, Default)]
pub struct Package {
    name: String,
    entries: BTreeMap<String, Entry>,
}

/// One raw `packagedElement` of a package.
///
/// The entry keeps its `xmi:type` tag as found in the document; deciding
/// whether it is a class, an enumeration or a primitive type is left to the
/// consumer of the model.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    id: String,
    tag: String,
    name: String,
    literals: Vec<String>,
    attributes: Vec<Attribute>,
    generalization: Option<String>,
}

/// An `ownedAttribute` of a class entry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attribute {
    /// Field name (e.g. `"endUserId"`).
    pub name: String,
    /// Identifier of the attribute's value type.
    pub type_ref: String,
    /// Lower multiplicity bound as written in the model (`"0"` or `"1"`).
    pub lower: String,
    /// Upper multiplicity bound as written in the model (`"1"` or `"*"`).
    pub upper: String,
}

impl Model {
    /// Loads a model from an XMI document.
    ///
    /// The document must contain a `uml:Model` below the `xmi:XMI` root with
    /// at least one package of entries. Packages that only wrap other
    /// packages are descended into and not indexed themselves.
    pub fn load(data: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(data)?;
        let document: xml::XmiXml = quick_xml::de::from_str(text)?;
        let model = document.model;

        debug!(
            "loading model {:?} ({} top-level element(s))",
            model.name.as_deref().unwrap_or_default(),
            model.elements.len()
        );

        let mut packages = BTreeMap::new();
        for element in model.elements {
            if element.tag.as_deref() == Some(PACKAGE_TAG) {
                collect_packages(element, &mut packages)?;
            } else {
                trace!("skipping top-level element {:?}", element.id);
            }
        }

        if packages.is_empty() {
            return Err(Error::MalformedModel(
                "model contains no package".to_string(),
            ));
        }

        debug!(
            "loaded {} package(s) with {} entries",
            packages.len(),
            packages.values().map(Package::len).sum::<usize>()
        );

        Ok(Self { packages })
    }

    /// Returns the package with the (qualified) `name`.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Iterates over all packages ordered by name.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Finds the entry with the identifier `id`.
    ///
    /// The package is derived from the identifier's structure, so an entry
    /// filed under a package its identifier doesn't name is not found.
    pub fn find(&self, id: &str) -> Option<&Entry> {
        let package = id::qualified_package(id).ok()?;
        self.packages.get(package)?.get(id)
    }

    /// Iterates over all entries whose name starts with `prefix`.
    pub fn find_by_name<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.packages
            .values()
            .flat_map(Package::entries)
            .filter(move |entry| entry.name.starts_with(prefix))
    }
}

impl Package {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterates over the entries ordered by identifier.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Entry {
    /// The globally unique identifier (`xmi:id`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw `xmi:type` tag (e.g. `"uml:Class"`).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The display name. It is not unique across packages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short name of the owning package, derived from the identifier.
    pub fn package(&self) -> Result<&str, Error> {
        id::short_package(&self.id)
    }

    /// Literal names of an enumeration in declaration order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Attributes of a class in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Identifier of the parent class, if the entry declares a generalization.
    pub fn generalization(&self) -> Option<&str> {
        self.generalization.as_deref()
    }
}

/// Indexes `element` as a package if it holds entries and descends into the
/// packages nested below it.
fn collect_packages(
    element: xml::PackagedElementXml,
    packages: &mut BTreeMap<String, Package>,
) -> Result<(), Error> {
    let name = element.name.ok_or(Error::MissingField("package name"))?;

    let (nested, members): (Vec<_>, Vec<_>) = element
        .elements
        .into_iter()
        .partition(|e| e.tag.as_deref() == Some(PACKAGE_TAG));

    if !members.is_empty() || nested.is_empty() {
        let mut entries = BTreeMap::new();
        for member in members {
            if member.id.is_none() && member.tag.is_none() {
                trace!("skipping anonymous element in package {name}");
                continue;
            }

            let entry = Entry::try_from(member)?;
            trace!("indexing {} ({})", entry.id, entry.tag);
            if entries.insert(entry.id.clone(), entry).is_some() {
                return Err(Error::MalformedModel(format!(
                    "duplicate identifier in package {name}"
                )));
            }
        }

        debug!("package {name}: {} entries", entries.len());
        packages.insert(name.clone(), Package { name, entries });
    }

    for package in nested {
        collect_packages(package, packages)?;
    }

    Ok(())
}

impl TryFrom<xml::PackagedElementXml> for Entry {
    type Error = Error;

    fn try_from(x: xml::PackagedElementXml) -> Result<Self, Self::Error> {
        let id = x.id.ok_or(Error::MissingField("xmi:id"))?;
        let tag = x.tag.ok_or(Error::MissingField("xmi:type"))?;
        let name = x.name.ok_or(Error::MissingField("name"))?;

        let literals = x
            .literals
            .into_iter()
            .map(|literal| literal.name.ok_or(Error::MissingField("ownedLiteral name")))
            .collect::<Result<Vec<_>, _>>()?;

        let attributes = x
            .attributes
            .into_iter()
            .map(Attribute::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut generals = x.generalizations.into_iter();
        let generalization = match generals.next() {
            Some(gen) => Some(gen.general.ok_or(Error::MissingField("general"))?),
            None => None,
        };
        if generals.next().is_some() {
            return Err(Error::MalformedModel(format!(
                "{id} declares more than one generalization"
            )));
        }

        Ok(Self {
            name,
            id,
            tag,
            literals,
            attributes,
            generalization,
        })
    }
}

impl TryFrom<xml::OwnedAttributeXml> for Attribute {
    type Error = Error;

    fn try_from(x: xml::OwnedAttributeXml) -> Result<Self, Self::Error> {
        let bound = |b: Option<xml::BoundXml>| {
            b.and_then(|b| b.value)
                .unwrap_or_else(|| DEFAULT_BOUND.to_string())
        };

        Ok(Self {
            name: x.name.ok_or(Error::MissingField("ownedAttribute name"))?,
            type_ref: x
                .type_ref
                .and_then(|t| t.idref)
                .ok_or(Error::MissingField("ownedAttribute type"))?,
            lower: bound(x.lower),
            upper: bound(x.upper),
        })
    }
}
