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

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use xmi::{Entry, Model};

use crate::error::Error;
use crate::kind::Kind;
use crate::python;
use crate::types::{resolve_attribute, TypeExpr, TypeRef};

/// An entry compiled into a Python definition, ready to be emitted once its
/// dependencies are.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Specification {
    /// Identifier of the compiled entry.
    pub id: String,
    /// Short name of the owning package (e.g. `"flight"`).
    pub package: String,
    pub name: String,
    pub kind: Kind,
    /// Record fields in declaration order. Empty for enumerations and
    /// primitive types.
    pub attributes: IndexMap<String, TypeExpr>,
    /// Entries that must be defined before this one, in the order they are
    /// referenced. Never contains [`id`](Self::id).
    pub dependencies: IndexSet<String>,
    /// The record's base if it declares a generalization.
    pub base: Option<TypeRef>,
    /// Python source of the definition.
    pub code: String,
}

/// Compiles the `entry` of the `model` into its [`Specification`].
pub fn compile(model: &Model, entry: &Entry) -> Result<Specification, Error> {
    let kind = Kind::classify(entry)?;
    let package = entry.package()?.to_string();
    let name = entry.name().to_string();
    trace!("compiling {:?} {}", kind, entry.id());

    let mut spec = Specification {
        id: entry.id().to_string(),
        package,
        name,
        kind,
        attributes: IndexMap::new(),
        dependencies: IndexSet::new(),
        base: None,
        code: String::new(),
    };

    match kind {
        Kind::Enumeration => {
            if entry.literals().is_empty() {
                return Err(xmi::Error::MissingField("ownedLiteral").into());
            }
            spec.code = python::literal(&spec.name, entry.literals());
        }
        Kind::Primitive => {
            spec.code = python::alias(&spec.name);
        }
        Kind::Class => {
            for attr in entry.attributes() {
                let (mut expr, dep) = resolve_attribute(model, attr, &spec.package)?;
                if dep.as_deref() == Some(spec.id.as_str()) {
                    debug!("{} references itself in {}", spec.id, attr.name);
                    if let Some(r) = expr.type_ref_mut() {
                        r.forward = true;
                    }
                } else {
                    spec.dependencies.extend(dep);
                }
                if spec.attributes.insert(attr.name.clone(), expr).is_some() {
                    return Err(xmi::Error::MalformedModel(format!(
                        "{} declares attribute {} twice",
                        spec.id, attr.name
                    ))
                    .into());
                }
            }

            if let Some(general) = entry.generalization() {
                if general == spec.id {
                    return Err(Error::CyclicDependency(vec![
                        spec.id.clone(),
                        spec.id.clone(),
                    ]));
                }
                spec.base = Some(TypeRef::resolve(model, general, &spec.package)?);
                spec.dependencies.insert(general.to_string());
            }

            let base = spec.base.as_ref().map(TypeRef::to_string);
            spec.code = python::record(&spec.name, base.as_deref(), &spec.attributes);
        }
    }

    Ok(spec)
}
