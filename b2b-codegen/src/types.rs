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

//! Synthesis of Python type expressions from UML attribute references and
//! multiplicities.

use std::fmt;

use xmi::{Attribute, Model};

use crate::error::Error;

/// Identifier of the boolean pseudo-primitive. It has no entry in the model.
pub const BOOLEAN_ID: &str = "ID_Boolean";

/// Package holding the model's built-in primitive types.
pub const PRIMITIVE_TYPES: &str = "PrimitiveTypes";

/// Upper bound of an unbounded multiplicity.
pub const MANY: &str = "*";

/// A named entry as seen from the package that references it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeRef {
    /// Short package of the entry if it differs from the referencing one.
    pub package: Option<String>,
    pub name: String,
    /// Rendered as a string forward reference (`'Name'`) because the entry
    /// is not bound yet where the reference is evaluated.
    pub forward: bool,
}

impl TypeRef {
    /// Resolves the entry `id` as referenced from `owning_package`.
    pub fn resolve(model: &Model, id: &str, owning_package: &str) -> Result<Self, Error> {
        let entry = model
            .find(id)
            .ok_or_else(|| Error::UnresolvedReference(id.to_string()))?;
        let package = xmi::id::short_package(id)?;

        Ok(Self {
            package: (package != owning_package).then(|| package.to_string()),
            name: entry.name().to_string(),
            forward: false,
        })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.package, self.forward) {
            (Some(package), false) => write!(f, "{package}.{}", self.name),
            (Some(package), true) => write!(f, "'{package}.{}'", self.name),
            (None, false) => write!(f, "{}", self.name),
            (None, true) => write!(f, "'{}'", self.name),
        }
    }
}

/// The Python type of a record field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeExpr {
    /// `Literal['true', 'false']`
    Boolean,
    /// `str`
    Str,
    /// A single value of the referenced entry.
    Single(TypeRef),
    /// A single value or a list of values. Replies encode a list with one
    /// element as the element itself.
    OneOrMany(TypeRef),
}

impl TypeExpr {
    /// The referenced entry, if the type names one.
    pub fn type_ref_mut(&mut self) -> Option<&mut TypeRef> {
        match self {
            Self::Single(r) | Self::OneOrMany(r) => Some(r),
            Self::Boolean | Self::Str => None,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Literal['true', 'false']"),
            Self::Str => write!(f, "str"),
            Self::Single(r) => write!(f, "{r}"),
            Self::OneOrMany(r) => write!(f, "Union[{r}, list[{r}]]"),
        }
    }
}

/// The multiplicity of an attribute.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Arity {
    /// `1..1`
    Required,
    /// `0..1`
    Optional,
    /// `0..*` or `1..*`
    Many,
}

impl Arity {
    pub fn from_bounds(lower: &str, upper: &str) -> Result<Self, Error> {
        match (lower, upper) {
            ("1", "1") => Ok(Self::Required),
            ("0", "1") => Ok(Self::Optional),
            ("0" | "1", MANY) => Ok(Self::Many),
            _ => Err(Error::UnexpectedArity {
                lower: lower.to_string(),
                upper: upper.to_string(),
            }),
        }
    }
}

/// Resolves the type of `attr` declared by a class of `owning_package`.
///
/// Returns the type expression and the identifier of the entry that must be
/// emitted before the class, if any. Booleans and the built-in primitive
/// types map to scalars without a dependency and their multiplicity is not
/// checked.
///
/// An optional attribute gets the same type as a required one since the
/// emitted records are all `total=False`.
pub fn resolve_attribute(
    model: &Model,
    attr: &Attribute,
    owning_package: &str,
) -> Result<(TypeExpr, Option<String>), Error> {
    if attr.type_ref == BOOLEAN_ID {
        return Ok((TypeExpr::Boolean, None));
    }

    if model
        .package(PRIMITIVE_TYPES)
        .is_some_and(|p| p.contains(&attr.type_ref))
    {
        return Ok((TypeExpr::Str, None));
    }

    let arity = Arity::from_bounds(&attr.lower, &attr.upper)?;
    let type_ref = TypeRef::resolve(model, &attr.type_ref, owning_package)?;
    let expr = match arity {
        Arity::Required | Arity::Optional => TypeExpr::Single(type_ref),
        Arity::Many => TypeExpr::OneOrMany(type_ref),
    };

    Ok((expr, Some(attr.type_ref.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    fn attr(type_ref: &str, lower: &str, upper: &str) -> Attribute {
        Attribute {
            name: "field".to_string(),
            type_ref: type_ref.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    #[test]
    fn boolean_without_dependency() {
        let model = model();
        let (expr, dep) = resolve_attribute(&model, &attr(BOOLEAN_ID, "0", "1"), "flight").unwrap();
        assert_eq!(expr.to_string(), "Literal['true', 'false']");
        assert_eq!(dep, None);
    }

    #[test]
    fn primitive_types_without_dependency() {
        let model = model();
        // bounds of primitives are not checked
        let (expr, dep) =
            resolve_attribute(&model, &attr("ID_PrimitiveTypes.string", "2", "3"), "flight").unwrap();
        assert_eq!(expr, TypeExpr::Str);
        assert_eq!(dep, None);
    }

    #[test]
    fn required_same_package() {
        let model = model();
        let flight = id("flight.Flight");
        let (expr, dep) = resolve_attribute(&model, &attr(&flight, "1", "1"), "flight").unwrap();
        assert_eq!(expr.to_string(), "Flight");
        assert_eq!(dep, Some(flight));
    }

    #[test]
    fn optional_same_as_required() {
        let model = model();
        let flight = id("flight.Flight");
        let required = resolve_attribute(&model, &attr(&flight, "1", "1"), "flight").unwrap();
        let optional = resolve_attribute(&model, &attr(&flight, "0", "1"), "flight").unwrap();
        assert_eq!(required, optional);
    }

    #[test]
    fn many_cross_package() {
        let model = model();
        let volume = id("airspace.TrafficVolumeId");
        let (expr, dep) = resolve_attribute(&model, &attr(&volume, "1", "*"), "flight").unwrap();
        assert_eq!(
            expr.to_string(),
            "Union[airspace.TrafficVolumeId, list[airspace.TrafficVolumeId]]"
        );
        assert_eq!(dep, Some(volume));
    }

    #[test]
    fn unexpected_arity() {
        let model = model();
        let result = resolve_attribute(&model, &attr(&id("flight.Flight"), "2", "3"), "flight");
        assert_eq!(
            result,
            Err(Error::UnexpectedArity {
                lower: "2".to_string(),
                upper: "3".to_string()
            })
        );
        assert!(Arity::from_bounds("*", "*").is_err());
        assert!(Arity::from_bounds("1", "0").is_err());
    }

    #[test]
    fn unresolved_reference() {
        let model = model();
        let missing = id("flight.Missing");
        assert_eq!(
            resolve_attribute(&model, &attr(&missing, "1", "1"), "flight"),
            Err(Error::UnresolvedReference(missing))
        );
    }

    #[test]
    fn type_ref_qualification() {
        let model = model();
        let reply = TypeRef::resolve(&model, &id("common.Reply"), "flight").unwrap();
        assert_eq!(reply.to_string(), "common.Reply");
        let mut reply = TypeRef::resolve(&model, &id("common.Reply"), "common").unwrap();
        assert_eq!(reply.to_string(), "Reply");
        reply.forward = true;
        assert_eq!(reply.to_string(), "'Reply'");
    }

    #[test]
    fn forward_reference_in_union() {
        let mut expr = TypeExpr::OneOrMany(TypeRef {
            package: None,
            name: "RouteNode".to_string(),
            forward: false,
        });
        if let Some(r) = expr.type_ref_mut() {
            r.forward = true;
        }
        assert_eq!(expr.to_string(), "Union['RouteNode', list['RouteNode']]");
        assert!(TypeExpr::Str.type_ref_mut().is_none());
    }
}
