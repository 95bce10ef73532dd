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

//! Rendering of Python typing definitions.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::types::TypeExpr;

/// Base of records without a generalization.
pub(crate) const OPEN_RECORD: &str = "TypedDict, total=False";

/// Import line every generated module starts with.
pub(crate) const TYPING_IMPORT: &str = "from typing import Literal, TypedDict, Union";

/// Python's reserved keywords (`keyword.kwlist`).
pub(crate) const KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub(crate) fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// `Name = Literal["A", "B"]`
pub fn literal(name: &str, literals: &[String]) -> String {
    let literals: Vec<_> = literals.iter().map(|l| format!("\"{l}\"")).collect();
    format!("{name} = Literal[{}]", literals.join(", "))
}

/// `Name = str`
pub fn alias(name: &str) -> String {
    format!("{name} = str")
}

/// Renders a `TypedDict` record.
///
/// Records are declared with the class syntax. If a field name is a Python
/// keyword the class syntax can't declare it, so the fields are passed as a
/// mapping to the functional `TypedDict` constructor instead. A record with a
/// base then inherits from both the base and the functional fields record,
/// which keeps the field set of both forms identical.
pub fn record(name: &str, base: Option<&str>, fields: &IndexMap<String, TypeExpr>) -> String {
    let explicit = fields.keys().any(|field| is_keyword(field));

    match (explicit, base) {
        (true, None) => typed_dict(name, fields),
        (true, Some(base)) => {
            let fields_name = format!("_{name}");
            format!(
                "{}\n\n\nclass {name}({base}, {fields_name}): ...",
                typed_dict(&fields_name, fields)
            )
        }
        (false, base) => {
            let base = base.unwrap_or(OPEN_RECORD);
            if fields.is_empty() {
                format!("class {name}({base}): ...")
            } else {
                let lines: Vec<_> = fields
                    .iter()
                    .map(|(field, expr)| format!("    {field}: {expr}"))
                    .collect();
                format!("class {name}({base}):\n{}", lines.join("\n"))
            }
        }
    }
}

/// `Name = TypedDict('Name', {...}, total=False)` with the field types as
/// string annotations.
fn typed_dict(name: &str, fields: &IndexMap<String, TypeExpr>) -> String {
    let mapping: Map<String, Value> = fields
        .iter()
        .map(|(field, expr)| (field.clone(), Value::String(expr.to_string())))
        .collect();

    format!(
        "{name} = TypedDict('{name}', {:#}, total=False)",
        Value::Object(mapping)
    )
}
