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

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::compiler::Specification;
use crate::error::Error;
use crate::python::TYPING_IMPORT;

/// File that turns the output directory into a Python package.
pub const PACKAGE_INIT: &str = "__init__.py";

/// Emits one Python module per package from resolved specifications.
///
/// Modules are keyed by the short package name. Within a module the
/// definitions keep the order of `specs`, so a topologically ordered input
/// yields modules whose definitions follow their dependencies. Every package
/// referenced by a dependency of the module is imported as a sibling module.
pub fn emit(specs: &[Specification]) -> Result<BTreeMap<String, String>, Error> {
    let mut groups: BTreeMap<&str, Vec<&Specification>> = BTreeMap::new();
    for spec in specs {
        groups.entry(spec.package.as_str()).or_default().push(spec);
    }

    let mut units = BTreeMap::new();
    for (package, group) in groups {
        let mut imports = BTreeSet::new();
        for dep in group.iter().flat_map(|spec| &spec.dependencies) {
            let dep_package = xmi::id::short_package(dep)?;
            if dep_package != package {
                imports.insert(dep_package);
            }
        }

        debug!(
            "module {package}: {} definition(s), imports {:?}",
            group.len(),
            imports
        );

        let mut content = format!("{TYPING_IMPORT}\n");
        for import in imports {
            content.push_str(&format!("from . import {import}\n"));
        }
        content.push_str("\n\n");

        for spec in group {
            content.push_str(&spec.code);
            content.push_str("\n\n");
        }

        units.insert(package.to_string(), content);
    }

    Ok(units)
}

/// Writes each unit to `<dir>/<package>.py` next to an empty `__init__.py`.
pub fn write_units(units: &BTreeMap<String, String>, dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(PACKAGE_INIT), "")?;

    for (package, content) in units {
        let path = dir.join(format!("{package}.py"));
        fs::write(&path, content)?;
        info!("generated module {}", path.display());
    }

    Ok(())
}
