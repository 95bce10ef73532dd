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

use std::collections::HashSet;

use indexmap::IndexSet;
use log::{debug, trace};
use xmi::Model;

use crate::compiler::{compile, Specification};
use crate::error::Error;

/// Resolves the dependency closure of a set of root entries.
///
/// The resolver walks the dependencies of each root depth-first and emits an
/// entry only after all of its dependencies. Each entry is compiled once no
/// matter how many paths lead to it, and the output order only depends on
/// the model and the order of the roots.
///
/// # Examples
///
/// ```no_run
/// use b2b_codegen::Resolver;
///
/// let data = std::fs::read("model/datamodel.xmi").unwrap();
/// let model = xmi::Model::load(&data).unwrap();
///
/// let specs = Resolver::new(&model)
///     .resolve(["ID_eurocontrol.cfmu.cua.b2b.flight.FlightListRequest"])
///     .unwrap();
///
/// for spec in &specs {
///     println!("{}.{}", spec.package, spec.name);
/// }
/// ```
pub struct Resolver<'a> {
    model: &'a Model,
    emitted: HashSet<String>,
    in_progress: IndexSet<String>,
    ordered: Vec<Specification>,
}

impl<'a> Resolver<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            emitted: HashSet::new(),
            in_progress: IndexSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Resolves the `roots` in the given order into a topologically ordered
    /// sequence of specifications.
    pub fn resolve<I, S>(mut self, roots: I) -> Result<Vec<Specification>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for root in roots {
            debug!("resolving root {}", root.as_ref());
            self.visit(root.as_ref())?;
        }

        debug!("resolved {} entries", self.ordered.len());
        Ok(self.ordered)
    }

    fn visit(&mut self, id: &str) -> Result<(), Error> {
        if self.emitted.contains(id) {
            trace!("{id} already emitted");
            return Ok(());
        }

        if let Some(start) = self.in_progress.get_index_of(id) {
            let mut cycle: Vec<String> = self.in_progress.iter().skip(start).cloned().collect();
            cycle.push(id.to_string());
            return Err(Error::CyclicDependency(cycle));
        }

        let entry = self
            .model
            .find(id)
            .ok_or_else(|| Error::UnresolvedReference(id.to_string()))?;
        let spec = compile(self.model, entry)?;

        self.in_progress.insert(id.to_string());
        for dep in &spec.dependencies {
            self.visit(dep)?;
        }
        self.in_progress.pop();

        trace!("emitting {id}");
        self.emitted.insert(id.to_string());
        self.ordered.push(spec);

        Ok(())
    }
}
