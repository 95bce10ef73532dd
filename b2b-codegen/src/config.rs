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
use std::fs;
use std::path::PathBuf;

use log::info;
use xmi::Model;

use crate::emitter::{emit, write_units};
use crate::error::Error;
use crate::resolver::Resolver;

/// Default location of the B2B data model.
pub const DEFAULT_MODEL: &str = "model/datamodel.xmi";

/// Default directory of the generated Python package.
pub const DEFAULT_OUTPUT: &str = "src/pyb2b/types/generated";

/// Request and reply types of the B2B services the client calls.
pub const DEFAULT_ROOTS: [&str; 14] = [
    "ID_eurocontrol.cfmu.cua.b2b.airspace.CompleteAIXMDatasetRequest",
    "ID_eurocontrol.cfmu.cua.b2b.airspace.CompleteAIXMDatasetReply",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByAerodromeRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByAerodromeReply",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByAirspaceRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByAirspaceReply",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByMeasureRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightListByMeasureReply",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightPlanListRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightPlanListReply",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightRetrievalRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flight.FlightRetrievalReply",
    "ID_eurocontrol.cfmu.cua.b2b.flow.RegulationListRequest",
    "ID_eurocontrol.cfmu.cua.b2b.flow.RegulationListReply",
];

/// Settings of one code generation run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Path of the XMI model.
    pub model: PathBuf,
    /// Directory the Python modules are written to.
    pub output: PathBuf,
    /// Identifiers of the entries to generate, together with everything they
    /// depend on.
    pub roots: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL),
            output: PathBuf::from(DEFAULT_OUTPUT),
            roots: DEFAULT_ROOTS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads the model, compiles the roots and writes the modules.
    ///
    /// Nothing is written if any entry fails to compile.
    pub fn run(&self) -> Result<BTreeMap<String, String>, Error> {
        info!("loading model {}", self.model.display());
        let data = fs::read(&self.model)?;
        let model = Model::load(&data)?;

        let units = generate(&model, &self.roots)?;
        write_units(&units, &self.output)?;

        info!(
            "generated {} module(s) in {}",
            units.len(),
            self.output.display()
        );
        Ok(units)
    }
}

/// Resolves the `roots` of the `model` and emits one module per package.
pub fn generate<I, S>(model: &Model, roots: I) -> Result<BTreeMap<String, String>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let specs = Resolver::new(model).resolve(roots)?;
    emit(&specs)
}
