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

use std::fs;
use std::path::PathBuf;

use b2b_codegen::{emit, generate, write_units, Config, Error, Resolver};
use xmi::Model;

const DATAMODEL: &[u8] = include_bytes!("fixtures/datamodel.xmi");

fn id(path: &str) -> String {
    format!("ID_eurocontrol.cfmu.cua.b2b.{path}")
}

fn roots() -> Vec<String> {
    vec![
        id("flight.FlightListRequest"),
        id("flight.FlightListReply"),
        id("flight.StandardRouteId"),
        id("flight.RouteLeg"),
    ]
}

#[test]
fn generate_flight_modules() {
    let model = Model::load(DATAMODEL).expect("should load the data model");
    let units = generate(&model, roots()).expect("should generate modules");

    let packages: Vec<_> = units.keys().map(String::as_str).collect();
    assert_eq!(packages, ["airspace", "common", "flight"]);

    let flight = &units["flight"];
    assert!(flight.starts_with(
        "from typing import Literal, TypedDict, Union\n\
         from . import airspace\n\
         from . import common\n\n\n"
    ));
    assert!(flight.contains(
        "class FlightListRequest(common.Request):\n    \
         aerodrome: airspace.AerodromeICAOId\n    \
         trafficVolumes: Union[airspace.TrafficVolumeId, list[airspace.TrafficVolumeId]]\n"
    ));
    assert!(flight.contains("class FlightListReply(common.Reply):\n    data: FlightListReplyData\n"));
    assert!(flight.contains("StandardRouteId = TypedDict('StandardRouteId', {\n  \"from\""));

    let common = &units["common"];
    assert!(common.contains("ReplyStatus = Literal[\"OK\", \"INVALID_INPUT\"]\n"));
    assert!(common.contains("class Request(TypedDict, total=False):\n    endUserId: str\n"));
}

#[test]
fn inheritance_is_emitted_after_parent() {
    let model = Model::load(DATAMODEL).unwrap();
    let specs = Resolver::new(&model).resolve([id("flight.RouteLeg")]).unwrap();

    let segment = specs.iter().position(|s| s.name == "RouteSegment").unwrap();
    let leg = specs.iter().position(|s| s.name == "RouteLeg").unwrap();
    assert!(segment < leg);
    assert!(specs[leg].dependencies.contains(&id("flight.RouteSegment")));

    let units = emit(&specs).unwrap();
    let flight = &units["flight"];
    assert!(flight.find("class RouteSegment(").unwrap() < flight.find("class RouteLeg(").unwrap());
}

#[test]
fn output_is_deterministic() {
    let first = generate(&Model::load(DATAMODEL).unwrap(), roots()).unwrap();
    let second = generate(&Model::load(DATAMODEL).unwrap(), roots()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn entries_are_emitted_once() {
    let model = Model::load(DATAMODEL).unwrap();
    let mut all = roots();
    all.extend(roots());
    let specs = Resolver::new(&model).resolve(&all).unwrap();

    let mut ids: Vec<_> = specs.iter().map(|s| s.id.as_str()).collect();
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn failed_generation_reports_offending_entry() {
    let model = Model::load(DATAMODEL).unwrap();

    let err = generate(&model, [id("flight.BadArity")]).unwrap_err();
    assert_eq!(err.to_string(), "unexpected arity 2 - 3");

    let err = generate(&model, [id("flight.Pong")]).unwrap_err();
    assert!(matches!(err, Error::CyclicDependency(_)));
    assert!(err.to_string().contains("flight.Ping"));
}

#[test]
fn write_python_package() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");

    let model = Model::load(DATAMODEL).unwrap();
    let units = generate(&model, roots()).unwrap();
    write_units(&units, &out).unwrap();

    assert_eq!(fs::read_to_string(out.join("__init__.py")).unwrap(), "");
    for (package, content) in &units {
        let written = fs::read_to_string(out.join(format!("{package}.py"))).unwrap();
        assert_eq!(&written, content);
    }
}

#[test]
fn run_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        model: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/datamodel.xmi"),
        output: dir.path().to_path_buf(),
        roots: vec![id("common.Reply")],
    };

    let units = config.run().unwrap();
    assert_eq!(units.len(), 1);
    assert!(dir.path().join("common.py").exists());
}

#[test]
fn run_config_writes_nothing_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let config = Config {
        model: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/datamodel.xmi"),
        output: out.clone(),
        roots: vec![id("common.Reply"), id("flight.Dangling")],
    };

    assert_eq!(
        config.run(),
        Err(Error::UnresolvedReference(id("flight.Missing")))
    );
    assert!(!out.exists());
}

#[test]
fn run_config_with_missing_model() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        model: dir.path().join("missing.xmi"),
        output: dir.path().to_path_buf(),
        ..Config::default()
    };
    assert!(matches!(config.run(), Err(Error::Io(_))));
}
