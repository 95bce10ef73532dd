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

//! Generates the Python types of the B2B client from the UML data model.
//!
//! Run with: `cargo run -p b2b-codegen -- --model model/datamodel.xmi`

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use b2b_codegen::{Config, DEFAULT_MODEL, DEFAULT_OUTPUT};
use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "b2b-codegen")]
#[command(about = "Compile the B2B UML data model into Python typing definitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Identifiers of the entries to generate (defaults to the request and
    /// reply types of the supported services)
    roots: Vec<String>,

    /// Path of the XMI data model
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: PathBuf,

    /// Directory the Python modules are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// List the identifiers of entries whose name starts with PREFIX and exit
    #[arg(long, value_name = "PREFIX")]
    find: Option<String>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(prefix) = &cli.find {
        let data = fs::read(&cli.model)
            .with_context(|| format!("failed to read {}", cli.model.display()))?;
        let model = xmi::Model::load(&data).context("failed to load the data model")?;
        for entry in model.find_by_name(prefix) {
            println!("{}\t{}", entry.id(), entry.tag());
        }
        return Ok(());
    }

    let mut config = Config {
        model: cli.model,
        output: cli.output,
        ..Config::default()
    };
    if !cli.roots.is_empty() {
        config.roots = cli.roots;
    }

    let units = config.run().with_context(|| {
        format!(
            "failed to generate types from {}",
            config.model.display()
        )
    })?;

    eprintln!(
        "Generated {} module(s) in {}",
        units.len(),
        config.output.display()
    );
    Ok(())
}
