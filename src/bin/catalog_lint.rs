//! Validates a content catalog JSON document.
//!
//! Reads a catalog from a file path argument or stdin, runs both validation
//! tiers (JSON Schema, then the construction invariants), and prints every
//! problem found. Exits non-zero when the document is not a valid catalog.
//! Intended for authoring: run it against an edited `content/catalog.json`
//! before committing.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::fs;
use std::io::{self, Read};
use values_catalog::{schema, violations, ContentCatalog};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let source = parse_args();
    let data = source.read()?;

    let mut problems: Vec<String> = Vec::new();
    let raw: Value = serde_json::from_str(&data).context("input is not valid JSON")?;
    if let Err(err) = schema::validate_value(&raw) {
        problems.push(format!("{err:#}"));
    }
    match serde_json::from_value::<ContentCatalog>(raw) {
        Ok(catalog) => {
            problems.extend(violations(&catalog).iter().map(|v| v.to_string()));
        }
        Err(err) => problems.push(format!("decoding catalog: {err}")),
    }

    if problems.is_empty() {
        println!("ok: catalog passes schema and invariant checks");
        return Ok(());
    }
    for problem in &problems {
        eprintln!("violation: {problem}");
    }
    bail!("catalog failed validation with {} problem(s)", problems.len())
}

enum Source {
    Stdin,
    File(String),
}

impl Source {
    fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("reading catalog from stdin")?;
                Ok(buffer)
            }
            Source::File(path) => {
                fs::read_to_string(path).with_context(|| format!("reading {path}"))
            }
        }
    }
}

fn parse_args() -> Source {
    let mut args = env::args().skip(1);
    let source = match args.next() {
        None => Source::Stdin,
        Some(arg) if matches!(arg.as_str(), "-h" | "--help") => usage_and_exit(),
        Some(path) => Source::File(path),
    };
    if args.next().is_some() {
        usage_and_exit();
    }
    source
}

fn usage_and_exit() -> ! {
    eprintln!("usage: catalog-lint [CATALOG_JSON_PATH]");
    eprintln!("Reads from stdin when no path is given.");
    std::process::exit(2);
}
