//! Prints the embedded content catalog as JSON.
//!
//! The output is the exact page-payload shape consumed by the rendering
//! layer: same field names, same list order. `--pretty` adds indentation for
//! review diffs; the default is compact.

use anyhow::Result;
use std::env;
use values_catalog::catalog;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let pretty = parse_args();
    let index = catalog()?;
    let output = if pretty {
        serde_json::to_string_pretty(index.catalog())?
    } else {
        serde_json::to_string(index.catalog())?
    };
    println!("{output}");
    Ok(())
}

fn parse_args() -> bool {
    let mut args = env::args().skip(1);
    let pretty = match args.next() {
        None => false,
        Some(arg) if arg == "--pretty" => true,
        Some(_) => usage_and_exit(),
    };
    if args.next().is_some() {
        usage_and_exit();
    }
    pretty
}

fn usage_and_exit() -> ! {
    eprintln!("usage: catalog-export [--pretty]");
    std::process::exit(2);
}
