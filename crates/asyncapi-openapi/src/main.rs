//! CLI for `asyncapi-openapi`.
//!
//! Reads an AsyncAPI specification file (YAML or JSON), projects it onto
//! the OpenAPI v3 shape, and prints the result as JSON.
//!
//! ```text
//! asyncapi-openapi asyncapi.yaml
//! asyncapi-openapi asyncapi.yaml --pretty --output openapi.json
//! ```

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use asyncapi_openapi::AsyncApiDocument;

/// Project an AsyncAPI specification onto an `OpenAPI` v3 document.
#[derive(Parser)]
#[command(name = "asyncapi-openapi", version, about)]
struct Cli {
    /// Path to the AsyncAPI specification (YAML or JSON).
    input: PathBuf,

    /// Write the OpenAPI JSON here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let document = AsyncApiDocument::load(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    let spec = asyncapi_openapi::project(&document);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&spec)
    } else {
        serde_json::to_string(&spec)
    }
    .context("Failed to serialize OpenAPI document")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("OpenAPI 3.0 document written: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
