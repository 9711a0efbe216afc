//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use storefront::doc::ApiDoc;
use utoipa::OpenApi;

/// Export the storefront OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version)]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(std::io::Error::other)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
}
