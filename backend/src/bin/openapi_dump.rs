//! Print the OpenAPI document as JSON, or write it to `--output`.

use std::path::PathBuf;

use bloglist::ApiDoc;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Dump the bloglist OpenAPI document")]
struct Args {
    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;
    match args.output {
        Some(path) => std::fs::write(&path, json)
            .wrap_err_with(|| format!("write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
