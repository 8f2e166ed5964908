use std::env;
use std::path::PathBuf;
use std::process;
use cs_doc_markdown::cs::error::JsonContext;
use cs_doc_markdown::cs::{extract_members, CsResult, XmlDocument};
use cs_doc_markdown::logging;
use log::{error, info, LevelFilter};
use tokio::io::AsyncWriteExt;

async fn run(docs_path: PathBuf, resolution_namespace: Option<String>) -> CsResult<()> {
    let document = XmlDocument::load(&docs_path).await?;
    let members = extract_members(&document, resolution_namespace.as_deref())?;

    let json = serde_json::to_string_pretty(&members)
        .with_json_context("Failed to serialize documentation records")?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(json.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    info!("Wrote {} documentation records", members.len());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("cs_doc_markdown", String::as_str);

    let verbose = args.iter().skip(1).any(|arg| arg == "--verbose");
    let positional: Vec<&String> = args.iter().skip(1).filter(|arg| !arg.starts_with("--")).collect();

    if positional.is_empty() {
        // Use eprintln for usage info since logger isn't initialized yet
        eprintln!("Usage: {} [--verbose] <doc.xml> [resolution-namespace]", program);
        eprintln!("  <doc.xml>: XML documentation file produced by the C# compiler");
        eprintln!("  [resolution-namespace]: Namespace rendered as links (default: assembly name)");
        eprintln!("  --verbose: Also log skipped member entries");
        eprintln!("Example: {} bin/Release/MyLib.xml MyLib", program);
        process::exit(1);
    }

    // Logging is optional for a one-shot conversion
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    match logging::init_logger(level) {
        Ok(path) => eprintln!("Logging to {}", path.display()),
        Err(e) => eprintln!("Failed to initialize logger: {}", e),
    }

    info!("Command line arguments: {:?}", args);

    let docs_path = PathBuf::from(positional[0]);
    let resolution_namespace = positional.get(1).map(|ns| ns.to_string());

    if let Err(e) = run(docs_path, resolution_namespace).await {
        error!("Documentation extraction failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
