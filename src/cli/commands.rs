use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::docs::{load_document, render, ROOT_DEPTH};
use crate::error::Result;

#[derive(Parser)]
#[command(name = "confdoc")]
#[command(about = "Render nested configuration docs as Markdown")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Render the default configuration's docs
    confdoc

    # Render a specific configuration file
    confdoc path/to/config.json
"#)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(default_value = "default-config.json")]
    pub file: PathBuf,
}

/// Load a configuration file and write its rendered docs to stdout.
pub fn render_file(path: &Path) -> Result<()> {
    let document = load_document(path)?;
    let lines = render(&document.root, ROOT_DEPTH);
    tracing::debug!(lines = lines.len(), "rendered {}", path.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
