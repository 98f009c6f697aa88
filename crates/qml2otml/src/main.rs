use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use otml::Document;
use otml_qml::{FsReader, QmlLoader};

mod logging;

use logging::{LoggingConfig, init_logging};

#[derive(Parser)]
#[command(name = "qml2otml")]
#[command(about = "Convert QML markup into OTML documents")]
struct Cli {
    /// QML files to convert
    #[arg(required_unless_present = "stdin")]
    files: Vec<String>,

    /// Resolve file names relative to this directory
    #[arg(long)]
    root: Option<PathBuf>,

    /// Read a single document from stdin
    #[arg(long, conflicts_with = "files")]
    stdin: bool,

    /// Print the tree as JSON instead of OTML text
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `debug` or `otml_qml=debug` (defaults to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig::default().with_filter(cli.log.clone()));

    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let reader = match &cli.root {
        Some(root) => FsReader::with_root(root),
        None => FsReader::new(),
    };
    let loader = QmlLoader::new(reader);

    if cli.stdin {
        if io::stdin().is_terminal() {
            bail!("--stdin given but stdin is a terminal");
        }
        let mut src = String::new();
        io::stdin().read_to_string(&mut src).context("failed to read stdin")?;
        let doc = loader.parse_str(&src, "<stdin>")?;
        return print(&doc, cli.json);
    }

    let mut failed = 0;
    for file in &cli.files {
        // parse_file logs its own failures
        match loader.parse_file(file) {
            Some(doc) => print(&doc, cli.json)?,
            None => failed += 1,
        }
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed to convert", cli.files.len());
    }
    Ok(())
}

fn print(doc: &Document, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, doc)?;
    } else {
        write!(out, "{doc}")?;
    }
    writeln!(out)?;
    Ok(())
}
