//! lectern - document reader shell

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use lectern::{Importer, JsonImporter, Shell, ShellConfig};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(version, about = "Document reader shell", long_about = None)]
#[command(after_help = "EXAMPLES:
    lectern book.json                  Render the table of contents
    lectern book.json ch1/fig2         Render chapter 1 focused on a figure
    lectern -i book.json               Show document metadata")]
struct Cli {
    /// Input document (JSON)
    #[arg(value_name = "DOCUMENT")]
    document: String,

    /// Route to open, e.g. "chapter1/figure2/citation1/true"
    #[arg(value_name = "ROUTE", default_value = "")]
    route: String,

    /// Show document metadata without rendering
    #[arg(short, long)]
    info: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.document)
    } else {
        render(&cli.document, &cli.route)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &str) -> lectern::Result<lectern::Document> {
    let data = fs::read(path)?;
    JsonImporter::new().import(&data)
}

fn show_info(path: &str) -> lectern::Result<()> {
    let doc = load(path)?;

    let meta = &doc.metadata;
    println!("File: {path}");
    println!("Title: {}", meta.title);
    if !meta.authors.is_empty() {
        println!("Authors: {}", meta.authors.join(", "));
    }
    if !meta.language.is_empty() {
        println!("Language: {}", meta.language);
    }
    if let Some(desc) = &meta.description {
        println!("Description: {}", desc.trim());
    }
    println!("Nodes: {}", doc.len());
    println!("TOC entries: {}", doc.toc.len());

    Ok(())
}

fn render(path: &str, route: &str) -> lectern::Result<()> {
    let doc = load(path)?;
    let mut shell = Shell::new(doc, ShellConfig::default())?;
    let tree = shell.open(route)?;
    print!("{tree}");
    Ok(())
}
