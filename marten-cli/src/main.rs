//! Marten CLI
//!
//! Pulls tokens from the HTML tokenizer one at a time and prints them.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use marten_common::warning::clear_warnings;
use marten_html::{DuplicateAttributePolicy, HTMLTokenizer, Token, TokenizerConfig};
use owo_colors::OwoColorize;

/// Marten: dump the token stream of an HTML document
#[derive(Parser, Debug)]
#[command(name = "marten")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    marten ./index.html

    # Tokenize inline HTML
    marten --html '<a href="/">home</a>'

    # Machine-readable output
    marten --json --html '<!DOCTYPE html>'

    # Read from stdin and list parse errors
    cat page.html | marten --errors
"#)]
struct Cli {
    /// Path to an HTML file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the token stream as a JSON array
    #[arg(long)]
    json: bool,

    /// List parse errors after the token stream
    #[arg(long)]
    errors: bool,

    /// Don't print parse error warnings while tokenizing
    #[arg(short, long)]
    quiet: bool,

    /// Remove later attributes whose name repeats an earlier one
    #[arg(long)]
    drop_duplicate_attributes: bool,
}

impl Cli {
    fn tokenizer_config(&self) -> TokenizerConfig {
        let policy = if self.drop_duplicate_attributes {
            DuplicateAttributePolicy::DropLater
        } else {
            DuplicateAttributePolicy::Keep
        };
        TokenizerConfig::default()
            .with_duplicate_attributes(policy)
            .with_warnings(!self.quiet)
    }
}

/// `--html` wins over FILE, FILE wins over stdin.
fn load_input(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    if let Some(path) = &cli.path {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()));
    }
    let mut input = String::new();
    let _ = io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn run(cli: &Cli, input: String, out: &mut impl Write) -> Result<()> {
    clear_warnings();
    let mut tokenizer = HTMLTokenizer::with_config(input, cli.tokenizer_config());

    if cli.json {
        let tokens: Vec<Token> = tokenizer.by_ref().collect();
        serde_json::to_writer_pretty(&mut *out, &tokens)?;
        writeln!(out)?;
    } else {
        loop {
            let token = tokenizer.next_token();
            writeln!(out, "{:<10} {token}", token.kind().dimmed())?;
            if token.is_eof() {
                break;
            }
        }
    }

    if cli.errors {
        let errors = tokenizer.errors();
        writeln!(out, "{} parse error(s)", errors.len().bold())?;
        for error in errors {
            writeln!(out, "  {}", error.yellow())?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = load_input(&cli)?;
    let stdout = io::stdout();
    run(&cli, input, &mut stdout.lock())
}
