//! jsonish command-line tool for checking, compacting and pretty-printing
//! jsonish documents.
//!
//! Usage: jsonish [OPTIONS] [FILE]
//!
//! Reads FILE (or stdin when FILE is absent or `-`), parses it, and writes
//! the re-encoded document to stdout, `--output`, or back to FILE with
//! `--write`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use libjsonish::{
    encode, parse_file_with_options, parse_with_options, pretty_print, Format, ParseOptions, Value,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "jsonish", author, version, about, long_about = None)]
struct Cli {
    /// Input file; stdin when absent or `-`
    file: Option<PathBuf>,

    /// Require quoted keys and reject content after the value
    #[arg(long)]
    strict: bool,

    /// Write the compact single-line form
    #[arg(short, long, conflicts_with_all = ["indent", "tab"])]
    compact: bool,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long, conflicts_with = "indent")]
    tab: bool,

    /// Only check that the input parses; prints "ok"
    #[arg(long, conflicts_with_all = ["output", "write"])]
    check: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "write")]
    output: Option<PathBuf>,

    /// Rewrite the input file in place
    #[arg(short, long)]
    write: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }

    fn indent_unit(&self) -> String {
        if self.tab {
            "\t".to_string()
        } else {
            " ".repeat(self.indent)
        }
    }

    fn render(&self, value: &Value) -> String {
        if self.compact {
            encode(value, Format::Compact)
        } else {
            pretty_print(value, &self.indent_unit(), 0)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.write && cli.input_path().is_none() {
        bail!("--write needs an input file");
    }

    let options = ParseOptions::new().strict(cli.strict);
    let value = match cli.input_path() {
        Some(path) => parse_file_with_options(path, &options)?,
        None => parse_with_options(&read_stdin()?, &options)?,
    };
    log::info!(
        "parsed {}",
        cli.input_path()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    );

    if cli.check {
        println!("ok");
        return Ok(());
    }

    let mut output = cli.render(&value);
    output.push('\n');

    let target = if cli.write {
        cli.input_path()
    } else {
        cli.output.as_deref()
    };

    match target {
        Some(path) => {
            log::debug!("writing {}", path.display());
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))
        }
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("writing stdout"),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}
