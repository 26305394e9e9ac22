//! Wallaby CLI
//!
//! Parses an HTML/XML file (or an inline string) and prints it back, either
//! re-rendered as markup or as the JSON wire form of the tree. Structural
//! warnings go to stderr. This is a thin collaborator: strings in, strings
//! out; everything interesting lives in the library crates.

use anyhow::Result;
use std::env;
use std::fs;
use wallaby_html::{ParseOptions, parse_with};
use wallaby_render::{RenderOptions, render_root};

/// ANSI color codes for warning output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn usage() -> ! {
    eprintln!("Usage: wallaby-cli [options] <file.html>");
    eprintln!("       wallaby-cli [options] --html '<div>...</div>'");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --pretty                 indent the rendered markup");
    eprintln!("  --xml                    self-close every childless element");
    eprintln!("  --json                   print the tree as JSON instead of markup");
    eprintln!("  --ignore <tag>           drop a tag's whole subtree (repeatable)");
    eprintln!("  --preserve-whitespace    keep text runs exactly as written");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut parse_options = ParseOptions::default();
    let mut render_options = RenderOptions::default();
    let mut as_json = false;
    let mut inline: Option<String> = None;
    let mut file: Option<String> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pretty" => render_options.pretty = true,
            "--xml" => render_options.xml_mode = true,
            "--json" => as_json = true,
            "--preserve-whitespace" => parse_options.preserve_whitespace = true,
            "--ignore" => match iter.next() {
                Some(tag) => parse_options.ignore.push(tag),
                None => usage(),
            },
            "--html" => match iter.next() {
                Some(markup) => inline = Some(markup),
                None => usage(),
            },
            _ if file.is_none() && !arg.starts_with("--") => file = Some(arg),
            _ => usage(),
        }
    }

    let markup = match (inline, file) {
        (Some(markup), _) => markup,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => usage(),
    };

    let output = parse_with(&markup, &parse_options);
    for warning in &output.warnings {
        eprintln!("{YELLOW}[wallaby] ⚠ {warning}{RESET}");
    }

    if as_json {
        // `Option<Node>` serializes to `null` for an empty parse.
        println!("{}", serde_json::to_string_pretty(&output.root)?);
    } else {
        println!("{}", render_root(output.root.as_ref(), &render_options));
    }

    Ok(())
}
