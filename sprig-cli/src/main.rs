//! sprig CLI
//!
//! Tokenizes HTML files or inline markup and prints the token stream.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use sprig_common::warning::{clear_warnings, set_color_enabled, warn_once};
use sprig_html::{HTMLTokenizer, Token, TokenizerOptions};

/// Tokenize a small subset of HTML and print the tokens
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tokens of a file
    sprig ./index.html

    # Tokenize inline markup as JSON
    sprig --json --html '<div class="a">hi</div>'

    # Fail on a tag left open at end of input
    sprig --strict ./partial.html

    # Read from stdin
    cat index.html | sprig -
"#)]
struct Cli {
    /// HTML files to tokenize (`-` reads stdin)
    #[arg(value_name = "FILE", required_unless_present = "html")]
    files: Vec<PathBuf>,

    /// Tokenize HTML string directly instead of files
    #[arg(long, value_name = "HTML", conflicts_with = "files")]
    html: Option<String>,

    /// Print tokens as JSON
    #[arg(short, long)]
    json: bool,

    /// Treat a tag left open at end of input as an error
    #[arg(short, long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn options(&self) -> TokenizerOptions {
        if self.strict {
            TokenizerOptions::strict()
        } else {
            TokenizerOptions::default()
        }
    }
}

/// One input document.
struct Source {
    name: String,
    markup: String,
}

/// Tokens of one input, as printed by `--json`.
#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    tokens: &'a [Token],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_color_enabled(!cli.no_color);

    let sources = load_sources(&cli)?;
    let options = cli.options();

    let mut results = Vec::with_capacity(sources.len());
    for source in &sources {
        clear_warnings();
        results.push(tokenize_source(source, options)?);
    }

    if cli.json {
        let reports: Vec<Report<'_>> = sources
            .iter()
            .zip(&results)
            .map(|(source, tokens)| Report {
                source: &source.name,
                tokens,
            })
            .collect();
        println!("{}", to_json(&reports)?);
    } else {
        for (source, tokens) in sources.iter().zip(&results) {
            print!("{}", format_tokens(&source.name, tokens, !cli.no_color));
        }
    }

    Ok(())
}

/// Load input documents from CLI arguments
fn load_sources(cli: &Cli) -> Result<Vec<Source>> {
    if let Some(ref markup) = cli.html {
        return Ok(vec![Source {
            name: "<inline>".to_string(),
            markup: markup.clone(),
        }]);
    }
    if cli.files.is_empty() {
        anyhow::bail!("no input: pass one or more files, `-` for stdin, or --html");
    }
    cli.files
        .iter()
        .map(|path| {
            let name = path.display().to_string();
            let markup = if name == "-" {
                io::read_to_string(io::stdin())
                    .context("failed to read stdin")?
            } else {
                fs::read_to_string(path)
                    .with_context(|| format!("failed to read '{name}'"))?
            };
            Ok(Source { name, markup })
        })
        .collect()
}

/// Tokenize one document, warning if a trailing tag was dropped
fn tokenize_source(source: &Source, options: TokenizerOptions) -> Result<Vec<Token>> {
    let mut tokenizer = HTMLTokenizer::with_options(source.markup.as_str(), options);
    tokenizer
        .run()
        .with_context(|| format!("failed to tokenize {}", source.name))?;
    if tokenizer.dropped_incomplete_tag() {
        warn_once(
            "tokenizer",
            &format!(
                "{}: input ended inside a tag; the unfinished tag was dropped",
                source.name
            ),
        );
    }
    Ok(tokenizer.into_tokens())
}

/// Human-readable token listing
fn format_tokens(name: &str, tokens: &[Token], color: bool) -> String {
    let header = format!("=== {name} ({} tokens) ===", tokens.len());
    let mut out = if color {
        format!("{}\n", header.bold())
    } else {
        format!("{header}\n")
    };
    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "  {i:3}: {token}");
    }
    out
}

fn to_json(reports: &[Report<'_>]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .context("failed to serialize tokens")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn source(markup: &str) -> Source {
        Source {
            name: "test".to_string(),
            markup: markup.to_string(),
        }
    }

    #[test]
    fn test_parse_inline_html() {
        let cli = parse(&["sprig", "--json", "--html", "<p>"]);
        assert!(cli.json);
        assert_eq!(cli.html.as_deref(), Some("<p>"));
        let sources = load_sources(&cli).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].markup, "<p>");
    }

    #[test]
    fn test_requires_input() {
        assert!(Cli::try_parse_from(["sprig"]).is_err());
        let conflict = Cli::try_parse_from(["sprig", "a.html", "--html", "<p>"]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_strict_flag_selects_error_policy() {
        let cli = parse(&["sprig", "--strict", "a.html"]);
        assert_eq!(cli.options(), TokenizerOptions::strict());
        assert!(tokenize_source(&source("<div"), cli.options()).is_err());

        let cli = parse(&["sprig", "a.html"]);
        assert!(
            tokenize_source(&source("<div"), cli.options())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_lex_error_names_source() {
        let options = TokenizerOptions::default();
        let err = tokenize_source(&source("<1>"), options).unwrap_err();
        assert_eq!(err.to_string(), "failed to tokenize test");
        let message = format!("{err:#}");
        assert!(message.contains("invalid first character of tag name"));
    }

    #[test]
    fn test_format_tokens() {
        let options = TokenizerOptions::default();
        let tokens = tokenize_source(&source("<b>x</b>"), options).unwrap();
        let out = format_tokens("test", &tokens, false);
        assert_eq!(
            out,
            "=== test (3 tokens) ===\n    0: <b>\n    1: Character(x)\n    2: </b>\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let tokens = tokenize_source(
            &source(r#"<br class="a"/>x</br>"#),
            TokenizerOptions::default(),
        )
        .unwrap();
        let report = Report {
            source: "test",
            tokens: &tokens,
        };
        let json = to_json(&[report]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "source": "test",
                "tokens": [
                    {
                        "type": "startTag",
                        "tagName": "br",
                        "isSelfClosing": true,
                        "attributes": [{ "name": "class", "value": "a" }]
                    },
                    { "type": "character", "data": "x" },
                    { "type": "endTag", "tagName": "br" }
                ]
            }])
        );
    }
}
