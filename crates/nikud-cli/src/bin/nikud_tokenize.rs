// nikud-tokenize: Segment Hebrew text into candidate words.
//
// Reads text from stdin and prints one token per line as
// `[start..end]: text`, where offsets are character positions in the
// input. With --json, prints one JSON object per token instead.
//
// Usage:
//   nikud-tokenize [--min-len N] [--json] < text
//
// Options:
//   --min-len N      Minimum token length in characters (default 2)
//   --json           JSON output
//   -h, --help       Print help

use std::io::{self, Write};

use serde::Serialize;

/// JSON form of a token.
#[derive(Serialize)]
struct TokenLine<'a> {
    text: &'a str,
    token_len: usize,
    pos: usize,
}

fn main() {
    nikud_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if nikud_cli::wants_help(&args) {
        println!("nikud-tokenize: Segment Hebrew text into candidate words.");
        println!();
        println!("Usage: nikud-tokenize [--min-len N] [--json] < text");
        println!();
        println!("Options:");
        println!("  --min-len N      Minimum token length in characters (default 2)");
        println!("  --json           One JSON object per token");
        println!("  -h, --help       Print this help");
        return;
    }

    let opts = nikud_cli::parse_options(&args).unwrap_or_else(|e| nikud_cli::fatal(&e));
    if let Some(arg) = opts.rest.first() {
        nikud_cli::fatal(&format!("unexpected argument '{arg}'"));
    }
    // Plain lines unless --json is given.
    let json = args.iter().any(|a| a == "--json");

    let handle = nikud_cli::build_handle(&opts);
    let text = nikud_cli::read_stdin().unwrap_or_else(|e| nikud_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in handle.tokens(&text) {
        if json {
            let line = TokenLine {
                text: &token.text,
                token_len: token.token_len,
                pos: token.pos,
            };
            match serde_json::to_string(&line) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => nikud_cli::fatal(&e.to_string()),
            }
        } else {
            let _ = writeln!(
                out,
                "[{}..{}]: {}",
                token.pos,
                token.pos + token.token_len,
                token.text
            );
        }
    }
}
