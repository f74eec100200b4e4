// nikud-analyze: Niqqud analysis of Hebrew words.
//
// Analyzes each WORD argument, or each stdin line when no words are given.
// With --text, stdin is read as running text, segmented, and every token
// is analyzed.
//
// Usage:
//   nikud-analyze [--json|--tsv] [WORD...]
//   nikud-analyze --text [--context] [--min-len N] [--json|--tsv] < text
//
// Options:
//   --json           One JSON record per line (default)
//   --tsv            Tab-separated rows with Hebrew headers
//   --text           Segment stdin as running text
//   --context        With --text, add token position and sentence context
//   --min-len N      With --text, minimum token length (default 2)
//   -h, --help       Print help

use std::io::{self, BufRead};

use nikud_cli::{CliOptions, RecordWriter};
use nikud_he::handle::NikudHandle;

fn main() {
    nikud_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if nikud_cli::wants_help(&args) {
        println!("nikud-analyze: Niqqud analysis of Hebrew words.");
        println!();
        println!("Usage: nikud-analyze [--json|--tsv] [WORD...]");
        println!("       nikud-analyze --text [--context] [--min-len N] [--json|--tsv]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line), or running");
        println!("text with --text.");
        println!();
        println!("Options:");
        println!("  --json           One JSON record per line (default)");
        println!("  --tsv            Tab-separated rows with Hebrew headers");
        println!("  --text           Segment stdin as running text");
        println!("  --context        With --text, add position and sentence context");
        println!("  --min-len N      With --text, minimum token length (default 2)");
        println!("  -h, --help       Print this help");
        println!();
        println!("Set {}=debug for diagnostics on stderr.", nikud_cli::LOG_ENV);
        return;
    }

    let opts = nikud_cli::parse_options(&args).unwrap_or_else(|e| nikud_cli::fatal(&e));
    if let Some(flag) = opts.rest.iter().find(|a| a.starts_with("--")) {
        nikud_cli::fatal(&format!("unknown option '{flag}'"));
    }

    let handle = nikud_cli::build_handle(&opts);
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(io::BufWriter::new(stdout.lock()), opts.format, opts.context);

    let result = if opts.text {
        analyze_text(&handle, &mut writer)
    } else {
        analyze_words(&handle, &opts, &mut writer)
    };
    if let Err(e) = result.and_then(|()| writer.finish()) {
        nikud_cli::fatal(&e);
    }
}

fn analyze_text<W: io::Write>(handle: &NikudHandle, writer: &mut RecordWriter<W>) -> Result<(), String> {
    let text = nikud_cli::read_stdin()?;
    for word in handle.analyze_text(&text) {
        writer.write_word(&word)?;
    }
    Ok(())
}

fn analyze_words<W: io::Write>(
    handle: &NikudHandle,
    opts: &CliOptions,
    writer: &mut RecordWriter<W>,
) -> Result<(), String> {
    let mut analyze_one = |word: &str| -> Result<(), String> {
        match handle.analyze(word) {
            Ok(analysis) => writer.write_analysis(&analysis),
            Err(e) => {
                eprintln!("{word}: {e}");
                Ok(())
            }
        }
    };

    if opts.rest.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(|e| format!("error reading stdin: {e}"))?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_one(word)?;
        }
    } else {
        for word in &opts.rest {
            analyze_one(word)?;
        }
    }
    Ok(())
}
