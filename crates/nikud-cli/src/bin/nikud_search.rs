// nikud-search: Search the words of a Hebrew text by niqqud features.
//
// Reads text from stdin, analyzes every token, and prints the words that
// pass the given filters and rules, ordered by vocalized word. With
// --stats, prints statistics over the matching words instead.
//
// Usage:
//   nikud-search [OPTIONS] [RULE...] < text
//
// Rules are KIND:VALUE strings (ends:NAME, contains:NAME, syllable:TYPE,
// shva:present|absent|TYPE). Bare rules and --rule join with AND, --or
// joins with OR. Without rules, the field filters are applied instead.

use std::io::{self, Write};

use nikud_cli::RecordWriter;
use nikud_he::search::{self, Statistics};

fn main() {
    nikud_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if nikud_cli::wants_help(&args) {
        println!("nikud-search: Search the words of a Hebrew text by niqqud features.");
        println!();
        println!("Usage: nikud-search [OPTIONS] [RULE...] < text");
        println!();
        println!("Rules:");
        println!("  ends:NAME        Word ends with a suffix rule (e.g. ends:he)");
        println!("  contains:NAME    Word contains a mark (e.g. contains:shuruq)");
        println!("  syllable:TYPE    open, closed or unknown");
        println!("  shva:WHAT        present, absent or a shva type");
        println!("  --rule RULE      Join RULE with AND");
        println!("  --or RULE        Join RULE with OR");
        println!();
        println!("Filters (used when no rules are given):");
        println!("  --word S         Vocalized word contains S");
        println!("  --plain S        Plain word contains S");
        println!("  --syllable TYPE  Final syllable type");
        println!("  --shva TYPE      Shva type");
        println!("  --has-shva, --no-shva, --dagesh, --no-dagesh, --open, --closed");
        println!("  --min-length N, --max-length N   Plain word length");
        println!();
        println!("Output:");
        println!("  --json | --tsv   Record format (default JSON lines)");
        println!("  --context        Add token position and sentence context");
        println!("  --min-len N      Minimum token length (default 2)");
        println!("  --stats          Print statistics of the matches instead");
        println!("  -h, --help       Print this help");
        return;
    }

    let opts = nikud_cli::parse_options(&args).unwrap_or_else(|e| nikud_cli::fatal(&e));
    let query = nikud_cli::parse_search_args(&opts.rest).unwrap_or_else(|e| nikud_cli::fatal(&e));

    let handle = nikud_cli::build_handle(&opts);
    let text = nikud_cli::read_stdin().unwrap_or_else(|e| nikud_cli::fatal(&e));
    let words = handle.analyze_text(&text);

    let matches = if query.rules.is_empty() {
        search::search(&words, &query.filters)
    } else {
        search::search_by_rules(&words, &query.rules)
    };
    tracing::debug!(words = words.len(), matches = matches.len(), "search done");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if opts.stats {
        let stats = Statistics::from_analyses(&matches);
        if let Err(e) = nikud_cli::write_statistics(&mut out, &stats).and_then(|()| out.flush()) {
            nikud_cli::fatal(&e.to_string());
        }
        return;
    }

    let mut writer = RecordWriter::new(out, opts.format, opts.context);
    for word in matches {
        if let Err(e) = writer.write_word(word) {
            nikud_cli::fatal(&e);
        }
    }
    if let Err(e) = writer.finish() {
        nikud_cli::fatal(&e);
    }
}
