// nikud-cli: shared utilities for CLI tools.

use std::io::{self, Read, Write};
use std::process;

use nikud_core::analysis::{LocalizedRow, WordAnalysis, WordRecord};
use nikud_core::enums::{ShvaType, SyllableType};
use nikud_he::handle::NikudHandle;
use nikud_he::search::{AnalyzedWord, CombinedRule, ComplexRule, SearchFilters, Statistics};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NIKUD_LOG";

/// Filter used when `NIKUD_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Extra TSV columns written with `--context`.
const CONTEXT_HEADERS: [&str; 2] = ["מיקום", "הקשר"];

/// Install a stderr fmt subscriber filtered by `NIKUD_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Read all of stdin into a string.
pub fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(text)
}

// ============================================================================
// Common options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON `WordRecord` per line.
    #[default]
    Json,
    /// Tab-separated localized rows with a Hebrew header line.
    Tsv,
}

/// Options shared by the tools. Arguments not recognized here are left in
/// `rest` in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub format: OutputFormat,
    pub min_len: Option<usize>,
    pub context: bool,
    pub text: bool,
    pub stats: bool,
    pub rest: Vec<String>,
}

/// Parse `--json`, `--tsv`, `--min-len N` (or `--min-len=N`), `--context`,
/// `--text` and `--stats`.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => opts.format = OutputFormat::Json,
            "--tsv" => opts.format = OutputFormat::Tsv,
            "--context" => opts.context = true,
            "--text" => opts.text = true,
            "--stats" => opts.stats = true,
            "--min-len" => {
                let value = iter.next().ok_or("--min-len requires a value")?;
                opts.min_len = Some(parse_count("--min-len", value)?);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--min-len=") {
                    opts.min_len = Some(parse_count("--min-len", value)?);
                } else {
                    opts.rest.push(arg.clone());
                }
            }
        }
    }

    Ok(opts)
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag}: expected a non-negative integer, got '{value}'"))
}

/// Create a handle configured from `opts`.
pub fn build_handle(opts: &CliOptions) -> NikudHandle {
    let mut handle = NikudHandle::new();
    if let Some(min_len) = opts.min_len {
        handle.set_min_token_len(min_len);
    }
    handle
}

// ============================================================================
// Search arguments
// ============================================================================

/// Filters and rule chain collected from `nikud-search` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub filters: SearchFilters,
    pub rules: Vec<CombinedRule>,
}

/// Parse the search-specific arguments left over by [`parse_options`].
///
/// Value flags: `--word S`, `--plain S`, `--syllable L`, `--shva L`,
/// `--min-length N`, `--max-length N`, `--rule R`, `--or R`. Switches:
/// `--has-shva`, `--no-shva`, `--dagesh`, `--no-dagesh`, `--open`,
/// `--closed`. Bare arguments are rules joined with AND.
pub fn parse_search_args(args: &[String]) -> Result<SearchQuery, String> {
    let mut query = SearchQuery::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        let f = &mut query.filters;
        match arg.as_str() {
            "--word" => f.word = Some(value("--word")?),
            "--plain" => f.word_plain = Some(value("--plain")?),
            "--syllable" => {
                let v = value("--syllable")?;
                f.syllable_type = Some(v.parse::<SyllableType>().map_err(|e| e.to_string())?);
            }
            "--shva" => {
                let v = value("--shva")?;
                f.shva_type = Some(v.parse::<ShvaType>().map_err(|e| e.to_string())?);
            }
            "--min-length" => f.min_length = Some(parse_count("--min-length", &value("--min-length")?)?),
            "--max-length" => f.max_length = Some(parse_count("--max-length", &value("--max-length")?)?),
            "--has-shva" => f.has_shva = Some(true),
            "--no-shva" => f.has_shva = Some(false),
            "--dagesh" => f.has_dagesh = Some(true),
            "--no-dagesh" => f.has_dagesh = Some(false),
            "--open" => f.has_open_syllable = Some(true),
            "--closed" => f.has_closed_syllable = Some(true),
            "--rule" => query.rules.push(CombinedRule::and(parse_rule(&value("--rule")?)?)),
            "--or" => query.rules.push(CombinedRule::or(parse_rule(&value("--or")?)?)),
            other if other.starts_with('-') => return Err(format!("unknown option '{other}'")),
            other => query.rules.push(CombinedRule::and(parse_rule(other)?)),
        }
    }

    Ok(query)
}

fn parse_rule(s: &str) -> Result<ComplexRule, String> {
    s.parse::<ComplexRule>()
        .map_err(|e| format!("invalid rule '{s}': {e}"))
}

// ============================================================================
// Output
// ============================================================================

/// JSON line for a word found in a text.
#[derive(Serialize)]
struct PositionedRecord<'a> {
    position: usize,
    context: &'a str,
    record: WordRecord,
}

enum Sink<W: Write> {
    Json(W),
    Tsv(csv::Writer<W>),
}

/// Writes analyses as JSON lines or localized TSV rows.
///
/// With `context` set, words written through [`RecordWriter::write_word`]
/// also carry their token position and sentence context.
pub struct RecordWriter<W: Write> {
    sink: Sink<W>,
    context: bool,
    header_written: bool,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: OutputFormat, context: bool) -> Self {
        let sink = match format {
            OutputFormat::Json => Sink::Json(out),
            OutputFormat::Tsv => Sink::Tsv(
                csv::WriterBuilder::new()
                    .delimiter(b'\t')
                    .flexible(true)
                    .from_writer(out),
            ),
        };
        Self {
            sink,
            context,
            header_written: false,
        }
    }

    /// Write a standalone word analysis.
    pub fn write_analysis(&mut self, analysis: &WordAnalysis) -> Result<(), String> {
        match &mut self.sink {
            Sink::Json(out) => write_json_line(out, &analysis.to_record()),
            Sink::Tsv(_) => {
                let row = LocalizedRow::from(analysis);
                self.write_row(row.cells.iter().map(String::as_str))
            }
        }
    }

    /// Write a word found in a text.
    pub fn write_word(&mut self, word: &AnalyzedWord) -> Result<(), String> {
        if !self.context {
            return self.write_analysis(&word.analysis);
        }
        match &mut self.sink {
            Sink::Json(out) => write_json_line(
                out,
                &PositionedRecord {
                    position: word.position,
                    context: &word.context,
                    record: word.analysis.to_record(),
                },
            ),
            Sink::Tsv(_) => {
                let row = LocalizedRow::from(&word.analysis);
                let position = word.position.to_string();
                let cells = row
                    .cells
                    .iter()
                    .map(String::as_str)
                    .chain([position.as_str(), word.context.as_str()]);
                self.write_row(cells)
            }
        }
    }

    fn write_row<'a>(&mut self, cells: impl IntoIterator<Item = &'a str>) -> Result<(), String> {
        let context = self.context;
        let Sink::Tsv(out) = &mut self.sink else {
            return Ok(());
        };
        if !self.header_written {
            let extra: &[&str] = if context { &CONTEXT_HEADERS } else { &[] };
            out.write_record(LocalizedRow::HEADERS.iter().chain(extra))
                .map_err(|e| e.to_string())?;
            self.header_written = true;
        }
        out.write_record(cells).map_err(|e| e.to_string())
    }

    /// Flush buffered rows.
    pub fn finish(self) -> Result<(), String> {
        match self.sink {
            Sink::Json(mut out) => out.flush().map_err(|e| e.to_string()),
            Sink::Tsv(mut out) => out.flush().map_err(|e| e.to_string()),
        }
    }
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), String> {
    serde_json::to_writer(&mut *out, value).map_err(|e| e.to_string())?;
    writeln!(out).map_err(|e| e.to_string())
}

/// Print statistics as `label<TAB>count` lines.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "total-words\t{}", stats.total_words)?;
    writeln!(out, "unique-words\t{}", stats.unique_words)?;
    writeln!(out, "words-with-shva\t{}", stats.words_with_shva)?;
    writeln!(out, "words-with-dagesh\t{}", stats.words_with_dagesh)?;
    for (syllable, count) in &stats.syllable_distribution {
        writeln!(out, "syllable:{syllable}\t{count}")?;
    }
    for (shva, count) in &stats.shva_distribution {
        writeln!(out, "shva:{shva}\t{count}")?;
    }
    for (case, count) in &stats.special_cases {
        writeln!(out, "special:{case}\t{count}")?;
    }
    Ok(())
}
