// ZH-Check CLI Tool
// Command-line comprehension analysis for Chinese text files

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use zh_check::{wordlist, AnalysisReport, Analyzer, CedictGlossary, VocabularyStore};

/// Chinese comprehension checker - score text against your vocabulary
#[derive(Parser, Debug)]
#[command(name = "zh-check")]
#[command(about = "Estimate comprehension of Chinese text from known-word lists", long_about = None)]
#[command(version)]
struct Args {
    /// UTF-8 text files to analyze
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Analyze a literal text argument instead of files
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Known-word list file (one word per line, '#' comments); repeatable
    #[arg(short, long, value_name = "FILE", required = true)]
    known: Vec<PathBuf>,

    /// Unknown-override list file for compounds that must not count as
    /// known; repeatable
    #[arg(short, long, value_name = "FILE")]
    unknown: Vec<PathBuf>,

    /// CC-CEDICT formatted dictionary for unknown-word glosses
    #[arg(short, long, value_name = "FILE")]
    cedict: Option<PathBuf>,

    /// Maximum number of unknown words to display
    #[arg(short, long, default_value = "50")]
    limit: usize,

    /// Emit the report as JSON
    #[arg(short, long)]
    json: bool,

    /// Show vocabulary statistics and progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Word lists: union across all supplied files
    let known = load_word_lists(&args.known)?;
    let unknown = load_word_lists(&args.unknown)?;
    let store = VocabularyStore::build(&known, &unknown);

    if args.verbose {
        println!(
            "📖 Vocabulary: {} known entries, {} overrides",
            store.known_len(),
            store.override_len()
        );
    }

    let mut analyzer = Analyzer::new(store);
    if let Some(path) = &args.cedict {
        let glossary = CedictGlossary::parse(&fs::read_to_string(path)?);
        if args.verbose {
            println!("📕 Glossary: {} entries", glossary.len());
        }
        analyzer = analyzer.with_glossary(glossary);
    }

    if let Some(text) = &args.text {
        let report = analyzer.analyze(text)?;
        render(&report, args.limit, args.json)?;
        return Ok(());
    }

    if args.files.is_empty() {
        return Err("no input: pass FILE arguments or --text".into());
    }

    // Per-document failures are reported without aborting the batch
    let mut failures = 0;
    for path in &args.files {
        println!("📄 {}", path.display());
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {}: {}", path.display(), e);
                failures += 1;
                continue;
            }
        };
        match analyzer.analyze(&text) {
            Ok(report) => render(&report, args.limit, args.json)?,
            Err(e) => {
                eprintln!("❌ {}: {}", path.display(), e);
                failures += 1;
            }
        }
        println!();
    }

    if failures > 0 {
        return Err(format!("{} document(s) failed", failures).into());
    }
    Ok(())
}

/// Union of all entries across the supplied word-list files
fn load_word_lists(paths: &[PathBuf]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut words = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read word list {}: {}", path.display(), e))?;
        words.extend(wordlist::parse_words(&content));
    }
    Ok(words)
}

/// Print one report as text or JSON
fn render(
    report: &AnalysisReport,
    limit: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Word Count: {}", report.word_count);
    println!("Total Unique Words: {}", report.unique_words);
    println!("Comprehension: {:.1}%", report.comprehension * 100.0);
    println!("Unique Unknown Words: {}", report.unknown_words.len());
    println!("Difficulty: {}", report.difficulty());

    if !report.unknown_words.is_empty() {
        println!("\n=== Unknown Words (by frequency) ===");
        for unknown in report.unknown_words.iter().take(limit) {
            print!("{} ({}) : {}", unknown.word, unknown.pinyin, unknown.count);
            if unknown.gloss.is_empty() {
                println!();
            } else {
                println!("  [{}]", unknown.gloss);
            }
        }
        if report.unknown_words.len() > limit {
            println!("... and {} more", report.unknown_words.len() - limit);
        }
    }
    Ok(())
}
