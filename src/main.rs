//! Wordforge - brute-force wordlist generation and size estimation
//!
//! A simple CLI tool that enumerates every word of a length range over a
//! character set and streams the result to a text file.

use std::env;
use std::fs;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use indicatif::{HumanBytes, HumanDuration};
use inquire::autocompletion::Replacement;
use inquire::{Autocomplete, Confirm, CustomType, CustomUserError, Select, Text};

use wordforge::{
    estimate, generate,
    wordlist::format_hms,
    Charset, CharsetChoice, GenerationSpec, ProgressObserver, ProgressUpdate, Result,
    WordforgeError, MAX_VERBOSITY,
};

fn main() {
    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return;
    }

    // Run the main flow
    if let Err(e) = run_wordforge() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main wordforge workflow
fn run_wordforge() -> Result<()> {
    // Show welcome message
    println!("🔨 Wordforge - brute-force wordlist generation");
    println!("═══════════════════════════════════════════════");
    println!();

    // Collect generation parameters
    let (min_length, max_length) = prompt_lengths()?;
    let charset = prompt_charset()?;
    let output_path = prompt_output_path()?;
    let verbosity = prompt_verbosity()?;

    let spec = GenerationSpec::new(min_length, max_length, charset, verbosity)?;

    // Estimate before touching the filesystem
    let est = estimate(&spec)?;
    println!();
    println!("📊 Candidate words: {}", est.total_count);
    println!(
        "📦 Estimated output size: {} (rough, excludes line breaks)",
        format_size(est.estimated_size_bytes)
    );

    // Confirmation gate - nothing is written until the operator agrees
    let confirmed = Confirm::new(&format!(
        "Generate a wordlist of {} words?",
        est.total_count
    ))
    .with_default(false)
    .prompt()?;

    if !confirmed {
        println!("Wordlist generation aborted.");
        return Ok(());
    }

    // Truncate-on-open: reusing a path always rewrites the file
    let file = File::create(&output_path).map_err(|e| {
        WordforgeError::sink_write(e.to_string(), Some(output_path.display().to_string()))
    })?;
    let mut sink = BufWriter::new(file);

    let report = generate(&spec, &mut sink, &mut ConsoleReporter)?;

    println!();
    println!("✅ Wordlist generation complete.");
    println!("   📝 Words written: {}", report.words_generated);
    println!("   ⏱️  Total time: {}", HumanDuration(report.elapsed));
    println!("   📄 Output: {}", output_path.display());

    Ok(())
}

/// Prompt for the word length range
fn prompt_lengths() -> Result<(usize, usize)> {
    let min_length = CustomType::<usize>::new("Minimum word length:")
        .with_error_message("Please enter a whole number")
        .prompt()?;

    let max_length = CustomType::<usize>::new("Maximum word length:")
        .with_error_message("Please enter a whole number")
        .prompt()?;

    Ok((min_length, max_length))
}

/// Prompt for the character set selection
fn prompt_charset() -> Result<Charset> {
    let choice = Select::new(
        "Character set:",
        vec![CharsetChoice::Default, CharsetChoice::Custom],
    )
    .prompt()?;

    match choice {
        CharsetChoice::Default => Ok(Charset::default_set()),
        CharsetChoice::Custom => {
            let symbols = Text::new("Custom symbols:").prompt()?;
            Ok(Charset::from_symbols(symbols.trim()))
        }
    }
}

/// Prompt for the output file path, with filesystem tab-completion
fn prompt_output_path() -> Result<PathBuf> {
    let input = Text::new("Output file path (.txt):")
        .with_autocomplete(PathCompleter)
        .prompt()?;

    validate_output_path(&input)
}

/// Prompt for the progress verbosity level
fn prompt_verbosity() -> Result<u8> {
    let verbosity = CustomType::<u8>::new(&format!("Verbosity level (0-{}):", MAX_VERBOSITY))
        .with_error_message("Please enter a whole number")
        .prompt()?;

    if verbosity > MAX_VERBOSITY {
        return Err(WordforgeError::invalid_option(format!(
            "verbosity {} is outside 0..={}",
            verbosity, MAX_VERBOSITY
        )));
    }

    Ok(verbosity)
}

/// Require the fixed `.txt` extension on the output path
fn validate_output_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if !trimmed.ends_with(".txt") {
        return Err(WordforgeError::invalid_path(
            trimmed,
            "the file name must end with .txt",
        ));
    }
    Ok(PathBuf::from(trimmed))
}

/// Render the rough byte estimate; it can exceed what fits in a u64
fn format_size(bytes: f64) -> String {
    if bytes >= u64::MAX as f64 {
        format!("more than {}", HumanBytes(u64::MAX))
    } else {
        HumanBytes(bytes as u64).to_string()
    }
}

/// Progress reporter for the terminal.
///
/// The per-word status line rewrites itself in place; milestone lines are
/// printed on their own line so they stay visible.
struct ConsoleReporter;

impl ProgressObserver for ConsoleReporter {
    fn on_word(&mut self, update: &ProgressUpdate<'_>) {
        print!(
            "\rWords generated: {}/{} | ETA: {}",
            update.words_generated,
            update.total,
            format_hms(update.eta)
        );
        let _ = io::stdout().flush();
    }

    fn on_milestone(&mut self, update: &ProgressUpdate<'_>) {
        println!(
            "\n{} words generated. Elapsed time: {}",
            update.words_generated,
            format_hms(update.elapsed)
        );
    }
}

/// Filesystem completion for the output path prompt
#[derive(Clone, Default)]
struct PathCompleter;

impl Autocomplete for PathCompleter {
    fn get_suggestions(&mut self, input: &str) -> std::result::Result<Vec<String>, CustomUserError> {
        Ok(list_matches(input).unwrap_or_default())
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> std::result::Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion.or_else(|| {
            let matches = list_matches(input).unwrap_or_default();
            if matches.len() == 1 {
                Some(matches[0].clone())
            } else {
                None
            }
        }))
    }
}

/// List directory entries matching the partially typed path
fn list_matches(input: &str) -> io::Result<Vec<String>> {
    let (dir, prefix) = match input.rfind('/') {
        Some(idx) => (&input[..=idx], &input[idx + 1..]),
        None => ("", input),
    };

    let mut matches = Vec::new();
    for entry in fs::read_dir(if dir.is_empty() { "." } else { dir })? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(prefix) {
            let mut candidate = format!("{}{}", dir, name);
            if entry.file_type()?.is_dir() {
                candidate.push('/');
            }
            matches.push(candidate);
        }
    }

    matches.sort();
    Ok(matches)
}

/// Print help information
fn print_help() {
    println!("🔨 Wordforge - brute-force wordlist generation");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    wordforge");
    println!();
    println!("All parameters are collected interactively:");
    println!("    • Minimum and maximum word length");
    println!("    • Character set (built-in 95-symbol set, or custom symbols)");
    println!("    • Output file path (must end with .txt, tab-completion available)");
    println!("    • Verbosity level 0-{} for progress reporting", MAX_VERBOSITY);
    println!();
    println!("Before anything is written, wordforge shows the exact candidate");
    println!("count and a rough output size, and asks for confirmation.");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
