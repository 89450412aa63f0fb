/// Move Extractor — turns a flavor-text move listing into an effect-record file.
///
/// Usage: move_extractor --input <listing.txt> --output <moves.txt> [--rules <rules.ron>] [--newline]
use std::path::Path;
use std::process;

use contest_moves::core::emit::RecordSeparator;
use contest_moves::core::extract::Extractor;
use contest_moves::core::rules::RuleSet;

const USAGE: &str =
    "Usage: move_extractor --input <listing.txt> --output <moves.txt> [--rules <rules.ron>] [--newline]";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input = None;
    let mut output = None;
    let mut rules_path = None;
    let mut separator = RecordSeparator::None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" if i + 1 < args.len() => {
                i += 1;
                input = Some(args[i].clone());
            }
            "--output" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--rules" if i + 1 < args.len() => {
                i += 1;
                rules_path = Some(args[i].clone());
            }
            "--newline" => {
                separator = RecordSeparator::Newline;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input.unwrap_or_else(|| {
        eprintln!("Error: --input is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let output_path = output.unwrap_or_else(|| {
        eprintln!("Error: --output is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let rules = match rules_path {
        Some(ref path) => RuleSet::load_from_ron(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error loading rules from '{}': {}", path, e);
            process::exit(1);
        }),
        None => RuleSet::builtin(),
    };

    let listing = std::fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading listing '{}': {}", input_path, e);
        process::exit(1);
    });

    println!("Parsing move listing from '{}'...", input_path);
    let extractor = Extractor::with_rules(rules).separator(separator);

    let extraction = extractor
        .run(&listing, Path::new(&output_path))
        .unwrap_or_else(|e| {
            eprintln!("Error writing records to '{}': {}", output_path, e);
            process::exit(1);
        });

    for skip in &extraction.skipped {
        eprintln!("Skipped line {} (no separator): {:?}", skip.line_no, skip.text);
    }

    println!(
        "Table built: {} moves, {} lines skipped",
        extraction.table.len(),
        extraction.skipped.len()
    );
    println!(
        "Wrote {} records to '{}'",
        extraction.records.len(),
        output_path
    );
}
