/// Dataset Linter — checks a move listing against an output rule set.
///
/// Usage: dataset_linter <listing.txt> [--rules <rules.ron>]
use std::path::Path;
use std::process;

use contest_moves::core::parser;
use contest_moves::core::rules::RuleSet;
use contest_moves::core::table::MoveTable;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: dataset_linter <listing.txt> [--rules <rules.ron>]");
        process::exit(0);
    }

    let listing_path = &args[1];
    let mut rules_path = None;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--rules" && i + 1 < args.len() {
            i += 1;
            rules_path = Some(args[i].clone());
        }
        i += 1;
    }

    let listing = std::fs::read_to_string(listing_path).unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to read listing '{}': {}", listing_path, e);
        process::exit(1);
    });

    let rules = match rules_path {
        Some(ref path) => match RuleSet::load_from_ron(Path::new(path)) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("ERROR: Failed to load rules from '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => RuleSet::builtin(),
    };

    println!(
        "Linting '{}' against {} output rules",
        listing_path,
        rules.len()
    );

    let (errors, warnings, dropped) = lint_listing(&listing, &rules);

    println!("\n=== Dataset Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings, {} moves match no rule and will be dropped",
        errors.len(),
        warnings.len(),
        dropped
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_listing(listing: &str, rules: &RuleSet) -> (Vec<String>, Vec<String>, usize) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut table = MoveTable::new();

    for (idx, line) in listing.lines().enumerate() {
        match parser::split_line(line) {
            Ok(Some(entry)) => {
                let name = entry.name.clone();
                let description = entry.description.clone();

                if name.contains('|') {
                    warnings.push(format!(
                        "line {}: name '{}' contains '|', which collides with the record delimiter",
                        idx + 1,
                        name
                    ));
                }

                match table.insert(entry) {
                    Some(displaced) if displaced != description => {
                        errors.push(format!(
                            "line {}: duplicate name '{}' discards earlier description {:?}",
                            idx + 1,
                            name,
                            displaced
                        ));
                    }
                    Some(_) => {
                        warnings.push(format!(
                            "line {}: duplicate name '{}' repeats an identical description",
                            idx + 1,
                            name
                        ));
                    }
                    None => {}
                }
            }
            Ok(None) => {}
            Err(e) => {
                errors.push(format!("line {}: {}", idx + 1, e));
            }
        }
    }

    let mut dropped = 0;
    for (name, description) in table.iter() {
        match rules.apply(name, description) {
            Some(record) => {
                if record.effect.contains('|') {
                    warnings.push(format!(
                        "move '{}': emitted effect text contains '|', which collides with the record delimiter",
                        name
                    ));
                }
            }
            None => dropped += 1,
        }
    }

    (errors, warnings, dropped)
}
