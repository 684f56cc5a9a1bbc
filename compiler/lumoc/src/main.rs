//! Lumo CLI
//!
//! Evaluates JSON-encoded literal trees.

use lumoc::commands::{eval_source, parse_file, run_file};
use lumoc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let success = match command.as_str() {
        "run" => {
            let json = args.iter().skip(2).any(|a| a == "--json");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with("--")) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lumoc run <file.json> [--json]");
                std::process::exit(1);
            };
            run_file(path, json)
        }
        "eval" => {
            let json = args.iter().skip(2).any(|a| a == "--json");
            let Some(source) = args.iter().skip(2).find(|a| *a != "--json") else {
                eprintln!("error: missing program text");
                eprintln!("Usage: lumoc eval '<json>' [--json]");
                std::process::exit(1);
            };
            eval_source(source, json)
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lumoc parse <file.json>");
                std::process::exit(1);
            }
            parse_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("lumoc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            // A bare `.json` path is shorthand for `run`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                run_file(command, false)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                false
            }
        }
    };

    if !success {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Lumo interpreter");
    println!();
    println!("Usage: lumoc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.json>      Evaluate the program in a file");
    println!("  eval '<json>'        Evaluate a program given inline");
    println!("  parse <file.json>    Parse and print the canonical AST");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options (run, eval):");
    println!("  --json               Print a JSON result object");
    println!();
    println!("Program encoding:");
    println!("  numbers, true/false  literals");
    println!("  \"name\"               identifier");
    println!("  {{\"string\": \"s\"}}      string literal");
    println!("  [ ... ]              list (if / lambda / application)");
    println!();
    println!("Examples:");
    println!("  lumoc eval '[\"+\", 1, 2]'");
    println!("  lumoc eval '[[\"x\", \"=>\", [\"*\", \"x\", \"x\"]], 7]' --json");
    println!("  lumoc run program.json");
    println!("  RUST_LOG=lumo_eval=debug lumoc run program.json");
}
