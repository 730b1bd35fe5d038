//! SystemVerilog lexer CLI.

use sv_lexer::KeywordVersion;
use svlex::commands::{explain_code, lex_file, list_keywords, parse_lex_options};

fn main() {
    svlex::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: svlex lex <file.sv> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max-errors=<n>      Stop reporting after n diagnostics (default: 16)");
                eprintln!("  --keywords=<version>  Keyword set, e.g. 1364-2005 (default: 1800-2017)");
                eprintln!("  --no-trivia           Do not list whitespace and comments");
                std::process::exit(1);
            }

            let (config, path) = match parse_lex_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };

            match lex_file(&path, &config) {
                Ok(report) if report.has_errors() => std::process::exit(1),
                Ok(_) => {}
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "keywords" => {
            let version = match args.get(2) {
                None => KeywordVersion::LATEST,
                Some(spec) => {
                    let Some(version) = KeywordVersion::from_specifier(spec) else {
                        eprintln!("error: unknown keyword version '{spec}'");
                        std::process::exit(1);
                    };
                    version
                }
            };
            list_keywords(version);
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: svlex explain <code>");
                std::process::exit(1);
            };
            if !explain_code(code) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("svlex {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("SystemVerilog lexer");
    println!();
    println!("Usage: svlex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.sv>         Tokenize and display tokens and diagnostics");
    println!("  keywords [version]    List reserved words (default: 1800-2017)");
    println!("  explain <code>        Describe a diagnostic code (e.g., L0208)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Lex options:");
    println!("  --max-errors=<n>      Stop reporting after n diagnostics (default: 16)");
    println!("  --keywords=<version>  Keyword set, e.g. 1364-2005 (default: 1800-2017)");
    println!("  --no-trivia           Do not list whitespace and comments");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sv_lexer=trace) to enable tracing.");
}
