// lexis-words: stream every dictionary word to stdout, alphabetically.
//
// Usage:
//   lexis-words [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (default: dawg.dat)
//   -c, --count            Print only the word count
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexis_cli::parse_dict_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-words: stream every dictionary word to stdout, alphabetically.");
        println!();
        println!("Usage: lexis-words [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (default: dawg.dat)");
        println!("  -c, --count            Print only the word count");
        println!("  -h, --help             Print this help");
        return;
    }

    let count_only = args.iter().any(|a| a == "-c" || a == "--count");

    let dawg = lexis_cli::load_dawg(dict_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    if count_only {
        println!("{}", dawg.len());
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in dawg.words() {
        if writeln!(out, "{word}").is_err() {
            // Broken pipe (e.g. piped into head); stop quietly.
            break;
        }
    }
}
