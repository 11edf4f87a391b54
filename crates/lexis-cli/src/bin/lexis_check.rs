// lexis-check: look up words from stdin in a DAWG dictionary.
//
// Reads words from stdin (one per line) and reports whether each is in
// the dictionary:
//   Y: word    (present)
//   N: word    (absent)
//
// Usage:
//   lexis-check [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (default: dawg.dat)
//   -p, --prefix           Query prefix membership instead of exact words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexis_cli::parse_dict_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-check: look up words from stdin in a DAWG dictionary.");
        println!();
        println!("Usage: lexis-check [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  Y: word    (present)");
        println!("  N: word    (absent)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (default: dawg.dat)");
        println!("  -p, --prefix           Query prefix membership instead of exact words");
        println!("  -h, --help             Print this help");
        return;
    }

    let prefix_mode = args.iter().any(|a| a == "-p" || a == "--prefix");

    let dawg = lexis_cli::load_dawg(dict_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let found = if prefix_mode {
            dawg.contains_prefix(word)
        } else {
            dawg.contains(word)
        };
        let _ = writeln!(out, "{}: {word}", if found { 'Y' } else { 'N' });
    }
}
