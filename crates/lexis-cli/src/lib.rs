// lexis-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use lexis_dawg::Dawg;

/// Default dictionary file name.
const DAWG_FILE: &str = "dawg.dat";

/// Locate a dictionary file and load it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `LEXIS_DICT_PATH` environment variable (file or directory)
/// 3. `dawg.dat` in the current working directory
pub fn load_dawg(dict_path: Option<&str>) -> Result<Dawg, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            return Dawg::from_path(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a dictionary file in any of:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary file paths.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LEXIS_DICT_PATH environment variable: a file, or a directory
    //    containing the default file name
    if let Ok(env_path) = std::env::var("LEXIS_DICT_PATH") {
        let p = PathBuf::from(&env_path);
        if p.is_dir() {
            paths.push(p.join(DAWG_FILE));
        } else {
            paths.push(p);
        }
    }

    // 3. Current directory fallback
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DAWG_FILE));
    }

    paths
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
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
