// Quick test: load a dictionary file and probe a few words.
use lexis_dawg::Dawg;

fn main() {
    let dict_path = std::env::args().nth(1).unwrap_or_else(|| "dawg.dat".to_string());

    let dawg = match Dawg::from_path(&dict_path) {
        Ok(dawg) => dawg,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {}: {} edges, start index {}, {} words",
        dict_path,
        dawg.edge_count(),
        dawg.start_index(),
        dawg.len(),
    );

    let probes = ["a", "and", "the", "zebra", "qqqq"];
    for probe in &probes {
        println!(
            "{:8} word: {:5}  prefix: {}",
            probe,
            dawg.contains(probe),
            dawg.contains_prefix(probe),
        );
    }

    println!("\nFirst 10 words:");
    for word in dawg.words().take(10) {
        println!("  {word}");
    }
}
