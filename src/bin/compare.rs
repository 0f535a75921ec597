extern crate rust_stemmers;
extern crate rustem;

use std::env;

use rust_stemmers::{Algorithm, Stemmer};

// Side-by-side view against the Snowball Russian stemmer from
// rust-stemmers. The two algorithms are close relatives, not twins, so
// differences are expected on some words; this tool exists to eyeball them.
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("Usage: compare <word1> <word2> ...");
        return;
    }

    let snowball = Stemmer::create(Algorithm::Russian);

    let mut same = 0;
    let mut different = 0;
    let mut rejected = 0;

    println!("{:25} {:15} {:15}", "word", "rustem", "snowball");
    for word in &args {
        let lower = word.to_lowercase();
        let reference = snowball.stem(&lower);
        match rustem::stem(word) {
            Some(stem) => {
                let marker = if stem == reference {
                    same += 1;
                    ""
                } else {
                    different += 1;
                    "  <- differs"
                };
                println!("{:25} {:15} {:15}{}", word, stem, reference, marker);
            }
            None => {
                rejected += 1;
                println!("{:25} (rejected)       {:15}", word, reference);
            }
        }
    }

    println!();
    println!(
        "{} same, {} different, {} rejected",
        same, different, rejected
    );
}
