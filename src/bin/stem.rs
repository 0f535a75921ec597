extern crate rustem;

use std::env;

use rustem::stem;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("Usage: stem <word1> <word2> ...");
        return;
    }

    for word in args {
        match stem(&word) {
            Some(stem) => {
                let len = stem.chars().count();
                println!("{:25} → {:15} ({} chars)", word, stem, len);
            }
            None => println!("{:25} → (not a russian word)", word),
        }
    }
}
