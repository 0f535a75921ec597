extern crate failure;
extern crate rustem;

use std::env;

use rustem::batch::{stem_file, write_json, write_stems};

fn main() -> Result<(), failure::Error> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (input, output) = match (args.get(0), args.get(1)) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            println!("Usage: batch <words-file> <output-file> [--json]");
            return Ok(());
        }
    };
    let json = args.iter().any(|a| a == "--json");

    let records = stem_file(input)?;
    if json {
        write_json(&records, output)?;
    } else {
        write_stems(&records, output)?;
    }

    println!("stemmed {} words into {}", records.len(), output);
    Ok(())
}
