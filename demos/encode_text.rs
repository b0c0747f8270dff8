use prefixcode::{report, FrequencyTable, Tree};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = env::args().nth(1).unwrap_or_else(|| String::from("aabbbcc"));

    let table = FrequencyTable::count(text.bytes());
    let tree = Tree::build(&table)?;
    let codes = tree.codes();

    println!(
        "{:<15}{:<15}{:<15}{:<15}",
        "Symbol", "Character", "Frequency", "Code"
    );
    for row in report::symbol_reports(&table, &codes)? {
        println!(
            "{:<15}{:<15}{:<15}{:<15}",
            row.symbol, row.printable, row.frequency, row.code
        );
    }

    let (encoder, decoder) = tree.into_encoder_decoder_pair();
    let bits = encoder.encode(text.bytes())?;

    println!("\nEncoded text: {}", report::code_string(&bits));

    let decoded = decoder.decode(&bits)?;
    assert_eq!(decoded, text.as_bytes());

    Ok(())
}
