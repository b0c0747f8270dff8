use prefixcode::{FrequencyTable, Tree};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = env::args().nth(1).unwrap_or_else(|| String::from("aabbbcc"));

    let table = FrequencyTable::count(text.bytes());
    let tree = Tree::build(&table)?;
    let nodes = tree.nodes();

    println!("digraph g {{");
    for node in &nodes {
        match node.symbol {
            Some(symbol) => println!(
                "    node{} [label=\"{},{}\"];",
                node.id,
                char::from(symbol).escape_default(),
                node.weight
            ),
            None => println!("    node{} [label=\"{}\"];", node.id, node.weight),
        }
    }
    for node in &nodes {
        for child in [node.left, node.right].into_iter().flatten() {
            println!("    node{} -> node{}", node.id, child);
        }
    }
    println!("}}");

    Ok(())
}
