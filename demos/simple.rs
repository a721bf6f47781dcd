//! Parse a tag string, inspect it and print it back.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use structtag::parse;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"json:"name,omitempty" validate:"oneof:\"a,b\",required" hcl:"-""#;

    let tags = parse(input)?;
    for tag in &tags {
        println!(
            "{:<10} value={:?} modifiers={:?}",
            tag.key,
            tag.value(),
            tag.modifiers()
        );
    }

    assert_eq!(tags.to_string(), input);
    println!("✓ Round-trip successful");

    Ok(())
}
