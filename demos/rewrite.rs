//! Rewrite tags the way a code generator would: rename, add modifiers,
//! drop a key and sort for stable output.
//!
//! Run with: cargo run --example rewrite

use std::error::Error;
use structtag::{parse, Tag};

fn main() -> Result<(), Box<dyn Error>> {
    let mut tags = parse(r#"json:"Name" xml:"name,attr" db:"name""#)?;
    println!("before: {}", tags);

    tags.set(Tag::new("json", ["name"]))?;
    tags.add_options("json", ["omitempty"]);
    tags.delete_options("xml", ["attr"]);
    tags.delete("db");
    tags.set(Tag::new("yaml", ["name", "omitempty"]))?;
    tags.sort();

    println!("after:  {}", tags);
    assert_eq!(
        tags.to_string(),
        r#"json:"name,omitempty" xml:"name" yaml:"name,omitempty""#
    );

    Ok(())
}
