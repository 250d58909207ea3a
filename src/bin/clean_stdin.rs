//! Simple CLI that reads wikitext from stdin (or a file) and outputs JSON.
//!
//! The text is cleaned with default options and links are extracted from the
//! cleaned result, so every offset indexes the emitted `text`.

use std::env;
use std::fs;
use std::io::{self, Read};

use wikitext_clean::clean_and_extract;

fn main() -> Result<(), wikitext_clean::Error> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let raw = if args.len() > 1 {
        fs::read(&args[1])?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    let text = wikitext_clean::encoding::transcode_to_utf8(&raw);
    log::info!("Read {} bytes of wikitext", text.len());

    let output = clean_and_extract(&text);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
