//! Debug command: `parse` for inspecting the AST.

use super::{parse_text, read_file};

/// Parse a file and print the canonical rendering of its AST.
pub fn parse_file(path: &str) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };

    match parse_text(&content) {
        Ok(rendered) => {
            println!("{rendered}");
            true
        }
        Err(e) => {
            eprintln!("{}", e.to_diagnostic());
            false
        }
    }
}
