//! Token stream adapters
//!
//! Collaborator module: turns raw sources (strings, readers, the process
//! argument vector) into the `Vec<String>` the classifier consumes.

use std::io::BufRead;

use crate::errors::Result;

/// Split a string into whitespace-delimited tokens, dropping empties.
pub fn split_tokens(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Drain a reader and split its contents into tokens.
pub fn read_tokens<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(split_tokens(&buffer))
}

/// The process argument vector: argv[0] (when present) and the remaining
/// tokens, conventionally the parse input.
pub fn os_tokens() -> (Option<String>, Vec<String>) {
    let mut argv = std::env::args();
    let arg0 = argv.next();
    (arg0, argv.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        assert_eq!(
            split_tokens("  -hvac\t--opt  world\n"),
            ["-hvac", "--opt", "world"]
        );
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("   \n\t").is_empty());
    }

    #[test]
    fn test_read_tokens() {
        let input = "one two\nthree";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(tokens, ["one", "two", "three"]);
    }
}
