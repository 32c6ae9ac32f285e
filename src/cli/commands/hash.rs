//! Hash command implementation
//!
//! Prints the digest that `run` would substitute for each given value, one per
//! line. Lets an operator find the pseudonym of a known identifier in an
//! anonymized file.

use crate::anonymization::anonymize_value;
use clap::Args;
use std::io::{BufRead, Write};

/// Arguments for the hash command
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Values to hash; reads one value per line from stdin when omitted
    pub values: Vec<String>,
}

impl HashArgs {
    /// Execute the hash command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.values.is_empty() {
            let stdin = std::io::stdin();
            hash_lines(stdin.lock(), &mut out)?;
        } else {
            for value in &self.values {
                writeln!(out, "{}", anonymize_value(value))?;
            }
        }

        out.flush()?;
        Ok(0)
    }
}

/// Hash each line of `input` to `output`
///
/// Line terminators (`\n` or `\r\n`) are not part of the hashed value.
fn hash_lines<R: BufRead, W: Write>(input: R, output: &mut W) -> anyhow::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", anonymize_value(&line))?;
        count += 1;
    }
    tracing::debug!(count, "Hashed values from stdin");
    Ok(count)
}
