//! Interactive parameter collection.
//!
//! Asks for each cache parameter and the trace path in turn. Generic over the reader
//! and writer so it can be driven from a buffer in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use cachesim_core::config::{CacheConfig, ReplacementPolicy};

use crate::CliError;

/// Reads one answer after printing `question`.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}: ")?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer for `{question}`"),
        ));
    }
    Ok(answer.trim().to_owned())
}

fn ask_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    question: &str,
) -> Result<T, CliError> {
    let answer = ask(input, output, question)?;
    answer
        .parse()
        .map_err(|_| CliError::InvalidNumber { field, value: answer })
}

/// Prompts for the full configuration and the trace file path.
///
/// # Errors
///
/// Returns [`CliError::InvalidNumber`] for a non-numeric answer, a configuration
/// error for an unknown policy name, and an I/O error if input ends early.
pub fn collect<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<(CacheConfig, PathBuf), CliError> {
    let address_bits = ask_number(
        &mut input,
        &mut output,
        "address bits",
        "Enter the width of the address space in bits (e.g. '32' for 2^32 bytes)",
    )?;
    let block_size = ask_number(
        &mut input,
        &mut output,
        "block size",
        "Enter the block size in bytes, a power of 2 (e.g. '16')",
    )?;
    let block_count = ask_number(
        &mut input,
        &mut output,
        "block count",
        "Enter the number of blocks, a power of 2 (e.g. '64')",
    )?;
    let associativity = ask_number(
        &mut input,
        &mut output,
        "associativity",
        "Enter the associativity (e.g. '2' for 2-way set-associative)",
    )?;
    let policy: ReplacementPolicy = ask(
        &mut input,
        &mut output,
        "Enter the replacement policy (LRU/MRU/LOOKAHEAD)",
    )?
    .parse()?;
    let trace = ask(
        &mut input,
        &mut output,
        "Enter the trace file name (e.g. 'addresses.txt')",
    )?;

    let config = CacheConfig::new(address_bits, block_size, block_count, associativity, policy);
    Ok((config, PathBuf::from(trace)))
}
