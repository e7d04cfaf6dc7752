//! Error types and error handling for the front end.
//!
//! Both engines report through the same diagnostic record:
//!
//! - Error structures with source span information
//! - Specific error variants for lexing and parsing
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
