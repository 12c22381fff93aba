//! Record parsing
//!
//! Turns one raw input line of the form `<key>;<value>` into a typed
//! [`Record`]. Parsing is pure and never recovers: every malformed line is
//! reported as a [`ParseError`](crate::error::ParseError) and the caller picks
//! the policy.
//!
//! # Example
//!
//! ```
//! use stationstats::record::parse;
//!
//! let record = parse("Hamburg;12.0\n").unwrap();
//! assert_eq!(record.key, "Hamburg");
//! assert_eq!(record.value, 12.0);
//!
//! assert!(parse("Hamburg").is_err());
//! ```

mod parser;

pub use parser::{parse, parse_bytes, Record, DELIMITER};
