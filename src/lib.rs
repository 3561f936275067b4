//! A parser for the CPLEX-style LP (linear/mixed-integer/quadratic
//! programming) file format.
//!
//! The pipeline is a raw-token lexer, a context-aware classifier, a
//! section splitter, and one recursive-descent processor per section kind,
//! all feeding a single model builder. See [`parser::parse`] for the entry
//! point.
//!
//! ```no_run
//! let model = lp_parser_rs::parse_str("min\n obj: x + y\n st\n c1: x + y <= 10\n end\n").unwrap();
//! println!("{model}");
//! ```

pub mod builder;
pub mod classify;
pub mod error;
pub mod interner;
pub mod lexer;
pub mod model;
pub mod parse;
pub mod parser;
pub mod section;
pub mod source;
pub mod token;

pub use error::{LpError, LpResult, Position};
pub use interner::VarId;
pub use model::Model;
pub use parser::{parse, parse_file, parse_str};
