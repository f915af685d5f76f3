//! hdoc — surface the documented API of a C-family header tree.
//!
//! Each header goes through text-substitution passes only, no AST:
//! literals and block comments are shielded, `//` runs become doc markers,
//! brace bodies fold away, and what is left at top level is split into
//! class-like and function-like declarations.

pub mod discover;
pub mod model;
pub mod parser;
pub mod render;
pub mod table;

pub use model::{Declaration, DeclarationKind, Display, HeaderDocument, Page};
pub use parser::{parse_header, HeaderFilter, Rejection};
