// GraphQL style HIR
// Resolves one schema document into a read-only symbol table of named types.
// Style rules query the table; they never touch syntax directly.

mod error;
mod line_index;
mod structure;
mod table;

pub use error::{BuildError, Result};
pub use line_index::LineIndex;
pub use structure::*;
pub use table::{parse_schema, RootTypeNames, SymbolTable};
