//! A Python abstract syntax tree, modeled as closed sum types.
//!
//! Each syntactic category (`Stmt`, `Expr`) is an enum over one owned struct
//! per node kind; auxiliary structural kinds (parameter lists, keyword
//! arguments, import aliases, exception handlers, comprehension clauses) only
//! ever appear as fields of statement or expression nodes. Nodes carry no
//! source locations and no parent links, and derived [`PartialEq`] is
//! structural equivalence: two trees compare equal iff they have the same
//! kind/field shape and equal literal values.

pub use node::{AnyNodeRef, Field};
pub use nodes::*;

mod node;
mod nodes;
