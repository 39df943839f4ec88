//! # Sorrel Expression Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the Sorrel
//! expression language, a small embeddable language for arithmetic, logical,
//! comparison, and bitwise expressions over host-supplied data.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, variables, calls, operations)
//! - **[operators]** - Unary and binary operators
//!
//! ## Core Concepts
//!
//! ### Expressions Only
//!
//! Every input is a single expression; there are no statements, assignments,
//! or loops. Control flow is limited to the short-circuiting `&&` and `||`
//! operators.
//!
//! ```text
//! #price * 1.1 > 100 && $region == 'eu'
//! ```
//!
//! ### Host Resolvers
//!
//! Variables (`#name`, `$name`), functions (`name(...)`), and comparisons of
//! host-defined values are all bridged to the embedding application through
//! resolver callbacks supplied at evaluation time. The AST itself carries no
//! bindings.
//!
//! ### Precedence
//!
//! Binary operators fold left-associatively over nine tiers, lowest first:
//!
//! ```text
//! || -> && -> == != -> > >= < <= -> | -> & -> + - -> * / % -> primary
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::{BinOp, UnaryOp};
pub use tokens::Token;
