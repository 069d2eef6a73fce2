//! Frontend
//!
//! Lexical analysis for MiniFilter. Parsing is left to consumers of the
//! Program Internal Form.

pub mod lexer;
