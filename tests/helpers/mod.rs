//! Shared test helpers: a C lexer, a translation-unit builder and fixtures.
#![allow(dead_code)]

pub mod c_lexer;
