//! BCML Format Specification
//!
//! This module documents the BCML text format as implemented by this
//! library. BCML is a line-oriented, UTF-8 key-value format with typed
//! scalars, flat arrays, and nested blocks.
//!
//! # Overview
//!
//! A file is a sequence of comments, blank lines, and entries:
//!
//! ```text
//! # comment line (ignored)
//! key: value
//! key: [v1, v2, v3]
//! key: {
//!     nestedKey: value
//! }
//! ```
//!
//! Informal grammar:
//!
//! ```text
//! file   := (comment | blank | entry)*
//! entry  := key ':' value
//! value  := scalar | array | '{' entry '}'
//! array  := '[' scalar (',' scalar)* ']'
//! scalar := integer | float | boolean | char | string | ''
//! ```
//!
//! An empty scalar means "no value": `key:` is a valid entry whose line
//! carries a key and nothing else.
//!
//! # Scalar inference
//!
//! Keys and unbracketed value tokens are typed by inference, in this
//! order:
//!
//! | Try | Result kind | Example |
//! |-----|-------------|---------|
//! | 32-bit signed integer | int | `30`, `-7` |
//! | 64-bit float | double | `3.14`, `3000000000` |
//! | `true` / `false` (case-insensitive) | bool | `TRUE` |
//! | exactly one character | char | `x` |
//! | anything else | string | `age` |
//!
//! Note the consequences: an integer wider than 32 bits becomes a
//! double, and a one-character token is a char, never a string — so the
//! key of `a: 1` is a *char* key and cannot share a document with the
//! *string* key of `age: 30`.
//!
//! # Key kinds
//!
//! A document is monomorphic in key kind. The first entry fixes the
//! kind; appending or parsing an entry whose key infers to a different
//! kind is an error.
//!
//! # Canonical rendering
//!
//! - String keys and string values are double-quoted: `"age": "old"`
//! - Whole-number floats keep one decimal digit (`30.0`), so re-parsing
//!   infers a float again
//! - Arrays render comma-separated in brackets: `[1, 2, 3]`
//! - A nested line renders as a brace block, one tab of indent per
//!   level:
//!
//! ```text
//! a: {
//!     b: 1
//! }
//! ```
//!
//! # Parsing model and known limitations
//!
//! Parsing strips **all** whitespace, braces, and double quotes from a
//! logical line before splitting at the first `:`. This is a blunt
//! normalization, not a lexer:
//!
//! - embedded spaces inside string values are lost (`a b` reads back as
//!   `ab`)
//! - quotes never protect anything; they are decoration on output only
//!
//! Before line parsing, physical lines are trimmed, blank lines and
//! `#`-comments dropped, and brace blocks collapsed onto single logical
//! lines by a brace-depth scan. Brackets are not part of that scan, so
//! an array value spread over several physical lines does not survive;
//! keep arrays on one line.
//!
//! Flat documents of scalar entries round-trip exactly. Nested blocks
//! round-trip structurally at any depth the collapse pass can see, but
//! not byte-for-byte (indentation is normalized).
