//! # rhoterm-codec
//!
//! Transcoding between JSON-like data and the restricted Rholang terms used
//! to carry data to and from a node.
//!
//! Four independent projections share one AST:
//!
//! - **Encoder** - native values to terms, maps as key-sorted parallel sends
//! - **Decoder** - terms back to native values
//! - **Printer** - terms as Rholang source text
//! - **Wire codec** - terms to and from `Par` protobuf bytes
//!
//! ## Example
//!
//! ```rust,ignore
//! use rhoterm_codec::{decode, encode_json, print, to_bytes};
//! use serde_json::json;
//!
//! let term = encode_json(&json!({"b": 1, "a": 2}))?;
//! assert_eq!(print(&term)?, r#"@"a"!(2) | @"b"!(1)"#);
//!
//! let payload = to_bytes(&term)?;
//! let value = decode(&term)?;
//! ```
//!
//! All functions are pure: no I/O, no shared state, and the same input
//! always yields the same output.

pub mod ast;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod native;
pub mod printer;
pub mod wire;

pub use ast::{Literal, Send, Term, TermKind};
pub use config::{CodecConfig, DEFAULT_MAX_DEPTH, MAX_WIRE_DEPTH};
pub use decoder::decode;
pub use encoder::{encode, encode_json, encode_serialize};
pub use error::{Result, TermError};
pub use native::NativeValue;
pub use printer::print;
pub use wire::{from_bytes, lift, to_bytes, WireCodec};
