//! # rhoterm
//!
//! Deterministic transcoding between JSON-like data and Rholang terms.
//!
//! ## Features
//!
//! - **`codec`** (default) - term AST, encoder, decoder, printer and `Par` wire codec
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! rhoterm = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use rhoterm::prelude::*;
//!
//! let term = encode_json(&json!({"amount": 10, "to": "alice"}))?;
//! let payload = to_bytes(&term)?;
//! println!("{}", print(&term)?);
//! ```

// Re-export the codec crate
#[cfg(feature = "codec")]
pub use rhoterm_codec as codec;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "codec")]
    pub use rhoterm_codec::{
        decode, encode, encode_json, encode_serialize, from_bytes, print, to_bytes, CodecConfig,
        Literal, NativeValue, Term, TermError, WireCodec,
    };

    #[cfg(feature = "codec")]
    pub use serde_json::json;
}
