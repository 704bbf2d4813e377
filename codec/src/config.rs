use crate::error::{Result, TermError, ROOT};
use serde::{Deserialize, Serialize};

/// Default nesting limit applied by the wire codec.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Deepest term whose wire messages stay under prost's decode recursion
/// limit of 100 nested messages (a list level costs three: Par, Expr, EList).
pub const MAX_WIRE_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(TermError::schema(ROOT, "max_depth must be at least 1"));
        }
        if self.max_depth > MAX_WIRE_DEPTH {
            return Err(TermError::schema(
                ROOT,
                format!(
                    "max_depth {} exceeds the wire nesting ceiling of {}",
                    self.max_depth, MAX_WIRE_DEPTH
                ),
            ));
        }
        Ok(())
    }
}
