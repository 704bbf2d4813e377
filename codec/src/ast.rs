use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Term AST - the restricted process shapes used to carry JSON-like data
// ============================================================================

/// Ground value held by a leaf term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// One node of the term tree.
///
/// A node is exactly one variant. Blended nodes (several expressions, or
/// expressions next to sends) only exist in raw wire messages and are
/// rejected when those are lifted into a `Term`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Term {
    Literal(Literal),
    ListLiteral(Vec<Term>),
    /// Parallel composition of sends; the encoding of a key/value map.
    ParallelSends(Vec<Send>),
    /// The empty process; the encoding of `null`.
    Nil,
}

/// A single `@channel!(payload)` entry of a [`Term::ParallelSends`].
///
/// The payload is a sequence to match the wire schema, but well-formed
/// entries hold exactly one term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Send {
    channel: Term,
    payload: Vec<Term>,
}

impl Send {
    pub fn new(channel: Term, payload: Vec<Term>) -> Self {
        Self { channel, payload }
    }

    /// Entry for map key `key` holding `value`.
    pub fn entry(key: impl Into<String>, value: Term) -> Self {
        Self::new(Term::string(key), vec![value])
    }

    pub fn channel(&self) -> &Term {
        &self.channel
    }

    pub fn payload(&self) -> &[Term] {
        &self.payload
    }

    /// The channel's key text when the channel is a string literal.
    pub fn key(&self) -> Option<&str> {
        match &self.channel {
            Term::Literal(Literal::Str(s)) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Bool,
    Int,
    Str,
    ListLiteral,
    ParallelSends,
    Nil,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermKind::Bool => "bool literal",
            TermKind::Int => "int literal",
            TermKind::Str => "string literal",
            TermKind::ListLiteral => "list literal",
            TermKind::ParallelSends => "parallel sends",
            TermKind::Nil => "Nil",
        };
        f.write_str(name)
    }
}

impl Term {
    pub fn bool(value: bool) -> Self {
        Term::Literal(Literal::Bool(value))
    }

    pub fn int(value: i64) -> Self {
        Term::Literal(Literal::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal(Literal::Str(value.into()))
    }

    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::ListLiteral(items.into_iter().collect())
    }

    pub fn sends(entries: impl IntoIterator<Item = Send>) -> Self {
        Term::ParallelSends(entries.into_iter().collect())
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Literal(Literal::Bool(_)) => TermKind::Bool,
            Term::Literal(Literal::Int(_)) => TermKind::Int,
            Term::Literal(Literal::Str(_)) => TermKind::Str,
            Term::ListLiteral(_) => TermKind::ListLiteral,
            Term::ParallelSends(_) => TermKind::ParallelSends,
            Term::Nil => TermKind::Nil,
        }
    }

    /// Nesting depth; leaves count as 1.
    pub fn depth(&self) -> usize {
        match self {
            Term::Literal(_) | Term::Nil => 1,
            Term::ListLiteral(items) => 1 + items.iter().map(Term::depth).max().unwrap_or(0),
            Term::ParallelSends(entries) => {
                1 + entries
                    .iter()
                    .flat_map(|send| std::iter::once(&send.channel).chain(send.payload.iter()))
                    .map(Term::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}
