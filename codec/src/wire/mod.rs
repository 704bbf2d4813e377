//! Term AST ↔ `Par` wire bytes.
//!
//! Bytes produced here are signed downstream, so encoding is deterministic:
//! prost writes fields in tag order and omits proto3 defaults, and terms are
//! validated before anything is written.

pub mod proto;

use crate::ast::{Literal, Send, Term};
use crate::config::CodecConfig;
use crate::error::{index_path, key_path, Result, TermError, ROOT};
use prost::Message;
use proto::expr::ExprInstance;
use proto::{EList, Expr, Par};

/// Serializes a term with the default configuration.
pub fn to_bytes(term: &Term) -> Result<Vec<u8>> {
    WireCodec::default().to_bytes(term)
}

/// Deserializes a term with the default configuration.
pub fn from_bytes(bytes: &[u8]) -> Result<Term> {
    WireCodec::default().from_bytes(bytes)
}

#[derive(Debug, Clone, Default)]
pub struct WireCodec {
    config: CodecConfig,
}

impl WireCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn to_bytes(&self, term: &Term) -> Result<Vec<u8>> {
        self.validate(term)?;
        let bytes = Par::from(term).encode_to_vec();
        tracing::debug!(bytes = bytes.len(), depth = term.depth(), "encoded term");
        Ok(bytes)
    }

    pub fn from_bytes(&self, bytes: &[u8]) -> Result<Term> {
        let par = Par::decode(bytes).map_err(|e| {
            tracing::debug!(bytes = bytes.len(), error = %e, "rejected wire bytes");
            TermError::from(e)
        })?;
        let term = Term::try_from(&par).map_err(TermError::into_decode_failure)?;
        self.validate(&term)
            .map_err(TermError::into_decode_failure)?;
        tracing::debug!(bytes = bytes.len(), depth = term.depth(), "decoded term");
        Ok(term)
    }

    /// Checks the shape the schema expects of data-carrying terms: string
    /// channels, single-term payloads, and bounded nesting.
    pub fn validate(&self, term: &Term) -> Result<()> {
        validate_at(term, ROOT, 1, self.config.max_depth)
    }
}

fn validate_at(term: &Term, path: &str, depth: usize, max_depth: usize) -> Result<()> {
    if depth > max_depth {
        return Err(TermError::schema(
            path,
            format!("term nesting exceeds the limit of {}", max_depth),
        ));
    }
    match term {
        Term::Literal(_) | Term::Nil => Ok(()),
        Term::ListLiteral(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| validate_at(item, &index_path(path, i), depth + 1, max_depth)),
        Term::ParallelSends(entries) => entries.iter().enumerate().try_for_each(|(i, send)| {
            let Some(key) = send.key() else {
                return Err(TermError::schema(
                    index_path(path, i),
                    format!("send channel is {}, expected a string literal", send.channel().kind()),
                ));
            };
            let value_path = key_path(path, key);
            match send.payload() {
                [value] => validate_at(value, &value_path, depth + 1, max_depth),
                payload => Err(TermError::schema(
                    value_path,
                    format!("send payload has {} terms, expected 1", payload.len()),
                )),
            }
        }),
    }
}

// ============================================================================
// Term ↔ Par conversions
// ============================================================================

impl From<&Term> for Par {
    fn from(term: &Term) -> Self {
        match term {
            Term::Literal(literal) => expr_par(match literal {
                Literal::Bool(b) => ExprInstance::GBool(*b),
                Literal::Int(i) => ExprInstance::GInt(*i),
                Literal::Str(s) => ExprInstance::GString(s.clone()),
            }),
            Term::ListLiteral(items) => expr_par(ExprInstance::EListBody(EList {
                ps: items.iter().map(Par::from).collect(),
                ..Default::default()
            })),
            Term::ParallelSends(entries) => Par {
                sends: entries.iter().map(proto::Send::from).collect(),
                ..Default::default()
            },
            Term::Nil => Par::default(),
        }
    }
}

impl From<&Send> for proto::Send {
    fn from(send: &Send) -> Self {
        proto::Send {
            chan: Some(Par::from(send.channel())),
            data: send.payload().iter().map(Par::from).collect(),
            ..Default::default()
        }
    }
}

fn expr_par(instance: ExprInstance) -> Par {
    Par {
        exprs: vec![Expr {
            expr_instance: Some(instance),
        }],
        ..Default::default()
    }
}

/// Lifts a raw schema node into a term.
///
/// Fails with `MalformedTerm` when the node blends several shapes, carries a
/// process kind that does not encode data, or is flagged as a pattern.
pub fn lift(par: &Par) -> Result<Term> {
    term_at(par, ROOT)
}

impl TryFrom<&Par> for Term {
    type Error = TermError;

    fn try_from(par: &Par) -> Result<Self> {
        lift(par)
    }
}

impl TryFrom<Par> for Term {
    type Error = TermError;

    fn try_from(par: Par) -> Result<Self> {
        term_at(&par, ROOT)
    }
}

fn term_at(par: &Par, path: &str) -> Result<Term> {
    let unsupported = par.unsupported_kinds();
    if !unsupported.is_empty() {
        return Err(TermError::malformed(
            path,
            format!("unsupported process kinds: {}", unsupported.join(", ")),
        ));
    }
    reject_pattern(path, "node", par.connective_used, &par.locally_free)?;

    match (par.exprs.as_slice(), par.sends.as_slice()) {
        ([], []) => Ok(Term::Nil),
        ([expr], []) => expr_term(expr, path),
        ([], sends) => sends
            .iter()
            .enumerate()
            .map(|(i, send)| send_term(send, &index_path(path, i)))
            .collect::<Result<_>>()
            .map(Term::ParallelSends),
        (exprs, []) => Err(TermError::malformed(
            path,
            format!("node carries {} expressions, expected at most 1", exprs.len()),
        )),
        (exprs, sends) => Err(TermError::malformed(
            path,
            format!(
                "node carries {} expressions and {} sends, expected one shape",
                exprs.len(),
                sends.len()
            ),
        )),
    }
}

fn expr_term(expr: &Expr, path: &str) -> Result<Term> {
    match &expr.expr_instance {
        Some(ExprInstance::GBool(b)) => Ok(Term::bool(*b)),
        Some(ExprInstance::GInt(i)) => Ok(Term::int(*i)),
        Some(ExprInstance::GString(s)) => Ok(Term::string(s.as_str())),
        Some(ExprInstance::EListBody(list)) => {
            if list.remainder.is_some() {
                return Err(TermError::malformed(path, "list pattern with a remainder"));
            }
            reject_pattern(path, "list", list.connective_used, &list.locally_free)?;
            list.ps
                .iter()
                .enumerate()
                .map(|(i, p)| term_at(p, &index_path(path, i)))
                .collect::<Result<_>>()
                .map(Term::ListLiteral)
        }
        Some(ExprInstance::GUri(_)) => Err(TermError::malformed(path, "unsupported expression: uri")),
        Some(ExprInstance::GByteArray(_)) => Err(TermError::malformed(
            path,
            "unsupported expression: byte array",
        )),
        None => Err(TermError::malformed(
            path,
            "expression has no supported instance",
        )),
    }
}

fn send_term(send: &proto::Send, path: &str) -> Result<Send> {
    if send.persistent {
        return Err(TermError::malformed(path, "persistent send does not encode data"));
    }
    reject_pattern(path, "send", send.connective_used, &send.locally_free)?;
    // An absent channel is the default (empty) Par.
    let channel = match &send.chan {
        Some(chan) => term_at(chan, path)?,
        None => Term::Nil,
    };
    let payload = send
        .data
        .iter()
        .enumerate()
        .map(|(i, p)| term_at(p, &index_path(path, i)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Send::new(channel, payload))
}

/// Ground data never uses connectives or free variables; either flag marks a
/// pattern, and dropping it would change the bytes on re-encode.
fn reject_pattern(
    path: &str,
    what: &str,
    connective_used: bool,
    locally_free: &[u8],
) -> Result<()> {
    if connective_used {
        return Err(TermError::malformed(
            path,
            format!("{} is a pattern (connective_used is set)", what),
        ));
    }
    if !locally_free.is_empty() {
        return Err(TermError::malformed(
            path,
            format!("{} has free variables (locally_free is set)", what),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_json;
    use serde_json::json;

    fn bytes_of(value: serde_json::Value) -> Vec<u8> {
        to_bytes(&encode_json(&value).unwrap()).unwrap()
    }

    #[test]
    fn test_golden_scalars() {
        assert_eq!(bytes_of(json!(null)), Vec::<u8>::new());
        assert_eq!(bytes_of(json!(true)), vec![0x2a, 0x02, 0x08, 0x01]);
        assert_eq!(bytes_of(json!(false)), vec![0x2a, 0x02, 0x08, 0x00]);
        // sint64 is zigzag encoded: 42 -> 84, -1 -> 1.
        assert_eq!(bytes_of(json!(42)), vec![0x2a, 0x02, 0x10, 0x54]);
        assert_eq!(bytes_of(json!(-1)), vec![0x2a, 0x02, 0x10, 0x01]);
        assert_eq!(bytes_of(json!("a")), vec![0x2a, 0x03, 0x1a, 0x01, 0x61]);
    }

    #[test]
    fn test_golden_map() {
        assert_eq!(
            bytes_of(json!({"a": 2})),
            vec![
                0x0a, 0x0d, // sends, 13 bytes
                0x0a, 0x05, 0x2a, 0x03, 0x1a, 0x01, 0x61, // chan = "a"
                0x12, 0x04, 0x2a, 0x02, 0x10, 0x04, // data = [2]
            ]
        );
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let term = encode_json(&json!({"list": [1, "two", null, [false]], "n": -5})).unwrap();
        let bytes = to_bytes(&term).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), term);
    }

    #[test]
    fn test_empty_sends_canonicalize_to_nil() {
        let bytes = to_bytes(&Term::ParallelSends(vec![])).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(from_bytes(&bytes).unwrap(), Term::Nil);
    }

    #[test]
    fn test_schema_violations() {
        let bad_channel = Term::sends([Send::new(Term::int(3), vec![Term::Nil])]);
        assert_eq!(
            to_bytes(&bad_channel).unwrap_err(),
            TermError::schema("$[0]", "send channel is int literal, expected a string literal")
        );

        let bad_payload = Term::list([Term::sends([Send::new(Term::string("k"), vec![])])]);
        assert!(matches!(
            to_bytes(&bad_payload).unwrap_err(),
            TermError::SchemaViolation { ref path, .. } if path == r#"$[0]["k"]"#
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut term = Term::int(0);
        for _ in 0..4 {
            term = Term::list([term]);
        }
        let codec = WireCodec::new(CodecConfig::default().with_max_depth(4));
        assert!(matches!(
            codec.to_bytes(&term).unwrap_err(),
            TermError::SchemaViolation { .. }
        ));
        let bytes = to_bytes(&term).unwrap();
        assert!(matches!(
            codec.from_bytes(&bytes).unwrap_err(),
            TermError::DecodeFailure { .. }
        ));
    }

    #[test]
    fn test_deepest_allowed_term_decodes() {
        let mut term = Term::string("leaf");
        for _ in 1..crate::config::MAX_WIRE_DEPTH {
            term = Term::list([term]);
        }
        assert_eq!(term.depth(), crate::config::MAX_WIRE_DEPTH);
        let bytes = to_bytes(&term).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), term);
    }

    #[test]
    fn test_truncated_bytes() {
        let mut bytes = bytes_of(json!({"a": [1, 2, 3]}));
        bytes.truncate(bytes.len() - 2);
        assert!(matches!(
            from_bytes(&bytes).unwrap_err(),
            TermError::DecodeFailure { .. }
        ));
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert!(matches!(
            from_bytes(&[0x2a, 0x00]).unwrap_err(),
            TermError::DecodeFailure { ref reason, .. } if reason.contains("no supported instance")
        ));
    }

    #[test]
    fn test_unsupported_process_kind_rejected() {
        let par = Par {
            news: vec![vec![0x08, 0x01]],
            ..Default::default()
        };
        let err = from_bytes(&par.encode_to_vec()).unwrap_err();
        assert_eq!(
            err,
            TermError::decode_failure(ROOT, "unsupported process kinds: news")
        );
    }

    #[test]
    fn test_blended_node_rejected() {
        let mut par = Par::from(&Term::int(1));
        par.sends.push(proto::Send::from(&Send::entry("k", Term::Nil)));
        assert!(matches!(
            Term::try_from(&par).unwrap_err(),
            TermError::MalformedTerm { .. }
        ));
        assert!(matches!(
            from_bytes(&par.encode_to_vec()).unwrap_err(),
            TermError::DecodeFailure { .. }
        ));
    }

    #[test]
    fn test_pattern_flagged_par_rejected() {
        let mut par = Par::from(&Term::int(1));
        par.connective_used = true;
        par.locally_free = vec![0xff];
        let bytes = par.encode_to_vec();
        assert_eq!(hex::encode(&bytes), "2a0210024a01ff5001");
        assert_eq!(
            from_bytes(&bytes).unwrap_err(),
            TermError::decode_failure(ROOT, "node is a pattern (connective_used is set)")
        );

        let mut free_only = Par::from(&Term::int(1));
        free_only.locally_free = vec![0x01];
        assert!(matches!(
            lift(&free_only).unwrap_err(),
            TermError::MalformedTerm { ref reason, .. } if reason.contains("locally_free")
        ));
    }

    #[test]
    fn test_pattern_flagged_list_rejected() {
        let par = expr_par(ExprInstance::EListBody(EList {
            connective_used: true,
            ..Default::default()
        }));
        assert!(matches!(
            from_bytes(&par.encode_to_vec()).unwrap_err(),
            TermError::DecodeFailure { ref reason, .. } if reason == "list is a pattern (connective_used is set)"
        ));
    }

    #[test]
    fn test_pattern_flagged_send_rejected() {
        let mut par = Par::from(&Term::sends([Send::entry("k", Term::int(1))]));
        par.sends[0].connective_used = true;
        assert!(matches!(
            from_bytes(&par.encode_to_vec()).unwrap_err(),
            TermError::DecodeFailure { ref path, .. } if path == "$[0]"
        ));

        let mut par = Par::from(&Term::sends([Send::entry("k", Term::int(1))]));
        par.sends[0].locally_free = vec![0x02];
        assert!(matches!(
            lift(&par).unwrap_err(),
            TermError::MalformedTerm { ref path, .. } if path == "$[0]"
        ));
    }

    #[test]
    fn test_lift_feeds_decode_and_print() {
        let par = Par::from(&encode_json(&json!({"b": [true], "a": 7})).unwrap());
        let term = lift(&par).unwrap();
        let value: serde_json::Value = crate::decoder::decode(&term).unwrap().into();
        assert_eq!(value, json!({"a": 7, "b": [true]}));
        assert_eq!(
            crate::printer::print(&term).unwrap(),
            r#"@"a"!(7) | @"b"!([true])"#
        );
    }

    #[test]
    fn test_multi_literal_par_rejected_by_lift() {
        let par = Par {
            exprs: vec![
                Expr {
                    expr_instance: Some(ExprInstance::GInt(1)),
                },
                Expr {
                    expr_instance: Some(ExprInstance::GBool(true)),
                },
            ],
            ..Default::default()
        };
        assert!(matches!(
            lift(&par).unwrap_err(),
            TermError::MalformedTerm { .. }
        ));
    }

    #[test]
    fn test_persistent_send_rejected() {
        let mut par = Par::from(&Term::sends([Send::entry("k", Term::int(1))]));
        par.sends[0].persistent = true;
        assert!(matches!(
            from_bytes(&par.encode_to_vec()).unwrap_err(),
            TermError::DecodeFailure { ref path, .. } if path == "$[0]"
        ));
    }
}
