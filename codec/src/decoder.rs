//! Term AST → native value.

use crate::ast::{Literal, Send, Term};
use crate::error::{index_path, key_path, Result, TermError, ROOT};
use crate::native::NativeValue;
use std::collections::BTreeMap;

/// Recovers the native value a term encodes.
///
/// Inverse of [`crate::encode`] for every term the encoder produces. Sends
/// whose channel is not a string, or whose payload does not hold exactly one
/// term, are rejected with `MalformedTerm`. When two sends share a key the
/// later one wins.
pub fn decode(term: &Term) -> Result<NativeValue> {
    tracing::trace!(kind = %term.kind(), "decoding term");
    decode_at(term, ROOT)
}

fn decode_at(term: &Term, path: &str) -> Result<NativeValue> {
    Ok(match term {
        Term::Literal(Literal::Bool(b)) => NativeValue::Bool(*b),
        Term::Literal(Literal::Int(i)) => NativeValue::Int(*i),
        Term::Literal(Literal::Str(s)) => NativeValue::Str(s.clone()),
        Term::ListLiteral(items) => NativeValue::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_at(item, &index_path(path, i)))
                .collect::<Result<_>>()?,
        ),
        Term::ParallelSends(entries) => NativeValue::Map(decode_entries(entries, path)?),
        Term::Nil => NativeValue::Null,
    })
}

fn decode_entries(entries: &[Send], path: &str) -> Result<BTreeMap<String, NativeValue>> {
    let mut map = BTreeMap::new();
    for (i, send) in entries.iter().enumerate() {
        let entry_path = index_path(path, i);
        let key = match decode_at(send.channel(), &entry_path)? {
            NativeValue::Str(key) => key,
            other => {
                return Err(TermError::malformed(
                    entry_path,
                    format!("send channel decodes to {}, expected a string", other.type_name()),
                ))
            }
        };
        let value_path = key_path(path, &key);
        let value = match send.payload() {
            [single] => decode_at(single, &value_path)?,
            payload => {
                return Err(TermError::malformed(
                    value_path,
                    format!("send payload has {} terms, expected 1", payload.len()),
                ))
            }
        };
        if map.insert(key, value).is_some() {
            tracing::warn!(path = %value_path, "duplicate send channel, later entry wins");
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_json;
    use serde_json::json;

    fn json_of(term: &Term) -> serde_json::Value {
        decode(term).unwrap().into()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(decode(&Term::bool(false)).unwrap(), NativeValue::Bool(false));
        assert_eq!(decode(&Term::int(-9)).unwrap(), NativeValue::Int(-9));
        assert_eq!(decode(&Term::string("s")).unwrap(), NativeValue::from("s"));
        assert_eq!(decode(&Term::Nil).unwrap(), NativeValue::Null);
    }

    #[test]
    fn test_nested_map_round_trip() {
        let term = encode_json(&json!({"x": {"y": 5}})).unwrap();
        assert_eq!(json_of(&term), json!({"x": {"y": 5}}));
    }

    #[test]
    fn test_non_string_channel_is_malformed() {
        let term = Term::list([Term::sends([Send::new(Term::int(1), vec![Term::Nil])])]);
        let err = decode(&term).unwrap_err();
        assert_eq!(
            err,
            TermError::malformed("$[0][0]", "send channel decodes to integer, expected a string")
        );
    }

    #[test]
    fn test_payload_length_is_checked() {
        let empty = Term::sends([Send::new(Term::string("k"), vec![])]);
        assert!(matches!(
            decode(&empty).unwrap_err(),
            TermError::MalformedTerm { ref path, .. } if path == r#"$["k"]"#
        ));

        let double = Term::sends([Send::new(Term::string("k"), vec![Term::Nil, Term::Nil])]);
        assert!(matches!(
            decode(&double).unwrap_err(),
            TermError::MalformedTerm { ref reason, .. } if reason.contains("2 terms")
        ));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let term = Term::sends([
            Send::entry("k", Term::int(1)),
            Send::entry("j", Term::int(0)),
            Send::entry("k", Term::int(2)),
        ]);
        assert_eq!(json_of(&term), json!({"j": 0, "k": 2}));
    }
}
