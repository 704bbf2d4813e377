//! Term AST → Rholang surface syntax.
//!
//! Output is meant for logs and humans; nothing parses it back.

use crate::ast::{Literal, Send, Term};
use crate::error::{index_path, key_path, Result, TermError, ROOT};

const NIL: &str = "Nil";
const PAR_SEPARATOR: &str = " | ";
const LIST_SEPARATOR: &str = ", ";

/// Renders a term as Rholang source text.
///
/// ```rust,ignore
/// let term = encode_json(&json!({"b": 1, "a": 2}))?;
/// assert_eq!(print(&term)?, r#"@"a"!(2) | @"b"!(1)"#);
/// ```
pub fn print(term: &Term) -> Result<String> {
    let mut printer = RholangPrinter::default();
    printer.write_term(term, ROOT)?;
    Ok(printer.finish())
}

#[derive(Default)]
struct RholangPrinter {
    out: String,
}

impl RholangPrinter {
    fn finish(self) -> String {
        self.out
    }

    fn write_term(&mut self, term: &Term, path: &str) -> Result<()> {
        match term {
            Term::Literal(literal) => self.write_literal(literal, path),
            Term::ListLiteral(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(LIST_SEPARATOR);
                    }
                    self.write_term(item, &index_path(path, i))?;
                }
                self.out.push(']');
                Ok(())
            }
            // The empty parallel composition is the empty process.
            Term::ParallelSends(entries) if entries.is_empty() => {
                self.out.push_str(NIL);
                Ok(())
            }
            Term::ParallelSends(entries) => {
                for (i, send) in entries.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(PAR_SEPARATOR);
                    }
                    self.write_send(send, &index_path(path, i), path)?;
                }
                Ok(())
            }
            Term::Nil => {
                self.out.push_str(NIL);
                Ok(())
            }
        }
    }

    fn write_send(&mut self, send: &Send, entry_path: &str, parent: &str) -> Result<()> {
        let Some(key) = send.key() else {
            return Err(TermError::malformed(
                entry_path,
                format!("send channel is {}, expected a string literal", send.channel().kind()),
            ));
        };
        let value_path = key_path(parent, key);
        let [payload] = send.payload() else {
            return Err(TermError::malformed(
                value_path,
                format!("send payload has {} terms, expected 1", send.payload().len()),
            ));
        };

        self.out.push('@');
        self.write_string(key, entry_path)?;
        self.out.push_str("!(");
        self.write_term(payload, &value_path)?;
        self.out.push(')');
        Ok(())
    }

    fn write_literal(&mut self, literal: &Literal, path: &str) -> Result<()> {
        match literal {
            Literal::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Literal::Int(i) => self.out.push_str(&i.to_string()),
            Literal::Str(s) => self.write_string(s, path)?,
        }
        Ok(())
    }

    fn write_string(&mut self, s: &str, path: &str) -> Result<()> {
        let quoted = serde_json::to_string(s)
            .map_err(|e| TermError::malformed(path, format!("cannot quote string: {}", e)))?;
        self.out.push_str(&quoted);
        Ok(())
    }
}
