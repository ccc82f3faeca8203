/*!
A reader for ground normal programs in text.

# Syntax

A program is a sequence of statements, each terminated by `.`:

- A fact, `h.`
- A rule, `h :- b1, ..., not n1, ....`
- A constraint, `:- b1, ..., not n1, ....`

Atoms are any text without `,` or `.` at the outer level, so `p(1,2)` and `q(a.b)` are atoms.
Whitespace within an atom is ignored, so `p(1, 2)` and `p(1,2)` are the same atom.
A `%` begins a comment, which runs to the end of the line.

```rust
# use otter_asp::builder::program::{parse_program, Rule};
let program = "
  % A choice between a and b.
  a :- not b.
  b :- not a.
  c(1, 2).
  :- c(1,2), not a.
";

let rules = parse_program(program.as_bytes()).unwrap();
assert_eq!(rules.len(), 4);
assert_eq!(rules[2].head.as_deref(), Some("c(1,2)"));
assert_eq!(rules[3].head, None);
assert_eq!(rules[3].negative, vec!["a".to_string()]);
```
*/

use std::io::BufRead;

use crate::{
    builder::{translate, AtomStore},
    context::GenericContext,
    types::err::{self, ErrorKind},
};

/// A rule of a ground normal program.
///
/// A rule without a head is a constraint, and a rule with an empty body is a fact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    pub head: Option<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Rule {
    /// Whether the rule is a fact.
    pub fn is_fact(&self) -> bool {
        self.head.is_some() && self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Reads the rules of a program.
pub fn parse_program(mut reader: impl BufRead) -> Result<Vec<Rule>, err::ParseError> {
    let mut rules = Vec::default();
    let mut buffer = String::with_capacity(1024);
    let mut statement = String::default();

    let mut line_counter = 0;
    let mut statement_line = 0;
    let mut depth: usize = 0;

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'line_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1)),
        }

        for character in buffer.chars() {
            match character {
                '%' => break,

                '.' if depth == 0 => {
                    rules.push(parse_statement(&statement, statement_line)?);
                    statement.clear();
                }

                _ => {
                    match character {
                        '(' => depth += 1,
                        ')' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                    if statement.trim().is_empty() && !character.is_whitespace() {
                        statement_line = line_counter;
                    }
                    statement.push(character);
                }
            }
        }
        statement.push('\n');
    }

    match statement.trim().is_empty() {
        true => Ok(rules),
        false => Err(err::ParseError::MissingTerminator(statement_line)),
    }
}

/// Parses a statement, without the terminating `.`.
fn parse_statement(statement: &str, line: usize) -> Result<Rule, err::ParseError> {
    let (head, body) = match split_outer(statement, ":-").as_slice() {
        [head] => (*head, None),
        [head, body] => (*head, Some(*body)),
        _ => return Err(err::ParseError::MalformedHead(line)),
    };

    let head = head.trim();
    let head = match head.is_empty() {
        true if body.is_none() => return Err(err::ParseError::EmptyAtom(line)),
        true => None,
        false => {
            if split_outer(head, ",").len() > 1 || negated(head).is_some() || head.contains('|') {
                return Err(err::ParseError::MalformedHead(line));
            }
            Some(normalise(head))
        }
    };

    let mut rule = Rule {
        head,
        ..Default::default()
    };

    if let Some(body) = body {
        for literal in split_outer(body, ",") {
            let literal = literal.trim();
            match negated(literal) {
                Some(atom) => {
                    let atom = normalise(atom);
                    if atom.is_empty() {
                        return Err(err::ParseError::EmptyAtom(line));
                    }
                    rule.negative.push(atom);
                }
                None => {
                    let atom = normalise(literal);
                    if atom.is_empty() {
                        return Err(err::ParseError::EmptyAtom(line));
                    }
                    rule.positive.push(atom);
                }
            }
        }
    }

    Ok(rule)
}

/// Splits on the pattern, outside of parentheses.
fn split_outer<'s>(text: &'s str, pattern: &str) -> Vec<&'s str> {
    let mut parts = Vec::default();
    let mut depth: usize = 0;
    let mut start = 0;

    for (index, character) in text.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && index >= start && text[index..].starts_with(pattern) => {
                parts.push(&text[start..index]);
                start = index + pattern.len();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// The atom of a negated literal, if the literal is negated.
fn negated(literal: &str) -> Option<&str> {
    let rest = literal.strip_prefix("not")?;
    match rest.chars().next() {
        None => Some(rest),
        Some(character) if character.is_whitespace() => Some(rest.trim()),
        _ => None,
    }
}

fn normalise(atom: &str) -> String {
    atom.chars().filter(|character| !character.is_whitespace()).collect()
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a program into the context, returning the names of the atoms of the program.
    ///
    /// The program is [translated](mod@crate::builder::translate) and ingested directly, and so nothing is propagated until a search begins.
    ///
    /// ```rust,ignore
    /// let store = context.read_program(BufReader::new(&file))?;
    /// ```
    pub fn read_program(&mut self, reader: impl BufRead) -> Result<AtomStore, ErrorKind> {
        let rules = parse_program(reader)?;
        let mut store = AtomStore::default();
        let batch = translate(&rules, &mut store)?;
        self.ingest(batch)?;
        Ok(store)
    }
}
