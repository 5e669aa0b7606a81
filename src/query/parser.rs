use std::{fmt, str::FromStr};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// A single traversal step of a [`PathExpr`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Descend into a named field of a mapping.
    Field(String),
    /// Descend into one element of a sequence.
    Index(usize),
    /// Descend into every child of a sequence or mapping.
    Wildcard,
    /// Descend into every child that satisfies the predicate.
    Filter(Predicate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
}

/// A sibling-field test such as `@.type == 'map'`.
///
/// The field path is relative to the child being tested. A child that lacks
/// the field satisfies neither comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: Vec<String>,
    pub comparison: Comparison,
    pub expected: Value,
}

impl Predicate {
    pub fn matches(&self, node: &Value) -> bool {
        let actual = self
            .field
            .iter()
            .try_fold(node, |current, key| current.get(key.as_str()));

        match (actual, self.comparison) {
            (Some(value), Comparison::Eq) => *value == self.expected,
            (Some(value), Comparison::Ne) => *value != self.expected,
            (None, _) => false,
        }
    }
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpr {
    source: String,
    steps: Vec<Step>,
}

impl PathExpr {
    pub fn parse(source: &str) -> Result<Self> {
        let steps = Parser::new(source)
            .parse()
            .with_context(|| format!("Invalid path expression: \"{}\"", source))?;
        Ok(Self {
            source: source.to_string(),
            steps,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for PathExpr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse(mut self) -> Result<Vec<Step>> {
        self.skip_whitespace();
        self.expect('$')?;

        let mut steps = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some('.') => {
                    self.bump();
                    steps.push(self.dotted()?);
                }
                Some('[') => {
                    self.bump();
                    steps.push(self.bracketed()?);
                }
                Some(c) => bail!("unexpected '{}' at offset {}", c, self.pos),
            }
        }

        Ok(steps)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.src[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<()> {
        if self.eat(c) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => bail!("expected '{}' at offset {}, found '{}'", c, self.pos, found),
            None => bail!("expected '{}' at offset {}, found end of expression", c, self.pos),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn dotted(&mut self) -> Result<Step> {
        if self.eat('*') {
            return Ok(Step::Wildcard);
        }
        Ok(Step::Field(self.identifier()?))
    }

    fn bracketed(&mut self) -> Result<Step> {
        self.skip_whitespace();
        let step = match self.peek() {
            Some('*') => {
                self.bump();
                Step::Wildcard
            }
            Some('?') => {
                self.bump();
                Step::Filter(self.filter()?)
            }
            Some('\'' | '"') => Step::Field(self.quoted()?),
            Some(c) if c.is_ascii_digit() => Step::Index(self.index()?),
            Some(c) => bail!("unexpected '{}' at offset {}", c, self.pos),
            None => bail!("unterminated '[' at end of expression"),
        };
        self.skip_whitespace();
        self.expect(']')?;
        Ok(step)
    }

    fn identifier(&mut self) -> Result<String> {
        let start = self.pos;
        while self.peek().is_some_and(is_identifier_char) {
            self.bump();
        }
        if start == self.pos {
            bail!("expected a field name at offset {}", start);
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn index(&mut self) -> Result<usize> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.src[start..self.pos]
            .parse()
            .with_context(|| format!("invalid index at offset {}", start))
    }

    fn quoted(&mut self) -> Result<String> {
        let start = self.pos;
        let Some(quote) = self.bump() else {
            bail!("expected a quoted string at offset {}", start);
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None => bail!("unterminated string starting at offset {}", start),
                Some('\\') => match self.bump() {
                    Some(escaped) => out.push(escaped),
                    None => bail!("unterminated string starting at offset {}", start),
                },
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }

    fn filter(&mut self) -> Result<Predicate> {
        self.expect('(')?;
        self.skip_whitespace();
        self.expect('@')?;

        let mut field = Vec::new();
        while self.eat('.') {
            field.push(self.identifier()?);
        }
        if field.is_empty() {
            bail!("expected a field after '@' at offset {}", self.pos);
        }

        self.skip_whitespace();
        let comparison = if self.eat_str("==") {
            Comparison::Eq
        } else if self.eat_str("!=") {
            Comparison::Ne
        } else {
            bail!("expected '==' or '!=' at offset {}", self.pos);
        };

        self.skip_whitespace();
        let expected = self.literal()?;
        self.skip_whitespace();
        self.expect(')')?;

        Ok(Predicate {
            field,
            comparison,
            expected,
        })
    }

    fn literal(&mut self) -> Result<Value> {
        if matches!(self.peek(), Some('\'' | '"')) {
            return Ok(Value::String(self.quoted()?));
        }

        let start = self.pos;
        while self.peek().is_some_and(|c| !c.is_whitespace() && c != ')') {
            self.bump();
        }
        let token = &self.src[start..self.pos];
        if token.is_empty() {
            bail!("expected a literal at offset {}", start);
        }
        serde_json::from_str(token)
            .with_context(|| format!("invalid literal \"{}\" at offset {}", token, start))
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
