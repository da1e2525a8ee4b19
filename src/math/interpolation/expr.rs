// src/math/interpolation/expr.rs

use crate::math::error::*;
use serde::{Deserialize, Serialize};

/// AST einer Kernel-Formel in der Variablen `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(f64),
    /// Die freie Variable `r` (Abstand zum Randvertex)
    Radius,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    /// Natürlicher Logarithmus (`log` und `ln` sind Synonyme)
    Log(Box<Expr>),
}

impl Expr {
    /// Wertet den Ausdruck für einen Abstand `r` aus.
    pub fn evaluate(&self, r: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Radius => r,
            Expr::Neg(inner) => -inner.evaluate(r),
            Expr::Add(lhs, rhs) => lhs.evaluate(r) + rhs.evaluate(r),
            Expr::Sub(lhs, rhs) => lhs.evaluate(r) - rhs.evaluate(r),
            Expr::Mul(lhs, rhs) => lhs.evaluate(r) * rhs.evaluate(r),
            Expr::Div(lhs, rhs) => lhs.evaluate(r) / rhs.evaluate(r),
            Expr::Pow(base, exp) => base.evaluate(r).powf(exp.evaluate(r)),
            Expr::Log(inner) => inner.evaluate(r).ln(),
        }
    }
}

/// Geparste und validierte Kernel-Formel.
///
/// Unterstützt `+ - * / ^`, Klammern, Dezimalliterale, die Variable `r` und
/// `log`/`ln` (natürlicher Logarithmus). Alles andere wird beim Parsen mit
/// `InvalidExpression` abgelehnt, nicht erst bei der Auswertung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledExpr {
    source: String,
    root: Expr,
}

impl CompiledExpr {
    /// Parst eine Formel in der Variablen `r`.
    pub fn parse(source: &str) -> MathResult<Self> {
        let mut parser = Parser::new(source);
        let root = parser.parse_expression()?;
        parser.expect_end()?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Originaltext der Formel
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn evaluate(&self, r: f64) -> f64 {
        self.root.evaluate(r)
    }
}

/// Rekursiver Abstiegsparser über der Token-Folge der Formel.
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            input: source.as_bytes(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.pos).copied()
    }

    fn error(&self, message: impl Into<String>) -> MathError {
        MathError::InvalidExpression {
            message: message.into(),
        }
    }

    fn expect_end(&mut self) -> MathResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!(
                "Unexpected character '{}' at position {}",
                c as char, self.pos
            ))),
        }
    }

    // expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> MathResult<Expr> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    lhs = Expr::Add(Box::new(lhs), Box::new(self.parse_term()?));
                }
                Some(b'-') => {
                    self.pos += 1;
                    lhs = Expr::Sub(Box::new(lhs), Box::new(self.parse_term()?));
                }
                _ => return Ok(lhs),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> MathResult<Expr> {
        let mut lhs = self.parse_factor()?;
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    lhs = Expr::Mul(Box::new(lhs), Box::new(self.parse_factor()?));
                }
                Some(b'/') => {
                    self.pos += 1;
                    lhs = Expr::Div(Box::new(lhs), Box::new(self.parse_factor()?));
                }
                _ => return Ok(lhs),
            }
        }
    }

    // factor := primary ('^' factor)?   ('^' ist rechtsassoziativ)
    fn parse_factor(&mut self) -> MathResult<Expr> {
        let base = self.parse_primary()?;
        if self.peek() == Some(b'^') {
            self.pos += 1;
            let exponent = self.parse_factor()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    // primary := '-' primary | '(' expression ')' | number | 'r' | log '(' expression ')'
    fn parse_primary(&mut self) -> MathResult<Expr> {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.parse_primary()?)))
            }
            Some(b'(') => {
                self.pos += 1;
                let inner = self.parse_expression()?;
                if self.peek() != Some(b')') {
                    return Err(self.error("Missing closing parenthesis"));
                }
                self.pos += 1;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.parse_number(),
            Some(c) if c.is_ascii_alphabetic() => self.parse_identifier(),
            Some(c) => Err(self.error(format!(
                "Unexpected character '{}' at position {}",
                c as char, self.pos
            ))),
            None => Err(self.error("Unexpected end of expression")),
        }
    }

    fn parse_number(&mut self) -> MathResult<Expr> {
        let start = self.pos;
        while self.pos < self.input.len()
            && (self.input[self.pos].is_ascii_digit() || self.input[self.pos] == b'.')
        {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        text.parse::<f64>()
            .map(Expr::Number)
            .map_err(|_| self.error(format!("Invalid number literal '{}'", text)))
    }

    fn parse_identifier(&mut self) -> MathResult<Expr> {
        let start = self.pos;
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        let name = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        match name {
            "r" => Ok(Expr::Radius),
            "log" | "ln" => {
                if self.peek() != Some(b'(') {
                    return Err(self.error(format!("Expected '(' after '{}'", name)));
                }
                self.pos += 1;
                let inner = self.parse_expression()?;
                if self.peek() != Some(b')') {
                    return Err(self.error("Missing closing parenthesis"));
                }
                self.pos += 1;
                Ok(Expr::Log(Box::new(inner)))
            }
            other => Err(self.error(format!(
                "Unknown symbol '{}': only 'r', 'log' and 'ln' are allowed",
                other
            ))),
        }
    }
}
