//! Syntax Errors
//!
//! 词法与语法分析阶段的错误类型

use std::fmt;
use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};

/// 词法错误：`offset` 处的字符无法被任何规则匹配
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character '{character}' at offset {offset}")]
pub struct LexError {
    /// 字节偏移
    pub offset: usize,
    pub character: char,
}

impl LexError {
    pub(crate) fn at(source: &str, offset: usize) -> Self {
        let character = source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self { offset, character }
    }

    /// 出错字符在源码中的范围
    pub fn span(&self) -> Span {
        self.offset..self.offset + self.character.len_utf8()
    }
}

/// 语法错误的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// 需要某个类型的 Token
    Expected(TokenKind),
    /// VALUE 的所有候选规则都失败了
    ExpectedValue,
    /// 赋值语句之后还有多余的 Token
    ExpectedEnd,
    /// 数字字面量超出 u64 范围
    NumberOutOfRange,
    /// 调用嵌套超过 [`MAX_NESTING`](crate::parser::MAX_NESTING) 层
    TooDeep,
}

impl ParseErrorKind {
    /// 致命错误不会被回溯吞掉
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NumberOutOfRange | Self::TooDeep)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected(kind) => write!(f, "expected {}", kind),
            Self::ExpectedValue => f.write_str("expected a value"),
            Self::ExpectedEnd => f.write_str("expected end of input"),
            Self::NumberOutOfRange => f.write_str("number literal is out of range"),
            Self::TooDeep => f.write_str("calls are nested too deeply"),
        }
    }
}

/// 语法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}, found {} at token {position}", describe(.found.as_ref()))]
pub struct ParseError {
    pub reason: ParseErrorKind,
    /// 实际遇到的 Token，`None` 表示输入已结束
    pub found: Option<Token>,
    /// Token 流中的下标
    pub position: usize,
}

impl ParseError {
    /// 出错位置在源码中的范围；输入已结束时落在 `eof` 上
    pub fn span_or(&self, eof: usize) -> Span {
        match &self.found {
            Some(token) => token.span.clone(),
            None => eof..eof,
        }
    }
}

fn describe(token: Option<&Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_at() {
        let err = LexError::at("a = é", 4);
        assert_eq!(err.character, 'é');
        assert_eq!(err.span(), 4..6);
        assert_eq!(err.to_string(), "unexpected character 'é' at offset 4");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            reason: ParseErrorKind::Expected(TokenKind::Assign),
            found: Some(Token::new(TokenKind::Number, "1", 2..3)),
            position: 1,
        };
        assert_eq!(err.to_string(), "expected ASSIGN, found NUMBER \"1\" at token 1");
        assert_eq!(err.span_or(10), 2..3);
    }

    #[test]
    fn test_parse_error_at_end() {
        let err = ParseError {
            reason: ParseErrorKind::ExpectedValue,
            found: None,
            position: 2,
        };
        assert_eq!(err.to_string(), "expected a value, found end of input at token 2");
        assert_eq!(err.span_or(3), 3..3);
    }

    #[test]
    fn test_fatal_kinds() {
        assert!(ParseErrorKind::NumberOutOfRange.is_fatal());
        assert!(ParseErrorKind::TooDeep.is_fatal());
        assert!(!ParseErrorKind::ExpectedValue.is_fatal());
        assert!(!ParseErrorKind::Expected(TokenKind::Close).is_fatal());
    }
}
