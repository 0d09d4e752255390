//! Lexer - 词法分析
//!
//! 将一行源码切分为带类型的 Token 序列。空白会被识别，但不会进入输出。

use logos::Logos;
use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::error::LexError;

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Token 类型
///
/// 规则按声明顺序排列：标识符、空白、`=`、`(`、`,`、数字、`)`、字符串。
/// 各规则互不重叠，所以 logos 的最长匹配与按顺序的首个匹配结果一致。
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"\s+")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    #[regex("[a-z]+")]
    Name,

    #[token("=")]
    Assign,

    #[token("(")]
    Open,

    #[token(",")]
    Comma,

    #[regex("[0-9]+")]
    Number,

    #[token(")")]
    Close,

    // 不处理转义，两侧引号之间的内容即为 Token 文本
    #[regex(r#""[^"]*""#)]
    String,
}

impl TokenKind {
    /// 大写的类型名，用于诊断输出
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Assign => "ASSIGN",
            Self::Open => "OPEN",
            Self::Comma => "COMMA",
            Self::Number => "NUMBER",
            Self::Close => "CLOSE",
            Self::String => "STRING",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// 一个已分类的词素
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 匹配到的文本（字符串字面量去掉了两侧引号）
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

/// 词法分析入口
///
/// 遇到任何规则都无法匹配的字符时立即失败，不返回部分结果。
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let kind = kind.map_err(|_| LexError::at(source, span.start))?;

        let slice = lexer.slice();
        let text = match kind {
            TokenKind::String => &slice[1..slice.len() - 1],
            _ => slice,
        };
        tokens.push(Token::new(kind, text, span));
    }

    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
