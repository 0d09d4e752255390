//! Parser Module
//!
//! 回溯式递归下降解析器：
//!
//! ```text
//! ASSIGNMENT := NAME ASSIGN VALUE
//! VALUE      := NUMBER | CALL | VARIABLE | STRING
//! CALL       := NAME OPEN (VALUE (COMMA VALUE)*)? CLOSE
//! ```
//!
//! 每条规则返回 `Result`，候选失败时把游标恢复到尝试之前的位置。

mod rules;

use std::fmt;

use tracing::trace;

use crate::ast::Node;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

pub type ParseResult<T> = Result<T, ParseError>;

/// 同时打开的调用层数上限
///
/// 解析、优化和代码生成都按嵌套层数递归，超过上限的输入在解析阶段就被拒绝。
pub const MAX_NESTING: usize = 128;

/// 主入口：解析一条赋值语句
///
/// 赋值之后必须到达输入末尾，多余的 Token 会报 `ExpectedEnd`。
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut parser = Parser::new(tokens);
    let node = parser.assignment()?;
    parser.expect_end()?;
    Ok(node)
}

/// 语法规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    Number,
    Call,
    Variable,
    String,
}

impl Rule {
    /// VALUE 中按顺序尝试的投机候选；STRING 作为最后一个候选单独处理
    pub(crate) const SPECULATIVE: [Rule; 3] = [Rule::Number, Rule::Call, Rule::Variable];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Call => "CALL",
            Self::Variable => "VARIABLE",
            Self::String => "STRING",
        };
        f.write_str(name)
    }
}

/// Token 序列上的游标
pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// 当前打开的调用层数
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// 当前 Token 是否为 `kind`（不消耗）
    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// 消耗一个 `kind` 类型的 Token
    fn expect(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error(ParseErrorKind::Expected(kind))),
        }
    }

    fn expect_end(&self) -> ParseResult<()> {
        if self.peek().is_none() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::ExpectedEnd))
        }
    }

    fn error(&self, reason: ParseErrorKind) -> ParseError {
        self.error_at(reason, self.pos)
    }

    fn error_at(&self, reason: ParseErrorKind, position: usize) -> ParseError {
        ParseError {
            reason,
            found: self.tokens.get(position).cloned(),
            position,
        }
    }

    /// 投机地尝试一条规则
    ///
    /// 成功时保留游标位置；失败时恢复到尝试之前的位置再返回错误。
    fn attempt(&mut self, rule: Rule) -> ParseResult<Node> {
        let saved = self.pos;
        let result = self.apply(rule);
        if result.is_err() {
            trace!(%rule, position = saved, reached = self.pos, "backtracking");
            self.pos = saved;
        }
        result
    }

    fn apply(&mut self, rule: Rule) -> ParseResult<Node> {
        match rule {
            Rule::Number => self.number(),
            Rule::Call => self.call(),
            Rule::Variable => self.variable(),
            Rule::String => self.string(),
        }
    }
}
