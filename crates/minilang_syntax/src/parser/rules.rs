//! Grammar Rules
//!
//! 每个产生式对应一个方法

use super::{ParseResult, Parser, Rule, MAX_NESTING};
use crate::ast::Node;
use crate::error::ParseErrorKind;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// ASSIGNMENT := NAME ASSIGN VALUE
    pub(crate) fn assignment(&mut self) -> ParseResult<Node> {
        let variable = self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Assign)?;
        let value = self.value()?;
        Ok(Node::assign(variable.text.as_str(), value))
    }

    /// VALUE := NUMBER | CALL | VARIABLE | STRING
    pub(crate) fn value(&mut self) -> ParseResult<Node> {
        let start = self.pos;

        for rule in Rule::SPECULATIVE {
            match self.attempt(rule) {
                Ok(node) => return Ok(node),
                Err(err) if err.reason.is_fatal() => return Err(err),
                Err(_) => {}
            }
        }

        // 最后一个候选不再回溯，失败即整体失败
        self.apply(Rule::String)
            .map_err(|_| self.error_at(ParseErrorKind::ExpectedValue, start))
    }

    /// CALL := NAME OPEN (VALUE (COMMA VALUE)*)? CLOSE
    pub(crate) fn call(&mut self) -> ParseResult<Node> {
        let position = self.pos;
        let name = self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Open)?;

        if self.depth == MAX_NESTING {
            return Err(self.error_at(ParseErrorKind::TooDeep, position));
        }
        self.depth += 1;
        let arguments = self.arguments();
        self.depth -= 1;

        Ok(Node::call(name.text.as_str(), arguments?))
    }

    /// 参数列表与结尾的 CLOSE
    fn arguments(&mut self) -> ParseResult<Vec<Node>> {
        let mut arguments = Vec::new();
        while !self.at(TokenKind::Close) {
            arguments.push(self.value()?);
            if !self.at(TokenKind::Close) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::Close)?;
        Ok(arguments)
    }

    pub(crate) fn number(&mut self) -> ParseResult<Node> {
        let position = self.pos;
        let token = self.expect(TokenKind::Number)?;
        let value = token
            .text
            .parse::<u64>()
            .map_err(|_| self.error_at(ParseErrorKind::NumberOutOfRange, position))?;
        Ok(Node::number(value))
    }

    pub(crate) fn variable(&mut self) -> ParseResult<Node> {
        let name = self.expect(TokenKind::Name)?;
        Ok(Node::variable(name.text.as_str()))
    }

    pub(crate) fn string(&mut self) -> ParseResult<Node> {
        let literal = self.expect(TokenKind::String)?;
        Ok(Node::string(literal.text.as_str()))
    }
}
