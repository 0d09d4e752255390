//! Minilang Syntax
//!
//! 词法分析与语法分析：源码 -> Token 序列 -> AST
//!
//! # 示例
//!
//! ```rust
//! use minilang_syntax::{parse, tokenize, Node};
//!
//! let tokens = tokenize("a = add(b, 1)").unwrap();
//! let ast = parse(&tokens).unwrap();
//!
//! assert_eq!(
//!     ast,
//!     Node::assign("a", Node::call("add", vec![Node::variable("b"), Node::number(1)]))
//! );
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;


// 重新导出核心类型
pub use ast::{Node, FOLDABLE_OPERATOR};
pub use error::{LexError, ParseError, ParseErrorKind};
pub use lexer::{tokenize, Span, Token, TokenKind};
pub use parser::{parse, MAX_NESTING};
