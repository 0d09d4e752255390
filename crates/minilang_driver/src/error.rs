//! Compilation Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use minilang_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use minilang_syntax::{LexError, ParseError, ParseErrorKind, MAX_NESTING};
use thiserror::Error;

/// 编译错误
#[derive(Debug, Error)]
pub enum CompileError {
    /// 词法错误
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// 语法错误
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// 转换为诊断，`source` 用于定位输入末尾
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        match self {
            CompileError::Lex(err) => lex_diagnostic(err),
            CompileError::Parse(err) => parse_diagnostic(err, source),
            CompileError::Io(err) => Diagnostic::error(format!("IO error: {}", err)),
        }
    }

    /// 收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, source: &str) {
        sink.add(self.to_diagnostic(source));
    }

    /// 使用统一诊断系统对照源码输出错误
    pub fn emit(&self, source: &str, use_colors: bool) {
        let emitter = if use_colors {
            Emitter::new()
        } else {
            Emitter::without_colors()
        };

        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, source);

        for diag in sink.diagnostics() {
            emitter.emit_with_source(diag, source);
        }
    }
}

fn lex_diagnostic(err: &LexError) -> Diagnostic {
    let mut diag = Diagnostic::error(format!("unexpected character '{}'", err.character))
        .span(err.span())
        .label("no token starts with this character");

    if err.character == '+' {
        diag = diag.suggest("addition is written as a call: `add(a, b)`");
    } else if err.character.is_ascii_uppercase() {
        diag = diag.with_note("names may only contain lowercase letters `a`-`z`");
    } else if err.character == '"' {
        diag = diag.with_note("string literals must be closed with `\"` on the same line");
    }
    diag
}

fn parse_diagnostic(err: &ParseError, source: &str) -> Diagnostic {
    let label = match &err.found {
        Some(token) => format!("found {}", token),
        None => "input ends here".to_string(),
    };
    let diag = Diagnostic::error(err.reason.to_string())
        .span(err.span_or(source.len()))
        .label(label);

    match err.reason {
        ParseErrorKind::ExpectedEnd => {
            diag.with_note("a line holds exactly one assignment: `name = value`")
        }
        ParseErrorKind::NumberOutOfRange => {
            diag.with_note(format!("number literals must not exceed {}", u64::MAX))
        }
        ParseErrorKind::TooDeep => {
            diag.with_note(format!("at most {} calls may be nested", MAX_NESTING))
        }
        ParseErrorKind::ExpectedValue => {
            diag.with_note("a value is a number, a string, a name or a call `name(...)`")
        }
        ParseErrorKind::Expected(_) => diag,
    }
}

/// 编译结果类型
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use minilang_diagnostics::DiagnosticLevel;
    use minilang_syntax::{parse, tokenize};

    fn parse_error(source: &str) -> CompileError {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap_err().into()
    }

    #[test]
    fn test_lex_diagnostic_suggests_add() {
        let err: CompileError = tokenize("a + 1").unwrap_err().into();
        let diag = err.to_diagnostic("a + 1");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "unexpected character '+'");
        assert_eq!(diag.span, Some(2..3));
        assert_eq!(diag.suggestions.len(), 1);
    }

    #[test]
    fn test_parse_diagnostic_at_end_of_input() {
        let diag = parse_error("a =").to_diagnostic("a =");

        assert_eq!(diag.message, "expected a value");
        assert_eq!(diag.span, Some(3..3));
        assert_eq!(diag.label.as_deref(), Some("input ends here"));
    }

    #[test]
    fn test_parse_diagnostic_points_at_token() {
        let diag = parse_error("a = 1 b").to_diagnostic("a = 1 b");

        assert_eq!(diag.message, "expected end of input");
        assert_eq!(diag.span, Some(6..7));
        assert_eq!(diag.label.as_deref(), Some("found NAME \"b\""));
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_parse_diagnostic_too_deep() {
        let depth = MAX_NESTING + 1;
        let source = format!("a = {}1{}", "f(".repeat(depth), ")".repeat(depth));
        let diag = parse_error(&source).to_diagnostic(&source);

        assert_eq!(diag.message, "calls are nested too deeply");
        let start = 4 + 2 * MAX_NESTING;
        assert_eq!(diag.span, Some(start..start + 1));
        assert_eq!(diag.notes, vec![format!("at most {} calls may be nested", MAX_NESTING)]);
    }

    #[test]
    fn test_collect_to_sink() {
        let mut sink = DiagnosticSink::new();
        parse_error("a 1").collect_to_sink(&mut sink, "a 1");

        assert!(sink.has_errors());
        assert_eq!(sink.diagnostics()[0].message, "expected ASSIGN");
    }

    #[test]
    fn test_display() {
        let err: CompileError = tokenize("a = B").unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Lexical error: unexpected character 'B' at offset 4"
        );
    }
}
