//! Minilang Compiler Driver
//!
//! 串联所有阶段：源码 -> Token -> AST -> 优化后的 AST -> 目标代码。
//! 每个阶段的中间结果都保存在 [`Compilation`] 里，方便单独检查。

pub mod error;

pub use error::{CompileError, CompileResult};

use std::path::Path;

use minilang_diagnostics::Diagnostic;
use minilang_optimizer::optimize;
use minilang_syntax::{parse, tokenize, Node, Token, FOLDABLE_OPERATOR};
use tracing::debug;

/// 编译选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// 是否运行常量折叠
    pub optimize: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// 编译结果：每个阶段的产物
#[derive(Debug, Clone)]
pub struct Compilation {
    pub source: String,
    pub tokens: Vec<Token>,
    /// 解析得到的原始语法树
    pub ast: Node,
    /// 优化后的语法树，关闭优化时为 `None`
    pub optimized: Option<Node>,
    /// 生成的目标代码
    pub output: String,
}

impl Compilation {
    /// 代码生成实际使用的语法树
    pub fn final_ast(&self) -> &Node {
        self.optimized.as_ref().unwrap_or(&self.ast)
    }

    /// 输出虽然生成了但可能不符合预期的情况
    pub fn warnings(&self) -> Vec<Diagnostic> {
        let mut warnings = Vec::new();
        collect_empty_folds(self.final_ast(), &mut warnings);
        warnings
    }
}

fn collect_empty_folds(node: &Node, warnings: &mut Vec<Diagnostic>) {
    match node {
        Node::Assign { value, .. } => collect_empty_folds(value, warnings),
        Node::Call { name, arguments } => {
            if name == FOLDABLE_OPERATOR && arguments.is_empty() {
                warnings.push(
                    Diagnostic::warning(format!(
                        "`{}()` has no arguments and renders as an empty expression",
                        FOLDABLE_OPERATOR
                    ))
                    .suggest("pass at least one argument"),
                );
            }
            for argument in arguments {
                collect_empty_folds(argument, warnings);
            }
        }
        Node::Number { .. } | Node::Variable { .. } | Node::String { .. } => {}
    }
}

/// 词法 + 语法分析
///
/// 词法分析先完整跑完，所以无法识别的字符总是先于任何语法错误报告。
pub fn parse_source(source: &str) -> CompileResult<(Vec<Token>, Node)> {
    let tokens = tokenize(source)?;
    debug!(count = tokens.len(), "lexing finished");

    let ast = parse(&tokens)?;
    debug!(?ast, "parsing finished");

    Ok((tokens, ast))
}

/// 编译一行源码
///
/// # Example
/// ```
/// use minilang_driver::{compile, CompileOptions};
///
/// let output = compile("a = add(add(1, 2), add(3, b))", &CompileOptions::default()).unwrap();
/// assert_eq!(output.output, "let a = 6 + b");
/// ```
pub fn compile(source: &str, options: &CompileOptions) -> CompileResult<Compilation> {
    let (tokens, ast) = parse_source(source)?;

    let optimized = if options.optimize {
        let optimized = optimize(&ast);
        debug!(?optimized, "optimization finished");
        Some(optimized)
    } else {
        debug!("optimization disabled");
        None
    };

    let output = minilang_codegen::compile(optimized.as_ref().unwrap_or(&ast));
    debug!(%output, "code generation finished");

    Ok(Compilation {
        source: source.to_string(),
        tokens,
        ast,
        optimized,
        output,
    })
}

/// 从文件编译
pub fn compile_file(path: impl AsRef<Path>, options: &CompileOptions) -> CompileResult<Compilation> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading source");
    let source = std::fs::read_to_string(path)?;
    compile(&source, options)
}
