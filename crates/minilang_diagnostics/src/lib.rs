//! Minilang Diagnostics
//!
//! 统一的诊断系统，为翻译流水线提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use minilang_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let source = "a + 1";
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("unexpected character '+'")
//!         .span(2..3)
//!         .suggest("write `add(a, 1)` instead"),
//! );
//!
//! if sink.has_errors() {
//!     let emitter = Emitter::without_colors();
//!     for diag in sink.diagnostics() {
//!         assert!(emitter.render_with_source(diag, source).contains("a + 1"));
//!     }
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::Span;
