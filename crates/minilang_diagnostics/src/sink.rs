//! DiagnosticSink - 诊断收集器

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level.is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
            .count()
    }
}

impl Extend<Diagnostic> for DiagnosticSink {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        for diagnostic in iter {
            self.add(diagnostic);
        }
    }
}
