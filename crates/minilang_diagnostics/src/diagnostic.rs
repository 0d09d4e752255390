//! Diagnostic - 诊断信息
//!
//! 表示一条面向用户的诊断（错误或警告）

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub span: Option<Span>,
    /// 标注在源码位置上的简短说明
    pub label: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            label: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 创建注释诊断
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Note, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置位置标注
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 添加建议
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}
