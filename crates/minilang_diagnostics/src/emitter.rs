//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。有源码时用 ariadne 在源码行上标出位置。

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use colored::*;
use std::fmt::Write as _;

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use crate::span::clamp;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断（不带源码）
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 对照源码输出单个诊断
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    /// 格式化为文本
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            render_colored(diagnostic)
        } else {
            render_plain(diagnostic)
        }
    }

    /// 对照源码格式化；没有位置信息时退回 [`Emitter::render`]
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let Some(span) = &diagnostic.span else {
            return self.render(diagnostic);
        };
        let span = clamp(span, source);

        let (kind, color) = match diagnostic.level {
            DiagnosticLevel::Error => (ReportKind::Error, Color::Red),
            DiagnosticLevel::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticLevel::Note => (ReportKind::Advice, Color::Fixed(8)),
        };

        let label = Label::new(span.clone())
            .with_message(diagnostic.label.as_deref().unwrap_or(&diagnostic.message))
            .with_color(color);

        let mut report = Report::build(kind, (), span.start)
            .with_config(
                Config::default()
                    .with_color(self.use_colors)
                    .with_index_type(IndexType::Byte),
            )
            .with_message(&diagnostic.message)
            .with_label(label);
        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }
        if !diagnostic.suggestions.is_empty() {
            report = report.with_help(diagnostic.suggestions.join("\n"));
        }

        let mut buf = Vec::new();
        match report
            .finish()
            .write(Source::from(source.to_string()), &mut buf)
        {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.render(diagnostic),
        }
    }
}

fn render_colored(diagnostic: &Diagnostic) -> String {
    let mut out = String::new();

    // 级别和消息
    let _ = writeln!(
        out,
        "{}: {}",
        diagnostic.level.colored_name(),
        diagnostic.message.bold()
    );

    if let Some(span) = &diagnostic.span {
        let _ = writeln!(out, "  {} {:?}", "-->".blue().bold(), span);
    }

    for note in &diagnostic.notes {
        let _ = writeln!(
            out,
            "  {} {}",
            "=".blue().bold(),
            format!("note: {}", note).bright_black()
        );
    }

    for suggestion in &diagnostic.suggestions {
        let _ = writeln!(
            out,
            "  {} {}",
            "=".green().bold(),
            format!("help: {}", suggestion).green()
        );
    }

    out
}

fn render_plain(diagnostic: &Diagnostic) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", diagnostic.level, diagnostic.message);

    if let Some(span) = &diagnostic.span {
        let _ = writeln!(out, "  --> {:?}", span);
    }

    for note in &diagnostic.notes {
        let _ = writeln!(out, "  = note: {}", note);
    }

    for suggestion in &diagnostic.suggestions {
        let _ = writeln!(out, "  = help: {}", suggestion);
    }

    out
}
