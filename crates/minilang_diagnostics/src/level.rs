//! DiagnosticLevel - 诊断级别

use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 错误 - 整条流水线中止
    Error,
    /// 警告 - 输出仍然生成，但可能不是预期结果
    Warning,
    /// 注释 - 补充说明
    Note,
}

impl DiagnosticLevel {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
            Self::Note => self.name().bright_black().bold(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
