use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use minilang_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use minilang_driver::{compile, Compilation, CompileError, CompileOptions};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minilangc")]
#[command(about = "Minilang 翻译器 - 把一行赋值语句翻译为目标代码", version)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 翻译源码并输出目标代码
    Compile {
        #[command(flatten)]
        input: Input,

        /// 输出文件 (默认: 标准输出)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 跳过常量折叠
        #[arg(long)]
        no_optimize: bool,
    },

    /// 输出 Token 序列
    Tokens {
        #[command(flatten)]
        input: Input,

        /// 以 JSON 格式输出
        #[arg(long)]
        json: bool,
    },

    /// 输出语法树
    Ast {
        #[command(flatten)]
        input: Input,

        /// 输出优化后的语法树
        #[arg(long)]
        optimized: bool,

        /// 以 JSON 格式输出
        #[arg(long)]
        json: bool,
    },

    /// 检查词法和语法错误，并统计警告
    Check {
        #[command(flatten)]
        input: Input,
    },
}

/// 输入：文件路径或 `-e` 直接给出的源码，二选一
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// 输入文件
    file: Option<PathBuf>,

    /// 直接给出一行源码
    #[arg(short, long, value_name = "SOURCE")]
    expr: Option<String>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match (&self.expr, &self.file) {
            (Some(expr), _) => Ok(expr.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("无法读取 {}", path.display())),
            (None, None) => anyhow::bail!("需要输入文件或 --expr"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let colors = !cli.no_color;
    match cli.command {
        Commands::Compile {
            input,
            output,
            no_optimize,
        } => cmd_compile(&input, output, !no_optimize, colors)?,
        Commands::Tokens { input, json } => cmd_tokens(&input, json, colors)?,
        Commands::Ast {
            input,
            optimized,
            json,
        } => cmd_ast(&input, optimized, json, colors)?,
        Commands::Check { input } => cmd_check(&input, colors)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_directive = directive_for_verbosity(verbose);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "minilang_cli=debug,minilang_driver=debug,minilang_syntax=debug,minilang_optimizer=debug",
        _ => "minilang_cli=trace,minilang_driver=trace,minilang_syntax=trace,minilang_optimizer=trace",
    }
}

/// 出错时对照源码输出诊断并以状态码 1 退出
fn exit_with(err: CompileError, source: &str, colors: bool) -> ! {
    err.emit(source, colors);
    std::process::exit(1);
}

fn emitter(colors: bool) -> Emitter {
    if colors {
        Emitter::new()
    } else {
        Emitter::without_colors()
    }
}

fn run(source: &str, options: &CompileOptions, colors: bool) -> Compilation {
    match compile(source, options) {
        Ok(compilation) => {
            let emitter = emitter(colors);
            for warning in compilation.warnings() {
                emitter.emit_with_source(&warning, source);
            }
            compilation
        }
        Err(err) => exit_with(err, source, colors),
    }
}

/// 编译命令
fn cmd_compile(input: &Input, output: Option<PathBuf>, optimize: bool, colors: bool) -> Result<()> {
    let source = input.read()?;
    let compilation = run(&source, &CompileOptions { optimize }, colors);

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", compilation.output))
                .with_context(|| format!("无法写入 {}", path.display()))?;
            eprintln!("✅ 成功生成 {}", path.display());
        }
        None => println!("{}", compilation.output),
    }

    Ok(())
}

/// Token 命令
fn cmd_tokens(input: &Input, json: bool, colors: bool) -> Result<()> {
    let source = input.read()?;
    let tokens = match minilang_syntax::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => exit_with(err.into(), &source, colors),
    };
    debug!(count = tokens.len(), "printing tokens");

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{:<7} {:<12} {:?}", token.kind, format!("{:?}", token.text), token.span);
        }
    }

    Ok(())
}

/// 语法树命令
fn cmd_ast(input: &Input, optimized: bool, json: bool, colors: bool) -> Result<()> {
    let source = input.read()?;
    let compilation = run(&source, &CompileOptions { optimize: optimized }, colors);
    let ast = compilation.final_ast();

    if json {
        println!("{}", serde_json::to_string_pretty(ast)?);
    } else {
        println!("{:#?}", ast);
    }

    Ok(())
}

/// 检查命令
fn cmd_check(input: &Input, colors: bool) -> Result<()> {
    let source = input.read()?;
    let compilation = match compile(&source, &CompileOptions::default()) {
        Ok(compilation) => compilation,
        Err(err) => exit_with(err, &source, colors),
    };

    let mut sink = DiagnosticSink::new();
    sink.extend(compilation.warnings());

    let emitter = emitter(colors);
    for diag in sink.diagnostics() {
        emitter.emit_with_source(diag, &source);
    }

    match check_summary(&sink) {
        Some(note) => emitter.emit(&note),
        None => eprintln!("✅ 无错误"),
    }
    Ok(())
}

/// 有警告时给出汇总
fn check_summary(sink: &DiagnosticSink) -> Option<Diagnostic> {
    match sink.warning_count() {
        0 => None,
        1 => Some(Diagnostic::note("check finished with 1 warning")),
        n => Some(Diagnostic::note(format!("check finished with {} warnings", n))),
    }
}
