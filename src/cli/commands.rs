//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};
use std::thread;

use miette::GraphicalTheme;

use crate::analysis::{self, Analysis, AnalysisError, MAX_SOURCE_SIZE};
use crate::frontend::diagnostics::{Severity, SyntaxError};
use crate::frontend::{lexer, parser};
use crate::lint::{CHECKERS, LintConfig};

use super::output;
use super::{CliError, CliResult, ExitCode, Input, LintOptions, OutputFormat};

/// Stack size for lint workers; the parser recurses once per nesting level.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

// ============================================================================
// Linting
// ============================================================================

/// The outcome of linting one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<FileAnalysis, AnalysisError>,
}

/// A file that made it through the pipeline.
#[derive(Debug)]
pub struct FileAnalysis {
    pub source: String,
    pub analysis: Analysis,
}

/// Lint every file, print findings in argument order, and pick the exit code.
pub fn lint_files(files: &[PathBuf], options: &LintOptions) -> CliResult<ExitCode> {
    let config = options.to_config()?;
    let reports = lint_in_parallel(files, &config)?;

    let theme = GraphicalTheme::default();
    let (mut errors, mut warnings, mut infos, mut unreadable) = (0, 0, 0, 0);
    for report in &reports {
        let path = report.path.display().to_string();
        let file = match &report.outcome {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error: {e}");
                unreadable += 1;
                continue;
            }
        };

        let diagnostics = file.analysis.all_diagnostics();
        let rendered = match options.format {
            OutputFormat::Pretty => output::render_pretty(&path, &file.source, &diagnostics, theme.clone()),
            OutputFormat::Text => output::render_text(&path, &diagnostics),
            OutputFormat::Json => output::render_json(&path, &diagnostics),
        };
        print!("{rendered}");

        errors += file.analysis.count(Severity::Error);
        warnings += file.analysis.count(Severity::Warning);
        infos += file.analysis.count(Severity::Info);
    }

    eprintln!(
        "{} file(s) checked: {errors} error(s), {warnings} warning(s), {infos} info(s)",
        reports.len() - unreadable
    );

    if unreadable > 0 {
        Ok(ExitCode::USAGE)
    } else if errors > 0 || (options.deny_warnings && warnings > 0) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Number of worker threads for `task_count` files.
///
/// `RLINT_JOBS` overrides the detected parallelism; the result is always in `1..=task_count`.
fn job_count(task_count: usize) -> usize {
    if task_count == 0 {
        return 1;
    }
    let from_env = std::env::var("RLINT_JOBS")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0);
    let default = thread::available_parallelism().map(|n| n.get()).unwrap_or(4);
    from_env.unwrap_or(default).clamp(1, task_count)
}

fn lint_file(path: &Path, config: &LintConfig) -> FileReport {
    let outcome = analysis::read_source(path, config.max_source_size()).and_then(|source| {
        let analysis = analysis::analyze(&source, config)?;
        Ok(FileAnalysis { source, analysis })
    });
    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

fn lint_chunk(chunk: &[PathBuf], config: &LintConfig) -> Vec<FileReport> {
    chunk.iter().map(|path| lint_file(path, config)).collect()
}

/// Lint files on scoped worker threads, one contiguous chunk per worker.
///
/// Reports come back in the order of `files`. A chunk whose worker cannot be spawned is linted on the
/// calling thread instead.
#[tracing::instrument(skip_all, fields(files = files.len()))]
pub fn lint_in_parallel(files: &[PathBuf], config: &LintConfig) -> CliResult<Vec<FileReport>> {
    let jobs = job_count(files.len());
    let chunk_size = files.len().div_ceil(jobs).max(1);
    tracing::debug!(jobs, chunk_size, "linting files");

    thread::scope(|scope| -> CliResult<Vec<FileReport>> {
        let mut handles = Vec::with_capacity(jobs);
        for chunk in files.chunks(chunk_size) {
            let spawned = thread::Builder::new()
                .name("rlint-worker".to_string())
                .stack_size(WORKER_STACK_SIZE)
                .spawn_scoped(scope, move || lint_chunk(chunk, config));
            handles.push((chunk, spawned));
        }

        let mut reports = Vec::with_capacity(files.len());
        for (chunk, spawned) in handles {
            match spawned {
                Ok(handle) => {
                    let done = handle
                        .join()
                        .map_err(|_| CliError::usage("Error: lint worker panicked"))?;
                    reports.extend(done);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "could not spawn worker; linting inline");
                    reports.extend(lint_chunk(chunk, config));
                }
            }
        }
        Ok(reports)
    })
}

// ============================================================================
// Debug views
// ============================================================================

fn load(input: &Input) -> CliResult<(String, String)> {
    match input {
        Input::File(path) => {
            let source =
                analysis::read_source(path, MAX_SOURCE_SIZE).map_err(|e| CliError::usage(format!("Error: {e}")))?;
            Ok((path.display().to_string(), source))
        }
        Input::Inline(code) => Ok(("<expr>".to_string(), code.clone())),
    }
}

/// Tokenize and print the token stream.
pub fn print_tokens(input: &Input, json: bool) -> CliResult<ExitCode> {
    let tokens = match input {
        Input::File(path) => analysis::tokenize_file(path).map_err(|e| CliError::usage(format!("Error: {e}")))?,
        Input::Inline(code) => analysis::tokenize_string(code),
    };

    if json {
        let text = serde_json::to_string_pretty(&output::tokens_json(&tokens))
            .map_err(|e| CliError::usage(format!("Error serializing tokens: {e}")))?;
        println!("{text}");
    } else {
        print!("{}", output::tokens_text(&tokens));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the tree dump; syntax errors go to stderr.
pub fn print_tree(input: &Input) -> CliResult<ExitCode> {
    let (name, source) = load(input)?;
    let tokens = lexer::lex(&source);
    let tree = parser::parse(&tokens).map_err(|e| CliError::usage(format!("Error: {e}")))?;

    print!("{}", tree.root.dump());
    let errors: Vec<_> = tree.errors.iter().map(SyntaxError::to_diagnostic).collect();
    eprint!("{}", output::render_text(&name, &errors));

    if tree.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// List registered checkers in registration order.
pub fn list_checkers() -> CliResult<ExitCode> {
    for info in CHECKERS {
        println!("{:<18} {:<8} {}", info.name, info.severity.as_str(), info.description);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rlint_cli_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn job_count_is_clamped_to_tasks() {
        assert_eq!(job_count(0), 1);
        assert_eq!(job_count(1), 1);
        assert!((1..=3).contains(&job_count(3)));
    }

    #[test]
    fn reports_follow_argument_order() {
        let files: Vec<PathBuf> = (0..7)
            .map(|i| scratch_file(&format!("order{i}.R"), &format!("x{i} == NULL\n")))
            .chain([PathBuf::from("no/such/file.R")])
            .collect();

        let reports = lint_in_parallel(&files, &LintConfig::default()).unwrap();
        let paths: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, files);

        for report in &reports[..7] {
            let file = report.outcome.as_ref().unwrap();
            assert_eq!(file.analysis.diagnostics.len(), 1);
        }
        assert!(matches!(reports[7].outcome, Err(AnalysisError::Read { .. })));

        for path in &files[..7] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn exit_code_reflects_findings() {
        let clean = scratch_file("clean.R", "x <- 1\n");
        let warned = scratch_file("warned.R", "if (x == NULL) 1\n");
        let broken = scratch_file("broken.R", "x <- (1 + \n");
        let options = LintOptions {
            format: OutputFormat::Text,
            ..LintOptions::default()
        };

        assert_eq!(lint_files(&[clean.clone()], &options).unwrap(), ExitCode::SUCCESS);
        assert_eq!(lint_files(&[warned.clone()], &options).unwrap(), ExitCode::SUCCESS);
        assert_eq!(lint_files(&[broken.clone()], &options).unwrap(), ExitCode::FAILURE);

        let strict = LintOptions {
            deny_warnings: true,
            ..options.clone()
        };
        assert_eq!(lint_files(&[warned.clone()], &strict).unwrap(), ExitCode::FAILURE);
        assert_eq!(
            lint_files(&[PathBuf::from("no/such/file.R")], &options).unwrap(),
            ExitCode::USAGE
        );

        for path in [clean, warned, broken] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn inline_parse_reports_syntax_errors() {
        assert_eq!(print_tree(&Input::Inline("f(1, 2)".into())).unwrap(), ExitCode::SUCCESS);
        assert_eq!(print_tree(&Input::Inline("f(1 2)".into())).unwrap(), ExitCode::FAILURE);
    }
}
