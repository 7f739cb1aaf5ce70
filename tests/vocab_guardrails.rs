//! Guardrail against stringly-typed vocabulary checks.
//!
//! Keywords and operators have registry ids (`KeywordId`, `OperatorId`) carried on every token. Production
//! code should compare ids, not token text. This test is a coarse net: it flags `== "<-"`-style comparisons
//! and `"NULL" =>` match arms outside the registries and outside test code.

use std::fs;
use std::path::{Path, PathBuf};

use rlint_core::lang::{keywords, operators};

/// A line that compares token text against a vocabulary spelling.
#[derive(Debug)]
struct Offender {
    path: PathBuf,
    line_no: usize,
    line: String,
}

#[test]
fn production_code_compares_ids_not_spellings() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let needles = needles(&spellings());

    let mut files = Vec::new();
    for dir in ["src", "crates"] {
        collect_rust_files(&root.join(dir), &mut files);
    }

    let offenders: Vec<Offender> = files
        .iter()
        .filter(|path| !is_exempt(&root, path))
        .flat_map(|path| scan_file(path, &needles))
        .collect();

    if !offenders.is_empty() {
        let listing: Vec<String> = offenders
            .iter()
            .take(80)
            .map(|o| {
                let rel = o.path.strip_prefix(&root).unwrap_or(&o.path);
                format!("- {}:{}: {}", rel.display(), o.line_no, o.line.trim())
            })
            .collect();
        panic!(
            "Found text comparisons against R vocabulary; use rlint_core registry ids instead.\n\n{}",
            listing.join("\n")
        );
    }
}

/// Keyword spellings plus multi-character operator spellings.
///
/// Single-character operators collide with too much unrelated code to be useful here.
fn spellings() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    all.extend(
        operators::OPERATORS
            .iter()
            .flat_map(|op| op.spellings.iter().copied())
            .filter(|s| s.chars().count() > 1),
    );
    all.sort_unstable();
    all.dedup();
    all
}

/// Equality and match-arm patterns for every spelling.
fn needles(spellings: &[&str]) -> Vec<String> {
    spellings
        .iter()
        .flat_map(|s| [format!("== \"{s}\""), format!("\"{s}\" =>")])
        .collect()
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect_rust_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// Registries define the spellings, and tests may spell them out.
fn is_exempt(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/");
    rel.starts_with("crates/rlint_core/src/lang/") || rel.contains("/tests/") || rel.ends_with("/tests.rs")
}

/// Suspicious lines before the file's `#[cfg(test)]` module, comments excluded.
fn scan_file(path: &Path, needles: &[String]) -> Vec<Offender> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| is_suspicious(line, needles))
        .map(|(idx, line)| Offender {
            path: path.to_path_buf(),
            line_no: idx + 1,
            line: line.to_string(),
        })
        .collect()
}

fn is_suspicious(line: &str, needles: &[String]) -> bool {
    !line.trim_start().starts_with("//") && needles.iter().any(|needle| line.contains(needle.as_str()))
}

#[test]
fn detector_flags_text_comparisons() {
    let needles = needles(&["NULL", "<-"]);
    assert!(is_suspicious(r#"if token.contents == "NULL" {"#, &needles));
    assert!(is_suspicious(r#"    "<-" => true,"#, &needles));
    assert!(!is_suspicious(r#"// contents == "NULL""#, &needles));
    assert!(!is_suspicious(r#"let name = "NULL";"#, &needles));
}
