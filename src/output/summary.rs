//! Summary rendering and token-count formatting.

use std::fmt::Write;

use tracing::debug;

use crate::config::IngestConfig;
use crate::content::TokenCounter;

/// Build the identity portion of the summary: repository, files analyzed,
/// and the subpath/commit/branch qualifiers. A commit wins over a branch;
/// the conventional default branch names are not worth a line.
pub fn render_summary(config: &IngestConfig, file_count: usize) -> String {
    let mut summary = String::new();
    let _ = writeln!(summary, "Repository: {}", config.slug);
    let _ = writeln!(summary, "Files analyzed: {file_count}");

    if !config.subpath.is_empty() && config.subpath != "/" {
        let _ = writeln!(summary, "Subpath: {}", config.subpath);
    }
    if let Some(commit) = &config.commit {
        let _ = writeln!(summary, "Commit: {commit}");
    } else if let Some(branch) = &config.branch {
        if branch != "main" && branch != "master" {
            let _ = writeln!(summary, "Branch: {branch}");
        }
    }
    summary
}

/// Append the estimated-token line when the tokenizer collaborator succeeds
/// on the rendered text. Tokenizer failure is logged and the line is omitted;
/// it never fails the render.
pub fn append_token_estimate(summary: &mut String, counter: Option<&dyn TokenCounter>, text: &str) {
    let Some(counter) = counter else {
        return;
    };
    match counter.count(text) {
        Ok(tokens) => {
            let _ = write!(summary, "\nEstimated tokens: {}", format_token_count(tokens));
        }
        Err(e) => debug!(error = %e, "token estimation failed, omitting estimate"),
    }
}

/// Human-readable token magnitude: `k` above 1,000, `M` above 1,000,000.
pub fn format_token_count(tokens: usize) -> String {
    if tokens > 1_000_000 {
        format!("{:.1}M", tokens as f64 / 1_000_000.0)
    } else if tokens > 1_000 {
        format!("{:.1}k", tokens as f64 / 1_000.0)
    } else {
        tokens.to_string()
    }
}

/// Format an integer with comma thousands separators, for the Size/Lines
/// lines of the single-file summary.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
