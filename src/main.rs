//! CLI entry point for repotext

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use repotext::{IngestConfig, ScanLimits, TargetKind, config, print_json};

/// Which rendering to print.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputMode {
    /// Summary, then tree diagram, then file contents
    All,
    Summary,
    Tree,
    Content,
    /// All three strings plus counts, as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "repotext")]
#[command(about = "Flatten a repository checkout into an LLM-ready text digest")]
#[command(version)]
struct Args {
    /// Directory to ingest (or file, with --file)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Ingest a single file instead of a directory tree
    #[arg(long = "file")]
    file: bool,

    /// Include only files matching pattern (comma-separated, repeatable)
    #[arg(short = 'i', long = "include")]
    include: Vec<String>,

    /// Exclude paths matching pattern (comma-separated, repeatable)
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Maximum file size for content inclusion (default: 10MB)
    /// Use suffixes: K, M, G (e.g. 512K)
    #[arg(short = 's', long = "max-size", value_name = "SIZE")]
    max_size: Option<String>,

    /// Logical repository name shown in the summary
    /// (defaults to the target's directory name)
    #[arg(long = "name")]
    name: Option<String>,

    /// Branch the checkout was taken from
    #[arg(long = "branch")]
    branch: Option<String>,

    /// Commit the checkout was taken from (wins over --branch in the summary)
    #[arg(long = "commit")]
    commit: Option<String>,

    /// Which rendering to print
    #[arg(short = 'o', long = "output", value_enum, default_value = "all")]
    output: OutputMode,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(num * multiplier)
}

/// Split repeatable pattern flags on commas, the way the upstream request
/// parser normalizes them.
fn split_patterns(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let max_file_size = match &args.max_size {
        Some(s) => parse_file_size(s).unwrap_or_else(|e| {
            eprintln!("repotext: invalid --max-size '{}': {}", s, e);
            process::exit(1);
        }),
        None => config::DEFAULT_MAX_FILE_SIZE,
    };

    let slug = args.name.clone().unwrap_or_else(|| {
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    });

    // Single-file mode scopes the scan root to the file's parent so relative
    // paths in the output stay meaningful.
    let (root, subpath, target) = if args.file {
        let parent = path.parent().map(PathBuf::from).unwrap_or_else(|| path.clone());
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        (parent, format!("/{name}"), TargetKind::File)
    } else {
        (path, "/".to_string(), TargetKind::Directory)
    };

    let config = IngestConfig {
        root,
        subpath,
        slug,
        include_patterns: split_patterns(&args.include),
        exclude_patterns: split_patterns(&args.exclude),
        max_file_size,
        target,
        branch: args.branch.clone(),
        commit: args.commit.clone(),
        limits: ScanLimits::default(),
    };

    let digest = match repotext::ingest(&config) {
        Ok(digest) => digest,
        Err(e) => {
            eprintln!("repotext: {e}");
            process::exit(1);
        }
    };

    let result = match args.output {
        OutputMode::All => {
            println!("{}", digest.summary);
            println!("{}", digest.tree);
            print!("{}", digest.content);
            Ok(())
        }
        OutputMode::Summary => {
            println!("{}", digest.summary);
            Ok(())
        }
        OutputMode::Tree => {
            print!("{}", digest.tree);
            Ok(())
        }
        OutputMode::Content => {
            print!("{}", digest.content);
            Ok(())
        }
        OutputMode::Json => print_json(&digest),
    };

    if let Err(e) = result {
        eprintln!("repotext: error writing output: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_size() {
        assert_eq!(parse_file_size("1024"), Ok(1024));
        assert_eq!(parse_file_size("5K"), Ok(5 * 1024));
        assert_eq!(parse_file_size("5KB"), Ok(5 * 1024));
        assert_eq!(parse_file_size("2M"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_file_size("1G"), Ok(1024 * 1024 * 1024));
        assert!(parse_file_size("abc").is_err());
    }

    #[test]
    fn test_split_patterns() {
        let patterns = split_patterns(&["*.py, *.md".to_string(), "docs/*".to_string()]);
        assert_eq!(patterns, vec!["*.py", "*.md", "docs/*"]);
        assert!(split_patterns(&[" , ".to_string()]).is_empty());
    }
}
