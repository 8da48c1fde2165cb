//! Subcommand handlers.

use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use sift_analysis::{extract as extract_tokens, Scanner, UsageIndex};
use sift_core::config::defaults::{config_template, CONFIG_FILE_NAME};
use sift_core::SiftConfig;

/// Read a file, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn load_config(root: &Path, config: Option<&Path>) -> Result<SiftConfig> {
    let config = match config {
        Some(path) => SiftConfig::load(path)?,
        None => SiftConfig::discover(root)?,
    };
    config.validate()?;
    Ok(config)
}

fn print_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn extract(file: Option<&Path>, json: bool) -> Result<()> {
    let content = read_input(file)?;
    let tokens = extract_tokens(&content);
    tracing::debug!(tokens = tokens.len(), "extracted");
    if json {
        println!("{}", serde_json::to_string(&tokens)?);
        return Ok(());
    }
    print_lines(tokens.iter().map(String::as_str))
}

pub fn scan(root: &Path, config: Option<&Path>, unique: bool, json: bool) -> Result<()> {
    let config = load_config(root, config)?;
    let result = Scanner::new(&config)
        .scan(root)
        .with_context(|| format!("scan of {} failed", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    if unique {
        let tokens = result.unique_tokens();
        return print_lines(tokens.iter().map(String::as_str));
    }
    print_lines(result.tokens())
}

pub fn purge(
    root: &Path,
    config: Option<&Path>,
    classes: Option<&Path>,
    unused: bool,
) -> Result<()> {
    let config = load_config(root, config)?;
    let candidates = read_input(classes)?;
    let scan = Scanner::new(&config)
        .scan(root)
        .with_context(|| format!("scan of {} failed", root.display()))?;
    let index = UsageIndex::from_scan(&scan, &config.safelist)?;

    let names = candidates.lines().map(str::trim).filter(|l| !l.is_empty());
    let selected = if unused {
        index.unused(names)
    } else {
        index.retain_used(names)
    };
    tracing::info!(selected = selected.len(), unused, "purge filter applied");
    print_lines(selected.iter().map(String::as_str))
}

pub fn show_config(root: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(root, config)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(root: &Path, name: Option<&str>, force: bool) -> Result<()> {
    let target = root.join(CONFIG_FILE_NAME);
    if target.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", target.display());
    }
    let project = match name {
        Some(n) => n.to_string(),
        None => root
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "project".to_string()),
    };
    std::fs::write(&target, config_template(&project))
        .with_context(|| format!("failed to write {}", target.display()))?;
    println!("wrote {}", target.display());
    Ok(())
}
