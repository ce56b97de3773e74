use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::DEFAULT_TUMOR_COLOR;

pub fn load_builtin_palette() -> Result<BTreeMap<String, String>> {
    let content = include_str!("../../assets/palette_v1.tsv");
    parse_palette_tsv(content, "built-in palette")
}

pub fn load_user_palette(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read palette TSV {}", path.display()))?;
    parse_palette_tsv(&content, &path.display().to_string())
}

/// User entries override built-in ones of the same tumor id.
pub fn merge_palettes(
    mut builtin: BTreeMap<String, String>,
    user: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    for (tumor, color) in user {
        builtin.insert(tumor, color);
    }
    builtin
}

pub fn tumor_color<'a>(palette: &'a BTreeMap<String, String>, tumor_id: &str) -> &'a str {
    palette
        .get(tumor_id)
        .map(String::as_str)
        .unwrap_or(DEFAULT_TUMOR_COLOR)
}

fn parse_palette_tsv(content: &str, source: &str) -> Result<BTreeMap<String, String>> {
    let mut palette = BTreeMap::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let tumor = parts[0].trim();
        let color = parts[1].trim();
        if tumor.is_empty() || color.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        if !is_hex_color(color) {
            bail!("{}:{} color '{}' is not #RRGGBB", source, line_no, color);
        }
        palette.insert(tumor.to_string(), color.to_string());
    }

    Ok(palette)
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
