use regex::Regex;

/// Normalizes a comma-separated list of raw source paths into module
/// identifiers.
///
/// Each element is stripped of everything up to and including the last
/// occurrence of `base` plus at most one trailing `/` or `\` separator, then
/// of a trailing `.rb` extension. Elements left empty by stray commas are
/// dropped. Order is preserved.
pub fn normalize_sources(base: &str, raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };
    // Greedy prefix strip: mirrors matching up to the *last* occurrence of
    // the base path inside an absolute source path.
    let prefix = Regex::new(&format!(r"^.*{}[/\\]?", regex::escape(base)))
        .expect("escaped literal pattern");
    raw.split(',')
        .filter(|source| !source.is_empty())
        .map(|source| {
            let stripped = prefix.replace(source, "");
            let stripped = stripped
                .strip_suffix(".rb")
                .unwrap_or(&stripped)
                .to_string();
            stripped
        })
        .filter(|source| !source.is_empty())
        .collect()
}
