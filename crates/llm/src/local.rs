//! Syntactic bullet-point transform, no language model involved

/// Number of leading sentences kept in the summary
const MAX_SENTENCES: usize = 3;

/// Shorten text to its first three period-separated sentences and
/// reformat them as a bullet list.
///
/// The transform is purely syntactic: split on `'.'`, keep the first
/// three segments, rejoin with `". "`, then bullet each boundary.
pub fn bullet_summary(text: &str) -> String {
    let sentences: Vec<&str> = text.split('.').collect();
    let keep = sentences.len().min(MAX_SENTENCES);
    let short = sentences[..keep].join(". ");
    format!("• {}", short.replace(". ", ".\n• "))
}
