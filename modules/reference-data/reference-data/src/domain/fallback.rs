//! Locale fallback rule for translated names.
//!
//! A requested tag is tried as-is, then by its base language (the part before
//! the first hyphen). Nothing else is tried: the canonical name is the
//! caller's fallback.

/// Tags to try, in order, for a requested locale tag.
#[must_use]
pub fn fallback_chain(locale: &str) -> Vec<&str> {
    let mut chain = Vec::with_capacity(2);
    if locale.is_empty() {
        return chain;
    }
    chain.push(locale);
    if let Some((base, _)) = locale.split_once('-')
        && !base.is_empty()
    {
        chain.push(base);
    }
    chain
}

/// Picks the best name among `(locale_code, name)` pairs of one entity row.
///
/// Pure over its inputs; the caller supplies a snapshot of the label rows.
#[must_use]
pub fn resolve<'a>(locale: &str, labels: &'a [(String, String)]) -> Option<&'a str> {
    fallback_chain(locale).into_iter().find_map(|tag| {
        labels
            .iter()
            .find(|(code, _)| code == tag)
            .map(|(_, name)| name.as_str())
    })
}
