use crate::menu::{Catalog, MenuItem};
use tracing::debug;

/// Which rule referenced an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Utterance contains the full item name
    FullName,
    /// Item has several keywords and the utterance contains all of them
    AllKeywords,
    /// Item has a single keyword and the utterance contains it
    SingleKeyword,
}

/// Decide whether a lowercased utterance refers to `item`
///
/// Rules are tried in precedence order and the first that succeeds wins.
#[must_use]
pub fn match_rule(lower_utterance: &str, item: &MenuItem) -> Option<MatchRule> {
    if lower_utterance.contains(&item.name.to_lowercase()) {
        return Some(MatchRule::FullName);
    }

    match item.keywords.as_slice() {
        [] => None,
        [keyword] => lower_utterance
            .contains(&keyword.to_lowercase())
            .then_some(MatchRule::SingleKeyword),
        keywords => keywords
            .iter()
            .all(|k| lower_utterance.contains(&k.to_lowercase()))
            .then_some(MatchRule::AllKeywords),
    }
}

/// Items referenced by `utterance`, in catalog order
///
/// Each item is tested once, so the result never holds duplicates.
/// Returns an empty vector when nothing matches.
#[must_use]
pub fn match_items<'a>(utterance: &str, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
    let lower = utterance.to_lowercase();

    catalog
        .iter()
        .filter(|item| {
            let rule = match_rule(&lower, item);
            debug!(item = %item.name, rule = ?rule, "menu match check");
            rule.is_some()
        })
        .collect()
}
