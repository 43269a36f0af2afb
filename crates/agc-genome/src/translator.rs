//! Operation name to tag sequence translation.

use crate::tag::Tag;

/// Translation rules, evaluated top to bottom; the first needle contained in
/// the upper-cased operation wins, so an operation naming both `FILTER` and
/// `ENCRYPT` lowers as a filter.
const RULES: &[(&str, &[Tag])] = &[
    ("FILTER", &[Tag::Ingest, Tag::Mutate, Tag::Emit]),
    ("ENCRYPT", &[Tag::Ingest, Tag::Mutate, Tag::Mutate, Tag::Emit]),
    ("STORE", &[Tag::Ingest, Tag::Void, Tag::Emit]),
];

/// Translates a symbolic operation into its tag sequence.
///
/// Total: every operation string, known or not, produces a non-empty
/// sequence. Matching is case-insensitive substring containment; an
/// operation matching no rule lowers to a single [`Tag::Void`].
pub fn translate(operation: &str) -> Vec<Tag> {
    let upper = operation.to_ascii_uppercase();
    for (needle, tags) in RULES {
        if upper.contains(needle) {
            return tags.to_vec();
        }
    }
    vec![Tag::Void]
}
