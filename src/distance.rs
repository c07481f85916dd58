//! Levenshtein edit distance between candidate slugs.

/// Compute the Levenshtein distance between two strings.
///
/// Insertions, deletions, and substitutions each cost 1. Inputs are compared
/// per `char`; in practice both sides are ASCII slugs produced by
/// [`crate::slug::normalize`], so the cap on slug length bounds the cost of a
/// single call at a 31x31 table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let b_chars: Vec<char> = b.chars().collect();

    // Rolling single-row DP over the (|a|+1) x (|b|+1) table.
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = prev_diag + usize::from(ca != cb);
            prev_diag = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(prev_diag + 1);
        }
    }

    row[b_chars.len()]
}
