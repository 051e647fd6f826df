//! Fuzzy string scoring on a 0-100 scale.
//!
//! Scores follow the classic fuzzy-matching family: `ratio`, `partial_ratio`, the token
//! sort/set variants, and `weighted_ratio` which picks the most appropriate of them for
//! the relative lengths of its inputs. The underlying similarity is the indel
//! similarity `2 * M / T`, where `M` is the length of the longest common subsequence
//! and `T` the combined length of both strings.

use std::collections::BTreeSet;

/// Partial scores at or above this similarity short-circuit to a perfect match.
const PERFECT_PARTIAL: f64 = 0.995;

/// Scale applied to token-based scores inside `weighted_ratio`.
const UNBASE_SCALE: f64 = 0.95;

/// Lowercases, replaces everything but letters, digits and `_` with spaces, then trims.
pub fn full_process(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' {
                ch
            } else {
                ' '
            }
        })
        .collect();

    replaced.to_lowercase().trim().to_string()
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0_usize; b.len() + 1];
    let mut current = vec![0_usize; b.len() + 1];

    for &ch_a in a {
        for (j, &ch_b) in b.iter().enumerate() {
            current[j + 1] = if ch_a == ch_b {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn char_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2 * longest_common_subsequence(a, b)) as f64 / total as f64
}

fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    char_similarity(&a, &b)
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Similarity of the two whole strings. Empty input scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    to_score(similarity(a, b))
}

/// Best similarity between the shorter string and any equally long window of the longer.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let shorter: Vec<char> = shorter.chars().collect();
    let longer: Vec<char> = longer.chars().collect();

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let score = char_similarity(&shorter, window);

        if score >= PERFECT_PARTIAL {
            return 100;
        }
        best = best.max(score);
    }

    to_score(best)
}

fn sorted_tokens(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(a: &str, b: &str, partial: bool) -> u8 {
    let sorted_a = sorted_tokens(&full_process(a));
    let sorted_b = sorted_tokens(&full_process(b));

    if partial {
        partial_ratio(&sorted_a, &sorted_b)
    } else {
        ratio(&sorted_a, &sorted_b)
    }
}

fn token_set(a: &str, b: &str, partial: bool) -> u8 {
    let processed_a = full_process(a);
    let processed_b = full_process(b);

    if processed_a.is_empty() || processed_b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = processed_a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = processed_b.split_whitespace().collect();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let intersection = join(tokens_a.intersection(&tokens_b).copied().collect());
    let only_a = join(tokens_a.difference(&tokens_b).copied().collect());
    let only_b = join(tokens_b.difference(&tokens_a).copied().collect());

    let combined_a = format!("{} {}", intersection, only_a).trim().to_string();
    let combined_b = format!("{} {}", intersection, only_b).trim().to_string();

    let score = |x: &str, y: &str| {
        if partial {
            partial_ratio(x, y)
        } else {
            ratio(x, y)
        }
    };

    [
        score(&intersection, &combined_a),
        score(&intersection, &combined_b),
        score(&combined_a, &combined_b),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// `ratio` of the alphabetically sorted tokens, so word order does not matter.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    token_sort(a, b, false)
}

/// Compares the shared tokens against each side's full token set.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set(a, b, false)
}

/// Weighted combination of the other scores, chosen by the length ratio of the inputs.
///
/// Similar lengths use the whole-string and token scores. When one string is at least
/// half again as long as the other, partial scores are considered too, scaled down
/// further once the ratio exceeds 8.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let processed_a = full_process(a);
    let processed_b = full_process(b);

    if processed_a.is_empty() || processed_b.is_empty() {
        return 0;
    }

    let base = ratio(&processed_a, &processed_b) as f64;

    let len_a = processed_a.chars().count() as f64;
    let len_b = processed_b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let best = if len_ratio >= 1.5 {
        let partial_scale = if len_ratio > 8.0 { 0.6 } else { 0.9 };

        let partial = partial_ratio(&processed_a, &processed_b) as f64 * partial_scale;
        let partial_sort =
            token_sort(&processed_a, &processed_b, true) as f64 * UNBASE_SCALE * partial_scale;
        let partial_set =
            token_set(&processed_a, &processed_b, true) as f64 * UNBASE_SCALE * partial_scale;

        base.max(partial).max(partial_sort).max(partial_set)
    } else {
        let sort = token_sort_ratio(&processed_a, &processed_b) as f64 * UNBASE_SCALE;
        let set = token_set_ratio(&processed_a, &processed_b) as f64 * UNBASE_SCALE;

        base.max(sort).max(set)
    };

    best.round() as u8
}

/// Picks the choice with the highest `weighted_ratio` against the query.
///
/// Ties keep the earliest choice. Returns `None` when there are no choices.
pub fn extract_one<'c, I>(query: &str, choices: I) -> Option<(&'c str, u8)>
where
    I: IntoIterator<Item = &'c str>,
{
    let mut best: Option<(&'c str, u8)> = None;

    for choice in choices {
        let score = weighted_ratio(query, choice);

        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((choice, score)),
        }
    }

    best
}
