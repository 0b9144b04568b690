use super::models::ApiDefinition;

/// Scores above this are not a match.
pub const MATCH_THRESHOLD: f64 = 0.35;
pub const MAX_RESULTS: usize = 10;

/// Characters of distance from the start of a field that cost a full point.
const LOCATION_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub api: &'a ApiDefinition,
    /// 0.0 is a perfect match at the start of a field.
    pub score: f64,
}

/// Rank `apis` against `query` over url, method and category.
///
/// Order of equally scored hits follows the input order.
pub fn search<'a>(apis: &'a [ApiDefinition], query: &str) -> Vec<SearchHit<'a>> {
    let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = apis
        .iter()
        .filter_map(|api| {
            [api.url.as_str(), api.method.as_str(), api.category.as_str()]
                .into_iter()
                .filter_map(|field| field_score(&pattern, field))
                .min_by(|a, b| a.total_cmp(b))
                .filter(|score| *score <= MATCH_THRESHOLD)
                .map(|score| SearchHit { api, score })
        })
        .collect();

    hits.sort_by(|a, b| a.score.total_cmp(&b.score));
    hits.truncate(MAX_RESULTS);
    tracing::debug!("search '{query}' matched {} API(s)", hits.len());
    hits
}

/// Best `errors / pattern_len + start / 100` over every substring of `field`.
fn field_score(pattern: &[char], field: &str) -> Option<f64> {
    let text: Vec<char> = field.to_lowercase().chars().collect();
    if text.is_empty() {
        return None;
    }

    let len = pattern.len() as f64;
    let mut best: Option<f64> = None;
    for start in 0..text.len() {
        let location_penalty = start as f64 / LOCATION_DISTANCE;
        if best.is_some_and(|b| location_penalty >= b) {
            break;
        }
        let errors = min_prefix_distance(pattern, &text[start..]);
        let score = errors as f64 / len + location_penalty;
        if best.map_or(true, |b| score < b) {
            best = Some(score);
        }
    }
    best
}

/// Smallest edit distance between `pattern` and any prefix of `text`.
fn min_prefix_distance(pattern: &[char], text: &[char]) -> usize {
    // prev[i]: distance between pattern[..i] and the text consumed so far.
    let mut prev: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = prev[pattern.len()];

    for &tc in text {
        let mut current = Vec::with_capacity(prev.len());
        current.push(prev[0] + 1);
        for (i, &pc) in pattern.iter().enumerate() {
            let substitution = prev[i] + usize::from(pc != tc);
            let insertion = prev[i + 1] + 1;
            let deletion = current[i] + 1;
            current.push(substitution.min(insertion).min(deletion));
        }
        best = best.min(current[pattern.len()]);
        prev = current;
    }

    best
}
