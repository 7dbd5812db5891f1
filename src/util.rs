//! Small numeric and string helpers shared by the drawing and widget code.

// ============================================================================
// Numeric helpers
// ============================================================================

/// Linearly maps `x` from the range `[x0, x1]` onto `[y0, y1]`.
///
/// The mapping is not clamped. A degenerate source range maps everything to `y0`.
pub fn map_range(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() < f64::EPSILON {
        return y0;
    }
    (y0 * (x1 - x) + y1 * (x - x0)) / (x1 - x0)
}

/// Rounds `value` to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

// ============================================================================
// Fuzzy name matching
// ============================================================================

/// Similarity ratio between two strings in `[0.0, 1.0]`.
///
/// Computed as `2 * M / T` where `M` is the length of the longest common
/// subsequence and `T` the total number of characters in both strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Single-row LCS table
    let mut row = vec![0usize; b.len() + 1];
    for ca in &a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    2.0 * row[b.len()] as f64 / total as f64
}

/// Returns the candidate most similar to `word`, provided its ratio reaches `cutoff`.
///
/// Ties keep the first candidate in iteration order.
pub fn closest_match<'a, I>(word: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = similarity(word, candidate);
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(name, _)| name)
}
