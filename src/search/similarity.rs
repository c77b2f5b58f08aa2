//! String and keyword-set similarity measures

use std::collections::HashSet;

/// Edit distance with unit cost for insertion, deletion and substitution
///
/// Operates on `char`s so multi-byte text is measured per code point.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (rows, cols) = (a.len() + 1, b.len() + 1);

    let mut matrix = vec![vec![0usize; cols]; rows];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[rows - 1][cols - 1]
}

/// Case-insensitive normalized similarity in `[0, 1]`
///
/// Two empty strings are a perfect match.
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let max_len = query.chars().count().max(target.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&query, &target);
    1.0 - distance as f64 / max_len as f64
}

/// Jaccard index of two keyword sets; `0.0` when both are empty
pub fn semantic_similarity<A, B>(keywords_a: &[A], keywords_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let set_a: HashSet<&str> = keywords_a.iter().map(|k| k.as_ref()).collect();
    let set_b: HashSet<&str> = keywords_b.iter().map(|k| k.as_ref()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}
