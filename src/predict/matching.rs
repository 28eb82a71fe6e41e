/// Maximum edit distance accepted for a query of `query_len` characters (80% similarity).
pub fn similarity_threshold(query_len: usize) -> usize {
    query_len / 5
}

/// Whether `candidate` is within the similarity threshold of `query`.
///
/// Compares lowercased strings with the Levenshtein distance and accepts a
/// distance of at most `floor(0.2 * len(query))`.
pub fn is_similar(candidate: &str, query: &str) -> bool {
    // lowercasing may change the length, the threshold uses the typed query
    let threshold = similarity_threshold(query.chars().count());
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();
    strsim::levenshtein(&candidate, &query) <= threshold
}

/// Whether every whitespace separated term of `query` occurs in `candidate`,
/// ignoring case. Terms may appear in any order and need not be adjacent.
pub fn contains_all_terms(candidate: &str, query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    query
        .split_whitespace()
        .all(|term| candidate.contains(&term.to_lowercase()))
}

/// Author searches take a single non-empty user id.
pub fn is_author_search(author: &str) -> bool {
    let author = author.trim();
    !author.is_empty() && author.split_whitespace().count() == 1
}
