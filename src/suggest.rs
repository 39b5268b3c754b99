//! Fuzzy crop-name lookup, for "did you mean" hints.

use std::cmp::Ordering;

/// Split a crop label into words on commas and spaces.
pub fn split_words(label: &str) -> Vec<&str> {
    label
        .split([',', ' '])
        .filter(|w| !w.is_empty())
        .collect()
}

/// Case-insensitive Jaro-Winkler similarity in `[0, 1]`.
///
/// The prefix bonus only applies once the plain Jaro score exceeds 0.7.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(&a.to_lowercase(), &b.to_lowercase())
}

/// Sum over query words of the best similarity against any word of `label`.
fn score(label: &str, query_words: &[&str]) -> f64 {
    let label_words = split_words(label);
    query_words
        .iter()
        .map(|q| {
            label_words
                .iter()
                .map(|w| jaro_winkler(w, q))
                .fold(0.0, f64::max)
        })
        .sum()
}

/// Up to `limit` labels ranked by similarity to `query`, best first, ties
/// broken alphabetically.
pub fn suggest<'a, I>(labels: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let query_words = split_words(query);
    if query_words.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &String)> = labels
        .into_iter()
        .map(|label| (score(label, &query_words), label))
        .collect();

    scored.sort_by(|(sa, la), (sb, lb)| {
        sb.partial_cmp(sa).unwrap_or(Ordering::Equal).then_with(|| la.cmp(lb))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, label)| label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_commas_and_spaces() {
        assert!(split_words("").is_empty());
        assert_eq!(split_words("word"), vec!["word"]);
        assert_eq!(split_words("word1 word2"), vec!["word1", "word2"]);
        assert_eq!(split_words("word1,word2"), vec!["word1", "word2"]);
        assert_eq!(split_words("word1, word2 word3"), vec!["word1", "word2", "word3"]);
        assert_eq!(
            split_words("squash, jack be little, each"),
            vec!["squash", "jack", "be", "little", "each"]
        );
    }

    #[test]
    fn identical_and_disjoint_strings() {
        assert_eq!(jaro_winkler("Kale", "kale"), 1.0);
        assert_eq!(jaro_winkler("abc", ""), 0.0);
        assert_eq!(jaro_winkler("abc", "xyz"), 0.0);
    }

    #[test]
    fn known_jaro_winkler_value() {
        // Classic reference pair.
        let s = jaro_winkler("MARTHA", "MARHTA");
        assert!((s - 0.9611).abs() < 1e-3, "{s}");
    }

    #[test]
    fn weak_matches_get_no_prefix_bonus() {
        // Jaro("cu", "cabbage") is about 0.548, below the bonus threshold.
        let s = jaro_winkler("cu", "Cabbage");
        assert!((s - 0.5476).abs() < 1e-3, "{s}");
    }

    #[test]
    fn short_query_prefers_prefix_match() {
        let more = jaro_winkler("cu", "cucumbers");
        for less in ["cabbage", "carrots", "celeriac"] {
            assert!(more > jaro_winkler("cu", less), "cucumbers vs {less}");
        }
    }

    #[test]
    fn suggestions_are_ranked_and_limited() {
        let labels: Vec<String> = ["cabbage", "carrots", "celeriac", "cucumbers"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let top = suggest(&labels, "cu", 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], "cucumbers");
    }

    #[test]
    fn empty_query_suggests_nothing() {
        let labels = vec!["Corn".to_string()];
        assert!(suggest(&labels, "", 5).is_empty());
    }
}
