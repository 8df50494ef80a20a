/// Keyword relevance matcher.
///
/// Flags articles whose rules have at least one keyword occurring in the
/// input. This is an OR of substring tests, not a ranked search: results are
/// ordered by rule declaration, then by article order within each rule.
use tracing::debug;

use crate::knowledge::{self, RULES};
use crate::model::{Article, KeywordRule};

pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Find up to `max_results` articles relevant to `text`.
pub fn find_relevant(text: &str, max_results: usize) -> Vec<&'static Article> {
    relevant_ids(RULES, text)
        .into_iter()
        .take(max_results)
        .map(knowledge::lookup)
        .collect()
}

/// Collect article ids from every rule matching `text`, first occurrence wins.
///
/// Matching is a plain substring test on the lowercased input, so "cv" also
/// fires inside longer words.
pub fn relevant_ids(rules: &[KeywordRule], text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    let mut detected: Vec<&'static str> = Vec::new();
    let mut matched_rules = 0;

    for rule in rules {
        if !rule.keywords.iter().any(|keyword| text_lower.contains(keyword)) {
            continue;
        }
        matched_rules += 1;
        for &id in rule.articles {
            if !detected.contains(&id) {
                detected.push(id);
            }
        }
    }

    debug!(matched_rules, articles = detected.len(), "keyword rules evaluated");
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(articles: &[&Article]) -> Vec<&'static str> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn empty_and_blank_text_match_nothing() {
        assert!(find_relevant("", DEFAULT_MAX_RESULTS).is_empty());
        assert!(find_relevant("   \t\n", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn unmatched_text_returns_empty() {
        assert!(find_relevant("une recette de cuisine provençale", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn recruitment_surfaces_its_rule_in_order() {
        let found = find_relevant("Outil d'aide au recrutement des stagiaires", DEFAULT_MAX_RESULTS);
        assert_eq!(
            ids(&found),
            vec!["ai_act_article_6", "rgpd_article_22", "rgpd_article_5"]
        );
        assert_eq!(found[0].law, "AI Act");
        assert!(!found[1].content.is_empty());
    }

    #[test]
    fn overlapping_rules_deduplicate_by_first_occurrence() {
        let text = "Application de santé traitant chaque donnée personnelle";
        assert_eq!(
            relevant_ids(RULES, text),
            vec!["rgpd_article_9", "ai_act_article_6", "rgpd_article_5"]
        );
        let found = find_relevant(text, DEFAULT_MAX_RESULTS);
        assert_eq!(
            ids(&found),
            vec!["rgpd_article_9", "ai_act_article_6", "rgpd_article_5"]
        );
    }

    #[test]
    fn first_seen_order_follows_rule_declaration() {
        // rule 1 fires via "surveillance", rule 4 via "crédit"
        let text = "Crédit accordé après surveillance des comptes";
        assert_eq!(
            relevant_ids(RULES, text),
            vec!["ai_act_article_5", "rgpd_article_9", "ai_act_article_6", "rgpd_article_22"]
        );
        assert_eq!(
            ids(&find_relevant(text, DEFAULT_MAX_RESULTS)),
            vec!["ai_act_article_5", "rgpd_article_9", "ai_act_article_6"]
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            find_relevant("RECONNAISSANCE FACIALE", DEFAULT_MAX_RESULTS),
            find_relevant("reconnaissance faciale", DEFAULT_MAX_RESULTS)
        );
        assert_eq!(
            ids(&find_relevant("SANTÉ", DEFAULT_MAX_RESULTS)),
            ids(&find_relevant("santé", DEFAULT_MAX_RESULTS))
        );
    }

    #[test]
    fn accents_are_not_folded() {
        assert!(find_relevant("sante", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn never_exceeds_max_results() {
        let everything = "surveillance recrutement santé finance documentation rgpd";
        assert_eq!(relevant_ids(RULES, everything).len(), 6);
        for max in 0..8 {
            assert!(find_relevant(everything, max).len() <= max);
        }
        assert_eq!(find_relevant(everything, 10).len(), 6);
    }

    #[test]
    fn fewer_matches_are_not_padded() {
        let found = find_relevant("dossier de financement", 5);
        assert_eq!(ids(&found), vec!["ai_act_article_6", "rgpd_article_22"]);
    }

    #[test]
    fn repeated_calls_agree() {
        let text = "Diagnostic médical et vie privée";
        assert_eq!(
            find_relevant(text, DEFAULT_MAX_RESULTS),
            find_relevant(text, DEFAULT_MAX_RESULTS)
        );
    }

    #[test]
    fn substrings_match_inside_words() {
        assert_eq!(
            relevant_ids(RULES, "Envoyez vos CVs"),
            vec!["ai_act_article_6", "rgpd_article_22", "rgpd_article_5"]
        );
    }

    #[test]
    fn works_over_custom_rules() {
        const CUSTOM: &[KeywordRule] = &[
            KeywordRule {
                keywords: &["alpha"],
                articles: &["a", "b"],
            },
            KeywordRule {
                keywords: &["beta", "gamma"],
                articles: &["b", "c"],
            },
        ];
        assert_eq!(relevant_ids(CUSTOM, "GAMMA then Alpha"), vec!["a", "b", "c"]);
        assert_eq!(relevant_ids(CUSTOM, "beta"), vec!["b", "c"]);
        assert!(relevant_ids(CUSTOM, "delta").is_empty());
    }
}
