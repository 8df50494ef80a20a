/// Static knowledge base of AI Act and RGPD article summaries.
///
/// Articles and keyword rules are seeded at compile time and never mutated,
/// so every function here is pure and safe to call from any task.
use crate::model::{Article, Importance, KeywordRule};

pub const NOT_FOUND_ID: &str = "not_found";

const ARTICLES: &[Article] = &[
    Article {
        id: "ai_act_article_5",
        law: "AI Act",
        title: "Systèmes d'IA interdits",
        content: "Les pratiques d'IA suivantes sont interdites : la sublimation ou la manipulation des comportements, l'exploitation des vulnérabilités, la surveillance généralisée, le scoring social par les autorités publiques. Ces systèmes sont considérés comme présentant un risque inacceptable pour la sécurité, les moyens de subsistance et les droits des personnes.",
        category: "Interdiction",
        importance: Importance::High,
    },
    Article {
        id: "ai_act_article_6",
        law: "AI Act",
        title: "Classification des systèmes d'IA à haut risque",
        content: "Classification en 4 catégories de risque : 1) Risque inacceptable (interdiction), 2) Risque élevé (conformité stricte + évaluation), 3) Risque limité (transparence obligatoire), 4) Risque minime (pas de régulation spécifique). Les systèmes de recrutement, crédit scoring, et justice pénale sont généralement classés haut risque.",
        category: "Classification",
        importance: Importance::High,
    },
    Article {
        id: "rgpd_article_22",
        law: "RGPD",
        title: "Décision individuelle automatisée",
        content: "Toute personne a le droit de ne pas faire l'objet d'une décision fondée exclusivement sur un traitement automatisé, y compris le profilage, produisant des effets juridiques la concernant ou l'affectant de manière significative. Des exceptions existent avec des garanties appropriées (consentement explicite, contrat).",
        category: "Droits des personnes",
        importance: Importance::Medium,
    },
    Article {
        id: "rgpd_article_9",
        law: "RGPD",
        title: "Traitement des catégories particulières de données",
        content: "Le traitement des données personnelles révélant l'origine raciale ou ethnique, les opinions politiques, les convictions religieuses ou philosophiques, l'appartenance syndicale, ainsi que le traitement des données génétiques, des données biométriques aux fins d'identifier une personne physique de manière unique, des données concernant la santé ou des données concernant la vie sexuelle ou l'orientation sexuelle d'une personne physique est interdit, sauf exceptions spécifiques énumérées.",
        category: "Données sensibles",
        importance: Importance::High,
    },
    Article {
        id: "ai_act_article_13",
        law: "AI Act",
        title: "Documentation technique",
        content: "Les fournisseurs de systèmes d'IA à haut risque doivent établir une documentation technique complète avant la mise sur le marché. Cette documentation doit permettre aux autorités d'évaluer la conformité du système avec les exigences du règlement AI Act.",
        category: "Conformité technique",
        importance: Importance::Medium,
    },
    Article {
        id: "rgpd_article_5",
        law: "RGPD",
        title: "Principes relatifs au traitement des données",
        content: "Les données personnelles doivent être : traitées de manière licite, loyale et transparente ; collectées pour des finalités déterminées, explicites et légitimes ; adéquates, pertinentes et limitées ; exactes et tenues à jour ; conservées sous une forme permettant l'identification des personnes pendant une durée n'excédant pas celle nécessaire ; traitées de manière à garantir une sécurité appropriée.",
        category: "Principes fondamentaux",
        importance: Importance::High,
    },
];

static NOT_FOUND: Article = Article {
    id: NOT_FOUND_ID,
    law: "Information",
    title: "Article non trouvé",
    content: "Les informations détaillées sur cet article seront bientôt disponibles dans notre base de connaissances mise à jour régulièrement.",
    category: "Pending",
    importance: Importance::Low,
};

/// Detection rules, evaluated in declaration order. The order decides the
/// order of surfaced articles.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["reconnaissance faciale", "surveillance", "biométrie"],
        articles: &["ai_act_article_5", "rgpd_article_9"],
    },
    KeywordRule {
        keywords: &["recrutement", "embauche", "cv", "candidat"],
        articles: &["ai_act_article_6", "rgpd_article_22", "rgpd_article_5"],
    },
    KeywordRule {
        keywords: &["santé", "médical", "diagnostic", "patient"],
        articles: &["rgpd_article_9", "ai_act_article_6", "rgpd_article_5"],
    },
    KeywordRule {
        keywords: &["finance", "crédit", "scoring", "prêt"],
        articles: &["ai_act_article_6", "rgpd_article_22"],
    },
    KeywordRule {
        keywords: &["documentation", "technique", "conformité"],
        articles: &["ai_act_article_13", "rgpd_article_5"],
    },
    KeywordRule {
        keywords: &["donnée personnelle", "vie privée", "rgpd"],
        articles: &["rgpd_article_5", "rgpd_article_9"],
    },
];

/// Resolve an article id. Unknown ids resolve to the `not_found` placeholder.
pub fn lookup(id: &str) -> &'static Article {
    ARTICLES
        .iter()
        .find(|article| article.id == id)
        .unwrap_or(&NOT_FOUND)
}

pub fn contains(id: &str) -> bool {
    ARTICLES.iter().any(|article| article.id == id)
}

/// All stored articles, in declaration order.
pub fn articles() -> &'static [Article] {
    ARTICLES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_stored_id_resolves_to_itself() {
        for article in articles() {
            assert_eq!(lookup(article.id).id, article.id);
            assert!(contains(article.id));
        }
    }

    #[test]
    fn unknown_id_resolves_to_placeholder() {
        let article = lookup("anything-not-in-store");
        assert_eq!(article.id, NOT_FOUND_ID);
        assert_eq!(article.law, "Information");
        assert_eq!(article.category, "Pending");
        assert_eq!(article.importance, Importance::Low);
        assert!(!contains(NOT_FOUND_ID));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = articles().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), articles().len());
        assert_eq!(articles().len(), 6);
    }

    #[test]
    fn rules_reference_stored_articles_with_lowercase_keywords() {
        for rule in RULES {
            for id in rule.articles {
                assert!(contains(id), "rule references unknown article {id}");
            }
            for keyword in rule.keywords {
                assert!(!keyword.trim().is_empty());
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
