use serde::Serialize;

/// A single legal article summary (e.g., "AI Act - Article 5: Systèmes d'IA interdits").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Stable identifier, e.g. "ai_act_article_5", "rgpd_article_22"
    pub id: &'static str,
    /// Regulatory instrument, e.g. "AI Act", "RGPD"
    pub law: &'static str,
    /// Human-readable article title
    pub title: &'static str,
    /// Summary body text
    pub content: &'static str,
    /// Short classification label, e.g. "Interdiction", "Données sensibles"
    pub category: &'static str,
    pub importance: Importance,
}

/// How much attention an article deserves when it is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Wire value, e.g. "high".
    pub fn as_str(self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }

    /// Label shown to readers of the rendered cards.
    pub fn label(self) -> &'static str {
        match self {
            Importance::High => "haute",
            Importance::Medium => "moyenne",
            Importance::Low => "basse",
        }
    }
}

/// Associates trigger substrings with the articles they surface.
///
/// Keywords are lowercase; a rule fires when any of them occurs anywhere in
/// the lowercased input.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    /// Article ids in the order they are surfaced
    pub articles: &'static [&'static str],
}
