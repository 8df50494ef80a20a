use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FindRelevantParams {
    /// Free text to scan for regulatory keywords (e.g. a project description).
    pub text: String,
    /// Maximum number of articles to return (default: server setting, max: 50).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetArticleParams {
    /// Stable article ID such as "ai_act_article_5" or "rgpd_article_22".
    pub article_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RenderRegulationsParams {
    /// Free text whose matching articles should be rendered as cards.
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleSummary {
    pub id: String,
    pub law: String,
    pub title: String,
    pub category: String,
    /// One of "high", "medium", "low".
    pub importance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleDetailResponse {
    pub id: String,
    pub law: String,
    pub title: String,
    pub category: String,
    pub importance: String,
    pub content: String,
    /// False when the ID is unknown and the placeholder article was returned.
    pub found: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FindRelevantResponse {
    pub results: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderedHtmlResponse {
    /// HTML fragment; empty when there is nothing to show.
    pub html: String,
}
