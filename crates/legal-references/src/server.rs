/// MCP server exposing the legal reference knowledge base.
///
/// Every tool is a thin adapter over the pure lookup, matcher and renderer;
/// the knowledge base is static, so the server holds no shared mutable state.
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::config::Config;
use crate::knowledge;
use crate::matcher;
use crate::model::Article;
use crate::render::{ArticleDetail, RegulationPanel};
use mcp_common::mcp_api::{
    ArticleDetailResponse, ArticleListResponse, ArticleSummary, FindRelevantParams,
    FindRelevantResponse, GetArticleParams, RenderRegulationsParams, RenderedHtmlResponse,
};

const MAX_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct LegalReferencesServer {
    config: Config,
    tool_router: ToolRouter<LegalReferencesServer>,
}

impl LegalReferencesServer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl LegalReferencesServer {
    #[tool(description = "Find AI Act / RGPD articles relevant to a free-text description.")]
    async fn find_relevant_articles(
        &self,
        Parameters(params): Parameters<FindRelevantParams>,
    ) -> Result<Json<FindRelevantResponse>, String> {
        let limit = effective_limit(params.limit, self.config.max_results);

        let results: Vec<ArticleSummary> = matcher::find_relevant(&params.text, limit)
            .into_iter()
            .map(to_api_summary)
            .collect();
        info!(limit, results = results.len(), "find_relevant_articles");

        Ok(Json(FindRelevantResponse { results }))
    }

    #[tool(description = "Get an article by ID (e.g. 'ai_act_article_6'). Unknown IDs return a placeholder.")]
    async fn get_article(
        &self,
        Parameters(params): Parameters<GetArticleParams>,
    ) -> Result<Json<ArticleDetailResponse>, String> {
        let article_id = params.article_id.trim();
        if article_id.is_empty() {
            return Err("article_id must not be empty".to_string());
        }

        Ok(Json(to_api_detail(article_id, knowledge::lookup(article_id))))
    }

    #[tool(description = "List every article in the knowledge base.")]
    async fn list_articles(&self) -> Result<Json<ArticleListResponse>, String> {
        let articles = knowledge::articles().iter().map(to_api_summary).collect();
        Ok(Json(ArticleListResponse { articles }))
    }

    #[tool(description = "Render the articles relevant to a free-text description as HTML cards.")]
    async fn render_regulations(
        &self,
        Parameters(params): Parameters<RenderRegulationsParams>,
    ) -> Result<Json<RenderedHtmlResponse>, String> {
        let relevant = matcher::find_relevant(&params.text, self.config.max_results);
        let html = RegulationPanel::new(&relevant, self.config.preview_chars).to_html();
        Ok(Json(RenderedHtmlResponse { html }))
    }

    #[tool(description = "Render the full-article detail view for an article ID as HTML.")]
    async fn render_article(
        &self,
        Parameters(params): Parameters<GetArticleParams>,
    ) -> Result<Json<RenderedHtmlResponse>, String> {
        let article_id = params.article_id.trim();
        if article_id.is_empty() {
            return Err("article_id must not be empty".to_string());
        }

        let html = ArticleDetail::for_id(article_id).to_html();
        Ok(Json(RenderedHtmlResponse { html }))
    }
}

/// Caller limit capped at `MAX_LIMIT`, or the configured default.
fn effective_limit(requested: Option<u32>, default: usize) -> usize {
    requested
        .map(|l| l.min(MAX_LIMIT) as usize)
        .unwrap_or(default)
}

fn to_api_summary(article: &Article) -> ArticleSummary {
    ArticleSummary {
        id: article.id.to_string(),
        law: article.law.to_string(),
        title: article.title.to_string(),
        category: article.category.to_string(),
        importance: article.importance.as_str().to_string(),
    }
}

fn to_api_detail(requested_id: &str, article: &Article) -> ArticleDetailResponse {
    ArticleDetailResponse {
        id: article.id.to_string(),
        law: article.law.to_string(),
        title: article.title.to_string(),
        category: article.category.to_string(),
        importance: article.importance.as_str().to_string(),
        content: article.content.to_string(),
        found: knowledge::contains(requested_id),
    }
}

#[tool_handler]
impl ServerHandler for LegalReferencesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "legal-references".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Legal references MCP server. Surfaces AI Act and RGPD article summaries for a \
                 free-text description. Use find_relevant_articles for keyword detection, \
                 get_article for a specific ID (for example rgpd_article_22), list_articles to \
                 browse, and render_regulations / render_article for HTML cards."
                    .to_string(),
            ),
        }
    }
}
