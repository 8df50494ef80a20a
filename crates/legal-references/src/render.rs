/// HTML rendering of surfaced articles.
///
/// Produces the "Références juridiques pertinentes" panel (one card per
/// article) and the full-article detail view. Cards carry their own open
/// handler, bound when the panel is built, instead of relying on a globally
/// reachable callback name.
use crate::knowledge;
use crate::matcher::{self, DEFAULT_MAX_RESULTS};
use crate::model::{Article, Importance};

pub const DEFAULT_PREVIEW_CHARS: usize = 140;

const ACCENT: &str = "#2563eb";

pub type OpenHandler = Box<dyn Fn() -> ArticleDetail + Send + Sync>;

/// Render the panel for whatever `text` matches. Empty when nothing matches.
pub fn show_relevant_regulations(text: &str) -> String {
    let relevant = matcher::find_relevant(text, DEFAULT_MAX_RESULTS);
    RegulationPanel::new(&relevant, DEFAULT_PREVIEW_CHARS).to_html()
}

pub struct RegulationPanel {
    cards: Vec<ArticleCard>,
}

impl RegulationPanel {
    /// Build one card per article, in the given order. Each card's handler
    /// resolves its article through the knowledge base when opened.
    pub fn new(articles: &[&'static Article], preview_chars: usize) -> Self {
        let cards = articles
            .iter()
            .map(|&article| {
                let id = article.id;
                ArticleCard::new(
                    article,
                    preview_chars,
                    Box::new(move || ArticleDetail::for_id(id)),
                )
            })
            .collect();
        Self { cards }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[ArticleCard] {
        &self.cards
    }

    pub fn card(&self, article_id: &str) -> Option<&ArticleCard> {
        self.cards.iter().find(|card| card.article.id == article_id)
    }

    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut html = String::from(concat!(
            r#"<div class="knowledge-section">"#,
            r#"<h4 style="margin-bottom: 20px; color: #1e293b; display: flex; align-items: center; gap: 10px; padding-bottom: 10px; border-bottom: 2px solid #e2e8f0;">"#,
            r#"<i class="fas fa-gavel" style="color: #2563eb;"></i> Références juridiques pertinentes</h4>"#,
            r#"<div style="display: grid; gap: 15px;">"#,
        ));
        for card in &self.cards {
            html.push_str(&card.to_html());
        }
        html.push_str(concat!(
            "</div>",
            r#"<div class="knowledge-advice" style="margin-top: 20px; padding: 15px; background: #f8fafc; border-radius: 8px; font-size: 14px; color: #64748b;">"#,
            r#"<i class="fas fa-lightbulb" style="color: #f59e0b;"></i> "#,
            "<span><strong>Conseil :</strong> Ces références sont fournies à titre informatif. ",
            "Consultez toujours un expert juridique pour une analyse complète.</span>",
            "</div></div>",
        ));
        html
    }
}

/// A clickable summary of one article.
pub struct ArticleCard {
    article: &'static Article,
    preview_chars: usize,
    on_open: OpenHandler,
}

impl ArticleCard {
    pub fn new(article: &'static Article, preview_chars: usize, on_open: OpenHandler) -> Self {
        Self {
            article,
            preview_chars,
            on_open,
        }
    }

    pub fn article(&self) -> &'static Article {
        self.article
    }

    /// Run the handler bound at construction and return the detail view.
    pub fn open(&self) -> ArticleDetail {
        (self.on_open)()
    }

    pub fn to_html(&self) -> String {
        let article = self.article;
        let (badge_bg, badge_fg) = badge_colors(article.importance);
        let notice = match article.importance {
            Importance::High => "⚠️ HAUTE IMPORTANCE",
            Importance::Medium | Importance::Low => "📄 À CONNAÎTRE",
        };

        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="article-card" role="button" tabindex="0" data-article-id="{id}" style="background: white; padding: 20px; border-radius: 10px; border: 1px solid #e2e8f0; cursor: pointer;">"#,
            id = escape_html(article.id),
        ));
        html.push_str(&format!(
            r#"<div style="display: inline-block; background: {badge_bg}; color: {badge_fg}; padding: 4px 12px; border-radius: 20px; font-size: 12px; font-weight: 600; margin-bottom: 8px;">{category}</div>"#,
            category = escape_html(&article.category.to_uppercase()),
        ));
        html.push_str(&format!(
            r#"<div style="font-weight: bold; color: #1e293b; font-size: 16px;">{law} - {title}</div>"#,
            law = escape_html(article.law),
            title = escape_html(article.title),
        ));
        html.push_str(&format!(
            r#"<div style="color: #475569; line-height: 1.5; margin-top: 10px; font-size: 14px;">{preview}</div>"#,
            preview = escape_html(&preview(article.content, self.preview_chars)),
        ));
        html.push_str(&format!(
            r#"<div style="margin-top: 15px; padding-top: 15px; border-top: 1px dashed #e2e8f0; display: flex; justify-content: space-between;"><span style="font-size: 12px; color: #94a3b8;">Cliquez pour lire l'article complet</span><span style="background: {ACCENT}; color: white; padding: 4px 12px; border-radius: 6px; font-size: 12px;">{notice}</span></div></div>"#,
        ));
        html
    }
}

/// The full-article view opened from a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleDetail {
    article: &'static Article,
}

impl ArticleDetail {
    /// Unknown ids render the `not_found` placeholder.
    pub fn for_id(article_id: &str) -> Self {
        Self {
            article: knowledge::lookup(article_id),
        }
    }

    pub fn article(&self) -> &'static Article {
        self.article
    }

    pub fn to_html(&self) -> String {
        let article = self.article;
        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="article-modal" role="dialog" aria-modal="true" data-article-id="{id}" style="position: fixed; inset: 0; background: rgba(0,0,0,0.7); display: flex; justify-content: center; align-items: center; z-index: 10000; padding: 20px;">"#,
            id = escape_html(article.id),
        ));
        html.push_str(
            r#"<div style="background: white; padding: 40px; border-radius: 20px; max-width: 700px; max-height: 85vh; overflow-y: auto; width: 100%; position: relative;">"#,
        );
        html.push_str(
            r#"<button type="button" class="article-modal-close" aria-label="Fermer" style="position: absolute; top: 15px; right: 15px; background: none; border: none; font-size: 24px; cursor: pointer; color: #64748b;">×</button>"#,
        );
        html.push_str(&format!(
            r#"<div style="display: inline-block; background: {ACCENT}; color: white; padding: 6px 16px; border-radius: 20px; font-weight: 600; margin-bottom: 15px;">{law}</div>"#,
            law = escape_html(article.law),
        ));
        html.push_str(&format!(
            r#"<h3 style="color: #1e293b; margin: 10px 0; font-size: 24px; line-height: 1.3;">{title}</h3>"#,
            title = escape_html(article.title),
        ));
        html.push_str(&format!(
            r#"<div style="color: #64748b; font-size: 14px;">Catégorie : <strong>{category}</strong> • Importance : <strong>{importance}</strong></div>"#,
            category = escape_html(article.category),
            importance = article.importance.label().to_uppercase(),
        ));
        html.push_str(&format!(
            r#"<div style="background: #f8fafc; padding: 25px; border-radius: 12px; margin: 25px 0; border-left: 4px solid {ACCENT}; color: #1e293b; line-height: 1.6; font-size: 15px;">{content}</div>"#,
            content = escape_html(article.content),
        ));
        html.push_str(&format!(
            r#"<div style="display: flex; justify-content: space-between; align-items: center; padding-top: 20px; border-top: 1px solid #e2e8f0;"><div style="color: #94a3b8; font-size: 13px;">Article référencé dans notre base de connaissances</div><button type="button" class="article-modal-close" style="background: {ACCENT}; color: white; border: none; padding: 10px 25px; border-radius: 8px; font-weight: 600; cursor: pointer;">Compris</button></div>"#,
        ));
        html.push_str("</div></div>");
        html
    }
}

fn badge_colors(importance: Importance) -> (&'static str, &'static str) {
    match importance {
        Importance::High => ("#fee2e2", "#dc2626"),
        Importance::Medium => ("#fef3c7", "#d97706"),
        Importance::Low => ("#dbeafe", ACCENT),
    }
}

fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        format!("{}...", content.chars().take(max_chars).collect::<String>())
    } else {
        content.to_string()
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
