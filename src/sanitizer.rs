//! HTML sanitization for downstream text analysis.
//!
//! Turns a raw article page into either lightly structured HTML or plain
//! text. The article body is located with a site-specific CSS selector; a
//! page without it is not an article and fails with [`ArticleNotFound`].
//!
//! Two removal policies apply while walking the body:
//! - **decompose**: the element and its entire subtree are discarded
//!   (scripts, inline timestamps and other non-content tags);
//! - **unwrap**: the element disappears but its children survive in place.
//!
//! Blacklisted subtrees are dropped before anything is unwrapped, so no part
//! of a discarded subtree leaks into the output. The walk never mutates the
//! parsed tree; it emits output in document order, preserving the original
//! text content byte for byte.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Tags whose subtrees carry no article text and are discarded outright.
const DEFAULT_BLACKLIST_TAGS: &[&str] = &["script", "time"];

/// Elements with no closing tag in serialized HTML.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

static DEFAULT_ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").unwrap());

/// The page has no recognizable article body.
///
/// The only way sanitizing a page can fail: selector validity is enforced
/// when the rules are built, so a rule set that reaches [`sanitize`] is
/// already well formed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no recognizable article body")]
pub struct ArticleNotFound;

/// The configured article selector is not valid CSS.
#[derive(Debug, Error)]
#[error("invalid article selector: {0}")]
pub struct InvalidSelector(String);

/// Site-specific extraction rules: where the article body lives and which
/// tags inside it are pure noise.
#[derive(Clone, Debug)]
pub struct ExtractionRules {
    article_selector: Selector,
    blacklist_tags: Vec<String>,
}

impl ExtractionRules {
    /// Build rules from a CSS selector for the article container and a
    /// blacklist of tags to discard wholesale.
    pub fn new(
        article_selector: &str,
        blacklist_tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, InvalidSelector> {
        let article_selector =
            Selector::parse(article_selector).map_err(|e| InvalidSelector(e.to_string()))?;
        Ok(Self {
            article_selector,
            blacklist_tags: blacklist_tags.into_iter().map(Into::into).collect(),
        })
    }

    fn is_blacklisted(&self, tag: &str) -> bool {
        self.blacklist_tags.iter().any(|t| t == tag)
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            article_selector: DEFAULT_ARTICLE_SELECTOR.clone(),
            blacklist_tags: DEFAULT_BLACKLIST_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Sanitize a raw HTML page into analyzable text.
///
/// With `plaintext = false` the article body is re-serialized with every
/// attribute stripped except a link's `href` and an image's `src`; the tag
/// structure itself is retained.
///
/// With `plaintext = true` the blacklisted subtrees are decomposed and every
/// remaining tag is unwrapped, leaving only the text content in original
/// document order.
///
/// # Errors
///
/// [`ArticleNotFound`] when the page lacks the article container the rules
/// expect.
pub fn sanitize(html: &str, plaintext: bool, rules: &ExtractionRules) -> Result<String, ArticleNotFound> {
    let document = Html::parse_document(html);
    let article = document
        .select(&rules.article_selector)
        .next()
        .ok_or(ArticleNotFound)?;

    let mut out = String::new();
    if plaintext {
        collect_text(article, rules, &mut out);
    } else {
        render_element(article, &mut out);
    }
    Ok(out.trim().to_string())
}

/// Plaintext walk: decompose blacklisted subtrees, unwrap everything else.
fn collect_text(element: ElementRef<'_>, rules: &ExtractionRules, out: &mut String) {
    if rules.is_blacklisted(element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, rules, out);
                }
            }
            _ => {}
        }
    }
}

/// Structured walk: keep the tag skeleton, strip attributes down to the
/// allow-listed `a[href]` and `img[src]`.
fn render_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    out.push('<');
    out.push_str(name);
    match name {
        "a" => {
            if let Some(href) = element.value().attr("href") {
                out.push_str(&format!(" href=\"{href}\""));
            }
        }
        "img" => {
            if let Some(src) = element.value().attr("src") {
                out.push_str(&format!(" src=\"{src}\""));
            }
        }
        _ => {}
    }
    out.push('>');

    if VOID_TAGS.contains(&name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    render_element(child_element, out);
                }
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
