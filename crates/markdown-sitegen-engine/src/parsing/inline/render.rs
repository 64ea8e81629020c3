use crate::html::{Attributes, HtmlNode};

use super::types::{InlineSpan, SpanKind};

/// Converts one inline span into the leaf node that renders it.
pub fn span_to_node(span: &InlineSpan) -> HtmlNode {
    match &span.kind {
        SpanKind::Text => HtmlNode::text(span.text.as_str()),
        SpanKind::Bold => HtmlNode::leaf("b", span.text.as_str()),
        SpanKind::Italic => HtmlNode::leaf("i", span.text.as_str()),
        SpanKind::Code => HtmlNode::leaf("code", span.text.as_str()),
        SpanKind::Link { url } => HtmlNode::leaf_with_attributes(
            "a",
            span.text.as_str(),
            Attributes::new().with("href", url.as_str()),
        ),
        SpanKind::Image { url } => HtmlNode::leaf_with_attributes(
            "img",
            "",
            Attributes::new()
                .with("src", url.as_str())
                .with("alt", span.text.as_str()),
        ),
    }
}

/// Renders a span sequence as sibling nodes.
pub fn spans_to_nodes(spans: &[InlineSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_node).collect()
}
