use crate::error::{MarkdownError, Result};

use super::{Attributes, ElementNode, HtmlNode, LeafNode};

/// Knobs for [`HtmlNode::to_html_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape leaf values and attribute values. Off by default: values are
    /// written out exactly as they appear in the Markdown source.
    pub escape_html: bool,
}

impl HtmlNode {
    /// Serializes the tree with raw (unescaped) values.
    pub fn to_html(&self) -> Result<String> {
        self.to_html_with(&RenderOptions::default())
    }

    pub fn to_html_with(&self, opts: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        write_node(&mut out, self, opts)?;
        Ok(out)
    }
}

fn write_node(out: &mut String, node: &HtmlNode, opts: &RenderOptions) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => write_leaf(out, leaf, opts),
        HtmlNode::Element(element) => write_element(out, element, opts),
    }
}

fn write_leaf(out: &mut String, leaf: &LeafNode, opts: &RenderOptions) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(MarkdownError::EmptyLeafValue)?;

    let Some(tag) = leaf.tag.as_deref() else {
        push_text(out, value, opts);
        return Ok(());
    };

    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = &leaf.attributes {
        write_attributes(out, attrs, opts);
    }
    out.push('>');
    push_text(out, value, opts);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}

// Element attributes are never emitted.
fn write_element(out: &mut String, element: &ElementNode, opts: &RenderOptions) -> Result<()> {
    let children = element
        .children
        .as_ref()
        .ok_or(MarkdownError::MissingChildren)?;
    let tag = element.tag.as_deref().ok_or(MarkdownError::MissingTag)?;

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for child in children {
        write_node(out, child, opts)?;
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}

fn write_attributes(out: &mut String, attrs: &Attributes, opts: &RenderOptions) {
    for (key, value) in attrs.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        if opts.escape_html {
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

fn push_text(out: &mut String, value: &str, opts: &RenderOptions) {
    if opts.escape_html {
        out.push_str(&html_escape::encode_text(value));
    } else {
        out.push_str(value);
    }
}
