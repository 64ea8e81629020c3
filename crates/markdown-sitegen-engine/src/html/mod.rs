//! # HTML Node Model
//!
//! The output tree of the Markdown pipeline.
//!
//! ## Types
//!
//! - **`HtmlNode`**: closed sum of `Leaf` and `Element`
//! - **`LeafNode`**: optional tag, a value, optional attributes (`<b>text</b>`, raw text, `<img>`)
//! - **`ElementNode`**: tag plus ordered children (`<p>`, `<ul>`, `<div>`)
//! - **`Attributes`**: insertion-ordered `key="value"` pairs
//!
//! Nodes are built bottom-up by the block compiler and consumed once by
//! [`HtmlNode::to_html`]. Fields are public so callers can assemble nodes by
//! hand; the serializer is where missing values, tags and children are
//! reported.

pub mod attributes;
pub mod render;

pub use attributes::Attributes;
pub use render::RenderOptions;

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Element(ElementNode),
}

/// A node without children. `tag == None` means raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Option<Attributes>,
}

/// A node holding ordered children and no value of its own.
///
/// `attributes` is part of the model but is not emitted by the serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Option<Attributes>,
}

impl HtmlNode {
    /// Raw text with no surrounding markup.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        })
    }

    /// A tagged leaf such as `<b>value</b>`.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: None,
        })
    }

    /// A tagged leaf carrying attributes, e.g. `<a href="...">`.
    pub fn leaf_with_attributes(
        tag: &str,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Some(attributes),
        })
    }

    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(ElementNode {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: None,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Element(element) => element.tag.as_deref(),
        }
    }

    /// Children of an element; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Element(ElementNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }
}
