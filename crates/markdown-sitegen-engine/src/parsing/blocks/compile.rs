use crate::{
    error::Result,
    html::HtmlNode,
    parsing::inline::{spans_to_nodes, tokenize},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{BlockKind, BlockNode},
};

/// Compiles one classified block into its HTML subtree.
///
/// # Errors
/// Inline tokenization errors propagate unchanged; there is no per-block
/// recovery.
pub fn compile(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Heading { level } => Ok(block_to_heading(block, level)),
        BlockKind::Code => Ok(block_to_code(block)),
        BlockKind::Quote => block_to_quote(block),
        BlockKind::UnorderedList => block_to_unordered_list(block),
        BlockKind::OrderedList => block_to_ordered_list(block),
        BlockKind::Paragraph => block_to_paragraph(block),
    }
}

pub fn compile_node(node: &BlockNode<'_>) -> Result<HtmlNode> {
    compile(node.text, node.kind)
}

/// `<hN>` with the raw heading text. Headings are not inline-parsed.
pub fn block_to_heading(block: &str, level: u8) -> HtmlNode {
    HtmlNode::element(&format!("h{level}"), vec![HtmlNode::text(Heading::text(block))])
}

/// `<pre><code>` with the untouched body.
pub fn block_to_code(block: &str) -> HtmlNode {
    HtmlNode::element("pre", vec![HtmlNode::leaf("code", CodeFence::body(block))])
}

pub fn block_to_quote(block: &str) -> Result<HtmlNode> {
    let spans = tokenize(&BlockQuote::content(block))?;
    Ok(HtmlNode::element("blockquote", spans_to_nodes(&spans)))
}

pub fn block_to_unordered_list(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::element(
        "ul",
        list_items(block, |_, line| UnorderedList::item_text(line))?,
    ))
}

pub fn block_to_ordered_list(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::element(
        "ol",
        list_items(block, OrderedList::item_text)?,
    ))
}

pub fn block_to_paragraph(block: &str) -> Result<HtmlNode> {
    let spans = tokenize(block)?;
    Ok(HtmlNode::element(Paragraph::TAG, spans_to_nodes(&spans)))
}

/// One `<li>` per line, each line tokenized on its own.
fn list_items(block: &str, item_text: fn(usize, &str) -> &str) -> Result<Vec<HtmlNode>> {
    block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let spans = tokenize(item_text(i, line))?;
            Ok(HtmlNode::element("li", spans_to_nodes(&spans)))
        })
        .collect()
}
