//! Integration tests for the parsing module.
//!
//! Whole documents go through the full pipeline; trees are checked against
//! invariants and compared as inline `insta` snapshots of an indented outline.


use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::error::MarkdownError;
use crate::parsing::{
    blocks::{BlockKind, classify},
    extract_title, markdown_to_html_node, parse_document, render_markdown_document,
};

fn compile_checked(md: &str) -> String {
    let root = markdown_to_html_node(md).unwrap();
    invariants::check(&root);
    normalize::outline(&root)
}

#[test]
fn heading_and_inline_paragraph() {
    assert_eq!(
        render_markdown_document("# Heading\n\nSome **bold** and *italic* text.").unwrap(),
        "<div><h1>Heading</h1><p>Some <b>bold</b> and <i>italic</i> text.</p></div>"
    );
}

#[test]
fn lone_image_paragraph() {
    let root = markdown_to_html_node("![alt](http://x/y.png)").unwrap();
    invariants::check(&root);
    assert_snapshot!(normalize::outline(&root), @r#"
    div
      p
        img "" src="http://x/y.png" alt="alt"
    "#);
    assert_eq!(
        root.to_html().unwrap(),
        r#"<div><p><img src="http://x/y.png" alt="alt"></img></p></div>"#
    );
}

#[test]
fn two_blocks() {
    assert_eq!(
        render_markdown_document("# This is the heading\n\nAnd this is some text").unwrap(),
        "<div><h1>This is the heading</h1><p>And this is some text</p></div>"
    );
}

#[test]
fn every_block_kind() {
    let md = "\
## Features

A paragraph with `code`, a [link](https://example.com) and an ![icon](/i.png).

> Quoted **wisdom**
> on two lines

- first
* second

1. one
2. two

```
let raw = *not* parsed;
```";

    assert_snapshot!(compile_checked(md), @r#"
    div
      h2
        "Features"
      p
        "A paragraph with "
        code "code"
        ", a "
        a "link" href="https://example.com"
        " and an "
        img "" src="/i.png" alt="icon"
        "."
      blockquote
        "Quoted "
        b "wisdom"
        "\non two lines"
      ul
        li
          "first"
        li
          "second"
      ol
        li
          "one"
        li
          "two"
      pre
        code "let raw = *not* parsed;"
    "#);
}

#[test]
fn blocks_keep_source_order() {
    let doc = parse_document("1. a\n2. b\n\n> q\n\ntext\n\n# Title");
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::OrderedList,
            BlockKind::Quote,
            BlockKind::Paragraph,
            BlockKind::Heading { level: 1 },
        ]
    );
}

#[test]
fn empty_document_is_empty_div() {
    assert_eq!(render_markdown_document("").unwrap(), "<div></div>");
    assert_eq!(render_markdown_document("\n\n\n").unwrap(), "<div></div>");
}

#[test]
fn malformed_block_aborts_document() {
    let err = render_markdown_document("# Fine\n\nthis `breaks\n\nnever reached").unwrap_err();
    assert!(matches!(err, MarkdownError::MalformedInlineSyntax { .. }));
}

#[test]
fn non_sequential_numbers_render_as_paragraph() {
    assert_eq!(
        render_markdown_document("1. a\n3. b").unwrap(),
        "<div><p>1. a\n3. b</p></div>"
    );
}

#[test]
fn ordered_item_without_spaced_marker_keeps_its_text() {
    assert_eq!(
        render_markdown_document("1.5 apples").unwrap(),
        "<div><ol><li>1.5 apples</li></ol></div>"
    );
    assert_eq!(
        render_markdown_document("1. one\n2.two").unwrap(),
        "<div><ol><li>one</li><li>2.two</li></ol></div>"
    );
}

#[test]
fn lone_fence_is_a_malformed_paragraph() {
    assert_eq!(classify("```"), BlockKind::Paragraph);
    assert!(matches!(
        render_markdown_document("# Title\n\n```"),
        Err(MarkdownError::MalformedInlineSyntax { ref delimiter, .. }) if delimiter == "`"
    ));
}

#[test]
fn text_is_not_escaped() {
    assert_eq!(
        render_markdown_document("a <em>tag</em> & more").unwrap(),
        "<div><p>a <em>tag</em> & more</p></div>"
    );
}

#[rstest]
#[case("# Title\n\nBody", "Title")]
#[case("Intro\n\n#  Spaced Title  \n\nBody", "Spaced Title")]
#[case("## Sub\n\n# Main", "Main")]
#[case("# First\n\n# Second", "First")]
fn extracts_title(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(extract_title(md).unwrap(), expected);
}

#[rstest]
#[case("Body only")]
#[case("## Only a subheading")]
#[case("#NoSpace")]
#[case(" # indented")]
#[case("")]
fn missing_title(#[case] md: &str) {
    assert_eq!(extract_title(md), Err(MarkdownError::NoTitleFound));
}
