use regex::Regex;

use crate::error::{MarkdownError, Result};

use super::{
    kinds::{Emphasis, Image, Link},
    types::{InlineSpan, SpanKind},
};

/// Tokenizes inline Markdown into a flat sequence of [`InlineSpan`]s.
///
/// # Passes
/// Bold, italic, code, image, link, in that order. Each pass only looks at
/// spans that are still [`SpanKind::Text`]; everything an earlier pass
/// produced is passed through untouched. So `**[a](u)**` is bold text with
/// literal link markup inside, while `[**a**](u)` has its brackets split
/// around a bold span and is never recognized as a link.
///
/// # Errors
/// [`MarkdownError::MalformedInlineSyntax`] if any delimiter is unbalanced.
/// No partial result is returned.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>> {
    let mut spans = vec![InlineSpan::text(text)];
    for delimiter in Emphasis::PASSES {
        spans = split_nodes_delimiter(spans, delimiter)?;
    }
    spans = split_nodes_image(spans);
    spans = split_nodes_link(spans);
    Ok(spans)
}

/// Splits every text span on `delimiter`, alternating text and styled spans.
///
/// A balanced span yields an odd number of fragments; anything else is
/// malformed. Empty fragments are dropped, so `**bold**` on its own produces
/// a single bold span.
pub fn split_nodes_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
) -> Result<Vec<InlineSpan>> {
    let styled = Emphasis::kind(delimiter)
        .ok_or_else(|| MarkdownError::UnknownDelimiter(delimiter.to_string()))?;

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let fragments: Vec<&str> = span.text.split(delimiter).collect();
        if fragments.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInlineSyntax {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, fragment) in fragments.into_iter().enumerate() {
            if fragment.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Text
            } else {
                styled.clone()
            };
            out.push(InlineSpan::new(fragment, kind));
        }
    }
    Ok(out)
}

/// Returns `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns `(text, url)` for every `[text](url)` in `text` that is not part
/// of an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::regex()
        .captures_iter(text)
        .filter(|caps| !Link::is_image_form(&caps[0]))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

pub fn split_nodes_image(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_nodes_markup(spans, Image::regex(), |_| true, |alt, url| {
        InlineSpan::image(alt, url)
    })
}

pub fn split_nodes_link(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_nodes_markup(
        spans,
        Link::regex(),
        |m| !Link::is_image_form(m),
        |text, url| InlineSpan::link(text, url),
    )
}

/// Walks each text span left to right, cutting out every accepted match
/// and emitting text for the non-empty content around it.
fn split_nodes_markup(
    spans: Vec<InlineSpan>,
    re: &Regex,
    accept: impl Fn(&str) -> bool,
    make: impl Fn(String, String) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let mut rest_start = 0;
        for caps in re.captures_iter(&span.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if !accept(whole.as_str()) {
                continue;
            }
            push_text(&mut out, &span.text[rest_start..whole.start()]);
            out.push(make(caps[1].to_string(), caps[2].to_string()));
            rest_start = whole.end();
        }
        push_text(&mut out, &span.text[rest_start..]);
    }
    out
}

fn push_text(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn bold(s: &str) -> InlineSpan {
        InlineSpan::new(s, SpanKind::Bold)
    }

    fn italic(s: &str) -> InlineSpan {
        InlineSpan::new(s, SpanKind::Italic)
    }

    fn code(s: &str) -> InlineSpan {
        InlineSpan::new(s, SpanKind::Code)
    }

    fn text(s: &str) -> InlineSpan {
        InlineSpan::text(s)
    }

    #[rstest]
    #[case("Here is some text")]
    #[case("Here is some more text.")]
    #[case("")]
    fn nothing_to_split(#[case] input: &str) {
        for delimiter in Emphasis::PASSES {
            let spans = split_nodes_delimiter(vec![text(input)], delimiter).unwrap();
            let expected = if input.is_empty() { vec![] } else { vec![text(input)] };
            assert_eq!(spans, expected);
        }
    }

    #[rstest]
    #[case("**", bold("bold"), "Here is some **bold** text")]
    #[case("*", italic("italic"), "Here is some *italic* text")]
    #[case("`", code("code"), "Here is some `code` text")]
    fn split_single_delimiter(
        #[case] delimiter: &str,
        #[case] styled: InlineSpan,
        #[case] input: &str,
    ) {
        let spans = split_nodes_delimiter(vec![text(input)], delimiter).unwrap();
        assert_eq!(spans, vec![text("Here is some "), styled, text(" text")]);
    }

    #[test]
    fn split_appends_in_order() {
        let spans = split_nodes_delimiter(
            vec![text("Here is some text"), text("Here is some **bold** text")],
            "**",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                text("Here is some text"),
                text("Here is some "),
                bold("bold"),
                text(" text"),
            ]
        );
    }

    #[test]
    fn split_passes_styled_spans_through() {
        let spans = split_nodes_delimiter(
            vec![bold("Here is **not** split"), text("Here is some **bold** text")],
            "**",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                bold("Here is **not** split"),
                text("Here is some "),
                bold("bold"),
                text(" text"),
            ]
        );
    }

    #[test]
    fn unbalanced_delimiter_is_malformed() {
        let err = split_nodes_delimiter(vec![text("a **b")], "**").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::MalformedInlineSyntax {
                delimiter: "**".into(),
                text: "a **b".into(),
            }
        );
    }

    #[test]
    fn unknown_delimiter_is_rejected() {
        let err = split_nodes_delimiter(vec![text("~~x~~")], "~~").unwrap_err();
        assert_eq!(err, MarkdownError::UnknownDelimiter("~~".into()));
    }

    #[test]
    fn extract_images() {
        let text = "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and \
                    ![another](https://i.imgur.com/dfsdkjfd.png)";
        assert_eq!(
            extract_markdown_images(text),
            vec![
                ("image".to_string(), "https://i.imgur.com/zjjcJKZ.png".to_string()),
                ("another".to_string(), "https://i.imgur.com/dfsdkjfd.png".to_string()),
            ]
        );
    }

    #[test]
    fn extract_links_skips_images() {
        let text = "[link](https://boot.dev) and ![image](/a.png) and [another](/b)";
        assert_eq!(
            extract_markdown_links(text),
            vec![
                ("link".to_string(), "https://boot.dev".to_string()),
                ("another".to_string(), "/b".to_string()),
            ]
        );
    }

    #[test]
    fn extract_adjacent_links() {
        assert_eq!(
            extract_markdown_links("[a](/1)[b](/2)"),
            vec![
                ("a".to_string(), "/1".to_string()),
                ("b".to_string(), "/2".to_string()),
            ]
        );
    }

    #[test]
    fn split_images_interleaves_text() {
        let spans = split_nodes_image(vec![text(
            "This is text with an ![image](/i.png) and another ![second image](/j.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                text("This is text with an "),
                InlineSpan::image("image", "/i.png"),
                text(" and another "),
                InlineSpan::image("second image", "/j.png"),
            ]
        );
    }

    #[test]
    fn split_links_leaves_image_markup_alone() {
        let spans = split_nodes_link(vec![text("![not](/a.png) but [yes](/b)")]);
        assert_eq!(
            spans,
            vec![text("![not](/a.png) but "), InlineSpan::link("yes", "/b")]
        );
    }

    #[test]
    fn repeated_markup_splits_each_occurrence() {
        let spans = split_nodes_link(vec![text("[x](/y) and [x](/y)")]);
        assert_eq!(
            spans,
            vec![
                InlineSpan::link("x", "/y"),
                text(" and "),
                InlineSpan::link("x", "/y"),
            ]
        );
    }

    #[test]
    fn tokenize_plain_text_is_single_span() {
        assert_eq!(
            tokenize("just some words").unwrap(),
            vec![text("just some words")]
        );
    }

    #[test]
    fn tokenize_all_kinds() {
        let spans = tokenize(
            "This is **text** with an *italic* word and a `code block` and an \
             ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                text("This is "),
                bold("text"),
                text(" with an "),
                italic("italic"),
                text(" word and a "),
                code("code block"),
                text(" and an "),
                InlineSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                text(" and a "),
                InlineSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn tokenize_bold_at_start_has_no_leading_text() {
        assert_eq!(
            tokenize("**bold** then").unwrap(),
            vec![bold("bold"), text(" then")]
        );
    }

    #[test]
    fn tokenize_link_inside_bold_stays_bold() {
        assert_eq!(tokenize("**[a](/u)**").unwrap(), vec![bold("[a](/u)")]);
    }

    #[test]
    fn tokenize_bold_inside_link_breaks_the_link() {
        assert_eq!(
            tokenize("[**a**](/u)").unwrap(),
            vec![text("["), bold("a"), text("](/u)")]
        );
    }

    #[test]
    fn tokenize_italic_inside_code_strands_the_backticks() {
        // The italic pass runs first and leaves a lone backtick on each side.
        assert!(matches!(
            tokenize("`*x*`"),
            Err(MarkdownError::MalformedInlineSyntax { ref delimiter, .. }) if delimiter == "`"
        ));
    }

    #[rstest]
    #[case("a ` b")]
    #[case("`a` `b")]
    #[case("`")]
    fn tokenize_odd_backticks_fails(#[case] input: &str) {
        assert!(matches!(
            tokenize(input),
            Err(MarkdownError::MalformedInlineSyntax { ref delimiter, .. }) if delimiter == "`"
        ));
    }

    #[test]
    fn tokenize_unbalanced_italic_fails() {
        assert!(matches!(
            tokenize("2 * 3 = 6"),
            Err(MarkdownError::MalformedInlineSyntax { .. })
        ));
    }

    #[test]
    fn tokenize_empty_alt_image() {
        assert_eq!(tokenize("![](/a.png)").unwrap(), vec![InlineSpan::image("", "/a.png")]);
    }
}
