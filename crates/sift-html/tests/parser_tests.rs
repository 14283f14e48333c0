//! Integration tests for the HTML lexer.

use std::time::{Duration, Instant};

use sift_common::warning::has_warned;
use sift_html::{HtmlParser, IssueKind, LinkId, ParsedPage, parse_html};

/// Helper to parse a string and return the page
fn parse(html: &str) -> ParsedPage {
    parse_html(html)
}

/// Helper to get the URLs of every link, in order
fn urls(page: &ParsedPage) -> Vec<&str> {
    page.links.iter().map(|link| link.url.as_str()).collect()
}

#[test]
fn test_title_words() {
    let page = parse("<title>Hello World</title>");
    assert_eq!(page.title_words, ["Hello", "World"]);
    assert!(page.words.is_empty());
}

#[test]
fn test_title_then_body() {
    let page = parse("<html><title>My Page</title><body><p>Some text</p></body></html>");
    assert_eq!(page.title_words, ["My", "Page"]);
    assert_eq!(page.words, ["Some", "text"]);
}

#[test]
fn test_anchor_with_href() {
    let page = parse("<a href=\"http://x.com\">click here</a>");
    assert_eq!(urls(&page), ["http://x.com"]);
    assert_eq!(page.links[0].anchor_text, ["click", "here"]);
    assert!(page.words.is_empty());
}

#[test]
fn test_anchor_without_href_is_body_text() {
    let page = parse("<a>no href</a>");
    assert!(page.links.is_empty());
    assert_eq!(page.words, ["no", "href"]);
}

#[test]
fn test_anchor_with_empty_href() {
    let page = parse("<a href=\"\">empty</a>");
    assert!(page.links.is_empty());
    assert_eq!(page.words, ["empty"]);
}

#[test]
fn test_attribute_names_are_case_sensitive() {
    let page = parse("<a HREF=\"http://x.com\">t</a>");
    assert!(page.links.is_empty());
    assert_eq!(page.words, ["t"]);
}

#[test]
fn test_single_quoted_href_is_not_recognized() {
    let page = parse("<a href='http://x.com'>t</a>");
    assert!(page.links.is_empty());
}

#[test]
fn test_href_after_other_attributes() {
    let page = parse("<a class=\"nav\" href=\"/home\">Home</a>");
    assert_eq!(urls(&page), ["/home"]);
    assert_eq!(page.links[0].anchor_text, ["Home"]);
}

#[test]
fn test_script_content_is_skipped() {
    let page = parse("<script>var x = \"<b>\";</script>after");
    assert_eq!(page.words, ["after"]);
    assert!(page.links.is_empty());
    assert!(page.issues.is_empty());
}

#[test]
fn test_style_and_svg_are_skipped() {
    let page = parse("<p>a</p><style>p { color: red }</style><svg><text>b</text></svg><p>c</p>");
    assert_eq!(page.words, ["a", "c"]);
}

#[test]
fn test_section_close_tag_is_case_insensitive() {
    let page = parse("<SCRIPT>hidden</Script>shown");
    assert_eq!(page.words, ["shown"]);
}

#[test]
fn test_longer_close_tag_does_not_end_section() {
    let page = parse("<script>a</scripts>b</script>c");
    assert_eq!(page.words, ["c"]);
}

#[test]
fn test_unterminated_script_is_recorded() {
    let html = "<p>a</p><script>var x";
    let page = parse(html);
    assert_eq!(page.words, ["a"]);
    assert_eq!(page.issues.len(), 1);
    let issue = &page.issues[0];
    assert_eq!(issue.kind, IssueKind::UnterminatedSection);
    assert_eq!(issue.offset, 8);
    assert_eq!(issue.discarded, "var x".len());
    assert!(has_warned(
        "HTML Lexer",
        "unterminated <script> section discards the rest of the document"
    ));
}

#[test]
fn test_unterminated_comment_is_recorded() {
    let page = parse("<p>a</p><!-- never closed <a href=\"u\">x</a>");
    assert_eq!(page.words, ["a"]);
    assert!(page.links.is_empty());
    assert_eq!(page.issues.len(), 1);
    assert_eq!(page.issues[0].kind, IssueKind::UnterminatedComment);
    assert_eq!(page.issues[0].offset, 8);
}

#[test]
fn test_base_first_wins() {
    let page = parse("<base href=\"http://a.com\"><base href=\"http://b.com\">");
    assert_eq!(page.base, "http://a.com");
}

#[test]
fn test_base_with_empty_href_does_not_count() {
    let page = parse("<base target=\"_top\"><base href=\"http://b.com\">");
    assert_eq!(page.base, "http://b.com");
}

#[test]
fn test_embed_creates_link_without_anchor_text() {
    let page = parse("<embed src=\"http://img\">");
    assert_eq!(urls(&page), ["http://img"]);
    assert!(page.links[0].anchor_text.is_empty());
}

#[test]
fn test_embed_without_src() {
    let page = parse("<embed type=\"video/mp4\">");
    assert!(page.links.is_empty());
}

#[test]
fn test_embed_inside_anchor_takes_no_text() {
    let page = parse("<a href=\"u\">x<embed src=\"i\">y</a>");
    assert_eq!(urls(&page), ["u", "i"]);
    assert_eq!(page.links[0].anchor_text, ["x"]);
    assert!(page.links[1].anchor_text.is_empty());
    // The innermost anchor is no longer the newest link.
    assert_eq!(page.words, ["y"]);
}

#[test]
fn test_comment_hides_links() {
    let page = parse("<!-- <a href=\"http://z.com\">ignored</a> -->after");
    assert!(page.links.is_empty());
    assert_eq!(page.words, ["after"]);
}

#[test]
fn test_comment_between_words() {
    let page = parse("<p>one</p><!-- two -->three");
    assert_eq!(page.words, ["one", "three"]);
}

#[test]
fn test_comment_remnant_words_are_dropped() {
    let page = parse("<p>a b--> c</p>");
    assert_eq!(page.words, ["a", "c"]);
}

#[test]
fn test_leading_text_is_discarded() {
    let page = parse("hello <p>world");
    assert_eq!(page.words, ["world"]);
}

#[test]
fn test_no_tags_at_all() {
    let page = parse("just some text");
    assert_eq!(page, ParsedPage::default());
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), ParsedPage::default());
}

#[test]
fn test_lone_less_than_is_text() {
    let page = parse("<p>a < b</p>");
    assert_eq!(page.words, ["a", "<", "b"]);
}

#[test]
fn test_trailing_less_than_is_text() {
    let page = parse("<p>a <");
    assert_eq!(page.words, ["a", "<"]);
}

#[test]
fn test_unknown_tags_are_text() {
    let page = parse("<p>x <foo> y</p>");
    assert_eq!(page.words, ["x", "<foo>", "y"]);
}

#[test]
fn test_unknown_tag_at_run_start_is_text() {
    let page = parse("<p>a</p><foo>bar</foo><p>c");
    assert_eq!(page.words, ["a", "<foo>bar</foo>", "c"]);
}

#[test]
fn test_tag_names_are_case_insensitive() {
    let page = parse("<TITLE>Big</TiTlE><A href=\"u\">link</A>");
    assert_eq!(page.title_words, ["Big"]);
    assert_eq!(page.links[0].anchor_text, ["link"]);
}

#[test]
fn test_tags_split_words() {
    let page = parse("<p>foo<b>bar</b>baz</p>");
    assert_eq!(page.words, ["foo", "bar", "baz"]);
}

#[test]
fn test_whitespace_variants_split_words() {
    let page = parse("<p>a\tb\nc\rd\x0Be\x0Cf</p>");
    assert_eq!(page.words, ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn test_non_ascii_words_pass_through() {
    let page = parse("<p>caf\u{e9} na\u{ef}ve \u{65e5}\u{672c}</p>");
    assert_eq!(page.words, ["caf\u{e9}", "na\u{ef}ve", "\u{65e5}\u{672c}"]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let page = parse_html(b"<p>a\xFFb</p>");
    assert_eq!(page.words, ["a\u{FFFD}b"]);
}

#[test]
fn test_nested_anchors() {
    let page = parse("<a href=\"u1\">one<a href=\"u2\">two</a>three</a>four");
    assert_eq!(urls(&page), ["u1", "u2"]);
    assert_eq!(page.links[0].anchor_text, ["one"]);
    assert_eq!(page.links[1].anchor_text, ["two"]);
    // After the inner close, the open anchor is not the newest link.
    assert_eq!(page.words, ["three", "four"]);
}

#[test]
fn test_closing_anchor_with_nothing_open() {
    let page = parse("</a>text<p>more");
    assert!(page.links.is_empty());
    assert_eq!(page.words, ["text", "more"]);
}

#[test]
fn test_closing_anchor_with_nothing_open_mid_document() {
    let page = parse("<p>a</p></a>b");
    assert_eq!(page.words, ["a", "b"]);
}

#[test]
fn test_tag_without_closing_bracket() {
    let page = parse("<p>hello<b");
    assert_eq!(page.words, ["hello"]);
}

#[test]
fn test_anchor_without_closing_bracket() {
    let page = parse("<p>x</p><a href=\"http://end\"");
    assert_eq!(urls(&page), ["http://end"]);
}

#[test]
fn test_link_ids_index_links() {
    let page = parse("<a href=\"a\">1</a><a href=\"b\">2</a>");
    assert_eq!(page.link(LinkId(1)).map(|l| l.url.as_str()), Some("b"));
    assert!(page.link(LinkId(2)).is_none());
}

#[test]
fn test_resolved_links() {
    let page = parse(
        "<base href=\"http://a.com/dir/index.html\">\
         <a href=\"page.html\">x</a><a href=\"/top\">y</a><a href=\"http://b.com/\">z</a>",
    );
    assert_eq!(
        page.resolved_links(),
        ["http://a.com/dir/page.html", "http://a.com/top", "http://b.com/"]
    );
}

#[test]
fn test_anchor_words() {
    let page = parse("<a href=\"a\">one two</a><p>mid</p><a href=\"b\">three</a>");
    assert_eq!(page.anchor_words().collect::<Vec<_>>(), ["one", "two", "three"]);
}

#[test]
fn test_run_twice_is_a_no_op() {
    let html = b"<title>T</title><a href=\"u\">x</a>";
    let mut parser = HtmlParser::new(html);
    parser.run();
    let first = parser.page().clone();
    parser.run();
    assert_eq!(parser.page(), &first);
}

#[test]
fn test_independent_parses_are_identical() {
    let html = "<title>T <a href=\"u\">x</a></title><p>body</p><script>never closed";
    // The first parse records the unterminated-section warning; the second
    // runs with it already recorded and must not differ.
    let first = parse(html);
    assert_eq!(first.issues.len(), 1);
    assert!(has_warned(
        "HTML Lexer",
        "unterminated <script> section discards the rest of the document"
    ));
    let second = parse(html);
    assert_eq!(first, second);
}

#[test]
fn test_anchor_inside_title() {
    let page = parse("<title><a href=\"u\">x</a></title>");
    assert_eq!(page.title_words, ["x"]);
    assert_eq!(page.links[0].anchor_text, ["x"]);
    assert!(page.words.is_empty());
}

#[test]
fn test_title_around_anchor() {
    let page = parse("<title>Home <a href=\"u\">Page</a> end</title>");
    assert_eq!(page.title_words, ["Home", "Page", "end"]);
    assert_eq!(page.links[0].anchor_text, ["Page"]);
}

#[test]
fn test_unknown_closing_tag_at_run_start_is_text() {
    // The whole `</foo>` stays in the text, not just the part after `/`.
    let page = parse("<p>a</p></foo>b");
    assert_eq!(page.words, ["a", "</foo>b"]);
}

#[test]
fn test_many_bare_attributes_before_href() {
    let n = 200_000;
    let html = format!("<a {}href=\"u\">t</a>", "x ".repeat(n));
    let start = Instant::now();
    let page = parse(&html);
    let elapsed = start.elapsed();
    assert_eq!(urls(&page), ["u"]);
    assert_eq!(page.links[0].anchor_text, ["t"]);
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[test]
fn test_page_serializes_to_json() {
    let page = parse("<title>T</title><a href=\"u\">x</a><script>");
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["title_words"][0], "T");
    assert_eq!(json["links"][0]["url"], "u");
    assert_eq!(json["links"][0]["anchor_text"][0], "x");
    assert_eq!(json["issues"][0]["kind"], "unterminated_section");
}
