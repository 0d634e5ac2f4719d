#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]

use bbmark_core::inline;

#[test]
fn test_url_basic() {
  assert_eq!(inline::url("[Data](A)"), r#"[URL="A"]Data[/URL]"#);
}

#[test]
fn test_url_inside_sentence() {
  assert_eq!(
    inline::url("See [the docs](http://example.com) for more"),
    r#"See [URL="http://example.com"]the docs[/URL] for more"#
  );
}

#[test]
fn test_url_leaves_image_syntax_alone() {
  // `![alt](target)` belongs to the image pass, whatever the chain order.
  assert_eq!(
    inline::url("![Alt](http://a.com/i.png)"),
    "![Alt](http://a.com/i.png)"
  );
}

#[test]
fn test_url_multiple_links_on_one_line() {
  assert_eq!(
    inline::url("[a](1) and [b](2)"),
    r#"[URL="1"]a[/URL] and [URL="2"]b[/URL]"#
  );
}

#[test]
fn test_image_basic() {
  assert_eq!(
    inline::image("![Alt](http://a.com/i.png)"),
    r#"[IMG alt="Alt"]http://a.com/i.png[/IMG]"#
  );
}

#[test]
fn test_image_ignores_plain_link() {
  assert_eq!(inline::image("[Data](A)"), "[Data](A)");
}

#[test]
fn test_strong_basic() {
  assert_eq!(inline::strong("**Strong!**"), "[B]Strong![/B]");
}

#[test]
fn test_strong_ignores_single_asterisks() {
  assert_eq!(inline::strong("*Italic*"), "*Italic*");
}

#[test]
fn test_strong_ignores_uneven_runs() {
  assert_eq!(inline::strong("**text*"), "**text*");
  assert_eq!(inline::strong("***text***"), "***text***");
}

#[test]
fn test_italic_basic() {
  assert_eq!(inline::italic("*Italic*"), "[I]Italic[/I]");
}

#[test]
fn test_italic_ignores_double_asterisks() {
  assert_eq!(inline::italic("**Strong!**"), "**Strong!**");
}

#[test]
fn test_underscore_single_and_double() {
  assert_eq!(inline::underscore("_mark_"), "[U]mark[/U]");
  assert_eq!(inline::underscore("__mark__"), "[U]mark[/U]");
}

#[test]
fn test_underscore_ignores_uneven_runs() {
  assert_eq!(inline::underscore("_Underscore me__"), "_Underscore me__");
}

#[test]
fn test_quote_with_author() {
  assert_eq!(
    inline::quote("Author> Hello there"),
    "[QUOTE=\"Author\"]\nHello there\n[/QUOTE]"
  );
}

#[test]
fn test_quote_without_author() {
  assert_eq!(inline::quote("> Hello there"), "[QUOTE]\nHello there\n[/QUOTE]");
}

#[test]
fn test_quote_author_whitespace_trimmed() {
  assert_eq!(
    inline::quote("  Author  > Hello"),
    "[QUOTE=\"Author\"]\nHello\n[/QUOTE]"
  );
}

#[test]
fn test_quote_ignores_plain_line() {
  assert_eq!(inline::quote("no marker here"), "no marker here");
}

#[test]
fn test_quote_text_may_contain_bracketed_content() {
  // Brackets in the quoted text are fine; passes that ran earlier in
  // the chain leave tags there.
  assert_eq!(
    inline::quote("> see [docs](http://x)"),
    "[QUOTE]\nsee [docs](http://x)\n[/QUOTE]"
  );
  assert_eq!(
    inline::quote(r#"> see [URL="http://x"]docs[/URL]"#),
    "[QUOTE]\nsee [URL=\"http://x\"]docs[/URL]\n[/QUOTE]"
  );
}

#[test]
fn test_quote_ignores_line_opening_with_a_tag() {
  // An author may not contain brackets, so a line that opens with a
  // BBCode tag is never re-wrapped into a quote.
  let line = r#"[URL="A"]x > y[/URL]"#;
  assert_eq!(inline::quote(line), line);
}
