#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]

use bbmark_core::block;

#[test]
fn test_unordered_list_single_item() {
  let lines = vec!["- Item"];
  let found = block::unordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST]\n[*]Item\n[/LIST]");
  assert_eq!(found.consumed_through, 0);
}

#[test]
fn test_unordered_list_collects_contiguous_run() {
  let lines = vec!["- One", "- Two", "- Three", "", "- Four"];
  let found = block::unordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST]\n[*]One\n[*]Two\n[*]Three\n[/LIST]");
  assert_eq!(found.consumed_through, 2);
}

#[test]
fn test_unordered_list_preserves_item_order() {
  let lines = vec!["- a", "- b", "- c"];
  let found = block::unordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST]\n[*]a\n[*]b\n[*]c\n[/LIST]");
}

#[test]
fn test_unordered_list_strips_marker_once() {
  // Only the leading marker is a marker; the item text keeps its own.
  let lines = vec!["- - nested looking"];
  let found = block::unordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST]\n[*]- nested looking\n[/LIST]");
}

#[test]
fn test_unordered_list_rejects_non_matching_start() {
  let lines = vec!["plain text", "- Item"];
  assert!(block::unordered_list(&lines, 0).is_none());
}

#[test]
fn test_ordered_list_run() {
  let lines = vec!["1. Item 1", "2. Item 2"];
  let found = block::ordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST=1]\n[*]Item 1\n[*]Item 2\n[/LIST]");
  assert_eq!(found.consumed_through, 1);
}

#[test]
fn test_ordered_list_accepts_any_numbering() {
  // The rendered block does not renumber; markers are only stripped.
  let lines = vec!["7. first", "3. second"];
  let found = block::ordered_list(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[LIST=1]\n[*]first\n[*]second\n[/LIST]");
}

#[test]
fn test_ordered_list_requires_dot_and_space() {
  let lines = vec!["1.missing space"];
  assert!(block::ordered_list(&lines, 0).is_none());
}

#[test]
fn test_indented_code_single_line() {
  let lines = vec!["    code line"];
  let found = block::indented_code(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[CODE]\ncode line\n[/CODE]");
}

#[test]
fn test_indented_code_multi_line_run() {
  let lines = vec!["    let x = 1;", "    let y = 2;", "done"];
  let found = block::indented_code(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[CODE]\nlet x = 1;\nlet y = 2;\n[/CODE]");
  assert_eq!(found.consumed_through, 1);
}

#[test]
fn test_indented_code_requires_four_spaces() {
  let lines = vec!["   three spaces"];
  assert!(block::indented_code(&lines, 0).is_none());
}

#[test]
fn test_quote_block_with_author() {
  let lines = vec!["Author> first", "Author> second"];
  let found = block::quote_block(&lines, 0).expect("should match");
  assert_eq!(
    found.rendered,
    "[QUOTE=\"Author\"]\nfirst\nsecond\n[/QUOTE]"
  );
  assert_eq!(found.consumed_through, 1);
}

#[test]
fn test_quote_block_without_author() {
  let lines = vec!["> just a quote"];
  let found = block::quote_block(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[QUOTE]\njust a quote\n[/QUOTE]");
}

#[test]
fn test_quote_block_author_comes_from_first_line() {
  let lines = vec!["Ann> one", "Bob> two"];
  let found = block::quote_block(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[QUOTE=\"Ann\"]\none\ntwo\n[/QUOTE]");
}

#[test]
fn test_quote_block_text_may_contain_brackets() {
  let lines = vec!["> see [docs](http://x)"];
  let found = block::quote_block(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[QUOTE]\nsee [docs](http://x)\n[/QUOTE]");
}

#[test]
fn test_quote_block_stops_at_blank_line() {
  let lines = vec!["> one", "", "> two"];
  let found = block::quote_block(&lines, 0).expect("should match");
  assert_eq!(found.rendered, "[QUOTE]\none\n[/QUOTE]");
  assert_eq!(found.consumed_through, 0);
}
