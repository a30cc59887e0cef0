//! Behavioral tests for the full parse pipeline.
//!
//! Scenario tables pin down the tie-break rules; `properties` checks the
//! quantified guarantees over generated input.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Block, ThinkStatus, invariants, parse_blocks, parse_segments};

use crate::parsing::ThinkStatus::{Closed, Open};

fn text(s: &str) -> Block {
    Block::text(s)
}

fn think(s: &str, status: ThinkStatus) -> Block {
    Block::think(s, status)
}

fn parse_checked(input: &str) -> Vec<Block> {
    invariants::check(input, &parse_segments(input));
    let blocks = parse_blocks(input);
    invariants::check_blocks(&blocks);
    blocks
}

#[rstest]
#[case::plain_text("hello", vec![text("hello")])]
#[case::think_then_answer("<think>plan</think>answer", vec![think("plan", Closed), text("answer")])]
#[case::unterminated("<think>still going", vec![think("still going", Open)])]
#[case::same_kind_nesting(
    "<think>A<think>B</think>C</think>D",
    vec![think("A<think>B</think>C", Closed), text("D")]
)]
#[case::orphan_close("</think>orphan", vec![text("</think>orphan")])]
#[case::cross_kind_inert(
    "<think>foo<details>bar</details>baz</think>",
    vec![think("foo<details>bar</details>baz", Closed)]
)]
#[case::empty_think("<think></think>", vec![think("", Closed)])]
#[case::attributes_ignored("<think data-x=\"1\">A</think>", vec![think("A", Closed)])]
fn reference_scenarios(#[case] input: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_checked(input), expected);
}

#[rstest]
#[case::text_around("before<think>x</think>after", vec![text("before"), think("x", Closed), text("after")])]
#[case::details_keyword("<details>why</details>so", vec![think("why", Closed), text("so")])]
#[case::details_with_attributes(
    "<details type=\"reasoning\" done=\"true\">r</details>",
    vec![think("r", Closed)]
)]
#[case::mixed_case_close("<Think>x</THINK>y", vec![think("x", Closed), text("y")])]
#[case::two_blocks(
    "<think>a</think>mid<think>b</think>",
    vec![think("a", Closed), text("mid"), think("b", Closed)]
)]
#[case::back_to_back_blocks(
    "<think>a</think><details>b</details>",
    vec![think("a", Closed), think("b", Closed)]
)]
#[case::closed_then_open(
    "<think>a</think>b<details>c",
    vec![think("a", Closed), text("b"), think("c", Open)]
)]
#[case::bare_opener("<think>", vec![think("", Open)])]
#[case::text_then_bare_opener("answer<think>", vec![text("answer"), think("", Open)])]
#[case::orphan_between_text(
    "a</details>b<think>c</think>",
    vec![text("a</details>b"), think("c", Closed)]
)]
#[case::orphan_after_block(
    "<think>a</think>b</think>c",
    vec![think("a", Closed), text("b</think>c")]
)]
#[case::wrong_kind_close_does_not_close(
    "<think>a</details>b",
    vec![think("a</details>b", Open)]
)]
#[case::inner_other_kind_unbalanced(
    "<details>x<think>y</details>z",
    vec![think("x<think>y", Closed), text("z")]
)]
#[case::deep_nesting_partially_closed(
    "<think>1<think>2<think>3</think></think>",
    vec![think("1<think>2<think>3</think></think>", Open)]
)]
#[case::partial_tag_at_end("text <thi", vec![text("text <thi")])]
#[case::partial_close_at_end("<think>abc</thi", vec![think("abc</thi", Open)])]
#[case::not_a_tag_name("<thinking>no</thinking>", vec![text("<thinking>no</thinking>")])]
#[case::whitespace_content("<think>\n\n</think>\n", vec![think("\n\n", Closed), text("\n")])]
#[case::multibyte("思<think>考え</think>答", vec![text("思"), think("考え", Closed), text("答")])]
fn tie_break_scenarios(#[case] input: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_checked(input), expected);
}

#[test]
fn empty_input_yields_no_blocks() {
    assert!(parse_checked("").is_empty());
}

#[rstest]
#[case("<think>x</think>y")]
#[case("<THINK>x</THINK>y")]
#[case("<Think>x</Think>y")]
fn tag_case_does_not_change_output(#[case] input: &str) {
    assert_eq!(
        parse_checked(input),
        vec![think("x", Closed), text("y")]
    );
}

/// Tags of the other keyword inside a block are kept as content on purpose:
/// the two keywords are alternate spellings of one block type, not two
/// independently nestable types, so neither can close or nest in the other.
#[test]
fn cross_kind_tags_are_documented_as_inert() {
    let blocks = parse_checked("<details>a</think>b<think>c</details>d");
    assert_eq!(
        blocks,
        vec![think("a</think>b<think>c", Closed), text("d")]
    );
}

#[test]
fn malformed_input_degrades_to_single_text_block() {
    let input = "</think></details><think a=\"x\"</think";
    assert_eq!(parse_checked(input), vec![text(input)]);
}

#[test]
fn only_boundary_markup_is_removed() {
    let input = "x<think a=1>y<details>z</think>w";
    let stripped: String = parse_checked(input)
        .iter()
        .map(Block::content)
        .collect();
    assert_eq!(stripped, "xy<details>zw");
}
