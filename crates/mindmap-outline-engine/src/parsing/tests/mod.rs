//! Behaviour tests for the outline parser as a whole.
//!
//! Structural assertions use `pretty_assertions`; larger shapes are pinned
//! with inline `insta` snapshots of the rendered outline.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::{
    models::TreeNode,
    parsing::{ParseOptions, parse, parse_with, snapshot},
    render::render_outline,
};

fn leaf(text: &str) -> TreeNode {
    TreeNode::new(text)
}

fn node(text: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::with_children(text, children)
}

#[rstest]
#[case("")]
#[case("   \n\n")]
#[case("\n")]
#[case("\t \r\n \r\n")]
fn blank_input_gives_empty_forest(#[case] markdown: &str) {
    assert!(parse(markdown).is_empty());
}

#[test]
fn single_item() {
    assert_eq!(parse("- abc"), vec![leaf("abc")]);
}

#[test]
fn two_level_list() {
    assert_eq!(
        parse("- level 1\n  - level 2"),
        vec![node("level 1", vec![leaf("level 2")])]
    );
}

#[test]
fn two_level_list_with_tabs_and_surrounding_blank_lines() {
    assert_eq!(
        parse("\n\t\t- level 1\n\t\t\t- level 2\n\t\t"),
        vec![node("level 1", vec![leaf("level 2")])]
    );
}

#[test]
fn dedent_gives_sibling_of_first_root() {
    assert_eq!(
        parse("- a\n  - b\n- c"),
        vec![node("a", vec![leaf("b")]), leaf("c")]
    );
}

#[rstest]
#[case("- one\n- two")]
#[case("* one\n+ two")]
#[case("1. one\n2. two")]
fn marker_styles_are_interchangeable(#[case] markdown: &str) {
    assert_eq!(parse(markdown), vec![leaf("one"), leaf("two")]);
}

#[test]
fn quote_lines_at_same_depth_merge() {
    assert_eq!(parse("> a\n> b"), vec![leaf("> a\n> b")]);
}

#[test]
fn quote_depth_up_then_down() {
    assert_eq!(
        parse("> a\n> > b\n> c"),
        vec![node("> a", vec![leaf("> > b")]), leaf("> c")]
    );
}

#[test]
fn plain_sentences_are_independent_roots() {
    assert_eq!(
        parse("The first idea.\nThe second idea.\nA third one"),
        vec![
            leaf("The first idea."),
            leaf("The second idea."),
            leaf("A third one")
        ]
    );
}

#[test]
fn mixed_blocks_keep_document_order() {
    assert_eq!(
        parse("- item\n\n> quote\n\nplain text"),
        vec![leaf("item"), leaf("> quote"), leaf("plain text")]
    );
}

#[test]
fn runs_switch_without_blank_lines() {
    assert_eq!(
        parse("- item\n> quote\nplain\n- next"),
        vec![leaf("item"), leaf("> quote"), leaf("plain"), leaf("next")]
    );
}

#[rstest]
#[case("- a\n  - b", "- c\n  - d")]
#[case("> a\n> > b", "> c")]
#[case("- a", "> b\n> > c")]
#[case("> a", "- b\n  - c")]
fn blank_separated_fragments_parse_independently(#[case] first: &str, #[case] second: &str) {
    let mut expected = parse(first);
    expected.extend(parse(second));
    assert_eq!(parse(&format!("{first}\n\n{second}")), expected);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = "- a\n  - b\n\n> q\n> r\nplain\n  child";
    assert_eq!(parse(&lf.replace('\n', "\r\n")), parse(lf));
    assert_eq!(parse(&lf.replace('\n', "\r")), parse(lf));
}

#[test]
fn unrecognised_markup_falls_back_to_paragraphs() {
    assert_eq!(
        parse("# Heading\n---\n-not a list\n```"),
        vec![
            leaf("# Heading"),
            leaf("---"),
            leaf("-not a list"),
            leaf("```")
        ]
    );
}

#[test]
fn mixed_document_outline() {
    let markdown = "\
Meeting notes
  attendees listed below

- Agenda
  - Budget
    - Q3 numbers
  - Hiring
- Actions

> Keep it short.
> Really.
> > Said twice
> Done
";
    let forest = parse(markdown);
    snapshot::invariants(&forest);
    insta::assert_snapshot!(render_outline(&forest), @r"
    - Meeting notes
      - attendees listed below
    - Agenda
      - Budget
        - Q3 numbers
      - Hiring
    - Actions
    - > Keep it short.
      > Really.
      - > > Said twice
    - > Done
    ");
}

// Sentence splitting

#[test]
fn long_items_split_only_when_enabled() {
    let sentence = "This sentence has exactly eight words in it.";
    let markdown = format!("- {}", [sentence; 13].join(" "));

    let plain = parse(&markdown);
    assert_eq!(plain.len(), 1);
    assert!(plain[0].is_leaf());

    let options = ParseOptions {
        split_long_items: true,
        ..ParseOptions::default()
    };
    let split = parse_with(&markdown, &options);
    assert_eq!(split.len(), 1);
    assert_eq!(split[0].text, sentence);
    assert_eq!(split[0].depth(), 13);
    assert_eq!(split[0].node_count(), 13);
}

#[test]
fn item_at_the_word_limit_is_not_split() {
    let markdown = format!("- {}", "word. ".repeat(100));
    let options = ParseOptions {
        split_long_items: true,
        ..ParseOptions::default()
    };
    assert!(parse_with(&markdown, &options)[0].is_leaf());
}

#[test]
fn quotes_and_paragraphs_are_never_split() {
    let long = "One. Two. Three. Four.";
    let options = ParseOptions {
        split_long_items: true,
        long_item_word_limit: 1,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with(&format!("> {long}\n\n{long}"), &options),
        vec![leaf(&format!("> {long}")), leaf(long)]
    );
}

// Property tests

fn outline_line() -> impl Strategy<Value = String> {
    let indent = prop::sample::select(vec!["", " ", "  ", "    ", "\t"]);
    let lead = prop::sample::select(vec![
        "", "- ", "* ", "+ ", "1. ", "> ", ">> ", "> > ", ">", "-",
    ]);
    let body = "[a-z .>\\-\\[\\]]{0,12}";
    (indent, lead, body).prop_map(|(i, l, b)| format!("{i}{l}{b}"))
}

proptest! {
    #[test]
    fn parse_is_total_and_well_formed(lines in prop::collection::vec(outline_line(), 0..40)) {
        let markdown = lines.join("\n");
        let forest = parse(&markdown);
        snapshot::invariants(&forest);
        snapshot::check_node_bound(&markdown, &forest);
    }

    #[test]
    fn parse_is_deterministic(markdown in "[- >*+1.a-c\n\t]{0,80}") {
        prop_assert_eq!(parse(&markdown), parse(&markdown));
    }

    #[test]
    fn splitting_never_loses_or_invents_items(lines in prop::collection::vec(outline_line(), 0..20)) {
        let markdown = lines.join("\n");
        let options = ParseOptions {
            split_long_items: true,
            long_item_word_limit: 2,
            ..ParseOptions::default()
        };
        let forest = parse_with(&markdown, &options);
        snapshot::invariants(&forest);
        prop_assert_eq!(forest.len(), parse(&markdown).len());
    }
}
