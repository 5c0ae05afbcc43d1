//! Commencement descriptions for flat and nested tables of contents.
//!
//! Every nested scenario is checked in both modes: the text depends only on
//! which ids are given, not on whether they are commenced or uncommenced.

use akn_commencements::{CommencementsBeautifier, TocElement};
use pretty_assertions::assert_eq;

/// Section 1 and every subprovision below it.
const SECTION_1: [&str; 16] = [
    "sec_1",
    "sec_1__subsec_1",
    "sec_1__subsec_1__list_1__item_a",
    "sec_1__subsec_1__list_1__item_a__list_1__item_i",
    "sec_1__subsec_1__list_1__item_a__list_1__item_ii",
    "sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_A",
    "sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_B",
    "sec_1__subsec_1__list_1__item_a__list_1__item_iii",
    "sec_1__subsec_1__list_1__item_aA",
    "sec_1__subsec_1__list_1__item_b",
    "sec_1__subsec_1__list_1__item_c",
    "sec_1__subsec_2",
    "sec_1__subsec_3",
    "sec_1__subsec_4",
    "sec_2",
    "sec_3",
];

/// Sections 1 to 30, with ids `section-1` to `section-30`.
fn flat_toc() -> Vec<TocElement> {
    (1..=30).map(section).collect()
}

fn section(number: u32) -> TocElement {
    TocElement::new("section", format!("section-{number}"))
        .with_num(format!("{number}."))
        .with_basic_unit(true)
}

fn element(kind: &str, id: &str, num: &str) -> TocElement {
    TocElement::new(kind, id).with_num(num)
}

/// Chapter 1 (Part A: sections 1–3, Part B: sections 4–5) and Chapter 2 (sections 6–7).
///
/// Section 1 has subsections (1)–(4); (1) has items (a), (aA), (b), (c);
/// (a) has items (i)–(iii); (ii) has items (A) and (B).
fn nested_toc() -> Vec<TocElement> {
    let items_3 = ["A", "B"].map(|n| {
        element(
            "item",
            &format!("sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_{n}"),
            &format!("({n})"),
        )
    });

    let mut items_2 = ["i", "ii", "iii"].map(|n| {
        element(
            "item",
            &format!("sec_1__subsec_1__list_1__item_a__list_1__item_{n}"),
            &format!("({n})"),
        )
    });
    items_2[1].children = items_3.to_vec();

    let mut items_1 = ["a", "aA", "b", "c"].map(|n| {
        element("item", &format!("sec_1__subsec_1__list_1__item_{n}"), &format!("({n})"))
    });
    items_1[0].children = items_2.to_vec();

    let mut subsections =
        [1, 2, 3, 4].map(|n| element("subsection", &format!("sec_1__subsec_{n}"), &format!("({n})")));
    subsections[0].children = items_1.to_vec();

    let mut sections: Vec<TocElement> = (1..=7)
        .map(|n| {
            element("section", &format!("sec_{n}"), &format!("{n}.")).with_basic_unit(true)
        })
        .collect();
    sections[0].children = subsections.to_vec();

    let part_a = element("part", "chp_1__part_A", "A").with_children(sections[0..3].to_vec());
    let part_b = element("part", "chp_1__part_B", "B").with_children(sections[3..5].to_vec());

    vec![
        element("chapter", "chp_1", "1").with_children([part_a, part_b]),
        element("chapter", "chp_2", "2").with_children(sections[5..7].to_vec()),
    ]
}

fn describe(toc: &[TocElement], ids: &[&str]) -> String {
    CommencementsBeautifier::new(true).describe(toc, ids)
}

/// Describe in both modes, checking they agree.
fn describe_nested(ids: &[&str]) -> String {
    let toc = nested_toc();
    let commenced = CommencementsBeautifier::new(true).describe(&toc, ids);
    let uncommenced = CommencementsBeautifier::new(false).describe(&toc, ids);
    assert_eq!(commenced, uncommenced);
    commenced
}

/// `base` followed by `extra`.
fn ids<'a>(base: &[&'a str], extra: &[&'a str]) -> Vec<&'a str> {
    base.iter().chain(extra).copied().collect()
}

// =============================================================================
// Flat TOC
// =============================================================================

#[test]
fn test_beautiful_provisions_basic() {
    let toc = flat_toc();

    let cases: [(&[&str], &str); 7] = [
        (
            &["section-1", "section-2", "section-3", "section-4"],
            "section 1–4",
        ),
        (
            &["section-2", "section-3", "section-4", "section-5"],
            "section 2–5",
        ),
        (&["section-1", "section-2", "section-3"], "section 1–3"),
        (
            &["section-1", "section-3", "section-4", "section-5", "section-6"],
            "section 1; section 3–6",
        ),
        (
            &["section-1", "section-2", "section-3", "section-4", "section-5", "section-7"],
            "section 1–5; section 7",
        ),
        (
            &["section-1", "section-3", "section-4", "section-5", "section-6", "section-8"],
            "section 1; section 3–6; section 8",
        ),
        (
            &[
                "section-1",
                "section-4",
                "section-5",
                "section-6",
                "section-7",
                "section-8",
                "section-9",
                "section-10",
                "section-11",
                "section-12",
                "section-14",
                "section-16",
                "section-20",
                "section-21",
            ],
            "section 1; section 4–12; section 14; section 16; section 20–21",
        ),
    ];

    for (ids, expected) in cases {
        assert_eq!(describe(&toc, ids), expected, "ids: {ids:?}");
    }
}

#[test]
fn test_one_item() {
    assert_eq!(describe(&flat_toc(), &["section-23"]), "section 23");
}

#[test]
fn test_two_items() {
    assert_eq!(
        describe(&flat_toc(), &["section-23", "section-25"]),
        "section 23; section 25"
    );
}

#[test]
fn test_three_items() {
    assert_eq!(
        describe(&flat_toc(), &["section-23", "section-24", "section-25"]),
        "section 23–25"
    );
}

#[test]
fn test_one_excluded() {
    let toc: Vec<TocElement> = (1..=3).map(section).collect();

    assert_eq!(describe(&toc, &["section-1", "section-2"]), "section 1–2");
    assert_eq!(describe(&toc, &["section-2", "section-3"]), "section 2–3");
}

#[test]
fn test_provisions_out_of_sync() {
    let toc = flat_toc();

    assert_eq!(
        describe(&toc, &["section-29", "section-30", "section-31", "section-32"]),
        "section 29–30"
    );
    assert_eq!(
        describe(&toc, &["section-31", "section-32", "section-33", "section-34"]),
        ""
    );
}

#[test]
fn test_mode_does_not_change_flat_text() {
    let toc = flat_toc();
    let ids = ["section-1", "section-3", "section-4"];

    assert_eq!(
        CommencementsBeautifier::new(false).describe(&toc, &ids),
        "section 1; section 3–4"
    );
}

#[test]
fn test_describe_is_repeatable() {
    let toc = nested_toc();
    let beautifier = CommencementsBeautifier::default();
    let decorated = beautifier.decorate_provisions(&toc, &["chp_1", "sec_2"]);

    let first = beautifier.make_beautiful(&decorated);
    assert_eq!(first, beautifier.make_beautiful(&decorated));
    assert_eq!(first, "Chapter 1 (in part); Chapter 1, Part A, section 2");
}

// =============================================================================
// Nested TOC: full containers
// =============================================================================

#[test]
fn test_nested_full_containers() {
    // don't dig down further than what is fully commenced
    let all = ids(
        &["chp_1", "chp_1__part_A"],
        &ids(
            &SECTION_1,
            &["chp_1__part_B", "sec_4", "sec_5", "chp_2", "sec_6", "sec_7"],
        ),
    );
    assert_eq!(
        describe_nested(&all),
        "Chapter 1 (section 1–5); Chapter 2 (section 6–7)"
    );

    assert_eq!(
        describe_nested(&ids(&["chp_1", "chp_1__part_A"], &SECTION_1)),
        "Chapter 1 (in part); Chapter 1, Part A (section 1–3)"
    );

    // don't repeat 'Chapter 1' before Part B
    assert_eq!(
        describe_nested(&[
            "sec_2",
            "sec_3",
            "chp_1__part_B",
            "sec_4",
            "sec_5",
            "chp_2",
            "sec_6",
            "sec_7",
        ]),
        "Chapter 1, Part A, section 2–3; Part B (section 4–5); Chapter 2 (section 6–7)"
    );
}

// =============================================================================
// Nested TOC: partial containers
// =============================================================================

#[test]
fn test_nested_partial_containers() {
    // Chapter 1 is mentioned regardless because it's given
    assert_eq!(
        describe_nested(&["chp_1", "sec_2"]),
        "Chapter 1 (in part); Chapter 1, Part A, section 2"
    );

    // Chapter 1 and Part B are mentioned regardless because they're given
    let part_a_in_full = ids(&["chp_1", "chp_1__part_A"], &SECTION_1);
    assert_eq!(
        describe_nested(&ids(&part_a_in_full, &["chp_1__part_B"])),
        "Chapter 1 (in part); Chapter 1, Part A (section 1–3); Part B (in part)"
    );
    assert_eq!(
        describe_nested(&ids(&part_a_in_full, &["chp_1__part_B", "sec_4"])),
        "Chapter 1 (in part); Chapter 1, Part A (section 1–3); Part B (in part); Part B, section 4"
    );

    // Part A is mentioned for context even though it's not given
    assert_eq!(
        describe_nested(&["chp_1", "sec_2", "chp_1__part_B"]),
        "Chapter 1 (in part); Chapter 1, Part A, section 2; Part B (in part)"
    );
    assert_eq!(
        describe_nested(&["sec_2", "chp_1__part_B"]),
        "Chapter 1, Part A, section 2; Part B (in part)"
    );

    let part_a = ids(&["chp_1__part_A"], &SECTION_1);
    assert_eq!(
        describe_nested(&ids(&part_a, &["sec_4"])),
        "Chapter 1, Part A (section 1–3); Part B, section 4"
    );

    // Part B isn't given in full, even though all its sections are, because it isn't given itself
    assert_eq!(
        describe_nested(&["chp_1", "sec_2", "sec_4", "sec_5"]),
        "Chapter 1 (in part); Chapter 1, Part A, section 2; Part B, section 4–5"
    );
    assert_eq!(
        describe_nested(&ids(&part_a, &["sec_4", "sec_5"])),
        "Chapter 1, Part A (section 1–3); Part B, section 4–5"
    );

    assert_eq!(
        describe_nested(&["chp_1", "sec_2", "chp_1__part_B", "sec_4", "sec_5"]),
        "Chapter 1 (in part); Chapter 1, Part A, section 2; Part B (section 4–5)"
    );
    assert_eq!(
        describe_nested(&["chp_1__part_B"]),
        "Chapter 1, Part B (in part)"
    );
}

// =============================================================================
// Nested TOC: basic units
// =============================================================================

#[test]
fn test_nested_basic_units() {
    assert_eq!(
        describe_nested(&["sec_2", "sec_3", "chp_1__part_B", "sec_5", "chp_2", "sec_7"]),
        "Chapter 1, Part A, section 2–3; Part B (in part); Part B, section 5; \
         Chapter 2 (in part); Chapter 2, section 7"
    );
    assert_eq!(
        describe_nested(&["sec_2", "sec_3", "sec_5", "sec_7"]),
        "Chapter 1, Part A, section 2–3; Part B, section 5; Chapter 2, section 7"
    );
    assert_eq!(
        describe_nested(&["sec_4", "chp_2", "sec_6"]),
        "Chapter 1, Part B, section 4; Chapter 2 (in part); Chapter 2, section 6"
    );
    assert_eq!(
        describe_nested(&["sec_4", "chp_2"]),
        "Chapter 1, Part B, section 4; Chapter 2 (in part)"
    );
}

// =============================================================================
// Nested TOC: subprovisions
// =============================================================================

#[test]
fn test_nested_single_subprovisions() {
    assert_eq!(
        describe_nested(&["sec_1__subsec_3"]),
        "Chapter 1, Part A, section 1(3)"
    );
    assert_eq!(
        describe_nested(&["sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_A"]),
        "Chapter 1, Part A, section 1(1)(a)(ii)(A)"
    );
}

#[test]
fn test_nested_multiple_subprovisions() {
    // subprovisions are listed with their context up to the basic unit
    assert_eq!(
        describe_nested(&[
            "sec_1__subsec_1__list_1__item_a__list_1__item_i",
            "sec_1__subsec_1__list_1__item_a__list_1__item_ii",
            "sec_1__subsec_1__list_1__item_b",
            "sec_1__subsec_1__list_1__item_c",
        ]),
        "Chapter 1, Part A, section 1(1)(a)(i), 1(1)(a)(ii), 1(1)(b), 1(1)(c)"
    );
    assert_eq!(
        describe_nested(&[
            "sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_A",
            "sec_1__subsec_1__list_1__item_a__list_1__item_ii__list_1__item_B",
        ]),
        "Chapter 1, Part A, section 1(1)(a)(ii)(A), 1(1)(a)(ii)(B)"
    );

    // a partially commenced section doesn't run on into the next one,
    // e.g. never 'section 1(1)(a), 1(1)(c), 1(2), 1(3)–2'
    let partial_section_1 = [
        "chp_1",
        "chp_1__part_A",
        "sec_1",
        "sec_1__subsec_1",
        "sec_1__subsec_1__list_1__item_a",
        "sec_1__subsec_1__list_1__item_a__list_1__item_i",
        "sec_1__subsec_1__list_1__item_a__list_1__item_ii",
        "sec_1__subsec_1__list_1__item_a__list_1__item_iii",
        "sec_1__subsec_1__list_1__item_c",
        "sec_1__subsec_2",
        "sec_1__subsec_3",
    ];
    assert_eq!(
        describe_nested(&ids(&partial_section_1, &["sec_3"])),
        "Chapter 1 (in part); Chapter 1, Part A (in part); \
         Part A, section 1(1)(a)(i), 1(1)(a)(ii), 1(1)(a)(iii), 1(1)(c), 1(2), 1(3); section 3"
    );
    assert_eq!(
        describe_nested(&ids(&partial_section_1, &["sec_2"])),
        "Chapter 1 (in part); Chapter 1, Part A (in part); \
         Part A, section 1(1)(a)(i), 1(1)(a)(ii), 1(1)(a)(iii), 1(1)(c), 1(2), 1(3); section 2"
    );

    assert_eq!(
        describe_nested(&["sec_1__subsec_1__list_1__item_b", "sec_4"]),
        "Chapter 1, Part A, section 1(1)(b); Part B, section 4"
    );
}

#[test]
fn test_lonely_subprovisions() {
    let mut toc = nested_toc();
    toc.insert(0, element("item", "item_xxx", "(xxx)"));

    for commenced in [true, false] {
        assert_eq!(
            CommencementsBeautifier::new(commenced).describe(&toc, &["item_xxx"]),
            "item (xxx)"
        );
    }
}

#[test]
fn test_nothing_given() {
    assert_eq!(describe_nested(&[]), "");
}
