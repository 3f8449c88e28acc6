//! End-to-end review flows: create comments, persist their anchors, edit the
//! files, rebuild, and check where the comments land.

use std::collections::HashSet;

use margin_sdk::{
    pinned_lines, AnchorResolution, CommentAnchor, DiffLine, LineKind, LiveComment, ReviewConfig,
    ReviewDocument, Side,
};

fn persist(anchor: &CommentAnchor) -> String {
    serde_json::to_string(anchor).unwrap()
}

fn load(id: &str, stored: &str) -> LiveComment {
    LiveComment::new(id, serde_json::from_str(stored).unwrap())
}

#[test]
fn deleted_line_scenario() {
    let review = ReviewDocument::build(
        "line 1\nline 2\nline 3",
        "line 1\nline 3",
        &ReviewConfig::default(),
    );
    assert_eq!(
        review.lines(),
        &[
            DiffLine::unchanged("line 1", 1, 1),
            DiffLine::deleted("line 2", 2),
            DiffLine::unchanged("line 3", 3, 2),
        ]
    );
    assert_eq!(review.document().content, "line 1\nline 2\nline 3");
}

#[test]
fn added_line_scenario() {
    let review = ReviewDocument::build("a\nc", "a\nb\nc", &ReviewConfig::default());
    let added = &review.lines()[1];
    assert_eq!(added.kind, LineKind::Added);
    assert_eq!((added.original_line, added.modified_line), (None, Some(2)));
}

#[test]
fn edited_deleted_line_becomes_outdated_after_reload() {
    let config = ReviewConfig::default();
    let first = ReviewDocument::build("keep\nremove me\ntail", "keep\ntail", &config);
    let anchor = first.create_anchor(2).unwrap();
    assert_eq!((anchor.side, anchor.line), (Side::Original, 2));
    let stored = persist(&anchor);

    let second = ReviewDocument::build("keep\nremove me too\ntail", "keep\ntail", &config);
    let resolved = second.resolve_comments(&[load("c1", &stored)]);
    assert_eq!(resolved[0].resolution, AnchorResolution::located(2, true));
}

#[test]
fn vanished_line_number_is_orphaned() {
    let stored = r#"{"side":"original","line":50,"anchorContent":"x","anchorHash":"00000078"}"#;
    let review = ReviewDocument::build("a\nb\nc", "a\nc", &ReviewConfig::default());
    let resolved = review.resolve_comments(&[load("c1", stored)]);
    assert_eq!(resolved[0].resolution, AnchorResolution::Orphaned);
}

#[test]
fn comments_survive_unrelated_edits() {
    let config = ReviewConfig::default();
    let original: String = (1..=40).map(|i| format!("fn f{i}() {{}}\n")).collect();
    let modified = original.replace("fn f20() {}", "fn f20() { todo!() }");

    let review = ReviewDocument::build(&original, &modified, &config);
    // Comment on the added line and on an unchanged line far below it.
    let added_doc_line = review
        .lines()
        .iter()
        .position(|l| l.kind == LineKind::Added)
        .unwrap()
        + 1;
    let comments = vec![
        LiveComment::new("on-change", review.create_anchor(added_doc_line).unwrap()),
        LiveComment::new("below", review.create_anchor(35).unwrap()),
    ];

    // An edit elsewhere in the modified file that keeps line numbering intact.
    let edited = modified.replace("fn f5() {}", "fn f5() { }");
    let rebuilt = ReviewDocument::build(&original, &edited, &config);
    let resolved = rebuilt.resolve_comments(&comments);

    assert!(resolved[0].resolution.is_current());
    assert!(resolved[1].resolution.is_current());
    let doc_line = resolved[0].resolution.doc_line().unwrap();
    assert_eq!(
        rebuilt.lines()[doc_line - 1].content,
        "fn f20() { todo!() }"
    );
}

#[test]
fn reverting_the_change_orphans_comments_on_added_lines() {
    let config = ReviewConfig::default();
    let review = ReviewDocument::build("a\nb\n", "a\nb\nc\nd\n", &config);
    let anchor = review.create_anchor(4).unwrap();
    assert_eq!((anchor.side, anchor.line), (Side::Modified, 4));

    let reverted = ReviewDocument::build("a\nb\n", "a\nb\n", &config);
    let resolved = reverted.resolve_comments(&[LiveComment::new("c", anchor)]);
    assert!(resolved[0].resolution.is_orphaned());
}

#[test]
fn located_comments_keep_their_region_expanded() {
    let config = ReviewConfig::default();
    let original: String = (1..=30).map(|i| format!("row {i}\n")).collect();
    let modified = original.replace("row 28\n", "row twenty-eight\n");
    let review = ReviewDocument::build(&original, &modified, &config);
    assert_eq!(review.layout().collapsed_regions.len(), 1);

    let comments = vec![LiveComment::new("top", review.create_anchor(3).unwrap())];
    let pinned = pinned_lines(&review.resolve_comments(&comments));

    let collapsed = review.visible_lines(&HashSet::new(), &[]);
    let with_comment = review.visible_lines(&HashSet::new(), &pinned);
    assert!(!collapsed.contains(&2));
    assert!(with_comment.contains(&2));
    assert_eq!(with_comment.len(), review.document().len());
}

#[test]
fn open_comment_form_pins_its_line() {
    let config = ReviewConfig::default();
    let original: String = (1..=30).map(|i| format!("row {i}\n")).collect();
    let modified = original.replace("row 2\n", "row two\n");
    let review = ReviewDocument::build(&original, &modified, &config);

    // A form being typed at doc line 25, not yet saved.
    let regions = review.collapsed_regions(&[25]);
    assert!(regions.iter().all(|r| !r.contains(25)));
    assert!(review.visible_lines(&HashSet::new(), &[25]).contains(&24));
}
