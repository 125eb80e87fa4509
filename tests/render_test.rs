//! Tests for diagnostic tree rendering of qualified name sets

use beantree::util::testing::init_test_setup;
use beantree::{render_property_tree, NameError};

#[test]
fn given_qualified_names_when_rendering_then_tree_is_rooted_at_sentinel() {
    init_test_setup();
    let tree = render_property_tree(&["items", "items.name"]).unwrap();
    let rendered = tree.to_string();
    assert!(rendered.starts_with("<root>"));
    assert!(rendered.contains("items"));
    assert!(rendered.contains("name"));
}

#[test]
fn given_overlapping_names_when_rendering_then_shared_prefixes_merge() {
    let tree = render_property_tree(&["items.$0.id", "items.$0.name", "items.$1.id"]).unwrap();
    let rendered = tree.to_string();
    assert_eq!(rendered.matches("items").count(), 1);
    assert_eq!(rendered.matches("$0").count(), 1);
    assert_eq!(rendered.matches("$1").count(), 1);
    assert_eq!(rendered.matches("id").count(), 2);
}

#[test]
fn given_no_names_when_rendering_then_returns_bare_root() {
    let tree = render_property_tree::<&str>(&[]).unwrap();
    assert_eq!(tree.to_string().trim_end(), "<root>");
}

#[test]
fn given_malformed_name_when_rendering_then_reports_name_error() {
    let result = render_property_tree(&["ok", "broken..name"]);
    assert_eq!(
        result.err(),
        Some(NameError::EmptySegment {
            name: "broken..name".to_string()
        })
    );
}
