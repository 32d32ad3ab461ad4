use objgen::{Options, generate};
use serde_json::json;

fn build(model: &str) -> serde_json::Value {
    generate(model, &Options::default())
}

#[test]
fn bare_markers_build_an_array_root() {
    let v = build("[]\n  id n = 1\n[]\n  id n = 2\n[]\n  id n = 3\n");
    assert_eq!(v, json!([{"id": 1}, {"id": 2}, {"id": 3}]));
}

#[test]
fn explicit_root_elements_pad_with_null() {
    let v = build("[1]\n  id n = 1\n");
    assert_eq!(v, json!([null, {"id": 1}]));
}

#[test]
fn root_element_with_a_value_holds_the_list() {
    let v = build("[] = a, b");
    assert_eq!(v, json!([["a", "b"]]));
}

#[test]
fn list_and_object_elements_mix() {
    let v = build("[] = a, b\n[]\n  id n = 1\n");
    assert_eq!(v, json!([["a", "b"], {"id": 1}]));
}

#[test]
fn named_top_level_line_in_an_array_model_is_dropped() {
    let v = build("[]\n  id n = 1\nname = x\n");
    assert_eq!(v, json!([{"id": 1}]));
}

#[test]
fn root_shape_is_fixed_by_the_first_content_line() {
    // A named first line pins the object root; later bare markers become a
    // property with an empty name instead of re-rooting the tree
    let v = build("x = 1\n[]\n  y = 2\n");
    assert_eq!(v, json!({"x": "1", "": [{"y": "2"}]}));
}

#[test]
fn comments_before_the_first_marker_do_not_pin_the_root() {
    let v = build("// header\n\n[]\n  id n = 1\n");
    assert_eq!(v, json!([{"id": 1}]));
}
