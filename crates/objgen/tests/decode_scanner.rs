use objgen::decode::scanner::scan;

#[test]
fn scan_basic_depths() {
    let input = "person\n  name = x\n\tage n = 1\n";
    let lines = scan(input, 2);
    assert_eq!(lines.len(), 3);
    assert_eq!((lines[0].text, lines[0].depth), ("person", 1));
    assert_eq!((lines[1].text, lines[1].depth), ("name = x", 2));
    assert_eq!((lines[2].text, lines[2].depth), ("age n = 1", 2));
}

#[test]
fn first_line_depth_is_always_one() {
    let lines = scan("    a = 1\n  b = 2\n", 2);
    assert_eq!((lines[0].text, lines[0].depth), ("a = 1", 1));
    assert_eq!((lines[1].text, lines[1].depth), ("b = 2", 2));
}

#[test]
fn tabs_and_space_groups_compose() {
    let lines = scan("a\n\t  b = 1\n", 2);
    assert_eq!(lines[1].depth, 3); // one tab + one full space group
}

#[test]
fn leftover_spaces_do_not_count() {
    let lines = scan("a\n   b = 1\n", 2);
    assert_eq!(lines[1].depth, 2); // one group of two, one spare space
}

#[test]
fn spaces_per_level_is_configurable() {
    let input = "a\n    b = 1\n";
    assert_eq!(scan(input, 4)[1].depth, 2);
    assert_eq!(scan(input, 2)[1].depth, 3);
}

#[test]
fn blank_and_bracket_only_lines_are_dropped() {
    let lines = scan("a = 1\n\n   \n]\n[\nb = 2\n", 2);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "a = 1");
    assert_eq!(lines[1].text, "b = 2");
}

#[test]
fn array_marker_lines_survive_the_blank_filter() {
    let lines = scan("[]\n  id = 1\n[2]\n", 2);
    assert_eq!(lines.len(), 3);
    assert_eq!((lines[0].text, lines[0].depth), ("[]", 1));
    assert_eq!((lines[2].text, lines[2].depth), ("[2]", 1));
}

#[test]
fn crlf_input_behaves_like_lf() {
    let lines = scan("a = 1\r\n  b = 2\r\n", 2);
    assert_eq!((lines[0].text, lines[0].depth), ("a = 1", 1));
    assert_eq!((lines[1].text, lines[1].depth), ("b = 2", 2));
}

#[test]
fn emitted_text_is_trimmed() {
    let lines = scan("  a = 1  \n", 2);
    assert_eq!(lines[0].text, "a = 1");
}

#[test]
fn empty_input_yields_no_lines() {
    assert!(scan("", 2).is_empty());
    assert!(scan("\n\n  \n", 2).is_empty());
}
