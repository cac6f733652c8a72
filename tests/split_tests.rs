use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlscript::{split, split_optional, split_with_delimiter, statements};

#[rstest]
#[case("SELECT 1;SELECT 2", &["SELECT 1", "SELECT 2"])]
#[case("SELECT '1;2'", &["SELECT '1;2'"])]
#[case("SELECT /1;;;;2", &["SELECT /1", "2"])]
#[case("SELECT \"test\\\";SELECT 1", &["SELECT \"test\\\";SELECT 1"])]
#[case("SELECT \"a;b\"; SELECT 'c'", &["SELECT \"a;b\"", " SELECT 'c'"])]
#[case("SELECT 'it''s'; SELECT 2", &["SELECT 'it''s'", " SELECT 2"])]
#[case("SELECT 'a\\';b'; SELECT 2", &["SELECT 'a\\';b'", " SELECT 2"])]
#[case("SELECT \"it's\"; SELECT 2", &["SELECT \"it's\"", " SELECT 2"])]
#[case("SELECT 1 /*+ hint; */; SELECT 2", &["SELECT 1 /*+ hint; */", " SELECT 2"])]
#[case("SELECT 1 -- x;y\n; SELECT 2", &["SELECT 1 -- x;y\n", " SELECT 2"])]
#[case("SELECT 1 /* a\n;\nb */", &["SELECT 1 /* a\n;\nb */"])]
#[case(";\n;SELECT 1;\n\t;", &["SELECT 1"])]
fn test_split_scenarios(#[case] script: &str, #[case] expected: &[&str]) {
    assert_eq!(split(script), expected);
}

#[test]
fn test_split_absent_or_blank() {
    assert!(split_optional(None, ';').is_empty());
    assert!(split("").is_empty());
    assert!(split("   \n\r\n\t").is_empty());
}

#[test]
fn test_split_unterminated_literal_swallows_rest() {
    let script = "INSERT INTO t VALUES ('oops);\nDELETE FROM t;\nSELECT 1";
    assert_eq!(split(script), vec![script]);
}

#[test]
fn test_split_unterminated_comment_swallows_rest() {
    let script = "SELECT 1; /* forgot to close; DROP TABLE t;";
    assert_eq!(split(script), vec!["SELECT 1", " /* forgot to close; DROP TABLE t;"]);
}

#[test]
fn test_split_realistic_script() {
    let script = r#"
-- create the lookup table; it holds codes
CREATE TABLE codes (code TEXT, label TEXT);
INSERT INTO codes VALUES ('A;1', 'first; with semicolon');
/* bulk load below;
   keep in sync with the spreadsheet */
INSERT INTO codes VALUES ("B", 'second -- not a comment');
SELECT /*+ INDEX(codes) */ * FROM codes;
"#;
    let statements = split(script);
    assert_eq!(statements.len(), 4);
    assert!(statements[0].trim_start().starts_with("-- create the lookup table; it holds codes"));
    assert!(statements[0].trim_end().ends_with("label TEXT)"));
    assert_eq!(
        statements[1],
        "\nINSERT INTO codes VALUES ('A;1', 'first; with semicolon')"
    );
    assert!(statements[2].contains("'second -- not a comment'"));
    assert_eq!(statements[3], "\nSELECT /*+ INDEX(codes) */ * FROM codes");
}

#[test]
fn test_split_with_custom_delimiter() {
    let script = "BEGIN x := 1; y := 2; END;\n/\nSELECT 1 FROM dual\n/";
    assert_eq!(
        split_with_delimiter(script, '/'),
        vec!["BEGIN x := 1; y := 2; END;\n", "\nSELECT 1 FROM dual\n"]
    );
}

#[test]
fn test_statements_borrow_from_script() {
    let script = String::from("SELECT 1; SELECT 2");
    let borrowed: Vec<&str> = statements(&script, ';').collect();
    assert_eq!(borrowed, vec!["SELECT 1", " SELECT 2"]);
}

#[test]
fn test_split_is_thread_safe() {
    let scripts = ["SELECT 1;SELECT 2", "SELECT ';'", "a;b;c"];
    let handles: Vec<_> = scripts
        .into_iter()
        .map(|script| std::thread::spawn(move || split(script)))
        .collect();
    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], vec!["SELECT 1", "SELECT 2"]);
    assert_eq!(results[1], vec!["SELECT ';'"]);
    assert_eq!(results[2], vec!["a", "b", "c"]);
}
