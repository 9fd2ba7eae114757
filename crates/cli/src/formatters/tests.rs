use serde_json::json;

use super::common::{Tabular, header_title, tabulate, write_to_file};
use super::*;

#[test]
fn test_header_title_splits_words() {
    assert_eq!(header_title("newStateDate"), "New State Date");
    assert_eq!(header_title("rawJSON"), "Raw JSON");
    assert_eq!(header_title("dashboardUId"), "Dashboard U Id");
    assert_eq!(header_title("isGrafanaAdmin"), "Is Grafana Admin");
    assert_eq!(header_title("HTMLParser"), "HTML Parser");
    assert_eq!(header_title("org_id"), "Org Id");
    assert_eq!(header_title("id"), "Id");
    assert_eq!(header_title("panel2Id"), "Panel2 Id");
}

#[test]
fn test_tabulate_drops_all_null_columns() {
    let value = json!([
        {"id": 1, "name": "CPU", "folder": null},
        {"id": 2, "name": "Disk", "folder": null, "url": "http://x/d/2"},
    ]);
    let table = tabulate(&value);

    assert_eq!(table.headers, vec!["Id", "Name", "Url"]);
    assert_eq!(
        table.rows,
        vec![
            vec!["1".to_string(), "CPU".to_string(), String::new()],
            vec!["2".to_string(), "Disk".to_string(), "http://x/d/2".to_string()],
        ]
    );
}

#[test]
fn test_tabulate_single_object_and_scalars() {
    let table = tabulate(&json!({"message": "User updated", "tags": ["a", "b"]}));
    assert_eq!(table.headers, vec!["Message", "Tags"]);
    assert_eq!(table.rows, vec![vec!["User updated".to_string(), r#"["a","b"]"#.to_string()]]);

    let table = tabulate(&json!(["x"]));
    assert_eq!(table.headers, vec!["Value"]);

    assert_eq!(tabulate(&json!(null)), Tabular::default());
    assert!(tabulate(&json!([])).is_empty());
}

#[test]
fn test_table_formatter_aligns_columns() {
    let value = json!([
        {"id": 1, "name": "CPU load", "state": "alerting"},
        {"id": 22, "name": "Disk", "state": "ok"},
    ]);
    let output = TableFormatter.format("Alerts", &value).unwrap();

    let expected = "\
Alerts
Id  Name      State
--  --------  --------
1   CPU load  alerting
22  Disk      ok
";
    assert_eq!(output, expected);
}

#[test]
fn test_table_formatter_empty() {
    let output = TableFormatter.format("Teams", &json!([])).unwrap();
    assert_eq!(output, "No teams found.\n");
}

#[test]
fn test_markdown_formatter() {
    let value = json!([{"login": "admin", "note": "a|b"}]);
    let output = MarkdownFormatter.format("Users", &value).unwrap();
    assert_eq!(
        output,
        "### Users\n| Login | Note |\n| --- | --- |\n| admin | a\\|b |\n"
    );
}

#[test]
fn test_markdown_formatter_empty() {
    let output = MarkdownFormatter.format("Alerts", &json!([])).unwrap();
    assert_eq!(output, "### Alerts\n**No entries.**\n");
}

#[test]
fn test_json_formatter_is_untouched_value() {
    let value = json!([{"id": 1, "folder": null}]);
    let output = JsonFormatter.format("Alerts", &value).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_get_formatter() {
    let value = json!([]);
    assert!(get_formatter(OutputFormat::Json).format("X", &value).unwrap().starts_with('['));
    assert!(get_formatter(OutputFormat::Table).format("X", &value).unwrap().starts_with("No"));
    assert!(get_formatter(OutputFormat::Markdown).format("X", &value).unwrap().starts_with("###"));
}

#[test]
fn test_write_to_file_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out.json");
    write_to_file("[]\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");

    write_to_file("{}\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
}
