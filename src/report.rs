use itertools::Itertools;
use std::fmt::Write as _;
use std::io::Write as _;

use crate::errors::Result;
use crate::models::{FieldValue, HealthDocument, HealthStatus};

const BANNER: &str = "=== Elasticsearch Cluster Health ===";
const INTERPRETATION_BANNER: &str = "=== Health Status Interpretation ===";

/// 渲染健康报告并写到标准输出。
pub fn display(doc: &HealthDocument, status: &str) -> Result<()> {
    let report = render(doc, status);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// 渲染健康报告，任何输入都有确定的输出。
pub fn render(doc: &HealthDocument, status: &str) -> String {
    let mut out = String::new();
    // 写入 String 不会失败
    let _ = write_report(&mut out, doc, status);

    out
}

fn write_report(out: &mut String, doc: &HealthDocument, status: &str) -> std::fmt::Result {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Status: {}", status_with_color(status))?;
    for (key, value) in doc.fields() {
        writeln!(out, "{}", render_field(key, value))?;
    }

    writeln!(out)?;
    writeln!(out, "{INTERPRETATION_BANNER}")?;
    writeln!(out, "{}", interpretation(status))?;
    if let Some(count) = doc.unassigned_shards() {
        writeln!(out, "⚠️  Warning: {count:.0} unassigned shards detected")?;
    }

    Ok(())
}

pub fn status_with_color(status: &str) -> String {
    match HealthStatus::from(status) {
        HealthStatus::Green => format!("🟢 {status}"),
        HealthStatus::Yellow => format!("🟡 {status}"),
        HealthStatus::Red => format!("🔴 {status}"),
        HealthStatus::Other(other) => other.to_string(),
    }
}

pub fn interpretation(status: &str) -> String {
    match HealthStatus::from(status) {
        HealthStatus::Green => {
            "✅ All shards are allocated and the cluster is fully operational".to_string()
        }
        HealthStatus::Yellow => {
            "⚠️  All primary shards are allocated, but some replica shards are not".to_string()
        }
        HealthStatus::Red => "❌ Some primary shards are not allocated".to_string(),
        HealthStatus::Other(other) => format!("❓ Unknown status: {other}"),
    }
}

pub fn render_field(key: &str, value: &FieldValue) -> String {
    format!("{}: {value}", format_field_name(key))
}

/// 将蛇形命名转换为首字母大写的单词，如 `unassigned_shards` -> `Unassigned Shards`。
pub fn format_field_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(json: &str) -> HealthDocument {
        json.parse().unwrap()
    }

    fn lines(report: &str) -> Vec<&str> {
        report.lines().collect()
    }

    #[test]
    fn test_format_field_name() {
        assert_eq!(format_field_name("unassigned_shards"), "Unassigned Shards");
        assert_eq!(format_field_name("number_of_nodes"), "Number Of Nodes");
        assert_eq!(format_field_name("CLUSTER_NAME"), "Cluster Name");
        assert_eq!(format_field_name("timed_out"), "Timed Out");
        // 连续或首尾的下划线不产生多余空格
        assert_eq!(format_field_name("a__b"), "A B");
        assert_eq!(format_field_name("_private_"), "Private");
        assert_eq!(format_field_name("___"), "");
        assert_eq!(format_field_name(""), "");
        // 非 ASCII 字符
        assert_eq!(format_field_name("élan_vital"), "Élan Vital");
    }

    #[test]
    fn test_format_field_name_idempotent() {
        for name in ["Active", "Status", "Foo", "X"] {
            assert_eq!(format_field_name(name), name);
            assert_eq!(format_field_name(&format_field_name(name)), name);
        }
    }

    #[test]
    fn test_status_with_color() {
        assert_eq!(status_with_color("green"), "🟢 green");
        assert_eq!(status_with_color("yellow"), "🟡 yellow");
        assert_eq!(status_with_color("red"), "🔴 red");
        assert_eq!(status_with_color("unknown"), "unknown");
        assert_eq!(status_with_color("Green"), "Green");
        assert_eq!(status_with_color(""), "");
    }

    #[test]
    fn test_interpretation() {
        assert!(interpretation("green").contains("fully operational"));
        assert!(interpretation("yellow").contains("some replica shards are not"));
        assert!(interpretation("red").contains("primary shards are not allocated"));
        assert_eq!(interpretation("purple"), "❓ Unknown status: purple");
    }

    #[test]
    fn test_render_field() {
        assert_eq!(
            render_field("number_of_nodes", &FieldValue::Integer(3)),
            "Number Of Nodes: 3"
        );
        assert_eq!(
            render_field("active_shards_percent_as_number", &FieldValue::Float(3.14159)),
            "Active Shards Percent As Number: 3.14"
        );
        assert_eq!(render_field("foo", &FieldValue::Null), "Foo: <null>");
        assert_eq!(
            render_field("tags", &FieldValue::Composite(r#"["a","b"]"#.into())),
            r#"Tags: ["a","b"]"#
        );
    }

    #[test]
    fn test_render() {
        let report = render(
            &doc(r#"{"status":"yellow","number_of_nodes":3,"unassigned_shards":2.0,"active":true,"foo":null}"#),
            "yellow",
        );
        assert_eq!(
            lines(&report),
            vec![
                "=== Elasticsearch Cluster Health ===",
                "Status: 🟡 yellow",
                "Active: true",
                "Foo: <null>",
                "Number Of Nodes: 3",
                "Unassigned Shards: 2",
                "",
                "=== Health Status Interpretation ===",
                "⚠️  All primary shards are allocated, but some replica shards are not",
                "⚠️  Warning: 2 unassigned shards detected",
            ]
        );
    }

    #[test]
    fn test_render_green() {
        let report = render(
            &doc(r#"{"cluster_name":"prod","status":"green","unassigned_shards":0}"#),
            "green",
        );
        assert_eq!(
            lines(&report),
            vec![
                "=== Elasticsearch Cluster Health ===",
                "Status: 🟢 green",
                "Cluster Name: prod",
                "Unassigned Shards: 0",
                "",
                "=== Health Status Interpretation ===",
                "✅ All shards are allocated and the cluster is fully operational",
            ]
        );
    }

    #[test]
    fn test_render_unknown_status() {
        let d = doc(r#"{"status":{"nested":true},"indices":{"logs":{"status":"red"}}}"#);
        let report = render(&d, d.status());
        assert_eq!(
            lines(&report),
            vec![
                "=== Elasticsearch Cluster Health ===",
                "Status: unknown",
                r#"Indices: {"logs":{"status":"red"}}"#,
                "",
                "=== Health Status Interpretation ===",
                "❓ Unknown status: unknown",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let report = render(&HealthDocument::default(), "");
        assert_eq!(
            lines(&report),
            vec![
                "=== Elasticsearch Cluster Health ===",
                "Status: ",
                "",
                "=== Health Status Interpretation ===",
                "❓ Unknown status: ",
            ]
        );
    }

    #[test]
    fn test_unassigned_shards_warning() {
        let warning = |json: &str| {
            render(&doc(json), "red")
                .lines()
                .find(|line| line.contains("Warning"))
                .map(str::to_string)
        };
        assert_eq!(
            warning(r#"{"unassigned_shards": 3}"#).as_deref(),
            Some("⚠️  Warning: 3 unassigned shards detected")
        );
        // 小数只影响显示
        assert_eq!(
            warning(r#"{"unassigned_shards": 4.2}"#).as_deref(),
            Some("⚠️  Warning: 4 unassigned shards detected")
        );
        assert_eq!(warning(r#"{"unassigned_shards": 0}"#), None);
        assert_eq!(warning(r#"{"unassigned_shards": -1}"#), None);
        assert_eq!(warning(r#"{"unassigned_shards": "3"}"#), None);
        assert_eq!(warning(r#"{}"#), None);
    }

    #[test]
    fn test_render_deterministic() {
        let a = doc(r#"{"zeta":1,"alpha":2,"Mid":3,"status":"green"}"#);
        let b = doc(r#"{"status":"green","Mid":3,"alpha":2,"zeta":1}"#);
        assert_eq!(render(&a, "green"), render(&b, "green"));
        let report = render(&a, "green");
        let fields = &lines(&report)[2..5];
        assert_eq!(fields, ["Mid: 3", "Alpha: 2", "Zeta: 1"]);
    }

    #[test]
    fn test_render_fixture() {
        let bytes = std::fs::read("tests/fixtures/cluster_health.json")
            .expect("Failed to read fixture");
        let d = HealthDocument::from_slice(&bytes).unwrap();
        let report = render(&d, d.status());

        assert!(report.contains("Status: 🟡 yellow\n"));
        assert!(report.contains("Cluster Name: elasticsearch\n"));
        assert!(report.contains("Timed Out: false\n"));
        assert!(report.contains("Active Shards Percent As Number: 83.33\n"));
        assert!(report.ends_with("⚠️  Warning: 2 unassigned shards detected\n"));
        // 除状态外每个字段一行
        assert_eq!(lines(&report).len(), 2 + (d.len() - 1) + 4);
    }
}
