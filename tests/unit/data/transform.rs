use super::*;

fn records(json: &str) -> Vec<Record> {
    serde_json::from_str(json).unwrap()
}

fn map(expr: &str, output: &str) -> TransformStep {
    TransformStep::from_def(
        &TransformDef::Map {
            expr: expr.to_owned(),
            output: output.to_owned(),
        },
        "test",
    )
}

fn filter(expr: &str) -> TransformStep {
    TransformStep::from_def(
        &TransformDef::Filter {
            expr: expr.to_owned(),
        },
        "test",
    )
}

#[test]
fn map_writes_output_field_per_record() {
    let out = run_pipeline(
        &[map("y * 10", "value")],
        &records(r#"[{"y": 1}, {"y": 2.5}]"#),
    );
    assert_eq!(out[0]["value"], Value::Number(10.0));
    assert_eq!(out[1]["value"], Value::Number(25.0));
    assert_eq!(out[1]["y"], Value::Number(2.5));
}

#[test]
fn map_failure_empties_only_that_record() {
    let out = run_pipeline(
        &[map("10 / y", "value")],
        &records(r#"[{"y": 2}, {"y": 0}, {"y": "a"}, {"y": 5}]"#),
    );
    assert_eq!(out.len(), 4);
    assert_eq!(out[0]["value"], Value::Number(5.0));
    assert_eq!(out[1]["value"], Value::Empty);
    assert_eq!(out[2]["value"], Value::Empty);
    assert_eq!(out[3]["value"], Value::Number(2.0));
}

#[test]
fn unparsable_map_empties_every_record() {
    let step = map("y *", "value");
    assert!(matches!(
        step,
        TransformStep::Map {
            expr: CompiledExpr::Broken,
            ..
        }
    ));
    let out = run_pipeline(&[step], &records(r#"[{"y": 1}, {"y": 2}]"#));
    assert!(out.iter().all(|r| r["value"] == Value::Empty));
}

#[test]
fn filter_keeps_truthy_and_drops_errors() {
    let out = run_pipeline(
        &[filter("a > 2")],
        &records(r#"[{"a": 1}, {"a": 3}, {"a": "x"}, {}, {"a": 7}]"#),
    );
    let kept: Vec<f64> = out.iter().filter_map(|r| r["a"].as_number()).collect();
    assert_eq!(kept, vec![3.0, 7.0]);
}

#[test]
fn group_counts_in_first_appearance_order() {
    let step = TransformStep::from_def(
        &TransformDef::Group {
            by: "k".to_owned(),
            op: GroupOpDef::Count,
            output: "n".to_owned(),
        },
        "test",
    );
    let out = run_pipeline(
        &[step],
        &records(r#"[{"k": "b"}, {"k": "a"}, {"k": "b"}, {"k": null}, {"k": "b"}]"#),
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["k"], Value::from("b"));
    assert_eq!(out[0]["n"], Value::Number(3.0));
    assert_eq!(out[1]["k"], Value::from("a"));
    assert_eq!(out[1]["n"], Value::Number(1.0));
}

#[test]
fn steps_run_in_declared_order() {
    let out = run_pipeline(
        &[map("y * 10", "value"), filter("value >= 20")],
        &records(r#"[{"y": 1}, {"y": 2}, {"y": 3}]"#),
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["value"], Value::Number(20.0));
}

#[test]
fn deeply_nested_map_is_broken_not_fatal() {
    let expr = format!("{}y{}", "(".repeat(600), ")".repeat(600));
    let step = map(&expr, "value");
    assert!(matches!(
        step,
        TransformStep::Map {
            expr: CompiledExpr::Broken,
            ..
        }
    ));
    let out = run_pipeline(&[step], &records(r#"[{"y": 1}]"#));
    assert_eq!(out[0]["value"], Value::Empty);
    assert_eq!(out[0]["y"], Value::Number(1.0));
}
