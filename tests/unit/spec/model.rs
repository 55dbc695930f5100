use super::*;

#[test]
fn empty_document_takes_defaults() {
    let def: SpecDef = serde_json::from_str("{}").unwrap();
    assert_eq!(def.dimensions.width, 500.0);
    assert_eq!(def.dimensions.height, 200.0);
    assert!(def.data.is_empty());
    assert!(def.all_marks().is_empty());
}

#[test]
fn band_literal_domain_stays_literal() {
    let def: ScaleDef =
        serde_json::from_str(r#"{"type": "band", "name": "x", "domain": ["a", "b"]}"#).unwrap();
    assert_eq!(
        def.domain(),
        &DomainDef::Literal(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(def.range(), [0.0, 1.0]);
}

#[test]
fn data_domain_and_transforms_parse() {
    let def: SpecDef = serde_json::from_str(
        r#"{
            "data": [{
                "name": "primary",
                "values": [{"x": 1, "y": 2}],
                "transform": [
                    {"type": "map", "fn": "y * 10", "output": "value"},
                    {"type": "filter", "fn": "value > 5"},
                    {"type": "group", "by": "x"}
                ]
            }],
            "scales": [{"type": "linear", "name": "y", "domain": {"data": "primary", "field": "value"}, "range": [0, 200]}]
        }"#,
    )
    .unwrap();
    assert_eq!(def.data[0].transform.len(), 3);
    assert!(matches!(
        &def.data[0].transform[2],
        TransformDef::Group { output, op: GroupOpDef::Count, .. } if output == "count"
    ));
    assert_eq!(
        def.scales[0].domain(),
        &DomainDef::Data {
            data: "primary".to_owned(),
            field: "value".to_owned()
        }
    );
}

#[test]
fn legacy_marks_append_after_shapes() {
    let def: SpecDef = serde_json::from_str(
        r#"{
            "visual": {"shapes": [{"from": "a", "type": "bar", "properties": {"x": {"field": "k", "scale": "x"}}}]},
            "marks": [{"from": "b", "type": "line", "on": {"update": {"x": {"field": "x"}, "stroke": "red"}}}]
        }"#,
    )
    .unwrap();
    let marks = def.all_marks();
    assert_eq!(marks.len(), 2);
    assert_eq!(marks[0].0, MarkPath::Shape(0));
    assert_eq!(marks[1].0, MarkPath::Legacy(0));
    assert_eq!(marks[1].1.kind, MarkKindDef::Line);
    assert_eq!(
        marks[1].1.properties["stroke"],
        ChannelDef::Literal(Value::from("red"))
    );
    assert_eq!(marks[0].1.properties["x"].scale(), Some("x"));
}

#[test]
fn unknown_scale_type_is_rejected() {
    let res: Result<ScaleDef, _> = serde_json::from_str(r#"{"type": "sqrt", "name": "x"}"#);
    assert!(res.is_err());
}
