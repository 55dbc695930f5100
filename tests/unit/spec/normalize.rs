use super::*;

fn model(json: &str) -> ChartModel {
    normalize(&serde_json::from_str(json).unwrap()).unwrap()
}

#[test]
fn line_defaults_apply() {
    let m = model(
        r#"{"data": [{"name": "d"}],
            "visual": {"shapes": [{"from": "d", "type": "line", "properties": {
                "x": {"field": "a", "scale": "x"}, "y": {"field": "b"}}}]}}"#,
    );
    let MarkProps::Line(p) = &m.marks[0].props else {
        panic!("expected line");
    };
    assert_eq!(p.stroke, Channel::Literal(Value::from("black")));
    assert_eq!(p.stroke_width, 1.0);
    assert_eq!(m.marks[0].scales(), vec!["x"]);
    assert_eq!(m.marks[0].kind(), MarkKind::Line);
}

#[test]
fn legacy_and_shape_forms_normalize_identically() {
    let a = model(
        r#"{"data": [{"name": "d"}],
            "visual": {"shapes": [{"from": "d", "type": "pie", "properties": {
                "value": {"field": "v"}, "padAngle": 0.02, "innerRadius": 10}}]}}"#,
    );
    let b = model(
        r#"{"data": [{"name": "d"}],
            "marks": [{"from": "d", "type": "pie", "on": {"update": {
                "value": {"field": "v"}, "padAngle": 0.02, "innerRadius": 10}}}]}"#,
    );
    assert_eq!(a.marks, b.marks);
    let MarkProps::Pie(p) = &a.marks[0].props else {
        panic!("expected pie");
    };
    assert_eq!(p.pad_angle, 0.02);
    assert_eq!(p.inner_radius, 10.0);
    assert_eq!(p.outer_radius, None);
}

#[test]
fn axes_and_dimensions_carry_over() {
    let m = model(
        r#"{"dimensions": {"width": 300, "height": 120},
            "scales": [{"type": "band", "name": "x", "domain": ["a"]}],
            "visual": {"axes": [{"orientation": "right", "scale": "x"}]}}"#,
    );
    assert_eq!(m.dimensions.width, 300.0);
    assert_eq!(m.axes[0].orientation, Orientation::Right);
    assert_eq!(m.scales[0].name, "x");
}

#[test]
fn bar_scales_are_deduplicated() {
    let m = model(
        r#"{"data": [{"name": "d"}],
            "visual": {"shapes": [{"from": "d", "type": "bar", "properties": {
                "x": {"field": "k", "scale": "x"},
                "y": {"field": "v", "scale": "y"},
                "height": {"field": "v", "scale": "y"}}}]}}"#,
    );
    assert_eq!(m.marks[0].scales(), vec!["x", "y"]);
}
