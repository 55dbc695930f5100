use super::*;
use crate::data::value::Value;
use crate::scale::{LinearScale, Scale};
use crate::spec::normalize::Channel;
use kurbo::PathEl;

fn props(stroke: Channel) -> LineProps {
    LineProps {
        x: Channel::Field {
            field: "x".to_owned(),
            scale: Some("x".to_owned()),
        },
        y: Channel::Field {
            field: "y".to_owned(),
            scale: Some("y".to_owned()),
        },
        stroke,
        stroke_width: 2.0,
    }
}

fn scales() -> ScaleMap {
    let mut m = ScaleMap::new();
    m.insert(
        "x".to_owned(),
        Scale::Linear(LinearScale::new([0.0, 5.0], [0.0, 500.0])),
    );
    m.insert(
        "y".to_owned(),
        Scale::Linear(LinearScale::new([0.0, 50.0], [0.0, 200.0])),
    );
    m
}

fn records(json: &str) -> Vec<Record> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn vertices_follow_record_order_through_scales() {
    let g = build_line(
        &props(Channel::Literal(Value::from("black"))),
        &records(r#"[{"x": 0, "y": 0}, {"x": 1, "y": 50}, {"x": 2, "y": 15}, {"x": 3, "y": 30}]"#),
        &scales(),
    )
    .unwrap();
    assert_eq!(g.space, Space::Chart);
    let [Primitive::Path { path, stroke }] = g.primitives.as_slice() else {
        panic!("expected one path");
    };
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo((0.0, 0.0).into()),
            PathEl::LineTo((100.0, 200.0).into()),
            PathEl::LineTo((200.0, 60.0).into()),
            PathEl::LineTo((300.0, 120.0).into()),
        ]
    );
    assert_eq!(stroke.width, 2.0);
    assert_eq!(stroke.color, "black");
}

#[test]
fn missing_values_split_the_line() {
    let g = build_line(
        &props(Channel::Literal(Value::from("red"))),
        &records(r#"[{"x": 0, "y": 0}, {"x": 1}, {"x": 2, "y": 10}, {"x": 3, "y": 20}]"#),
        &scales(),
    )
    .unwrap();
    let [Primitive::Path { path, .. }] = g.primitives.as_slice() else {
        panic!("expected one path");
    };
    let moves = path
        .elements()
        .iter()
        .filter(|e| matches!(e, PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(path.elements().len(), 3);
}

#[test]
fn empty_records_produce_no_primitives() {
    let g = build_line(
        &props(Channel::Literal(Value::from("red"))),
        &[],
        &scales(),
    )
    .unwrap();
    assert!(g.primitives.is_empty());
}
