use super::*;
use crate::data::value::Value;
use crate::scale::{LinearScale, Scale};
use approx::assert_relative_eq;

fn field(name: &str, scale: Option<&str>) -> Option<Channel> {
    Some(Channel::Field {
        field: name.to_owned(),
        scale: scale.map(str::to_owned),
    })
}

fn scales(padding: f64) -> ScaleMap {
    let mut m = ScaleMap::new();
    m.insert(
        "band".to_owned(),
        Scale::Band(BandScale::new(
            ["a".to_owned(), "b".to_owned()],
            [0.0, 200.0],
            padding,
        )),
    );
    m.insert(
        "lin".to_owned(),
        Scale::Linear(LinearScale::new([0.0, 10.0], [0.0, 100.0])),
    );
    m
}

fn records(json: &str) -> Vec<Record> {
    serde_json::from_str(json).unwrap()
}

fn rects(g: &MarkGeometry) -> Vec<(Rect, String)> {
    g.primitives
        .iter()
        .map(|p| match p {
            Primitive::Rect { rect, fill } => (*rect, fill.clone()),
            other => panic!("unexpected primitive {other:?}"),
        })
        .collect()
}

#[test]
fn vertical_bars_fill_band_and_grow_from_zero() {
    let props = BarProps {
        x: field("k", Some("band")),
        y: field("v", Some("lin")),
        width: None,
        height: None,
        fill: Channel::Literal(Value::from("steelblue")),
    };
    let g = build_bar(&props, &records(r#"[{"k": "a", "v": 5}, {"k": "b", "v": 10}]"#), &scales(0.0))
        .unwrap();
    let rs = rects(&g);
    assert_eq!(rs.len(), 2);
    assert_eq!(rs[0].0, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(rs[1].0, Rect::new(100.0, 0.0, 200.0, 100.0));
    assert_eq!(rs[0].1, "steelblue");
}

#[test]
fn explicit_width_is_capped_by_band_and_centered() {
    let props = BarProps {
        x: field("k", Some("band")),
        y: None,
        width: Some(Channel::Literal(Value::Number(500.0))),
        height: field("v", None),
        fill: Channel::Literal(Value::from("black")),
    };
    let g = build_bar(&props, &records(r#"[{"k": "b", "v": 7}]"#), &scales(0.2)).unwrap();
    let (rect, _) = rects(&g)[0].clone();
    assert_relative_eq!(rect.x0, 110.0);
    assert_relative_eq!(rect.width(), 80.0);
    assert_relative_eq!(rect.height(), 7.0);

    let props = BarProps {
        width: Some(Channel::Literal(Value::Number(40.0))),
        ..props
    };
    let g = build_bar(&props, &records(r#"[{"k": "b", "v": 7}]"#), &scales(0.2)).unwrap();
    let (rect, _) = rects(&g)[0].clone();
    assert_relative_eq!(rect.x0, 130.0);
    assert_relative_eq!(rect.width(), 40.0);
}

#[test]
fn band_on_y_makes_bars_horizontal() {
    let props = BarProps {
        x: field("v", Some("lin")),
        y: field("k", Some("band")),
        width: None,
        height: None,
        fill: Channel::Field {
            field: "c".to_owned(),
            scale: None,
        },
    };
    let g = build_bar(&props, &records(r#"[{"k": "b", "v": 3, "c": "red"}]"#), &scales(0.0))
        .unwrap();
    let rs = rects(&g);
    assert_eq!(rs[0].0, Rect::new(0.0, 100.0, 30.0, 200.0));
    assert_eq!(rs[0].1, "red");
}

#[test]
fn unresolvable_records_are_skipped() {
    let props = BarProps {
        x: field("k", Some("band")),
        y: field("v", None),
        width: None,
        height: None,
        fill: Channel::Literal(Value::from("black")),
    };
    let g = build_bar(
        &props,
        &records(r#"[{"k": "zzz", "v": 1}, {"k": "a"}, {"k": "a", "v": 2}]"#),
        &scales(0.0),
    )
    .unwrap();
    assert_eq!(g.primitives.len(), 1);
}

#[test]
fn baseline_comes_from_y_when_height_is_given() {
    let props = BarProps {
        x: field("k", Some("band")),
        y: field("lo", None),
        width: None,
        height: field("h", None),
        fill: Channel::Literal(Value::from("black")),
    };
    let g = build_bar(&props, &records(r#"[{"k": "a", "lo": 20, "h": 30}]"#), &scales(0.0))
        .unwrap();
    assert_eq!(rects(&g)[0].0, Rect::new(0.0, 20.0, 100.0, 50.0));
}
