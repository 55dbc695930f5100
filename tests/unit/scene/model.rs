use super::*;
use kurbo::PathEl;
use std::f64::consts::PI;

fn sector(inner: f64, sweep: f64) -> Sector {
    Sector {
        center: Point::new(50.0, 50.0),
        inner_radius: inner,
        outer_radius: 40.0,
        start_angle: -PI / 2.0,
        sweep_angle: sweep,
        fill: "#1F77B4".to_owned(),
    }
}

#[test]
fn wedge_path_starts_at_center_and_reaches_twelve_oclock() {
    let path = sector(0.0, PI / 2.0).to_path(0.1);
    let els: Vec<PathEl> = path.elements().to_vec();
    let PathEl::MoveTo(p) = els[0] else {
        panic!("expected move-to, got {:?}", els[0]);
    };
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 50.0).abs() < 1e-9);
    let bbox = path.bounding_box();
    assert!((bbox.y0 - 10.0).abs() < 1e-6);
    assert!((bbox.x1 - 90.0).abs() < 1e-6);
}

#[test]
fn annular_sector_bounds_stay_inside_outer_radius() {
    let bbox = sector(20.0, PI).to_path(0.1).bounding_box();
    assert!(bbox.x0 >= 50.0 - 0.1);
    assert!(bbox.x1 <= 90.0 + 0.1);
    assert!(bbox.y0 >= 10.0 - 0.1);
    assert!(bbox.y1 <= 90.0 + 0.1);
}

#[test]
fn primitive_count_sums_marks() {
    let scene = Scene {
        dimensions: Dimensions::default(),
        marks: vec![
            MarkGeometry {
                kind: MarkKind::Point,
                space: Space::Chart,
                primitives: vec![
                    Primitive::Circle {
                        center: Point::ZERO,
                        radius: 1.0,
                        fill: "red".to_owned(),
                    };
                    3
                ],
            },
            MarkGeometry {
                kind: MarkKind::Pie,
                space: Space::Screen,
                primitives: vec![Primitive::Sector(sector(0.0, 1.0))],
            },
        ],
        axes: Vec::new(),
    };
    assert_eq!(scene.primitive_count(), 4);
}

#[test]
fn names_round_trip_spec_vocabulary() {
    assert_eq!(MarkKind::Pie.as_str(), "pie");
    assert_eq!(Orientation::Left.as_str(), "left");
    assert!(Orientation::Top.is_horizontal());
    assert!(!Orientation::Right.is_horizontal());
}
