use super::*;

#[test]
fn default_dimensions_match_spec_defaults() {
    let d = Dimensions::default();
    assert_eq!(d.width, 500.0);
    assert_eq!(d.height, 200.0);
}

#[test]
fn new_rejects_non_positive_sizes() {
    assert!(Dimensions::new(0.0, 10.0).is_err());
    assert!(Dimensions::new(10.0, -1.0).is_err());
    assert!(Dimensions::new(f64::NAN, 10.0).is_err());
    assert!(Dimensions::new(10.0, 20.0).is_ok());
}

#[test]
fn flip_y_maps_bottom_to_height() {
    let d = Dimensions::new(300.0, 100.0).unwrap();
    assert_eq!(d.flip_y(0.0), 100.0);
    assert_eq!(d.flip_y(100.0), 0.0);
    assert_eq!(d.center(), Point::new(150.0, 50.0));
    assert_eq!(d.half_min_side(), 50.0);
}
