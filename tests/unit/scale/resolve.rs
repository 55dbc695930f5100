use super::*;
use crate::spec::model::DataDef;

fn spec(json: &str) -> ScaleSpec {
    ScaleSpec::from_def(&serde_json::from_str::<ScaleDef>(json).unwrap())
}

fn sources(json: &str) -> BTreeMap<String, DataSource> {
    let defs: Vec<DataDef> = serde_json::from_str(json).unwrap();
    defs.iter()
        .map(|d| (d.name.clone(), DataSource::from_def(d)))
        .collect()
}

#[test]
fn literal_linear_domain_resolves() {
    let s = resolve_scale(
        &spec(r#"{"type": "linear", "name": "x", "domain": [0, 5], "range": [0, 500]}"#),
        &BTreeMap::new(),
    )
    .unwrap();
    assert_eq!(s.kind(), ScaleKind::Linear);
    assert_eq!(s.map(&Value::Number(1.0)).unwrap(), Some(100.0));
}

#[test]
fn derived_linear_domain_spans_min_max() {
    let src = sources(r#"[{"name": "d", "values": [{"v": 4}, {"v": -2}, {"v": "x"}, {"v": 10}]}]"#);
    let s = resolve_scale(
        &spec(r#"{"type": "linear", "name": "y", "domain": {"data": "d", "field": "v"}, "range": [0, 12]}"#),
        &src,
    )
    .unwrap();
    let Scale::Linear(lin) = s else {
        panic!("expected linear");
    };
    assert_eq!(lin.domain(), [-2.0, 10.0]);
}

#[test]
fn empty_source_gives_zero_domain_and_no_bands() {
    let src = sources(r#"[{"name": "d", "values": []}]"#);
    let lin = resolve_scale(
        &spec(r#"{"type": "linear", "name": "y", "domain": {"data": "d", "field": "v"}}"#),
        &src,
    )
    .unwrap();
    assert_eq!(lin, Scale::Linear(LinearScale::new([0.0, 0.0], [0.0, 1.0])));

    let band = resolve_scale(
        &spec(r#"{"type": "band", "name": "x", "domain": {"data": "d", "field": "k"}}"#),
        &src,
    )
    .unwrap();
    assert!(band.as_band().unwrap().is_empty());

    let log = resolve_scale(
        &spec(r#"{"type": "log", "name": "l", "domain": {"data": "d", "field": "v"}}"#),
        &src,
    )
    .unwrap();
    assert_eq!(log, Scale::Log(LogScale::empty([0.0, 1.0])));
}

#[test]
fn log_with_non_positive_bound_is_a_domain_error() {
    let err = resolve_scale(
        &spec(r#"{"type": "log", "name": "l", "domain": [0, 100]}"#),
        &BTreeMap::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::ScaleDomain(ref m) if m.contains("'l'")));

    let src = sources(r#"[{"name": "d", "values": [{"v": -1}, {"v": 10}]}]"#);
    let err = resolve_scale(
        &spec(r#"{"type": "log", "name": "l", "domain": {"data": "d", "field": "v"}}"#),
        &src,
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::ScaleDomain(_)));
}

#[test]
fn derived_band_uses_first_appearance_order() {
    let src = sources(r#"[{"name": "d", "values": [{"k": "b"}, {"k": "a"}, {"k": "b"}]}]"#);
    let s = resolve_scale(
        &spec(r#"{"type": "band", "name": "x", "domain": {"data": "d", "field": "k"}, "range": [0, 100], "padding": 0.1}"#),
        &src,
    )
    .unwrap();
    let band = s.as_band().unwrap();
    assert_eq!(band.categories(), &["b", "a"]);
    assert_eq!(s.map(&Value::from("a")).unwrap(), Some(50.0));
}

#[test]
fn missing_source_is_reported() {
    let err = resolve_scale(
        &spec(r#"{"type": "linear", "name": "y", "domain": {"data": "nope", "field": "v"}}"#),
        &BTreeMap::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::DataSourceNotFound(_)));
}
