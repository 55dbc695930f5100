use super::*;
use crate::data::value::records_from_json;
use crate::foundation::error::ChartError;
use crate::render::{Document, MountTarget};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const SPEC: &str = r#"{
  "dimensions": {"width": 500, "height": 200},
  "data": [
    {"name": "table", "values": [{"x": 0, "y": 0}, {"x": 1, "y": 50}, {"x": 2, "y": 15}, {"x": 3, "y": 30}]},
    {"name": "pos", "values": [{"k": 1, "v": 1}, {"k": 2, "v": 10}]}
  ],
  "scales": [
    {"name": "x", "type": "linear", "domain": [0, 5], "range": [0, 500]},
    {"name": "y", "type": "linear", "domain": [0, 50], "range": [0, 200]},
    {"name": "ly", "type": "log", "domain": {"data": "pos", "field": "v"}, "range": [0, 200]}
  ],
  "visual": {
    "axes": [{"orientation": "bottom", "scale": "x"}, {"orientation": "left", "scale": "ly"}],
    "shapes": [
      {"from": "table", "type": "line", "properties": {
        "x": {"field": "x", "scale": "x"}, "y": {"field": "y", "scale": "y"}}},
      {"from": "pos", "type": "point", "properties": {
        "x": {"field": "k", "scale": "x"}, "y": {"field": "v", "scale": "ly"}}}
    ]
  }
}"#;

#[derive(Default)]
struct CountingMount {
    writes: AtomicUsize,
}

impl MountTarget for CountingMount {
    fn mount(&self, selector: &str, _markup: &str) -> ChartResult<()> {
        if selector != "#c" {
            return Err(ChartError::target_not_found(selector));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn counting_target() -> (Arc<CountingMount>, RenderTarget) {
    let counter = Arc::new(CountingMount::default());
    let target = RenderTarget::Container {
        mount: counter.clone(),
        selector: "#c".to_owned(),
    };
    (counter, target)
}

#[tokio::test]
async fn render_binds_container_and_set_data_redraws_into_it() {
    let view = View::build(SPEC).unwrap();
    let doc = Document::new();
    doc.add_container("#chart").unwrap();

    let out = view
        .render_as_svg(RenderTarget::container(&doc, "#chart"))
        .await
        .unwrap();
    assert!(out.written);
    assert_eq!(doc.contents("#chart"), Some(out.markup.clone()));
    assert!(out.markup.contains(r#"d="M0 0 L100 200 L200 60 L300 120""#));
    assert_eq!(view.bound_selector().await.as_deref(), Some("#chart"));

    let values = records_from_json(r#"[{"x": 0, "y": 10}, {"x": 5, "y": 50}]"#).unwrap();
    view.set_data("table", values).await.unwrap();
    let redrawn = doc.contents("#chart").unwrap();
    assert!(redrawn.contains(r#"d="M0 40 L500 200""#));
    assert_eq!(redrawn, view.svg().await);
}

#[tokio::test]
async fn unchanged_markup_skips_the_container_write() {
    let view = View::build(SPEC).unwrap();
    let (counter, target) = counting_target();
    view.render_as_svg(target).await.unwrap();
    assert_eq!(counter.writes.load(Ordering::SeqCst), 1);

    let same = records_from_json(r#"[{"x": 0, "y": 0}, {"x": 1, "y": 50}, {"x": 2, "y": 15}, {"x": 3, "y": 30}]"#)
        .unwrap();
    view.set_data("table", same).await.unwrap();
    assert_eq!(counter.writes.load(Ordering::SeqCst), 1);

    view.set_data("table", Vec::new()).await.unwrap();
    assert_eq!(counter.writes.load(Ordering::SeqCst), 2);
    view.set_data("table", Vec::new()).await.unwrap();
    assert_eq!(counter.writes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unknown_source_is_rejected_without_side_effects() {
    let view = View::build(SPEC).unwrap();
    let before = view.scene().await;
    let err = view.set_data("nope", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ChartError::DataSourceNotFound(ref n) if n == "nope"));
    assert_eq!(view.scene().await, before);
}

#[tokio::test]
async fn failed_rescale_keeps_previous_scene_and_container() {
    let view = View::build(SPEC).unwrap();
    let doc = Document::new();
    doc.add_container("#chart").unwrap();
    view.render_as_svg(RenderTarget::container(&doc, "#chart"))
        .await
        .unwrap();
    let scene = view.scene().await;
    let markup = doc.contents("#chart");

    let bad = records_from_json(r#"[{"k": 1, "v": -1}, {"k": 2, "v": 5}]"#).unwrap();
    let err = view.set_data("pos", bad).await.unwrap_err();
    assert!(matches!(err, ChartError::ScaleDomain(_)));
    assert_eq!(view.scene().await, scene);
    assert_eq!(doc.contents("#chart"), markup);
}

#[tokio::test]
async fn only_dependents_are_rebuilt() {
    let view = View::build(SPEC).unwrap();
    let before = view.scene().await;
    let values = records_from_json(r#"[{"k": 1, "v": 100}]"#).unwrap();
    view.set_data("pos", values).await.unwrap();
    let after = view.scene().await;
    assert_eq!(after.marks[0], before.marks[0]);
    assert_ne!(after.marks[1], before.marks[1]);
    assert_eq!(after.axes[0], before.axes[0]);
    assert_ne!(after.axes[1], before.axes[1]);
}

#[tokio::test]
async fn markup_target_returns_markup_without_binding() {
    let view = View::build(SPEC).unwrap();
    let out = view.render_as_svg(RenderTarget::Markup).await.unwrap();
    assert!(!out.written);
    assert!(out.markup.starts_with("<svg"));
    assert_eq!(view.bound_selector().await, None);
}

#[tokio::test]
async fn missing_container_is_target_not_found() {
    let view = View::build(SPEC).unwrap();
    let (counter, _) = counting_target();
    let target = RenderTarget::Container {
        mount: counter.clone(),
        selector: "#elsewhere".to_owned(),
    };
    let err = view.render_as_svg(target).await.unwrap_err();
    assert!(matches!(err, ChartError::TargetNotFound(_)));
    assert_eq!(view.bound_selector().await, None);
    assert_eq!(counter.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn build_rejects_invalid_documents() {
    assert!(matches!(View::build("{"), Err(ChartError::Parse(_))));
    let dangling = r#"{"data": [], "visual": {"shapes": [{"from": "gone", "type": "point",
        "properties": {"x": 1, "y": 2}}]}}"#;
    assert!(matches!(View::build(dangling), Err(ChartError::Validation(_))));
    let bad_log = r#"{"scales": [{"name": "l", "type": "log", "domain": [0, 10]}]}"#;
    assert!(matches!(View::build(bad_log), Err(ChartError::ScaleDomain(_))));
}

#[test]
fn view_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<View>();
}
