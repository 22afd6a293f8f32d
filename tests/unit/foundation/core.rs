use super::*;
use serde_json::json;

#[test]
fn kind_tags_roundtrip_and_reject_others() {
    for kind in GradientKind::ALL {
        assert_eq!(GradientKind::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(GradientKind::from_tag("fl"), None);
    assert_eq!(GradientKind::from_tag("GF"), None);
    assert_eq!(GradientKind::from_tag(""), None);
}

#[test]
fn kind_prefixes_match_naming_scheme() {
    assert_eq!(GradientKind::Fill.name_prefix(), "Gradient_Fill_");
    assert_eq!(GradientKind::Stroke.name_prefix(), "Gradient_Stroke_");
}

#[test]
fn kind_serializes_as_tag() {
    assert_eq!(serde_json::to_value(GradientKind::Fill).unwrap(), json!("gf"));
    assert_eq!(
        serde_json::from_value::<GradientKind>(json!("gs")).unwrap(),
        GradientKind::Stroke
    );
}

#[test]
fn counts_record_per_kind() {
    let mut c = KindCounts::default();
    c.record(GradientKind::Fill);
    c.record(GradientKind::Fill);
    c.record(GradientKind::Stroke);
    assert_eq!(c, KindCounts { fill: 2, stroke: 1 });
    assert_eq!(c.get(GradientKind::Fill), 2);
    assert_eq!(c.total(), 3);
}

#[test]
fn traversable_roots() {
    assert!(ensure_traversable(&json!({})).is_ok());
    assert!(ensure_traversable(&json!([])).is_ok());
    for bad in [json!(null), json!(1), json!("x"), json!(true)] {
        let err = ensure_traversable(&bad).unwrap_err();
        assert!(matches!(err, GradsyncError::InvalidRoot(_)));
    }
}
