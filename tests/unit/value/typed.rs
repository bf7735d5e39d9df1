use super::*;

#[test]
fn geometry_uses_the_kind_channel() {
    assert_eq!(
        TypedValue::Position(Position::new(1.0, 2.0)).channel(),
        TagChannel::Kind
    );
    assert_eq!(
        TypedValue::ArcPath(ArcPath::default()).channel(),
        TagChannel::Kind
    );
    assert_eq!(
        TypedValue::Point(Point::new(1.0, 2.0)).channel(),
        TagChannel::Type
    );
    assert_eq!(TypedValue::Range(Range::default()).tag(), "Range");
}

#[test]
fn percentage_side_is_encoded_in_tag() {
    assert_eq!(
        PercentageOfSide::shortest(0.2).tag(),
        tag::PERCENTAGE_SHORTEST_SIDE
    );
    assert_eq!(
        PercentageOfSide::longest(0.2).tag(),
        tag::PERCENTAGE_LONGEST_SIDE
    );
}

#[test]
fn percentage_resolves_against_canvas_side() {
    let canvas = CanvasDimensions::new(1080, 1920);
    assert_eq!(PercentageOfSide::shortest(0.5).resolve(canvas), 540.0);
    assert_eq!(PercentageOfSide::longest(0.25).resolve(canvas), 480.0);
}

#[test]
fn safe_default_percentage_range() {
    let r = PercentageRange::safe_default();
    assert_eq!(r.lower, PercentageOfSide::shortest(0.5));
    assert_eq!(r.upper, PercentageOfSide::longest(0.5));
}

#[test]
fn color_selection_type_parse_is_lenient() {
    assert_eq!(
        ColorSelectionType::parse("Color_Bucket"),
        Some(ColorSelectionType::ColorBucket)
    );
    assert_eq!(
        ColorSelectionType::parse("neutral-bucket"),
        Some(ColorSelectionType::NeutralBucket)
    );
    assert_eq!(ColorSelectionType::parse("gradient"), None);
    assert_eq!(
        ColorSelection::default().color_value.as_deref(),
        Some(DEFAULT_COLOR_VALUE)
    );
}

#[test]
fn arc_defaults_and_direction() {
    let arc = ArcPath::default();
    assert_eq!(arc.radius, 100.0);
    assert_eq!(arc.end_angle, 360.0);
    assert_eq!(ArcDirection::from_f64(-1.0).signum(), -1);
    assert_eq!(ArcDirection::from_f64(0.0), ArcDirection::Forward);
}

#[test]
fn metadata_names() {
    assert!(is_metadata_name("__type"));
    assert!(is_metadata_name("__hidden__"));
    assert!(!is_metadata_name("center"));
    assert!(!is_metadata_name("_private"));
}
