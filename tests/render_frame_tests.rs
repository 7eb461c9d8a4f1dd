use barchart_rs::BarChartError;
use barchart_rs::core::Viewport;
use barchart_rs::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

#[test]
fn fresh_frame_is_empty_and_valid() {
    let frame = RenderFrame::new(Viewport::new(420, 120));

    assert!(frame.is_empty());
    frame.validate().expect("valid");
}

#[test]
fn frame_validation_rejects_zero_viewport() {
    let frame = RenderFrame::new(Viewport::new(420, 0));

    assert!(matches!(
        frame.validate(),
        Err(BarChartError::InvalidViewport { height: 0, .. })
    ));
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let bad_rect = RenderFrame::new(Viewport::new(420, 120)).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        -1.0,
        10.0,
        Color::rgb(0.5, 0.5, 0.5),
    ));
    assert!(matches!(
        bad_rect.validate(),
        Err(BarChartError::InvalidData(_))
    ));

    let bad_line = RenderFrame::new(Viewport::new(420, 120)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        0.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(matches!(
        bad_line.validate(),
        Err(BarChartError::InvalidData(_))
    ));

    let bad_text = RenderFrame::new(Viewport::new(420, 120)).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        11.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(matches!(
        bad_text.validate(),
        Err(BarChartError::InvalidData(_))
    ));
}

#[test]
fn color_channels_outside_unit_range_are_invalid() {
    assert!(Color::rgb(1.5, 0.0, 0.0).validate().is_err());
    assert!(Color::rgba(0.1, 0.2, 0.3, f64::NAN).validate().is_err());
    Color::rgb(0.2, 0.4, 0.6).validate().expect("valid");
}

#[test]
fn color_lerp_interpolates_between_endpoints() {
    let start = Color::rgb(200.0 / 255.0, 0.0, 50.0 / 255.0);
    let end = Color::rgb(200.0 / 255.0, 170.0 / 255.0, 50.0 / 255.0);

    let mid = start.lerp(end, 0.5);
    assert!((mid.green - 85.0 / 255.0).abs() <= 1e-9);
    assert!((mid.red - start.red).abs() <= 1e-9);

    // Out-of-range t is clamped.
    assert_eq!(start.lerp(end, 2.0), end);
}
