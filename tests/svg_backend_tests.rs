use barchart_rs::core::Viewport;
use barchart_rs::render::{
    Color, RectPrimitive, RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive,
};
use barchart_rs::{BarChart, BarChartError, DataPoint};

#[test]
fn rendered_frame_becomes_one_svg_element_per_call() {
    let mut renderer = SvgRenderer::with_containers(["#chart"]);
    let frame = RenderFrame::new(Viewport::new(420, 40))
        .with_rect(RectPrimitive::new(0.0, 0.0, 40.0, 19.0, Color::rgb(0.3, 0.5, 0.7)))
        .with_rect(RectPrimitive::new(0.0, 20.0, 80.0, 19.0, Color::rgb(0.3, 0.5, 0.7)));

    renderer.render("#chart", &frame).expect("render");

    let markup = renderer.container_markup("#chart").expect("container");
    assert!(markup.starts_with(r#"<svg width="420" height="40""#));
    assert_eq!(markup.matches("<rect ").count(), 2);
    assert!(markup.trim_end().ends_with("</svg>"));
}

#[test]
fn labels_are_xml_escaped() {
    let mut renderer = SvgRenderer::with_containers(["#chart"]);
    let frame = RenderFrame::new(Viewport::new(100, 20)).with_text(TextPrimitive::new(
        "A<B & \"C\"",
        10.0,
        10.0,
        11.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));

    renderer.render("#chart", &frame).expect("render");

    let markup = renderer.container_markup("#chart").expect("container");
    assert!(markup.contains("A&lt;B &amp; &quot;C&quot;"));
    assert!(!markup.contains("A<B"));
}

#[test]
fn bar_fill_serializes_as_css_rgb() {
    let data: Vec<DataPoint> = [4.0, 8.0].iter().copied().map(DataPoint::value).collect();
    let mut chart =
        BarChart::new(SvgRenderer::with_containers(["#chart"]), "#chart");
    chart.render_value_boxes(&data).expect("render");

    let markup = chart
        .renderer()
        .container_markup("#chart")
        .expect("container");
    assert!(markup.contains(r#"fill="rgb(70,130,180)""#));
}

#[test]
fn value_labels_have_no_trailing_fraction() {
    let data: Vec<DataPoint> = [4.0, 42.0].iter().copied().map(DataPoint::value).collect();
    let mut chart =
        BarChart::new(SvgRenderer::with_containers(["#chart"]), "#chart");
    chart.render_value_boxes(&data).expect("render");

    let markup = chart
        .renderer()
        .container_markup("#chart")
        .expect("container");
    assert!(markup.contains(">4</text>"));
    assert!(markup.contains(">42</text>"));
    assert!(!markup.contains("4.0<"));
}

#[test]
fn rendering_into_an_unknown_container_fails_and_writes_nothing() {
    let mut renderer = SvgRenderer::with_containers(["#chart"]);
    let frame = RenderFrame::new(Viewport::new(100, 20));

    let err = renderer.render("#other", &frame).expect_err("must fail");
    assert!(matches!(err, BarChartError::InvalidContainer(_)));
    assert_eq!(renderer.container_markup("#chart"), Some(""));
    assert!(renderer.container_markup("#other").is_none());
}

#[test]
fn invalid_frames_are_rejected_before_serialization() {
    let mut renderer = SvgRenderer::with_containers(["#chart"]);
    let frame = RenderFrame::new(Viewport::new(0, 20));

    let err = renderer.render("#chart", &frame).expect_err("must fail");
    assert!(matches!(err, BarChartError::InvalidViewport { width: 0, .. }));
}
