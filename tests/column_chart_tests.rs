use barchart_rs::core::{NamedRecord, Viewport, project_columns};
use barchart_rs::render::NullRenderer;
use barchart_rs::{BarChart, DataPoint};

fn crew_records() -> Vec<NamedRecord> {
    vec![
        NamedRecord::new("Locke", 4.0),
        NamedRecord::new("Reyes", 8.0),
        NamedRecord::new("Ford", 15.0),
        NamedRecord::new("Jarrah", 16.0),
        NamedRecord::new("Shephard", 23.0),
        NamedRecord::new("Kwon", 42.0),
    ]
}

fn crew_data() -> Vec<DataPoint> {
    crew_records()
        .into_iter()
        .map(|record| DataPoint::named(record.name, record.value))
        .collect()
}

#[test]
fn column_projection_emits_one_column_and_tick_per_record() {
    let layout = project_columns(&crew_records(), Viewport::new(890, 450), 0.1, 10)
        .expect("layout");

    assert_eq!(layout.columns.len(), 6);
    assert_eq!(layout.category_ticks.len(), 6);
    let labels: Vec<&str> = layout
        .category_ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(
        labels,
        ["Locke", "Reyes", "Ford", "Jarrah", "Shephard", "Kwon"]
    );
}

#[test]
fn column_heights_are_proportional_to_values() {
    let layout = project_columns(&crew_records(), Viewport::new(890, 450), 0.1, 10)
        .expect("layout");

    // Max value spans the whole plot height; others scale linearly.
    assert!((layout.columns[5].height - 450.0).abs() <= 1e-9);
    assert!((layout.columns[5].y_top - 0.0).abs() <= 1e-9);
    assert!((layout.columns[0].height - 4.0 / 42.0 * 450.0).abs() <= 1e-9);
    for column in &layout.columns {
        assert!((column.y_top + column.height - 450.0).abs() <= 1e-9);
    }
}

#[test]
fn column_value_ticks_use_round_steps_capped_at_target() {
    let layout = project_columns(&crew_records(), Viewport::new(890, 450), 0.1, 10)
        .expect("layout");

    assert_eq!(layout.value_ticks.len(), 9);
    assert!((layout.value_ticks[0].value - 0.0).abs() <= 1e-9);
    assert!((layout.value_ticks[0].y - 450.0).abs() <= 1e-9);
    assert!((layout.value_ticks[8].value - 40.0).abs() <= 1e-9);
}

#[test]
fn column_projection_of_empty_input_is_empty_without_ticks() {
    let layout = project_columns(&[], Viewport::new(890, 450), 0.1, 10).expect("layout");

    assert!(layout.columns.is_empty());
    assert!(layout.category_ticks.is_empty());
    assert!(layout.value_ticks.is_empty());
}

#[test]
fn single_record_takes_the_full_band_minus_padding() {
    let records = vec![NamedRecord::new("only", 7.0)];
    let layout = project_columns(&records, Viewport::new(890, 450), 0.1, 10)
        .expect("layout");

    assert_eq!(layout.columns.len(), 1);
    assert!((layout.columns[0].width - 801.0).abs() <= 1e-9);
    assert!((layout.columns[0].x - 44.5).abs() <= 1e-9);
}

#[test]
fn column_chart_frame_counts_match_records_and_ticks() {
    let mut chart = BarChart::new(NullRenderer::default(), "#chart");
    chart.render_column_chart(&crew_data()).expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.last_rect_count, 6);
    // One label per category plus one per value tick.
    assert_eq!(renderer.last_text_count, 6 + 9);
    // Two axis lines plus one tick mark per label.
    assert_eq!(renderer.last_line_count, 2 + 6 + 9);

    let frame = &renderer.frames[0];
    assert_eq!(frame.viewport, Viewport::new(960, 500));
}

#[test]
fn column_fill_varies_across_the_sequence() {
    let mut chart = BarChart::new(NullRenderer::default(), "#chart");
    chart.render_column_chart(&crew_data()).expect("render");

    let frame = &chart.renderer().frames[0];
    assert_ne!(frame.rects[0].fill, frame.rects[5].fill);
    // The ramp moves monotonically along one channel.
    assert!(frame.rects[0].fill.green < frame.rects[5].fill.green);
}

#[test]
fn empty_column_chart_renders_an_empty_fixed_size_frame() {
    let mut chart = BarChart::new(NullRenderer::default(), "#chart");
    chart.render_column_chart(&[]).expect("render");

    let frame = &chart.renderer().frames[0];
    assert!(frame.is_empty());
    assert_eq!(frame.viewport, Viewport::new(960, 500));
}
