//! End-to-end flow through the pipeline: load, adjust, edge-detect, reset,
//! export - exercising the same sequence a host UI would drive.

use edgekit_ops::FilterState;
use edgekit_pipeline::{Pipeline, PipelineError, Stage};

/// A raster with a sharp vertical step: left half black, right half white.
fn step_raster(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

#[test]
fn full_session_restores_original_bytes() {
    let bytes = step_raster(8, 8);
    let mut pipeline = Pipeline::new();
    pipeline.load(8, 8, bytes.clone()).unwrap();

    // Slider movements: several re-entrant adjustments.
    for brightness in [120, 60, 85] {
        pipeline
            .adjust(FilterState {
                brightness,
                ..FilterState::identity()
            })
            .unwrap();
    }
    assert_eq!(pipeline.stage(), Stage::Adjusted);

    pipeline.reset().unwrap();
    pipeline.detect_edges().unwrap();
    assert_eq!(pipeline.stage(), Stage::EdgeDetected);

    pipeline.reset().unwrap();
    assert_eq!(pipeline.current().unwrap().data(), bytes.as_slice());
}

#[test]
fn edge_detection_finds_the_step() {
    let mut pipeline = Pipeline::new();
    pipeline.load(8, 8, step_raster(8, 8)).unwrap();
    pipeline.detect_edges().unwrap();

    let edges = pipeline.current().unwrap();
    // The columns straddling the step carry the response in every interior
    // row; a flat region further away reads zero.
    for y in 1..7 {
        assert_ne!(edges.pixel(3, y)[0], 0);
        assert_ne!(edges.pixel(4, y)[0], 0);
        assert_eq!(edges.pixel(6, y)[0], 0);
    }
    // Border ring keeps the documented zero fill.
    for x in 0..8 {
        assert_eq!(edges.pixel(x, 0), [0, 0, 0, 0]);
        assert_eq!(edges.pixel(x, 7), [0, 0, 0, 0]);
    }
}

#[test]
fn degenerate_raster_is_accepted_and_produces_blank_edge_map() {
    let mut pipeline = Pipeline::new();
    pipeline.load(2, 2, vec![200; 2 * 2 * 4]).unwrap();
    pipeline.detect_edges().unwrap();

    let edges = pipeline.current().unwrap();
    assert_eq!(edges.dimensions(), (2, 2));
    assert!(edges.data().iter().all(|&s| s == 0));
}

#[test]
fn rejected_events_leave_the_pipeline_usable() {
    let mut pipeline = Pipeline::new();
    pipeline.load(6, 6, step_raster(6, 6)).unwrap();
    pipeline.detect_edges().unwrap();

    // Neither adjust nor a second detect is legal from EdgeDetected.
    assert!(matches!(
        pipeline.adjust(FilterState::identity()),
        Err(PipelineError::InvalidTransition { .. })
    ));
    assert!(pipeline.detect_edges().is_err());
    assert_eq!(pipeline.stage(), Stage::EdgeDetected);

    pipeline.reset().unwrap();
    pipeline
        .adjust(FilterState {
            darkness: 25,
            ..FilterState::identity()
        })
        .unwrap();
    assert_eq!(pipeline.stage(), Stage::Adjusted);
}

#[test]
fn export_shape_matches_loader_shape() {
    let mut pipeline = Pipeline::new();
    pipeline.load(5, 3, vec![99; 5 * 3 * 4]).unwrap();
    pipeline
        .adjust(FilterState {
            grayscale: true,
            ..FilterState::identity()
        })
        .unwrap();

    let (width, height, data) = pipeline.into_raw().unwrap();
    assert_eq!((width, height), (5, 3));
    assert_eq!(data.len(), (width * height * 4) as usize);
}
