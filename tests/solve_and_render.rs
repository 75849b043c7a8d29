use trajectory_lab::core::input::RawInput;
use trajectory_lab::core::trajectory::{
    FALLBACK_HORIZON_S, MAX_FLIGHT_TIME_S, SAMPLE_STEPS, TrajectoryInput, TrajectoryPoint, sample,
    solve,
};
use trajectory_lab::render::{CsvReport, JsonReport, Renderer, TextReport};

fn launch(x0: f64, y0: f64, angle_deg: f64, v0: f64, a: f64) -> TrajectoryInput {
    TrajectoryInput {
        x0,
        y0,
        angle_deg,
        v0,
        a,
    }
}

#[test]
fn capped_results_keep_uncapped_height_and_range() {
    for (v0, a) in [(20.0, 0.5), (60.0, 2.0), (35.0, 1.0)] {
        let input = launch(0.0, 0.0, 45.0, v0, a);
        let (vx, vy) = input.velocity_components();
        let raw_time = 2.0 * vy / a;
        assert!(raw_time > MAX_FLIGHT_TIME_S);

        let result = solve(input);
        assert_eq!(result.flight_time, MAX_FLIGHT_TIME_S);
        assert!((result.x_max - vx * raw_time).abs() <= 1e-6 * vx * raw_time);
        assert!((result.max_height - vy * vy / (2.0 * a)).abs() <= 1e-6 * vy * vy);
    }
}

#[test]
fn every_flight_samples_from_start_point() {
    let inputs = [
        launch(0.0, 0.0, 45.0, 20.0, 9.8),
        launch(-4.0, 12.0, 80.0, 3.0, 1.62),
        launch(2.0, 5.0, 0.0, 10.0, 0.0),
        launch(0.0, 10.0, -30.0, 4.0, 0.0),
        launch(1.0, -2.0, 30.0, 5.0, 9.8),
    ];
    for input in inputs {
        let result = solve(input);
        let points = sample(input, result);
        if result.flight_time > 0.0 {
            assert_eq!(points.len(), SAMPLE_STEPS + 1, "input {input:?}");
            assert_eq!(
                points[0],
                TrajectoryPoint {
                    x: input.x0,
                    y: input.y0
                }
            );
        } else {
            assert!(points.is_empty());
        }
    }
}

#[test]
fn below_ground_launch_without_root_uses_horizon() {
    let result = solve(launch(1.0, -2.0, 30.0, 5.0, 9.8));
    assert_eq!(result.flight_time, FALLBACK_HORIZON_S);
}

#[test]
fn garbage_form_values_render_default_launch() {
    let raw: RawInput = toml::from_str(
        r#"
        x0 = ""
        angle = "forty five"
        velocity = "20"
        "#,
    )
    .expect("scenario should parse");
    let input = raw.resolve();
    assert_eq!(input, TrajectoryInput::default());

    let result = solve(input);
    let points = sample(input, result);

    let mut text = TextReport::new(Vec::new());
    text.render(&result, &points).expect("text render");
    let text = String::from_utf8(text.into_inner()).expect("utf-8");
    assert!(text.contains("Flight time: 2.89 s"));
    assert!(text.contains("Max height: 10.20 m"));

    let mut json = JsonReport::new(Vec::new());
    json.render(&result, &points).expect("json render");
    let value: serde_json::Value = serde_json::from_slice(&json.into_inner()).expect("json");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(SAMPLE_STEPS + 1));

    let mut csv = CsvReport::new(Vec::new());
    csv.render(&result, &points).expect("csv render");
    let csv = csv.into_inner().expect("flush");
    assert_eq!(csv.iter().filter(|b| **b == b'\n').count(), SAMPLE_STEPS + 2);
}
