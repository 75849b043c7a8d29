use tracing::{debug, warn};
use trajectory_lab::core::input::{Field, RawInput, RawValue};
use trajectory_lab::core::trajectory::{Trajectory, compute};
use trajectory_lab::core::window::AxisWindow;

pub(crate) struct AppRuntime {
    pub(crate) form: [String; 5],
    pub(crate) trajectory: Option<Trajectory>,
    pub(crate) window: AxisWindow,
    pub(crate) status_line: String,
}

fn default_form() -> [String; 5] {
    Field::ALL.map(|field| field.default_value().to_string())
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            form: default_form(),
            trajectory: None,
            window: AxisWindow::DEFAULT,
            status_line: "Enter launch values and press Calculate".to_string(),
        }
    }

    pub(crate) fn raw_input(&self) -> RawInput {
        let mut raw = RawInput::default();
        for (field, text) in Field::ALL.into_iter().zip(&self.form) {
            raw.set(field, Some(RawValue::from(text.as_str())));
        }
        raw
    }

    pub(crate) fn calculate(&mut self) {
        let raw = self.raw_input();
        let defaulted = raw.defaulted_fields();
        for field in &defaulted {
            warn!(field = field.key(), "could not parse value, using default");
        }

        let trajectory = compute(raw.resolve());
        debug!(
            is_uniform = trajectory.result.is_uniform,
            motion = %trajectory.result.motion_kind(),
            "classified motion"
        );

        self.window = AxisWindow::fit(&trajectory.input, &trajectory.result, &trajectory.points);
        self.status_line = if trajectory.points.is_empty() {
            "Flight time is zero; nothing to draw".to_string()
        } else if defaulted.is_empty() {
            "Trajectory calculated".to_string()
        } else {
            let keys: Vec<&str> = defaulted.iter().map(|field| field.key()).collect();
            format!("Used defaults for: {}", keys.join(", "))
        };
        self.trajectory = Some(trajectory);
    }

    pub(crate) fn reset(&mut self) {
        self.form = default_form();
        self.trajectory = None;
        self.window = AxisWindow::DEFAULT;
        self.status_line = "Form reset".to_string();
    }
}
