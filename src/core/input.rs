use serde::Deserialize;

use crate::core::trajectory::TrajectoryInput;

/// A field value as it arrives from a form, a CLI flag or a scenario file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(v) => *v,
            RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    X0,
    Y0,
    Angle,
    Velocity,
    Acceleration,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::X0,
        Field::Y0,
        Field::Angle,
        Field::Velocity,
        Field::Acceleration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::X0 => "x0 (m)",
            Field::Y0 => "y0 (m)",
            Field::Angle => "Angle (deg)",
            Field::Velocity => "Velocity (m/s)",
            Field::Acceleration => "Acceleration (m/s^2)",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::X0 => "x0",
            Field::Y0 => "y0",
            Field::Angle => "angle",
            Field::Velocity => "velocity",
            Field::Acceleration => "acceleration",
        }
    }

    pub fn default_value(self) -> f64 {
        let defaults = TrajectoryInput::default();
        match self {
            Field::X0 => defaults.x0,
            Field::Y0 => defaults.y0,
            Field::Angle => defaults.angle_deg,
            Field::Velocity => defaults.v0,
            Field::Acceleration => defaults.a,
        }
    }
}

/// Unvalidated launch parameters. Missing or unparseable fields resolve to
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInput {
    pub x0: Option<RawValue>,
    pub y0: Option<RawValue>,
    pub angle: Option<RawValue>,
    pub velocity: Option<RawValue>,
    pub acceleration: Option<RawValue>,
}

impl RawInput {
    pub fn get(&self, field: Field) -> Option<&RawValue> {
        match field {
            Field::X0 => self.x0.as_ref(),
            Field::Y0 => self.y0.as_ref(),
            Field::Angle => self.angle.as_ref(),
            Field::Velocity => self.velocity.as_ref(),
            Field::Acceleration => self.acceleration.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<RawValue>) {
        let slot = match field {
            Field::X0 => &mut self.x0,
            Field::Y0 => &mut self.y0,
            Field::Angle => &mut self.angle,
            Field::Velocity => &mut self.velocity,
            Field::Acceleration => &mut self.acceleration,
        };
        *slot = value;
    }

    pub fn value_or_default(&self, field: Field) -> f64 {
        self.get(field)
            .and_then(RawValue::parse)
            .unwrap_or_else(|| field.default_value())
    }

    pub fn resolve(&self) -> TrajectoryInput {
        TrajectoryInput {
            x0: self.value_or_default(Field::X0),
            y0: self.value_or_default(Field::Y0),
            angle_deg: self.value_or_default(Field::Angle),
            v0: self.value_or_default(Field::Velocity),
            a: self.value_or_default(Field::Acceleration),
        }
    }

    /// Fields that were supplied but could not be used.
    pub fn defaulted_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some_and(|raw| raw.parse().is_none()))
            .collect()
    }

    /// Field-wise merge where values present in `other` win.
    pub fn overlay(mut self, other: RawInput) -> RawInput {
        for field in Field::ALL {
            if let Some(value) = other.get(field) {
                self.set(field, Some(value.clone()));
            }
        }
        self
    }
}
