#[cfg(test)]
#[path = "measurements_test.rs"]
mod measurements_test;

use crate::config::{ClientConfig, FieldDefaults, SliderBounds};
use crate::error::ValidationError;
use crate::util::input_sync::{parse_float_lenient, parse_int_lenient};

/// The three plant metrics driving both the prediction and the illustration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub height: f64,
    pub diameter: f64,
    pub leaf_count: u64,
}

/// Which of the three measurement fields an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Height,
    Diameter,
    LeafCount,
}

impl MeasurementField {
    pub const ALL: [Self; 3] = [Self::Height, Self::Diameter, Self::LeafCount];

    /// DOM id of the entry input; the slider uses `{id}-slider`.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Height => "altura",
            Self::Diameter => "diametro",
            Self::LeafCount => "hojas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Height => "Altura de la planta (cm)",
            Self::Diameter => "Diámetro de la roseta (cm)",
            Self::LeafCount => "Número de hojas funcionales",
        }
    }
}

/// A numeric entry paired with a range slider.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldControl {
    pub entry: String,
    pub slider: f64,
    pub bounds: SliderBounds,
}

impl FieldControl {
    pub fn new(defaults: FieldDefaults) -> Self {
        let slider = defaults.bounds.clamp(defaults.initial);
        Self { entry: slider.to_string(), slider, bounds: defaults.bounds }
    }

    /// Value for display: a non-zero parsed entry, otherwise the slider.
    fn display_float(&self) -> f64 {
        parse_float_lenient(&self.entry)
            .filter(|v| v.abs() > 0.0)
            .unwrap_or(self.slider)
    }

    /// Integer variant of [`Self::display_float`].
    #[allow(clippy::cast_possible_truncation)]
    fn display_int(&self) -> i64 {
        parse_int_lenient(&self.entry)
            .filter(|v| *v != 0)
            .unwrap_or(self.slider.trunc() as i64)
    }

    /// Raw text used on submit: the entry when non-empty, else the slider value.
    fn submit_text(&self) -> String {
        if self.entry.is_empty() {
            self.slider.to_string()
        } else {
            self.entry.clone()
        }
    }
}

/// Numbers read from the controls at submit time; `None` means not-a-number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawMeasurements {
    pub height: Option<f64>,
    pub diameter: Option<f64>,
    pub leaf_count: Option<i64>,
}

impl RawMeasurements {
    /// Enforce numeric then positive values, in that order.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NotNumeric`] if any value is missing,
    /// [`ValidationError::NotPositive`] if any value is zero or negative.
    pub fn validate(self) -> Result<Measurements, ValidationError> {
        let (Some(height), Some(diameter), Some(leaf_count)) = (self.height, self.diameter, self.leaf_count) else {
            return Err(ValidationError::NotNumeric);
        };
        if height <= 0.0 || diameter <= 0.0 || leaf_count <= 0 {
            return Err(ValidationError::NotPositive);
        }
        Ok(Measurements {
            height,
            diameter,
            leaf_count: leaf_count.unsigned_abs(),
        })
    }
}

/// The three paired controls of the form.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementControls {
    pub height: FieldControl,
    pub diameter: FieldControl,
    pub leaf_count: FieldControl,
}

impl MeasurementControls {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            height: FieldControl::new(config.height),
            diameter: FieldControl::new(config.diameter),
            leaf_count: FieldControl::new(config.leaf_count),
        }
    }

    pub fn field(&self, field: MeasurementField) -> &FieldControl {
        match field {
            MeasurementField::Height => &self.height,
            MeasurementField::Diameter => &self.diameter,
            MeasurementField::LeafCount => &self.leaf_count,
        }
    }

    pub fn field_mut(&mut self, field: MeasurementField) -> &mut FieldControl {
        match field {
            MeasurementField::Height => &mut self.height,
            MeasurementField::Diameter => &mut self.diameter,
            MeasurementField::LeafCount => &mut self.leaf_count,
        }
    }

    /// Values the illustration and readouts follow while the user types.
    ///
    /// Negative leaf counts read as zero leaves.
    pub fn display_measurements(&self) -> Measurements {
        Measurements {
            height: self.height.display_float(),
            diameter: self.diameter.display_float(),
            leaf_count: self.leaf_count.display_int().max(0).unsigned_abs(),
        }
    }

    /// Values as read on submit, before validation.
    pub fn submit_values(&self) -> RawMeasurements {
        RawMeasurements {
            height: parse_float_lenient(&self.height.submit_text()),
            diameter: parse_float_lenient(&self.diameter.submit_text()),
            leaf_count: parse_int_lenient(&self.leaf_count.submit_text()),
        }
    }
}
