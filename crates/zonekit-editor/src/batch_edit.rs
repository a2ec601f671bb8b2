//! Batch adjustment of one numeric field across many zones.

use std::fmt;

use serde::{Deserialize, Serialize};
use zonekit_core::{EditorError, EditorResult, Zone};

/// The field (or field pair) a batch edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchField {
    Smin,
    Smax,
    /// Both `smin` and `smax`.
    SminSmax,
    Dmin,
    Dmax,
    /// Both `dmin` and `dmax`.
    DminDmax,
    Radius,
}

impl BatchField {
    /// All fields in the order the batch editor offers them.
    pub const ALL: [BatchField; 7] = [
        BatchField::Smin,
        BatchField::Smax,
        BatchField::SminSmax,
        BatchField::Dmin,
        BatchField::Dmax,
        BatchField::DminDmax,
        BatchField::Radius,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BatchField::Smin => "smin",
            BatchField::Smax => "smax",
            BatchField::SminSmax => "smin & smax",
            BatchField::Dmin => "dmin",
            BatchField::Dmax => "dmax",
            BatchField::DminDmax => "dmin & dmax",
            BatchField::Radius => "radius",
        }
    }

    /// Field at a combo-box index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for BatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the value is combined with the current field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BatchMode {
    /// Assign the value directly.
    #[default]
    Absolute,
    /// Scale by `1 + value / 100`.
    Percentage,
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMode::Absolute => f.write_str("absolute"),
            BatchMode::Percentage => f.write_str("percentage"),
        }
    }
}

/// A validated batch edit, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchEdit {
    field: BatchField,
    mode: BatchMode,
    value: f64,
}

impl BatchEdit {
    pub fn new(field: BatchField, mode: BatchMode, value: f64) -> EditorResult<Self> {
        if !value.is_finite() {
            return Err(EditorError::NonFiniteValue {
                field: field.label().to_string(),
            });
        }
        Ok(Self { field, mode, value })
    }

    /// Parses the user's text input. Surrounding whitespace is ignored; any
    /// other trailing text makes the input invalid.
    pub fn parse(field: BatchField, mode: BatchMode, input: &str) -> EditorResult<Self> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| EditorError::InvalidNumber {
                input: input.to_string(),
            })?;
        Self::new(field, mode, value)
    }

    pub fn field(&self) -> BatchField {
        self.field
    }

    pub fn mode(&self) -> BatchMode {
        self.mode
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    fn multiplier(&self) -> f64 {
        1.0 + self.value / 100.0
    }

    fn adjust_int(&self, current: i32) -> i32 {
        // `as` truncates toward zero and saturates at the i32 bounds
        match self.mode {
            BatchMode::Absolute => self.value as i32,
            BatchMode::Percentage => (f64::from(current) * self.multiplier()) as i32,
        }
    }

    fn adjust_float(&self, current: f64) -> f64 {
        match self.mode {
            BatchMode::Absolute => self.value,
            BatchMode::Percentage => current * self.multiplier(),
        }
    }

    /// Applies the edit to one zone. Radius never goes below zero.
    pub fn apply_to(&self, zone: &mut Zone) {
        match self.field {
            BatchField::Smin => zone.smin = self.adjust_int(zone.smin),
            BatchField::Smax => zone.smax = self.adjust_int(zone.smax),
            BatchField::SminSmax => {
                zone.smin = self.adjust_int(zone.smin);
                zone.smax = self.adjust_int(zone.smax);
            }
            BatchField::Dmin => zone.dmin = self.adjust_int(zone.dmin),
            BatchField::Dmax => zone.dmax = self.adjust_int(zone.dmax),
            BatchField::DminDmax => {
                zone.dmin = self.adjust_int(zone.dmin);
                zone.dmax = self.adjust_int(zone.dmax);
            }
            BatchField::Radius => zone.r = self.adjust_float(zone.r).max(0.0),
        }
    }
}
