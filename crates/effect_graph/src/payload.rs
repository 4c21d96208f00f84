// SPDX-License-Identifier: MIT OR Apache-2.0
//! Auxiliary node payloads: color ramps and curve mappings.
//!
//! Both structures always hold at least two elements. A fresh ramp or curve
//! starts with exactly two, and those slots are rewritten in place rather than
//! replaced.

use serde::{Deserialize, Serialize};

/// Interpolation between color ramp stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RampInterpolation {
    /// Linear blend
    #[default]
    Linear,
    /// Smoothstep blend
    Ease,
    /// B-spline
    BSpline,
    /// Cardinal spline
    Cardinal,
    /// Hold the previous stop
    Constant,
}

/// One stop of a color ramp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`
    pub position: f32,
    /// RGBA color
    pub color: [f32; 4],
}

impl ColorStop {
    /// Create a stop
    pub fn new(position: f32, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Gradient made of ordered color stops
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    /// Interpolation mode
    pub interpolation: RampInterpolation,
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// Black to white, the state of a freshly created ramp
    pub fn new() -> Self {
        Self {
            interpolation: RampInterpolation::Linear,
            stops: vec![
                ColorStop::new(0.0, [0.0, 0.0, 0.0, 1.0]),
                ColorStop::new(1.0, [1.0, 1.0, 1.0, 1.0]),
            ],
        }
    }

    /// All stops in order
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Rewrite an existing stop slot
    pub fn set_stop(&mut self, index: usize, stop: ColorStop) -> bool {
        match self.stops.get_mut(index) {
            Some(slot) => {
                *slot = stop;
                true
            }
            None => false,
        }
    }

    /// Append a stop after the existing ones
    pub fn push_stop(&mut self, stop: ColorStop) {
        self.stops.push(stop);
    }

    /// Remove a stop, refusing to go below two
    pub fn remove_stop(&mut self, index: usize) -> Option<ColorStop> {
        if self.stops.len() <= 2 || index >= self.stops.len() {
            return None;
        }
        Some(self.stops.remove(index))
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle type of a curve point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandleType {
    /// Smooth automatic handles
    #[default]
    Auto,
    /// Automatic handles clamped to avoid overshoot
    AutoClamped,
    /// Sharp corner
    Vector,
}

/// One point of a curve mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Location `(x, y)`
    pub location: [f32; 2],
    /// Handle type
    pub handle: HandleType,
}

impl CurvePoint {
    /// Create a point
    pub fn new(location: [f32; 2], handle: HandleType) -> Self {
        Self { location, handle }
    }
}

/// Single-channel mapping curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMapping {
    points: Vec<CurvePoint>,
}

impl CurveMapping {
    /// Identity diagonal from `(0, 0)` to `(1, 1)`
    pub fn new() -> Self {
        Self {
            points: vec![
                CurvePoint::new([0.0, 0.0], HandleType::Auto),
                CurvePoint::new([1.0, 1.0], HandleType::Auto),
            ],
        }
    }

    /// All points in order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Insert an interior point ordered by x, keeping the end points in place.
    ///
    /// Returns the index the point landed at.
    pub fn insert(&mut self, location: [f32; 2]) -> usize {
        let last = self.points.len() - 1;
        let index = (1..last)
            .find(|&i| self.points[i].location[0] > location[0])
            .unwrap_or(last);
        self.points.insert(index, CurvePoint::new(location, HandleType::Auto));
        index
    }

    /// Mutable access to a point
    pub fn point_mut(&mut self, index: usize) -> Option<&mut CurvePoint> {
        self.points.get_mut(index)
    }

    /// Index of the last point
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }
}

impl Default for CurveMapping {
    fn default() -> Self {
        Self::new()
    }
}

/// Node-kind-specific data that does not fit flat properties
#[derive(Debug, Clone, PartialEq)]
pub enum AuxData {
    /// Gradient stops
    ColorRamp(ColorRamp),
    /// Curve points
    CurveMapping(CurveMapping),
}
