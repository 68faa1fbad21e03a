use std::f32::consts::TAU;

use bevy::color::ColorToComponents;
use bevy::prelude::Color;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// HSV color with every channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: hue.clamp(0.0, 1.0),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Linear RGBA, the layout mesh vertex colors expect.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        Color::from(self).to_linear().to_f32_array()
    }
}

impl From<Hsv> for Color {
    #[inline]
    fn from(c: Hsv) -> Self {
        // bevy hues are in degrees
        Color::hsv(c.hue * 360.0, c.saturation, c.value)
    }
}

/// Circular motion of a point around the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub radius: f32,
    /// Current phase in radians.
    pub angle: f32,
    /// Phase advance per frame, before the configured angle step.
    pub speed: f32,
}

impl Orbit {
    /// Orbit passing through `position`, so the first step continues from it.
    pub fn through(position: Vec3, speed: f32) -> Self {
        Self {
            radius: position.x.hypot(position.z),
            angle: position.z.atan2(position.x),
            speed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub color: Hsv,
    pub orbit: Orbit,
}

impl Point {
    /// Move one frame along the orbit. `y` never changes.
    pub fn advance(&mut self, angle_step: f32) {
        self.orbit.angle = (self.orbit.angle + self.orbit.speed * angle_step).rem_euclid(TAU);
        let (sin, cos) = self.orbit.angle.sin_cos();
        self.position.x = cos * self.orbit.radius;
        self.position.z = sin * self.orbit.radius;
    }
}

/// Fixed-length, ordered set of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn colors(&self) -> impl ExactSizeIterator<Item = Hsv> + '_ {
        self.points.iter().map(|p| p.color)
    }

    /// Advance every point along its orbit. The point count is unchanged.
    pub fn advance_orbits(&mut self, angle_step: f32) {
        for point in &mut self.points {
            point.advance(angle_step);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// Axes through the origin, plus cube edges and face center lines.
pub const FRAME_SEGMENT_COUNT: usize = 27;

/// Reference frame around a cube of half side `h` centered at the origin.
///
/// For each axis: the axis itself, the four cube edges parallel to it, and the
/// four lines parallel to it that cross the cube faces through their centers.
pub fn frame_segments(h: f32) -> Vec<Segment> {
    // (along, across_a, across_b) basis per axis
    let bases = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
    ];
    let line = |along: Vec3, offset: Vec3| Segment::new(offset - along * h, offset + along * h);

    let mut segments = Vec::with_capacity(FRAME_SEGMENT_COUNT);
    for &(along, _, _) in &bases {
        segments.push(line(along, Vec3::ZERO));
    }
    for &(along, a, b) in &bases {
        for (sa, sb) in [(1.0, -1.0), (-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            segments.push(line(along, a * (sa * h) + b * (sb * h)));
        }
    }
    for &(along, a, b) in &bases {
        for offset in [b * h, -b * h, a * h, -a * h] {
            segments.push(line(along, offset));
        }
    }
    segments
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: &'static str,
    pub anchor: Vec3,
}

pub const AXIS_LABEL_COUNT: usize = 6;

pub fn axis_labels(offset: f32) -> [AxisLabel; AXIS_LABEL_COUNT] {
    let at = |text, axis: Vec3| AxisLabel {
        text,
        anchor: axis * offset,
    };
    [
        at("-X", Vec3::NEG_X),
        at("X", Vec3::X),
        at("-Y", Vec3::NEG_Y),
        at("Y", Vec3::Y),
        at("-Z", Vec3::NEG_Z),
        at("Z", Vec3::Z),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    /// Point the camera faces.
    pub target: Vec3,
}

impl CameraState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
        }
    }

    pub fn look_at_origin(&mut self) {
        self.target = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn frame_is_fixed_and_axis_aligned() {
        let segments = frame_segments(50.0);
        assert_eq!(segments.len(), FRAME_SEGMENT_COUNT);

        for s in &segments {
            let d = (s.end - s.start).abs();
            let aligned = [d.x, d.y, d.z].iter().filter(|v| **v > 0.0).count();
            assert_eq!(aligned, 1, "{s:?} is not axis aligned");
            assert!((d.length() - 100.0).abs() < 1e-4);
            assert!(s.start.abs().max_element() <= 50.0 && s.end.abs().max_element() <= 50.0);
        }

        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn frame_contains_axes_and_cube_edges() {
        let segments = frame_segments(50.0);
        let has = |start: Vec3, end: Vec3| segments.contains(&Segment::new(start, end));

        assert!(has(Vec3::new(-50.0, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0)));
        assert!(has(Vec3::new(0.0, -50.0, 0.0), Vec3::new(0.0, 50.0, 0.0)));
        assert!(has(Vec3::new(-50.0, 50.0, -50.0), Vec3::new(50.0, 50.0, -50.0)));
        assert!(has(Vec3::new(50.0, -50.0, 50.0), Vec3::new(50.0, 50.0, 50.0)));
        assert!(has(Vec3::new(0.0, -50.0, -50.0), Vec3::new(0.0, -50.0, 50.0)));
    }

    #[test]
    fn six_labels_on_the_axes() {
        let labels = axis_labels(60.0);
        let texts: Vec<_> = labels.iter().map(|l| l.text).collect();
        assert_eq!(texts, ["-X", "X", "-Y", "Y", "-Z", "Z"]);
        for label in labels {
            assert!((label.anchor.length() - 60.0).abs() < 1e-6);
        }
        assert_eq!(labels[3].anchor, Vec3::new(0.0, 60.0, 0.0));
    }

    #[test]
    fn orbit_through_keeps_position_on_first_step_phase() {
        let position = Vec3::new(3.0, 7.0, 4.0);
        let orbit = Orbit::through(position, 1.0);
        assert!((orbit.radius - 5.0).abs() < 1e-6);

        let mut point = Point {
            position,
            color: Hsv::new(0.5, 0.5, 0.5),
            orbit,
        };
        point.advance(0.0);
        assert!((point.position - position).length() < 1e-5);
    }

    #[test]
    fn advance_rotates_in_the_xz_plane() {
        let mut point = Point {
            position: Vec3::new(10.0, -2.0, 0.0),
            color: Hsv::new(0.0, 0.0, 0.0),
            orbit: Orbit {
                radius: 10.0,
                angle: 0.0,
                speed: FRAC_PI_2,
            },
        };
        point.advance(1.0);
        assert!(point.position.x.abs() < 1e-5);
        assert!((point.position.z - 10.0).abs() < 1e-5);
        assert_eq!(point.position.y, -2.0);
    }

    #[test]
    fn orbit_angle_stays_within_one_turn() {
        let mut point = Point {
            position: Vec3::new(4.0, 1.0, 0.0),
            color: Hsv::new(0.0, 0.0, 0.0),
            orbit: Orbit {
                radius: 4.0,
                angle: TAU - 0.01,
                speed: 2.0,
            },
        };
        point.advance(0.01);
        assert!((point.orbit.angle - 0.01).abs() < 1e-4);

        point.orbit.angle = 3.0e5;
        for _ in 0..100 {
            point.advance(0.01);
            assert!((0.0..TAU).contains(&point.orbit.angle));
        }
        let before = point.position;
        point.advance(0.005);
        assert_ne!(point.position, before);
    }

    #[test]
    fn hsv_channels_are_clamped() {
        let c = Hsv::new(1.2, -0.1, 0.5);
        assert_eq!(c.hue, 1.0);
        assert_eq!(c.saturation, 0.0);
        let rgba = c.to_linear_rgba();
        assert_eq!(rgba[3], 1.0);
    }
}
