use core::ops::{Add, Neg, Sub};

use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::meter,
};

/// shaft length of the start arrow
pub const ARROW_LENGTH: f64 = 3.0;
/// full width of the arrow head across the shaft
pub const ARROW_HEAD_WIDTH: f64 = 1.5;
/// the head is drawn past the end of the shaft, not included in ARROW_LENGTH
pub const ARROW_HEAD_LENGTH: f64 = 1.0;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: Length,
    pub y: Length,
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Position {
    pub fn from_array_meter(p: [f64; 2]) -> Self {
        Position {
            x: Length::new::<meter>(p[0]),
            y: Length::new::<meter>(p[1]),
        }
    }

    pub fn as_array_meter(&self) -> [f64; 2] {
        [self.x.get::<meter>(), self.y.get::<meter>()]
    }

    /// move along a unitless direction by distance
    pub fn offset(&self, direction: [f64; 2], distance: Length) -> Self {
        Position {
            x: self.x + distance * direction[0],
            y: self.y + distance * direction[1],
        }
    }

    pub fn distance(&self, other: &Position) -> Length {
        let [dx, dy] = (*self - *other).as_array_meter();
        Length::new::<meter>(dx.hypot(dy))
    }

    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// (cos theta, sin theta), no wrapping of the angle is done
pub fn heading_vector(angle: Angle) -> [f64; 2] {
    let theta = angle.get::<radian>();
    [theta.cos(), theta.sin()]
}

/// position and heading of the vehicle at the start
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Position,
    pub heading: Angle,
}

impl Pose {
    pub fn from_degrees(position: [f64; 2], heading_deg: f64) -> Self {
        Self {
            position: Position::from_array_meter(position),
            heading: Angle::new::<degree>(heading_deg),
        }
    }
}

/// Arrow from the start position along the start heading
///
/// Shaft from `tail` to `shaft_end()`, then a triangular head
/// `head_width` wide at its base and `head_length` long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartArrow {
    pub tail: Position,
    pub heading: Angle,
    pub length: Length,
    pub head_width: Length,
    pub head_length: Length,
}

impl StartArrow {
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            tail: pose.position,
            heading: pose.heading,
            length: Length::new::<meter>(ARROW_LENGTH),
            head_width: Length::new::<meter>(ARROW_HEAD_WIDTH),
            head_length: Length::new::<meter>(ARROW_HEAD_LENGTH),
        }
    }

    /// shaft vector in meters, (cos theta, sin theta) * length
    pub fn delta(&self) -> [f64; 2] {
        let [ux, uy] = heading_vector(self.heading);
        let length = self.length.get::<meter>();
        [ux * length, uy * length]
    }

    pub fn shaft_end(&self) -> Position {
        self.tail.offset(heading_vector(self.heading), self.length)
    }

    pub fn tip(&self) -> Position {
        self.shaft_end()
            .offset(heading_vector(self.heading), self.head_length)
    }

    /// head triangle: left base corner, tip, right base corner
    pub fn head(&self) -> [Position; 3] {
        let [ux, uy] = heading_vector(self.heading);
        let left = [-uy, ux];
        let base = self.shaft_end();
        let half_width = self.head_width / 2.0;
        [
            base.offset(left, half_width),
            self.tip(),
            base.offset(left, -half_width),
        ]
    }
}

/// Timing line segment centered on `center`
///
/// `orientation` is the heading the line encodes, the segment itself runs
/// perpendicular to it (orientation + 90 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingLine {
    pub center: Position,
    pub orientation: Angle,
    pub width: Length,
}

impl TimingLine {
    pub fn new(center: [f64; 2], orientation_deg: f64, width: f64) -> Self {
        Self {
            center: Position::from_array_meter(center),
            orientation: Angle::new::<degree>(orientation_deg),
            width: Length::new::<meter>(width),
        }
    }

    /// unit vector along the segment
    pub fn direction(&self) -> [f64; 2] {
        heading_vector(self.orientation + Angle::new::<degree>(90.0))
    }

    /// center +/- direction * width / 2
    pub fn endpoints(&self) -> [Position; 2] {
        let direction = self.direction();
        let half_width = self.width / 2.0;
        [
            self.center.offset(direction, half_width),
            self.center.offset(direction, -half_width),
        ]
    }
}
