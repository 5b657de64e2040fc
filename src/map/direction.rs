use std::str::FromStr;

use glam::{EulerRot, IVec3, Quat, Vec3};
use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::error::DrawTokenError;

/// The ten compass codes a draw token may end with.
///
/// `U` and `D` lie along the z axis: up is nearer the viewer (negative z),
/// down is farther away (positive z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    N,
    S,
    E,
    W,
    U,
    D,
    Ne,
    Se,
    Sw,
    Nw,
}

impl Compass {
    /// Returns `true` for the four diagonal codes.
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Compass::Ne | Compass::Se | Compass::Sw | Compass::Nw)
    }

    /// Returns the direction as an IVec3.
    pub fn as_ivec3(self) -> IVec3 {
        self.into()
    }

    /// Rotation, in degrees about each axis, that turns a marker lying along +y
    /// so it lies along this direction.
    pub const fn euler_degrees(self) -> Vec3 {
        match self {
            Compass::N => Vec3::new(0.0, 0.0, 0.0),
            Compass::S => Vec3::new(0.0, 0.0, -180.0),
            Compass::E => Vec3::new(0.0, 0.0, -90.0),
            Compass::W => Vec3::new(0.0, 0.0, -270.0),
            Compass::U => Vec3::new(270.0, 0.0, 0.0),
            Compass::D => Vec3::new(90.0, 0.0, 0.0),
            Compass::Ne => Vec3::new(0.0, 0.0, -45.0),
            Compass::Se => Vec3::new(0.0, 0.0, -135.0),
            Compass::Sw => Vec3::new(0.0, 0.0, -225.0),
            Compass::Nw => Vec3::new(0.0, 0.0, -315.0),
        }
    }

    /// The passage orientation for this direction, applied z first, then x, then y.
    pub fn orientation(self) -> Quat {
        let degrees = self.euler_degrees();
        Quat::from_euler(
            EulerRot::ZXY,
            degrees.z.to_radians(),
            degrees.x.to_radians(),
            degrees.y.to_radians(),
        )
    }
}

impl From<Compass> for IVec3 {
    fn from(compass: Compass) -> Self {
        match compass {
            Compass::N => IVec3::Y,
            Compass::S => -IVec3::Y,
            Compass::E => IVec3::X,
            Compass::W => -IVec3::X,
            Compass::U => -IVec3::Z,
            Compass::D => IVec3::Z,
            Compass::Ne => IVec3::new(1, 1, 0),
            Compass::Se => IVec3::new(1, -1, 0),
            Compass::Sw => IVec3::new(-1, -1, 0),
            Compass::Nw => IVec3::new(-1, 1, 0),
        }
    }
}

/// A tokenized draw direction: an optional leading distance followed by a compass code.
///
/// `"n"` is one step north, `"2ne"` two steps north-east, `"10s"` ten steps south.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawToken {
    pub distance: u32,
    pub compass: Compass,
}

impl DrawToken {
    /// Spacing between the two rooms along each axis the direction moves on.
    pub fn interval(&self, spacing: f32) -> f32 {
        spacing * self.distance as f32
    }

    /// Straight-line distance between the two rooms.
    ///
    /// For diagonals this is the hypotenuse of a right isosceles triangle whose
    /// legs are both one interval long.
    pub fn span(&self, spacing: f32) -> f32 {
        let interval = self.interval(spacing);
        if self.compass.is_diagonal() {
            (interval * interval * 2.0).sqrt()
        } else {
            interval
        }
    }

    /// Displacement from the owning room to the neighbour.
    pub fn displacement(&self, spacing: f32) -> Vec3 {
        self.compass.as_ivec3().as_vec3() * self.interval(spacing)
    }
}

impl FromStr for DrawToken {
    type Err = DrawTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(DrawTokenError::Empty);
        }

        let split = token.find(|c: char| !c.is_ascii_digit()).unwrap_or(token.len());
        let (digits, letters) = token.split_at(split);
        if letters.is_empty() {
            return Err(DrawTokenError::MissingDirection);
        }

        let distance = if digits.is_empty() {
            1
        } else {
            match digits.parse::<u32>() {
                Ok(distance) if distance > 0 => distance,
                _ => return Err(DrawTokenError::InvalidDistance(digits.to_string())),
            }
        };

        let compass = Compass::from_str(letters).map_err(|_| DrawTokenError::UnknownDirection(letters.to_string()))?;

        Ok(DrawToken { distance, compass })
    }
}
