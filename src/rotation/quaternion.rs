//! # Quaternion Module
//!
//! Unit-quaternion representation of 3D rotations, plus the samplers used
//! for randomized data augmentation.
//!
//! ## Unit-norm Convention
//!
//! Quaternions constructed by [`Quaternion::identity`],
//! [`Quaternion::from_axis_angle`], and the random samplers are unit
//! quaternions by construction. [`Quaternion::new`] performs **no**
//! normalization: a caller constructing components by hand is responsible
//! for supplying a unit quaternion when the value is used as a rotation.
//! A non-unit quaternion fed to [`Quaternion::rotate`] produces a scaled
//! result rather than an error.
//!
//! ## Examples
//!
//! ```rust
//! use atomgrid::coordinates::point::Point3;
//! use atomgrid::rotation::quaternion::Quaternion;
//! use std::f64::consts::PI;
//!
//! // Quarter turn about the z-axis maps x onto y
//! let q = Quaternion::from_axis_angle(Point3::new(0.0, 0.0, 1.0), PI / 2.0);
//! let p = q.rotate(Point3::new(1.0, 0.0, 0.0));
//! assert!((p.x).abs() < 1e-12);
//! assert!((p.y - 1.0).abs() < 1e-12);
//! ```

use crate::coordinates::point::Point3;
use crate::random::RandomSource;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A quaternion representing a 3D rotation
///
/// Components are held in the fixed order (w, x, y, z) with `w` the scalar
/// part. The ordering is stable: accessors, serialization, and equality all
/// observe it, and external reproducibility checks rely on exact
/// component-wise comparison.
///
/// Immutable value type; all operations return new quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quaternion {
    /// Creates a quaternion from explicit components
    ///
    /// No normalization is performed; supply a unit quaternion if the value
    /// will be used as a rotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    /// use atomgrid::rotation::quaternion::Quaternion;
    ///
    /// // 90 degrees about z, constructed by hand
    /// let q = Quaternion::new(0.5_f64.sqrt(), 0.0, 0.0, 0.5_f64.sqrt());
    /// let p = q.rotate(Point3::new(1.0, 0.0, 0.0));
    /// assert!((p.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// The identity rotation (1, 0, 0, 0)
    pub fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a unit quaternion rotating by `angle` radians about `axis`
    ///
    /// The axis is normalized internally; a zero axis yields the identity
    /// rotation.
    pub fn from_axis_angle(axis: Point3, angle: f64) -> Self {
        let unit_axis = match axis.normalize() {
            Some(a) => a,
            None => return Self::identity(),
        };

        let half = angle * 0.5;
        let s = half.sin();
        Quaternion {
            w: half.cos(),
            x: unit_axis.x * s,
            y: unit_axis.y * s,
            z: unit_axis.z * s,
        }
    }

    /// Samples a rotation uniformly distributed over SO(3)
    ///
    /// Uses the subgroup algorithm (Shoemake): three unit-interval draws
    /// map to a point uniform on the 3-sphere, so the result is always a
    /// unit quaternion. Consumes exactly three draws from `source`, making
    /// the construction bit-reproducible after a reseed.
    pub fn uniform_random(source: &mut RandomSource) -> Self {
        let u1 = source.sample_unit();
        let u2 = source.sample_unit();
        let u3 = source.sample_unit();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        Quaternion {
            w: a * (2.0 * PI * u2).sin(),
            x: a * (2.0 * PI * u2).cos(),
            y: b * (2.0 * PI * u3).sin(),
            z: b * (2.0 * PI * u3).cos(),
        }
    }

    /// Samples a random rotation of bounded magnitude
    ///
    /// The axis is drawn uniformly from the unit sphere and the angle
    /// uniformly from `[0, max_angle)` radians, for augmentation pipelines
    /// that want perturbations rather than arbitrary reorientation. A
    /// non-positive `max_angle` yields the identity without consuming
    /// draws.
    pub fn bounded_random(max_angle: f64, source: &mut RandomSource) -> Self {
        if max_angle <= 0.0 {
            return Self::identity();
        }

        // Uniform direction on the sphere: z uniform in [-1, 1), azimuth
        // uniform in [0, 2*pi).
        let z = source.sample_range(-1.0, 1.0);
        let phi = source.sample_range(0.0, 2.0 * PI);
        let r = (1.0 - z * z).sqrt();
        let axis = Point3::new(r * phi.cos(), r * phi.sin(), z);

        let angle = source.sample_range(0.0, max_angle);
        Self::from_axis_angle(axis, angle)
    }

    /// Scalar (real) component
    pub fn w(&self) -> f64 {
        self.w
    }

    /// First vector component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second vector component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Third vector component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Alias for the scalar component
    pub fn real(&self) -> f64 {
        self.w
    }

    /// The conjugate (w, -x, -y, -z)
    pub fn conjugate(&self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Squared norm w² + x² + y² + z²
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm; 1 for a rotation quaternion
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// The multiplicative inverse, conjugate / norm²
    ///
    /// Equal to the conjugate for unit quaternions. A zero quaternion has
    /// no inverse; the result is non-finite (not detected here).
    pub fn inverse(&self) -> Self {
        let n = self.norm_squared();
        Quaternion {
            w: self.w / n,
            x: -self.x / n,
            y: -self.y / n,
            z: -self.z / n,
        }
    }

    /// Rotates a point by this quaternion
    ///
    /// Computes the sandwich product `q * (0, p) * q̄` and returns a new
    /// point; the input is unmodified. For a non-unit quaternion the result
    /// is scaled by the squared norm.
    pub fn rotate(&self, p: Point3) -> Point3 {
        let pure = Quaternion::new(0.0, p.x, p.y, p.z);
        let rotated = *self * pure * self.conjugate();
        Point3::new(rotated.x, rotated.y, rotated.z)
    }

    /// The equivalent 3×3 rotation matrix
    ///
    /// Assumes a unit quaternion; useful for interoperating with
    /// matrix-based pipelines.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Matrix3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
            2.0 * (x * y + w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - w * x),
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            1.0 - 2.0 * (x * x + y * y),
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w: {:.6}, x: {:.6}, y: {:.6}, z: {:.6})",
            self.w, self.x, self.y, self.z
        )
    }
}

// Hamilton product
impl std::ops::Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl std::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl std::ops::Div for Quaternion {
    type Output = Quaternion;

    fn div(self, rhs: Quaternion) -> Quaternion {
        self * rhs.inverse()
    }
}

impl std::ops::DivAssign for Quaternion {
    fn div_assign(&mut self, rhs: Quaternion) {
        *self = *self / rhs;
    }
}
