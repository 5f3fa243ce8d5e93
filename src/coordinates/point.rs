//! # 3D Point Module
//!
//! This module provides the Cartesian point representation used throughout
//! the transform engine: atom positions, translation offsets, and rotation
//! centers are all `Point3` values.
//!
//! ## Design Philosophy
//!
//! `Point3` is a plain immutable triple of `f64` components. Transform
//! operations never mutate their inputs; every geometric operation returns
//! a fresh value. This keeps forward/backward application side-effect-free
//! and makes the type trivially safe to share across threads.
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values:
//! - Values maintain full IEEE 754 double precision
//! - No normalization or conversion on construction
//! - Exact component-wise equality (`PartialEq`)
//!
//! ## Examples
//!
//! ```rust
//! use atomgrid::coordinates::point::Point3;
//!
//! let a = Point3::new(1.0, 0.0, 0.0);
//! let b = Point3::new(0.0, 1.0, 0.0);
//!
//! // Component-wise arithmetic
//! let sum = a + b;
//! assert_eq!(sum, Point3::new(1.0, 1.0, 0.0));
//!
//! // Vector products
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Point3::new(0.0, 0.0, 1.0));
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional Cartesian point
///
/// Represents a position or offset in 3D space. Serves double duty as the
/// input/output unit of transform application and as the translation and
/// rotation-center vectors of a rigid transform.
///
/// # Storage Strategy
///
/// - Each component stored as `f64` for maximum precision
/// - No internal transformations or normalizations
/// - Compatible with nalgebra `Vector3` for linear algebra operations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Point3 {
    /// Creates a new point from its three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    ///
    /// let p = Point3::new(1.0, 2.0, 3.0);
    /// assert_eq!(p.x, 1.0);
    /// assert_eq!(p.y, 2.0);
    /// assert_eq!(p.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// The origin (0, 0, 0)
    ///
    /// Default rotation center and translation of a non-random transform.
    pub fn origin() -> Self {
        Point3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Calculates the magnitude (length) of the vector from the origin
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    ///
    /// let p = Point3::new(3.0, 4.0, 0.0);
    /// assert_eq!(p.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized (unit) vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    ///
    /// let unit = Point3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert_eq!(unit.x, 0.6);
    /// assert_eq!(unit.y, 0.8);
    ///
    /// assert!(Point3::origin().normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Point3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Point3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    ///
    /// let x_axis = Point3::new(1.0, 0.0, 0.0);
    /// let y_axis = Point3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.dot(&y_axis), 0.0); // Perpendicular
    /// ```
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    ///
    /// let x_axis = Point3::new(1.0, 0.0, 0.0);
    /// let y_axis = Point3::new(0.0, 1.0, 0.0);
    /// let z_axis = x_axis.cross(&y_axis);
    /// assert_eq!(z_axis, Point3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to nalgebra `Vector3` for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atomgrid::coordinates::point::Point3;
    /// use nalgebra::Vector3;
    ///
    /// let vec: Vector3<f64> = Point3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec.x, 1.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Point3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Self::origin()
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;

    fn sub(self, other: Point3) -> Point3 {
        Point3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        Point3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, scalar: f64) -> Point3 {
        Point3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
