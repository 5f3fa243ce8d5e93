pub mod quaternion;

pub use quaternion::Quaternion;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Point3;
    use std::f64::consts::PI;

    #[test]
    fn test_quaternion_reexport() {
        let q = Quaternion::from_axis_angle(Point3::new(0.0, 0.0, 1.0), PI);
        // Half turn about z negates x and y.
        let p = q.rotate(Point3::new(1.0, 1.0, 0.5));
        assert!((p.x + 1.0).abs() < 1e-12);
        assert!((p.y + 1.0).abs() < 1e-12);
        assert!((p.z - 0.5).abs() < 1e-12);
    }
}
