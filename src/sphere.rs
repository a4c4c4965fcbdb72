//! Sphere primitive and ray-sphere intersection.
//!
//! Substituting `origin + t * direction` into `|P - center|^2 = radius^2` gives
//! `a t^2 + 2 half_b t + c = 0` with
//!
//! - `a = |direction|^2`
//! - `half_b = direction . (origin - center)`
//! - `c = |origin - center|^2 - radius^2`
//!
//! and the reduced discriminant `half_b^2 - a c` decides whether real roots exist.

use log::trace;
use num_traits::Float;

use crate::ray::Ray;
use crate::tensor::{dot, length_squared, Point3};

/// Hit parameter returned when the ray's line misses the sphere entirely.
fn miss<T: Float>() -> T {
    -T::one()
}

/// Solves for where `ray` meets the sphere at `center` with `radius`.
///
/// Returns `-1` when the line misses. Otherwise returns the larger root,
/// `(-half_b + sqrt(half_b^2 - a c)) / a`: the far side of the sphere for a ray
/// starting in front of it, and the exit point for a ray starting inside. Only
/// positive values are usable hit parameters.
pub fn hit_sphere<T: Float>(center: &Point3<T>, radius: T, ray: &Ray<T>) -> T {
    let direction = ray.direction();
    let oc = ray.origin() - *center;

    let a = length_squared(&direction).value();
    let half_b = dot(&direction, &oc);
    let c = length_squared(&oc).value() - radius * radius;

    let quarter_discriminant = half_b * half_b - a * c;
    if quarter_discriminant < T::zero() {
        return miss();
    }

    (-half_b + quarter_discriminant.sqrt()) / a
}

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<T = f64> {
    /// Center point of the sphere in world coordinates.
    pub center: Point3<T>,

    /// Radius of the sphere (always non-negative).
    pub radius: T,
}

impl<T: Float> Sphere<T> {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self {
            center,
            radius: radius.max(T::zero()),
        }
    }

    /// Hit parameter of `ray` against this sphere, see [`hit_sphere`].
    pub fn hit(&self, ray: &Ray<T>) -> T {
        let t = hit_sphere(&self.center, self.radius, ray);
        if t > T::zero() {
            trace!("ray hit sphere at t = {}", t.to_f64().unwrap_or(f64::NAN));
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tensor::vec3;

    fn scene_sphere() -> Sphere {
        Sphere::new(vec3(0.0, 0.0, 1.0), 0.8)
    }

    #[test]
    fn ray_along_axis_hits() {
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        let t = hit_sphere(&vec3(0.0, 0.0, 1.0), 0.8, &ray);
        assert!(t > 0.0);
    }

    #[test]
    fn sideways_ray_misses_with_sentinel() {
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert_eq!(hit_sphere(&vec3(0.0, 0.0, 1.0), 0.8, &ray), -1.0);
        assert_eq!(miss::<f32>(), -1.0);
    }

    #[test]
    fn larger_root_is_reported_from_outside() {
        // Entry at t = 0.2, exit at t = 1.8; the exit is what comes back.
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert_relative_eq!(scene_sphere().hit(&ray), 1.8);
    }

    #[test]
    fn larger_root_is_reported_from_inside() {
        // Starting at the center the roots are -0.8 and 0.8; the far exit wins.
        let ray = Ray::new(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0));
        assert_relative_eq!(scene_sphere().hit(&ray), 0.8);
    }

    #[test]
    fn sphere_behind_ray_gives_negative_parameter() {
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(scene_sphere().hit(&ray) < 0.0);
    }

    #[test]
    fn tangent_ray_touches_once() {
        let sphere = Sphere::new(vec3(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(vec3(0.5, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(sphere.hit(&ray), 1.0);
    }

    #[test]
    fn hit_parameter_scales_with_direction_length() {
        let unit = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        let doubled = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0));
        let sphere = scene_sphere();
        assert_relative_eq!(sphere.hit(&doubled) * 2.0, sphere.hit(&unit));
    }

    #[test]
    fn hits_are_traced_for_any_float_width() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();

        let sphere = Sphere::new(vec3(0.0_f32, 0.0, 1.0), 0.8);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert_relative_eq!(sphere.hit(&ray), 1.8, epsilon = 1e-6);
    }

    #[test]
    fn negative_radius_is_clamped() {
        assert_eq!(Sphere::new(vec3(0.0, 0.0, 0.0), -2.0).radius, 0.0);
    }
}
