//! Per-ray colouring: surface normals on the sphere, a sky gradient elsewhere.

use num_traits::Float;

use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::tensor::{point, vec3, Vec3};

/// RGB colour with components nominally in `[0, 1]`.
pub type Colour<T = f64> = Vec3<T>;

/// Center of the default scene sphere.
pub const SPHERE_CENTER: [f64; 3] = [0.0, 0.0, 1.0];

/// Radius of the default scene sphere.
pub const SPHERE_RADIUS: f64 = 0.8;

fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

/// Vertical gradient shown where rays miss the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background<T = f64> {
    /// Colour for rays pointing straight down.
    pub bottom: Colour<T>,
    /// Colour for rays pointing straight up.
    pub top: Colour<T>,
}

impl<T: Float> Background<T> {
    /// Gradient from `bottom` to `top`.
    pub fn new(bottom: Colour<T>, top: Colour<T>) -> Self {
        Self { bottom, top }
    }

    /// Linear blend `(1 - s) * bottom + s * top`.
    pub fn at(&self, s: T) -> Colour<T> {
        self.bottom.scale(T::one() - s) + self.top.scale(s)
    }

    /// Background seen along `direction`, blended by its normalized height.
    pub fn colour(&self, direction: &Vec3<T>) -> Colour<T> {
        let unit_direction = direction.normalize();
        // y = -1 (down) gives s = 0, y = 1 (up) gives s = 1
        let s = half::<T>() * (unit_direction.y() + T::one());
        self.at(s)
    }
}

impl Default for Background {
    /// White at the bottom, sky blue at the top.
    fn default() -> Self {
        Self::new(vec3(1.0, 1.0, 1.0), vec3(0.5, 0.7, 1.0))
    }
}

/// Colours rays against a single sphere in front of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shader<T = f64> {
    sphere: Sphere<T>,
    background: Background<T>,
}

impl Shader {
    /// Shader for `sphere` in front of the default white-to-sky-blue gradient.
    pub fn new(sphere: Sphere) -> Self {
        Self::with_background(sphere, Background::default())
    }
}

impl<T: Float> Shader<T> {
    /// Shader for `sphere` in front of a custom gradient.
    pub fn with_background(sphere: Sphere<T>, background: Background<T>) -> Self {
        Self { sphere, background }
    }

    /// The scene sphere.
    pub fn sphere(&self) -> &Sphere<T> {
        &self.sphere
    }

    /// The background gradient.
    pub fn background(&self) -> &Background<T> {
        &self.background
    }

    /// Colour seen along `ray`.
    ///
    /// A positive hit parameter shades the sphere by its surface normal, each
    /// component remapped from `[-1, 1]` to `[0, 1]`. Anything else shows the
    /// background.
    pub fn colour(&self, ray: &Ray<T>) -> Colour<T> {
        let t = self.sphere.hit(ray);
        if t > T::zero() {
            return normal_colour(&(ray.at(t) - self.sphere.center));
        }

        self.background.colour(&ray.direction())
    }
}

impl Default for Shader {
    /// The sphere at `(0, 0, 1)` with radius 0.8 and the default background.
    fn default() -> Self {
        Self::new(Sphere::new(point(SPHERE_CENTER), SPHERE_RADIUS))
    }
}

/// Maps a surface normal to a colour, `0.5 * (normalize(n) + 1)` per component.
fn normal_colour<T: Float>(normal: &Vec3<T>) -> Colour<T> {
    normal.normalize().map(|n| half::<T>() * (n + T::one()))
}
