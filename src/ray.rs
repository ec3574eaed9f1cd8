use crate::tuple::Tuple;
use crate::transform::Transform;

/// A ray, starting at `origin` and heading along `direction`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Creates a ray. The origin is forced to be a point and the direction a
    /// vector.
    pub fn new(mut origin: Tuple, mut direction: Tuple) -> Ray {
        if !origin.is_point() {
            origin.w = 1.0;
        }

        if !direction.is_vector() {
            direction.w = 0.0;
        }

        Ray { origin, direction }
    }

    /// The point at distance `t` along the ray.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + (t * self.direction)
    }

    pub fn transform(&self, m: &Transform) -> Ray {
        Ray {
            origin: m.apply(&self.origin),
            direction: m.apply(&self.direction),
        }
    }
}

#[test]
fn ray_new_forces_point_and_vector() {
    let r = Ray::new(
                Tuple::tuple(1.0, 2.0, 3.0, 0.0),
                Tuple::tuple(4.0, 5.0, 6.0, 1.0)
            );

    assert_eq!(r.origin, Tuple::point(1.0, 2.0, 3.0));
    assert_eq!(r.direction, Tuple::vector(4.0, 5.0, 6.0));
}

#[test]
fn ray_position() {
    let r = Ray::new(
                Tuple::point(2.0, 3.0, 4.0),
                Tuple::vector(1.0, 0.0, 0.0)
            );

    assert_eq!(r.position(0.0), Tuple::point(2.0, 3.0, 4.0));
    assert_eq!(r.position(1.0), Tuple::point(3.0, 3.0, 4.0));
    assert_eq!(r.position(-1.0), Tuple::point(1.0, 3.0, 4.0));
    assert_eq!(r.position(2.5), Tuple::point(4.5, 3.0, 4.0));
}

#[test]
fn ray_translation() {
    let r = Ray::new(
                Tuple::point(1.0, 2.0, 3.0),
                Tuple::vector(0.0, 1.0, 0.0)
            );
    let m = Transform::translation(3.0, 4.0, 5.0);
    let t = r.transform(&m);

    assert_eq!(t.origin, Tuple::point(4.0, 6.0, 8.0));
    assert_eq!(t.direction, Tuple::vector(0.0, 1.0, 0.0));
}

#[test]
fn ray_scaling() {
    let r = Ray::new(
                Tuple::point(1.0, 2.0, 3.0),
                Tuple::vector(0.0, 1.0, 0.0)
            );
    let m = Transform::scaling(2.0, 3.0, 4.0);
    let t = r.transform(&m);

    assert_eq!(t.origin, Tuple::point(2.0, 6.0, 12.0));
    assert_eq!(t.direction, Tuple::vector(0.0, 3.0, 0.0));
}
