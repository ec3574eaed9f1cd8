//! Small programs exercising the tuple, matrix and transform code.

use std::fmt;
use std::f64::consts::PI;

use crate::tuple::Tuple;
use crate::color::Color;
use crate::matrix::Matrix;
use crate::transform::Transform;
use crate::canvas::Canvas;
use crate::consts::MAX_PROJECTILE_TICKS;
use crate::error::Result;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub pos: Tuple,
    pub vel: Tuple,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Environment {
    pub grav: Tuple,
    pub wind: Tuple,
}

impl Environment {
    /// Advances a projectile by one tick, based on environmental conditions.
    ///
    /// The projectile moves by its velocity, and the velocity picks up the
    /// gravity and wind. Velocity, gravity and wind are all vectors.
    pub fn tick(&self, proj: &Projectile) -> Projectile {
        let pos = proj.pos + proj.vel;
        let vel = proj.vel + self.grav + self.wind;

        Projectile { pos, vel }
    }

    /// Ticks the projectile until it falls to the ground (`y <= 0`).
    ///
    /// Returns every position the projectile held while in the air, starting
    /// with its initial one. Gives up after `MAX_PROJECTILE_TICKS`, for
    /// environments that never bring it down.
    pub fn trace(&self, proj: &Projectile) -> Vec<Tuple> {
        let mut proj = *proj;
        let mut positions = Vec::new();

        while proj.pos.y > 0.0 && positions.len() < MAX_PROJECTILE_TICKS {
            positions.push(proj.pos);
            proj = self.tick(&proj);
        }

        log::debug!("Projectile landed after {} ticks at {}", positions.len(), proj.pos);
        positions
    }
}

/// Plots the flight of the standard projectile onto a `width` x `height`
/// canvas, with `y` growing upwards.
pub fn projectile_canvas(width: usize, height: usize) -> Result<Canvas> {
    let proj = Projectile {
        pos: Tuple::point(0.0, 1.0, 0.0),
        vel: Tuple::vector(1.0, 1.8, 0.0).normalize()? * 11.25,
    };
    let env = Environment {
        grav: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };

    let mut canvas = Canvas::new(width, height);
    let color = Color::rgb(1.0, 0.5, 0.5);
    for pos in env.trace(&proj) {
        let x = pos.x.round();
        let y = height as f64 - pos.y.round();
        if x >= 0.0 && y >= 0.0 {
            canvas.write_pixel(x as usize, y as usize, &color);
        }
    }

    Ok(canvas)
}

/// Draws the twelve hour marks of a clock face on a `size` x `size` canvas.
///
/// Each mark is the point `(0, 1, 0)` scaled to the clock radius, rotated
/// about the Z axis by its hour, and moved to the middle of the canvas.
pub fn clock_face(size: usize) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    let center = size as f64 / 2.0;
    let radius = size as f64 * 3.0 / 8.0;
    let twelve = Tuple::point(0.0, 1.0, 0.0);

    for hour in 0..12 {
        let t = Transform::identity()
            .translate(center, center, 0.0)
            .rotate_z(hour as f64 * PI / 6.0)
            .scale(radius, radius, 1.0);
        let mark = t.apply(&twelve);

        canvas.write_pixel(mark.x.round() as usize, mark.y.round() as usize, &Color::white());
    }

    canvas
}

/// Answers to the matrix "things to think about" of the matrices chapter.
#[derive(Clone, Debug)]
pub struct Reflections {
    /// The inverse of the identity matrix.
    pub identity_inverse: Matrix,

    /// A matrix multiplied by its own inverse.
    pub product_with_inverse: Matrix,

    pub inverse_of_transpose: Matrix,
    pub transpose_of_inverse: Matrix,

    /// The identity, with one element changed, multiplied by `(1, 2, 3, 4)`.
    pub perturbed_identity_product: Tuple,
}

pub fn matrix_reflections() -> Result<Reflections> {
    let a: Matrix = [  3.0, -9.0,  7.0,  3.0,
                       3.0, -8.0,  2.0, -9.0,
                      -4.0,  4.0,  4.0,  1.0,
                      -6.0,  5.0, -1.0,  1.0, ].into();

    let identity_inverse = Matrix::identity(4).invert()?;
    let product_with_inverse = a.multiply(&a.invert()?)?;
    let inverse_of_transpose = a.transpose().invert()?;
    let transpose_of_inverse = a.invert()?.transpose();

    let mut perturbed = Matrix::identity(4);
    perturbed[(0, 1)] = 2.0;
    let perturbed_identity_product =
        perturbed.multiply_tuple(&Tuple::tuple(1.0, 2.0, 3.0, 4.0))?;

    Ok(Reflections {
        identity_inverse,
        product_with_inverse,
        inverse_of_transpose,
        transpose_of_inverse,
        perturbed_identity_product,
    })
}

impl fmt::Display for Reflections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inverse of the identity:\n{}\n", self.identity_inverse)?;
        writeln!(f, "A matrix times its inverse:\n{}\n", self.product_with_inverse)?;
        writeln!(f, "Inverse of the transpose:\n{}\n", self.inverse_of_transpose)?;
        writeln!(f, "Transpose of the inverse:\n{}\n", self.transpose_of_inverse)?;
        write!(f, "Perturbed identity times (1, 2, 3, 4): {}", self.perturbed_identity_product)
    }
}

#[test]
fn tick_moves_projectile() {
    let proj = Projectile {
        pos: Tuple::point(0.0, 1.0, 0.0),
        vel: Tuple::vector(1.0, 1.0, 0.0),
    };
    let env = Environment {
        grav: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };

    let next = env.tick(&proj);
    assert_eq!(next.pos, Tuple::point(1.0, 2.0, 0.0));
    assert_eq!(next.vel, Tuple::vector(0.99, 0.9, 0.0));
}

#[test]
fn trace_ends_on_the_ground() {
    let proj = Projectile {
        pos: Tuple::point(0.0, 1.0, 0.0),
        vel: Tuple::vector(1.0, 1.0, 0.0).normalize().unwrap(),
    };
    let env = Environment {
        grav: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };

    let positions = env.trace(&proj);
    assert_eq!(positions[0], proj.pos);
    assert!(positions.iter().all(|p| p.y > 0.0 && p.is_point()));
    assert!(positions.len() > 1 && positions.len() < MAX_PROJECTILE_TICKS);
}

#[test]
fn trace_gives_up() {
    let proj = Projectile {
        pos: Tuple::point(0.0, 1.0, 0.0),
        vel: Tuple::vector(0.0, 1.0, 0.0),
    };

    let positions = Environment::default().trace(&proj);
    assert_eq!(positions.len(), MAX_PROJECTILE_TICKS);
}

#[test]
fn projectile_canvas_has_trail() {
    let canvas = projectile_canvas(900, 550).unwrap();
    let lit = (0..550)
        .flat_map(|y| (0..900).map(move |x| (x, y)))
        .filter(|(x, y)| canvas.read_pixel(*x, *y).unwrap() != Color::black())
        .count();

    assert!(lit > 100);
}

#[test]
fn clock_face_has_twelve_marks() {
    let canvas = clock_face(80);
    let marks: Vec<(usize, usize)> = (0..80)
        .flat_map(|y| (0..80).map(move |x| (x, y)))
        .filter(|(x, y)| canvas.read_pixel(*x, *y).unwrap() == Color::white())
        .collect();

    assert_eq!(marks.len(), 12);
    // Twelve o'clock: (0, 1, 0) scaled by 30, moved to (40, 40)
    assert!(marks.contains(&(40, 70)));
    // Three o'clock: rotated a quarter turn
    assert!(marks.contains(&(10, 40)));
}

#[test]
fn reflections() {
    let r = matrix_reflections().unwrap();

    assert_eq!(r.identity_inverse, Matrix::identity(4));
    assert_eq!(r.product_with_inverse, Matrix::identity(4));
    assert_eq!(r.inverse_of_transpose, r.transpose_of_inverse);
    assert_eq!(r.perturbed_identity_product, Tuple::tuple(5.0, 2.0, 3.0, 4.0));
}
