use std::fs;
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::tuple::Tuple;
use crate::transform::Transform;
use crate::error::Result;

/// One elementary transformation in a `TransformDescription`.
///
/// Serialized with an `op` tag, e.g. `{"op": "rotate_x", "radians": 1.57}`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Translate { x: f64, y: f64, z: f64 },
    Scale { x: f64, y: f64, z: f64 },
    Shear { xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64 },
    RotateX { radians: f64 },
    RotateY { radians: f64 },
    RotateZ { radians: f64 },
}

impl Step {
    /// Composes this step onto `t`, the same way the `Transform` builder
    /// methods do.
    pub fn compose(&self, t: Transform) -> Transform {
        match *self {
            Step::Translate { x, y, z } => t.translate(x, y, z),
            Step::Scale { x, y, z } => t.scale(x, y, z),
            Step::Shear { xy, xz, yx, yz, zx, zy } => t.shear(xy, xz, yx, yz, zx, zy),
            Step::RotateX { radians } => t.rotate_x(radians),
            Step::RotateY { radians } => t.rotate_y(radians),
            Step::RotateZ { radians } => t.rotate_z(radians),
        }
    }
}

/// A JSON description of a transform, and the points to push through it.
///
/// ```json
/// {
///     "steps": [
///         { "op": "translate", "x": 10.0, "y": 5.0, "z": 7.0 },
///         { "op": "scale", "x": 5.0, "y": 5.0, "z": 5.0 },
///         { "op": "rotate_x", "radians": 1.5707963267948966 }
///     ],
///     "points": [[1.0, 0.0, 1.0]]
/// }
/// ```
///
/// Steps compose in the order they are listed, like chained builder calls,
/// so the last step is the first one applied to a point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformDescription {
    pub steps: Vec<Step>,

    #[serde(default)]
    pub points: Vec<[f64; 3]>,
}

impl TransformDescription {
    pub fn from_json(json: &str) -> Result<TransformDescription> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a description file.
    pub fn load(path: &Path) -> Result<TransformDescription> {
        let json = fs::read_to_string(path)?;
        log::debug!("Loaded transform description from {}", path.display());

        TransformDescription::from_json(&json)
    }

    /// Builds the composed transform.
    pub fn transform(&self) -> Transform {
        self.steps.iter().fold(Transform::identity(), |t, step| step.compose(t))
    }

    /// Transforms every described point, pairing each input with its result.
    pub fn apply(&self) -> Vec<(Tuple, Tuple)> {
        let transform = self.transform();

        self.points.iter()
            .map(|[x, y, z]| {
                let p = Tuple::point(*x, *y, *z);
                (p, transform.apply(&p))
            })
            .collect()
    }
}

#[cfg(test)]
const CHAINED_JSON: &str = r#"{
    "steps": [
        { "op": "translate", "x": 10.0, "y": 5.0, "z": 7.0 },
        { "op": "scale", "x": 5.0, "y": 5.0, "z": 5.0 },
        { "op": "rotate_x", "radians": 1.5707963267948966 }
    ],
    "points": [[1.0, 0.0, 1.0]]
}"#;

#[test]
fn parse_steps() {
    let desc = TransformDescription::from_json(CHAINED_JSON).unwrap();

    assert_eq!(desc.steps, vec![
        Step::Translate { x: 10.0, y: 5.0, z: 7.0 },
        Step::Scale { x: 5.0, y: 5.0, z: 5.0 },
        Step::RotateX { radians: std::f64::consts::FRAC_PI_2 },
    ]);
    assert_eq!(desc.points, vec![[1.0, 0.0, 1.0]]);
}

#[test]
fn description_matches_builder() {
    let desc = TransformDescription::from_json(CHAINED_JSON).unwrap();
    let built = Transform::identity()
        .translate(10.0, 5.0, 7.0)
        .scale(5.0, 5.0, 5.0)
        .rotate_x(std::f64::consts::FRAC_PI_2);

    assert_eq!(desc.transform(), built);
    assert_eq!(desc.apply(), vec![
        (Tuple::point(1.0, 0.0, 1.0), Tuple::point(15.0, 0.0, 7.0)),
    ]);
}

#[test]
fn parse_shear_and_default_points() {
    let json = r#"{ "steps": [
        { "op": "shear", "xy": 1.0, "xz": 0.0, "yx": 0.0, "yz": 0.0, "zx": 0.0, "zy": 0.0 }
    ] }"#;
    let desc = TransformDescription::from_json(json).unwrap();

    assert!(desc.points.is_empty());
    assert_eq!(desc.transform().apply(&Tuple::point(2.0, 3.0, 4.0)),
        Tuple::point(5.0, 3.0, 4.0));
}

#[test]
fn unknown_step_is_an_error() {
    let json = r#"{ "steps": [ { "op": "explode" } ] }"#;

    assert!(matches!(
        TransformDescription::from_json(json),
        Err(crate::Error::Json(_))
    ));
}

#[test]
fn serialize_step() {
    let json = serde_json::to_string(&Step::RotateZ { radians: 0.5 }).unwrap();

    assert_eq!(json, r#"{"op":"rotate_z","radians":0.5}"#);
}
