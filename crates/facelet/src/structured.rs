//! Structured (JSON) form of a cube: an object mapping each face letter to
//! its nine color codes.
//!
//! ```json
//! {
//!   "U": ["W", "W", "W", "W", "W", "W", "W", "W", "W"],
//!   "R": ["R", "R", "R", "R", "R", "R", "R", "R", "R"],
//!   ...
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Cube, Face, FaceArray, LoadCubeError};

/// Serialization representation of [`Cube`].
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct CubeRepr {
    #[serde(rename = "U")]
    up: FaceArray,
    #[serde(rename = "R")]
    right: FaceArray,
    #[serde(rename = "F")]
    front: FaceArray,
    #[serde(rename = "D")]
    down: FaceArray,
    #[serde(rename = "L")]
    left: FaceArray,
    #[serde(rename = "B")]
    back: FaceArray,
}

impl From<CubeRepr> for Cube {
    fn from(value: CubeRepr) -> Self {
        let CubeRepr {
            up,
            right,
            front,
            down,
            left,
            back,
        } = value;
        Cube::from_faces([up, right, front, down, left, back])
    }
}

impl From<Cube> for CubeRepr {
    fn from(cube: Cube) -> Self {
        let [up, right, front, down, left, back] = *cube.faces();
        CubeRepr {
            up,
            right,
            front,
            down,
            left,
            back,
        }
    }
}

/// Returns the structured form of `cube`, with keys in the order
/// `U R F D L B`.
pub fn to_structured(cube: &Cube) -> Value {
    let map: Map<String, Value> = Face::ALL
        .iter()
        .map(|&face| {
            let colors = cube[face]
                .0
                .iter()
                .map(|c| Value::String(c.to_string()))
                .collect();
            (face.to_string(), Value::Array(colors))
        })
        .collect();
    Value::Object(map)
}

/// Loads a cube from its structured form.
pub fn from_structured(value: &Value) -> Result<Cube, LoadCubeError> {
    Ok(CubeRepr::deserialize(value)?.into())
}

/// Returns the structured form of `cube` as pretty-printed JSON.
pub fn to_json(cube: &Cube) -> String {
    format!("{:#}", to_structured(cube))
}

/// Loads a cube from JSON produced by [`to_json()`].
pub fn from_json(s: &str) -> Result<Cube, LoadCubeError> {
    Ok(serde_json::from_str::<CubeRepr>(s)?.into())
}
