// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![cfg(feature = "serde")]
use geek_math::{Mat3i, Quatf, Vec3f};

#[test]
fn vectors_serialize_as_component_arrays() {
    let json = serde_json::to_string(&Vec3f::new(1.0, 2.5, -3.0)).unwrap();
    assert_eq!(json, r#"{"data":[1.0,2.5,-3.0]}"#);
    let back: Vec3f = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Vec3f::new(1.0, 2.5, -3.0));
}

#[test]
fn quaternions_and_matrices_deserialize() {
    let q: Quatf = serde_json::from_str(r#"{"data":[0.0,0.0,0.0,1.0]}"#).unwrap();
    assert_eq!(q, Quatf::identity());

    let m: Mat3i = serde_json::from_str(r#"{"rows":[[1,0,0],[0,1,0],[0,0,1]]}"#).unwrap();
    assert_eq!(m, Mat3i::identity());
}
