use approx::assert_relative_eq;
use nalgebra::Vector3;
use units::constants::AU_M;

use crate::scale::DistanceScale;

#[test]
fn linear_scale() {
    let scale = DistanceScale::Linear { units_per_au: 100.0 };
    assert_relative_eq!(scale.apply(2.0 * AU_M), 200.0, max_relative = 1e-12);
    assert_relative_eq!(DistanceScale::default().apply(AU_M), 1.0);
}

#[test]
fn logarithmic_scale_compresses() {
    let scale = DistanceScale::Logarithmic { units_per_decade: 10.0 };

    assert_relative_eq!(scale.apply(9.0 * AU_M), 10.0, max_relative = 1e-12);
    assert_relative_eq!(scale.apply(99.0 * AU_M), 20.0, max_relative = 1e-12);
    assert_eq!(scale.apply(0.0), 0.0);
}

#[test]
fn vector_direction_is_preserved() {
    let scale = DistanceScale::Logarithmic { units_per_decade: 1.0 };
    let position = Vector3::new(3.0, 4.0, 0.0) * AU_M;
    let scaled = scale.apply_vector(position);

    assert_relative_eq!(scaled.norm(), 6.0_f64.log10(), max_relative = 1e-12);
    assert_relative_eq!(scaled.x / scaled.y, 0.75, max_relative = 1e-12);
    assert_eq!(scale.apply_vector(Vector3::zeros()), Vector3::zeros());
}

#[test]
fn serde_tagged_form() {
    let json =
        serde_json::to_string(&DistanceScale::Logarithmic { units_per_decade: 2.0 }).unwrap();
    assert_eq!(json, r#"{"kind":"logarithmic","unitsPerDecade":2.0}"#);

    let back: DistanceScale =
        serde_json::from_str(r#"{"kind":"linear","unitsPerAu":5.0}"#).unwrap();
    assert_eq!(back, DistanceScale::Linear { units_per_au: 5.0 });
}
