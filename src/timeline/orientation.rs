use nalgebra::{Matrix3, Quaternion, Rotation3, UnitQuaternion, Vector3};

use super::error::TimelineError;
use super::sample::{collect_samples, Geodetic};
use super::step::StepTrack;
use crate::dataset::AttitudeRow;

/// Yaw that turns the logged body-forward axis onto the model's forward axis.
pub const BODY_YAW_CORRECTION_DEG: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawQuaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl RawQuaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Negates the second and third components to flip frame handedness.
    /// Applying it twice gives back the input.
    pub fn handedness_corrected(self) -> Self {
        Self {
            y: -self.y,
            z: -self.z,
            ..self
        }
    }

    pub fn normalized(self) -> Option<UnitQuaternion<f64>> {
        UnitQuaternion::try_new(Quaternion::new(self.w, self.x, self.y, self.z), f64::EPSILON)
    }
}

impl From<&AttitudeRow> for RawQuaternion {
    fn from(row: &AttitudeRow) -> Self {
        Self::new(row.1, row.2, row.3, row.4)
    }
}

/// Columns are the east, north and up axes at `lat`/`lon` in ECEF.
pub fn enu_to_ecef_matrix(lat_rad: f64, lon_rad: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();

    #[rustfmt::skip]
    let matrix = Matrix3::new(
        -sin_lon, -sin_lat * cos_lon, cos_lat * cos_lon,
        cos_lon, -sin_lat * sin_lon, cos_lat * sin_lon,
        0.0, cos_lat, sin_lat,
    );
    matrix
}

/// Fixed rotation from the vehicle's local frame at an origin into the
/// earth-fixed frame. Derived once and applied to every attitude sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCorrection {
    rotation: UnitQuaternion<f64>,
}

impl FrameCorrection {
    pub fn at(origin: &Geodetic) -> Self {
        let enu = enu_to_ecef_matrix(origin.lat_rad(), origin.lon_rad());
        let yaw = Rotation3::from_axis_angle(
            &Vector3::z_axis(),
            BODY_YAW_CORRECTION_DEG.to_radians(),
        );
        let matrix = enu * yaw.matrix();

        Self {
            rotation: UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
                matrix,
            )),
        }
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }

    pub fn apply(&self, attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        self.rotation * attitude
    }
}

/// Each row is handedness corrected, normalized and rotated by `correction`.
pub fn build_orientation_track(
    rows: &[AttitudeRow],
    correction: &FrameCorrection,
) -> Result<StepTrack<UnitQuaternion<f64>>, TimelineError> {
    let samples = collect_samples(rows, |index, row| {
        RawQuaternion::from(row)
            .handedness_corrected()
            .normalized()
            .map(|q| correction.apply(&q))
            .ok_or(TimelineError::DegenerateQuaternion { index })
    })?;
    StepTrack::from_samples(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::time::parse_timestamp;
    use approx::assert_relative_eq;

    const SYDNEY: Geodetic = Geodetic {
        longitude_deg: 151.210757,
        latitude_deg: -33.861338,
        altitude_m: 300.0,
    };

    fn row(t: &str, x: f64, y: f64, z: f64, w: f64) -> AttitudeRow {
        AttitudeRow(t.into(), x, y, z, w)
    }

    #[test]
    fn enu_matrix_is_a_rotation() {
        let m = enu_to_ecef_matrix(SYDNEY.lat_rad(), SYDNEY.lon_rad());
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn up_axis_points_away_from_earth_centre() {
        let m = enu_to_ecef_matrix(SYDNEY.lat_rad(), SYDNEY.lon_rad());
        let up = m.column(2).into_owned();
        let radial = Geodetic { altitude_m: 0.0, ..SYDNEY }.to_ecef().normalize();
        assert!(up.dot(&radial) > 0.99);
    }

    #[test]
    fn correction_at_equator_prime_meridian() {
        let correction = FrameCorrection::at(&Geodetic::new(0.0, 0.0, 0.0));
        let r = correction.rotation();
        // body x -> north (ECEF z), body y -> west (ECEF -y), body z -> up (ECEF x)
        assert_relative_eq!(r * Vector3::x(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::y(), -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::z(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn correction_is_reproducible() {
        let a = FrameCorrection::at(&SYDNEY);
        let b = FrameCorrection::at(&SYDNEY);
        assert_eq!(a, b);
        assert_relative_eq!(a.rotation(), b.rotation(), epsilon = 1e-15);
    }

    #[test]
    fn correction_ignores_origin_altitude() {
        let low = FrameCorrection::at(&Geodetic { altitude_m: 0.0, ..SYDNEY });
        let high = FrameCorrection::at(&SYDNEY);
        assert_relative_eq!(low.rotation(), high.rotation(), epsilon = 1e-15);
    }

    #[test]
    fn handedness_correction_is_an_involution() {
        let raw = RawQuaternion::new(0.1, -0.2, 0.3, 0.9);
        let once = raw.handedness_corrected();
        assert_eq!(once, RawQuaternion::new(0.1, 0.2, -0.3, 0.9));
        assert_eq!(once.handedness_corrected(), raw);
    }

    #[test]
    fn identity_attitude_yields_the_correction() {
        let correction = FrameCorrection::at(&SYDNEY);
        let rows = vec![
            row("2019-05-13T16:38:49Z", 0.0, 0.0, 0.0, 1.0),
            row("2019-05-13T16:38:50Z", 0.0, 0.0, 0.0, 1.0),
        ];
        let track = build_orientation_track(&rows, &correction).unwrap();
        assert_eq!(track.len(), 1);
        assert_relative_eq!(
            &track.intervals()[0].value,
            correction.rotation(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn samples_are_corrected_then_normalized_then_rotated() {
        let correction = FrameCorrection::at(&SYDNEY);
        let rows = vec![
            row("2019-05-13T16:38:49Z", 0.0, 0.0, 2.0, 2.0),
            row("2019-05-13T16:38:50Z", 0.0, 0.0, 0.0, 1.0),
        ];
        let track = build_orientation_track(&rows, &correction).unwrap();

        let expected_local = UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            (-90.0f64).to_radians(),
        );
        let expected = correction.rotation() * expected_local;
        let at = parse_timestamp("2019-05-13T16:38:49.5Z").unwrap();
        assert_relative_eq!(track.value_at(at).unwrap(), &expected, epsilon = 1e-12);
    }

    #[test]
    fn last_attitude_sample_is_dropped() {
        let correction = FrameCorrection::at(&SYDNEY);
        let rows = vec![
            row("2019-05-13T16:38:49Z", 0.0, 0.0, 0.0, 1.0),
            row("2019-05-13T16:38:50Z", 0.0, 0.0, 0.0, 1.0),
            row("2019-05-13T16:38:51Z", 0.0, 0.0, 1.0, 0.0),
        ];
        let track = build_orientation_track(&rows, &correction).unwrap();
        assert_eq!(track.len(), 2);
        assert!(track
            .value_at(parse_timestamp("2019-05-13T16:38:51Z").unwrap())
            .is_none());
    }

    #[test]
    fn zero_quaternion_is_an_error() {
        let correction = FrameCorrection::at(&SYDNEY);
        let rows = vec![
            row("2019-05-13T16:38:49Z", 0.0, 0.0, 0.0, 1.0),
            row("2019-05-13T16:38:50Z", 0.0, 0.0, 0.0, 0.0),
            row("2019-05-13T16:38:51Z", 0.0, 0.0, 0.0, 1.0),
        ];
        assert!(matches!(
            build_orientation_track(&rows, &correction),
            Err(TimelineError::DegenerateQuaternion { index: 1 })
        ));
    }
}
