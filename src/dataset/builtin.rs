//! A short PX4 log recorded over Sydney harbour, thinned out to a handful of
//! rows per channel. Used when no dataset file is configured.

use super::types::{AttitudeRow, FlightLog, FlightModeRow, PositionRow, SetpointRow};

const POSITION: &[(&str, f64, f64, f64)] = &[
    ("2019-05-13T16:38:49.599987+00:00", 151.210757, -33.861338, 20.952),
    ("2019-05-13T16:39:19.599987+00:00", 151.210957, -33.861238, 45.3),
    ("2019-05-13T16:39:49.599987+00:00", 151.211657, -33.860938, 78.1),
    ("2019-05-13T16:40:19.599987+00:00", 151.212857, -33.860238, 96.4),
    ("2019-05-13T16:40:49.599987+00:00", 151.214357, -33.859438, 101.2),
    ("2019-05-13T16:41:49.599987+00:00", 151.216857, -33.858638, 100.8),
    ("2019-05-13T16:42:49.599987+00:00", 151.218157, -33.860138, 99.7),
    ("2019-05-13T16:43:49.599987+00:00", 151.216857, -33.861738, 100.3),
    ("2019-05-13T16:44:49.599987+00:00", 151.213957, -33.862038, 72.5),
    ("2019-05-13T16:45:49.599987+00:00", 151.211557, -33.861538, 31.8),
    ("2019-05-13T16:46:41.002275+00:00", 151.210777, -33.861328, 21.004),
];

const ATTITUDE: &[(&str, f64, f64, f64, f64)] = &[
    ("2019-05-13T16:38:49.599987+00:00", 0.0, 0.0, 0.000000, 1.000000),
    ("2019-05-13T16:39:19.599987+00:00", 0.0, 0.0, 0.043619, 0.999048),
    ("2019-05-13T16:39:49.599987+00:00", 0.0, 0.0, 0.104528, 0.994522),
    ("2019-05-13T16:40:19.599987+00:00", 0.0, 0.0, 0.173648, 0.984808),
    ("2019-05-13T16:40:49.599987+00:00", 0.0, 0.0, 0.300706, 0.953717),
    ("2019-05-13T16:41:49.599987+00:00", 0.0, 0.0, 0.500000, 0.866025),
    ("2019-05-13T16:42:49.599987+00:00", 0.0, 0.0, 0.819152, 0.573576),
    ("2019-05-13T16:43:49.599987+00:00", 0.0, 0.0, 0.996195, 0.087156),
    ("2019-05-13T16:44:49.599987+00:00", 0.0, 0.0, 0.939693, -0.342020),
    ("2019-05-13T16:45:49.599987+00:00", 0.0, 0.0, 0.766044, -0.642788),
    ("2019-05-13T16:46:41.002275+00:00", 0.0, 0.0, 0.737277, -0.675590),
];

const FLIGHT_MODES: &[(&str, &str)] = &[
    ("2019-05-13T16:38:49.599987+00:00", "Position"),
    ("2019-05-13T16:39:02.104311+00:00", "Takeoff"),
    ("2019-05-13T16:40:31.877120+00:00", "Mission"),
    ("2019-05-13T16:44:12.530004+00:00", "Return"),
    ("2019-05-13T16:45:58.215906+00:00", "Land"),
    ("2019-05-13T16:46:41.002275+00:00", "Land"),
];

const MANUAL_CONTROL_SETPOINTS: &[(&str, f64, f64, f64, f64)] = &[
    ("2019-05-13T16:38:49.599987+00:00", 0.0, 0.0, 0.5, 0.0),
    ("2019-05-13T16:38:55.012466+00:00", 0.02, -0.01, 0.74, 0.0),
    ("2019-05-13T16:39:02.104311+00:00", 0.0, 0.0, 0.5, 0.0),
    ("2019-05-13T16:44:05.871236+00:00", -0.12, 0.08, 0.5, 0.15),
    ("2019-05-13T16:44:12.530004+00:00", 0.0, 0.0, 0.5, 0.0),
    ("2019-05-13T16:46:41.002275+00:00", 0.0, 0.0, 0.0, 0.0),
];

pub fn sample_log() -> FlightLog {
    FlightLog {
        position: POSITION
            .iter()
            .map(|&(t, lon, lat, alt)| PositionRow(t.into(), lon, lat, alt))
            .collect(),
        attitude: ATTITUDE
            .iter()
            .map(|&(t, x, y, z, w)| AttitudeRow(t.into(), x, y, z, w))
            .collect(),
        flight_modes: FLIGHT_MODES
            .iter()
            .map(|&(t, mode)| FlightModeRow(t.into(), mode.into()))
            .collect(),
        manual_control_setpoints: MANUAL_CONTROL_SETPOINTS
            .iter()
            .map(|&(t, x, y, z, r)| SetpointRow(t.into(), x, y, z, r))
            .collect(),
    }
}
