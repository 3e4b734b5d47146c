//! Built-in reference figures.
//!
//! Each entry is ((cap in GB, speed in mb/s), expected seconds to reach the
//! cap). The table reporter prints the input pairs; the self-test suite checks
//! the expected seconds against [`crate::rate::seconds_to_cap`].

pub const CHECK_FIGURES: &[((f64, f64), f64)] = &[
    ((1.0, 1.0), 8000.0),
    ((250.0, 1.0), 2_000_000.0),
    ((250.0, 5.0), 400_000.0),
    ((250.0, 25.0), 80_000.0),
    ((250.0, 50.0), 40_000.0),
    ((250.0, 100.0), 20_000.0),
    ((250.0, 250.0), 8000.0),
    ((250.0, 1000.0), 2000.0),
    ((250.0, 10000.0), 200.0),
    ((300.0, 1.0), 2_400_000.0),
    ((300.0, 5.0), 480_000.0),
    ((300.0, 25.0), 96_000.0),
    ((300.0, 50.0), 48_000.0),
    ((300.0, 100.0), 24_000.0),
    ((300.0, 300.0), 8000.0),
    ((300.0, 1000.0), 2400.0),
    ((300.0, 10000.0), 240.0),
];
