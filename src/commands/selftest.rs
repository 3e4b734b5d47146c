/// Self-test command — verifies the built-in figures and decomposition
/// vectors at runtime, one line per check plus a summary.
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::duration::Breakdown;
use crate::error::CaptimeError;
use crate::figures::CHECK_FIGURES;
use crate::rate;

/// Known decompositions: (input seconds, (years, days, hours, minutes, seconds)).
const DECOMPOSE_VECTORS: &[(f64, (u64, u64, u64, u64, f64))] = &[
    (1.0, (0, 0, 0, 0, 1.0)),
    (60.0, (0, 0, 0, 1, 0.0)),
    (3600.0, (0, 0, 1, 0, 0.0)),
    (86400.0, (0, 1, 0, 0, 0.0)),
    (31557600.0, (1, 0, 0, 0, 0.0)),
    (31647661.0, (1, 1, 1, 1, 1.0)),
    (2000.0, (0, 0, 0, 33, 20.0)),
];

pub fn run_selftest() -> anyhow::Result<()> {
    let mut failed = 0usize;
    let mut total = 0usize;

    // ── 1. Rate conversion against the figure set ────────────────────────
    for &((cap, speed), expected) in CHECK_FIGURES {
        total += 1;
        let seconds = rate::seconds_to_cap(cap, speed)?;
        if seconds == expected {
            println!("ok    seconds_to_cap({cap}, {speed}) == {expected}");
        } else {
            failed += 1;
            println!(
                "{}  seconds_to_cap({cap}, {speed}) == {seconds}, expected {expected}",
                "FAIL".if_supports_color(Stdout, |t| t.red())
            );
        }
    }

    // ── 2. Duration decomposition against the fixed vectors ──────────────
    for &(input, (years, days, hours, minutes, seconds)) in DECOMPOSE_VECTORS {
        total += 1;
        let expected = Breakdown {
            years,
            days,
            hours,
            minutes,
            seconds,
        };
        let got = Breakdown::from_seconds(input);
        if got == expected {
            println!("ok    from_seconds({input}) == {got:?}");
        } else {
            failed += 1;
            println!(
                "{}  from_seconds({input}) == {got:?}, expected {expected:?}",
                "FAIL".if_supports_color(Stdout, |t| t.red())
            );
        }
    }

    // ── 3. Summary ───────────────────────────────────────────────────────
    if failed == 0 {
        println!(
            "{}",
            format!("All {total} checks passed.").if_supports_color(Stdout, |t| t.green())
        );
        Ok(())
    } else {
        Err(CaptimeError::SelfTestFailed { failed, total }.into())
    }
}
