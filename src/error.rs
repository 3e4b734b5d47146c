use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptimeError {
    #[error("Speed must be greater than zero, got {speed} mb/s")]
    SpeedNotPositive { speed: f64 },

    #[error("Cap must not be negative, got {cap} GB")]
    NegativeCap { cap: f64 },

    #[error("Self-test failed: {failed} of {total} checks did not match")]
    SelfTestFailed { failed: usize, total: usize },
}
