use thiserror::Error;

/// Errors raised by the native engine.
///
/// Every check runs before the engine mutates anything, so a failed call
/// leaves bodies and worlds exactly as they were.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("fixture definition has no shape")]
    MissingShape,

    #[error("polygon shape is degenerate ({vertex_count} vertices, area {area})")]
    DegenerateShape { vertex_count: usize, area: f32 },

    #[error("body does not belong to this world")]
    BodyNotInWorld,

    #[error("invalid time step {0}")]
    InvalidTimeStep(f32),

    #[error("invalid iteration count {0}")]
    InvalidIterations(i32),
}
