//! Pipeline error kinds, mirroring the vendored `acc_shared_memory_rs` crate's
//! use of `thiserror` for a flat, crate-internal error enum.

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InputInvalid(String),

    #[error("no sample setup files found for this car")]
    DiscoveryEmpty,

    #[error("canonical parameter '{0}' has no discovered game alias")]
    ParameterUnmapped(String),

    #[error("value for {section}.{key} out of envelope, clamped to {clamped_to}")]
    ValueOutOfEnvelope {
        section: String,
        key: String,
        clamped_to: f64,
    },

    #[error(transparent)]
    IOFailure(#[from] std::io::Error),

    #[error(transparent)]
    DatabaseFailure(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
