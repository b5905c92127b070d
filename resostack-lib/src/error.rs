use std::fmt;

#[derive(Debug)]
pub enum ResoError {
    UnknownElement(String),
    UnknownIsotope(String),
    UnknownLayer(String),
    UnknownDatabase(String),
    MalformedStack(String),
    SizeMismatch { expected: usize, got: usize },
    EnergyRange { min: f64, max: f64, step: f64, reason: &'static str },
    UnsupportedFileType(String),
    SourceNotFound(String),
    EnergyAxisMismatch(String),
}

pub type Result<T> = std::result::Result<T, ResoError>;

impl fmt::Display for ResoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::UnknownIsotope(i) => write!(f, "unknown isotope: {i}"),
            Self::UnknownLayer(l) => write!(f, "unknown layer: {l}"),
            Self::UnknownDatabase(d) => write!(f, "unknown database: {d}"),
            Self::MalformedStack(msg) => write!(f, "malformed stack: {msg}"),
            Self::SizeMismatch { expected, got } => {
                write!(f, "expected {expected} isotopic ratios, got {got}")
            }
            Self::EnergyRange { min, max, step, reason } => {
                write!(f, "invalid energy grid [{min}, {max}] eV, step {step} eV: {reason}")
            }
            Self::UnsupportedFileType(source) => {
                write!(f, "source '{source}' is not a tabulated '.csv' cross-section file")
            }
            Self::SourceNotFound(source) => write!(f, "cross-section source not found: {source}"),
            Self::EnergyAxisMismatch(scope) => {
                write!(f, "energy axes diverged within '{scope}'")
            }
        }
    }
}

impl std::error::Error for ResoError {}
