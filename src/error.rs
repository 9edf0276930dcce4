use thiserror::Error;

pub type MResult<T> = Result<T, MatError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("{op}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        op: &'static str,
    },
    #[error("{op}: shape mismatch, expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
        op: &'static str,
    },
    #[error("{op}: expected {expected} elements, got {got}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        op: &'static str,
    },
    #[error("{op}: empty input")]
    EmptyInput { op: &'static str },
    #[error("invalid bounds: lower {lower} > upper {upper}")]
    InvalidBounds { lower: String, upper: String },
    #[error("{op}: {msg}")]
    DegenerateInput { op: &'static str, msg: &'static str },
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = MatError::IndexOutOfRange {
            index: 0,
            len: 0,
            op: "index_of_max",
        };
        assert_eq!(e.to_string(), "index_of_max: index 0 out of range for length 0");

        let e = MatError::ShapeMismatch {
            expected: (2, 2),
            got: (2, 3),
            op: "add",
        };
        assert_eq!(e.to_string(), "add: shape mismatch, expected (2, 2), got (2, 3)");

        let e = MatError::LengthMismatch {
            expected: 6,
            got: 5,
            op: "from_vec",
        };
        assert_eq!(e.to_string(), "from_vec: expected 6 elements, got 5");
    }
}
