//! Whitespace-separated numbers from a line-oriented stream, in the order
//! `x y z` per point, two points per line, two lines per case.

use std::{
    collections::VecDeque,
    io::BufRead,
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};

use thiserror::Error;

use crate::geometry3d::{line::Line, point::Point3D, GeometryError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input ended while reading {expected}")]
    UnexpectedEof { expected: String },
    #[error("Expected a number for {expected}, found {token:?}")]
    BadNumber {
        token: String,
        expected: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Expected a test case count, found {token:?}")]
    BadCount {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Bad {expected}")]
    Geometry {
        expected: String,
        #[source]
        source: GeometryError,
    },
    #[error("Test cases file not opened. Please try again ({})", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Reads further lines as needed; `None` at the end of the stream.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(buf.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self, expected: &str) -> Result<String, InputError> {
        self.next_token()?.ok_or_else(|| InputError::UnexpectedEof {
            expected: expected.to_owned(),
        })
    }

    pub fn next_f64(&mut self, expected: &str) -> Result<f64, InputError> {
        let token = self.expect_token(expected)?;
        token.parse().map_err(|source| InputError::BadNumber {
            token,
            expected: expected.to_owned(),
            source,
        })
    }

    pub fn next_count(&mut self) -> Result<usize, InputError> {
        let token = self.expect_token("the test case count")?;
        token
            .parse()
            .map_err(|source| InputError::BadCount { token, source })
    }

    pub fn next_point(&mut self, expected: &str) -> Result<Point3D, InputError> {
        let mut coords = [0.0; 3];
        for (coord, axis) in coords.iter_mut().zip(["x", "y", "z"]) {
            *coord = self.next_f64(&format!("{axis} of {expected}"))?;
        }
        Ok(Point3D::from(coords))
    }

    /// Two points, validated into a [`Line`].
    pub fn next_line(&mut self, expected: &str) -> Result<Line, InputError> {
        let a = self.next_point(&format!("point 1 of {expected}"))?;
        let b = self.next_point(&format!("point 2 of {expected}"))?;
        Line::try_new(a, b).map_err(|source| InputError::Geometry {
            expected: expected.to_owned(),
            source,
        })
    }
}
