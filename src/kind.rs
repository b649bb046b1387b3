//! Window shape selected by name, for configuration files and command lines.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_KAISER_ALPHA,
    error::WindowError,
    shape::{
        BLACKMAN_HARRIS_WINDOW, BLACKMAN_WINDOW, HAMMING_WINDOW, HANN_WINDOW, Kaiser,
        RECTANGULAR_WINDOW, TRIANGULAR_WINDOW, WindowShape,
    },
};

/// Any of the stock window shapes.
///
/// Serialized with a `type` tag:
///
/// ```json
/// { "type": "kaiser", "alpha": 4.0 }
/// ```
///
/// As a string it reads `hann`, `blackman-harris`, `kaiser:4` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WindowKind {
    Rectangular,
    Triangular,
    Hann,
    Hamming,
    Blackman,
    BlackmanHarris,
    Kaiser {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
}

fn default_alpha() -> f64 {
    DEFAULT_KAISER_ALPHA
}

impl WindowKind {
    fn dispatch<R>(&self, f: impl FnOnce(&dyn WindowShape) -> R) -> R {
        match *self {
            Self::Rectangular => f(&RECTANGULAR_WINDOW),
            Self::Triangular => f(&TRIANGULAR_WINDOW),
            Self::Hann => f(&HANN_WINDOW),
            Self::Hamming => f(&HAMMING_WINDOW),
            Self::Blackman => f(&BLACKMAN_WINDOW),
            Self::BlackmanHarris => f(&BLACKMAN_HARRIS_WINDOW),
            Self::Kaiser { alpha } => f(&Kaiser::new(alpha)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Triangular => "triangular",
            Self::Hann => "hann",
            Self::Hamming => "hamming",
            Self::Blackman => "blackman",
            Self::BlackmanHarris => "blackman-harris",
            Self::Kaiser { .. } => "kaiser",
        }
    }
}

impl WindowShape for WindowKind {
    fn value(&self, i: f64, n: usize) -> f64 {
        self.dispatch(|shape| shape.value(i, n))
    }
    fn apply(&self, x: &mut [f64]) {
        self.dispatch(|shape| shape.apply(x))
    }
    fn fill(&self, x: &mut [f64]) {
        self.dispatch(|shape| shape.fill(x))
    }
}

/// Fails for a non-finite `alpha`, which has no string form.
impl TryFrom<Kaiser> for WindowKind {
    type Error = WindowError;

    fn try_from(value: Kaiser) -> Result<Self, Self::Error> {
        Ok(Self::Kaiser {
            alpha: finite_alpha(value.alpha())?,
        })
    }
}

/// Parses back with [`FromStr`] as long as a Kaiser `alpha` is finite.
impl Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kaiser { alpha } => write!(f, "{}:{}", self.name(), alpha),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, parameter) = match lower.split_once(':') {
            Some((name, parameter)) => (name, Some(parameter)),
            None => (lower.as_str(), None),
        };

        let kind = match name {
            "rectangular" | "rect" => Self::Rectangular,
            "triangular" | "triangle" => Self::Triangular,
            "hann" | "hanning" => Self::Hann,
            "hamming" => Self::Hamming,
            "blackman" => Self::Blackman,
            "blackman-harris" | "blackman_harris" => Self::BlackmanHarris,
            "kaiser" => {
                let alpha = match parameter {
                    Some(parameter) => parse_alpha(parameter)?,
                    None => DEFAULT_KAISER_ALPHA,
                };
                return Ok(Self::Kaiser { alpha });
            }
            _ => return Err(WindowError::UnknownShape(s.to_string())),
        };

        match parameter {
            Some(_) => Err(WindowError::InvalidParameter(format!(
                "{} window takes no parameter",
                kind.name()
            ))),
            None => Ok(kind),
        }
    }
}

fn parse_alpha(s: &str) -> Result<f64, WindowError> {
    let alpha = s.trim().parse::<f64>().map_err(|_| {
        WindowError::InvalidParameter(format!("kaiser alpha must be a number, got {s:?}"))
    })?;
    finite_alpha(alpha)
}

fn finite_alpha(alpha: f64) -> Result<f64, WindowError> {
    if alpha.is_finite() {
        Ok(alpha)
    } else {
        Err(WindowError::InvalidParameter(format!(
            "kaiser alpha must be finite, got {alpha}"
        )))
    }
}
