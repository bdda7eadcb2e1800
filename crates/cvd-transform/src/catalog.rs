//! Simulation and daltonization matrices per deficiency variant
//!
//! The catalog is static data: one [`MatrixPair`] per [`Deficiency`],
//! never mutated, safe to read from any thread.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;
use crate::matrix::Matrix3;

/// A supported colour-vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Missing long-wavelength (red) cones
    Protanopia,
    /// Missing medium-wavelength (green) cones
    Deuteranopia,
    /// Missing short-wavelength (blue) cones
    Tritanopia,
}

/// The (simulation, daltonization) matrices for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixPair {
    /// Maps true colour to the colour the deficient viewer perceives.
    pub simulation: Matrix3,
    /// Maps true colour to a pre-corrected colour that restores
    /// discriminability once seen through `simulation`.
    pub daltonization: Matrix3,
}

const PROTANOPIA: MatrixPair = MatrixPair {
    simulation: Matrix3::from_rows([
        [0.56667, 0.43333, 0.0],
        [0.55833, 0.44167, 0.0],
        [0.0, 0.24167, 0.75833],
    ]),
    daltonization: Matrix3::from_rows([
        [0.0, 2.02344, -2.52581],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]),
};

const DEUTERANOPIA: MatrixPair = MatrixPair {
    simulation: Matrix3::from_rows([[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]]),
    daltonization: Matrix3::from_rows([
        [1.0, 0.0, 0.0],
        [0.494207, 0.0, 1.24827],
        [0.0, 0.0, 1.0],
    ]),
};

const TRITANOPIA: MatrixPair = MatrixPair {
    simulation: Matrix3::from_rows([
        [0.95, 0.05, 0.0],
        [0.0, 0.433, 0.567],
        [0.0, 0.475, 0.525],
    ]),
    daltonization: Matrix3::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-0.395913, 0.801109, 0.0],
    ]),
};

impl Deficiency {
    /// Every variant, in menu order.
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
    ];

    /// Canonical lowercase name, as accepted by [`lookup_variant`].
    pub const fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }

    /// The static matrix pair for this variant.
    pub const fn matrices(self) -> &'static MatrixPair {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
            Deficiency::Tritanopia => &TRITANOPIA,
        }
    }

    /// Names of all variants, in menu order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.name()).collect()
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = UnknownVariant;

    /// Parse a deficiency from its exact lowercase name.
    ///
    /// Matching is case-sensitive and does not trim whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvd_transform::Deficiency;
    ///
    /// let d: Deficiency = "tritanopia".parse().unwrap();
    /// assert_eq!(d, Deficiency::Tritanopia);
    /// assert!("Tritanopia".parse::<Deficiency>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownVariant::new(s))
    }
}

/// Look up the matrix pair for a deficiency name.
///
/// # Example
///
/// ```
/// use cvd_transform::lookup_variant;
///
/// let pair = lookup_variant("deuteranopia").unwrap();
/// assert_eq!(pair.simulation.rows()[0], [0.625, 0.375, 0.0]);
/// assert!(lookup_variant("").is_err());
/// ```
pub fn lookup_variant(name: &str) -> Result<MatrixPair, UnknownVariant> {
    name.parse::<Deficiency>().map(|d| *d.matrices())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_succeeds_for_exactly_three_names() {
        for name in ["protanopia", "deuteranopia", "tritanopia"] {
            assert!(lookup_variant(name).is_ok(), "{name} should resolve");
        }
        assert_eq!(Deficiency::names(), vec!["protanopia", "deuteranopia", "tritanopia"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        for name in [
            "Protanopia",
            "PROTANOPIA",
            "DeUtErAnOpIa",
            "Tritanopia",
            " protanopia",
            "protanopia\n",
        ] {
            let err = lookup_variant(name).unwrap_err();
            assert_eq!(err.name, name);
        }
    }

    #[test]
    fn test_lookup_rejects_other_strings() {
        for name in ["", "achromatopsia", "protan", "red", "1"] {
            assert_eq!(lookup_variant(name), Err(UnknownVariant::new(name)));
        }
    }

    #[test]
    fn test_protanopia_coefficients() {
        let pair = lookup_variant("protanopia").unwrap();
        assert_eq!(
            pair.simulation.rows(),
            &[
                [0.56667, 0.43333, 0.0],
                [0.55833, 0.44167, 0.0],
                [0.0, 0.24167, 0.75833]
            ]
        );
        assert_eq!(
            pair.daltonization.rows(),
            &[[0.0, 2.02344, -2.52581], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_deuteranopia_coefficients() {
        let pair = lookup_variant("deuteranopia").unwrap();
        assert_eq!(
            pair.simulation.rows(),
            &[[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]]
        );
        assert_eq!(
            pair.daltonization.rows(),
            &[[1.0, 0.0, 0.0], [0.494207, 0.0, 1.24827], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_tritanopia_coefficients() {
        let pair = lookup_variant("tritanopia").unwrap();
        assert_eq!(
            pair.simulation.rows(),
            &[[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]]
        );
        assert_eq!(
            pair.daltonization.rows(),
            &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-0.395913, 0.801109, 0.0]]
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for d in Deficiency::ALL {
            assert_eq!(d.to_string().parse::<Deficiency>(), Ok(d));
        }
    }

    /// Simulation rows sum to ~1 so neutral greys stay neutral for the
    /// deficient viewer.
    #[test]
    fn test_simulation_rows_preserve_grey() {
        for d in Deficiency::ALL {
            for sum in d.matrices().simulation.row_sums() {
                assert!((sum - 1.0).abs() < 1e-9, "{d}: row sum {sum}");
            }
        }
    }
}
