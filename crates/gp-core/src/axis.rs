//! Axes, axes pairs and axis slots.
//!
//! Per-axis state (ranges, usage) is stored in arrays indexed by slot:
//! X1 = 0, Y1 = 1, X2 = 2, Y2 = 3.

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Number of axis slots.
pub const AXIS_COUNT: usize = 4;

/// Horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abscissa {
    X1,
    X2,
}

/// Vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinate {
    Y1,
    Y2,
}

/// Any one of the four axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X(Abscissa),
    Y(Ordinate),
}

impl Axis {
    pub const X1: Axis = Axis::X(Abscissa::X1);
    pub const Y1: Axis = Axis::Y(Ordinate::Y1);
    pub const X2: Axis = Axis::X(Abscissa::X2);
    pub const Y2: Axis = Axis::Y(Ordinate::Y2);

    /// All axes in slot order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X1, Axis::Y1, Axis::X2, Axis::Y2];

    pub const fn slot(self) -> usize {
        match self {
            Axis::X(Abscissa::X1) => 0,
            Axis::Y(Ordinate::Y1) => 1,
            Axis::X(Abscissa::X2) => 2,
            Axis::Y(Ordinate::Y2) => 3,
        }
    }

    /// Short token used by `set <axis>range` and `set <axis>tics`: `x`, `y`, `x2`, `y2`.
    pub const fn token(self) -> &'static str {
        match self {
            Axis::X(Abscissa::X1) => "x",
            Axis::Y(Ordinate::Y1) => "y",
            Axis::X(Abscissa::X2) => "x2",
            Axis::Y(Ordinate::Y2) => "y2",
        }
    }
}

impl Abscissa {
    pub const fn slot(self) -> usize {
        Axis::X(self).slot()
    }
}

impl Ordinate {
    pub const fn slot(self) -> usize {
        Axis::Y(self).slot()
    }
}

impl From<Abscissa> for Axis {
    fn from(x: Abscissa) -> Self {
        Axis::X(x)
    }
}

impl From<Ordinate> for Axis {
    fn from(y: Ordinate) -> Self {
        Axis::Y(y)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The axes a series is plotted against: one abscissa and one ordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesPair {
    pub x: Abscissa,
    pub y: Ordinate,
}

impl AxesPair {
    pub const X1Y1: AxesPair = AxesPair::new(Abscissa::X1, Ordinate::Y1);
    pub const X1Y2: AxesPair = AxesPair::new(Abscissa::X1, Ordinate::Y2);
    pub const X2Y1: AxesPair = AxesPair::new(Abscissa::X2, Ordinate::Y1);
    pub const X2Y2: AxesPair = AxesPair::new(Abscissa::X2, Ordinate::Y2);

    pub const fn new(x: Abscissa, y: Ordinate) -> Self {
        Self { x, y }
    }

    /// Slots of both axes, abscissa first.
    pub const fn slots(self) -> [usize; 2] {
        [self.x.slot(), self.y.slot()]
    }
}

impl Default for AxesPair {
    fn default() -> Self {
        AxesPair::X1Y1
    }
}

/// Long form used by the `axes` clause of a plot command: `x1y1`, `x2y2`, ...
impl fmt::Display for AxesPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self.x {
            Abscissa::X1 => "x1",
            Abscissa::X2 => "x2",
        };
        let y = match self.y {
            Ordinate::Y1 => "y1",
            Ordinate::Y2 => "y2",
        };
        write!(f, "{x}{y}")
    }
}

impl FromStr for AxesPair {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x1y1" => Ok(AxesPair::X1Y1),
            "x1y2" => Ok(AxesPair::X1Y2),
            "x2y1" => Ok(AxesPair::X2Y1),
            "x2y2" => Ok(AxesPair::X2Y2),
            other => Err(CoreError::UnknownKeyword {
                what: "axes",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Axis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "x1" => Ok(Axis::X1),
            "y" | "y1" => Ok(Axis::Y1),
            "x2" => Ok(Axis::X2),
            "y2" => Ok(Axis::Y2),
            other => Err(CoreError::UnknownKeyword {
                what: "axis",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_mapping() {
        assert_eq!(Axis::X1.slot(), 0);
        assert_eq!(Axis::Y1.slot(), 1);
        assert_eq!(Axis::X2.slot(), 2);
        assert_eq!(Axis::Y2.slot(), 3);
        assert_eq!(Ordinate::Y2.slot(), 3);
        assert_eq!(Abscissa::X2.slot(), 2);
    }

    #[test]
    fn all_is_in_slot_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.slot(), i);
        }
    }

    #[test]
    fn tokens() {
        let tokens: Vec<_> = Axis::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(tokens, ["x", "y", "x2", "y2"]);
        assert_eq!(AxesPair::X1Y1.to_string(), "x1y1");
        assert_eq!(AxesPair::X2Y1.to_string(), "x2y1");
        assert_eq!(AxesPair::X1Y2.slots(), [0, 3]);
    }

    #[test]
    fn parse_axes() {
        assert_eq!("X1Y2".parse::<AxesPair>().unwrap(), AxesPair::X1Y2);
        assert_eq!("y2".parse::<Axis>().unwrap(), Axis::Y2);
        assert!("z1".parse::<Axis>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_pair() -> impl Strategy<Value = AxesPair> {
        prop_oneof![
            Just(AxesPair::X1Y1),
            Just(AxesPair::X1Y2),
            Just(AxesPair::X2Y1),
            Just(AxesPair::X2Y2),
        ]
    }

    proptest! {
        #[test]
        fn pair_slots_are_one_abscissa_and_one_ordinate(pair in any_pair()) {
            let [x, y] = pair.slots();
            prop_assert!(x == 0 || x == 2);
            prop_assert!(y == 1 || y == 3);
            prop_assert_eq!(x, Axis::from(pair.x).slot());
            prop_assert_eq!(y, Axis::from(pair.y).slot());
        }
    }
}
