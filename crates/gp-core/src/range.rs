//! Axis range bounds.

use core::fmt;

/// One limit: chosen by the plotting program, or a literal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LimitValue {
    #[default]
    Auto,
    Int(i64),
    Real(f64),
}

/// One end of a range.
///
/// `AtMost` and `AtLeast` are autoscaling clamped on one side: `*<10` lets
/// the program pick a value no larger than 10, `0<*` one no smaller than 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeValue {
    Limit(LimitValue),
    AtMost(LimitValue),
    AtLeast(LimitValue),
}

impl RangeValue {
    pub const AUTO: RangeValue = RangeValue::Limit(LimitValue::Auto);

    /// Autoscaled, but never above `upper` (`*<upper`).
    pub fn at_most(upper: impl Into<LimitValue>) -> Self {
        RangeValue::AtMost(upper.into())
    }

    /// Autoscaled, but never below `lower` (`lower<*`).
    pub fn at_least(lower: impl Into<LimitValue>) -> Self {
        RangeValue::AtLeast(lower.into())
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, RangeValue::Limit(LimitValue::Auto))
    }
}

impl Default for RangeValue {
    fn default() -> Self {
        RangeValue::AUTO
    }
}

/// The `[min:max]` range of one axis slot. The default is fully automatic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    pub min: RangeValue,
    pub max: RangeValue,
}

impl Range {
    pub const AUTO: Range = Range {
        min: RangeValue::AUTO,
        max: RangeValue::AUTO,
    };

    pub fn new(min: impl Into<RangeValue>, max: impl Into<RangeValue>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn is_auto(&self) -> bool {
        self.min.is_auto() && self.max.is_auto()
    }
}

impl From<f64> for LimitValue {
    fn from(v: f64) -> Self {
        LimitValue::Real(v)
    }
}

impl From<f32> for LimitValue {
    fn from(v: f32) -> Self {
        LimitValue::Real(v.into())
    }
}

impl From<i64> for LimitValue {
    fn from(v: i64) -> Self {
        LimitValue::Int(v)
    }
}

impl From<i32> for LimitValue {
    fn from(v: i32) -> Self {
        LimitValue::Int(v.into())
    }
}

macro_rules! range_value_from {
    ($($t:ty),*) => {
        $(impl From<$t> for RangeValue {
            fn from(v: $t) -> Self {
                RangeValue::Limit(v.into())
            }
        })*
    };
}

range_value_from!(LimitValue, f64, f32, i64, i32);

/// `None` is an automatic limit.
impl<T: Into<LimitValue>> From<Option<T>> for LimitValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(LimitValue::Auto, Into::into)
    }
}

impl<A: Into<RangeValue>, B: Into<RangeValue>> From<(A, B)> for Range {
    fn from((min, max): (A, B)) -> Self {
        Range::new(min, max)
    }
}

impl fmt::Display for LimitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitValue::Auto => f.write_str("*"),
            LimitValue::Int(v) => write!(f, "{v}"),
            LimitValue::Real(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeValue::Limit(v) => write!(f, "{v}"),
            RangeValue::AtMost(upper) => write!(f, "*<{upper}"),
            RangeValue::AtLeast(lower) => write!(f, "{lower}<*"),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_auto() {
        assert_eq!(Range::default(), Range::AUTO);
        assert!(Range::default().is_auto());
        assert_eq!(Range::AUTO.to_string(), "[*:*]");
    }

    #[test]
    fn literals_render_as_written() {
        assert_eq!(Range::new(-1.5, 1.5).to_string(), "[-1.5:1.5]");
        assert_eq!(Range::new(0, 10).to_string(), "[0:10]");
        assert_eq!(Range::new(LimitValue::Auto, 2.0).to_string(), "[*:2]");
    }

    #[test]
    fn clamped_autoscale_bounds() {
        let r = Range::new(RangeValue::at_most(10), RangeValue::at_least(0.5));
        assert_eq!(r.to_string(), "[*<10:0.5<*]");
        assert!(!r.is_auto());
    }

    #[test]
    fn clamp_always_has_one_automatic_side() {
        assert_eq!(RangeValue::at_least(0).to_string(), "0<*");
        assert_eq!(RangeValue::at_most(-2.5).to_string(), "*<-2.5");
        let r = Range::new(RangeValue::at_least(0), RangeValue::AUTO);
        assert_eq!(r.to_string(), "[0<*:*]");
    }

    #[test]
    fn option_maps_none_to_auto() {
        let none: Option<f64> = None;
        assert_eq!(LimitValue::from(none), LimitValue::Auto);
        assert_eq!(LimitValue::from(Some(3)), LimitValue::Int(3));
    }
}
