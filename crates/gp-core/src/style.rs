//! Series presentation keywords.
//!
//! Every variant maps to exactly one keyword of the plotting program, so no
//! style can be silently dropped from a plot command.

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// How a series is drawn (`with <style>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlotStyle {
    #[default]
    Points,
    Dots,
    Lines,
    LinesPoints,
    Steps,
    FSteps,
    HiSteps,
    Impulses,
    Boxes,
}

impl PlotStyle {
    pub const ALL: [PlotStyle; 9] = [
        PlotStyle::Points,
        PlotStyle::Dots,
        PlotStyle::Lines,
        PlotStyle::LinesPoints,
        PlotStyle::Steps,
        PlotStyle::FSteps,
        PlotStyle::HiSteps,
        PlotStyle::Impulses,
        PlotStyle::Boxes,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            PlotStyle::Points => "points",
            PlotStyle::Dots => "dots",
            PlotStyle::Lines => "lines",
            PlotStyle::LinesPoints => "linespoints",
            PlotStyle::Steps => "steps",
            PlotStyle::FSteps => "fsteps",
            PlotStyle::HiSteps => "histeps",
            PlotStyle::Impulses => "impulses",
            PlotStyle::Boxes => "boxes",
        }
    }
}

/// Point glyph (`pointtype <n>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointType {
    Cross,
    X,
    Asterisk,
    Box,
    FilledBox,
    Circle,
    FilledCircle,
    Triangle,
    FilledTriangle,
    UpsideDownTriangle,
    FilledUpsideDownTriangle,
    Diamond,
    FilledDiamond,
    Pentagon,
    FilledPentagon,
}

impl PointType {
    pub const STAR: PointType = PointType::Asterisk;

    pub const ALL: [PointType; 15] = [
        PointType::Cross,
        PointType::X,
        PointType::Asterisk,
        PointType::Box,
        PointType::FilledBox,
        PointType::Circle,
        PointType::FilledCircle,
        PointType::Triangle,
        PointType::FilledTriangle,
        PointType::UpsideDownTriangle,
        PointType::FilledUpsideDownTriangle,
        PointType::Diamond,
        PointType::FilledDiamond,
        PointType::Pentagon,
        PointType::FilledPentagon,
    ];

    /// 1-based glyph number understood by the plotting program.
    pub const fn number(self) -> u32 {
        match self {
            PointType::Cross => 1,
            PointType::X => 2,
            PointType::Asterisk => 3,
            PointType::Box => 4,
            PointType::FilledBox => 5,
            PointType::Circle => 6,
            PointType::FilledCircle => 7,
            PointType::Triangle => 8,
            PointType::FilledTriangle => 9,
            PointType::UpsideDownTriangle => 10,
            PointType::FilledUpsideDownTriangle => 11,
            PointType::Diamond => 12,
            PointType::FilledDiamond => 13,
            PointType::Pentagon => 14,
            PointType::FilledPentagon => 15,
        }
    }

    /// Lowercase name used when parsing from text.
    pub const fn name(self) -> &'static str {
        match self {
            PointType::Cross => "cross",
            PointType::X => "x",
            PointType::Asterisk => "asterisk",
            PointType::Box => "box",
            PointType::FilledBox => "filled-box",
            PointType::Circle => "circle",
            PointType::FilledCircle => "filled-circle",
            PointType::Triangle => "triangle",
            PointType::FilledTriangle => "filled-triangle",
            PointType::UpsideDownTriangle => "upside-down-triangle",
            PointType::FilledUpsideDownTriangle => "filled-upside-down-triangle",
            PointType::Diamond => "diamond",
            PointType::FilledDiamond => "filled-diamond",
            PointType::Pentagon => "pentagon",
            PointType::FilledPentagon => "filled-pentagon",
        }
    }
}

/// Smoothing / filtering applied by the plotting program (`smooth <kind>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Smooth {
    Unique,
    Frequency,
    FNormal,
    Cumulative,
    CNormal,
    Bins,
    KDensity,
    CSplines,
    ACSplines,
    MCSplines,
    Bezier,
    SBezier,
    Unwrap,
}

impl Smooth {
    pub const ALL: [Smooth; 13] = [
        Smooth::Unique,
        Smooth::Frequency,
        Smooth::FNormal,
        Smooth::Cumulative,
        Smooth::CNormal,
        Smooth::Bins,
        Smooth::KDensity,
        Smooth::CSplines,
        Smooth::ACSplines,
        Smooth::MCSplines,
        Smooth::Bezier,
        Smooth::SBezier,
        Smooth::Unwrap,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Smooth::Unique => "unique",
            Smooth::Frequency => "frequency",
            Smooth::FNormal => "fnormal",
            Smooth::Cumulative => "cumulative",
            Smooth::CNormal => "cnormal",
            Smooth::Bins => "bins",
            Smooth::KDensity => "kdensity",
            Smooth::CSplines => "csplines",
            Smooth::ACSplines => "acsplines",
            Smooth::MCSplines => "mcsplines",
            Smooth::Bezier => "bezier",
            Smooth::SBezier => "sbezier",
            Smooth::Unwrap => "unwrap",
        }
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Smooth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

fn parse_keyword<T: Copy>(
    all: &[T],
    text: &str,
    what: &'static str,
    keyword: impl Fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let text = text.trim();
    all.iter()
        .copied()
        .find(|&v| keyword(v).eq_ignore_ascii_case(text))
        .ok_or_else(|| CoreError::UnknownKeyword {
            what,
            value: text.to_string(),
        })
}

impl FromStr for PlotStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keyword(&PlotStyle::ALL, s, "plot style", PlotStyle::keyword)
    }
}

impl FromStr for Smooth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keyword(&Smooth::ALL, s, "smooth", Smooth::keyword)
    }
}

/// Accepts the glyph name (`"filled-circle"`), `"star"`, or the glyph number.
impl FromStr for PointType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("star") {
            return Ok(PointType::STAR);
        }
        if let Ok(n) = s.trim().parse::<u32>() {
            return PointType::ALL
                .iter()
                .copied()
                .find(|p| p.number() == n)
                .ok_or_else(|| CoreError::UnknownKeyword {
                    what: "point type",
                    value: s.trim().to_string(),
                });
        }
        parse_keyword(&PointType::ALL, s, "point type", PointType::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_distinct_keyword() {
        for (i, a) in PlotStyle::ALL.iter().enumerate() {
            for b in &PlotStyle::ALL[i + 1..] {
                assert_ne!(a.keyword(), b.keyword());
            }
        }
        assert_eq!(PlotStyle::HiSteps.keyword(), "histeps");
        assert_eq!(PlotStyle::default(), PlotStyle::Points);
    }

    #[test]
    fn point_numbers_are_one_based_and_contiguous() {
        for (i, p) in PointType::ALL.iter().enumerate() {
            assert_eq!(p.number() as usize, i + 1);
        }
        assert_eq!(PointType::STAR, PointType::Asterisk);
    }

    #[test]
    fn parse_keywords() {
        assert_eq!("Lines".parse::<PlotStyle>().unwrap(), PlotStyle::Lines);
        assert_eq!("bezier".parse::<Smooth>().unwrap(), Smooth::Bezier);
        assert_eq!("star".parse::<PointType>().unwrap(), PointType::Asterisk);
        assert_eq!("7".parse::<PointType>().unwrap(), PointType::FilledCircle);
        assert_eq!(
            "filled-diamond".parse::<PointType>().unwrap(),
            PointType::FilledDiamond
        );
        assert!("16".parse::<PointType>().is_err());

        let err = "wiggle".parse::<Smooth>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownKeyword { what: "smooth", .. }));
    }
}
