use std::fmt;

use serde::{Deserialize, Serialize};

/// A column width expression.
///
/// Widths are kept as tagged values and only rendered to their CSS form
/// (`"100px"`, `"30%"`, `calc(..)`) at presentation time via [`Display`].
/// A column with no width at all carries `None` rather than a variant.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Width {
    /// Explicit length in pixels.
    Px(f64),
    /// Percentage of the containing table.
    Percent(f64),
    /// Even share of the scroll viewport left over after the explicitly
    /// sized columns take theirs.
    Remainder(RemainderWidth),
}

/// The computed-width expression assigned to columns that declared no width
/// while the table has a fixed scroll width.
///
/// Renders as `calc((<scroll_x> - (<explicit> + ...)) / <share>)`, with the
/// literal `0px` as the subtrahend when no column declared a width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainderWidth {
    /// Fixed pixel width of the scrollable viewport.
    pub scroll_x: f64,
    /// Widths of every column that had one at computation time.
    pub explicit: Vec<Width>,
    /// Number of width-less columns the remainder is split across.
    pub share: usize,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Px(px) => write!(f, "{}px", Number(*px)),
            Width::Percent(pct) => write!(f, "{}%", Number(*pct)),
            Width::Remainder(remainder) => write!(f, "{remainder}"),
        }
    }
}

impl fmt::Display for RemainderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc(({}px - (", Number(self.scroll_x))?;
        if self.explicit.is_empty() {
            f.write_str("0px")?;
        } else {
            for (i, width) in self.explicit.iter().enumerate() {
                if i > 0 {
                    f.write_str(" + ")?;
                }
                write!(f, "{width}")?;
            }
        }
        write!(f, ")) / {})", self.share)
    }
}

/// Prints whole values without a fractional part (`400` rather than `400.0`).
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_renders_without_fraction() {
        assert_eq!(Width::Px(100.0).to_string(), "100px");
        assert_eq!(Width::Px(12.5).to_string(), "12.5px");
    }

    #[test]
    fn percent_renders() {
        assert_eq!(Width::Percent(30.0).to_string(), "30%");
    }

    #[test]
    fn remainder_renders_calc_expression() {
        let width = Width::Remainder(RemainderWidth {
            scroll_x: 400.0,
            explicit: vec![Width::Px(100.0), Width::Percent(30.0)],
            share: 2,
        });
        assert_eq!(width.to_string(), "calc((400px - (100px + 30%)) / 2)");
    }

    #[test]
    fn remainder_with_no_explicit_widths_subtracts_zero() {
        let width = Width::Remainder(RemainderWidth {
            scroll_x: 400.0,
            explicit: vec![],
            share: 3,
        });
        assert_eq!(width.to_string(), "calc((400px - (0px)) / 3)");
    }
}
