//! Module defining the alignment enums.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;


macro_attr! {
    /// Horizontal alignment of text lines within the image.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(HAligns))]
    pub enum HAlign {
        /// Left alignment, starting at the left padding.
        Left,
        /// Horizontal centering within the whole image width.
        Center,
        /// Right alignment, ending at the right padding.
        Right,
    }
}

macro_attr! {
    /// Vertical alignment of the text block within the image.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(VAligns))]
    pub enum VAlign {
        /// Top alignment, starting at the top padding.
        Top,
        /// Vertical centering within the whole image height.
        Center,
        /// Bottom alignment, ending at the bottom padding.
        Bottom,
    }
}


impl HAlign {
    /// Name of the alignment, as it's written in node parameters.
    pub fn as_str(&self) -> &'static str {
        match *self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }
}

impl VAlign {
    /// Name of the alignment, as it's written in node parameters.
    pub fn as_str(&self) -> &'static str {
        match *self {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        }
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}
impl fmt::Display for VAlign {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

impl FromStr for HAlign {
    type Err = AlignParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        HAlign::iter_variants().find(|a| a.as_str() == s)
            .ok_or_else(|| AlignParseError::Horizontal(s))
    }
}
impl FromStr for VAlign {
    type Err = AlignParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        VAlign::iter_variants().find(|a| a.as_str() == s)
            .ok_or_else(|| AlignParseError::Vertical(s))
    }
}


/// Error while parsing an alignment name.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AlignParseError {
    /// Unknown horizontal alignment.
    #[error("unknown horizontal alignment `{0}`, expected 'left', 'center', or 'right'")]
    Horizontal(String),
    /// Unknown vertical alignment.
    #[error("unknown vertical alignment `{0}`, expected 'top', 'center', or 'bottom'")]
    Vertical(String),
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use spectral::prelude::*;
    use super::{AlignParseError, HAlign, VAlign};

    #[test]
    fn parse_is_lenient() {
        assert_that!(HAlign::from_str("left")).is_ok().is_equal_to(HAlign::Left);
        assert_that!(HAlign::from_str(" Center ")).is_ok().is_equal_to(HAlign::Center);
        assert_that!(VAlign::from_str("BOTTOM")).is_ok().is_equal_to(VAlign::Bottom);
    }

    #[test]
    fn middle_is_not_an_alignment() {
        assert_that!(VAlign::from_str("middle"))
            .is_err().is_equal_to(AlignParseError::Vertical("middle".into()));
    }

    #[test]
    fn variants_round_trip_through_names() {
        for align in HAlign::iter_variants() {
            assert_eq!(align, align.to_string().parse().unwrap());
        }
        let names: Vec<_> = VAlign::iter_variants().map(|a| a.as_str()).collect();
        assert_eq!(vec!["top", "center", "bottom"], names);
    }
}
