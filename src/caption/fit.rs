//! Module implementing the shrink-to-fit loop for the text.

use crate::model::TextBlock;
use crate::util::text::{multiline_box, Typeface};
use crate::util::wrap::wrap;
use super::config::Config;


/// Compute the line width (in characters) to wrap the text at
/// when rendering with given font size.
///
/// This is only an estimate which assumes every character is half an em wide.
#[inline]
pub fn wrap_width(max_width: i32, size: u32) -> usize {
    let char_width = (size / 2).max(1) as i32;
    max_width.div_euclid(char_width).max(1) as usize
}


/// Break the text into lines and find the largest font size
/// (not exceeding `max_size`) at which the lines fit in given bounds.
///
/// If the text doesn't fit even at the configured minimum size,
/// it is returned at that size anyway.
pub fn fit_text<T>(typeface: &T, text: &str,
                   max_width: i32, max_height: i32, max_size: u32,
                   config: &Config) -> TextBlock
    where T: Typeface + ?Sized
{
    let max_size = max_size.max(1);
    let min_size = config.min_font_size.max(1).min(max_size);
    let mut size = max_size;
    loop {
        let lines = wrap(text, wrap_width(max_width, size));
        let bbox = multiline_box(typeface, &lines, size, config.line_spacing);
        let fits = bbox.width() <= max_width && bbox.height() <= max_height;
        trace!("Text at size {} wraps into {} line(s) with {}x{} bounding box{}",
            size, lines.len(), bbox.width(), bbox.height(), if fits { "" } else { " (too big)" });

        if fits {
            debug!("Text fits in {}x{} at font size {}", max_width, max_height, size);
            return TextBlock{lines, size};
        }
        if size <= min_size {
            warn!("Text doesn't fit in {}x{} even at font size {}, rendering it anyway",
                max_width, max_height, size);
            return TextBlock{lines, size};
        }
        size -= 1;
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use crate::util::testing::Blocks;
    use super::super::config::Config;
    use super::{fit_text, wrap_width};

    #[test]
    fn wrap_width_is_at_least_one() {
        assert_eq!(2, wrap_width(160, 128));
        assert_eq!(6, wrap_width(160, 50));
        assert_eq!(160, wrap_width(160, 1));
        assert_eq!(1, wrap_width(0, 20));
        assert_eq!(1, wrap_width(-40, 20));
    }

    #[test]
    fn shrinks_until_it_fits() {
        let block = fit_text(&Blocks::new(), "HELLO", 160, 50, 128, &Config::default());
        assert_eq!(50, block.size);
        assert_eq!(vec!["HELLO".to_owned()], block.lines);
    }

    #[test]
    fn keeps_max_size_if_it_fits() {
        let block = fit_text(&Blocks::new(), "HI", 1000, 1000, 40, &Config::default());
        assert_eq!(40, block.size);
        assert_eq!(vec!["HI".to_owned()], block.lines);
    }

    #[test]
    fn wraps_long_text_into_lines() {
        let text = "ONE DOES NOT SIMPLY WALK INTO MORDOR";
        let block = fit_text(&Blocks::new(), text, 160, 128, 128, &Config::default());
        assert_that!(block.size).is_greater_than_or_equal_to(1);
        assert_that!(block.size).is_less_than_or_equal_to(128);
        assert_that!(block.lines.len()).is_greater_than(1);
        assert_eq!(text, block.lines.join(" "));
    }

    #[test]
    fn accepts_overflow_at_minimum_size() {
        let block = fit_text(&Blocks::new(), "HELLO", 0, 0, 128, &Config::default());
        assert_eq!(1, block.size);
        assert!(!block.is_empty());
    }

    #[test]
    fn never_exceeds_max_size() {
        let config = Config{min_font_size: 50, ..Config::default()};
        let block = fit_text(&Blocks::new(), "HELLO", 0, 0, 10, &config);
        assert_eq!(10, block.size);
        let block = fit_text(&Blocks::new(), "HELLO", 1000, 1000, 0, &Config::default());
        assert_eq!(1, block.size);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let block = fit_text(&Blocks::new(), "", 160, 50, 64, &Config::default());
        assert_eq!(64, block.size);
        assert!(block.is_empty());
    }
}
