//! Module computing where each line of the text goes.

use crate::model::{HAlign, LayoutConfig, TextBlock, VAlign};
use crate::util::text::Typeface;


/// Single line of text together with the position it should be drawn at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    /// Horizontal position of the line's left edge.
    pub x: i32,
    /// Vertical position of the line's top edge (at the font's ascent).
    pub y: i32,
}


/// Position the lines of the text block on an image of given size.
///
/// The block is aligned vertically as a whole, while every line
/// is aligned horizontally on its own.
pub fn place_lines<T>(typeface: &T, block: &TextBlock,
                      (width, height): (u32, u32), config: &LayoutConfig) -> Vec<PlacedLine>
    where T: Typeface + ?Sized
{
    let (width, height) = (width as i32, height as i32);
    let padding = &config.padding;

    let boxes: Vec<_> = block.lines.iter()
        .map(|line| typeface.line_box(line, block.size))
        .collect();
    let total_height: i32 = boxes.iter().map(|b| b.bottom).sum();

    let mut y = match config.valign {
        VAlign::Top => padding.top as i32,
        VAlign::Center => (height - total_height).div_euclid(2),
        VAlign::Bottom => height - total_height - padding.bottom as i32,
    };
    trace!("Text block of height {} starts at y={}", total_height, y);

    let mut result = Vec::with_capacity(block.lines.len());
    for (line, bbox) in block.lines.iter().zip(boxes) {
        let line_width = bbox.right;
        let x = match config.halign {
            HAlign::Left => padding.left as i32,
            HAlign::Center => (width - line_width).div_euclid(2),
            HAlign::Right => width - line_width - padding.right as i32,
        };
        trace!("Line {:?} goes at ({}, {})", line, x, y);
        result.push(PlacedLine{text: line.clone(), x, y});
        y += bbox.bottom;
    }
    result
}


#[cfg(test)]
mod tests {
    use crate::model::{HAlign, LayoutConfig, Padding, TextBlock, VAlign};
    use crate::util::testing::Blocks;
    use super::{place_lines, PlacedLine};

    fn block(lines: &[&str], size: u32) -> TextBlock {
        TextBlock{lines: lines.iter().map(|&l| l.to_owned()).collect(), size}
    }

    fn config(halign: HAlign, valign: VAlign) -> LayoutConfig {
        LayoutConfig::with_font("blocks.ttf")
            .halign(halign).valign(valign)
            .padding(Padding{left: 10, right: 30, top: 5, bottom: 15})
            .build().unwrap()
    }

    #[test]
    fn bottom_center() {
        let placed = place_lines(&Blocks::new(), &block(&["HELLO"], 50),
                                 (200, 100), &LayoutConfig::with_font("a.ttf").build().unwrap());
        assert_eq!(vec![PlacedLine{text: "HELLO".into(), x: 37, y: 30}], placed);
    }

    #[test]
    fn top_left() {
        let placed = place_lines(&Blocks::new(), &block(&["AB", "CDEF"], 20),
                                 (100, 100), &config(HAlign::Left, VAlign::Top));
        assert_eq!(vec![
            PlacedLine{text: "AB".into(), x: 10, y: 5},
            PlacedLine{text: "CDEF".into(), x: 10, y: 25},
        ], placed);
    }

    #[test]
    fn center_right() {
        let placed = place_lines(&Blocks::new(), &block(&["AB", "CDEF"], 20),
                                 (100, 101), &config(HAlign::Right, VAlign::Center));
        assert_eq!(vec![
            PlacedLine{text: "AB".into(), x: 50, y: 30},
            PlacedLine{text: "CDEF".into(), x: 30, y: 50},
        ], placed);
    }

    #[test]
    fn negative_offsets_round_down() {
        let placed = place_lines(&Blocks::new(), &block(&["ABCDEFGHIJK"], 20),
                                 (99, 10), &config(HAlign::Center, VAlign::Center));
        // (99 - 110) / 2 and (10 - 20) / 2, rounded towards negative infinity.
        assert_eq!(vec![PlacedLine{text: "ABCDEFGHIJK".into(), x: -6, y: -5}], placed);
    }
}
