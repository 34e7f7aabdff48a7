//! Helpers shared by the tests.

use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::RgbaImage;

use crate::model::Color;
use super::text::{paint, TextBox, Typeface};


/// Create an empty scratch directory for a test.
pub fn scratch_dir(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let dir = env::temp_dir().join(format!("meme-overlay-{}-{}-{}",
        process::id(), name, COUNTER.fetch_add(1, Ordering::SeqCst)));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}


/// A single `Typeface::draw_line` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Draw {
    pub origin: (i32, i32),
    pub line: String,
    pub size: u32,
    pub color: Color,
}

/// Monospaced typeface where every glyph is a solid block.
///
/// Blocks are half as wide as the font size and exactly as tall,
/// and spaces leave no ink. All drawing calls are recorded.
#[derive(Debug, Default)]
pub struct Blocks {
    pub draws: RefCell<Vec<Draw>>,
}

impl Blocks {
    pub fn new() -> Self {
        Blocks::default()
    }

    #[inline]
    pub fn advance(size: u32) -> i32 {
        (size / 2) as i32
    }

    pub fn draws(&self) -> Vec<Draw> {
        self.draws.borrow().clone()
    }
}

impl Typeface for Blocks {
    fn line_box(&self, line: &str, size: u32) -> TextBox {
        let width = line.chars().count() as i32 * Self::advance(size);
        let has_ink = line.chars().any(|c| !c.is_whitespace());
        TextBox{left: 0, top: 0, right: width, bottom: if has_ink { size as i32 } else { 0 }}
    }

    fn draw_line(&self, layer: &mut RgbaImage, origin: (i32, i32),
                 line: &str, size: u32, color: Color) {
        self.draws.borrow_mut().push(Draw{origin, line: line.to_owned(), size, color});

        let advance = Self::advance(size);
        for (i, c) in line.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = origin.0 + i as i32 * advance;
            for y in origin.1..origin.1 + size as i32 {
                for x in left..left + advance {
                    paint(layer, x, y, color, 1.0);
                }
            }
        }
    }
}
