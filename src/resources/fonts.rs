//! Module for loading fonts used to render the text.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use itertools::Itertools;
use rusttype::{self, point, Scale};
use thiserror::Error;

use crate::model::Color;
use crate::util::text::{paint, TextBox, Typeface};
use super::Loader;
use super::filesystem::{read_all, BytesLoader, FileLoader, PathLoader};


/// Extensions of font files that can be loaded.
pub const FILE_EXTENSIONS: &'static [&'static str] = &["ttf", "otf"];


/// Font that can be used to render the text.
pub struct Font(rusttype::Font<'static>);

impl Font {
    /// Parse a font from the content of a TrueType/OpenType file.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        rusttype::Font::try_from_vec(bytes).map(Font).ok_or(FontError::Invalid)
    }

    /// Load a font from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FontError> {
        let path = path.as_ref();
        trace!("Loading font from {}...", path.display());
        let file = File::open(path)?;
        let bytes = read_all(file, &path.display().to_string())?;
        let font = Self::from_bytes(bytes).map_err(|e| {
            error!("File {} doesn't contain a valid font", path.display()); e
        })?;
        debug!("Font {} loaded successfully", path.display());
        Ok(font)
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<rusttype::Font<'static>> for Font {
    fn from(input: rusttype::Font<'static>) -> Self {
        Font(input)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyphs)", self.glyph_count())
    }
}

impl Font {
    /// Scale for rendering the font at given size.
    ///
    /// Font size is the height of the em square in pixels,
    /// whereas `rusttype` scales fonts by their ascent-to-descent height.
    fn scale(&self, size: u32) -> Scale {
        let units_per_em = self.units_per_em() as f32;
        let v_metrics = self.v_metrics_unscaled();
        let height = v_metrics.ascent - v_metrics.descent;
        if units_per_em <= 0.0 || height <= 0.0 {
            return Scale::uniform(size as f32);
        }
        Scale::uniform(size as f32 * height / units_per_em)
    }
}

impl Typeface for Font {
    fn line_box(&self, line: &str, size: u32) -> TextBox {
        let scale = self.scale(size);
        let ascent = self.v_metrics(scale).ascent;

        // Box of the glyphs' ink, extended to where the "caret" ends up
        // after laying out the whole line.
        let mut ink: Option<TextBox> = None;
        let mut caret: f32 = 0.0;
        for glyph in self.layout(line, scale, point(0.0, ascent)) {
            caret = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
            if let Some(bb) = glyph.pixel_bounding_box() {
                let glyph_box = TextBox{
                    left: bb.min.x, top: bb.min.y, right: bb.max.x, bottom: bb.max.y,
                };
                ink = Some(ink.map_or(glyph_box, |b| b.union(glyph_box)));
            }
        }

        let advance = caret.ceil() as i32;
        match ink {
            Some(b) => TextBox{
                left: b.left.min(0),
                top: b.top,
                right: b.right.max(advance),
                bottom: b.bottom,
            },
            None => TextBox{right: advance, ..TextBox::default()},
        }
    }

    fn draw_line(&self, layer: &mut RgbaImage, origin: (i32, i32),
                 line: &str, size: u32, color: Color) {
        let scale = self.scale(size);
        let ascent = self.v_metrics(scale).ascent;
        let start = point(origin.0 as f32, origin.1 as f32 + ascent);

        for glyph in self.layout(line, scale, start) {
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    let x = bbox.min.x + x as i32;
                    let y = bbox.min.y + y as i32;
                    paint(layer, x, y, color, v);
                });
            }
        }
    }

    /// Check if the font has all the glyphs for given text.
    fn check(&self, text: &str) {
        let missing: BTreeSet<_> = text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.glyph(c).id().0 == 0)
            .map(|c| c as u32)
            .collect();
        if !missing.is_empty() {
            warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
                missing.iter().format_with(", ", |c, f| f(&format_args!("{:#x}", c))));
        }
    }
}


/// Error that may occur while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// Font file couldn't be found or read.
    #[error("cannot read font file: {0}")]
    Io(#[from] io::Error),
    /// Font file is not a valid TrueType/OpenType font.
    #[error("not a valid TrueType/OpenType font")]
    Invalid,
}


/// Loader of fonts from the files in a single directory.
///
/// Fonts are identified by their file names, e.g. `"impact.ttf"`.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader<'static>,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                FileLoader::for_extensions(directory, FILE_EXTENSIONS))
        }
    }
}

impl FontLoader {
    /// Directory the fonts are loaded from.
    #[inline]
    pub fn directory(&self) -> &Path {
        self.paths().directory()
    }

    /// Resolve the font name to the path of its file.
    #[inline]
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FontError> {
        self.paths().load(name).map_err(Into::into)
    }

    /// List the names of all available fonts.
    pub fn list(&self) -> Result<Vec<String>, FontError> {
        let fonts = self.paths().list()?;
        debug!("Found {} font(s) in {}", fonts.len(), self.directory().display());
        Ok(fonts)
    }

    #[inline]
    fn paths(&self) -> &PathLoader<'static> {
        self.inner.paths()
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load<'n>(&self, name: &'n str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name)?;
        let font = Font::from_bytes(bytes).map_err(|e| {
            error!("File for `{}` font resource doesn't contain a valid font", name); e
        })?;
        debug!("Font `{}` loaded successfully", name);
        Ok(font)
    }
}


#[cfg(test)]
mod tests {
    use std::fs;
    use image::{Rgba, RgbaImage};
    use spectral::prelude::*;
    use crate::model::Color;
    use crate::resources::Loader;
    use crate::util::testing::scratch_dir;
    use crate::util::text::Typeface;
    use super::{Font, FontError, FontLoader};

    /// DejaVu Sans Mono (see testdata/DejaVuSansMono.LICENSE).
    const MONO_TTF: &'static [u8] = include_bytes!("testdata/DejaVuSansMono.ttf");

    fn mono() -> Font {
        Font::from_bytes(MONO_TTF.to_vec()).unwrap()
    }

    #[test]
    fn line_box_starts_at_ascender() {
        let font = mono();
        for &size in &[12, 40, 128] {
            let b = font.line_box("A", size);
            // Capital letters start below the ascender and end above the em square's bottom.
            assert_that!(b.top).is_greater_than(0);
            assert_that!(b.bottom).is_less_than_or_equal_to(size as i32);
            assert_that!(b.bottom).is_greater_than(b.top);
            assert_that!(b.left).is_less_than_or_equal_to(0);
        }
    }

    #[test]
    fn size_is_the_em_size() {
        let font = mono();
        // Capital height is about 0.73em in this font...
        let b = font.line_box("H", 100);
        assert_that!(b.height()).is_greater_than_or_equal_to(65);
        assert_that!(b.height()).is_less_than_or_equal_to(80);
        // ...and every glyph advances by about 0.6em.
        let b = font.line_box("HHHH", 100);
        assert_that!(b.right).is_greater_than_or_equal_to(230);
        assert_that!(b.right).is_less_than_or_equal_to(252);
    }

    #[test]
    fn width_includes_advance() {
        let font = mono();
        let one = font.line_box("A", 40);
        let two = font.line_box("AA", 40);
        let spaced = font.line_box("A ", 40);
        assert_that!(two.right).is_greater_than(one.right);
        assert_that!(spaced.right).is_greater_than(one.right);
        assert_eq!(one.bottom, spaced.bottom);

        let blank = font.line_box(" ", 40);
        assert_that!(blank.right).is_greater_than(0);
        assert_eq!(0, blank.bottom);
    }

    #[test]
    fn draw_line_paints_inside_the_box() {
        let font = mono();
        let (origin, size) = ((10, 7), 40);
        let mut layer = RgbaImage::new(120, 60);
        font.draw_line(&mut layer, origin, "AB", size, Color::white());

        let b = font.line_box("AB", size);
        let mut painted = 0;
        for (x, y, p) in layer.enumerate_pixels() {
            if p == &Rgba([0, 0, 0, 0]) {
                continue;
            }
            painted += 1;
            let (x, y) = (x as i32 - origin.0, y as i32 - origin.1);
            assert!(x >= b.left && x < b.right && y >= b.top && y < b.bottom,
                "pixel ({}, {}) outside of {:?}", x, y, b);
        }
        assert_that!(painted).is_greater_than(100);
        // Stems of the letters are fully covered.
        assert!(layer.pixels().any(|p| p == &Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn real_font_from_file() {
        let dir = scratch_dir("font-real");
        fs::write(dir.join("mono.ttf"), MONO_TTF).unwrap();

        assert_that!(Font::from_path(dir.join("mono.ttf"))).is_ok();
        let font = FontLoader::new(&dir).load("mono.ttf").unwrap();
        assert_that!(font.glyph_count()).is_greater_than(100);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert_that!(Font::from_bytes(b"definitely not a font".to_vec())).is_err();
        assert_that!(Font::from_bytes(vec![])).is_err();
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = scratch_dir("font-missing");
        match Font::from_path(dir.join("nope.ttf")) {
            Err(FontError::Io(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn loader_lists_and_resolves_fonts() {
        let dir = scratch_dir("font-loader");
        for file in &["impact.ttf", "Comic.otf", "notes.txt"] {
            fs::write(dir.join(file), b"\0\x01\0\0").unwrap();
        }

        let loader = FontLoader::new(&dir);
        assert_that!(loader.list()).is_ok()
            .is_equal_to(vec!["Comic.otf".to_owned(), "impact.ttf".to_owned()]);
        assert_that!(loader.resolve("impact.ttf")).is_ok().is_equal_to(dir.join("impact.ttf"));
        assert_that!(loader.resolve("notes.txt")).is_err();

        // The file is there, but it's not a real font.
        match loader.load("impact.ttf") {
            Err(FontError::Invalid) => {},
            other => panic!("unexpected result: {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }
}
