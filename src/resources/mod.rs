//! Module handling the resources used for captioning.

mod filesystem;
mod fonts;


pub use self::filesystem::{BytesLoader, FileLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader, FILE_EXTENSIONS as FONT_FILE_EXTENSIONS};


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err>;
}
