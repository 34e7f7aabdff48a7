//! Capabilities the node requires from its host.

use std::path::Path;


/// The host application that runs the node.
pub trait Host {
    /// Directory the host keeps its input files in.
    ///
    /// This is where the fonts are read from.
    fn input_directory(&self) -> &Path;
}

impl<'h, H: Host + ?Sized> Host for &'h H {
    fn input_directory(&self) -> &Path {
        (**self).input_directory()
    }
}
