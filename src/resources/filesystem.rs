//! Module defining and implementing resource loaders.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::Loader;


/// Loader for file paths from given directory.
///
/// The resources here are just file *paths* (std::path::PathBuf),
/// and no substantial "loading" is performing (only path resolution).
/// Resource names are file names within the directory, extension included.
///
/// This isn't particularly useful on its own, but can be wrapped around
/// to make more interesting loaders.
pub struct PathLoader<'pl> {
    directory: PathBuf,
    predicate: Arc<dyn Fn(&Path) -> bool + Send + Sync + 'pl>,
}

impl<'pl> PathLoader<'pl> {
    /// Create a loader which only gives out paths to files
    /// that have one of the extensions given.
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        Self::with_predicate(directory, {
            let extensions: Vec<_> = extensions.into_iter()
                .map(|e| e.to_string()).map(|e| e.trim().to_lowercase())
                .collect();
            move |path| {
                let ext = path.extension().and_then(|e| e.to_str())
                    .map(|s| s.trim().to_lowercase());
                extensions.iter().any(|e| Some(e) == ext.as_ref())
            }
        })
    }

    pub fn with_predicate<D, P>(directory: D, predicate: P) -> Self
        where D: AsRef<Path>, P: Fn(&Path) -> bool + Send + Sync + 'pl
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            predicate: Arc::new(predicate),
        }
    }
}

impl<'pl> PathLoader<'pl> {
    /// Directory the resources are loaded from.
    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// List the names of all resources this loader can load, in sorted order.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let directory = glob::Pattern::escape(&self.directory.to_string_lossy());
        let pattern = format!("{}", Path::new(&directory).join("*").display());
        trace!("Globbing with {}", pattern);

        let glob_iter = glob::glob(&pattern).map_err(|e| {
            error!("Failed to glob over files with {}: {}", pattern, e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;

        let mut names: Vec<_> = glob_iter
            .filter_map(|entry| entry.map_err(|e| {
                warn!("Cannot access {} while listing resources: {}", e.path().display(), e);
            }).ok())
            .filter(|f| f.is_file() && (self.predicate)(f))
            .filter_map(|f| f.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl<'pl> Loader for PathLoader<'pl> {
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        // Only plain file names are accepted,
        // so that resources cannot be looked up outside of the directory.
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {},
            _ => return Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("invalid resource name `{}`", name))),
        }

        let path = self.directory.join(name);
        if !(self.predicate)(&path) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("resource `{}` is not of the expected file type", name)));
        }
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::NotFound,
                format!("resource `{}` not found in {}", name, self.directory.display())));
        }
        trace!("Resource `{}` resolved to {}", name, path.display());
        Ok(path)
    }
}

impl<'pl> fmt::Debug for PathLoader<'pl> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .finish()
    }
}


/// Loader for files in given directory.
///
/// The resources it doles out are just file handles (std::fs::File).
/// Wrappers around this loaded can then implement their own decoding.
#[derive(Debug)]
pub struct FileLoader<'pl> {
    inner: PathLoader<'pl>,
}

impl<'pl> FileLoader<'pl> {
    /// Create a loader which only loads files
    /// that have one of the extensions given.
    #[inline]
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        FileLoader{inner: PathLoader::for_extensions(directory, extensions)}
    }
}

impl<'pl> FileLoader<'pl> {
    /// The loader that resolves file paths.
    #[inline]
    pub fn paths(&self) -> &PathLoader<'pl> {
        &self.inner
    }
}

impl<'pl> Loader for FileLoader<'pl> {
    type Item = File;
    type Err = io::Error;

    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let path = self.inner.load(name)?;
        fs::OpenOptions::new().read(true).open(path)
    }
}


/// Wrapper around FileLoader that loads the entire content of the files.
#[derive(Debug)]
pub struct BytesLoader<'fl> {
    inner: FileLoader<'fl>,
}

impl<'fl> BytesLoader<'fl> {
    #[inline]
    pub fn new(inner: FileLoader<'fl>) -> Self {
        BytesLoader{inner}
    }

    /// The loader that resolves file paths.
    #[inline]
    pub fn paths(&self) -> &PathLoader<'fl> {
        self.inner.paths()
    }
}

impl<'fl> Loader for BytesLoader<'fl> {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let file = self.inner.load(name)?;
        read_all(file, name)
    }
}


/// Read the entire content of a file.
/// `what` describes the file for the purpose of logging.
pub(super) fn read_all(file: File, what: &str) -> io::Result<Vec<u8>> {
    let mut bytes = match file.metadata() {
        Ok(stat) => Vec::with_capacity(stat.len() as usize),
        Err(e) => {
            warn!("Failed to stat file of `{}` to obtain its size: {}", what, e);
            Vec::new()
        },
    };

    let mut reader = BufReader::new(file);
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}


#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;
    use spectral::prelude::*;
    use crate::resources::Loader;
    use crate::util::testing::scratch_dir;
    use super::{BytesLoader, FileLoader, PathLoader};

    fn populated_dir(name: &str) -> PathBuf {
        let dir = scratch_dir(name);
        for file in &["Impact.ttf", "comic.OTF", "readme.txt", "arial.ttf"] {
            fs::write(dir.join(file), b"not really a font").unwrap();
        }
        fs::create_dir(dir.join("nested.ttf")).unwrap();
        dir
    }

    #[test]
    fn list_filters_by_extension() {
        let dir = populated_dir("list");
        let loader = PathLoader::for_extensions(&dir, &["ttf", "otf"]);
        assert_that!(loader.list()).is_ok()
            .is_equal_to(vec!["Impact.ttf".to_owned(), "arial.ttf".into(), "comic.OTF".into()]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_resolves_paths() {
        let dir = populated_dir("load");
        let loader = PathLoader::for_extensions(&dir, &["ttf", "otf"]);
        assert_that!(loader.load("Impact.ttf")).is_ok().is_equal_to(dir.join("Impact.ttf"));

        let kind = |name: &str| loader.load(name).unwrap_err().kind();
        assert_eq!(ErrorKind::NotFound, kind("missing.ttf"));
        assert_eq!(ErrorKind::NotFound, kind("nested.ttf"));
        assert_eq!(ErrorKind::InvalidInput, kind("readme.txt"));
        assert_eq!(ErrorKind::InvalidInput, kind("../Impact.ttf"));
        assert_eq!(ErrorKind::InvalidInput, kind(""));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn bytes_are_read_in_full() {
        let dir = populated_dir("bytes");
        let loader = BytesLoader::new(FileLoader::for_extensions(&dir, &["txt"]));
        assert_that!(loader.load("readme.txt")).is_ok()
            .is_equal_to(b"not really a font".to_vec());
        assert_eq!(ErrorKind::InvalidInput, loader.load("arial.ttf").unwrap_err().kind());
        fs::remove_dir_all(dir).unwrap();
    }
}
