//! Source discovery.
//!
//! Maps every source file of a tree to the object file it compiles into.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::util::errors::{Error, Result};
use crate::util::fs::find_files;

/// A discovered source file and its derived object path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Source path, relative to the project root
    pub source: PathBuf,
    /// Object path, relative to the project root
    pub object: PathBuf,
}

/// Derive the object path of `source`.
///
/// The extension is replaced with `object_ext` and the result rooted under
/// `object_dir`, keeping the source's own relative path (including its source
/// root) so trees with different roots cannot collide.
pub fn object_path(object_dir: &Path, source: &Path, object_ext: &str) -> PathBuf {
    object_dir.join(source.with_extension(object_ext))
}

/// All sources of one tree, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    /// Scan `base/root` for files matching `pattern`.
    ///
    /// Fails if two sources would produce the same object file.
    pub fn discover(
        base: &Path,
        root: &Path,
        pattern: &Pattern,
        object_dir: &Path,
        object_ext: &str,
    ) -> Result<Self> {
        let sources = find_files(base, root, pattern)?;
        let set = Self::from_sources(sources, object_dir, object_ext)?;
        tracing::debug!(
            "discovered {} source(s) under {}",
            set.len(),
            root.display()
        );
        Ok(set)
    }

    /// Build a set from already-discovered source paths.
    pub fn from_sources(
        sources: Vec<PathBuf>,
        object_dir: &Path,
        object_ext: &str,
    ) -> Result<Self> {
        let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut files = Vec::with_capacity(sources.len());

        for source in sources {
            let object = object_path(object_dir, &source, object_ext);
            if let Some(first) = seen.insert(object.clone(), source.clone()) {
                return Err(Error::ObjectCollision {
                    first,
                    second: source,
                    object,
                });
            }
            files.push(SourceFile { source, object });
        }

        Ok(SourceSet { files })
    }

    /// Iterate over the files in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Object paths in discovery order.
    pub fn objects(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.object.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_maps_objects() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/sub")).unwrap();
        fs::write(tmp.path().join("src/a.ext"), "").unwrap();
        fs::write(tmp.path().join("src/sub/b.ext"), "").unwrap();

        let set = SourceSet::discover(
            tmp.path(),
            Path::new("src"),
            &Pattern::new("*.ext").unwrap(),
            Path::new("obj"),
            "o",
        )
        .unwrap();

        let pairs: Vec<_> = set
            .iter()
            .map(|f| (f.source.clone(), f.object.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (PathBuf::from("src/a.ext"), PathBuf::from("obj/src/a.o")),
                (PathBuf::from("src/sub/b.ext"), PathBuf::from("obj/src/sub/b.o")),
            ]
        );
    }

    #[test]
    fn test_objects_are_distinct() {
        let sources = vec![
            PathBuf::from("src/a.c++"),
            PathBuf::from("src/sub/a.c++"),
            PathBuf::from("src/a/b.c++"),
            PathBuf::from("src/a.b.c++"),
        ];
        let set = SourceSet::from_sources(sources, Path::new("obj"), "o").unwrap();
        let objects: HashSet<_> = set.objects().into_iter().collect();
        assert_eq!(objects.len(), set.len());
    }

    #[test]
    fn test_same_stem_collision_fails() {
        let sources = vec![PathBuf::from("src/a.c++"), PathBuf::from("src/a.cc")];
        let err = SourceSet::from_sources(sources, Path::new("obj"), "o").unwrap_err();
        match err {
            Error::ObjectCollision {
                first,
                second,
                object,
            } => {
                assert_eq!(first, PathBuf::from("src/a.c++"));
                assert_eq!(second, PathBuf::from("src/a.cc"));
                assert_eq!(object, PathBuf::from("obj/src/a.o"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trees_are_disjoint() {
        let project = SourceSet::from_sources(
            vec![PathBuf::from("src/main.c++"), PathBuf::from("src/x/y.c++")],
            Path::new("obj"),
            "o",
        )
        .unwrap();
        let tests = SourceSet::from_sources(
            vec![PathBuf::from("test/main.c++"), PathBuf::from("test/x/y.c++")],
            Path::new("obj"),
            "o",
        )
        .unwrap();

        let project: HashSet<_> = project.objects().into_iter().collect();
        assert!(tests.objects().iter().all(|o| !project.contains(o)));
    }
}
