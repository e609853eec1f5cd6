use serde::Serialize;
use std::path::{Path, PathBuf};

/// Priority-ordered candidate locations for one file. First match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchList {
    candidates: Vec<PathBuf>,
}

impl SearchList {
    /// Builds the list, dropping empty entries (unset overrides) and keeping
    /// the relative order of the rest.
    pub fn from_candidates<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let candidates = candidates
            .into_iter()
            .map(Into::into)
            .filter(|p: &PathBuf| !p.as_os_str().is_empty())
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.candidates.iter()
    }

    /// Checks the filesystem on every call; do not cache the result.
    pub fn find_first_existing(&self) -> Option<PathBuf> {
        find_first_existing(&self.candidates)
    }
}

impl<'a> IntoIterator for &'a SearchList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Returns the first candidate that exists right now, unmodified.
///
/// Errors while checking (permissions, broken links) count as "does not
/// exist"; a miss is `None`, never an error.
pub fn find_first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    for candidate in candidates {
        let path = candidate.as_ref();
        log::trace!("probing {}", path.display());
        if path.exists() {
            log::debug!("found {}", path.display());
            return Some(path.to_path_buf());
        }
    }
    log::debug!("none of {} candidates exist", candidates.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_entries_are_dropped_in_order() {
        let list = SearchList::from_candidates(["", "/a/servers.yaml", "", "/b/servers.yaml"]);
        assert_eq!(
            list.candidates(),
            &[
                PathBuf::from("/a/servers.yaml"),
                PathBuf::from("/b/servers.yaml")
            ]
        );
    }

    #[test]
    fn returns_second_candidate_when_only_it_exists() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let first = tmp.path().join("missing-1.yaml");
        let second = tmp.path().join("present.yaml");
        let third = tmp.path().join("missing-2.yaml");
        std::fs::write(&second, b"servers: {}\n").expect("write servers.yaml");

        let found = find_first_existing(&[first, second.clone(), third]);
        assert_eq!(found, Some(second));
    }

    #[test]
    fn first_existing_wins_over_later_ones() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let a = tmp.path().join("a.yaml");
        let b = tmp.path().join("b.yaml");
        std::fs::write(&a, b"").expect("write a");
        std::fs::write(&b, b"").expect("write b");

        let list = SearchList::from_candidates([a.clone(), b]);
        assert_eq!(list.find_first_existing(), Some(a));
    }

    #[test]
    fn none_existing_is_not_found() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let list = SearchList::from_candidates([tmp.path().join("x"), tmp.path().join("y")]);
        assert_eq!(list.find_first_existing(), None);
        assert_eq!(find_first_existing::<PathBuf>(&[]), None);
    }

    #[test]
    fn lookup_reflects_filesystem_at_call_time() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("servers.yaml");
        let list = SearchList::from_candidates([target.clone()]);

        assert_eq!(list.find_first_existing(), None);
        std::fs::write(&target, b"").expect("write target");
        assert_eq!(list.find_first_existing(), Some(target.clone()));
        std::fs::remove_file(&target).expect("remove target");
        assert_eq!(list.find_first_existing(), None);
    }

    #[test]
    fn directories_count_as_existing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let found = find_first_existing(&[tmp.path()]);
        assert_eq!(found.as_deref(), Some(tmp.path()));
    }
}
