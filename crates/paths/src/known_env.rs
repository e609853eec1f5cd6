use serde::Serialize;
use std::path::{Path, PathBuf};

/// A service label paired with the `.env` file credential scanners read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownEnvFile {
    pub service: String,
    pub path: PathBuf,
}

impl KnownEnvFile {
    pub fn new(service: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            path: path.into(),
        }
    }
}

/// Deployer-populated; ships empty. Entries look like
/// `("wiki-lite", "<mcp_dir>/mcp-wiki-lite/.env")`.
pub const KNOWN_ENV_FILES: &[(&str, &str)] = &[];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnownEnvFiles {
    entries: Vec<KnownEnvFile>,
}

impl KnownEnvFiles {
    /// The built-in table, with relative paths resolved under `mcp_dir`.
    pub fn builtin(mcp_dir: &Path) -> Self {
        let entries = KNOWN_ENV_FILES
            .iter()
            .map(|(service, rel)| KnownEnvFile::new(*service, mcp_dir.join(rel)))
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, entry: KnownEnvFile) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnownEnvFile> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<KnownEnvFile> for KnownEnvFiles {
    fn extend<T: IntoIterator<Item = KnownEnvFile>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a KnownEnvFiles {
    type Item = &'a KnownEnvFile;
    type IntoIter = std::slice::Iter<'a, KnownEnvFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_ships_empty() {
        assert!(KNOWN_ENV_FILES.is_empty());
        assert!(KnownEnvFiles::builtin(Path::new("/srv/mcp")).is_empty());
    }

    #[test]
    fn deployer_entries_keep_insertion_order() {
        let mut files = KnownEnvFiles::default();
        files.push(KnownEnvFile::new("wiki-lite", "/srv/mcp/mcp-wiki-lite/.env"));
        files.extend([KnownEnvFile::new("jira-lite", "/srv/mcp/mcp-jira-lite/.env")]);

        let services: Vec<_> = files.iter().map(|f| f.service.as_str()).collect();
        assert_eq!(services, ["wiki-lite", "jira-lite"]);
        assert!(!files.is_empty());
    }
}
