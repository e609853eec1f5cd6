//! The resolved directory tree.
//!
//! ```text
//! <home>/.claude/
//! ├── settings.json, hooks/, skills/          (owned by the assistant)
//! ├── instructions/{backups,repos}/, repos.json
//! └── super-manager/
//!     ├── registries/   hook + skill registries, config hash, servers.yaml fallback
//!     ├── logs/ reports/ archive/ tests/ credentials/
//!     └── config/{repos,backups}/ + repos.json, installed.json, pending.json
//! ```

use crate::constants::{
    CLAUDE_DIR_NAME, ENV_FILE_NAME, INSTRUCTIONS_DIR_NAME, MCP_DIR_NAME, SERVERS_YAML_NAME,
    SUPER_MANAGER_DIR_NAME,
};
use crate::env::{
    resolve_home, EnvSource, Fallback, ProcessEnv, MCP_DIR_VAR, MCP_SERVERS_YAML_VAR,
};
use crate::error::{PathsError, Result};
use crate::known_env::{KnownEnvFile, KnownEnvFiles};
use crate::search::{find_first_existing, SearchList};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::path::{Path, PathBuf};

static GLOBAL: Lazy<ConfigPaths> = Lazy::new(ConfigPaths::from_process_env);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPaths {
    pub home: PathBuf,
    pub claude_dir: PathBuf,

    // Read by the assistant itself, not by super-manager.
    pub settings_json: PathBuf,
    pub hooks_dir: PathBuf,
    pub global_skills_dir: PathBuf,
    pub skill_mgr_cli: PathBuf,

    pub super_manager_dir: PathBuf,
    pub registries_dir: PathBuf,
    pub hook_registry: PathBuf,
    pub skill_registry: PathBuf,
    pub config_hash_file: PathBuf,
    pub logs_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub config_report: PathBuf,
    pub archive_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub credentials_dir: PathBuf,
    pub credential_registry: PathBuf,

    pub config_dir: PathBuf,
    pub config_repos_dir: PathBuf,
    pub config_backups_dir: PathBuf,
    pub config_repos_json: PathBuf,
    pub config_installed_json: PathBuf,
    pub config_pending_json: PathBuf,

    /// Holds one subdirectory per hook event (`UserPromptSubmit/`, `Stop/`, ...).
    pub instructions_dir: PathBuf,
    pub instructions_backup_dir: PathBuf,
    pub instructions_repos_dir: PathBuf,
    pub instructions_repos_config: PathBuf,

    pub mcp_dir: PathBuf,
    pub mcp_servers_yaml_paths: SearchList,
    pub known_env_files: KnownEnvFiles,
}

impl ConfigPaths {
    /// Derives every path from `home` with no overrides applied.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        Self::build(home.as_ref(), None, None)
    }

    pub fn from_env(source: &impl EnvSource) -> Self {
        let home = resolve_home(source);
        Self::from_env_with_home(source, home)
    }

    /// Uses an explicit base directory but still honors the `MCP_DIR` and
    /// `MCP_SERVERS_YAML` overrides from `source`.
    pub fn from_env_with_home(source: &impl EnvSource, home: impl AsRef<Path>) -> Self {
        let mcp_dir = Fallback::new().env(MCP_DIR_VAR).resolve_opt(source);
        let yaml_override = Fallback::new().env(MCP_SERVERS_YAML_VAR).resolve_opt(source);
        Self::build(
            home.as_ref(),
            mcp_dir.map(PathBuf::from),
            yaml_override.map(PathBuf::from),
        )
    }

    pub fn from_process_env() -> Self {
        let paths = Self::from_env(&ProcessEnv);
        log::debug!(
            "resolved super-manager paths under {}",
            paths.super_manager_dir.display()
        );
        paths
    }

    /// Process-wide registry, resolved from the environment on first use.
    pub fn global() -> &'static ConfigPaths {
        &GLOBAL
    }

    fn build(home: &Path, mcp_dir: Option<PathBuf>, yaml_override: Option<PathBuf>) -> Self {
        let claude_dir = home.join(CLAUDE_DIR_NAME);
        let global_skills_dir = claude_dir.join("skills");
        let super_manager_dir = claude_dir.join(SUPER_MANAGER_DIR_NAME);

        let registries_dir = super_manager_dir.join("registries");
        let reports_dir = super_manager_dir.join("reports");
        let credentials_dir = super_manager_dir.join("credentials");
        let config_dir = super_manager_dir.join("config");
        let instructions_dir = claude_dir.join(INSTRUCTIONS_DIR_NAME);

        let mcp_dir = mcp_dir.unwrap_or_else(|| home.join(MCP_DIR_NAME));
        let mcp_servers_yaml_paths = SearchList::from_candidates([
            yaml_override.unwrap_or_default(),
            home.join(MCP_DIR_NAME)
                .join("mcp-manager")
                .join(SERVERS_YAML_NAME),
            registries_dir.join(SERVERS_YAML_NAME),
        ]);
        let known_env_files = KnownEnvFiles::builtin(&mcp_dir);

        Self {
            home: home.to_path_buf(),
            settings_json: claude_dir.join("settings.json"),
            hooks_dir: claude_dir.join("hooks"),
            skill_mgr_cli: global_skills_dir
                .join("skill-marketplace")
                .join("cli")
                .join("skill-mgr"),
            global_skills_dir,

            hook_registry: registries_dir.join("hook-registry.json"),
            skill_registry: registries_dir.join("skill-registry.json"),
            config_hash_file: registries_dir.join("last-known-config-hash.txt"),
            registries_dir,
            logs_dir: super_manager_dir.join("logs"),
            config_report: reports_dir.join("config-report.md"),
            reports_dir,
            archive_dir: super_manager_dir.join("archive"),
            tests_dir: super_manager_dir.join("tests"),
            credential_registry: credentials_dir.join("credential-registry.json"),
            credentials_dir,

            config_repos_dir: config_dir.join("repos"),
            config_backups_dir: config_dir.join("backups"),
            config_repos_json: config_dir.join("repos.json"),
            config_installed_json: config_dir.join("installed.json"),
            config_pending_json: config_dir.join("pending.json"),
            config_dir,

            instructions_backup_dir: instructions_dir.join("backups"),
            instructions_repos_dir: instructions_dir.join("repos"),
            instructions_repos_config: instructions_dir.join("repos.json"),
            instructions_dir,

            super_manager_dir,
            claude_dir,
            mcp_dir,
            mcp_servers_yaml_paths,
            known_env_files,
        }
    }

    /// Every named single path, in registry order.
    pub fn entries(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("home", self.home.as_path()),
            ("claude_dir", self.claude_dir.as_path()),
            ("settings_json", self.settings_json.as_path()),
            ("hooks_dir", self.hooks_dir.as_path()),
            ("global_skills_dir", self.global_skills_dir.as_path()),
            ("skill_mgr_cli", self.skill_mgr_cli.as_path()),
            ("super_manager_dir", self.super_manager_dir.as_path()),
            ("registries_dir", self.registries_dir.as_path()),
            ("hook_registry", self.hook_registry.as_path()),
            ("skill_registry", self.skill_registry.as_path()),
            ("config_hash_file", self.config_hash_file.as_path()),
            ("logs_dir", self.logs_dir.as_path()),
            ("reports_dir", self.reports_dir.as_path()),
            ("config_report", self.config_report.as_path()),
            ("archive_dir", self.archive_dir.as_path()),
            ("tests_dir", self.tests_dir.as_path()),
            ("credentials_dir", self.credentials_dir.as_path()),
            ("credential_registry", self.credential_registry.as_path()),
            ("config_dir", self.config_dir.as_path()),
            ("config_repos_dir", self.config_repos_dir.as_path()),
            ("config_backups_dir", self.config_backups_dir.as_path()),
            ("config_repos_json", self.config_repos_json.as_path()),
            ("config_installed_json", self.config_installed_json.as_path()),
            ("config_pending_json", self.config_pending_json.as_path()),
            ("instructions_dir", self.instructions_dir.as_path()),
            ("instructions_backup_dir", self.instructions_backup_dir.as_path()),
            ("instructions_repos_dir", self.instructions_repos_dir.as_path()),
            ("instructions_repos_config", self.instructions_repos_config.as_path()),
            ("mcp_dir", self.mcp_dir.as_path()),
        ]
    }

    pub fn get(&self, name: &str) -> Result<&Path> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, path)| path)
            .ok_or_else(|| PathsError::UnknownPath(name.to_string()))
    }

    /// First existing `servers.yaml`, checked against the filesystem now.
    pub fn find_servers_yaml(&self) -> Option<PathBuf> {
        find_first_existing(self.mcp_servers_yaml_paths.candidates())
    }

    /// `<mcp_dir>/<server_dir>/.env`, labelled `service`.
    pub fn known_env_file(&self, service: impl Into<String>, server_dir: &str) -> KnownEnvFile {
        KnownEnvFile::new(service, self.mcp_dir.join(server_dir).join(ENV_FILE_NAME))
    }
}
