use pretty_assertions::assert_eq;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use super_manager_paths::{find_first_existing, ConfigPaths, ProcessEnv};

static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

const KEYS: &[&str] = &["HOME", "USERPROFILE", "MCP_SERVERS_YAML", "MCP_DIR"];

struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

impl EnvGuard {
    fn new(keys: &[&str]) -> Self {
        let mut saved = Vec::new();
        for &key in keys {
            saved.push((key.to_string(), env::var_os(key)));
            env::remove_var(key);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
    }
}

#[test]
fn process_env_home_drives_every_path() {
    let _lock = ENV_MUTEX.lock().expect("ENV_MUTEX");
    let _guard = EnvGuard::new(KEYS);
    env::set_var("HOME", "/u");

    let paths = ConfigPaths::from_env(&ProcessEnv);
    assert_eq!(paths, ConfigPaths::for_home("/u"));
    assert_eq!(paths.hooks_dir, PathBuf::from("/u/.claude/hooks"));
}

#[test]
fn process_env_without_home_is_relative() {
    let _lock = ENV_MUTEX.lock().expect("ENV_MUTEX");
    let _guard = EnvGuard::new(KEYS);

    let paths = ConfigPaths::from_process_env();
    assert_eq!(paths.claude_dir, PathBuf::from(".claude"));
    assert_eq!(
        paths.config_repos_json,
        PathBuf::from(".claude/super-manager/config/repos.json")
    );
}

#[test]
fn process_env_yaml_override_is_found_first() {
    let _lock = ENV_MUTEX.lock().expect("ENV_MUTEX");
    let _guard = EnvGuard::new(KEYS);

    let tmp = tempfile::tempdir().expect("tempdir");
    let home = tmp.path().join("home");
    let custom = tmp.path().join("custom-servers.yaml");
    std::fs::write(&custom, b"servers: {}\n").expect("write override");

    let fallback = home.join(".claude/super-manager/registries/servers.yaml");
    std::fs::create_dir_all(fallback.parent().expect("parent")).expect("mkdir registries");
    std::fs::write(&fallback, b"").expect("write fallback");

    env::set_var("HOME", &home);
    env::set_var("MCP_SERVERS_YAML", &custom);

    let paths = ConfigPaths::from_process_env();
    assert_eq!(
        paths.mcp_servers_yaml_paths.candidates(),
        &[
            custom.clone(),
            home.join("mcp/mcp-manager/servers.yaml"),
            fallback.clone(),
        ]
    );
    assert_eq!(paths.find_servers_yaml(), Some(custom.clone()));

    std::fs::remove_file(&custom).expect("remove override");
    assert_eq!(
        find_first_existing(paths.mcp_servers_yaml_paths.candidates()),
        Some(fallback)
    );
}

#[cfg(unix)]
#[test]
fn process_env_keeps_non_utf8_home() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _lock = ENV_MUTEX.lock().expect("ENV_MUTEX");
    let _guard = EnvGuard::new(KEYS);
    let home = OsStr::from_bytes(b"/home/caf\xe9");
    env::set_var("HOME", home);

    let paths = ConfigPaths::from_process_env();
    assert_eq!(paths.home, PathBuf::from(home));
    assert_eq!(paths.claude_dir, PathBuf::from(home).join(".claude"));
    assert!(paths.registries_dir.is_absolute());
}
