//! # Super-manager paths
//!
//! Every filesystem location the super-manager tool touches, derived from a
//! single base directory, plus the constant lists its collaborators validate
//! against (hook events, secret patterns, known `.env` files).
//!
//! Resolution is pure: nothing here creates directories or reads files. The
//! only filesystem access is [`find_first_existing`], which checks a search
//! list at call time.
//!
//! ## Example
//!
//! ```
//! use super_manager_paths::{ConfigPaths, MapEnv};
//!
//! let env = MapEnv::new().with("HOME", "/u");
//! let paths = ConfigPaths::from_env(&env);
//! assert_eq!(paths.hooks_dir, std::path::PathBuf::from("/u/.claude/hooks"));
//! ```

pub mod constants;
pub mod env;
mod error;
mod known_env;
mod layout;
mod search;

pub use constants::{
    is_valid_hook_event, matches_secret_pattern, HookEvent, DEFAULT_CONFIG_REPO, SECRET_PATTERNS,
    VALID_HOOK_EVENTS,
};
pub use env::{EnvSource, Fallback, MapEnv, ProcessEnv};
pub use error::{PathsError, Result};
pub use known_env::{KnownEnvFile, KnownEnvFiles, KNOWN_ENV_FILES};
pub use layout::ConfigPaths;
pub use search::{find_first_existing, SearchList};
