use crate::error::{PathsError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// The only hardcoded, non-derived value in the system. It seeds the default
// config source before any user configuration exists.
pub const DEFAULT_CONFIG_REPO: &str = "grobomo/claude-code-defaults";

pub const CLAUDE_DIR_NAME: &str = ".claude";
pub const SUPER_MANAGER_DIR_NAME: &str = "super-manager";
pub const INSTRUCTIONS_DIR_NAME: &str = "instructions";
pub const MCP_DIR_NAME: &str = "mcp";
pub const SERVERS_YAML_NAME: &str = "servers.yaml";
pub const ENV_FILE_NAME: &str = ".env";

/// Lifecycle events accepted by the assistant's hook system, in order.
pub const VALID_HOOK_EVENTS: [&str; 9] = [
    "SessionStart",
    "SessionEnd",
    "UserPromptSubmit",
    "PreToolUse",
    "PostToolUse",
    "PreCompact",
    "Stop",
    // Older super-manager lists spell this `SubAgentSop`; the hook system emits `SubagentStop`.
    "SubagentStop",
    "PermissionRequest",
];

/// Case-sensitive substrings marking an env key as holding a secret.
pub const SECRET_PATTERNS: [&str; 6] = ["TOKEN", "KEY", "SECRET", "PASSWORD", "PASS", "AUTH"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HookEvent {
    SessionStart,
    SessionEnd,
    UserPromptSubmit,
    PreToolUse,
    PostToolUse,
    PreCompact,
    Stop,
    SubagentStop,
    PermissionRequest,
}

impl HookEvent {
    pub const ALL: [HookEvent; 9] = [
        HookEvent::SessionStart,
        HookEvent::SessionEnd,
        HookEvent::UserPromptSubmit,
        HookEvent::PreToolUse,
        HookEvent::PostToolUse,
        HookEvent::PreCompact,
        HookEvent::Stop,
        HookEvent::SubagentStop,
        HookEvent::PermissionRequest,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HookEvent::SessionStart => "SessionStart",
            HookEvent::SessionEnd => "SessionEnd",
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::PreCompact => "PreCompact",
            HookEvent::Stop => "Stop",
            HookEvent::SubagentStop => "SubagentStop",
            HookEvent::PermissionRequest => "PermissionRequest",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookEvent {
    type Err = PathsError;

    fn from_str(s: &str) -> Result<Self> {
        HookEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| PathsError::UnknownHookEvent(s.to_string()))
    }
}

pub fn is_valid_hook_event(name: &str) -> bool {
    VALID_HOOK_EVENTS.contains(&name)
}

/// Literal substring match against [`SECRET_PATTERNS`]. No case folding:
/// callers that want `api_token` to match must uppercase it themselves.
pub fn matches_secret_pattern(name: &str) -> bool {
    SECRET_PATTERNS.iter().any(|pattern| name.contains(pattern))
}
