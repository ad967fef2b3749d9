use super::error::PlayerError;
use super::registry::{player_definitions, PlayerDefinition, PlayerName};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Finds an executable for a command name.
///
/// Called once per candidate on every resolution; implementations must not
/// cache results across calls.
pub trait ExecutableLocator: Send + Sync {
    fn locate(&self, command: &str) -> Option<PathBuf>;
}

/// Looks commands up on an executable search path (`PATH` by default).
#[derive(Debug, Clone, Default)]
pub struct SystemPathLocator {
    search_path: Option<OsString>,
}

impl SystemPathLocator {
    /// Locator reading `PATH` at probe time.
    pub fn from_env() -> Self {
        Self { search_path: None }
    }

    /// Locator searching the given path list instead of `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ExecutableLocator for SystemPathLocator {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        if command.contains(std::path::MAIN_SEPARATOR) {
            let candidate = PathBuf::from(command);
            return is_executable(&candidate).then_some(candidate);
        }

        let search_path = match &self.search_path {
            Some(path) => path.clone(),
            None => std::env::var_os("PATH")?,
        };

        std::env::split_paths(&search_path)
            .map(|dir| dir.join(command))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }
    // Windows resolves `mpv` to `mpv.exe`
    path.with_extension("exe").is_file()
}

/// Availability of one registered player, for status output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailablePlayer {
    pub name: PlayerName,
    pub description: &'static str,
    pub command: &'static str,
    pub installed: bool,
}

/// The player chosen for one playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub name: String,
    pub command: PathBuf,
    pub args: Vec<String>,
}

impl ResolvedPlayer {
    pub fn new(name: impl Into<String>, command: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            args,
        }
    }

    fn from_definition(definition: PlayerDefinition, command: PathBuf) -> Self {
        Self {
            name: definition.name.to_string(),
            command,
            args: definition.args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

pub struct PlayerResolver {
    locator: Arc<dyn ExecutableLocator>,
}

impl PlayerResolver {
    pub fn new(locator: Arc<dyn ExecutableLocator>) -> Self {
        Self { locator }
    }

    /// Resolver probing the process `PATH`.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemPathLocator::from_env()))
    }

    /// Pick the player for one playback.
    ///
    /// An explicit name must be registered and installed. Without one, the
    /// first installed player in preference order wins.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ResolvedPlayer, PlayerError> {
        if let Some(requested) = explicit {
            let name: PlayerName = requested.parse()?;
            let definition = name.definition();
            let command = self
                .locator
                .locate(definition.command)
                .ok_or(PlayerError::PlayerNotInstalled(name))?;

            tracing::debug!(player = %name, command = %command.display(), "Using requested player");
            return Ok(ResolvedPlayer::from_definition(definition, command));
        }

        for definition in player_definitions() {
            match self.locator.locate(definition.command) {
                Some(command) => {
                    tracing::debug!(
                        player = %definition.name,
                        command = %command.display(),
                        "Selected first installed player"
                    );
                    return Ok(ResolvedPlayer::from_definition(definition, command));
                }
                None => {
                    tracing::debug!(player = %definition.name, "Player not installed, trying next");
                }
            }
        }

        Err(PlayerError::NoPlayerAvailable)
    }

    /// Installation status of every registered player, in preference order.
    pub fn list_availability(&self) -> Vec<AvailablePlayer> {
        player_definitions()
            .map(|definition| AvailablePlayer {
                name: definition.name,
                description: definition.description,
                command: definition.command,
                installed: self.locator.locate(definition.command).is_some(),
            })
            .collect()
    }
}
