pub mod engine;
pub mod error;
pub mod registry;
pub mod resolver;

pub use engine::{PlaybackEngine, PlaybackResult};
pub use error::PlayerError;
pub use registry::{player_definitions, PlayerDefinition, PlayerName};
pub use resolver::{
    AvailablePlayer, ExecutableLocator, PlayerResolver, ResolvedPlayer, SystemPathLocator,
};
