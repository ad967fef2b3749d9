use std::sync::Arc;

use crate::domain::player::{AvailablePlayer, PlayerResolver};

pub struct PlayersController {
    resolver: Arc<PlayerResolver>,
}

impl PlayersController {
    pub fn new(resolver: Arc<PlayerResolver>) -> Self {
        Self { resolver }
    }

    /// `--players`: every supported player and whether it is installed
    pub fn list(&self) -> String {
        render_players(&self.resolver.list_availability())
    }
}

fn render_players(players: &[AvailablePlayer]) -> String {
    let mut out = String::from("Players on your system");
    for player in players {
        let status = if player.installed { "installed" } else { "missing" };
        out.push_str(&format!(
            "\n  {} ({}) - {}",
            player.name, player.description, status
        ));
    }
    out
}
