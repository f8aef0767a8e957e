use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct QTPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Pick fences by their route impact instead of racing the shortest path.
    #[arg(short, long, default_value_t = false)]
    pub builder: bool,

    /// Reach for a fence roughly one turn in this many; 0 never places.
    #[arg(short, long, default_value_t = 3)]
    pub fence_odds: u32,

    /// Resampling budget when hunting for a non-stranding fence.
    #[arg(short, long, default_value_t = 5)]
    pub attempts: usize,

    /// Fixes the bot's randomness so sessions can be replayed.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl QTPServerOptions {
    pub fn agent_config(&self) -> AgentConfig {
        let mut config = AgentConfig::default();

        if self.builder {
            config.selected = WhichPolicy::Builder;
        }
        config.fence_odds = self.fence_odds;
        config.place_attempts = self.attempts;
        config.seed = self.seed;

        config
    }
}
