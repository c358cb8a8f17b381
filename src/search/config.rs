//! Search configuration

/// Default search depth in plies
pub const DEPTH_LIMIT: u8 = 12;

/// How the root picks among moves that share the best value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the first move that reached the best value
    #[default]
    FirstFound,
    /// Pick uniformly among all root moves with the best value
    Random,
}

/// Tunables for the alpha-beta searcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies below the root before the static evaluation takes over
    pub depth_limit: u8,
    pub tie_break: TieBreak,
    /// Seed for `TieBreak::Random`. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Default config with a different depth limit
    #[must_use]
    pub fn with_depth(depth_limit: u8) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEPTH_LIMIT,
            tie_break: TieBreak::FirstFound,
            seed: None,
        }
    }
}
