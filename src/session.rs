use log::debug;

/// Points awarded per collected fragment.
pub const FRAGMENT_SCORE: u32 = 100;
/// Fragments placed in a standard round.
pub const DEFAULT_TOTAL_FRAGMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// State of a single round of play: phase, score, clock and fragments.
/// Every transition method returns whether it applied; a transition that
/// doesn't make sense from the current phase leaves the session untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    score: u32,
    time: f64,
    fragments: usize,
    total_fragments: usize,
    pub player_name: String,
}

impl GameSession {
    pub fn new(total_fragments: usize) -> Self {
        GameSession {
            phase: Phase::Idle,
            score: 0,
            time: 0.0,
            fragments: 0,
            total_fragments,
            player_name: String::new(),
        }
    }

    /// Starts a fresh round from any phase, clearing score, clock and fragments.
    pub fn start(&mut self) {
        self.phase = Phase::Playing;
        self.score = 0;
        self.time = 0.0;
        self.fragments = 0;
    }

    pub fn pause(&mut self) -> bool {
        self.transition(Phase::Playing, Phase::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.transition(Phase::Paused, Phase::Playing)
    }

    pub fn end(&mut self) -> bool {
        match self.phase {
            Phase::Playing | Phase::Paused => {
                self.phase = Phase::GameOver;
                true
            },
            _ => false,
        }
    }

    pub fn collect_fragment(&mut self) -> bool {
        if self.phase != Phase::Playing || self.fragments >= self.total_fragments {
            debug!("Ignoring fragment pickup in phase {:?} ({}/{})", self.phase, self.fragments, self.total_fragments);
            return false;
        }
        self.fragments += 1;
        self.score += FRAGMENT_SCORE;
        true
    }

    /// Sets the elapsed clock, in seconds.
    pub fn update_time(&mut self, seconds: f64) -> bool {
        if !matches!(self.phase, Phase::Playing | Phase::Paused) || !seconds.is_finite() || seconds < 0.0 {
            return false;
        }
        self.time = seconds;
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn total_fragments(&self) -> usize {
        self.total_fragments
    }

    pub fn all_fragments_collected(&self) -> bool {
        self.fragments >= self.total_fragments
    }

    fn transition(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase != from {
            debug!("Ignoring {:?} -> {:?} transition from phase {:?}", from, to, self.phase);
            return false;
        }
        self.phase = to;
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(DEFAULT_TOTAL_FRAGMENTS)
    }
}
