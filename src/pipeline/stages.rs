use std::fmt;

/// Upstream capability a search passes through, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Geospatial,
    Search,
    Synthesis,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Geospatial, Stage::Search, Stage::Synthesis];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Geospatial => "Maps lookup",
            Stage::Search => "Web search",
            Stage::Synthesis => "AI synthesis",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

/// Diagnostic display state for the three stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageBoard {
    statuses: [StageStatus; 3],
}

impl StageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, stage: Stage) -> StageStatus {
        self.statuses[index(stage)]
    }

    /// A search is in flight: every stage is working
    pub fn begin(&mut self) {
        self.statuses = [StageStatus::Processing; 3];
    }

    pub fn succeed(&mut self) {
        self.statuses = [StageStatus::Success; 3];
    }

    /// Mark `stage` failed. Earlier stages completed; later ones keep their state.
    pub fn fail(&mut self, stage: Stage) {
        for s in Stage::ALL {
            if s < stage {
                self.statuses[index(s)] = StageStatus::Success;
            }
        }
        self.statuses[index(stage)] = StageStatus::Error;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, StageStatus)> + '_ {
        Stage::ALL.into_iter().map(|s| (s, self.status(s)))
    }
}

fn index(stage: Stage) -> usize {
    match stage {
        Stage::Geospatial => 0,
        Stage::Search => 1,
        Stage::Synthesis => 2,
    }
}
