/// Category sentinel meaning "no category restriction".
pub const CATEGORY_ALL: &str = "All";

/// Transient filter input. Lives only for the duration of one filter call;
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// `None` (or the `"All"` sentinel) applies no category restriction.
    pub category: Option<String>,
    /// `None` applies no price restriction.
    pub price_max: Option<f64>,
}

impl FilterCriteria {
    pub fn new(category: Option<String>, price_max: Option<f64>) -> Self {
        Self {
            category,
            price_max,
        }
    }

    /// Criteria that restrict nothing.
    pub fn unrestricted() -> Self {
        Self::default()
    }
}

/// Load state of the catalog. `Loaded` and `Failed` both transition back to
/// `Loading` on the next fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadPhase::Idle => write!(f, "idle"),
            LoadPhase::Loading => write!(f, "loading"),
            LoadPhase::Loaded => write!(f, "loaded"),
            LoadPhase::Failed => write!(f, "failed"),
        }
    }
}
