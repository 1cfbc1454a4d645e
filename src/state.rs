use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{
    self, FilterSelection, HighlightAssignment, player_options, team_options,
};
use crate::data::model::{PlayerDataset, Stat};
use crate::labels::Language;

/// Dataset published by the upstream CRAQUE project, prefilled in the
/// URL window so a single click loads the real numbers.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/mariopenna/CRAQUE/main/CRAQUE.csv";

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    About,
    Analysis,
    Table,
    Compare,
}

/// Selections of the comparison page, kept apart from the shared filters
/// so switching pages does not disturb them.
pub struct CompareState {
    pub first: Option<String>,
    pub second: Option<String>,
    pub stats: BTreeSet<Stat>,
}

impl Default for CompareState {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            stats: BTreeSet::from([Stat::Offensive, Stat::Defensive, Stat::Total, Stat::War]),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user loads a file or URL).
    pub dataset: Option<PlayerDataset>,

    /// Current filter selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible: Vec<usize>,

    /// Highlight labels for `visible`, same order (cached).
    pub highlight: HighlightAssignment,

    /// Per-team colours for the unfocused scatter.
    pub color_map: Option<ColorMap>,

    pub page: Page,
    pub language: Language,
    pub compare: CompareState,

    /// URL field of the "Load from URL" window.
    pub source_url: String,
    pub show_url_window: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            visible: Vec::new(),
            highlight: HighlightAssignment::default(),
            color_map: None,
            page: Page::default(),
            language: Language::default(),
            compare: CompareState::default(),
            source_url: DEFAULT_DATASET_URL.to_string(),
            show_url_window: false,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: PlayerDataset) {
        self.selection = FilterSelection::unconstrained(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.teams));
        self.compare = CompareState::default();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Recompute `visible` and `highlight` after a selection change.
    ///
    /// A league or season change can strand the narrower team and player
    /// selections, so those are dropped first when their value is no
    /// longer on offer.
    pub fn refilter(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.visible.clear();
            self.highlight = HighlightAssignment::default();
            return;
        };

        if let Some(team) = &self.selection.team {
            if !team_options(dataset, &self.selection).contains(team) {
                self.selection.team = None;
            }
        }
        if let Some(player) = &self.selection.player {
            if !player_options(dataset, &self.selection).contains(player) {
                self.selection.player = None;
            }
        }
        if let Some((lo, hi)) = dataset.age_bounds {
            self.selection.age_min.get_or_insert(lo);
            self.selection.age_max.get_or_insert(hi);
        }

        match filter::apply_filters(dataset, &self.selection) {
            Ok(visible) => {
                self.highlight = filter::compute_highlight(dataset, &visible, &self.selection);
                self.visible = visible;
            }
            Err(err) => {
                log::warn!("rejected filter selection: {err}");
                self.visible.clear();
                self.highlight = HighlightAssignment::default();
            }
        }
    }

    /// Reset every filter to its widest setting.
    pub fn clear_filters(&mut self) {
        self.selection = match &self.dataset {
            Some(dataset) => FilterSelection::unconstrained(dataset),
            None => FilterSelection::default(),
        };
        self.refilter();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PlayerRecord;

    fn record(player: &str, team: &str, league: &str, age: u8) -> PlayerRecord {
        PlayerRecord {
            player: player.to_string(),
            nationality: "br BRA".to_string(),
            age,
            birth_year: 2000,
            team: team.to_string(),
            position: "MF".to_string(),
            league: league.to_string(),
            season: "2023".to_string(),
            matches: 30,
            minutes: 2700,
            goals: 5,
            assists: 3,
            goal_creating_actions: 12,
            pass_completion_pct: 81.5,
            tackles_won: 40,
            interceptions: 25,
            yellow_cards: 4,
            aerial_duels_won_pct: 55.0,
            offensive: 1.2,
            defensive: -0.3,
            total: 0.9,
            war: 2.1,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(PlayerDataset::from_records(vec![
            record("Alice", "Reds", "Premier", 24),
            record("Bruno", "Blues", "Premier", 29),
            record("Carla", "Verdes", "Brasileirao", 21),
        ]));
        state
    }

    #[test]
    fn set_dataset_shows_everything() {
        let state = loaded_state();
        assert_eq!(state.visible, vec![0, 1, 2]);
        assert_eq!(state.highlight, HighlightAssignment::Uniform);
        assert_eq!(state.selection.age_min, Some(21));
        assert_eq!(state.selection.age_max, Some(29));
        assert!(state.color_map.is_some());
    }

    #[test]
    fn league_change_drops_stranded_team_and_player() {
        let mut state = loaded_state();
        state.selection.team = Some("Reds".to_string());
        state.selection.player = Some("Alice".to_string());
        state.refilter();
        assert_eq!(state.visible, vec![0]);

        state.selection.league = Some("Brasileirao".to_string());
        state.refilter();
        assert_eq!(state.selection.team, None);
        assert_eq!(state.selection.player, None);
        assert_eq!(state.visible, vec![2]);
    }

    #[test]
    fn clear_filters_restores_full_view() {
        let mut state = loaded_state();
        state.selection.league = Some("Premier".to_string());
        state.selection.age_min = Some(25);
        state.refilter();
        assert_eq!(state.visible, vec![1]);

        state.clear_filters();
        assert_eq!(state.visible, vec![0, 1, 2]);
        assert_eq!(state.selection, FilterSelection::unconstrained(
            state.dataset.as_ref().unwrap(),
        ));
    }
}
