use std::collections::BTreeSet;

use thiserror::Error;

use super::model::{PlayerDataset, PlayerRecord};

// ---------------------------------------------------------------------------
// FilterSelection – the user's current constraints
// ---------------------------------------------------------------------------

/// One user selection. Each `None` on a string field is the "All"
/// sentinel imposing no constraint; the age bounds form a closed
/// interval. The selection is plain data handed in on every UI event –
/// the engine keeps no state between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub league: Option<String>,
    pub season: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
    pub age_min: Option<u8>,
    pub age_max: Option<u8>,
}

impl FilterSelection {
    /// A selection that keeps everything: no field constraints, age
    /// range spanning the dataset's observed bounds.
    pub fn unconstrained(dataset: &PlayerDataset) -> Self {
        let (age_min, age_max) = match dataset.age_bounds {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        };
        FilterSelection {
            age_min,
            age_max,
            ..FilterSelection::default()
        }
    }

    /// The focus key driving highlight assignment, chosen by priority
    /// player > team > league.
    pub fn focus(&self) -> Focus {
        if let Some(player) = &self.player {
            Focus::Player(player.clone())
        } else if let Some(team) = &self.team {
            Focus::Team(team.clone())
        } else if let Some(league) = &self.league {
            Focus::League(league.clone())
        } else {
            Focus::None
        }
    }
}

/// A selection malformed in a way the widgets cannot normally produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    /// Age bounds must accompany a non-empty dataset; the UI derives
    /// them from the observed min/max ages.
    #[error("age bounds are required to filter a non-empty dataset")]
    MissingAgeBounds,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass every active constraint, in
/// original row order.
///
/// All constraints are conjunctive equality/range predicates, so a
/// single pass is equivalent to applying them in any sequence. An
/// inverted age range (`age_min > age_max`) is an always-false
/// predicate and yields an empty result rather than an error.
pub fn apply_filters(
    dataset: &PlayerDataset,
    selection: &FilterSelection,
) -> Result<Vec<usize>, InvalidSelection> {
    let (age_min, age_max) = match (selection.age_min, selection.age_max) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ if dataset.is_empty() => return Ok(Vec::new()),
        _ => return Err(InvalidSelection::MissingAgeBounds),
    };

    Ok(dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.league.as_deref().is_none_or(|v| r.league == v)
                && selection.season.as_deref().is_none_or(|v| r.season == v)
                && selection.team.as_deref().is_none_or(|v| r.team == v)
                && selection.player.as_deref().is_none_or(|v| r.player == v)
                && (age_min..=age_max).contains(&r.age)
        })
        .map(|(i, _)| i)
        .collect())
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// The single field+value pair that drives highlight coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    None,
    Player(String),
    Team(String),
    League(String),
}

impl Focus {
    fn selects(&self, record: &PlayerRecord) -> bool {
        match self {
            Focus::None => false,
            Focus::Player(name) => record.player == *name,
            Focus::Team(name) => record.team == *name,
            Focus::League(name) => record.league == *name,
        }
    }
}

/// Highlight label of one row in a focused view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Other,
}

/// Highlight labels for a filtered view: `Uniform` when no focus field
/// is set and every row renders alike, otherwise one label per entry of
/// the filtered index list, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightAssignment {
    #[default]
    Uniform,
    PerRow(Vec<Highlight>),
}

/// Label each visible row `Selected` or `Other` against the selection's
/// focus key.
///
/// The labels are computed on the already-filtered rows: when the focus
/// field is also the constraint that pruned the rows, every survivor is
/// `Selected` and no `Other` rows remain.
pub fn compute_highlight(
    dataset: &PlayerDataset,
    visible: &[usize],
    selection: &FilterSelection,
) -> HighlightAssignment {
    let focus = selection.focus();
    if focus == Focus::None {
        return HighlightAssignment::Uniform;
    }
    HighlightAssignment::PerRow(
        visible
            .iter()
            .map(|&i| {
                if focus.selects(&dataset.records[i]) {
                    Highlight::Selected
                } else {
                    Highlight::Other
                }
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Dependent dropdown option lists
// ---------------------------------------------------------------------------

/// Teams present under the current league constraint, sorted. The team
/// dropdown is a view of the league-filtered dataset, not a fixed list.
pub fn team_options(dataset: &PlayerDataset, selection: &FilterSelection) -> Vec<String> {
    match selection.league.as_deref() {
        None => dataset.teams.clone(),
        Some(league) => distinct(dataset, |r| (r.league == league).then(|| r.team.clone())),
    }
}

/// Players present under the league + season + team constraints, sorted.
pub fn player_options(dataset: &PlayerDataset, selection: &FilterSelection) -> Vec<String> {
    distinct(dataset, |r| {
        let keep = selection.league.as_deref().is_none_or(|v| r.league == v)
            && selection.season.as_deref().is_none_or(|v| r.season == v)
            && selection.team.as_deref().is_none_or(|v| r.team == v);
        keep.then(|| r.player.clone())
    })
}

fn distinct(
    dataset: &PlayerDataset,
    pick: impl Fn(&PlayerRecord) -> Option<String>,
) -> Vec<String> {
    let values: BTreeSet<String> = dataset.records.iter().filter_map(|r| pick(r)).collect();
    values.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sample() -> PlayerDataset {
        PlayerDataset::from_records(vec![
            record("P1", "TeamA", "LeagueX", 20),
            record("P2", "TeamA", "LeagueX", 25),
            record("P3", "TeamB", "LeagueX", 30),
            record("P4", "TeamB", "LeagueY", 22),
            record("P5", "TeamA", "LeagueY", 28),
        ])
    }

    /// Full-range age bounds so only the explicit constraints bite.
    fn open_ages() -> FilterSelection {
        FilterSelection {
            age_min: Some(0),
            age_max: Some(u8::MAX),
            ..FilterSelection::default()
        }
    }

    fn players_of(dataset: &PlayerDataset, visible: &[usize]) -> Vec<String> {
        visible
            .iter()
            .map(|&i| dataset.records[i].player.clone())
            .collect()
    }

    fn identities(dataset: &PlayerDataset, visible: &[usize]) -> Vec<(String, String, String)> {
        visible
            .iter()
            .map(|&i| {
                let (p, t, s) = dataset.records[i].identity();
                (p.to_string(), t.to_string(), s.to_string())
            })
            .collect()
    }

    fn narrowed(dataset: &PlayerDataset, visible: &[usize]) -> PlayerDataset {
        PlayerDataset::from_records(
            visible
                .iter()
                .map(|&i| dataset.records[i].clone())
                .collect(),
        )
    }

    #[test]
    fn league_and_age_filters_combine() {
        let dataset = sample();
        let selection = FilterSelection {
            league: Some("LeagueX".to_string()),
            age_min: Some(18),
            age_max: Some(26),
            ..FilterSelection::default()
        };
        let visible = apply_filters(&dataset, &selection).unwrap();
        // P3 excluded by age, P4/P5 excluded by league.
        assert_eq!(players_of(&dataset, &visible), ["P1", "P2"]);
    }

    #[test]
    fn team_filter_keeps_source_order() {
        let dataset = sample();
        let selection = FilterSelection {
            team: Some("TeamA".to_string()),
            ..open_ages()
        };
        let visible = apply_filters(&dataset, &selection).unwrap();
        assert_eq!(visible, [0, 1, 4]);
        assert_eq!(players_of(&dataset, &visible), ["P1", "P2", "P5"]);
    }

    #[test]
    fn refiltering_survivors_changes_nothing() {
        let dataset = sample();
        let selection = FilterSelection {
            league: Some("LeagueX".to_string()),
            age_min: Some(18),
            age_max: Some(26),
            ..FilterSelection::default()
        };
        let first = apply_filters(&dataset, &selection).unwrap();
        let survivors = narrowed(&dataset, &first);
        let second = apply_filters(&survivors, &selection).unwrap();
        assert_eq!(second, (0..survivors.len()).collect::<Vec<_>>());
        assert_eq!(
            identities(&dataset, &first),
            identities(&survivors, &second)
        );
    }

    #[test]
    fn constraint_order_does_not_matter() {
        let dataset = sample();
        let league_only = FilterSelection {
            league: Some("LeagueX".to_string()),
            ..open_ages()
        };
        let age_only = FilterSelection {
            age_min: Some(18),
            age_max: Some(26),
            ..FilterSelection::default()
        };
        let combined = FilterSelection {
            league: Some("LeagueX".to_string()),
            age_min: Some(18),
            age_max: Some(26),
            ..FilterSelection::default()
        };

        let league_first = {
            let step = narrowed(&dataset, &apply_filters(&dataset, &league_only).unwrap());
            let visible = apply_filters(&step, &age_only).unwrap();
            identities(&step, &visible)
        };
        let age_first = {
            let step = narrowed(&dataset, &apply_filters(&dataset, &age_only).unwrap());
            let visible = apply_filters(&step, &league_only).unwrap();
            identities(&step, &visible)
        };
        let single_pass = identities(&dataset, &apply_filters(&dataset, &combined).unwrap());

        assert_eq!(league_first, single_pass);
        assert_eq!(age_first, single_pass);
    }

    #[test]
    fn extra_constraint_never_grows_result() {
        let dataset = sample();
        let base = FilterSelection {
            league: Some("LeagueX".to_string()),
            ..open_ages()
        };
        let narrower = FilterSelection {
            team: Some("TeamA".to_string()),
            ..base.clone()
        };
        let base_count = apply_filters(&dataset, &base).unwrap().len();
        let narrow_count = apply_filters(&dataset, &narrower).unwrap().len();
        assert!(narrow_count <= base_count);
    }

    #[test]
    fn inverted_age_range_is_empty_not_error() {
        let dataset = sample();
        let selection = FilterSelection {
            age_min: Some(30),
            age_max: Some(20),
            ..FilterSelection::default()
        };
        assert_eq!(apply_filters(&dataset, &selection).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn age_bounds_required_for_nonempty_dataset() {
        let dataset = sample();
        let selection = FilterSelection::default();
        assert_eq!(
            apply_filters(&dataset, &selection),
            Err(InvalidSelection::MissingAgeBounds)
        );

        let empty = PlayerDataset::from_records(Vec::new());
        assert_eq!(apply_filters(&empty, &selection).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn player_focus_outranks_team_focus() {
        let dataset = PlayerDataset::from_records(vec![
            record("Alice", "Reds", "Premier", 25),
            record("Bob", "Reds", "Premier", 27),
            record("Carol", "Reds", "Premier", 24),
        ]);
        // Rows filtered by team only, then highlighted with both player
        // and team set: the player focus must win.
        let team_filter = FilterSelection {
            team: Some("Reds".to_string()),
            ..open_ages()
        };
        let visible = apply_filters(&dataset, &team_filter).unwrap();
        let selection = FilterSelection {
            player: Some("Alice".to_string()),
            team: Some("Reds".to_string()),
            ..open_ages()
        };
        assert_eq!(
            compute_highlight(&dataset, &visible, &selection),
            HighlightAssignment::PerRow(vec![
                Highlight::Selected,
                Highlight::Other,
                Highlight::Other,
            ])
        );
    }

    #[test]
    fn highlight_runs_on_survivors_only() {
        let dataset = sample();
        let selection = FilterSelection {
            team: Some("TeamA".to_string()),
            ..open_ages()
        };
        let visible = apply_filters(&dataset, &selection).unwrap();
        assert_eq!(players_of(&dataset, &visible), ["P1", "P2", "P5"]);
        // The team constraint already removed every non-TeamA row, so
        // all survivors are Selected and no Other rows remain.
        assert_eq!(
            compute_highlight(&dataset, &visible, &selection),
            HighlightAssignment::PerRow(vec![Highlight::Selected; 3])
        );
    }

    #[test]
    fn all_sentinel_gives_uniform_highlight() {
        let dataset = sample();
        let selection = open_ages();
        let visible = apply_filters(&dataset, &selection).unwrap();
        assert_eq!(visible.len(), dataset.len());
        assert_eq!(
            compute_highlight(&dataset, &visible, &selection),
            HighlightAssignment::Uniform
        );
    }

    #[test]
    fn focus_picks_highest_priority_field() {
        let mut selection = FilterSelection {
            league: Some("L".to_string()),
            team: Some("T".to_string()),
            player: Some("P".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(selection.focus(), Focus::Player("P".to_string()));
        selection.player = None;
        assert_eq!(selection.focus(), Focus::Team("T".to_string()));
        selection.team = None;
        assert_eq!(selection.focus(), Focus::League("L".to_string()));
        selection.league = None;
        assert_eq!(selection.focus(), Focus::None);
    }

    #[test]
    fn team_options_track_league() {
        let dataset = PlayerDataset::from_records(vec![
            record("A1", "Alpha", "North", 21),
            record("A2", "Beta", "North", 23),
            record("B1", "Gamma", "South", 25),
        ]);
        let all = FilterSelection::default();
        assert_eq!(team_options(&dataset, &all), ["Alpha", "Beta", "Gamma"]);

        let north = FilterSelection {
            league: Some("North".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(team_options(&dataset, &north), ["Alpha", "Beta"]);
    }

    #[test]
    fn player_options_track_team_and_league() {
        let dataset = PlayerDataset::from_records(vec![
            record("A1", "Alpha", "North", 21),
            record("A2", "Beta", "North", 23),
            record("B1", "Gamma", "South", 25),
        ]);
        let by_team = FilterSelection {
            team: Some("Alpha".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(player_options(&dataset, &by_team), ["A1"]);

        let by_league = FilterSelection {
            league: Some("South".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(player_options(&dataset, &by_league), ["B1"]);
    }
}
