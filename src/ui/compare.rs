use eframe::egui::{ComboBox, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{self, FilterSelection};
use crate::data::model::{PlayerRecord, Stat};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Player comparison page
// ---------------------------------------------------------------------------

/// Render the side-by-side player comparison.
pub fn compare_page(ui: &mut Ui, state: &mut AppState) {
    let labels = state.language.labels();

    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(labels.no_data);
        });
        return;
    };

    ui.add_space(8.0);
    ui.heading(labels.nav_compare);
    ui.add_space(8.0);

    // Candidates honour the league and season filters only; keeping the
    // team or player constraint would defeat a cross-team comparison.
    let scope = FilterSelection {
        league: state.selection.league.clone(),
        season: state.selection.season.clone(),
        ..FilterSelection::default()
    };
    let candidates = filter::player_options(dataset, &scope);

    ui.horizontal(|ui: &mut Ui| {
        player_combo(
            ui,
            "compare_first",
            labels.first_player,
            &mut state.compare.first,
            &candidates,
        );
        ui.add_space(16.0);
        player_combo(
            ui,
            "compare_second",
            labels.second_player,
            &mut state.compare.second,
            &candidates,
        );
    });

    ui.add_space(8.0);
    ui.strong(labels.metrics_to_compare);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for stat in Stat::ALL {
            let mut checked = state.compare.stats.contains(&stat);
            if ui.checkbox(&mut checked, labels.stat(stat)).changed() {
                if checked {
                    state.compare.stats.insert(stat);
                } else {
                    state.compare.stats.remove(&stat);
                }
            }
        }
    });

    let (Some(first), Some(second)) = (&state.compare.first, &state.compare.second) else {
        ui.add_space(12.0);
        ui.label(labels.pick_two_hint);
        return;
    };

    let chosen: Vec<Stat> = Stat::ALL
        .into_iter()
        .filter(|stat| state.compare.stats.contains(stat))
        .collect();

    // One row per record of either player inside the scope; a player can
    // contribute several rows across seasons or squads.
    let rows: Vec<&PlayerRecord> = dataset
        .records
        .iter()
        .filter(|r| {
            (r.player == *first || r.player == *second)
                && scope.league.as_deref().is_none_or(|v| r.league == v)
                && scope.season.as_deref().is_none_or(|v| r.season == v)
        })
        .collect();

    ui.add_space(12.0);
    TableBuilder::new(ui)
        .striped(true)
        .id_salt("compare_table")
        .columns(Column::auto().at_least(90.0), 3 + chosen.len())
        .header(24.0, |mut header| {
            for title in [labels.col_player, labels.col_team, labels.col_season] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
            for &stat in &chosen {
                header.col(|ui: &mut Ui| {
                    ui.strong(labels.stat(stat));
                });
            }
        })
        .body(|mut body| {
            for record in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.player);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.team);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.season);
                    });
                    for &stat in &chosen {
                        row.col(|ui: &mut Ui| {
                            ui.label(stat.value_text(record));
                        });
                    }
                });
            }
        });
}

/// A dropdown over player names with no "All" sentinel.
fn player_combo(
    ui: &mut Ui,
    id: &str,
    title: &str,
    current: &mut Option<String>,
    options: &[String],
) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(title);
        let selected_text = current.clone().unwrap_or_else(|| "–".to_string());
        ComboBox::from_id_salt(id)
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                for value in options {
                    if ui
                        .selectable_label(current.as_deref() == Some(value.as_str()), value)
                        .clicked()
                    {
                        *current = Some(value.clone());
                    }
                }
            });
    });
}
