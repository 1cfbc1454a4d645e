use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Stat;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Statistics table page
// ---------------------------------------------------------------------------

/// Render the full statistics table over the currently visible rows.
pub fn stats_table(ui: &mut Ui, state: &AppState) {
    let labels = state.language.labels();

    let dataset = match &state.dataset {
        Some(dataset) => dataset,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(labels.no_data);
            });
            return;
        }
    };

    ui.add_space(4.0);
    ui.label(labels.war_help);
    ui.add_space(4.0);

    let identity_headers = [
        labels.col_player,
        labels.col_nationality,
        labels.col_age,
        labels.col_birth,
        labels.col_team,
        labels.col_position,
        labels.col_league,
        labels.col_season,
    ];
    let n_columns = identity_headers.len() + Stat::ALL.len();

    // The table scrolls vertically on its own; wide datasets also need a
    // horizontal scroll around it.
    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .id_salt("stats_table")
            .column(Column::auto().at_least(120.0))
            .columns(Column::auto().at_least(60.0), n_columns - 1)
            .header(24.0, |mut header| {
                for title in identity_headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
                for stat in Stat::ALL {
                    header.col(|ui: &mut Ui| {
                        ui.strong(labels.stat(stat));
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, state.visible.len(), |mut row| {
                    let record = &dataset.records[state.visible[row.index()]];
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.player);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.nationality);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(record.age.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(record.birth_year.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.team);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.position);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.league);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.season);
                    });
                    for stat in Stat::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.label(stat.value_text(record));
                        });
                    }
                });
            });
    });
}
