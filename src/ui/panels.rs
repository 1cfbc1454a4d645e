use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::{player_options, team_options};
use crate::labels::Language;
use crate::state::{AppState, DEFAULT_DATASET_URL, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel: page navigation on top, filters below.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let labels = state.language.labels();

    ui.add_space(4.0);
    ui.strong(labels.nav_heading);
    ui.selectable_value(&mut state.page, Page::About, labels.nav_about);
    ui.selectable_value(&mut state.page, Page::Analysis, labels.nav_analysis);
    ui.selectable_value(&mut state.page, Page::Table, labels.nav_table);
    ui.selectable_value(&mut state.page, Page::Compare, labels.nav_compare);
    ui.add_space(4.0);

    ui.heading(labels.filters_heading);
    ui.separator();

    // Clone the option lists so we can mutate the selection inside the
    // widget closures. Team and player options track the wider filters.
    let (leagues, seasons, teams, players, age_bounds) = match &state.dataset {
        Some(dataset) => (
            dataset.leagues.clone(),
            dataset.seasons.clone(),
            team_options(dataset, &state.selection),
            player_options(dataset, &state.selection),
            dataset.age_bounds,
        ),
        None => {
            ui.label(labels.no_data);
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            option_combo(
                ui,
                "filter_league",
                labels.select_league,
                labels.all_option,
                &mut state.selection.league,
                &leagues,
            );
            option_combo(
                ui,
                "filter_season",
                labels.select_season,
                labels.all_option,
                &mut state.selection.season,
                &seasons,
            );
            option_combo(
                ui,
                "filter_team",
                labels.select_team,
                labels.all_option,
                &mut state.selection.team,
                &teams,
            );
            option_combo(
                ui,
                "filter_player",
                labels.select_player,
                labels.all_option,
                &mut state.selection.player,
                &players,
            );

            if let Some((lo, hi)) = age_bounds {
                let min = state.selection.age_min.get_or_insert(lo);
                ui.add(Slider::new(min, lo..=hi).text(labels.age_min));
                let max = state.selection.age_max.get_or_insert(hi);
                ui.add(Slider::new(max, lo..=hi).text(labels.age_max));
            }

            ui.add_space(8.0);
            if ui.button(labels.clear_filters).clicked() {
                state.clear_filters();
            }
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

/// A dropdown over `options` where `None` is the "All" sentinel.
fn option_combo(
    ui: &mut Ui,
    id: &str,
    title: &str,
    all_label: &str,
    current: &mut Option<String>,
    options: &[String],
) {
    ui.strong(title);
    let selected_text = current.clone().unwrap_or_else(|| all_label.to_string());
    ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), all_label).clicked() {
                *current = None;
            }
            for value in options {
                if ui
                    .selectable_label(current.as_deref() == Some(value.as_str()), value)
                    .clicked()
                {
                    *current = Some(value.clone());
                }
            }
        });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let labels = state.language.labels();

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(labels.menu_file, |ui: &mut Ui| {
            if ui.button(labels.menu_open).clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button(labels.menu_load_url).clicked() {
                state.show_url_window = true;
                ui.close_menu();
            }
        });

        ui.separator();

        for language in [Language::English, Language::Portuguese] {
            if ui
                .selectable_label(state.language == language, language.native_name())
                .clicked()
            {
                state.language = language;
            }
        }

        if let Some(dataset) = &state.dataset {
            ui.separator();
            ui.label(format!(
                "{} {}, {} {}",
                dataset.len(),
                labels.counts_loaded,
                state.visible.len(),
                labels.counts_visible
            ));
        }

        if state.loading {
            ui.separator();
            ui.spinner();
            ui.label(labels.loading);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

/// Render the landing page text.
pub fn about_page(ui: &mut Ui, state: &AppState) {
    let labels = state.language.labels();

    ui.add_space(8.0);
    ui.heading(labels.about_title);
    ui.add_space(8.0);
    ui.label(labels.about_body);
    ui.add_space(12.0);
    ui.hyperlink_to(labels.dataset_link_text, DEFAULT_DATASET_URL);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title(state.language.labels().open_dialog_title)
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_path(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} player seasons from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
