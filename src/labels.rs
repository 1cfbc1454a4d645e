use crate::data::model::Stat;

// ---------------------------------------------------------------------------
// Language – which label set the front end shows
// ---------------------------------------------------------------------------
// The upstream dashboards existed twice, once with English labels and
// once with Portuguese ones, over the same columns. Here that is a
// runtime toggle; the dataset itself is language neutral.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &EN,
            Language::Portuguese => &PT,
        }
    }

    /// Native name shown in the language toggle.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
        }
    }
}

// ---------------------------------------------------------------------------
// Labels – one complete set of UI strings and column display names
// ---------------------------------------------------------------------------

pub struct Labels {
    // Navigation
    pub nav_heading: &'static str,
    pub nav_about: &'static str,
    pub nav_analysis: &'static str,
    pub nav_table: &'static str,
    pub nav_compare: &'static str,

    // Top bar and file handling
    pub menu_file: &'static str,
    pub menu_open: &'static str,
    pub menu_load_url: &'static str,
    pub open_dialog_title: &'static str,
    pub url_window_title: &'static str,
    pub fetch_button: &'static str,
    pub counts_loaded: &'static str,
    pub counts_visible: &'static str,

    // Filter panel
    pub filters_heading: &'static str,
    pub select_league: &'static str,
    pub select_season: &'static str,
    pub select_team: &'static str,
    pub select_player: &'static str,
    pub age_min: &'static str,
    pub age_max: &'static str,
    pub all_option: &'static str,
    pub clear_filters: &'static str,

    // About page
    pub about_title: &'static str,
    pub about_body: &'static str,
    pub dataset_link_text: &'static str,

    // Analysis page
    pub axis_offensive: &'static str,
    pub axis_defensive: &'static str,
    pub legend_selected: &'static str,
    pub legend_other: &'static str,
    pub metrics_help: &'static str,

    // Table page
    pub war_help: &'static str,

    // Compare page
    pub first_player: &'static str,
    pub second_player: &'static str,
    pub metrics_to_compare: &'static str,
    pub pick_two_hint: &'static str,

    // Shared states
    pub no_data: &'static str,
    pub loading: &'static str,

    // Identity column display names
    pub col_player: &'static str,
    pub col_nationality: &'static str,
    pub col_age: &'static str,
    pub col_birth: &'static str,
    pub col_team: &'static str,
    pub col_position: &'static str,
    pub col_league: &'static str,
    pub col_season: &'static str,

    // Metric column display names, in `Stat::ALL` order.
    stat_names: [&'static str; 14],
}

impl Labels {
    /// Display name of a numeric metric column.
    pub fn stat(&self, stat: Stat) -> &'static str {
        self.stat_names[stat as usize]
    }
}

pub static EN: Labels = Labels {
    nav_heading: "Navigation",
    nav_about: "About",
    nav_analysis: "General Analysis",
    nav_table: "Table",
    nav_compare: "Player Comparison",

    menu_file: "File",
    menu_open: "Open…",
    menu_load_url: "Load from URL…",
    open_dialog_title: "Open player data",
    url_window_title: "Load from URL",
    fetch_button: "Fetch",
    counts_loaded: "loaded",
    counts_visible: "visible",

    filters_heading: "Filters",
    select_league: "Select a League",
    select_season: "Select a Season",
    select_team: "Select a Team",
    select_player: "Select a Player",
    age_min: "Min age",
    age_max: "Max age",
    all_option: "All",
    clear_filters: "Clear filters",

    about_title: "CRAQUE Project: Calculating Athlete Performance",
    about_body: "Welcome to the CRAQUE (Calculating Athlete Performance in Quality and \
                 Statistics) project!\n\n\
                 Inspired by FiveThirtyEight's RAPTOR model, CRAQUE leverages detailed \
                 statistics and algorithms to evaluate each player's unique contribution \
                 on the field and quantify wins above a replacement player, adjusted for \
                 playing time.\n\n\
                 Use the navigation menu on the left to explore the graphical analysis, \
                 view the full statistics table, or compare specific players.",
    dataset_link_text: "CRAQUE dataset on GitHub",

    axis_offensive: "CRAQUE Offensive",
    axis_defensive: "CRAQUE Defensive",
    legend_selected: "Selected",
    legend_other: "Other",
    metrics_help: "CRAQUE Offensive measures the player's offensive contribution to the \
                   team, CRAQUE Defensive the defensive one. CRAQUE Total is the sum of \
                   both.",

    war_help: "WAR (Wins Above Replacement) quantifies the number of additional wins a \
               player contributes to their team compared to a replacement-level player, \
               adjusted for playing time.",

    first_player: "Select First Player",
    second_player: "Select Second Player",
    metrics_to_compare: "Select Metrics to Compare",
    pick_two_hint: "Pick two players to compare.",

    no_data: "No data available.",
    loading: "Loading…",

    col_player: "Player",
    col_nationality: "Nationality",
    col_age: "Age",
    col_birth: "Birth Date",
    col_team: "Team",
    col_position: "Position",
    col_league: "League",
    col_season: "Season",

    stat_names: [
        "Matches Played",
        "Minutes Played",
        "Goals",
        "Assists",
        "Goal-Creating Actions",
        "Pass Completion %",
        "Tackles Won",
        "Interceptions",
        "Yellow Cards",
        "Aerial Duels Won %",
        "CRAQUE Offensive",
        "CRAQUE Defensive",
        "CRAQUE Total",
        "WAR",
    ],
};

pub static PT: Labels = Labels {
    nav_heading: "Navegação",
    nav_about: "Sobre",
    nav_analysis: "Análise Geral",
    nav_table: "Tabela",
    nav_compare: "Comparação de Jogadores",

    menu_file: "Arquivo",
    menu_open: "Abrir…",
    menu_load_url: "Carregar de URL…",
    open_dialog_title: "Abrir dados de jogadores",
    url_window_title: "Carregar de URL",
    fetch_button: "Baixar",
    counts_loaded: "carregados",
    counts_visible: "visíveis",

    filters_heading: "Filtros",
    select_league: "Selecione um Campeonato",
    select_season: "Selecione um Ano",
    select_team: "Selecione um Clube",
    select_player: "Selecione um Jogador",
    age_min: "Idade mínima",
    age_max: "Idade máxima",
    all_option: "Todos",
    clear_filters: "Limpar filtros",

    about_title: "CRAQUE: Cálculo de Rendimentos de Atletas em Qualidade e Estatísticas",
    about_body: "Bem-vindo ao projeto CRAQUE (Cálculo de Rendimentos de Atletas em \
                 Qualidade e Estatísticas)!\n\n\
                 Inspirado no modelo RAPTOR do FiveThirtyEight, o CRAQUE usa estatísticas \
                 detalhadas e algoritmos para avaliar a contribuição única de cada jogador \
                 em campo e quantificar vitórias acima de um jogador de reposição, \
                 ajustadas pelo tempo de jogo.\n\n\
                 Use o menu à esquerda para explorar a análise gráfica, ver a tabela \
                 completa de jogadores ou comparar jogadores específicos.",
    dataset_link_text: "Conjunto de dados CRAQUE no GitHub",

    axis_offensive: "CRAQUE Ofensivo",
    axis_defensive: "CRAQUE Defensivo",
    legend_selected: "Selecionado",
    legend_other: "Outros",
    metrics_help: "CRAQUE Ofensivo mede a contribuição ofensiva do jogador para o clube, \
                   CRAQUE Defensivo a defensiva. CRAQUE Total é a soma das duas.",

    war_help: "WAR (Wins Above Replacement) quantifica o número de vitórias adicionais \
               que um jogador agrega ao clube em comparação com um jogador de nível de \
               reposição, ajustado pelo tempo de jogo.",

    first_player: "Selecione o Primeiro Jogador",
    second_player: "Selecione o Segundo Jogador",
    metrics_to_compare: "Selecione as Métricas para Comparar",
    pick_two_hint: "Escolha dois jogadores para comparar.",

    no_data: "Não há dados disponíveis.",
    loading: "Carregando…",

    col_player: "Jogador",
    col_nationality: "Nacionalidade",
    col_age: "Idade",
    col_birth: "Nascimento",
    col_team: "Clube",
    col_position: "Posição",
    col_league: "Campeonato",
    col_season: "Ano",

    stat_names: [
        "Jogos",
        "Minutos",
        "Gols",
        "Assistências",
        "Ações de Criação de Gols",
        "Passes Completos %",
        "Desarmes",
        "Interceptações",
        "Cartões Amarelos",
        "Duelos Aéreos Ganhos %",
        "CRAQUE Ofensivo",
        "CRAQUE Defensivo",
        "CRAQUE Total",
        "WAR",
    ],
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stat_has_a_name_in_both_languages() {
        for stat in Stat::ALL {
            assert!(!EN.stat(stat).is_empty());
            assert!(!PT.stat(stat).is_empty());
        }
    }

    // `stat_names` is indexed by discriminant, so the array order must
    // follow the enum declaration.
    #[test]
    fn stat_names_line_up_with_the_enum() {
        assert_eq!(EN.stat(Stat::Matches), "Matches Played");
        assert_eq!(EN.stat(Stat::War), "WAR");
        assert_eq!(PT.stat(Stat::Goals), "Gols");
        assert_eq!(PT.stat(Stat::Total), "CRAQUE Total");
    }

    #[test]
    fn language_toggle_swaps_label_sets() {
        assert_eq!(Language::English.labels().all_option, "All");
        assert_eq!(Language::Portuguese.labels().all_option, "Todos");
        assert_eq!(Language::default(), Language::English);
    }
}
