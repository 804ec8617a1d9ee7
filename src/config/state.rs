// src/config/state.rs
use std::path::PathBuf;

use super::consts::DEFAULT_DATA_DIR;
use super::options::PipelineOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Current picks on the lookup tabs
    pub selected_symptom: Option<String>,
    pub selected_disease: Option<String>,

    /// Free-text narrowing of the pick lists
    pub symptom_filter: String,
    pub disease_filter: String,

    /// Symptom tab -> show the comma-joined disease list under the table
    pub show_symptom_details: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_symptom: None,
            selected_disease: None,
            symptom_filter: s!(),
            disease_filter: s!(),
            show_symptom_details: false,
            window_w: 1100,
            window_h: 720,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub pipeline: PipelineOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::for_dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl AppState {
    pub fn for_dir(dir: PathBuf) -> Self {
        Self {
            pipeline: PipelineOptions::default().with_out_dir(dir.clone()),
            data_dir: dir,
            gui: GuiState::default(),
        }
    }
}
