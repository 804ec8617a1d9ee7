// src/config/consts.rs

// Source
pub const SOURCE_URL: &str =
    "https://people.dbmi.columbia.edu/~friedma/Projects/DiseaseSymptomKB/index.html";
pub const USER_AGENT: &str = concat!("symptopedia/", env!("CARGO_PKG_VERSION"));

// Fetch
pub const FETCH_ATTEMPTS: u32 = 3;
pub const FETCH_BASE_DELAY_MS: u64 = 1_000; // doubles per attempt: 1s, 2s
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Parse
pub const UMLS_MARKER: &str = "UMLS:";

// Snapshot store
pub const DEFAULT_DATA_DIR: &str = "disease_symptom_data";
pub const DISEASES_PREFIX: &str = "diseases_";
pub const SYMPTOMS_PREFIX: &str = "symptoms_";
pub const MAPPINGS_PREFIX: &str = "disease_symptom_mappings_";
pub const SNAPSHOT_EXT: &str = ".csv";
pub const SNAPSHOT_SEP: char = ',';
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Lookups
pub const CONFIDENCE_RANK_SCALE: f64 = 100.0;
pub const TOP_N: usize = 10;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "symptopedia=info";
