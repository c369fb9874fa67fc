use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "public-chotot/data/ads.json";
pub const DEFAULT_OUTPUT_DIR: &str = "public-chotot/data/split";

// Where to read the ads array from and where the per-area files go.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
