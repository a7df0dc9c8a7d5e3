mod config;
mod page;
mod textures;
mod ui;

pub use config::{load_startup_config, read_config, CONFIG_FILE_NAME};
pub use page::{CatalogState, GridState, Page, TouchTracker};
pub use textures::{TextureCache, TextureEntry};
pub use ui::UIState;
