pub mod config;
pub mod directory;
pub mod errors;
pub mod import;
pub mod matching;
pub mod mock;
pub mod models;
pub mod routes;
pub mod state;

pub use matching::engine::calculate_matches;
pub use import::skill_parser::parse_skill_list;
pub use routes::build_router;
pub use state::AppState;
