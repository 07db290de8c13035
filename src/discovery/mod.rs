mod finder;
mod types;

pub use finder::find_videos;
pub use types::*;
