pub mod progress;
pub mod prompt;
pub mod render;

pub use progress::{create_spinner, fail_spinner, finish_spinner};
pub use prompt::read_objective;
pub use render::{render_plan, safety_icon};
