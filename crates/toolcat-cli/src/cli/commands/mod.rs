//! CLI command handlers. Each command is in its own file.

mod checksum;
mod download;
mod gen_metrics;
mod links;
mod mood;
mod show;
mod site;
mod stats;
mod tool;
mod visit;

pub use checksum::run_checksum;
pub use download::run_download;
pub use gen_metrics::run_gen_metrics;
pub use links::run_links;
pub use mood::run_mood;
pub use show::run_show;
pub use stats::run_stats;
pub use tool::run_tool;
pub use visit::run_visit;
