mod aggregate;
mod summary;

pub use aggregate::{
    DEFAULT_TOP_N, TargetCount, format_percentage, format_top, percentage, top_targets,
};
pub use summary::{ConsumableReport, PotionRow, SunderReport, SunderRow};
