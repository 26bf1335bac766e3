pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, is_quiet, section, success, summary_row};
pub use theme::{theme, Theme};
