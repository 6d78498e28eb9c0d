// Series model
pub mod augmented_series;
pub mod bar;
pub mod indicator_series;
pub mod series;

pub use augmented_series::{AugmentedSeries, IndicatorColumns};
pub use bar::Bar;
pub use indicator_series::IndicatorSeries;
pub use series::Series;
