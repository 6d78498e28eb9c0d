pub mod csv_source;
pub mod in_memory;

pub use csv_source::CsvSeriesSource;
pub use in_memory::InMemorySeriesSource;
