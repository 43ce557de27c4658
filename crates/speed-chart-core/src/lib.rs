// File: crates/speed-chart-core/src/lib.rs
// Summary: Core library entry point; CSV loading, cleaning, scales and bar-chart rendering.

pub mod chart;
pub mod clean;
pub mod component;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod load;
pub mod raster;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{ChartOptions, SpeedChart};
pub use clean::{clean, clean_with_limit};
pub use component::{LoadTicket, SpeedChartComponent};
pub use error::LoadError;
pub use geometry::{ChartGeometry, ContainerSize};
pub use load::{load_dataset, load_records, parse_records, Source};
pub use record::{Category, Dataset, Datum, RawRecord, Rejection};
pub use scale::{BandScale, ColorScale, LinearScale, Scales};
pub use scene::{Layer, Shape, Surface};
pub use theme::Theme;
pub use text::TextShaper;
