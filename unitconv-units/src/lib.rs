//! unitconv Units - deterministic unit conversion
//!
//! Every category except currency lives here. Five categories are
//! fixed-factor (a ratio of per-unit constants against one reference
//! unit); temperature uses affine formulas per directed pair.
//!
//! Categories:
//! - Length (Meter, Kilometer, Inch, Mile, ...)
//! - Weight (Kilogram, Gram, Pound, Ounce, ...)
//! - Volume (Liter, Gallon, Cup, Fluid Ounce, ...)
//! - Time (Second, Minute, Day, Year, ...)
//! - Speed (Meter/Second, Kilometer/Hour, Knot, ...)
//! - Temperature (Celsius, Fahrenheit, Kelvin)

mod unit;
mod table;
mod units;
mod parse;
mod convert;
pub mod temperature;

pub use unit::Unit;
pub use table::FactorTable;
pub use units::{UnitRegistry, UNITS};
pub use parse::resolve_unit;
pub use convert::convert_fixed;
pub use temperature::TemperatureScale;
