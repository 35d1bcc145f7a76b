//! Unit definitions - factor tables and aliases per category

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::UnitCategory;
use crate::FactorTable;
use crate::temperature::TemperatureScale;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of every non-currency unit
pub struct UnitRegistry {
    length: FactorTable,
    weight: FactorTable,
    volume: FactorTable,
    time: FactorTable,
    speed: FactorTable,
    /// (category, lowercase alias) -> canonical label
    aliases: HashMap<(UnitCategory, String), &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            length: length_table(),
            weight: weight_table(),
            volume: volume_table(),
            time: time_table(),
            speed: speed_table(),
            aliases: HashMap::new(),
        };
        registry.register_all_aliases();
        registry
    }

    pub fn length(&self) -> &FactorTable {
        &self.length
    }

    pub fn weight(&self) -> &FactorTable {
        &self.weight
    }

    pub fn volume(&self) -> &FactorTable {
        &self.volume
    }

    pub fn time(&self) -> &FactorTable {
        &self.time
    }

    pub fn speed(&self) -> &FactorTable {
        &self.speed
    }

    /// Factor table of a fixed-factor category
    pub fn table(&self, category: UnitCategory) -> Option<&FactorTable> {
        match category {
            UnitCategory::Length => Some(&self.length),
            UnitCategory::Weight => Some(&self.weight),
            UnitCategory::Volume => Some(&self.volume),
            UnitCategory::Time => Some(&self.time),
            UnitCategory::Speed => Some(&self.speed),
            UnitCategory::Temperature | UnitCategory::Currency => None,
        }
    }

    /// Canonical unit labels for a category, in presentation order.
    /// `None` for currency, which this registry does not know about.
    pub fn names(&self, category: UnitCategory) -> Option<Vec<&'static str>> {
        match category {
            UnitCategory::Temperature => Some(TemperatureScale::names()),
            _ => self.table(category).map(|t| t.names()),
        }
    }

    /// Canonical label for an alias within a category
    pub fn alias(&self, category: UnitCategory, alias: &str) -> Option<&'static str> {
        self.aliases.get(&(category, alias.to_lowercase())).copied()
    }

    fn add_alias(&mut self, category: UnitCategory, alias: &str, name: &'static str) {
        self.aliases.insert((category, alias.to_lowercase()), name);
    }

    fn register_all_aliases(&mut self) {
        let canonical: Vec<_> = [&self.length, &self.weight, &self.volume, &self.time, &self.speed]
            .into_iter()
            .flat_map(|t| t.units().iter().map(|u| (u.category, u.name)))
            .collect();
        for (category, name) in canonical {
            self.add_alias(category, name, name);
        }

        self.register_length_aliases();
        self.register_weight_aliases();
        self.register_volume_aliases();
        self.register_time_aliases();
        self.register_speed_aliases();
        self.register_temperature_aliases();
    }

    fn register_length_aliases(&mut self) {
        use UnitCategory::Length;

        self.add_alias(Length, "m", "Meter");
        self.add_alias(Length, "meters", "Meter");
        self.add_alias(Length, "metre", "Meter");
        self.add_alias(Length, "metres", "Meter");
        self.add_alias(Length, "km", "Kilometer");
        self.add_alias(Length, "kilometers", "Kilometer");
        self.add_alias(Length, "kilometre", "Kilometer");
        self.add_alias(Length, "cm", "Centimeter");
        self.add_alias(Length, "centimeters", "Centimeter");
        self.add_alias(Length, "mm", "Millimeter");
        self.add_alias(Length, "millimeters", "Millimeter");
        self.add_alias(Length, "in", "Inch");
        self.add_alias(Length, "inches", "Inch");
        self.add_alias(Length, "ft", "Foot");
        self.add_alias(Length, "feet", "Foot");
        self.add_alias(Length, "yd", "Yard");
        self.add_alias(Length, "yards", "Yard");
        self.add_alias(Length, "mi", "Mile");
        self.add_alias(Length, "miles", "Mile");
    }

    fn register_weight_aliases(&mut self) {
        use UnitCategory::Weight;

        self.add_alias(Weight, "kg", "Kilogram");
        self.add_alias(Weight, "kilograms", "Kilogram");
        self.add_alias(Weight, "g", "Gram");
        self.add_alias(Weight, "grams", "Gram");
        self.add_alias(Weight, "mg", "Milligram");
        self.add_alias(Weight, "milligrams", "Milligram");
        self.add_alias(Weight, "lb", "Pound");
        self.add_alias(Weight, "lbs", "Pound");
        self.add_alias(Weight, "pounds", "Pound");
        self.add_alias(Weight, "oz", "Ounce");
        self.add_alias(Weight, "ounces", "Ounce");
    }

    fn register_volume_aliases(&mut self) {
        use UnitCategory::Volume;

        self.add_alias(Volume, "l", "Liter");
        self.add_alias(Volume, "liters", "Liter");
        self.add_alias(Volume, "litre", "Liter");
        self.add_alias(Volume, "litres", "Liter");
        self.add_alias(Volume, "ml", "Milliliter");
        self.add_alias(Volume, "milliliters", "Milliliter");
        self.add_alias(Volume, "gal", "Gallon");
        self.add_alias(Volume, "gallons", "Gallon");
        self.add_alias(Volume, "qt", "Quart");
        self.add_alias(Volume, "quarts", "Quart");
        self.add_alias(Volume, "pt", "Pint");
        self.add_alias(Volume, "pints", "Pint");
        self.add_alias(Volume, "cups", "Cup");
        self.add_alias(Volume, "fl oz", "Fluid Ounce");
        self.add_alias(Volume, "floz", "Fluid Ounce");
        self.add_alias(Volume, "fluid ounces", "Fluid Ounce");
    }

    fn register_time_aliases(&mut self) {
        use UnitCategory::Time;

        self.add_alias(Time, "s", "Second");
        self.add_alias(Time, "sec", "Second");
        self.add_alias(Time, "seconds", "Second");
        self.add_alias(Time, "min", "Minute");
        self.add_alias(Time, "minutes", "Minute");
        self.add_alias(Time, "h", "Hour");
        self.add_alias(Time, "hr", "Hour");
        self.add_alias(Time, "hours", "Hour");
        self.add_alias(Time, "d", "Day");
        self.add_alias(Time, "days", "Day");
        self.add_alias(Time, "wk", "Week");
        self.add_alias(Time, "weeks", "Week");
        self.add_alias(Time, "mo", "Month");
        self.add_alias(Time, "months", "Month");
        self.add_alias(Time, "yr", "Year");
        self.add_alias(Time, "years", "Year");
    }

    fn register_speed_aliases(&mut self) {
        use UnitCategory::Speed;

        self.add_alias(Speed, "m/s", "Meter/Second");
        self.add_alias(Speed, "mps", "Meter/Second");
        self.add_alias(Speed, "km/h", "Kilometer/Hour");
        self.add_alias(Speed, "kph", "Kilometer/Hour");
        self.add_alias(Speed, "kmh", "Kilometer/Hour");
        self.add_alias(Speed, "mph", "Mile/Hour");
        self.add_alias(Speed, "mi/h", "Mile/Hour");
        self.add_alias(Speed, "ft/s", "Foot/Second");
        self.add_alias(Speed, "fps", "Foot/Second");
        self.add_alias(Speed, "kn", "Knot");
        self.add_alias(Speed, "kt", "Knot");
        self.add_alias(Speed, "knots", "Knot");
    }

    fn register_temperature_aliases(&mut self) {
        use UnitCategory::Temperature;

        for scale in TemperatureScale::ALL {
            self.add_alias(Temperature, scale.name(), scale.name());
        }
        self.add_alias(Temperature, "c", "Celsius");
        self.add_alias(Temperature, "°c", "Celsius");
        self.add_alias(Temperature, "f", "Fahrenheit");
        self.add_alias(Temperature, "°f", "Fahrenheit");
        self.add_alias(Temperature, "k", "Kelvin");
    }
}

fn length_table() -> FactorTable {
    FactorTable::new(UnitCategory::Length)
        .with_unit("Meter", 1.0)
        .with_unit("Kilometer", 0.001)
        .with_unit("Centimeter", 100.0)
        .with_unit("Millimeter", 1000.0)
        .with_unit("Inch", 39.3701)
        .with_unit("Foot", 3.28084)
        .with_unit("Yard", 1.09361)
        .with_unit("Mile", 0.000621371)
}

fn weight_table() -> FactorTable {
    FactorTable::new(UnitCategory::Weight)
        .with_unit("Kilogram", 1.0)
        .with_unit("Gram", 1000.0)
        .with_unit("Milligram", 1e6)
        .with_unit("Pound", 2.20462)
        .with_unit("Ounce", 35.274)
}

fn volume_table() -> FactorTable {
    FactorTable::new(UnitCategory::Volume)
        .with_unit("Liter", 1.0)
        .with_unit("Milliliter", 1000.0)
        .with_unit("Gallon", 0.264172)
        .with_unit("Quart", 1.05669)
        .with_unit("Pint", 2.11338)
        .with_unit("Cup", 4.22675)
        .with_unit("Fluid Ounce", 33.814)
}

fn time_table() -> FactorTable {
    FactorTable::new(UnitCategory::Time)
        .with_unit("Second", 1.0)
        .with_unit("Minute", 1.0 / 60.0)
        .with_unit("Hour", 1.0 / 3600.0)
        .with_unit("Day", 1.0 / 86400.0)
        .with_unit("Week", 1.0 / 604800.0)
        .with_unit("Month", 1.0 / 2.628e6)
        .with_unit("Year", 1.0 / 3.154e7)
}

fn speed_table() -> FactorTable {
    FactorTable::new(UnitCategory::Speed)
        .with_unit("Meter/Second", 1.0)
        .with_unit("Kilometer/Hour", 3.6)
        .with_unit("Mile/Hour", 2.23694)
        .with_unit("Foot/Second", 3.28084)
        .with_unit("Knot", 1.94384)
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
