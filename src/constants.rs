//! SI units and physical constants, expressed as [`Quantity`] values.
//!
//! All values are coherent SI; multiplying a raw number by a unit yields a
//! fully dimensioned quantity (`6378.1363 * KILOMETRE`).

use std::f64::consts::PI;

use crate::quantities::{Dimensions, Quantity};

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

// SI base units.
pub const METRE: Quantity = Quantity::new(1.0, Dimensions::NONE.metre(1));
pub const KILOGRAM: Quantity = Quantity::new(1.0, Dimensions::NONE.kilogram(1));
pub const SECOND: Quantity = Quantity::new(1.0, Dimensions::NONE.second(1));
pub const AMPERE: Quantity = Quantity::new(1.0, Dimensions::NONE.ampere(1));
pub const KELVIN: Quantity = Quantity::new(1.0, Dimensions::NONE.kelvin(1));
pub const MOLE: Quantity = Quantity::new(1.0, Dimensions::NONE.mole(1));
pub const CANDELA: Quantity = Quantity::new(1.0, Dimensions::NONE.candela(1));
pub const RADIAN: Quantity = Quantity::new(1.0, Dimensions::NONE.radian(1));

// Derived units.
pub const KILOMETRE: Quantity = Quantity::new(1e3, Dimensions::NONE.metre(1));
pub const DEGREE: Quantity = Quantity::new(PI / 180.0, Dimensions::NONE.radian(1));
pub const MINUTE: Quantity = Quantity::new(60.0, Dimensions::NONE.second(1));
pub const HOUR: Quantity = Quantity::new(3_600.0, Dimensions::NONE.second(1));
pub const DAY: Quantity = Quantity::new(SECONDS_PER_DAY, Dimensions::NONE.second(1));
pub const JULIAN_YEAR: Quantity = Quantity::new(
    DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY,
    Dimensions::NONE.second(1),
);

/// Astronomical unit (IAU 2012), in metres.
pub const ASTRONOMICAL_UNIT: Quantity =
    Quantity::new(149_597_870_700.0, Dimensions::NONE.metre(1));

/// Speed of light in vacuum (exact).
pub const SPEED_OF_LIGHT: Quantity =
    Quantity::new(299_792_458.0, Dimensions::NONE.metre(1).second(-1));

/// Vacuum permeability, kg m s^-2 A^-2.
pub const VACUUM_PERMEABILITY: Quantity = Quantity::new(
    4e-7 * PI,
    Dimensions::NONE.metre(1).kilogram(1).second(-2).ampere(-2),
);

/// Vacuum permittivity, defined as 1/(μ0 c²).
pub const VACUUM_PERMITTIVITY: Quantity = Quantity::new(
    1.0 / (4e-7 * PI * 299_792_458.0 * 299_792_458.0),
    Dimensions::NONE.metre(-3).kilogram(-1).second(4).ampere(2),
);

/// Newtonian constant of gravitation (CODATA 2010), m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: Quantity = Quantity::new(
    6.67384e-11,
    Dimensions::NONE.metre(3).kilogram(-1).second(-2),
);

/// Mass of the sun, in kilograms.
pub const SOLAR_MASS: Quantity = Quantity::new(1.98855e30, Dimensions::NONE.kilogram(1));

/// Equatorial radius of the Earth (GRS1980/WGS84), in metres.
pub const EARTH_MAJOR_AXIS: Quantity = Quantity::new(6_378_137.0, Dimensions::NONE.metre(1));

/// Polar radius of the Earth (GRS1980/WGS84), in metres.
pub const EARTH_MINOR_AXIS: Quantity = Quantity::new(6_356_752.3, Dimensions::NONE.metre(1));
