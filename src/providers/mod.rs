pub mod coingecko;
pub mod frankfurter;
pub mod util;
