pub mod bindings;
pub mod constants;
pub mod level;
pub mod params;
