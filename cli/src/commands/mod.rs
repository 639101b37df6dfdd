pub mod camera;
pub mod name;
pub mod stops;
