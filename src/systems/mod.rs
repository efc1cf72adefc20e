pub mod collision;
pub mod explosion;
pub mod integrator;
