pub mod terrain;

pub use terrain::Terrain;
