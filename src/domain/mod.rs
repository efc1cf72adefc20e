pub mod blocks;
pub mod entity;
