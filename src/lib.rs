pub mod data;
pub mod dataset;
pub mod explore;
pub mod image;
pub mod nav;
pub mod order;
pub mod screen;
