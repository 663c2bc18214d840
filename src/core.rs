pub mod element;
pub mod elements_map;
pub mod app_state;
pub mod error;
pub mod id_gen;
