mod app;
mod edge;
mod node;

pub use app::draw_network;
