pub mod nav;
pub mod renderer;
pub mod view;
