pub mod renderer;

pub use renderer::{Renderer, hud_lines, overlay_lines};
