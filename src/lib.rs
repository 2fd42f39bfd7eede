pub use error::{Error, ParseError, RenderError};
pub use record::{Edge, GameRecord, Move, ParseOptions, Role, StrategyUsage, SEPARATOR};
pub use frames::{build_frames, role_color, Frame, FrameSequencer, MAX_COLOR, MIN_COLOR};
pub use render::{
    frame_path,
    output_prefix,
    render_frames,
    FrameRenderer,
    RendererConfig,
    Viewport,
    IMAGE_EXTENSION
};
pub use config::Config;

pub use image::{Canvas, Color, ColorAlpha, DeferredSDFDrawer};
pub use point::Point2;
pub use font::Font;

pub mod point;
pub mod record;
pub mod frames;
pub mod render;

mod error;
mod config;
mod image;
mod font;
