use std::path::PathBuf;

use clap::Parser;

use crate::{ParseOptions, RendererConfig};


#[derive(Parser, Debug)]
#[command(
    name = "graphreplay",
    about = "Render a recorded graph drawing game into one image per move"
)]
pub struct Config
{
    /// Game log to replay, images are written next to it
    pub path: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// Reject role tags other than MAX and MIN
    #[arg(long)]
    pub strict: bool,

    /// Print the parsed log instead of rendering it
    #[arg(long)]
    pub dump: bool,

    /// Dont draw vertex ids
    #[arg(long)]
    pub no_labels: bool,

    /// Dont draw the background grid
    #[arg(long)]
    pub no_grid: bool
}

impl Config
{
    pub fn parse_options(&self) -> ParseOptions
    {
        ParseOptions{strict: self.strict}
    }

    pub fn renderer_config(&self) -> RendererConfig
    {
        RendererConfig{
            width: self.width,
            height: self.height,
            labels: !self.no_labels,
            grid: !self.no_grid,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn path_is_optional()
    {
        let config = Config::try_parse_from(["graphreplay"]).unwrap();

        assert!(config.path.is_none());
        assert_eq!(config.renderer_config().width, 640);
    }

    #[test]
    fn flags()
    {
        let config = Config::try_parse_from([
            "graphreplay",
            "logs/game.txt",
            "--width", "100",
            "--height", "50",
            "--strict",
            "--no-labels"
        ]).unwrap();

        assert_eq!(config.path, Some(PathBuf::from("logs/game.txt")));
        assert!(config.parse_options().strict);

        let renderer = config.renderer_config();
        assert_eq!((renderer.width, renderer.height), (100, 50));
        assert!(!renderer.labels);
        assert!(renderer.grid);
    }

    #[test]
    fn bad_number()
    {
        assert!(Config::try_parse_from(["graphreplay", "--width", "wide"]).is_err());
    }
}
