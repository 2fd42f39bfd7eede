use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    Canvas,
    Color,
    DeferredSDFDrawer,
    Error,
    Font,
    Frame,
    FrameSequencer,
    GameRecord,
    Point2,
    RenderError
};


pub const IMAGE_EXTENSION: &str = "png";

/// `<dir>/<basename>` of the input, extension stripped
pub fn output_prefix(input: impl AsRef<Path>) -> PathBuf
{
    input.as_ref().with_extension("")
}

pub fn frame_path(prefix: impl AsRef<Path>, index: usize) -> PathBuf
{
    let mut path = prefix.as_ref().as_os_str().to_owned();
    path.push(format!("_{index:010}.{IMAGE_EXTENSION}"));

    PathBuf::from(path)
}

#[derive(Debug, Clone)]
pub struct RendererConfig
{
    pub width: usize,
    pub height: usize,
    pub node_radius: f64,
    pub edge_thickness: f64,
    pub labels: bool,
    pub grid: bool
}

impl Default for RendererConfig
{
    fn default() -> Self
    {
        Self{
            width: 640,
            height: 480,
            node_radius: 0.022,
            edge_thickness: 0.002,
            labels: true,
            grid: true
        }
    }
}

/// game coordinate bounds shared by every frame of one game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport
{
    pub min: Point2<f64>,
    pub max: Point2<f64>
}

impl Default for Viewport
{
    fn default() -> Self
    {
        Self{min: Point2{x: 0.0, y: 0.0}, max: Point2{x: 1.0, y: 1.0}}
    }
}

impl Viewport
{
    pub fn from_record(record: &GameRecord) -> Self
    {
        let mut positions = record.moves.iter().map(|m| m.position());

        let Some(first) = positions.next() else
        {
            return Self::default();
        };

        let (min, max) = positions.fold((first, first), |(min, max), point|
        {
            (min.min(point), max.max(point))
        });

        let mut this = Self{min: min.into(), max: max.into()};

        // a single row or column still needs some room
        if this.max.x == this.min.x
        {
            this.min.x -= 0.5;
            this.max.x += 0.5;
        }

        if this.max.y == this.min.y
        {
            this.min.y -= 0.5;
            this.max.y += 0.5;
        }

        this
    }

    /// maps into 0..1 on both axes
    pub fn position(&self, point: Point2<i32>) -> Point2<f64>
    {
        (Point2::<f64>::from(point) - self.min) / (self.max - self.min)
    }
}

pub struct FrameRenderer
{
    config: RendererConfig,
    viewport: Viewport,
    font: Font,
    pad: Point2<f64>
}

impl FrameRenderer
{
    pub fn new(config: RendererConfig, viewport: Viewport) -> Self
    {
        let aspect = if config.height == 0
        {
            1.0
        } else
        {
            config.width as f64 / config.height as f64
        };

        let mut pad = Point2{x: 0.08, y: 0.08};
        pad.x = pad.x / aspect;

        Self{config, viewport, font: Font::default(), pad}
    }

    fn to_local(&self, point: Point2<i32>) -> (f64, f64)
    {
        Self::fit(self.viewport.position(point), self.pad).tuple()
    }

    fn fit(point: Point2<f64>, pad: Point2<f64>) -> Point2<f64>
    {
        point * ((pad * -2.0) + 1.0) + pad
    }

    pub fn render(&self, frame: &Frame) -> Canvas
    {
        let mut image = Canvas::new(self.config.width, self.config.height, Color::white());

        let mut drawer = image.sdf_drawer();

        if self.config.grid
        {
            self.draw_guides(&mut drawer, Color::gray(225));
        }

        self.draw_borders(&mut drawer, Color::gray(90));

        let edge_color = Color::gray(40);
        for edge in &frame.resolved_edges
        {
            let (Some(&a), Some(&b)) = (frame.positions.get(&edge.a), frame.positions.get(&edge.b)) else
            {
                continue;
            };

            drawer.line(self.to_local(a), self.to_local(b), self.config.edge_thickness, edge_color);
        }

        for vertex in &frame.placed_vertices
        {
            let (Some(&position), Some(&c)) = (frame.positions.get(vertex), frame.vertex_colors.get(vertex)) else
            {
                continue;
            };

            drawer.disc(self.to_local(position), self.config.node_radius, c);
        }

        if self.config.labels
        {
            let height = self.config.node_radius * 0.8;
            let thickness = height * 0.08;

            for vertex in &frame.placed_vertices
            {
                if let Some(&position) = frame.positions.get(vertex)
                {
                    drawer.text(&self.font, vertex, self.to_local(position), height, thickness, Color::black());
                }
            }
        }

        drawer.submit();

        image
    }

    pub fn write(&self, frame: &Frame, prefix: impl AsRef<Path>) -> Result<PathBuf, RenderError>
    {
        let path = frame_path(prefix, frame.index);

        self.render(frame).save(&path)?;

        debug!(
            "frame {}: {} vertices, {} edges -> {path:?}",
            frame.index,
            frame.placed_vertices.len(),
            frame.resolved_edges.len()
        );

        Ok(path)
    }

    fn draw_guides(&self, drawer: &mut DeferredSDFDrawer<'_>, c: Color)
    {
        let pad = self.pad;
        let thickness = self.config.edge_thickness * 0.5;

        let divisions = 10;
        for i in 1..divisions
        {
            let t = i as f64 / divisions as f64;

            let horizontal = (
                Self::fit(Point2{x: 0.0, y: t}, pad),
                Self::fit(Point2{x: 1.0, y: t}, pad)
            );

            let vertical = (
                Self::fit(Point2{x: t, y: 0.0}, pad),
                Self::fit(Point2{x: t, y: 1.0}, pad)
            );

            for (start, end) in [horizontal, vertical]
            {
                drawer.line(start.tuple(), end.tuple(), thickness, c);
            }
        }
    }

    fn draw_borders(&self, drawer: &mut DeferredSDFDrawer<'_>, c: Color)
    {
        let pad = self.pad;
        let thickness = self.config.edge_thickness;

        let corners = [
            Point2{x: 0.0, y: 0.0},
            Point2{x: 1.0, y: 0.0},
            Point2{x: 1.0, y: 1.0},
            Point2{x: 0.0, y: 1.0}
        ].map(|corner| Self::fit(corner, pad).tuple());

        for (i, &start) in corners.iter().enumerate()
        {
            drawer.line(start, corners[(i + 1) % corners.len()], thickness, c);
        }
    }
}

/// writes one image per move, stops at the first failure
pub fn render_frames(
    record: &GameRecord,
    prefix: impl AsRef<Path>,
    config: RendererConfig
) -> Result<Vec<PathBuf>, Error>
{
    let prefix = prefix.as_ref();

    let renderer = FrameRenderer::new(config, Viewport::from_record(record));

    let paths = FrameSequencer::new(record).map(|frame|
    {
        renderer.write(&frame, prefix).map_err(|source|
        {
            Error::Render{index: frame.index, source}
        })
    }).collect::<Result<Vec<_>, _>>()?;

    info!("wrote {} frames to {}_*.{IMAGE_EXTENSION}", paths.len(), prefix.display());

    Ok(paths)
}
