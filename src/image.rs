use std::{
    fs::File,
    io::BufWriter,
    path::Path
};

use crate::{Font, Point2, RenderError};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color
{
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color
{
    pub fn black() -> Self
    {
        Self{r: 0, g: 0, b: 0}
    }

    pub fn white() -> Self
    {
        Self{r: 255, g: 255, b: 255}
    }

    pub fn gray(l: u8) -> Self
    {
        Self{r: l, g: l, b: l}
    }

    pub fn lerp(self, other: Self, amount: f32) -> Self
    {
        Self{
            r: Self::lerp_single(self.r, other.r, amount),
            g: Self::lerp_single(self.g, other.g, amount),
            b: Self::lerp_single(self.b, other.b, amount)
        }
    }

    fn lerp_single(a: u8, b: u8, lerp: f32) -> u8
    {
        ((a as f32) * (1.0 - lerp) + (b as f32) * lerp).round() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAlpha
{
    pub color: Color,
    pub a: f32
}

impl ColorAlpha
{
    pub fn new(color: Color, a: f32) -> Self
    {
        Self{color, a: a.clamp(0.0, 1.0)}
    }
}

impl From<Color> for ColorAlpha
{
    fn from(color: Color) -> Self
    {
        Self{color, a: 1.0}
    }
}

struct SignedDistance
{
    point: (f64, f64)
}

impl SignedDistance
{
    pub fn new(point: (f64, f64)) -> Self
    {
        Self{point}
    }

    pub fn translate(&mut self, translation: (f64, f64))
    {
        self.point.0 -= translation.0;
        self.point.1 -= translation.1;
    }

    pub fn circle(&self, size: f64) -> f64
    {
        self.point.0.hypot(self.point.1) - size
    }

    /// segment from the origin to `end` with rounded caps
    pub fn capsule(&self, end: (f64, f64), size: f64) -> f64
    {
        let length_squared = end.0.powi(2) + end.1.powi(2);

        let along = if length_squared == 0.0
        {
            0.0
        } else
        {
            ((self.point.0 * end.0 + self.point.1 * end.1) / length_squared).clamp(0.0, 1.0)
        };

        let closest = (self.point.0 - end.0 * along, self.point.1 - end.1 * along);

        closest.0.hypot(closest.1) - size
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape
{
    Line{p0: (f64, f64), p1: (f64, f64), thickness: f64, c: ColorAlpha},
    Disc{center: (f64, f64), radius: f64, c: ColorAlpha}
}

impl Shape
{
    fn distance(&self, point: (f64, f64)) -> f64
    {
        let mut distance = SignedDistance::new(point);

        match *self
        {
            Self::Line{p0, p1, thickness, ..} =>
            {
                distance.translate(p0);

                distance.capsule((p1.0 - p0.0, p1.1 - p0.1), thickness)
            },
            Self::Disc{center, radius, ..} =>
            {
                distance.translate(center);

                distance.circle(radius)
            }
        }
    }

    fn color(&self) -> ColorAlpha
    {
        match self
        {
            Self::Line{c, ..} | Self::Disc{c, ..} => *c
        }
    }

    fn bounds(&self) -> ((f64, f64), (f64, f64))
    {
        match *self
        {
            Self::Line{p0, p1, thickness, ..} =>
            {
                (
                    (p0.0.min(p1.0) - thickness, p0.1.min(p1.1) - thickness),
                    (p0.0.max(p1.0) + thickness, p0.1.max(p1.1) + thickness)
                )
            },
            Self::Disc{center, radius, ..} =>
            {
                (
                    (center.0 - radius, center.1 - radius),
                    (center.0 + radius, center.1 + radius)
                )
            }
        }
    }
}

/// collects shapes and draws them in submission order
pub struct DeferredSDFDrawer<'a>
{
    image: &'a mut Canvas,
    shapes: Vec<Shape>
}

impl<'a> DeferredSDFDrawer<'a>
{
    pub fn line(&mut self, p0: (f64, f64), p1: (f64, f64), thickness: f64, c: impl Into<ColorAlpha>)
    {
        let p0 = self.image.with_aspect(p0);
        let p1 = self.image.with_aspect(p1);

        self.shapes.push(Shape::Line{p0, p1, thickness, c: c.into()});
    }

    pub fn disc(&mut self, center: (f64, f64), radius: f64, c: impl Into<ColorAlpha>)
    {
        let center = self.image.with_aspect(center);

        self.shapes.push(Shape::Disc{center, radius, c: c.into()});
    }

    /// text centered on `center`, `height` is the cap height
    pub fn text(
        &mut self,
        font: &Font,
        text: &str,
        center: (f64, f64),
        height: f64,
        thickness: f64,
        c: impl Into<ColorAlpha>
    )
    {
        let c = c.into();
        let layout = font.layout(text);

        let center = self.image.with_aspect(center);
        let origin = Point2{
            x: center.0 - layout.width * height * 0.5,
            y: center.1 - height * 0.5
        };

        let place = |point: Point2<f64>| (point * height + origin).tuple();

        self.shapes.extend(layout.lines.into_iter().map(|line|
        {
            Shape::Line{p0: place(line.start), p1: place(line.end), thickness, c}
        }));
    }

    pub fn submit(self)
    {
        for shape in self.shapes
        {
            self.image.fill_shape(shape);
        }
    }
}

/// rgb raster addressed in normalized coordinates, origin bottom left
pub struct Canvas
{
    data: Vec<Color>,
    width: usize,
    height: usize,
    width_bigger: bool,
    aspect: f64
}

impl Canvas
{
    pub fn new(width: usize, height: usize, c: Color) -> Self
    {
        let width_bigger = width >= height;

        let aspect = if width == 0 || height == 0
        {
            1.0
        } else if width_bigger
        {
            width as f64 / height as f64
        } else
        {
            height as f64 / width as f64
        };

        Self{data: vec![c; width * height], width, height, width_bigger, aspect}
    }

    pub fn width(&self) -> usize
    {
        self.width
    }

    pub fn height(&self) -> usize
    {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color
    {
        self.data[self.index(x, y)]
    }

    pub fn sdf_drawer(&mut self) -> DeferredSDFDrawer<'_>
    {
        DeferredSDFDrawer{image: self, shapes: Vec::new()}
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError>
    {
        let path = path.as_ref();

        if self.width == 0 || self.height == 0
        {
            return Err(RenderError::EmptyImage{width: self.width, height: self.height});
        }

        let io_error = |source| RenderError::Io{path: path.to_owned(), source};
        let encoding_error = |source| RenderError::Encoding{path: path.to_owned(), source};

        let file = File::create(path).map_err(io_error)?;

        let mut encoder = png::Encoder::new(
            BufWriter::new(file),
            self.width as u32,
            self.height as u32
        );

        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let data = self.data.iter().flat_map(|c| [c.r, c.g, c.b]).collect::<Vec<u8>>();

        let mut writer = encoder.write_header().map_err(encoding_error)?;
        writer.write_image_data(&data).map_err(encoding_error)?;

        writer.finish().map_err(encoding_error)
    }

    fn with_aspect(&self, point: (f64, f64)) -> (f64, f64)
    {
        if self.width_bigger
        {
            (point.0 * self.aspect, point.1)
        } else
        {
            (point.0, point.1 * self.aspect)
        }
    }

    // side of one pixel in aspect space
    fn pixel_size(&self) -> f64
    {
        1.0 / self.width.min(self.height) as f64
    }

    fn fill_shape(&mut self, shape: Shape)
    {
        if self.data.is_empty()
        {
            return;
        }

        let pixel = self.pixel_size();

        let ((left, bottom), (right, top)) = shape.bounds();

        let to_column = |x: f64| (x / pixel).floor().max(0.0) as usize;
        let to_row = |y: f64| (self.height as f64 - y / pixel).floor().max(0.0) as usize;

        let columns = to_column(left - pixel)..=to_column(right + pixel).min(self.width - 1);
        let rows = to_row(top + pixel)..=to_row(bottom - pixel).min(self.height - 1);

        let c = shape.color();

        for y in rows
        {
            for x in columns.clone()
            {
                let curr = (
                    (x as f64 + 0.5) * pixel,
                    (self.height as f64 - (y as f64 + 0.5)) * pixel
                );

                let coverage = (0.5 - shape.distance(curr) / pixel).clamp(0.0, 1.0);

                if coverage > 0.0
                {
                    let index = self.index(x, y);

                    let prev = self.data[index];
                    self.data[index] = prev.lerp(c.color, c.a * coverage as f32);
                }
            }
        }
    }

    fn index(&self, x: usize, y: usize) -> usize
    {
        assert!(y < self.height);
        assert!(x < self.width);

        x + y * self.width
    }
}
