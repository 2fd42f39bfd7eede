use std::collections::HashMap;

use crate::Point2;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line
{
    pub start: Point2<f64>,
    pub end: Point2<f64>
}

pub struct FontChar
{
    lines: Vec<Line>,
    width: f64,
    step: f64
}

impl FontChar
{
    fn from_strokes(strokes: &[&[(f64, f64)]], width: f64, step: f64) -> Self
    {
        let lines = strokes.iter().flat_map(|stroke|
        {
            stroke.iter().zip(stroke.iter().skip(1)).map(move |(&start, &end)|
            {
                let point = |(x, y): (f64, f64)| Point2{x: x * width, y};

                Line{start: point(start), end: point(end)}
            })
        }).collect();

        Self{lines, width, step}
    }

    pub fn lines(&self) -> &[Line]
    {
        &self.lines
    }

    pub fn width(&self) -> f64
    {
        self.width
    }

    pub fn total_step(&self) -> f64
    {
        self.width + self.step
    }
}

/// laid out string, one unit tall, starting at the origin
pub struct TextLayout
{
    pub lines: Vec<Line>,
    pub width: f64
}

pub struct Font
{
    chars: HashMap<char, FontChar>,
    missing_width: f64
}

impl Default for Font
{
    fn default() -> Self
    {
        let step = 0.3;

        let ring: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let s_shape: &[(f64, f64)] =
            &[(1.0, 1.0), (0.0, 1.0), (0.0, 0.5), (1.0, 0.5), (1.0, 0.0), (0.0, 0.0)];
        let p_shape: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.0, 0.5)];

        let glyphs: [(char, &[&[(f64, f64)]], f64); 39] = [
            ('0', &[ring, &[(0.0, 0.0), (1.0, 1.0)]], 0.6),
            ('1', &[&[(0.2, 0.8), (0.6, 1.0), (0.6, 0.0)]], 0.4),
            ('2', &[&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.0, 0.5), (0.0, 0.0), (1.0, 0.0)]], 0.6),
            ('3', &[&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)], &[(0.2, 0.5), (1.0, 0.5)]], 0.6),
            ('4', &[&[(0.0, 1.0), (0.0, 0.5), (1.0, 0.5)], &[(0.8, 1.0), (0.8, 0.0)]], 0.6),
            ('5', &[s_shape], 0.6),
            ('6', &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]], 0.6),
            ('7', &[&[(0.0, 1.0), (1.0, 1.0), (0.3, 0.0)]], 0.6),
            ('8', &[ring, &[(0.0, 0.5), (1.0, 0.5)]], 0.6),
            ('9', &[&[(1.0, 0.5), (0.0, 0.5), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]], 0.6),
            ('-', &[&[(0.1, 0.5), (0.9, 0.5)]], 0.5),
            ('_', &[&[(0.0, 0.0), (1.0, 0.0)]], 0.6),
            ('.', &[&[(0.5, 0.0), (0.5, 0.05)]], 0.1),
            ('A', &[&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)], &[(0.25, 0.5), (0.75, 0.5)]], 0.6),
            ('B', &[
                &[(0.0, 0.0), (0.0, 1.0), (0.8, 1.0), (1.0, 0.75), (0.8, 0.5), (0.0, 0.5)],
                &[(0.8, 0.5), (1.0, 0.25), (0.8, 0.0), (0.0, 0.0)]
            ], 0.6),
            ('C', &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]], 0.6),
            ('D', &[&[(0.0, 0.0), (0.0, 1.0), (0.6, 1.0), (1.0, 0.6), (1.0, 0.4), (0.6, 0.0), (0.0, 0.0)]], 0.6),
            ('E', &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)], &[(0.0, 0.5), (0.7, 0.5)]], 0.6),
            ('F', &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(0.0, 0.5), (0.7, 0.5)]], 0.6),
            ('G', &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.5, 0.5)]], 0.6),
            ('H', &[&[(0.0, 0.0), (0.0, 1.0)], &[(1.0, 0.0), (1.0, 1.0)], &[(0.0, 0.5), (1.0, 0.5)]], 0.6),
            ('I', &[&[(0.5, 0.0), (0.5, 1.0)]], 0.2),
            ('J', &[&[(1.0, 1.0), (1.0, 0.0), (0.0, 0.0), (0.0, 0.3)]], 0.6),
            ('K', &[&[(0.0, 0.0), (0.0, 1.0)], &[(1.0, 1.0), (0.0, 0.5), (1.0, 0.0)]], 0.6),
            ('L', &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]], 0.6),
            ('M', &[&[(0.0, 0.0), (0.0, 1.0), (0.5, 0.5), (1.0, 1.0), (1.0, 0.0)]], 0.8),
            ('N', &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]], 0.6),
            ('O', &[ring], 0.6),
            ('P', &[p_shape], 0.6),
            ('Q', &[ring, &[(0.6, 0.4), (1.0, 0.0)]], 0.6),
            ('R', &[p_shape, &[(0.4, 0.5), (1.0, 0.0)]], 0.6),
            ('S', &[s_shape], 0.6),
            ('T', &[&[(0.0, 1.0), (1.0, 1.0)], &[(0.5, 1.0), (0.5, 0.0)]], 0.6),
            ('U', &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]], 0.6),
            ('V', &[&[(0.0, 1.0), (0.5, 0.0), (1.0, 1.0)]], 0.6),
            ('W', &[&[(0.0, 1.0), (0.25, 0.0), (0.5, 0.6), (0.75, 0.0), (1.0, 1.0)]], 0.8),
            ('X', &[&[(0.0, 0.0), (1.0, 1.0)], &[(0.0, 1.0), (1.0, 0.0)]], 0.6),
            ('Y', &[&[(0.0, 1.0), (0.5, 0.5), (1.0, 1.0)], &[(0.5, 0.5), (0.5, 0.0)]], 0.6),
            ('Z', &[&[(0.0, 1.0), (1.0, 1.0), (0.0, 0.0), (1.0, 0.0)]], 0.6)
        ];

        let chars = glyphs.into_iter().map(|(c, strokes, width)|
        {
            (c, FontChar::from_strokes(strokes, width, step))
        }).collect();

        Self{chars, missing_width: 0.6 + step}
    }
}

impl Font
{
    pub fn get(&self, c: char) -> Option<&FontChar>
    {
        self.chars.get(&c.to_ascii_uppercase())
    }

    /// characters without a glyph still take up space
    pub fn layout(&self, text: &str) -> TextLayout
    {
        let mut lines = Vec::new();
        let mut x = 0.0;
        let mut last_step = 0.0;

        for c in text.chars()
        {
            match self.get(c)
            {
                Some(font_char) =>
                {
                    let offset = Point2{x, y: 0.0};

                    lines.extend(font_char.lines().iter().map(|line|
                    {
                        Line{start: line.start + offset, end: line.end + offset}
                    }));

                    x += font_char.total_step();
                    last_step = font_char.total_step() - font_char.width();
                },
                None =>
                {
                    x += self.missing_width;
                    last_step = 0.0;
                }
            }
        }

        TextLayout{lines, width: (x - last_step).max(0.0)}
    }
}
