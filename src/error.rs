use std::{
    io,
    path::PathBuf
};


#[derive(Debug, thiserror::Error)]
pub enum ParseError
{
    #[error("line {line}: expected {expected} comma separated fields, got {found}: {raw:?}")]
    FieldCount{line: usize, expected: usize, found: usize, raw: String},
    #[error("line {line}: coordinate {value:?} is not an integer: {raw:?}")]
    Coordinate{line: usize, value: String, raw: String},
    #[error("line {line}: unknown role {value:?}: {raw:?}")]
    Role{line: usize, value: String, raw: String},
    #[error("line {line}: vertex {vertex:?} was never declared: {raw:?}")]
    UndeclaredVertex{line: usize, vertex: String, raw: String}
}

impl ParseError
{
    /// 1-based line of the offending input
    pub fn line(&self) -> usize
    {
        match self
        {
            Self::FieldCount{line, ..}
            | Self::Coordinate{line, ..}
            | Self::Role{line, ..}
            | Self::UndeclaredVertex{line, ..} => *line
        }
    }

    pub fn raw(&self) -> &str
    {
        match self
        {
            Self::FieldCount{raw, ..}
            | Self::Coordinate{raw, ..}
            | Self::Role{raw, ..}
            | Self::UndeclaredVertex{raw, ..} => raw
        }
    }

    pub fn is_lookup(&self) -> bool
    {
        matches!(self, Self::UndeclaredVertex{..})
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError
{
    #[error("cant render a {width}x{height} image")]
    EmptyImage{width: usize, height: usize},
    #[error("writing {path:?}")]
    Io{path: PathBuf, #[source] source: io::Error},
    #[error("encoding {path:?}")]
    Encoding{path: PathBuf, #[source] source: png::EncodingError}
}

#[derive(Debug, thiserror::Error)]
pub enum Error
{
    #[error("reading {path:?}")]
    Resource{path: PathBuf, #[source] source: io::Error},
    #[error(transparent)]
    Format(#[from] ParseError),
    #[error("frame {index}")]
    Render{index: usize, #[source] source: RenderError}
}
