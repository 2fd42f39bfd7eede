use std::{
    fmt,
    fs,
    collections::HashSet,
    path::Path
};

use tracing::{debug, warn};

use crate::{Error, ParseError, Point2};


/// line that moves the parser on to the next section
pub const SEPARATOR: &str = "\\";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role
{
    Max,
    Min
}

impl Role
{
    pub fn name(self) -> &'static str
    {
        match self
        {
            Self::Max => "MAX",
            Self::Min => "MIN"
        }
    }

    /// exact tag match, anything else is `None`
    pub fn from_tag(tag: &str) -> Option<Self>
    {
        match tag
        {
            "MAX" => Some(Self::Max),
            "MIN" => Some(Self::Min),
            _ => None
        }
    }
}

impl fmt::Display for Role
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// unordered pair of vertex ids
#[derive(Debug, Clone, Eq)]
pub struct Edge
{
    pub a: String,
    pub b: String
}

impl Edge
{
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self
    {
        Self{a: a.into(), b: b.into()}
    }
}

impl PartialEq for Edge
{
    fn eq(&self, other: &Self) -> bool
    {
        (self.a == other.a && self.b == other.b)
            || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Edge
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{},{}", self.a, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move
{
    pub role: Role,
    pub vertex: String,
    pub x: i32,
    pub y: i32,
    pub strategy_label: String
}

impl Move
{
    pub fn position(&self) -> Point2<i32>
    {
        Point2{x: self.x, y: self.y}
    }
}

impl fmt::Display for Move
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{},{},{},{},{}", self.role, self.vertex, self.x, self.y, self.strategy_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyUsage
{
    pub role: Role,
    pub strategy_label: String,
    pub moves: usize
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions
{
    /// reject role tags other than MAX and MIN instead of drawing them as MIN
    pub strict: bool
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord
{
    pub player_name: String,
    pub player_role: Option<Role>,
    pub vertices: Vec<String>,
    pub edges: Vec<Edge>,
    pub moves: Vec<Move>
}

impl GameRecord
{
    pub fn read_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, Error>
    {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source|
        {
            Error::Resource{path: path.to_owned(), source}
        })?;

        let record = Self::parse(text.lines(), options)?;

        debug!(
            "parsed {path:?}: {} vertices, {} edges, {} moves",
            record.vertices.len(),
            record.edges.len(),
            record.moves.len()
        );

        Ok(record)
    }

    pub fn parse<I, S>(lines: I, options: ParseOptions) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item=S>,
        S: AsRef<str>
    {
        let mut builder = RecordBuilder::new(options);

        for (index, line) in lines.into_iter().enumerate()
        {
            builder.push_line(index + 1, line.as_ref())?;
        }

        Ok(builder.complete())
    }

    /// how many moves every role made with each strategy, in first seen order
    pub fn strategy_usage(&self) -> Vec<StrategyUsage>
    {
        let mut usage: Vec<StrategyUsage> = Vec::new();

        for m in &self.moves
        {
            let existing = usage.iter_mut().find(|entry|
            {
                entry.role == m.role && entry.strategy_label == m.strategy_label
            });

            if let Some(entry) = existing
            {
                entry.moves += 1;
            } else
            {
                usage.push(StrategyUsage{
                    role: m.role,
                    strategy_label: m.strategy_label.clone(),
                    moves: 1
                });
            }
        }

        usage
    }
}

impl fmt::Display for GameRecord
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        writeln!(f, "Player Name: {}", self.player_name)?;

        let role = self.player_role.map(Role::name).unwrap_or("-");
        writeln!(f, "Player Role: {role}")?;

        writeln!(f, "Vertices: {}", self.vertices.join(" "))?;

        writeln!(f, "Edges:")?;
        for edge in &self.edges
        {
            writeln!(f, "    {edge}")?;
        }

        writeln!(f, "Game Moves:")?;
        for (index, m) in self.moves.iter().enumerate()
        {
            writeln!(f, "    {index:>4} {m}")?;
        }

        writeln!(f, "Strategies:")?;
        for usage in self.strategy_usage()
        {
            writeln!(f, "    {} {}: {}", usage.role, usage.strategy_label, usage.moves)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section
{
    PlayerName,
    PlayerRole,
    Vertices,
    Edges,
    Moves,
    Trailing
}

impl Section
{
    fn next(self) -> Self
    {
        match self
        {
            Self::PlayerName => Self::PlayerRole,
            Self::PlayerRole => Self::Vertices,
            Self::Vertices => Self::Edges,
            Self::Edges => Self::Moves,
            Self::Moves | Self::Trailing => Self::Trailing
        }
    }
}

struct RecordBuilder
{
    options: ParseOptions,
    section: Section,
    name_set: bool,
    role_set: bool,
    declared: HashSet<String>,
    record: GameRecord
}

impl RecordBuilder
{
    pub fn new(options: ParseOptions) -> Self
    {
        Self{
            options,
            section: Section::PlayerName,
            name_set: false,
            role_set: false,
            declared: HashSet::new(),
            record: GameRecord::default()
        }
    }

    pub fn push_line(&mut self, line: usize, raw: &str) -> Result<(), ParseError>
    {
        let clean = raw.trim();

        if clean == SEPARATOR
        {
            if self.section == Section::Moves || self.section == Section::Trailing
            {
                warn!("line {line}: separator after the moves section, ignoring the rest");
            }

            self.section = self.section.next();

            return Ok(());
        }

        if clean.is_empty()
        {
            return Ok(());
        }

        match self.section
        {
            Section::PlayerName =>
            {
                if self.name_set
                {
                    warn!("line {line}: player name overwritten with {clean:?}");
                }

                self.name_set = true;
                self.record.player_name = clean.to_owned();
            },
            Section::PlayerRole =>
            {
                if self.role_set
                {
                    warn!("line {line}: player role overwritten with {clean:?}");
                }

                self.role_set = true;
                self.record.player_role = Some(self.role(line, clean, raw)?);
            },
            Section::Vertices =>
            {
                self.declared.insert(clean.to_owned());
                self.record.vertices.push(clean.to_owned());
            },
            Section::Edges =>
            {
                let [a, b] = Self::fields::<2>(line, clean, raw)?;

                self.record.edges.push(Edge::new(a, b));
            },
            Section::Moves =>
            {
                let [role, vertex, x, y, strategy_label] = Self::fields::<5>(line, clean, raw)?;

                let role = self.role(line, role, raw)?;

                if !self.declared.contains(vertex)
                {
                    return Err(ParseError::UndeclaredVertex{
                        line,
                        vertex: vertex.to_owned(),
                        raw: raw.to_owned()
                    });
                }

                self.record.moves.push(Move{
                    role,
                    vertex: vertex.to_owned(),
                    x: Self::coordinate(line, x, raw)?,
                    y: Self::coordinate(line, y, raw)?,
                    strategy_label: strategy_label.to_owned()
                });
            },
            Section::Trailing => ()
        }

        Ok(())
    }

    pub fn complete(self) -> GameRecord
    {
        self.record
    }

    fn fields<'a, const N: usize>(
        line: usize,
        clean: &'a str,
        raw: &str
    ) -> Result<[&'a str; N], ParseError>
    {
        let fields: Vec<&str> = clean.split(',').map(str::trim).collect();

        let found = fields.len();

        fields.try_into().map_err(|_|
        {
            ParseError::FieldCount{line, expected: N, found, raw: raw.to_owned()}
        })
    }

    fn coordinate(line: usize, value: &str, raw: &str) -> Result<i32, ParseError>
    {
        value.parse().map_err(|_|
        {
            ParseError::Coordinate{line, value: value.to_owned(), raw: raw.to_owned()}
        })
    }

    fn role(&self, line: usize, value: &str, raw: &str) -> Result<Role, ParseError>
    {
        if let Some(role) = Role::from_tag(value)
        {
            return Ok(role);
        }

        if self.options.strict
        {
            return Err(ParseError::Role{line, value: value.to_owned(), raw: raw.to_owned()});
        }

        warn!("line {line}: unknown role {value:?}, treating it as {}", Role::Min);

        Ok(Role::Min)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const SCENARIO: &str = "tester
\\
MAX
\\
A
B
C
\\
A,B
B,C
\\
MAX,A,0,0,s1
MIN,B,1,1,s2
MAX,C,2,2,s3
";

    fn parse(text: &str) -> Result<GameRecord, ParseError>
    {
        GameRecord::parse(text.lines(), ParseOptions::default())
    }

    #[test]
    fn parses_all_sections()
    {
        let record = parse(SCENARIO).unwrap();

        assert_eq!(record.player_name, "tester");
        assert_eq!(record.player_role, Some(Role::Max));
        assert_eq!(record.vertices, ["A", "B", "C"]);
        assert_eq!(record.edges, [Edge::new("A", "B"), Edge::new("B", "C")]);
        assert_eq!(record.moves.len(), 3);

        assert_eq!(record.moves[1], Move{
            role: Role::Min,
            vertex: "B".to_owned(),
            x: 1,
            y: 1,
            strategy_label: "s2".to_owned()
        });
    }

    #[test]
    fn blank_lines_dont_count()
    {
        let text = "\n  tester \n\n\\\nMIN\n\\\n\nA\n   \nB\n\\\n\nA,B\n\n\\\nMIN,A,3,-4,x\n\n";

        let record = parse(text).unwrap();

        assert_eq!(record.player_name, "tester");
        assert_eq!(record.vertices, ["A", "B"]);
        assert_eq!(record.edges.len(), 1);
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.moves[0].position(), Point2{x: 3, y: -4});
    }

    #[test]
    fn last_single_value_wins()
    {
        let record = parse("first\nsecond\n\\\nMAX\nMIN\n").unwrap();

        assert_eq!(record.player_name, "second");
        assert_eq!(record.player_role, Some(Role::Min));
    }

    #[test]
    fn missing_strategy_is_format_error()
    {
        let text = SCENARIO.replace("MIN,B,1,1,s2", "MIN,B,1,1");

        let err = parse(&text).unwrap_err();

        assert!(matches!(err, ParseError::FieldCount{expected: 5, found: 4, ..}));
        assert_eq!(err.line(), 13);
        assert_eq!(err.raw(), "MIN,B,1,1");
    }

    #[test]
    fn bad_edge_is_format_error()
    {
        let text = SCENARIO.replace("B,C\n", "B,C,A\n");

        let err = parse(&text).unwrap_err();

        assert!(matches!(err, ParseError::FieldCount{expected: 2, found: 3, line: 10, ..}));
    }

    #[test]
    fn non_integer_coordinate()
    {
        let text = SCENARIO.replace("MAX,C,2,2,s3", "MAX,C,2.5,2,s3");

        let err = parse(&text).unwrap_err();

        assert!(matches!(err, ParseError::Coordinate{line: 14, ref value, ..} if value == "2.5"));
    }

    #[test]
    fn undeclared_vertex_is_lookup_error()
    {
        let text = SCENARIO.replace("MAX,C,2,2,s3", "MAX,D,2,2,s3");

        let err = parse(&text).unwrap_err();

        assert!(err.is_lookup());
        assert_eq!(err.line(), 14);
    }

    #[test]
    fn unknown_role_lenient_and_strict()
    {
        let text = SCENARIO.replace("MAX,C,2,2,s3", "max,C,2,2,s3");

        let record = parse(&text).unwrap();
        assert_eq!(record.moves[2].role, Role::Min);

        let err = GameRecord::parse(text.lines(), ParseOptions{strict: true}).unwrap_err();
        assert!(matches!(err, ParseError::Role{line: 14, ..}));
    }

    #[test]
    fn surplus_separator_drops_lines()
    {
        let text = format!("{SCENARIO}\\\nMAX,A,9,9,late\n");

        let record = parse(&text).unwrap();

        assert_eq!(record.moves.len(), 3);
    }

    #[test]
    fn empty_sections()
    {
        let record = parse("tester\n\\\nMAX\n").unwrap();

        assert!(record.vertices.is_empty());
        assert!(record.edges.is_empty());
        assert!(record.moves.is_empty());

        let record = parse("").unwrap();
        assert_eq!(record, GameRecord::default());
    }

    #[test]
    fn records_dont_share_containers()
    {
        let mut first = parse(SCENARIO).unwrap();
        let second = parse(SCENARIO).unwrap();

        first.vertices.push("Z".to_owned());

        assert_eq!(second.vertices.len(), 3);
    }

    #[test]
    fn strategy_usage_counts()
    {
        let text = SCENARIO.replace("s3", "s1");

        let usage = parse(&text).unwrap().strategy_usage();

        assert_eq!(usage, [
            StrategyUsage{role: Role::Max, strategy_label: "s1".to_owned(), moves: 2},
            StrategyUsage{role: Role::Min, strategy_label: "s2".to_owned(), moves: 1}
        ]);
    }

    #[test]
    fn dump_lists_every_section()
    {
        let expected = "Player Name: tester
Player Role: MAX
Vertices: A B C
Edges:
    A,B
    B,C
Game Moves:
       0 MAX,A,0,0,s1
       1 MIN,B,1,1,s2
       2 MAX,C,2,2,s3
Strategies:
    MAX s1: 1
    MIN s2: 1
    MAX s3: 1
";

        assert_eq!(parse(SCENARIO).unwrap().to_string(), expected);
    }

    #[test]
    fn dump_without_role()
    {
        let dump = GameRecord::default().to_string();

        assert!(dump.starts_with("Player Name: \nPlayer Role: -\nVertices: \n"));
    }

    #[test]
    fn edges_are_unordered()
    {
        assert_eq!(Edge::new("1", "2"), Edge::new("2", "1"));
        assert_ne!(Edge::new("1", "2"), Edge::new("1", "3"));
    }
}
