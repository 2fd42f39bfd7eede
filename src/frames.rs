use std::{
    mem,
    collections::{HashMap, HashSet}
};

use tracing::{debug, warn};

use crate::{Color, ColorAlpha, Edge, GameRecord, Point2, Role};


pub const MAX_COLOR: Color = Color{r: 255, g: 0, b: 0};
pub const MIN_COLOR: Color = Color{r: 0, g: 0, b: 255};

/// translucent so overlapping vertices stay readable
pub const ROLE_ALPHA: f32 = 0.4;

pub fn role_color(role: Role) -> ColorAlpha
{
    let color = match role
    {
        Role::Max => MAX_COLOR,
        Role::Min => MIN_COLOR
    };

    ColorAlpha::new(color, ROLE_ALPHA)
}

/// state of the board right after one move
#[derive(Debug, Clone, PartialEq)]
pub struct Frame
{
    pub index: usize,
    pub placed_vertices: Vec<String>,
    pub positions: HashMap<String, Point2<i32>>,
    pub resolved_edges: Vec<Edge>,
    pub vertex_colors: HashMap<String, ColorAlpha>
}

pub fn build_frames(record: &GameRecord) -> Vec<Frame>
{
    FrameSequencer::new(record).collect()
}

/// yields one owned `Frame` per move, in move order
pub struct FrameSequencer<'a>
{
    record: &'a GameRecord,
    next_move: usize,
    placed: Vec<String>,
    placed_set: HashSet<String>,
    positions: HashMap<String, Point2<i32>>,
    vertex_colors: HashMap<String, ColorAlpha>,
    remaining: Vec<Edge>,
    resolved: Vec<Edge>
}

impl<'a> FrameSequencer<'a>
{
    pub fn new(record: &'a GameRecord) -> Self
    {
        Self{
            record,
            next_move: 0,
            placed: Vec::new(),
            placed_set: HashSet::new(),
            positions: HashMap::new(),
            vertex_colors: HashMap::new(),
            remaining: record.edges.clone(),
            resolved: Vec::new()
        }
    }

    fn place(&mut self, index: usize)
    {
        let m = &self.record.moves[index];

        if !self.placed_set.insert(m.vertex.clone())
        {
            warn!("move {index}: vertex {} was already placed, keeping its first placement", m.vertex);
            return;
        }

        self.placed.push(m.vertex.clone());
        self.positions.insert(m.vertex.clone(), m.position());
        self.vertex_colors.insert(m.vertex.clone(), role_color(m.role));

        let placed_set = &self.placed_set;
        let (now_resolved, still_remaining): (Vec<Edge>, Vec<Edge>) = mem::take(&mut self.remaining)
            .into_iter()
            .partition(|edge| placed_set.contains(&edge.a) && placed_set.contains(&edge.b));

        if !now_resolved.is_empty()
        {
            debug!("move {index}: {} edges resolved", now_resolved.len());
        }

        self.remaining = still_remaining;
        self.resolved.extend(now_resolved);
    }
}

impl Iterator for FrameSequencer<'_>
{
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item>
    {
        let index = self.next_move;

        if index >= self.record.moves.len()
        {
            return None;
        }

        self.next_move += 1;
        self.place(index);

        Some(Frame{
            index,
            placed_vertices: self.placed.clone(),
            positions: self.positions.clone(),
            resolved_edges: self.resolved.clone(),
            vertex_colors: self.vertex_colors.clone()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let left = self.record.moves.len() - self.next_move;

        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameSequencer<'_> {}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{Move, ParseOptions};

    fn scenario() -> GameRecord
    {
        let m = |role, vertex: &str, x, y, strategy: &str|
        {
            Move{
                role,
                vertex: vertex.to_owned(),
                x,
                y,
                strategy_label: strategy.to_owned()
            }
        };

        GameRecord{
            player_name: "tester".to_owned(),
            player_role: Some(Role::Max),
            vertices: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            edges: vec![Edge::new("A", "B"), Edge::new("B", "C")],
            moves: vec![
                m(Role::Max, "A", 0, 0, "s1"),
                m(Role::Min, "B", 1, 1, "s2"),
                m(Role::Max, "C", 2, 2, "s3")
            ]
        }
    }

    #[test]
    fn scenario_frames()
    {
        let frames = build_frames(&scenario());

        assert_eq!(frames.len(), 3);

        assert_eq!(frames[0].placed_vertices, ["A"]);
        assert!(frames[0].resolved_edges.is_empty());

        assert_eq!(frames[1].placed_vertices, ["A", "B"]);
        assert_eq!(frames[1].resolved_edges, [Edge::new("A", "B")]);

        assert_eq!(frames[2].placed_vertices, ["A", "B", "C"]);
        assert_eq!(frames[2].resolved_edges, [Edge::new("A", "B"), Edge::new("B", "C")]);

        assert_eq!(frames[2].positions["C"], Point2{x: 2, y: 2});
        assert!(frames.iter().enumerate().all(|(i, frame)| frame.index == i));
    }

    #[test]
    fn frames_grow_monotonically()
    {
        let mut record = scenario();
        record.vertices.push("D".to_owned());
        record.edges.insert(0, Edge::new("C", "D"));
        record.edges.push(Edge::new("D", "A"));
        record.edges.push(Edge::new("A", "Z"));
        record.moves.push(Move{
            role: Role::Min,
            vertex: "D".to_owned(),
            x: -1,
            y: 5,
            strategy_label: "s4".to_owned()
        });

        let frames = build_frames(&record);

        for pair in frames.windows(2)
        {
            let (before, after) = (&pair[0], &pair[1]);

            assert!(after.placed_vertices.starts_with(&before.placed_vertices));
            assert!(after.resolved_edges.starts_with(&before.resolved_edges));
        }

        for frame in &frames
        {
            for edge in &record.edges
            {
                let placed = |v: &String| frame.placed_vertices.contains(v);

                assert_eq!(
                    frame.resolved_edges.contains(edge),
                    placed(&edge.a) && placed(&edge.b)
                );
            }

            for vertex in &frame.placed_vertices
            {
                assert!(frame.positions.contains_key(vertex));
                assert!(frame.vertex_colors.contains_key(vertex));
            }
        }

        // declaration order among edges resolved by the same move
        assert_eq!(frames[3].resolved_edges[2..], [Edge::new("C", "D"), Edge::new("D", "A")]);
    }

    #[test]
    fn colors_follow_the_placing_role()
    {
        let frames = build_frames(&scenario());

        let last = frames.last().unwrap();

        assert_eq!(last.vertex_colors["A"], role_color(Role::Max));
        assert_eq!(last.vertex_colors["B"], role_color(Role::Min));
        assert_eq!(last.vertex_colors["A"].color, MAX_COLOR);
        assert_eq!(last.vertex_colors["B"].color, MIN_COLOR);
        assert!(last.vertex_colors["A"].a < 1.0);
    }

    #[test]
    fn repeated_placement_keeps_first()
    {
        let mut record = scenario();
        record.moves.push(Move{
            role: Role::Min,
            vertex: "A".to_owned(),
            x: 9,
            y: 9,
            strategy_label: "again".to_owned()
        });

        let frames = build_frames(&record);

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].placed_vertices, frames[2].placed_vertices);
        assert_eq!(frames[3].positions["A"], Point2{x: 0, y: 0});
        assert_eq!(frames[3].vertex_colors["A"], role_color(Role::Max));
    }

    #[test]
    fn earlier_frames_stay_untouched()
    {
        let record = scenario();

        let mut sequencer = FrameSequencer::new(&record);
        let first = sequencer.next().unwrap();
        let snapshot = first.clone();

        assert_eq!(sequencer.len(), 2);
        sequencer.for_each(drop);

        assert_eq!(first, snapshot);
        assert_eq!(first.placed_vertices, ["A"]);
    }

    #[test]
    fn no_moves_no_frames()
    {
        let record = GameRecord::parse("tester\n\\\nMIN\n".lines(), ParseOptions::default()).unwrap();

        assert!(build_frames(&record).is_empty());
    }
}
