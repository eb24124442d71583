use std::fmt;

use crate::index::{new_index, IndexedVec};
use crate::Set;

new_index!(pub index VertexId);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Even,
    Odd,
}

impl Player {
    /// The player favoured by a priority.
    pub fn of_priority(priority: usize) -> Player {
        match priority % 2 {
            0 => Player::Even,
            _ => Player::Odd,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Even => f.write_str("even"),
            Player::Odd => f.write_str("odd"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub name: Option<String>,
    pub priority: usize,
    pub owner: Player,
    successors: Set<VertexId>,
    // Back references only, used for reverse traversal.
    predecessors: Set<VertexId>,
    odd_self_loop: bool,
}

impl Vertex {
    fn new() -> Self {
        Vertex {
            name: None,
            priority: 0,
            owner: Player::Even,
            successors: Set::default(),
            predecessors: Set::default(),
            odd_self_loop: false,
        }
    }

    pub fn even_priority(&self) -> bool {
        self.priority % 2 == 0
    }

    /// Owned by odd, odd priority and an edge to itself: odd can loop forever.
    pub fn has_odd_self_loop(&self) -> bool {
        self.odd_self_loop
    }

    pub fn successors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.successors.iter().copied()
    }

    pub fn predecessors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.predecessors.iter().copied()
    }
}

/// A parity game whose topology is frozen. Built through [`GameBuilder`].
#[derive(Clone, Debug)]
pub struct Game {
    vertices: IndexedVec<VertexId, Vertex>,
    max_priority: usize,
}

impl Game {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(
        &self,
    ) -> impl Iterator<Item = VertexId> + DoubleEndedIterator + ExactSizeIterator + Clone {
        self.vertices.indexes()
    }

    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v]
    }

    pub fn priority_of(&self, v: VertexId) -> usize {
        self.vertices[v].priority
    }

    pub fn owner_of(&self, v: VertexId) -> Player {
        self.vertices[v].owner
    }

    pub fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v].successors()
    }

    pub fn predecessors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v].predecessors()
    }

    pub fn has_odd_self_loop(&self, v: VertexId) -> bool {
        self.vertices[v].has_odd_self_loop()
    }

    /// Highest priority of any vertex, 0 for a game without vertices.
    pub fn max_priority(&self) -> usize {
        self.max_priority
    }

    pub fn priorities(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().map(|v| v.priority)
    }

    pub fn label(&self, v: VertexId) -> Label<'_> {
        Label { id: v, name: self.vertices[v].name.as_deref() }
    }
}

/// Displays a vertex by name, falling back to its id.
#[derive(Clone, Copy, Debug)]
pub struct Label<'a> {
    id: VertexId,
    name: Option<&'a str>,
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

pub struct GameBuilder {
    vertices: IndexedVec<VertexId, Vertex>,
}

impl GameBuilder {
    /// Creates `vertex_count` vertices with priority 0, owned by even and without edges.
    pub fn new(vertex_count: usize) -> Self {
        GameBuilder { vertices: (0..vertex_count).map(|_| Vertex::new()).collect() }
    }

    /// Like [`GameBuilder::new`], but returns `None` instead of aborting when
    /// the vertices cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Option<Self> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(vertex_count).ok()?;
        vertices.extend((0..vertex_count).map(|_| Vertex::new()));
        Some(GameBuilder { vertices: vertices.into() })
    }

    pub fn set_vertex(
        &mut self,
        v: VertexId,
        priority: usize,
        owner: Player,
        name: Option<String>,
    ) -> &mut Self {
        let vertex = &mut self.vertices[v];
        vertex.priority = priority;
        vertex.owner = owner;
        vertex.name = name;
        self
    }

    /// Adds the edge `v -> w`, keeping successors and predecessors in sync.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> &mut Self {
        self.vertices[v].successors.insert(w);
        self.vertices[w].predecessors.insert(v);
        self
    }

    pub fn build(mut self) -> Game {
        for (v, vertex) in self.vertices.iter_mut().enumerate() {
            let v = VertexId(v);
            vertex.odd_self_loop = vertex.owner == Player::Odd
                && !vertex.even_priority()
                && vertex.successors.contains(&v);
        }

        let max_priority = self.vertices.iter().map(|v| v.priority).max().unwrap_or(0);

        Game { vertices: self.vertices, max_priority }
    }
}
