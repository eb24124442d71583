use std::cmp::Ordering;
use std::fmt;

use crate::game::Game;

/// Per-game limits of progress tuples, fixed for the whole solve.
///
/// Components are addressed by *position* rather than priority. Position 0
/// holds the highest priority (rounded up to an even number) and priorities
/// descend from there, so a lexicographic scan from the front looks at the
/// most relevant priorities first. Priorities and positions share parity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    top_position: usize,
    max: Box<[usize]>,
}

impl Bounds {
    pub fn new(priorities: impl IntoIterator<Item = usize>) -> Self {
        let priorities = priorities.into_iter().collect::<Vec<_>>();
        let max_priority = priorities.iter().copied().max().unwrap_or(0);
        let top_position = max_priority + max_priority % 2;

        let mut max = vec![0; top_position + 1].into_boxed_slice();
        for p in priorities.into_iter().filter(|p| p % 2 == 1) {
            max[top_position - p] += 1;
        }

        Bounds { top_position, max }
    }

    pub fn for_game(game: &Game) -> Self {
        Self::new(game.priorities())
    }

    /// Length of every tuple of this game.
    pub fn len(&self) -> usize {
        self.max.len()
    }

    /// Tuple position of the component tracking `priority`.
    pub fn position(&self, priority: usize) -> usize {
        self.top_position - priority
    }

    /// Largest value the component at `position` may take. Zero at even positions.
    pub fn max_at(&self, position: usize) -> usize {
        self.max[position]
    }
}

/// A progress measure: a tuple of counters or the top element.
///
/// Only odd positions take part in comparisons; even positions are carried
/// along by range copies but otherwise ignored.
#[derive(Clone, Debug)]
pub struct ProgressTuple {
    values: Box<[usize]>,
    top: bool,
}

impl ProgressTuple {
    pub fn empty(bounds: &Bounds) -> Self {
        ProgressTuple { values: vec![0; bounds.len()].into_boxed_slice(), top: false }
    }

    pub fn top(bounds: &Bounds) -> Self {
        ProgressTuple { top: true, ..Self::empty(bounds) }
    }

    pub fn is_top(&self) -> bool {
        self.top
    }

    pub fn set_top(&mut self, top: bool) {
        self.top = top;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, position: usize) -> usize {
        self.values[position]
    }

    pub fn get_range(&self, start: usize, end: usize) -> &[usize] {
        &self.values[start..end]
    }

    /// # Panics
    ///
    /// Panics if `values` is not exactly `end - start` long.
    pub fn set_range(&mut self, start: usize, end: usize, values: &[usize]) {
        self.values[start..end].copy_from_slice(values);
    }

    /// Adds one at the odd `position`, carrying into the next more significant
    /// odd position on overflow. Overflowing position 1 yields top.
    pub fn increment(&mut self, position: usize, bounds: &Bounds) {
        debug_assert!(position % 2 == 1, "only odd positions are counters");

        if self.top {
            return;
        }

        let mut position = position;
        loop {
            if self.values[position] < bounds.max_at(position) {
                self.values[position] += 1;
                return;
            }

            self.values[position] = 0;
            if position < 2 {
                self.top = true;
                return;
            }
            position -= 2;
        }
    }

    pub fn odd_values(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied().skip(1).step_by(2)
    }

    /// Whether every odd component respects its bound (trivially true for top).
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.top || self.values.iter().enumerate().all(|(i, &n)| i % 2 == 0 || n <= bounds.max_at(i))
    }
}

impl Ord for ProgressTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.top, other.top) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Iterator::cmp(self.odd_values(), other.odd_values()),
        }
    }
}

impl PartialOrd for ProgressTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ProgressTuple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ProgressTuple {}

impl fmt::Display for ProgressTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top {
            return f.write_str("top");
        }

        f.write_str("(")?;
        for (i, n) in self.values.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str(")")
    }
}
