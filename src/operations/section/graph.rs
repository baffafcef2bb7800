use crate::error::SectionError;

/// Undirected multigraph over crossing-point indices.
///
/// Vertices are dense handles into a fixed arena of adjacency lists. Lists keep
/// insertion order, which makes trail extraction reproducible. Parallel edges
/// are kept as separate entries.
#[derive(Debug, Clone)]
pub struct CrossingGraph {
    adjacency: Vec<Vec<usize>>,
    /// Number of vertices with at least one incident edge.
    active: usize,
}

impl CrossingGraph {
    /// Creates a graph over vertices `0..vertex_count` with no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            active: 0,
        }
    }

    /// Total number of vertex slots, with or without edges.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of vertices that still have incident edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active
    }

    /// Returns `true` once every edge has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Number of edge endpoints at `vertex`. Out-of-range vertices have degree 0.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Inserts an undirected edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::VertexOutOfRange`] if either endpoint is not a
    /// vertex of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SectionError> {
        let size = self.adjacency.len();
        if let Some(vertex) = [u, v].into_iter().find(|&x| x >= size) {
            return Err(SectionError::VertexOutOfRange { vertex, size });
        }
        self.attach(u, v);
        self.attach(v, u);
        Ok(())
    }

    /// Removes one `u`-`v` edge. Returns `false` if there was none.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if u >= self.adjacency.len() || v >= self.adjacency.len() {
            return false;
        }
        if !self.detach(u, v) {
            return false;
        }
        self.detach(v, u);
        true
    }

    /// Removes and returns an Euler trail covering one connected component.
    ///
    /// The trail starts at the lowest-numbered odd-degree vertex if there is
    /// one, otherwise at the lowest-numbered vertex with edges. A closed
    /// component yields a trail whose first and last entries are equal.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::EmptyGraph`] if no edges remain, and
    /// [`SectionError::EulerTrailNotFound`] if the component holds more than
    /// two odd-degree vertices. The graph is unchanged on error.
    pub fn pop_euler_path(&mut self) -> Result<Vec<usize>, SectionError> {
        let start = self
            .first_vertex(|degree| degree % 2 == 1)
            .or_else(|| self.first_vertex(|degree| degree > 0))
            .ok_or(SectionError::EmptyGraph)?;

        let odd_vertices = self.component_odd_count(start);
        if odd_vertices > 2 {
            return Err(SectionError::EulerTrailNotFound { odd_vertices });
        }

        let mut stack = vec![start];
        let mut path = Vec::new();
        while let Some(&top) = stack.last() {
            if let Some(&next) = self.adjacency[top].last() {
                self.remove_edge(top, next);
                stack.push(next);
            } else {
                path.extend(stack.pop());
            }
        }
        path.reverse();
        Ok(path)
    }

    fn attach(&mut self, from: usize, to: usize) {
        let list = &mut self.adjacency[from];
        if list.is_empty() {
            self.active += 1;
        }
        list.push(to);
    }

    fn detach(&mut self, from: usize, to: usize) -> bool {
        let list = &mut self.adjacency[from];
        let Some(pos) = list.iter().rposition(|&n| n == to) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.active -= 1;
        }
        true
    }

    fn first_vertex(&self, pred: impl Fn(usize) -> bool) -> Option<usize> {
        self.adjacency.iter().position(|list| pred(list.len()))
    }

    fn component_odd_count(&self, start: usize) -> usize {
        let mut visited = vec![false; self.adjacency.len()];
        visited[start] = true;
        let mut pending = vec![start];
        let mut odd = 0;
        while let Some(v) = pending.pop() {
            if self.adjacency[v].len() % 2 == 1 {
                odd += 1;
            }
            for &n in &self.adjacency[v] {
                if !visited[n] {
                    visited[n] = true;
                    pending.push(n);
                }
            }
        }
        odd
    }
}
