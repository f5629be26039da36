/// Disjoint-set forest over `0..size` with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Returns the representative of `x`, pointing every node on the way
    /// directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_detects_cycles() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(1, 3));
        // 0-1-3-2 are now one set, so closing the loop must fail
        assert!(!uf.union(0, 2));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_find_compresses_paths() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        uf.union(4, 0);
        let root = uf.find(3);
        assert!((0..5).all(|x| uf.find(x) == root));
        assert!((0..5).all(|x| uf.parent[x] == root));
    }

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(3);
        assert_eq!(uf.find(2), 2);
        assert_ne!(uf.find(0), uf.find(1));
    }
}
