use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;

const NONE: usize = usize::MAX;

/// Computes a maximum-cardinality matching with Edmonds' blossom algorithm
///
/// Weights are ignored. Each pair `(u, v)` is returned once with `u < v`; no vertex
/// appears in more than one pair and every pair is an edge of `graph`.
pub fn maximum_matching<W, G>(graph: &G) -> BTreeSet<(usize, usize)>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let ids: Vec<usize> = graph.vertices().collect();
    let index: HashMap<usize, usize> = ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let adjacency: Vec<Vec<usize>> = ids
        .iter()
        .map(|&v| graph.neighbors(v).filter_map(|(u, _)| index.get(&u).copied()).collect())
        .collect();

    let mut blossom = Blossom::new(adjacency);
    blossom.seed_greedily();
    let seeded = blossom.size();
    blossom.augment_all();

    debug!(
        "maximum matching: {} pairs ({} from the greedy seed)",
        blossom.size(),
        seeded
    );

    blossom
        .mate
        .iter()
        .enumerate()
        .filter(|&(i, &m)| m != NONE && i < m)
        .map(|(i, &m)| {
            let (u, v) = (ids[i], ids[m]);
            (u.min(v), u.max(v))
        })
        .collect()
}

/// Working state of the blossom search over compact indices `0..n`
struct Blossom {
    adjacency: Vec<Vec<usize>>,
    mate: Vec<usize>,
    parent: Vec<usize>,
    base: Vec<usize>,
    used: Vec<bool>,
    in_blossom: Vec<bool>,
    queue: VecDeque<usize>,
}

impl Blossom {
    fn new(adjacency: Vec<Vec<usize>>) -> Self {
        let n = adjacency.len();
        Blossom {
            adjacency,
            mate: vec![NONE; n],
            parent: vec![NONE; n],
            base: (0..n).collect(),
            used: vec![false; n],
            in_blossom: vec![false; n],
            queue: VecDeque::new(),
        }
    }

    fn size(&self) -> usize {
        self.mate.iter().filter(|&&m| m != NONE).count() / 2
    }

    /// Maximal matching: match each free vertex with its first free neighbor
    fn seed_greedily(&mut self) {
        for u in 0..self.adjacency.len() {
            if self.mate[u] != NONE {
                continue;
            }
            if let Some(&v) = self.adjacency[u].iter().find(|&&v| self.mate[v] == NONE) {
                self.mate[u] = v;
                self.mate[v] = u;
            }
        }
    }

    /// Augments from every free vertex; no augmenting path remains afterwards
    fn augment_all(&mut self) {
        for root in 0..self.adjacency.len() {
            if self.mate[root] != NONE {
                continue;
            }
            if let Some(mut v) = self.find_augmenting_path(root) {
                // Flip matched and unmatched edges along the path back to root
                while v != NONE {
                    let pv = self.parent[v];
                    let next = self.mate[pv];
                    self.mate[v] = pv;
                    self.mate[pv] = v;
                    v = next;
                }
            }
        }
    }

    /// Lowest common ancestor of `a` and `b` in the alternating tree (by blossom base)
    fn lowest_common_ancestor(&self, mut a: usize, mut b: usize) -> usize {
        let mut seen = vec![false; self.adjacency.len()];
        loop {
            a = self.base[a];
            seen[a] = true;
            if self.mate[a] == NONE {
                break;
            }
            a = self.parent[self.mate[a]];
        }
        loop {
            b = self.base[b];
            if seen[b] {
                return b;
            }
            b = self.parent[self.mate[b]];
        }
    }

    fn mark_path(&mut self, mut v: usize, base: usize, mut child: usize) {
        while self.base[v] != base {
            self.in_blossom[self.base[v]] = true;
            self.in_blossom[self.base[self.mate[v]]] = true;
            self.parent[v] = child;
            child = self.mate[v];
            v = self.parent[self.mate[v]];
        }
    }

    /// Breadth-first search for an augmenting path from `root`, contracting odd cycles.
    /// Returns the free endpoint of the path.
    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let n = self.adjacency.len();
        self.used.iter_mut().for_each(|u| *u = false);
        self.parent.iter_mut().for_each(|p| *p = NONE);
        for (i, b) in self.base.iter_mut().enumerate() {
            *b = i;
        }

        self.used[root] = true;
        self.queue.clear();
        self.queue.push_back(root);

        while let Some(v) = self.queue.pop_front() {
            for k in 0..self.adjacency[v].len() {
                let to = self.adjacency[v][k];

                if self.base[v] == self.base[to] || self.mate[v] == to {
                    continue;
                }

                if to == root || (self.mate[to] != NONE && self.parent[self.mate[to]] != NONE) {
                    // Odd cycle: contract the blossom onto its base
                    let current_base = self.lowest_common_ancestor(v, to);
                    self.in_blossom.iter_mut().for_each(|b| *b = false);
                    self.mark_path(v, current_base, to);
                    self.mark_path(to, current_base, v);

                    for i in 0..n {
                        if self.in_blossom[self.base[i]] {
                            self.base[i] = current_base;
                            if !self.used[i] {
                                self.used[i] = true;
                                self.queue.push_back(i);
                            }
                        }
                    }
                } else if self.parent[to] == NONE {
                    self.parent[to] = v;
                    if self.mate[to] == NONE {
                        return Some(to);
                    }
                    let next = self.mate[to];
                    self.used[next] = true;
                    self.queue.push_back(next);
                }
            }
        }

        None
    }
}
