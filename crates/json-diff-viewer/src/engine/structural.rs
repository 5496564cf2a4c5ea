//! Key- and sequence-aware diff over `serde_json::Value` trees.

use super::{DiffEngine, DiffError};
use crate::model::{ChangeKind, ContainerKind, DiffNode, DiffResult, DiffStats, PathSegment};
use serde_json::{Map, Value};

const DEFAULT_MAX_DEPTH: usize = 256;
/// Above this many cells the LCS table is skipped and arrays are paired by index.
const DEFAULT_LCS_CELL_LIMIT: usize = 1_000_000;

/// Default diff engine.
///
/// Objects are matched by key. Arrays are aligned by their longest common
/// subsequence; unmatched runs between aligned elements are paired by
/// position and compared recursively, leftovers become additions or
/// deletions.
#[derive(Debug, Clone)]
pub struct StructuralDiffEngine {
    max_depth: usize,
    lcs_cell_limit: usize,
}

impl Default for StructuralDiffEngine {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            lcs_cell_limit: DEFAULT_LCS_CELL_LIMIT,
        }
    }
}

impl StructuralDiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_lcs_cell_limit(mut self, limit: usize) -> Self {
        self.lcs_cell_limit = limit;
        self
    }

    fn diff_value(
        &self,
        segment: Option<PathSegment>,
        old: &Value,
        new: &Value,
        depth: usize,
        stats: &mut DiffStats,
    ) -> Result<DiffNode, DiffError> {
        if depth > self.max_depth {
            return Err(DiffError::TooDeep(self.max_depth));
        }

        match (old, new) {
            (Value::Object(a), Value::Object(b)) if !(a.is_empty() && b.is_empty()) => {
                let children = self.diff_objects(a, b, depth, stats)?;
                Ok(DiffNode::container(segment, ContainerKind::Object, children))
            }
            (Value::Array(a), Value::Array(b)) if !(a.is_empty() && b.is_empty()) => {
                let children = self.diff_arrays(a, b, depth, stats)?;
                Ok(DiffNode::container(segment, ContainerKind::Array, children))
            }
            _ => {
                let kind = if old == new {
                    ChangeKind::Unchanged
                } else {
                    ChangeKind::Modified
                };
                stats.record(kind);
                Ok(DiffNode::leaf(
                    segment,
                    kind,
                    Some(old.clone()),
                    Some(new.clone()),
                ))
            }
        }
    }

    fn diff_objects(
        &self,
        old: &Map<String, Value>,
        new: &Map<String, Value>,
        depth: usize,
        stats: &mut DiffStats,
    ) -> Result<Vec<DiffNode>, DiffError> {
        let mut children = Vec::with_capacity(old.len().max(new.len()));

        for (key, old_value) in old {
            let segment = Some(PathSegment::Key(key.clone()));
            match new.get(key) {
                Some(new_value) => {
                    children.push(self.diff_value(segment, old_value, new_value, depth + 1, stats)?)
                }
                None => children.push(one_sided(segment, ChangeKind::Deleted, old_value, stats)),
            }
        }

        for (key, new_value) in new.iter().filter(|(key, _)| !old.contains_key(*key)) {
            let segment = Some(PathSegment::Key(key.clone()));
            children.push(one_sided(segment, ChangeKind::Added, new_value, stats));
        }

        Ok(children)
    }

    fn diff_arrays(
        &self,
        old: &[Value],
        new: &[Value],
        depth: usize,
        stats: &mut DiffStats,
    ) -> Result<Vec<DiffNode>, DiffError> {
        let ops = if old.len().saturating_mul(new.len()) > self.lcs_cell_limit {
            pair_by_index(old.len(), new.len())
        } else {
            pair_runs(lcs_alignment(old, new))
        };

        let mut children = Vec::with_capacity(ops.len());
        for op in ops {
            let child = match op {
                ArrayOp::Pair(i, j) => self.diff_value(
                    Some(PathSegment::Index(j)),
                    &old[i],
                    &new[j],
                    depth + 1,
                    stats,
                )?,
                ArrayOp::Delete(i) => one_sided(
                    Some(PathSegment::Index(i)),
                    ChangeKind::Deleted,
                    &old[i],
                    stats,
                ),
                ArrayOp::Insert(j) => one_sided(
                    Some(PathSegment::Index(j)),
                    ChangeKind::Added,
                    &new[j],
                    stats,
                ),
            };
            children.push(child);
        }
        Ok(children)
    }
}

impl DiffEngine for StructuralDiffEngine {
    fn diff(&self, before: &Value, after: &Value) -> Result<DiffResult, DiffError> {
        let mut stats = DiffStats::default();
        let tree = self.diff_value(None, before, after, 0, &mut stats)?;
        Ok(DiffResult { stats, tree })
    }
}

/// A subtree that exists on one side only counts as a single change.
fn one_sided(
    segment: Option<PathSegment>,
    kind: ChangeKind,
    value: &Value,
    stats: &mut DiffStats,
) -> DiffNode {
    stats.record(kind);
    match kind {
        ChangeKind::Deleted => DiffNode::leaf(segment, kind, Some(value.clone()), None),
        _ => DiffNode::leaf(segment, kind, None, Some(value.clone())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayOp {
    /// Compare `old[i]` against `new[j]`.
    Pair(usize, usize),
    Delete(usize),
    Insert(usize),
}

fn pair_by_index(old_len: usize, new_len: usize) -> Vec<ArrayOp> {
    (0..old_len.max(new_len))
        .map(|k| match (k < old_len, k < new_len) {
            (true, true) => ArrayOp::Pair(k, k),
            (true, false) => ArrayOp::Delete(k),
            _ => ArrayOp::Insert(k),
        })
        .collect()
}

/// Align two sequences by longest common subsequence. Matched elements come
/// out as `Pair`, everything else as `Delete`/`Insert`, deletions first
/// within each gap.
fn lcs_alignment(old: &[Value], new: &[Value]) -> Vec<ArrayOp> {
    let (n, m) = (old.len(), new.len());
    // table[i][j] = LCS length of old[i..] and new[j..]
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if old[i] == new[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            ops.push(ArrayOp::Pair(i, j));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            ops.push(ArrayOp::Delete(i));
            i += 1;
        } else {
            ops.push(ArrayOp::Insert(j));
            j += 1;
        }
    }
    ops.extend((i..n).map(ArrayOp::Delete));
    ops.extend((j..m).map(ArrayOp::Insert));
    ops
}

/// Within each gap between matched elements, pair deletions with insertions
/// positionally so that a changed element reads as a modification.
fn pair_runs(ops: Vec<ArrayOp>) -> Vec<ArrayOp> {
    let mut out = Vec::with_capacity(ops.len());
    let mut deletes = Vec::new();
    let mut inserts = Vec::new();

    let flush = |deletes: &mut Vec<usize>, inserts: &mut Vec<usize>, out: &mut Vec<ArrayOp>| {
        let paired = deletes.len().min(inserts.len());
        for k in 0..paired {
            out.push(ArrayOp::Pair(deletes[k], inserts[k]));
        }
        out.extend(deletes.drain(..).skip(paired).map(ArrayOp::Delete));
        out.extend(inserts.drain(..).skip(paired).map(ArrayOp::Insert));
    };

    for op in ops {
        match op {
            ArrayOp::Delete(i) => deletes.push(i),
            ArrayOp::Insert(j) => inserts.push(j),
            pair @ ArrayOp::Pair(..) => {
                flush(&mut deletes, &mut inserts, &mut out);
                out.push(pair);
            }
        }
    }
    flush(&mut deletes, &mut inserts, &mut out);
    out
}
