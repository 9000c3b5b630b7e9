//! Same-day overlap resolution.
//!
//! Blocks sharing a day column and a time span are narrowed and placed side
//! by side. Two grouping rules are available:
//!
//! - `Clustered` (default): connected components of the interval-overlap
//!   graph; each component is split evenly across the day column.
//! - `Anchored`: the legacy rule. Each block, in start order, groups itself
//!   with every later block starting before its bottom edge, and every group
//!   narrows its members and shifts them right by their index in the group.
//!   Groups are not merged and shifts accumulate, so cascading or three-way
//!   overlaps can produce asymmetric splits.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

use super::types::{CourseBlock, LayoutConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapStrategy {
    #[default]
    Clustered,
    Anchored,
}

impl FromStr for OverlapStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anchored" => Ok(Self::Anchored),
            "clustered" => Ok(Self::Clustered),
            other => Err(format!(
                "unknown overlap strategy '{other}'; use anchored or clustered"
            )),
        }
    }
}

/// Resolve overlaps per day and return blocks ordered by day, then start.
pub fn resolve_overlaps(
    blocks: Vec<CourseBlock>,
    config: &LayoutConfig,
    strategy: OverlapStrategy,
) -> Vec<CourseBlock> {
    let mut by_day: BTreeMap<usize, Vec<CourseBlock>> = BTreeMap::new();
    for block in blocks {
        by_day.entry(block.column).or_default().push(block);
    }

    let mut out = Vec::new();
    for (_, mut day_blocks) in by_day {
        day_blocks.sort_by(start_order);
        match strategy {
            OverlapStrategy::Clustered => {
                for group in clustered_groups(&day_blocks) {
                    split_group(&mut day_blocks, &group, config, Shift::FromColumn);
                }
            }
            OverlapStrategy::Anchored => {
                for group in anchored_groups(&day_blocks) {
                    split_group(&mut day_blocks, &group, config, Shift::Accumulate);
                }
            }
        }
        out.extend(day_blocks);
    }
    out
}

/// Ascending top; ties by course id so input order never matters.
fn start_order(a: &CourseBlock, b: &CourseBlock) -> Ordering {
    a.top
        .total_cmp(&b.top)
        .then_with(|| a.course.id.cmp(&b.course.id))
}

/// Groups anchored at each block, in anchor order. Singletons are omitted.
fn anchored_groups(sorted: &[CourseBlock]) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    for (i, anchor) in sorted.iter().enumerate() {
        let mut group = vec![i];
        group.extend(
            sorted
                .iter()
                .enumerate()
                .skip(i + 1)
                .filter(|(_, next)| next.top < anchor.bottom())
                .map(|(j, _)| j),
        );
        if group.len() > 1 {
            groups.push(group);
        }
    }
    groups
}

/// Connected components of the overlap graph. Singletons are omitted.
fn clustered_groups(sorted: &[CourseBlock]) -> Vec<Vec<usize>> {
    let mut uf: UnionFind<usize> = UnionFind::new(sorted.len());
    for (i, a) in sorted.iter().enumerate() {
        // Sorted by top, so once a later block starts below a's bottom, all do.
        for (j, b) in sorted.iter().enumerate().skip(i + 1) {
            if b.top >= a.bottom() {
                break;
            }
            uf.union(i, j);
        }
    }

    let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..sorted.len() {
        components.entry(uf.find(i)).or_default().push(i);
    }

    let mut groups: Vec<Vec<usize>> = components
        .into_values()
        .filter(|members| members.len() > 1)
        .collect();
    groups.sort_by_key(|members| members[0]);
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    /// Place member k at the column edge plus k shares.
    FromColumn,
    /// Add k shares to wherever the member already is.
    Accumulate,
}

fn split_group(blocks: &mut [CourseBlock], group: &[usize], config: &LayoutConfig, shift: Shift) {
    let share = config.lane_width() / group.len() as f64;
    for (k, &idx) in group.iter().enumerate() {
        let block = &mut blocks[idx];
        block.width = share - config.block_padding;
        let offset = k as f64 * share;
        block.left = match shift {
            Shift::FromColumn => config.column_left(block.column) + offset,
            Shift::Accumulate => block.left + offset,
        };
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_overlap.rs"]
mod tests;
