//! # Algo Collections
//!
//! Two classic abstract data types for algorithm implementers: a double-ended
//! queue backed by a growable circular buffer, and a priority queue backed by
//! a binary heap.
//!
//! This crate provides `RingDeque` and `PriorityQueue`, tuned for the access
//! patterns of graph traversal, sliding-window, and shortest-path style
//! algorithms: amortized O(1) pushes and pops at both deque ends, and
//! O(log n) heap insertion and extraction.
//!
//! ## Key Features
//!
//! * **Wraparound storage:** `RingDeque` addresses a fixed slot buffer with
//!   modular index arithmetic, doubling the buffer only when an insertion
//!   would exceed it.
//! * **Pluggable ordering:** `PriorityQueue` takes any comparator — the
//!   built-in `MinFirst`/`MaxFirst` orders or an arbitrary closure — so one
//!   type covers min-heaps, max-heaps, and by-key orderings.
//! * **Beyond-std heap surface:** arbitrary-value `remove`, root `replace`,
//!   `push_pop`, bulk `heapify`, and non-mutating `merge`, none of which
//!   `std::collections::BinaryHeap` offers.
//! * **Role aliases:** stack (`push`/`pop`/`peek`), queue
//!   (`enqueue`/`dequeue`), and array (`shift`/`unshift`) vocabularies on the
//!   deque, so pseudocode ports line by line.
//! * **Sentinel-free absence:** every empty or out-of-range query returns
//!   `Option`; the only fatal failure in the crate is a zero capacity request
//!   at deque construction.
//!
//! ## Examples
//!
//! ### Breadth-first search with `RingDeque`
//!
//! ```rust
//! use algo_collections::RingDeque;
//!
//! let adjacency = vec![vec![1, 2], vec![3], vec![3], vec![]];
//! let mut visited = vec![false; adjacency.len()];
//! let mut queue = RingDeque::new();
//!
//! queue.enqueue(0usize);
//! visited[0] = true;
//!
//! let mut order = Vec::new();
//! while let Some(node) = queue.dequeue() {
//!     order.push(node);
//!     for &next in &adjacency[node] {
//!         if !visited[next] {
//!             visited[next] = true;
//!             queue.enqueue(next);
//!         }
//!     }
//! }
//!
//! assert_eq!(order, vec![0, 1, 2, 3]);
//! ```
//!
//! ### Shortest-path frontier with `PriorityQueue`
//!
//! ```rust
//! use algo_collections::PriorityQueue;
//!
//! // (tentative distance, node), extracted nearest-first
//! let mut frontier = PriorityQueue::by(|a: &(u32, usize), b: &(u32, usize)| a.0.cmp(&b.0));
//!
//! frontier.push((7, 2));
//! frontier.push((2, 1));
//! frontier.push((4, 3));
//!
//! assert_eq!(frontier.pop(), Some((2, 1)));
//! assert_eq!(frontier.pop(), Some((4, 3)));
//! ```
//!
//! ### Min and max heaps
//!
//! ```rust
//! use algo_collections::PriorityQueue;
//!
//! let mut min = PriorityQueue::min();
//! min.push(5);
//! min.push(1);
//! assert_eq!(min.pop(), Some(1));
//!
//! let mut max = PriorityQueue::max();
//! max.push(5);
//! max.push(1);
//! assert_eq!(max.pop(), Some(5));
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod heap;

// --- Re-exports ---

pub use deque::{CapacityError, MIN_CAPACITY, RingDeque};
pub use heap::{Compare, FnCompare, MaxFirst, MinFirst, PriorityQueue};
