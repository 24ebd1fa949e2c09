//! Interview problem catalog.
//!
//! A fixed pool of coding problems is built at startup; each session draws
//! one at random and keeps it for the session's lifetime. The
//! `expected_approach` field is interviewer-side guidance and is never
//! surfaced to the candidate verbatim.

use rand::Rng;
use std::fmt;

/// Difficulty tier shown to the candidate next to the problem name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single interview problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: &'static str,
    pub difficulty: Difficulty,
    /// Statement read to (and shown to) the candidate.
    pub description: &'static str,
    /// Reference solution sketch. Guides hints only; never revealed.
    pub expected_approach: &'static str,
}

/// The pool of problems available for random per-session selection.
pub struct ProblemCatalog {
    problems: Vec<Problem>,
}

impl ProblemCatalog {
    /// Builds the built-in problem pool.
    pub fn builtin() -> Self {
        Self {
            problems: vec![
                Problem {
                    name: "Two Sum",
                    difficulty: Difficulty::Easy,
                    description: "Given an array of integers and a target sum, find two numbers that add up to the target. Return their indices.",
                    expected_approach: "Use a hash map to store seen numbers. For each element, check if (target - current) exists.",
                },
                Problem {
                    name: "Valid Parentheses",
                    difficulty: Difficulty::Easy,
                    description: "Given a string containing just '(', ')', '{', '}', '[' and ']', determine if the input string has valid bracket matching.",
                    expected_approach: "Use a stack. Push opening brackets, pop on closing and verify match. Stack should be empty at end.",
                },
                Problem {
                    name: "Maximum Subarray",
                    difficulty: Difficulty::Medium,
                    description: "Find the contiguous subarray with the largest sum. This is known as Kadane's algorithm.",
                    expected_approach: "Kadane's algorithm: maintain currentSum and maxSum. At each element, currentSum = max(element, currentSum + element).",
                },
                Problem {
                    name: "Merge Intervals",
                    difficulty: Difficulty::Medium,
                    description: "Given a list of intervals, merge all overlapping intervals and return the merged list.",
                    expected_approach: "Sort intervals by start. Walk the sorted list, extending the current interval while the next one overlaps, otherwise emit and restart.",
                },
                Problem {
                    name: "Trapping Rain Water",
                    difficulty: Difficulty::Hard,
                    description: "Given an elevation map as an array of non-negative heights, compute how much water it can trap after raining.",
                    expected_approach: "Two pointers from both ends tracking leftMax and rightMax. Water at each index is min(leftMax, rightMax) minus its height.",
                },
            ],
        }
    }

    /// Number of problems in the pool.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Draws one problem uniformly at random.
    pub fn choose(&self) -> &Problem {
        let idx = rand::rng().random_range(0..self.problems.len());
        &self.problems[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = ProblemCatalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn builtin_catalog_covers_all_difficulty_tiers() {
        let catalog = ProblemCatalog::builtin();
        for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(
                catalog.problems.iter().any(|p| p.difficulty == tier),
                "no {tier} problem in the pool"
            );
        }
    }

    #[test]
    fn choose_returns_a_pool_member() {
        let catalog = ProblemCatalog::builtin();
        for _ in 0..20 {
            let picked = catalog.choose();
            assert!(catalog.problems.iter().any(|p| p.name == picked.name));
        }
    }

    #[test]
    fn difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
