//! Plain-text solution report.

use std::fmt;

use crate::models::Solution;

/// Display adapter rendering a [`Solution`] for terminals and logs.
///
/// # Examples
///
/// ```
/// use u_postman::io::SolutionReport;
/// use u_postman::models::Graph;
/// use u_postman::solver::Solver;
///
/// let mut g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "A", 2.0)]).unwrap();
/// let sol = Solver::default().solve(&mut g, &"A".into()).unwrap();
/// let text = SolutionReport::new(&sol).to_string();
/// assert!(text.contains("Total Cost: 3"));
/// assert!(text.contains("Route: A -> B -> A"));
/// ```
pub struct SolutionReport<'a> {
    solution: &'a Solution,
}

impl<'a> SolutionReport<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sol = self.solution;
        writeln!(f, "Chinese Postman Problem Solution:")?;
        writeln!(f, "{}", "-".repeat(33))?;
        writeln!(f, "Algorithm: {}", sol.algorithm())?;
        writeln!(f, "Total Cost: {}", sol.total_cost())?;
        writeln!(f, "Steps: {}", sol.num_steps())?;
        if !sol.balancing().is_empty() {
            writeln!(
                f,
                "Balancing: {} paths, cost {}",
                sol.balancing().len(),
                sol.balancing_cost()
            )?;
            for bp in sol.balancing() {
                writeln!(f, "  {} -> {} ({})", bp.from, bp.to, bp.cost())?;
            }
        }
        write!(f, "Route: {}", sol.route_ids().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalancingPath, PathResult, VertexId};
    use crate::shortest_path::PathAlgorithm;

    #[test]
    fn test_report_layout() {
        let route: Vec<VertexId> = ["A", "B", "C", "B", "A"].into_iter().map(VertexId::from).collect();
        let balancing = vec![BalancingPath::new(
            "A".into(),
            "C".into(),
            PathResult::new(vec!["A".into(), "B".into(), "C".into()], 2.0),
        )];
        let sol = Solution::new(PathAlgorithm::DijkstraScan, route, 4.0, balancing);
        let text = SolutionReport::new(&sol).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Chinese Postman Problem Solution:");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "Algorithm: Dijkstra-List");
        assert_eq!(lines[3], "Total Cost: 4");
        assert_eq!(lines[4], "Steps: 4");
        assert_eq!(lines[5], "Balancing: 1 paths, cost 2");
        assert_eq!(lines[6], "  A -> C (2)");
        assert_eq!(lines[7], "Route: A -> B -> C -> B -> A");
    }

    #[test]
    fn test_report_without_balancing() {
        let sol = Solution::new(
            PathAlgorithm::DijkstraHeap,
            vec!["A".into(), "B".into(), "A".into()],
            2.0,
            Vec::new(),
        );
        let text = SolutionReport::new(&sol).to_string();
        assert!(!text.contains("Balancing"));
        assert!(text.ends_with("Route: A -> B -> A"));
    }
}
