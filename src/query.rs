use std::{cmp::Ordering, fmt::Display};
use nom::{
    sequence::tuple,
    character::complete::{u32 as nomU32, space1, space0, alpha1},
    branch::alt, bytes::complete::{tag, tag_no_case}, multi::many1, combinator::recognize, IResult
};

use crate::{errors::QueryError, maze::Maze};

/// One or more clauses joined by '&'. A seed matches when every clause does.
#[derive(Clone, Debug)]
pub struct Query {
    pub clauses: Vec<QueryClause>,
}

impl Query {
    pub fn matches(&self, seed: f64) -> bool {
        self.clauses.iter().all(|clause| clause.matches(seed))
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            write!(f, "{}", clause)?;
            if i != self.clauses.len() - 1 {
                write!(f, " & ")?;
            }
        }
        Ok(())
    }
}

/// A maze size plus a condition on one of the generated maze's metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryClause {
    pub width: usize,
    pub height: usize,
    pub metric: Metric,
    pub relationship: Ordering,
    pub amount: usize,
}

impl QueryClause {
    pub fn matches(&self, seed: f64) -> bool {
        let maze = Maze::generate(self.width, self.height, Some(seed));
        self.matches_maze(&maze)
    }

    /// Checks the condition against an already-generated maze. The maze's
    /// dimensions are not compared.
    pub fn matches_maze(&self, maze: &Maze) -> bool {
        self.metric.measure(maze).cmp(&self.amount) == self.relationship
    }
}

impl Display for QueryClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order_char = match self.relationship {
            Ordering::Less => '<',
            Ordering::Equal => '=',
            Ordering::Greater => '>',
        };
        write!(f, "{}x{} {} {} {}", self.width, self.height, self.metric, order_char, self.amount)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Number of cells on the path from the entrance to the exit.
    PathLength,
    DeadEnds,
    Junctions,
}

impl Metric {
    pub fn measure(&self, maze: &Maze) -> usize {
        match self {
            Metric::PathLength => maze.solve().len(),
            Metric::DeadEnds => maze.dead_ends(),
            Metric::Junctions => maze.junctions(),
        }
    }
}

impl TryFrom<&str> for Metric {
    type Error = QueryError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "path" | "pathlength" => Ok(Metric::PathLength),
            "deadends" => Ok(Metric::DeadEnds),
            "junctions" => Ok(Metric::Junctions),
            _ => Err(QueryError::UnrecognizedMetric(value.to_string())),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::PathLength => write!(f, "path"),
            Metric::DeadEnds => write!(f, "deadends"),
            Metric::Junctions => write!(f, "junctions"),
        }
    }
}

/// Parse a query string, usually passed in by the CLI. Example:
/// "10x10 path > 40 & 10x10 deadends < 12"
impl TryFrom<&str> for Query {
    type Error = QueryError;
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut remaining_text = input;
        let mut clauses = Vec::new();
        loop {
            let (rest, (width, height, metric, relationship_char, amount)) = clause(remaining_text)?;
            let (width, height) = (width as usize, height as usize);
            if width == 0 || height == 0 {
                return Err(QueryError::InvalidDimensions(width, height));
            }
            let relationship = match relationship_char {
                "<" => Ordering::Less,
                "=" => Ordering::Equal,
                _ => Ordering::Greater,
            };
            clauses.push(QueryClause {
                width,
                height,
                metric: Metric::try_from(metric)?,
                relationship,
                amount: amount as usize,
            });

            if rest.is_empty() {
                break;
            }
            let (rest, _) = clause_separator(rest)?;
            remaining_text = rest;
        }
        Ok(Query { clauses })
    }
}

fn clause(input: &str) -> IResult<&str, (u32, u32, &str, &str, u32)> {
    let (rest, (_, width, _, height, _, metric, _, relationship_char, _, amount, _)) = tuple((
        space0,
        nomU32,
        tag_no_case("x"),
        nomU32,
        space1,
        recognize(many1(alt((alpha1, tag("_"), tag("-"))))),
        space0,
        alt((tag("<"), tag("="), tag(">"))),
        space0,
        nomU32,
        space0,
    ))(input)?;
    Ok((rest, (width, height, metric, relationship_char, amount)))
}

fn clause_separator(input: &str) -> IResult<&str, &str> {
    let (rest, (_, sep, _)) = tuple((space0, tag("&"), space0))(input)?;
    Ok((rest, sep))
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;
    use crate::{errors::QueryError, maze::Maze};
    use super::{Metric, Query, QueryClause};

    #[test]
    fn test_parse_single_clause() {
        let query = Query::try_from("10x10 path > 40").unwrap();
        assert_eq!(query.clauses, vec![QueryClause {
            width: 10, height: 10, metric: Metric::PathLength, relationship: Ordering::Greater, amount: 40,
        }]);
        assert_eq!(query.to_string(), "10x10 path > 40");
    }

    #[test]
    fn test_parse_multiple_clauses() {
        let query = Query::try_from(" 8X6 dead_ends<5 &4x4 junctions = 2 ").unwrap();
        assert_eq!(query.clauses.len(), 2);
        assert_eq!(query.clauses[0].metric, Metric::DeadEnds);
        assert_eq!((query.clauses[0].width, query.clauses[0].height), (8, 6));
        assert_eq!(query.clauses[1].relationship, Ordering::Equal);
        assert_eq!(query.to_string(), "8x6 deadends < 5 & 4x4 junctions = 2");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Query::try_from("10x10 walls > 3"), Err(QueryError::UnrecognizedMetric(_))));
        assert!(matches!(Query::try_from("0x10 path > 3"), Err(QueryError::InvalidDimensions(0, 10))));
        assert!(matches!(Query::try_from("10x10 path >"), Err(QueryError::ParseError(_))));
        assert!(matches!(Query::try_from("path > 3"), Err(QueryError::ParseError(_))));
        assert!(matches!(Query::try_from("10x10 path > 3 |"), Err(QueryError::ParseError(_))));
    }

    #[test]
    fn test_matches() {
        // 3x3 seed 0: path of 5 cells, 3 dead ends, 1 junction.
        assert!(Query::try_from("3x3 path = 5").unwrap().matches(0.0));
        assert!(Query::try_from("3x3 path > 4 & 3x3 deadends = 3").unwrap().matches(0.0));
        assert!(!Query::try_from("3x3 path > 4 & 3x3 junctions > 1").unwrap().matches(0.0));

        // A 1xN corridor always has a path through every cell.
        let corridor = Query::try_from("1x9 path = 9").unwrap();
        for seed in [0.0, 1.0, 2.5, 1000.0] {
            assert!(corridor.matches(seed));
        }
    }

    #[test]
    fn test_metric_measure() {
        let maze = Maze::generate(3, 3, Some(0.0));
        assert_eq!(Metric::PathLength.measure(&maze), 5);
        assert_eq!(Metric::DeadEnds.measure(&maze), 3);
        assert_eq!(Metric::Junctions.measure(&maze), 1);
    }
}
