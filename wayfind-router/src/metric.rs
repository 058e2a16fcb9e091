//! Edge weight metric names.

use std::fmt;
use std::str::FromStr;

use crate::errors::RouterError;

/// Weight attribute used to evaluate path cost for a query.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Metric {
    Distance,
    Time,
}

impl Metric {
    /// The metric's name as it appears in snapshot edge weights.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = RouterError;

    /// An unknown metric name is an error, never treated as "distance".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Metric::Distance),
            "time" => Ok(Metric::Time),
            _ => Err(RouterError::InvalidMetric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_str() {
        assert_eq!("distance".parse(), Ok(Metric::Distance));
        assert_eq!("time".parse(), Ok(Metric::Time));

        let invalid_names = vec!["fuel_cost", "Distance", "TIME", "", " time"];
        for name in invalid_names {
            assert_eq!(name.parse::<Metric>(), Err(RouterError::InvalidMetric(name.to_string())));
        }
    }

    #[test]
    fn test_metric_display_round_trip() {
        for metric in vec![Metric::Distance, Metric::Time] {
            assert_eq!(metric.to_string().parse(), Ok(metric));
        }
    }
}
