//! Portfolio statistics over saved plans and side-by-side plan comparison

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, Utc};
use serde::Serialize;

use crate::model::plan::DEFAULT_COST_PER_SQ_M;
use crate::model::{estimated_cost, FloorPlan, RoomType};

/// Upper bounds of the area buckets, in sq m; the last bucket is open-ended
const AREA_BUCKET_LIMITS: [f64; 4] = [100.0, 150.0, 200.0, 250.0];

/// Number of plans whose area falls in `[min, max)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaBucket {
    pub label: String,
    pub min: f64,
    /// `None` for the open-ended last bucket
    pub max: Option<f64>,
    pub count: usize,
}

/// Number of plans created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Aggregate figures over a set of plans
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_plans: usize,
    /// Rounded to whole square meters
    pub average_area: f64,
    /// Rounded to one decimal
    pub average_rooms: f64,
    pub total_cost: f64,
    pub room_types: BTreeMap<RoomType, usize>,
    pub styles: BTreeMap<String, usize>,
    pub area_buckets: Vec<AreaBucket>,
}

impl PortfolioSummary {
    pub fn from_plans(plans: &[FloorPlan]) -> Self {
        let total_plans = plans.len();
        let (average_area, average_rooms) = if total_plans == 0 {
            (0.0, 0.0)
        } else {
            let n = total_plans as f64;
            let area: f64 = plans.iter().map(|p| p.total_area).sum();
            let rooms: usize = plans.iter().map(|p| p.rooms.len()).sum();
            ((area / n).round(), (rooms as f64 / n * 10.0).round() / 10.0)
        };

        let mut room_types = BTreeMap::new();
        for room in plans.iter().flat_map(|p| &p.rooms) {
            *room_types.entry(room.room_type).or_insert(0) += 1;
        }

        let mut styles = BTreeMap::new();
        for plan in plans {
            *styles
                .entry(plan.metadata.style.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total_plans,
            average_area,
            average_rooms,
            total_cost: plans.iter().map(plan_cost).sum(),
            room_types,
            styles,
            area_buckets: area_buckets(plans),
        }
    }
}

/// Stated cost of a plan, or one derived from its area when none is stated
pub fn plan_cost(plan: &FloorPlan) -> f64 {
    if plan.metadata.estimated_cost > 0.0 {
        plan.metadata.estimated_cost
    } else {
        plan.total_area * DEFAULT_COST_PER_SQ_M
    }
}

fn area_buckets(plans: &[FloorPlan]) -> Vec<AreaBucket> {
    let mut bounds = vec![0.0];
    bounds.extend(AREA_BUCKET_LIMITS);

    bounds
        .iter()
        .enumerate()
        .map(|(i, &min)| {
            let max = AREA_BUCKET_LIMITS.get(i).copied();
            let label = match max {
                Some(max) if min == 0.0 => format!("< {} sq m", max),
                Some(max) => format!("{}-{} sq m", min, max),
                None => format!("> {} sq m", min),
            };
            let count = plans
                .iter()
                .filter(|p| p.total_area >= min && max.map_or(true, |m| p.total_area < m))
                .count();
            AreaBucket {
                label,
                min,
                max,
                count,
            }
        })
        .collect()
}

/// Plans created in each of the `months` calendar months ending with `now`'s, oldest first
pub fn monthly_trend(plans: &[FloorPlan], now: DateTime<Utc>, months: u32) -> Vec<MonthlyCount> {
    (0..months)
        .rev()
        .filter_map(|back| now.checked_sub_months(Months::new(back)))
        .map(|date| MonthlyCount {
            year: date.year(),
            month: date.month(),
            count: plans
                .iter()
                .filter(|p| p.created_at.year() == date.year() && p.created_at.month() == date.month())
                .count(),
        })
        .collect()
}

/// Room count of one type in both compared plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomCountPair {
    pub first: usize,
    pub second: usize,
}

/// Side-by-side comparison of two plans
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComparison {
    /// Only types present in at least one plan
    pub room_counts: BTreeMap<RoomType, RoomCountPair>,
    /// Second plan's area minus the first's
    pub area_delta: f64,
    /// Area-derived cost of each plan at the default rate
    pub costs: (f64, f64),
    pub cost_delta: f64,
    /// Features listed by both plans, in the first plan's order
    pub shared_features: Vec<String>,
}

impl PlanComparison {
    pub fn between(first: &FloorPlan, second: &FloorPlan) -> Self {
        let mut room_counts = BTreeMap::new();
        for room_type in RoomType::ALL {
            let pair = RoomCountPair {
                first: count_rooms(first, room_type),
                second: count_rooms(second, room_type),
            };
            if pair.first > 0 || pair.second > 0 {
                room_counts.insert(room_type, pair);
            }
        }

        let costs = (
            estimated_cost(first.total_area, DEFAULT_COST_PER_SQ_M),
            estimated_cost(second.total_area, DEFAULT_COST_PER_SQ_M),
        );

        let shared_features = first
            .metadata
            .features
            .iter()
            .filter(|f| second.metadata.features.contains(f))
            .cloned()
            .collect();

        Self {
            room_counts,
            area_delta: second.total_area - first.total_area,
            costs,
            cost_delta: costs.1 - costs.0,
            shared_features,
        }
    }
}

fn count_rooms(plan: &FloorPlan, room_type: RoomType) -> usize {
    plan.rooms.iter().filter(|r| r.room_type == room_type).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{fallback_plan, LayoutConfig};
    use crate::model::{PlanRequest, Style};
    use chrono::TimeZone;

    fn plan(width: f64, length: f64) -> FloorPlan {
        fallback_plan(&PlanRequest::new(width, length), &LayoutConfig::default())
    }

    #[test]
    fn test_empty_summary() {
        let summary = PortfolioSummary::from_plans(&[]);
        assert_eq!(summary.total_plans, 0);
        assert_eq!(summary.average_area, 0.0);
        assert_eq!(summary.total_cost, 0.0);
        assert!(summary.area_buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_summary_figures() {
        let plans = vec![plan(10.0, 10.0), plan(12.0, 15.0), plan(20.0, 15.0)];
        let summary = PortfolioSummary::from_plans(&plans);

        assert_eq!(summary.total_plans, 3);
        assert_eq!(summary.average_area, 193.0);
        assert_eq!(summary.average_rooms, 13.0);
        assert_eq!(summary.total_cost, 580.0 * 125_000.0);
        assert_eq!(summary.room_types[&RoomType::Bathroom], 9);
        assert_eq!(summary.styles["modern"], 3);

        let counts: Vec<_> = summary.area_buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 1, 1, 0, 1]);
        assert_eq!(summary.area_buckets[0].label, "< 100 sq m");
        assert_eq!(summary.area_buckets[1].label, "100-150 sq m");
        assert_eq!(summary.area_buckets[4].label, "> 250 sq m");
    }

    #[test]
    fn test_missing_cost_derived_from_area() {
        let mut p = plan(10.0, 10.0);
        p.metadata.estimated_cost = 0.0;
        assert_eq!(plan_cost(&p), 12_500_000.0);
        p.metadata.estimated_cost = 42.0;
        assert_eq!(plan_cost(&p), 42.0);
    }

    #[test]
    fn test_style_distribution() {
        let mut a = plan(10.0, 10.0);
        a.metadata.style = Style::Colonial;
        let summary = PortfolioSummary::from_plans(&[a, plan(10.0, 10.0)]);
        assert_eq!(summary.styles.len(), 2);
        assert_eq!(summary.styles["colonial"], 1);
    }

    #[test]
    fn test_monthly_trend() {
        let mut old = plan(10.0, 10.0);
        old.created_at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let mut recent = plan(10.0, 10.0);
        recent.created_at = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();

        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let trend = monthly_trend(&[old, recent], now, 3);
        let months: Vec<_> = trend.iter().map(|m| (m.month, m.count)).collect();
        assert_eq!(months, vec![(1, 1), (2, 0), (3, 1)]);
    }

    #[test]
    fn test_comparison() {
        let mut a = plan(10.0, 10.0);
        a.rooms.retain(|r| r.room_type != RoomType::Storage);
        a.metadata.features = vec!["pool".to_string(), "master suite".to_string()];
        let b = plan(12.0, 10.0);

        let cmp = PlanComparison::between(&a, &b);
        assert_eq!(cmp.area_delta, 20.0);
        assert_eq!(cmp.costs, (12_500_000.0, 15_000_000.0));
        assert_eq!(cmp.cost_delta, 2_500_000.0);
        assert_eq!(
            cmp.room_counts[&RoomType::Storage],
            RoomCountPair { first: 0, second: 1 }
        );
        assert_eq!(cmp.room_counts[&RoomType::Bedroom].first, 3);
        assert!(!cmp.room_counts.contains_key(&RoomType::Study));
        assert_eq!(cmp.shared_features, vec!["master suite".to_string()]);
    }
}
