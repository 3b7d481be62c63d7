//! Role insight extractor.
//!
//! Pure functions that slice a [`BusinessData`] snapshot into role-scoped
//! projections and derived metrics. Nothing here performs I/O or mutates
//! its input; every role in [`ExecutiveRole`] has a projection, so there is
//! no "unknown role" failure path.

use serde::{Deserialize, Serialize};

use crate::agent::ExecutiveRole;
use crate::data::{BusinessData, DepartmentDistribution, FinancialData, HrData, MarketingData,
    StrategicData, TechnologyData};

/// Metrics that can be projected as a per-year series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Revenue,
    Profit,
    Employees,
    MarketShare,
    CustomerSatisfaction,
}

/// One point of a per-year metric series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Year-over-year growth for one year, in percent, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearGrowth {
    pub year: i32,
    pub growth: f64,
}

/// Extracts a metric as a per-year series.
pub fn metric_series(data: &BusinessData, metric: Metric) -> Vec<YearValue> {
    match metric {
        Metric::Revenue => data
            .financial_data
            .iter()
            .map(|d| YearValue { year: d.year, value: d.revenue })
            .collect(),
        Metric::Profit => data
            .financial_data
            .iter()
            .map(|d| YearValue { year: d.year, value: d.profit })
            .collect(),
        Metric::Employees => data
            .hr_data
            .iter()
            .map(|d| YearValue { year: d.year, value: d.total_employees as f64 })
            .collect(),
        Metric::MarketShare => data
            .marketing_data
            .iter()
            .map(|d| YearValue { year: d.year, value: d.market_share })
            .collect(),
        Metric::CustomerSatisfaction => data
            .strategic_data
            .iter()
            .map(|d| YearValue { year: d.year, value: d.customer_satisfaction })
            .collect(),
    }
}

/// Year-over-year growth for a metric: `(curr - prev) / prev * 100`,
/// rounded to 2 decimals. The first year has no defined growth and is
/// absent from the output.
pub fn yoy_growth(data: &BusinessData, metric: Metric) -> Vec<YearGrowth> {
    let series = metric_series(data, metric);
    series
        .windows(2)
        .map(|pair| {
            let growth = (pair[1].value - pair[0].value) / pair[0].value * 100.0;
            YearGrowth {
                year: pair[1].year,
                growth: (growth * 100.0).round() / 100.0,
            }
        })
        .collect()
}

/// The most recent year's slice of each dataset category.
#[derive(Debug, Clone, Copy)]
pub struct CurrentYearSnapshot<'a> {
    pub year: i32,
    pub financial: Option<&'a FinancialData>,
    pub hr: Option<&'a HrData>,
    pub technology: Option<&'a TechnologyData>,
    pub marketing: Option<&'a MarketingData>,
    pub strategic: Option<&'a StrategicData>,
}

/// Returns the latest year's data across all categories.
///
/// The latest year is taken from the financial series; categories missing
/// that year come back as `None`.
pub fn current_year(data: &BusinessData) -> CurrentYearSnapshot<'_> {
    let year = data
        .financial_data
        .iter()
        .map(|d| d.year)
        .max()
        .unwrap_or(0);
    CurrentYearSnapshot {
        year,
        financial: data.financial_data.iter().find(|d| d.year == year),
        hr: data.hr_data.iter().find(|d| d.year == year),
        technology: data.technology_data.iter().find(|d| d.year == year),
        marketing: data.marketing_data.iter().find(|d| d.year == year),
        strategic: data.strategic_data.iter().find(|d| d.year == year),
    }
}

/// CEO view: growth, margin, market position, strategic agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeoInsights {
    pub company_overview: String,
    pub revenue_growth: Option<YearGrowth>,
    /// Percent
    pub profit_margin: f64,
    pub market_share_growth: Option<YearGrowth>,
    pub customer_satisfaction: Option<f64>,
    pub strategic_focus: Vec<String>,
    pub challenges: Vec<String>,
    pub opportunities: Vec<String>,
}

/// CFO view: margins, cash, budget allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfoInsights {
    pub financial_summary: String,
    /// Percent
    pub profit_margin: f64,
    pub cash_flow: f64,
    /// Percent
    pub roi: f64,
    pub marketing_budget: f64,
    pub rnd_budget: f64,
    pub infrastructure_cost: f64,
    pub financial_challenges: Vec<String>,
    pub investment_priorities: Vec<String>,
}

/// CTO view: stack, velocity, reliability, project pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtoInsights {
    pub technology_summary: String,
    pub development_velocity: u32,
    pub technical_debt: u8,
    pub security_incidents: u32,
    pub uptime: f64,
    pub completed_projects: Vec<String>,
    pub planned_projects: Vec<String>,
    pub tech_challenges: Vec<String>,
}

/// HR view: headcount, attrition, satisfaction, initiatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrInsights {
    pub workforce_summary: String,
    /// Percent
    pub attrition_rate: f64,
    pub employee_satisfaction: f64,
    pub average_salary: f64,
    pub training_budget: f64,
    pub team_distribution: Option<DepartmentDistribution>,
    pub hr_challenges: Vec<String>,
    pub talent_initiatives: Vec<String>,
}

/// A role-scoped insight projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoleInsights {
    Ceo(CeoInsights),
    Cfo(CfoInsights),
    Cto(CtoInsights),
    Hr(HrInsights),
}

fn millions(v: f64) -> f64 {
    v / 1_000_000.0
}

fn profit_margin(financial: Option<&FinancialData>) -> f64 {
    let profit = financial.map(|f| f.profit).unwrap_or(0.0);
    let revenue = financial.map(|f| f.revenue).unwrap_or(1.0).max(1.0);
    profit / revenue * 100.0
}

/// Builds the role-scoped insight projection used to ground an agent's
/// generated text.
pub fn role_insights(role: ExecutiveRole, data: &BusinessData) -> RoleInsights {
    let now = current_year(data);
    match role {
        ExecutiveRole::Ceo => {
            let employees = now.hr.map(|h| h.total_employees).unwrap_or(0);
            let revenue = now.financial.map(|f| f.revenue).unwrap_or(0.0);
            RoleInsights::Ceo(CeoInsights {
                company_overview: format!(
                    "{} has grown to {} employees with annual revenue of ${:.1}M in {}.",
                    data.company_name,
                    employees,
                    millions(revenue),
                    now.year
                ),
                revenue_growth: yoy_growth(data, Metric::Revenue).last().copied(),
                profit_margin: profit_margin(now.financial),
                market_share_growth: yoy_growth(data, Metric::MarketShare).last().copied(),
                customer_satisfaction: now.strategic.map(|s| s.customer_satisfaction),
                strategic_focus: now
                    .strategic
                    .map(|s| s.strategic_initiatives.clone())
                    .unwrap_or_default(),
                challenges: now
                    .strategic
                    .map(|s| s.market_threats.clone())
                    .unwrap_or_default(),
                opportunities: now
                    .strategic
                    .map(|s| s.market_opportunities.clone())
                    .unwrap_or_default(),
            })
        }
        ExecutiveRole::Cfo => {
            let revenue = now.financial.map(|f| f.revenue).unwrap_or(0.0);
            let profit = now.financial.map(|f| f.profit).unwrap_or(0.0);
            let latest_growth = yoy_growth(data, Metric::Revenue)
                .last()
                .map(|g| g.growth)
                .unwrap_or(0.0);
            RoleInsights::Cfo(CfoInsights {
                financial_summary: format!(
                    "In {}, we achieved ${:.1}M in revenue with a profit of ${:.1}M.",
                    now.year,
                    millions(revenue),
                    millions(profit)
                ),
                profit_margin: profit_margin(now.financial),
                cash_flow: now.financial.map(|f| f.cash_flow).unwrap_or(0.0),
                roi: now.financial.map(|f| f.roi * 100.0).unwrap_or(0.0),
                marketing_budget: now.financial.map(|f| f.marketing_budget).unwrap_or(0.0),
                rnd_budget: now.financial.map(|f| f.rnd_budget).unwrap_or(0.0),
                infrastructure_cost: now
                    .technology
                    .map(|t| t.infrastructure_cost)
                    .unwrap_or(0.0),
                financial_challenges: vec![
                    if latest_growth < 30.0 {
                        "Revenue growth is slowing down".to_string()
                    } else {
                        "Maintaining high growth rate".to_string()
                    },
                    "Balancing investments and profitability".to_string(),
                    "Managing cash flow with rapid expansion".to_string(),
                ],
                investment_priorities: vec![
                    "Technology infrastructure".to_string(),
                    "Product development".to_string(),
                    "Talent acquisition".to_string(),
                ],
            })
        }
        ExecutiveRole::Cto => {
            let stack = now
                .technology
                .map(|t| t.tech_stack.join(", "))
                .unwrap_or_default();
            let engineers = now
                .hr
                .map(|h| h.department_distribution.engineering)
                .unwrap_or(0);
            let debt = now.technology.map(|t| t.technical_debt).unwrap_or(0);
            RoleInsights::Cto(CtoInsights {
                technology_summary: format!(
                    "Our tech stack includes {stack} with {engineers} engineers."
                ),
                development_velocity: now
                    .technology
                    .map(|t| t.development_velocity)
                    .unwrap_or(0),
                technical_debt: debt,
                security_incidents: now
                    .technology
                    .map(|t| t.security_incidents)
                    .unwrap_or(0),
                uptime: now.technology.map(|t| t.uptime).unwrap_or(0.0),
                completed_projects: now
                    .technology
                    .map(|t| t.completed_projects.clone())
                    .unwrap_or_default(),
                planned_projects: now
                    .technology
                    .map(|t| t.planned_projects.clone())
                    .unwrap_or_default(),
                tech_challenges: vec![
                    "Scaling architecture for growing user base".to_string(),
                    "Balancing new features vs. technical debt".to_string(),
                    "Recruiting specialized talent".to_string(),
                    if debt > 6 {
                        "High technical debt needs addressing".to_string()
                    } else {
                        "Maintaining code quality".to_string()
                    },
                ],
            })
        }
        ExecutiveRole::Hr => {
            let total = now.hr.map(|h| h.total_employees).unwrap_or(0);
            let new_hires = now.hr.map(|h| h.new_hires).unwrap_or(0);
            let attrition = now.hr.map(|h| h.attrition_rate).unwrap_or(0.0);
            RoleInsights::Hr(HrInsights {
                workforce_summary: format!(
                    "We currently have {} employees with {} new hires in {}.",
                    total, new_hires, now.year
                ),
                attrition_rate: attrition * 100.0,
                employee_satisfaction: now
                    .hr
                    .map(|h| h.employee_satisfaction)
                    .unwrap_or(0.0),
                average_salary: now.hr.map(|h| h.average_salary).unwrap_or(0.0),
                training_budget: now.hr.map(|h| h.training_budget).unwrap_or(0.0),
                team_distribution: now.hr.map(|h| h.department_distribution.clone()),
                hr_challenges: vec![
                    "Hiring pace to meet growth targets".to_string(),
                    if attrition > 0.1 {
                        "Higher than ideal attrition rate".to_string()
                    } else {
                        "Maintaining low attrition".to_string()
                    },
                    "Competitive compensation in tech market".to_string(),
                    "Building culture with remote/hybrid work".to_string(),
                ],
                talent_initiatives: vec![
                    "Leadership development program".to_string(),
                    "Engineering excellence workshops".to_string(),
                    "Diversity and inclusion initiatives".to_string(),
                    "Work-life balance improvements".to_string(),
                ],
            })
        }
    }
}

/// A labeled per-year series a role may cite in discussion.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub label: &'static str,
    pub points: Vec<YearValue>,
}

/// The raw data slices a role has access to.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleProjection {
    pub series: Vec<NamedSeries>,
}

/// Projects the per-year series relevant to a role.
pub fn role_projection(role: ExecutiveRole, data: &BusinessData) -> RoleProjection {
    let series = match role {
        ExecutiveRole::Ceo => vec![
            NamedSeries { label: "revenue", points: metric_series(data, Metric::Revenue) },
            NamedSeries { label: "profit", points: metric_series(data, Metric::Profit) },
            NamedSeries { label: "employees", points: metric_series(data, Metric::Employees) },
            NamedSeries {
                label: "market share (%)",
                points: metric_series(data, Metric::MarketShare),
            },
            NamedSeries {
                label: "customer satisfaction",
                points: metric_series(data, Metric::CustomerSatisfaction),
            },
        ],
        ExecutiveRole::Cfo => vec![
            NamedSeries { label: "revenue", points: metric_series(data, Metric::Revenue) },
            NamedSeries {
                label: "roi (%)",
                points: data
                    .financial_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.roi * 100.0 })
                    .collect(),
            },
            NamedSeries {
                label: "marketing budget",
                points: data
                    .financial_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.marketing_budget })
                    .collect(),
            },
            NamedSeries {
                label: "r&d budget",
                points: data
                    .financial_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.rnd_budget })
                    .collect(),
            },
            NamedSeries {
                label: "infrastructure cost",
                points: data
                    .technology_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.infrastructure_cost })
                    .collect(),
            },
        ],
        ExecutiveRole::Cto => vec![
            NamedSeries {
                label: "r&d budget",
                points: data
                    .financial_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.rnd_budget })
                    .collect(),
            },
            NamedSeries {
                label: "engineering headcount",
                points: data
                    .hr_data
                    .iter()
                    .map(|d| YearValue {
                        year: d.year,
                        value: d.department_distribution.engineering as f64,
                    })
                    .collect(),
            },
            NamedSeries {
                label: "development velocity",
                points: data
                    .technology_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.development_velocity as f64 })
                    .collect(),
            },
            NamedSeries {
                label: "uptime (%)",
                points: data
                    .technology_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.uptime })
                    .collect(),
            },
        ],
        ExecutiveRole::Hr => vec![
            NamedSeries { label: "employees", points: metric_series(data, Metric::Employees) },
            NamedSeries {
                label: "average salary",
                points: data
                    .hr_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.average_salary })
                    .collect(),
            },
            NamedSeries {
                label: "training budget",
                points: data
                    .hr_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.training_budget })
                    .collect(),
            },
            NamedSeries {
                label: "employee satisfaction",
                points: data
                    .hr_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.employee_satisfaction })
                    .collect(),
            },
            NamedSeries {
                label: "attrition (%)",
                points: data
                    .hr_data
                    .iter()
                    .map(|d| YearValue { year: d.year, value: d.attrition_rate * 100.0 })
                    .collect(),
            },
        ],
    };
    RoleProjection { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_business_data;

    #[test]
    fn yoy_growth_rounds_to_two_decimals() {
        let data = sample_business_data();
        let growth = yoy_growth(&data, Metric::Revenue);
        // (4.2M - 2.5M) / 2.5M * 100 = 68.00
        assert_eq!(growth[0].year, 2021);
        assert_eq!(growth[0].growth, 68.00);
    }

    #[test]
    fn first_year_has_no_growth_entry() {
        let data = sample_business_data();
        let growth = yoy_growth(&data, Metric::Revenue);
        assert_eq!(growth.len(), data.financial_data.len() - 1);
        assert!(growth.iter().all(|g| g.year != 2020));
    }

    #[test]
    fn current_year_picks_the_latest_slice() {
        let data = sample_business_data();
        let now = current_year(&data);
        assert_eq!(now.year, 2023);
        assert_eq!(now.hr.unwrap().total_employees, 103);
        assert_eq!(now.technology.unwrap().security_incidents, 0);
    }

    #[test]
    fn ceo_insights_summarize_the_company() {
        let data = sample_business_data();
        let RoleInsights::Ceo(insights) = role_insights(ExecutiveRole::Ceo, &data) else {
            panic!("expected CEO insights");
        };
        assert!(insights.company_overview.contains("TechNova Solutions"));
        assert!(insights.company_overview.contains("103 employees"));
        assert!((insights.profit_margin - 30.0).abs() < 0.01);
        assert_eq!(insights.customer_satisfaction, Some(8.9));
    }

    #[test]
    fn cto_challenges_track_technical_debt() {
        let data = sample_business_data();
        let RoleInsights::Cto(insights) = role_insights(ExecutiveRole::Cto, &data) else {
            panic!("expected CTO insights");
        };
        // latest year's debt is 5, below the threshold
        assert!(insights
            .tech_challenges
            .iter()
            .any(|c| c == "Maintaining code quality"));

        let mut high_debt = data.clone();
        high_debt.technology_data.last_mut().unwrap().technical_debt = 8;
        let RoleInsights::Cto(insights) = role_insights(ExecutiveRole::Cto, &high_debt) else {
            panic!("expected CTO insights");
        };
        assert!(insights
            .tech_challenges
            .iter()
            .any(|c| c == "High technical debt needs addressing"));
    }

    #[test]
    fn hr_insights_flag_attrition_above_ten_percent() {
        let mut data = sample_business_data();
        data.hr_data.last_mut().unwrap().attrition_rate = 0.14;
        let RoleInsights::Hr(insights) = role_insights(ExecutiveRole::Hr, &data) else {
            panic!("expected HR insights");
        };
        assert!((insights.attrition_rate - 14.0).abs() < 1e-9);
        assert!(insights
            .hr_challenges
            .iter()
            .any(|c| c == "Higher than ideal attrition rate"));
    }

    #[test]
    fn every_role_gets_a_projection_with_series() {
        let data = sample_business_data();
        for role in [
            ExecutiveRole::Ceo,
            ExecutiveRole::Cto,
            ExecutiveRole::Cfo,
            ExecutiveRole::Hr,
        ] {
            let projection = role_projection(role, &data);
            assert!(!projection.series.is_empty());
            assert!(projection.series.iter().all(|s| !s.points.is_empty()));
        }
    }
}
