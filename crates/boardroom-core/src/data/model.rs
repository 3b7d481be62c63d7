//! Business dataset model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub year: i32,
    pub revenue: f64,
    pub profit: f64,
    pub expenses: f64,
    pub cash_flow: f64,
    pub investment_budget: f64,
    pub marketing_budget: f64,
    pub rnd_budget: f64,
    /// Return on investment as a fraction (0.18 = 18%)
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDistribution {
    pub engineering: u32,
    pub marketing: u32,
    pub sales: u32,
    pub support: u32,
    pub administration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrData {
    pub year: i32,
    pub total_employees: u32,
    pub new_hires: u32,
    /// Fraction of staff lost over the year (0.10 = 10%)
    pub attrition_rate: f64,
    pub average_salary: f64,
    pub training_budget: f64,
    /// 1-10 scale
    pub employee_satisfaction: f64,
    /// Fraction of staff working remotely
    #[serde(default)]
    pub remote_percentage: f64,
    pub department_distribution: DepartmentDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyData {
    pub year: i32,
    pub tech_stack: Vec<String>,
    pub infrastructure_cost: f64,
    /// Story points per sprint
    pub development_velocity: u32,
    /// 1-10 scale
    pub technical_debt: u8,
    pub security_incidents: u32,
    /// Percentage
    pub uptime: f64,
    pub planned_projects: Vec<String>,
    pub completed_projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPerformance {
    /// ROI multiplier per channel
    pub social: f64,
    pub search: f64,
    pub email: f64,
    pub content: f64,
    pub partnerships: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingData {
    pub year: i32,
    pub customer_acquisition_cost: f64,
    /// Percentage
    pub conversion_rate: f64,
    /// Percentage
    pub market_share: f64,
    /// 1-10 scale
    pub brand_awareness: f64,
    pub active_marketing_campaigns: Vec<String>,
    pub channel_performance: ChannelPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicData {
    pub year: i32,
    pub business_milestones: Vec<String>,
    pub strategic_initiatives: Vec<String>,
    pub market_threats: Vec<String>,
    pub market_opportunities: Vec<String>,
    pub competitor_movements: Vec<String>,
    /// 1-10 scale
    pub customer_satisfaction: f64,
    pub product_roadmap: Vec<String>,
}

/// The full company dataset: one record per category per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    pub company_name: String,
    pub industry: String,
    pub founding_year: i32,
    pub mission: String,
    pub vision: String,
    pub financial_data: Vec<FinancialData>,
    pub hr_data: Vec<HrData>,
    pub technology_data: Vec<TechnologyData>,
    pub marketing_data: Vec<MarketingData>,
    pub strategic_data: Vec<StrategicData>,
}
