//! Bundled sample dataset: TechNova Solutions, 2020-2023.

use super::model::*;

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

/// Returns the bundled TechNova Solutions sample dataset.
pub fn sample_business_data() -> BusinessData {
    BusinessData {
        company_name: "TechNova Solutions".to_string(),
        industry: "Software & Cloud Services".to_string(),
        founding_year: 2018,
        mission: "To transform business operations through accessible cloud technology"
            .to_string(),
        vision: "Creating a world where every business can harness the power of AI and cloud \
                 computing"
            .to_string(),
        financial_data: vec![
            FinancialData {
                year: 2020,
                revenue: 2_500_000.0,
                profit: 375_000.0,
                expenses: 2_125_000.0,
                cash_flow: 450_000.0,
                investment_budget: 300_000.0,
                marketing_budget: 250_000.0,
                rnd_budget: 500_000.0,
                roi: 0.18,
            },
            FinancialData {
                year: 2021,
                revenue: 4_200_000.0,
                profit: 840_000.0,
                expenses: 3_360_000.0,
                cash_flow: 920_000.0,
                investment_budget: 600_000.0,
                marketing_budget: 420_000.0,
                rnd_budget: 800_000.0,
                roi: 0.24,
            },
            FinancialData {
                year: 2022,
                revenue: 7_300_000.0,
                profit: 1_825_000.0,
                expenses: 5_475_000.0,
                cash_flow: 1_950_000.0,
                investment_budget: 1_000_000.0,
                marketing_budget: 730_000.0,
                rnd_budget: 1_400_000.0,
                roi: 0.31,
            },
            FinancialData {
                year: 2023,
                revenue: 12_500_000.0,
                profit: 3_750_000.0,
                expenses: 8_750_000.0,
                cash_flow: 4_100_000.0,
                investment_budget: 2_000_000.0,
                marketing_budget: 1_250_000.0,
                rnd_budget: 2_500_000.0,
                roi: 0.35,
            },
        ],
        hr_data: vec![
            HrData {
                year: 2020,
                total_employees: 28,
                new_hires: 12,
                attrition_rate: 0.10,
                average_salary: 85_000.0,
                training_budget: 42_000.0,
                employee_satisfaction: 7.2,
                remote_percentage: 0.25,
                department_distribution: DepartmentDistribution {
                    engineering: 16,
                    marketing: 4,
                    sales: 5,
                    support: 2,
                    administration: 1,
                },
            },
            HrData {
                year: 2021,
                total_employees: 47,
                new_hires: 22,
                attrition_rate: 0.08,
                average_salary: 88_000.0,
                training_budget: 94_000.0,
                employee_satisfaction: 7.6,
                remote_percentage: 0.35,
                department_distribution: DepartmentDistribution {
                    engineering: 28,
                    marketing: 7,
                    sales: 8,
                    support: 3,
                    administration: 1,
                },
            },
            HrData {
                year: 2022,
                total_employees: 72,
                new_hires: 31,
                attrition_rate: 0.12,
                average_salary: 92_000.0,
                training_budget: 180_000.0,
                employee_satisfaction: 7.1,
                remote_percentage: 0.55,
                department_distribution: DepartmentDistribution {
                    engineering: 42,
                    marketing: 10,
                    sales: 12,
                    support: 6,
                    administration: 2,
                },
            },
            HrData {
                year: 2023,
                total_employees: 103,
                new_hires: 40,
                attrition_rate: 0.09,
                average_salary: 95_000.0,
                training_budget: 257_500.0,
                employee_satisfaction: 7.8,
                remote_percentage: 0.65,
                department_distribution: DepartmentDistribution {
                    engineering: 58,
                    marketing: 15,
                    sales: 18,
                    support: 9,
                    administration: 3,
                },
            },
        ],
        technology_data: vec![
            TechnologyData {
                year: 2020,
                tech_stack: s(&["React", "Node.js", "PostgreSQL", "AWS"]),
                infrastructure_cost: 180_000.0,
                development_velocity: 45,
                technical_debt: 4,
                security_incidents: 1,
                uptime: 99.5,
                planned_projects: s(&["Mobile App v1", "API Gateway", "Dashboard Redesign"]),
                completed_projects: s(&["Core Platform", "Customer Portal"]),
            },
            TechnologyData {
                year: 2021,
                tech_stack: s(&["React", "Node.js", "PostgreSQL", "AWS", "Redis", "Docker"]),
                infrastructure_cost: 310_000.0,
                development_velocity: 65,
                technical_debt: 5,
                security_incidents: 2,
                uptime: 99.7,
                planned_projects: s(&[
                    "AI Recommendation Engine",
                    "Microservices Migration",
                    "Mobile App v2",
                ]),
                completed_projects: s(&["Mobile App v1", "API Gateway", "Dashboard Redesign"]),
            },
            TechnologyData {
                year: 2022,
                tech_stack: s(&[
                    "React",
                    "Node.js",
                    "PostgreSQL",
                    "AWS",
                    "Redis",
                    "Docker",
                    "Kubernetes",
                    "TensorFlow",
                ]),
                infrastructure_cost: 580_000.0,
                development_velocity: 85,
                technical_debt: 7,
                security_incidents: 1,
                uptime: 99.8,
                planned_projects: s(&[
                    "Global CDN",
                    "Blockchain Integration",
                    "Real-time Analytics",
                ]),
                completed_projects: s(&[
                    "AI Recommendation Engine",
                    "Microservices Migration",
                    "Mobile App v2",
                ]),
            },
            TechnologyData {
                year: 2023,
                tech_stack: s(&[
                    "React",
                    "Node.js",
                    "PostgreSQL",
                    "AWS",
                    "Redis",
                    "Docker",
                    "Kubernetes",
                    "TensorFlow",
                    "GraphQL",
                    "Kafka",
                ]),
                infrastructure_cost: 920_000.0,
                development_velocity: 110,
                technical_debt: 5,
                security_incidents: 0,
                uptime: 99.95,
                planned_projects: s(&[
                    "Edge Computing Solution",
                    "ML Platform v2",
                    "IoT Integration",
                ]),
                completed_projects: s(&[
                    "Global CDN",
                    "Blockchain Integration",
                    "Real-time Analytics",
                ]),
            },
        ],
        marketing_data: vec![
            MarketingData {
                year: 2020,
                customer_acquisition_cost: 420.0,
                conversion_rate: 1.8,
                market_share: 2.3,
                brand_awareness: 4.0,
                active_marketing_campaigns: s(&["Product Launch", "Content Marketing"]),
                channel_performance: ChannelPerformance {
                    social: 1.2,
                    search: 2.1,
                    email: 2.4,
                    content: 1.8,
                    partnerships: 1.5,
                },
            },
            MarketingData {
                year: 2021,
                customer_acquisition_cost: 380.0,
                conversion_rate: 2.4,
                market_share: 3.7,
                brand_awareness: 5.5,
                active_marketing_campaigns: s(&[
                    "Cloud Migration",
                    "Industry Webinars",
                    "PPC Campaign",
                ]),
                channel_performance: ChannelPerformance {
                    social: 1.7,
                    search: 2.3,
                    email: 2.2,
                    content: 2.5,
                    partnerships: 1.9,
                },
            },
            MarketingData {
                year: 2022,
                customer_acquisition_cost: 340.0,
                conversion_rate: 3.2,
                market_share: 5.4,
                brand_awareness: 6.8,
                active_marketing_campaigns: s(&[
                    "AI Solutions",
                    "Customer Success Stories",
                    "Partner Program",
                ]),
                channel_performance: ChannelPerformance {
                    social: 2.1,
                    search: 2.6,
                    email: 2.0,
                    content: 2.8,
                    partnerships: 2.5,
                },
            },
            MarketingData {
                year: 2023,
                customer_acquisition_cost: 310.0,
                conversion_rate: 3.8,
                market_share: 7.2,
                brand_awareness: 7.9,
                active_marketing_campaigns: s(&[
                    "Enterprise Solutions",
                    "Industry Conference",
                    "Thought Leadership",
                    "Account-Based Marketing",
                ]),
                channel_performance: ChannelPerformance {
                    social: 2.4,
                    search: 2.9,
                    email: 2.2,
                    content: 3.1,
                    partnerships: 3.3,
                },
            },
        ],
        strategic_data: vec![
            StrategicData {
                year: 2020,
                business_milestones: s(&["First 50 Customers", "Seed Round Closed"]),
                strategic_initiatives: s(&["Product Market Fit", "Core Platform Development"]),
                market_threats: s(&["Established Competitors", "Limited Brand Recognition"]),
                market_opportunities: s(&["Cloud Migration Trend", "Remote Work Acceleration"]),
                competitor_movements: s(&[
                    "Legacy Player Restructuring",
                    "New Entrant in SMB Market",
                ]),
                customer_satisfaction: 8.1,
                product_roadmap: s(&["Core Platform", "Customer Portal", "Mobile Access"]),
            },
            StrategicData {
                year: 2021,
                business_milestones: s(&[
                    "Series A Funding",
                    "100th Customer",
                    "First Enterprise Client",
                ]),
                strategic_initiatives: s(&["Upmarket Strategy", "Partner Ecosystem"]),
                market_threats: s(&["Price Competition", "Talent Shortage"]),
                market_opportunities: s(&["AI/ML Integration", "Industry Vertical Expansion"]),
                competitor_movements: s(&[
                    "Market Leader Acquisition",
                    "Price Drop by Main Competitor",
                ]),
                customer_satisfaction: 8.3,
                product_roadmap: s(&["AI Capabilities", "Advanced Analytics", "API Ecosystem"]),
            },
            StrategicData {
                year: 2022,
                business_milestones: s(&[
                    "International Expansion",
                    "Series B Funding",
                    "250th Customer",
                ]),
                strategic_initiatives: s(&[
                    "Global Reach",
                    "Product Diversification",
                    "Vertical Solutions",
                ]),
                market_threats: s(&[
                    "Economic Uncertainty",
                    "Regulatory Changes",
                    "Emerging Technologies",
                ]),
                market_opportunities: s(&[
                    "Enterprise Market Growth",
                    "Industry-Specific Solutions",
                    "Data Monetization",
                ]),
                competitor_movements: s(&["New Enterprise Competitor", "Open Source Alternative"]),
                customer_satisfaction: 8.7,
                product_roadmap: s(&[
                    "Blockchain Integration",
                    "Industry Solutions",
                    "Global Infrastructure",
                ]),
            },
            StrategicData {
                year: 2023,
                business_milestones: s(&["500th Customer", "First Acquisition", "Industry Award"]),
                strategic_initiatives: s(&[
                    "M&A Strategy",
                    "Platform Expansion",
                    "Thought Leadership",
                ]),
                market_threats: s(&["Market Consolidation", "Tech Talent War", "AI Regulation"]),
                market_opportunities: s(&[
                    "Edge Computing",
                    "Predictive Analytics Market",
                    "IoT Integration",
                ]),
                competitor_movements: s(&[
                    "Major Player Platform Shift",
                    "Competitor Security Breach",
                ]),
                customer_satisfaction: 8.9,
                product_roadmap: s(&[
                    "Edge Computing",
                    "Vertical AI Solutions",
                    "Predictive Intelligence Suite",
                ]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_four_years_in_every_category() {
        let data = sample_business_data();
        for years in [
            data.financial_data.iter().map(|d| d.year).collect::<Vec<_>>(),
            data.hr_data.iter().map(|d| d.year).collect(),
            data.technology_data.iter().map(|d| d.year).collect(),
            data.marketing_data.iter().map(|d| d.year).collect(),
            data.strategic_data.iter().map(|d| d.year).collect(),
        ] {
            assert_eq!(years, vec![2020, 2021, 2022, 2023]);
        }
    }

    #[test]
    fn sample_round_trips_through_json() {
        let data = sample_business_data();
        let json = serde_json::to_string(&data).unwrap();
        let back: BusinessData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
