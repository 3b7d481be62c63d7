//! Business dataset.
//!
//! Immutable structured time-series records consumed by the role insight
//! extractor and the prompt builder. Read-only for the session lifetime.

pub mod model;
pub mod sample;

pub use model::{
    BusinessData, ChannelPerformance, DepartmentDistribution, FinancialData, HrData,
    MarketingData, StrategicData, TechnologyData,
};
pub use sample::sample_business_data;
