//! Fund records and risk levels
//!
//! Global invariants enforced:
//! - Records are immutable once loaded; views only filter and reorder them

use serde::{Deserialize, Serialize};

/// Risk level classification shown in the sector fund table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// All levels from highest to lowest, the order the distribution chart uses
    pub const DISTRIBUTION_ORDER: [RiskLevel; 5] = [
        RiskLevel::VeryHigh,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::VeryLow,
    ];

    /// Display label; also the key used when sorting by risk level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// CSS class suffix for badges
    pub fn slug(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very-low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very-high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of comparative fund data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FundRecord {
    pub name: String,
    pub company: String,
    pub category: String,
    /// 1-year return in percent
    pub one_year_return: f64,
    /// 3-year return in percent
    pub three_year_return: f64,
    pub risk_level: RiskLevel,
}

impl FundRecord {
    pub fn new(
        name: &str,
        company: &str,
        category: &str,
        one_year_return: f64,
        three_year_return: f64,
        risk_level: RiskLevel,
    ) -> Self {
        FundRecord {
            name: name.to_string(),
            company: company.to_string(),
            category: category.to_string(),
            one_year_return,
            three_year_return,
            risk_level,
        }
    }
}

/// Column a fund table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Company,
    Category,
    OneYearReturn,
    ThreeYearReturn,
    RiskLevel,
}

/// Extracted sort key for one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Company,
        SortField::Category,
        SortField::OneYearReturn,
        SortField::ThreeYearReturn,
        SortField::RiskLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Company => "company",
            SortField::Category => "category",
            SortField::OneYearReturn => "one_year_return",
            SortField::ThreeYearReturn => "three_year_return",
            SortField::RiskLevel => "risk_level",
        }
    }

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            SortField::Name => "Fund Name",
            SortField::Company => "Company",
            SortField::Category => "Category",
            SortField::OneYearReturn => "1Y Return (%)",
            SortField::ThreeYearReturn => "3Y Return (%)",
            SortField::RiskLevel => "Risk Level",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SortField::OneYearReturn | SortField::ThreeYearReturn)
    }

    /// Accepts snake_case names plus the short aliases used on the command line
    pub fn parse(s: &str) -> Option<SortField> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Some(SortField::Name),
            "company" => Some(SortField::Company),
            "category" => Some(SortField::Category),
            "one_year_return" | "one_year" | "oneyear" | "1y" => Some(SortField::OneYearReturn),
            "three_year_return" | "three_year" | "threeyear" | "3y" => {
                Some(SortField::ThreeYearReturn)
            }
            "risk_level" | "risk" => Some(SortField::RiskLevel),
            _ => None,
        }
    }

    pub fn key<'a>(&self, record: &'a FundRecord) -> SortKey<'a> {
        match self {
            SortField::Name => SortKey::Text(&record.name),
            SortField::Company => SortKey::Text(&record.company),
            SortField::Category => SortKey::Text(&record.category),
            SortField::OneYearReturn => SortKey::Number(record.one_year_return),
            SortField::ThreeYearReturn => SortKey::Number(record.three_year_return),
            SortField::RiskLevel => SortKey::Text(record.risk_level.as_str()),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
