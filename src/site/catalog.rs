use crate::site::routes::Route;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorEntry {
    pub name: &'static str,
    pub route: Route,
    pub description: &'static str,
}

pub fn calculators() -> Vec<CalculatorEntry> {
    vec![
        CalculatorEntry {
            name: "Electricity Cost Calculator",
            route: Route::Electricity,
            description: "Calculate annual electricity costs with single/dual tariff support",
        },
        CalculatorEntry {
            name: "Download Speed Calculator",
            route: Route::DownloadSpeed,
            description: "Calculate download speeds from file size and time",
        },
        CalculatorEntry {
            name: "Mortgage Interest Calculator",
            route: Route::Mortgage,
            description: "Compare daily interest before and after an overpayment",
        },
        CalculatorEntry {
            name: "Unit Converter",
            route: Route::UnitConverter,
            description: "Convert between common units of measurement",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

pub fn alternatives() -> Vec<Alternative> {
    vec![
        Alternative {
            name: "Tools.fun",
            description: "Variety of tools for different tasks",
            url: "https://tools.fun",
            category: "Online Tools",
        },
        Alternative {
            name: "IT Tools",
            description: "Collection of online tools (2025)",
            url: "https://it-tools.tech",
            category: "Online Tools",
        },
    ]
}

/// Distinct categories in first-seen order
pub fn alternative_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for alt in alternatives() {
        if !categories.contains(&alt.category) {
            categories.push(alt.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_calculator_has_a_calculator_route() {
        let entries = calculators();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.route.is_calculator()));
    }

    #[test]
    fn test_alternatives() {
        let alts = alternatives();
        assert_eq!(alts[0].url, "https://tools.fun");
        assert_eq!(alts[1].url, "https://it-tools.tech");
        assert_eq!(alternative_categories(), vec!["Online Tools"]);
    }
}
