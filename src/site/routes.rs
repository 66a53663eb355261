use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Alternatives,
    CalculatorIndex,
    Electricity,
    DownloadSpeed,
    Mortgage,
    UnitConverter,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Alternatives,
        Route::CalculatorIndex,
        Route::Electricity,
        Route::DownloadSpeed,
        Route::Mortgage,
        Route::UnitConverter,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Alternatives => "/alternatives",
            Route::CalculatorIndex => "/calculator",
            Route::Electricity => "/calculator/electricity",
            Route::DownloadSpeed => "/calculator/download-speed",
            Route::Mortgage => "/calculator/mortgage",
            Route::UnitConverter => "/calculator/unit-converter",
        }
    }

    /// Page heading
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Tools 2025",
            Route::About => "About Tools",
            Route::Alternatives => "Alternatives",
            Route::CalculatorIndex => "calculator/",
            Route::Electricity => "Electricity Cost Calculator",
            Route::DownloadSpeed => "Download Speed Calculator",
            Route::Mortgage => "Mortgage Interest Calculator",
            Route::UnitConverter => "Unit Converter",
        }
    }

    /// Resolve a request path; a trailing slash is ignored except on the root
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.iter().copied().find(|route| route.path() == normalized)
    }

    pub fn is_calculator(self) -> bool {
        matches!(
            self,
            Route::Electricity | Route::DownloadSpeed | Route::Mortgage | Route::UnitConverter
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entry in the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> &'static str {
        self.route.path()
    }

    /// Highlighted only on an exact path match
    pub fn is_active(&self, current_path: &str) -> bool {
        self.route.path() == current_path
    }
}

pub fn nav_items() -> [NavItem; 3] {
    [
        NavItem {
            route: Route::Home,
            label: "Home",
        },
        NavItem {
            route: Route::About,
            label: "About",
        },
        NavItem {
            route: Route::Alternatives,
            label: "Alternatives",
        },
    ]
}

/// Narrow screens drop the Home link
pub fn mobile_nav_items() -> Vec<NavItem> {
    nav_items().into_iter().skip(1).collect()
}
