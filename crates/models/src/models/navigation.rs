use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    CrewBuilder,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::CrewBuilder, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CrewBuilder => "/build",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::CrewBuilder => "Build Crew",
            Route::Dashboard => "Dashboard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NavLink {
    pub route: Route,
    pub path: String,
    pub label: String,
}

impl From<Route> for NavLink {
    fn from(route: Route) -> Self {
        Self {
            route,
            path: route.path().to_string(),
            label: route.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Navigation {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub actions: Vec<String>,
}
