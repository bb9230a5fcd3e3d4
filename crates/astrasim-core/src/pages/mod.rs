//! Route-level pages.
//!
//! | Page | Pattern |
//! |------|---------|
//! | [`HomePage`] | `/` |
//! | [`ScreenerPage`] | `/screener` |
//! | [`ScenarioBuilderPage`] | `/scenario-builder` |
//! | [`SimulationPage`] | `/simulation` |
//! | [`StockPage`] | `/stock/:symbol` |

mod home;
mod scenario_builder;
mod screener;
mod simulation;
mod stock;

pub use home::HomePage;
pub use scenario_builder::ScenarioBuilderPage;
pub use screener::ScreenerPage;
pub use simulation::SimulationPage;
pub use stock::StockPage;
