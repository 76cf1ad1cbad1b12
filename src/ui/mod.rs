/// UI layer: panel widgets and chart rendering.

pub mod panels;
pub mod plot;
