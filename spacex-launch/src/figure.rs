//! Chart description structs.
//!
//! All structs derive `Serialize` so they can be handed to the D3.js
//! renderers as JSON. A description is complete on its own: the client
//! draws exactly what it receives and nothing more.

use crate::record::Outcome;
use serde::Serialize;

/// D3 `schemeCategory10`, used for booster version categories.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Slice color for an outcome in the single-site pie chart.
pub fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "#2E7D32",
        Outcome::Failure => "#C62828",
    }
}

/// Any chart the dashboard can draw.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl From<PieFigure> for Figure {
    fn from(fig: PieFigure) -> Self {
        Figure::Pie(fig)
    }
}

impl From<ScatterFigure> for Figure {
    fn from(fig: ScatterFigure) -> Self {
        Figure::Scatter(fig)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Fixed slice color; `None` lets the renderer pick from its palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// A single launch plotted as payload mass (x) against class (y).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub category: String,
    pub site: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryColor {
    pub category: String,
    pub color: String,
}

/// Untitled; only the axes are labelled.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterFigure {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Legend entries in first-appearance order among `points`.
    pub categories: Vec<CategoryColor>,
}

impl ScatterFigure {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn color_for(&self, category: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.color.as_str())
    }
}

/// Assign palette colors to the categories of `points`, first come first served.
pub fn category_legend(points: &[ScatterPoint]) -> Vec<CategoryColor> {
    let mut legend: Vec<CategoryColor> = Vec::new();
    for point in points {
        if legend.iter().any(|c| c.category == point.category) {
            continue;
        }
        let color = CATEGORY_PALETTE[legend.len() % CATEGORY_PALETTE.len()];
        legend.push(CategoryColor {
            category: point.category.clone(),
            color: color.to_string(),
        });
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, category: &str) -> ScatterPoint {
        ScatterPoint {
            x,
            y: 1,
            category: category.to_string(),
            site: "KSC LC-39A".to_string(),
        }
    }

    #[test]
    fn legend_follows_first_appearance() {
        let points = vec![point(1.0, "FT"), point(2.0, "v1.1"), point(3.0, "FT")];
        let legend = category_legend(&points);
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].category, "FT");
        assert_eq!(legend[0].color, CATEGORY_PALETTE[0]);
        assert_eq!(legend[1].color, CATEGORY_PALETTE[1]);
    }

    #[test]
    fn figure_json_is_tagged() {
        let fig = Figure::from(PieFigure {
            title: "t".to_string(),
            slices: vec![PieSlice {
                label: "A".to_string(),
                value: 3,
                color: None,
            }],
        });
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["slices"][0]["value"], 3);
        assert!(json["slices"][0].get("color").is_none());
    }
}
