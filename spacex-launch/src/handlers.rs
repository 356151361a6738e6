//! Pie and scatter chart handlers.
//!
//! Both are pure functions of the table and the current control values.
//! Neither has an error path: a selection that matches nothing produces
//! an empty but well-formed figure.

use crate::aggregate::{self, PayloadRange};
use crate::figure::{self, PieFigure, PieSlice, ScatterFigure, ScatterPoint};
use crate::record::LaunchRecord;
use crate::table::LaunchTable;

/// Site selector value meaning "every site".
pub const ALL_SITES: &str = "ALL";

pub const PIE_TITLE_ALL_SITES: &str = "No. Successful Launches by Site";
pub const PIE_TITLE_SINGLE_SITE: &str = "Split by Success and Failures for Launch Site";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";

/// Successful launches per site for `ALL`, otherwise the success/failure
/// split of the selected site.
pub fn pie_chart(table: &LaunchTable, site: &str) -> PieFigure {
    if site == ALL_SITES {
        let slices = aggregate::success_counts_by_site(table.records())
            .into_iter()
            .map(|c| PieSlice {
                label: c.site,
                value: c.count,
                color: None,
            })
            .collect();
        return PieFigure {
            title: PIE_TITLE_ALL_SITES.to_string(),
            slices,
        };
    }

    let slices = aggregate::outcome_counts(table.records(), site)
        .into_iter()
        .map(|c| PieSlice {
            label: c.outcome.label().to_string(),
            value: c.count,
            color: Some(figure::outcome_color(c.outcome).to_string()),
        })
        .collect();
    PieFigure {
        title: PIE_TITLE_SINGLE_SITE.to_string(),
        slices,
    }
}

/// Payload mass against outcome, colored by booster version category.
///
/// With `ALL` selected every record is plotted and `range` is not applied.
/// For a single site only records with `low < payload < high` remain.
pub fn scatter_chart(table: &LaunchTable, site: &str, range: PayloadRange) -> ScatterFigure {
    let points: Vec<ScatterPoint> = if site == ALL_SITES {
        table.records().iter().map(to_point).collect()
    } else {
        aggregate::payload_subset(aggregate::records_at_site(table.records(), site), range)
            .map(to_point)
            .collect()
    };

    log::debug!("scatter_chart: site={site} range={range:?} -> {} points", points.len());

    ScatterFigure {
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        categories: figure::category_legend(&points),
        points,
    }
}

fn to_point(record: &LaunchRecord) -> ScatterPoint {
    ScatterPoint {
        x: record.payload_mass_kg,
        y: record.outcome.class(),
        category: record.booster_version_category.clone(),
        site: record.launch_site.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Outcome;

    /// A has 3 successes / 1 failure, B has 2 successes / 2 failures.
    fn two_site_table() -> LaunchTable {
        let rows = [
            ("A", 500.0, Outcome::Success, "v1.0"),
            ("B", 1500.0, Outcome::Failure, "v1.1"),
            ("A", 2500.0, Outcome::Success, "v1.1"),
            ("B", 3500.0, Outcome::Success, "FT"),
            ("A", 4500.0, Outcome::Failure, "FT"),
            ("B", 5500.0, Outcome::Success, "FT"),
            ("A", 6500.0, Outcome::Success, "B4"),
            ("B", 7500.0, Outcome::Failure, "B5"),
        ];
        let records = rows
            .iter()
            .map(|(site, mass, outcome, cat)| LaunchRecord::new(site, *mass, *outcome, cat))
            .collect();
        LaunchTable::from_records(records).unwrap()
    }

    fn slices(fig: &PieFigure) -> Vec<(&str, usize)> {
        fig.slices.iter().map(|s| (s.label.as_str(), s.value)).collect()
    }

    #[test]
    fn pie_all_sites_counts_successes_per_site() {
        let table = two_site_table();
        let fig = pie_chart(&table, ALL_SITES);
        assert_eq!(fig.title, PIE_TITLE_ALL_SITES);
        assert_eq!(slices(&fig), vec![("A", 3), ("B", 2)]);
        assert_eq!(fig.total(), table.success_count());
        assert_eq!(fig.slices.len(), table.sites().len());
    }

    #[test]
    fn pie_single_site_splits_by_outcome() {
        let table = two_site_table();
        let fig = pie_chart(&table, "B");
        assert_eq!(fig.title, PIE_TITLE_SINGLE_SITE);
        assert_eq!(slices(&fig), vec![("success", 2), ("failure", 2)]);
        assert_eq!(fig.total(), 4);
        assert_eq!(fig.slices[0].color.as_deref(), Some(figure::outcome_color(Outcome::Success)));
        assert_eq!(fig.slices[1].color.as_deref(), Some(figure::outcome_color(Outcome::Failure)));
    }

    #[test]
    fn pie_unknown_site_is_empty() {
        let fig = pie_chart(&two_site_table(), "Boca Chica");
        assert!(fig.is_empty());
        assert_eq!(fig.total(), 0);
    }

    #[test]
    fn scatter_all_sites_ignores_payload_range() {
        let table = two_site_table();
        let narrow = PayloadRange::new(3000.0, 4000.0);
        let fig = scatter_chart(&table, ALL_SITES, narrow);
        assert_eq!(fig.points.len(), table.len());
        assert_eq!(fig.x_label, "Payload Mass (kg)");
        assert_eq!(fig.y_label, "class");
    }

    #[test]
    fn scatter_figure_has_no_title() {
        let fig = scatter_chart(&two_site_table(), "A", PayloadRange::new(0.0, 10000.0));
        let json = serde_json::to_value(crate::Figure::from(fig)).unwrap();
        assert_eq!(json["type"], "scatter");
        assert!(json.get("title").is_none());
        assert_eq!(json["x_label"], SCATTER_X_LABEL);
    }

    #[test]
    fn scatter_single_site_applies_exclusive_range() {
        let table = two_site_table();
        // 2500 sits exactly on the low bound and must be dropped.
        let fig = scatter_chart(&table, "A", PayloadRange::new(2500.0, 7000.0));
        let xs: Vec<f64> = fig.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![4500.0, 6500.0]);
        for p in &fig.points {
            assert_eq!(p.site, "A");
            assert!(p.x > 2500.0 && p.x < 7000.0);
        }
        assert_eq!(fig.points[0].y, 0);
        assert_eq!(fig.points[1].y, 1);
        let legend: Vec<&str> = fig.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(legend, vec!["FT", "B4"]);
    }

    #[test]
    fn scatter_empty_selection_is_valid() {
        let table = two_site_table();
        let fig = scatter_chart(&table, "A", PayloadRange::new(0.0, 100.0));
        assert!(fig.is_empty());
        assert!(fig.categories.is_empty());

        let fig = scatter_chart(&table, "Nowhere", PayloadRange::new(0.0, 10000.0));
        assert!(fig.is_empty());
    }

    #[test]
    fn fixture_dataset_properties() {
        let table =
            LaunchTable::from_csv_str(include_str!("../../fixtures/spacex_launch_dash.csv"))
                .unwrap();

        let all = pie_chart(&table, ALL_SITES);
        assert_eq!(all.total(), table.success_count());
        assert_eq!(all.slices.len(), table.sites().len());

        let full_range = PayloadRange::new(table.min_payload() - 1.0, table.max_payload() + 1.0);
        for site in table.sites() {
            let count = table.records().iter().filter(|r| r.launch_site == site).count();
            let split = pie_chart(&table, site);
            assert_eq!(split.total(), count, "{site}");
            assert!(split.slices.len() <= 2);

            let fig = scatter_chart(&table, site, full_range);
            assert_eq!(fig.points.len(), count, "{site}");
        }

        let fig = scatter_chart(&table, ALL_SITES, PayloadRange::new(0.0, 0.0));
        assert_eq!(fig.points.len(), table.len());
    }

    #[test]
    fn handlers_are_idempotent() {
        let table = two_site_table();
        let range = PayloadRange::new(1000.0, 6000.0);
        assert_eq!(pie_chart(&table, "A"), pie_chart(&table, "A"));
        assert_eq!(scatter_chart(&table, "B", range), scatter_chart(&table, "B", range));
    }
}
