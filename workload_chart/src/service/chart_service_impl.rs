use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::model::{
    allocation::allocation_grid::*, category::category::*, configs::chart_config::*,
};

const GRID_LINE_COLOR: &str = "rgba(0, 0, 0, 0.7)";
const AXIS_STEP: f64 = 4.0;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
}

#[doc = r#"
    Y-axis upper bound: the peak rounded up to a multiple of 4, never below `floor`.
    Small fluctuations in the peak therefore don't change the axis every run.
"#]
pub fn axis_upper_bound(peak: f64, floor: f64) -> f64 {
    let stepped: f64 = (peak / AXIS_STEP).ceil() * AXIS_STEP;
    stepped.max(floor)
}

#[doc = "Formats an amount without a trailing `.0` for whole numbers"]
fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

impl ChartServiceImpl {
    fn chart_title(&self, summary: &AllocationSummary) -> String {
        let unit: &str = self.chart_config.effort_unit();

        format!(
            "Next {} days: {} {} | {} days: {} {}",
            self.chart_config.short_window(),
            format_amount(*summary.near_term_total()),
            unit,
            self.chart_config.num_days(),
            format_amount(*summary.window_total()),
            unit
        )
    }

    #[doc = "Chart.js (v2 syntax) description of the stacked bar chart"]
    fn build_chart_definition(
        &self,
        labels: &[String],
        grid: &AllocationGrid,
        categories: &CategorySet,
        summary: &AllocationSummary,
    ) -> Value {
        let datasets: Vec<Value> = categories
            .categories()
            .iter()
            .map(|category| {
                json!({
                    "label": category.name(),
                    "data": grid.rounded_row(*category.display_order()),
                    "backgroundColor": category.color(),
                })
            })
            .collect();

        let y_max: f64 = axis_upper_bound(*summary.peak(), *self.chart_config.axis_floor());

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": datasets,
            },
            "options": {
                "title": {
                    "display": true,
                    "text": self.chart_title(summary),
                },
                "legend": {
                    "display": categories.len() > 1,
                },
                "scales": {
                    "xAxes": [{
                        "stacked": true,
                        "gridLines": { "color": GRID_LINE_COLOR },
                        "ticks": {
                            "minRotation": 0,
                            "maxRotation": 45,
                            "padding": 0,
                            "labelOffset": 0,
                        },
                    }],
                    "yAxes": [{
                        "stacked": true,
                        "gridLines": { "color": GRID_LINE_COLOR },
                        "ticks": {
                            "min": 0,
                            "max": y_max,
                        },
                    }],
                },
            },
        })
    }
}

impl ChartService for ChartServiceImpl {
    fn render_chart_url(
        &self,
        labels: &[String],
        grid: &AllocationGrid,
        categories: &CategorySet,
        summary: &AllocationSummary,
    ) -> anyhow::Result<String> {
        if labels.len() != grid.num_days() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_chart_url] Labels and grid must have the same length: {} vs {}",
                labels.len(),
                grid.num_days()
            ));
        }

        let definition: Value = self.build_chart_definition(labels, grid, categories, summary);
        let definition_str: String = serde_json::to_string(&definition)
            .context("[ChartServiceImpl->render_chart_url] Failed to serialize chart definition")?;

        let url: String = format!(
            "{}/chart?c={}&w={}&h={}&bkg={}",
            self.chart_config.chart_api_base().trim_end_matches('/'),
            encode(&definition_str),
            self.chart_config.chart_width(),
            self.chart_config.chart_height(),
            encode(self.chart_config.background_color())
        );

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils_modules::time_utils::*;

    fn fixture() -> (Vec<String>, AllocationGrid, CategorySet) {
        let categories = CategorySet::from_ordered(
            vec![
                ("Work".to_string(), Some("blue".to_string())),
                ("Home".to_string(), Some("green".to_string())),
            ],
            "Other",
        );
        let mut grid = AllocationGrid::new(categories.len(), 14);
        grid.add(0, 0, 3.0);
        grid.add(1, 0, 2.5);
        grid.add(2, 9, 1.0);

        let labels = make_day_labels(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), 14);
        (labels, grid, categories)
    }

    fn decode_definition(url: &str) -> Value {
        let encoded: &str = url
            .split("c=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .unwrap();
        let decoded = urlencoding::decode(encoded).unwrap();
        serde_json::from_str(&decoded).unwrap()
    }

    #[test]
    fn axis_bound_steps_by_four_with_floor() {
        assert_eq!(axis_upper_bound(0.0, 8.0), 8.0);
        assert_eq!(axis_upper_bound(3.0, 8.0), 8.0);
        assert_eq!(axis_upper_bound(8.0, 8.0), 8.0);
        assert_eq!(axis_upper_bound(8.5, 8.0), 12.0);
        assert_eq!(axis_upper_bound(13.0, 8.0), 16.0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let (labels, grid, categories) = fixture();
        let service = ChartServiceImpl::new(ChartConfig::default());
        let summary = grid.summarize(7);

        let first = service.render_chart_url(&labels, &grid, &categories, &summary).unwrap();
        let second = service.render_chart_url(&labels, &grid, &categories, &summary).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn url_carries_size_and_background() {
        let (labels, grid, categories) = fixture();
        let service = ChartServiceImpl::new(ChartConfig::default());
        let url = service
            .render_chart_url(&labels, &grid, &categories, &grid.summarize(7))
            .unwrap();

        assert!(url.starts_with("https://quickchart.io/chart?c="));
        assert!(url.ends_with("&w=800&h=300&bkg=transparent"));
    }

    #[test]
    fn definition_has_one_stacked_series_per_category() {
        let (labels, grid, categories) = fixture();
        let service = ChartServiceImpl::new(ChartConfig::default());
        let url = service
            .render_chart_url(&labels, &grid, &categories, &grid.summarize(7))
            .unwrap();
        let definition = decode_definition(&url);

        let datasets = definition["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 3);
        assert_eq!(datasets[0]["label"], "Work");
        assert_eq!(datasets[0]["backgroundColor"], "#529CCA");
        assert_eq!(datasets[2]["label"], "Other");
        assert_eq!(datasets[2]["data"][9], 1.0);

        assert_eq!(definition["data"]["labels"][0], "Today 6/10");
        assert_eq!(definition["options"]["scales"]["yAxes"][0]["stacked"], true);
        assert_eq!(definition["options"]["scales"]["yAxes"][0]["ticks"]["max"], 8.0);
        assert_eq!(definition["options"]["legend"]["display"], true);
        assert_eq!(
            definition["options"]["title"]["text"],
            "Next 7 days: 5.5 Hours | 14 days: 6.5 Hours"
        );
    }

    #[test]
    fn label_count_mismatch_is_an_error() {
        let (labels, grid, categories) = fixture();
        let service = ChartServiceImpl::new(ChartConfig::default());
        let short_labels: Vec<String> = labels.into_iter().take(3).collect();
        assert!(service
            .render_chart_url(&short_labels, &grid, &categories, &grid.summarize(7))
            .is_err());
    }
}
