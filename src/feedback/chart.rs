// Assembles the dataset handed to the chart-rendering collaborator.
//
// The output is a Vega-Lite bar specification: the aggregate rows as a flat
// dataset, the diverging percentage stacked from zero on the x axis, the
// questions on the y axis in label sort order, and the fixed four-color
// scale over the categories.

use serde::Serialize;
use serde_json::json;
use serde_json::Value as JSValue;

use likert_summary::{chart_title, FeedbackSummary, COLOR_DOMAIN, COLOR_RANGE};

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(PartialEq, Debug, Clone, Serialize)]
struct ChartRow<'a> {
    criterion: &'a str,
    category: &'a str,
    sentiment: &'a str,
    count: u64,
    total: u64,
    percentage: f64,
    #[serde(rename = "divergingPercentage")]
    diverging_percentage: f64,
}

fn chart_rows(summary: &FeedbackSummary) -> Vec<ChartRow<'_>> {
    summary
        .rows
        .iter()
        .map(|r| ChartRow {
            criterion: &r.criterion,
            category: r.category.label(),
            sentiment: r.sentiment.label(),
            count: r.count,
            total: r.total,
            percentage: r.percentage,
            diverging_percentage: r.diverging_percentage,
        })
        .collect()
}

pub fn build_chart_js(summary: &FeedbackSummary) -> JSValue {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": chart_title(summary.total_response_count),
        "data": { "values": chart_rows(summary) },
        "mark": "bar",
        "encoding": {
            "x": {
                "field": "divergingPercentage",
                "type": "quantitative",
                "stack": "zero",
                "axis": { "format": "%", "title": "Percentage of Responses", "grid": true }
            },
            "y": {
                "field": "criterion",
                "type": "nominal",
                "sort": summary.criteria_order,
                "axis": { "title": null }
            },
            "color": {
                "field": "category",
                "type": "nominal",
                "scale": { "domain": COLOR_DOMAIN, "range": COLOR_RANGE },
                "legend": { "title": "Response" }
            },
            "order": { "field": "category", "sort": "descending" },
            "tooltip": [
                { "field": "criterion", "title": "Question" },
                { "field": "category", "title": "Response Category" },
                { "field": "count", "type": "quantitative" },
                { "field": "percentage", "format": ".1%", "title": "Percent of Category" }
            ]
        }
    })
}
