use itertools::Itertools;
use serde::Serialize;

use crate::data::SectionTotal;
use crate::palette;

/// Chart configuration for an outlabeled pie chart, one slice per section.
/// Field names and nesting follow the chart service's schema; the whole
/// structure is presentation configuration only.
#[derive(Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    chart_type: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Debug, Serialize)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    background_color: Vec<&'static str>,
    data: Vec<u64>,
}

#[derive(Debug, Serialize)]
struct ChartOptions {
    plugins: Plugins,
}

#[derive(Debug, Serialize)]
struct Plugins {
    legend: bool,
    outlabels: Outlabels,
}

/// Slice labels drawn outside the pie: label text plus percentage, in white,
/// with an auto-resizing font.
#[derive(Debug, Serialize)]
struct Outlabels {
    text: &'static str,
    color: &'static str,
    stretch: u32,
    font: OutlabelFont,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlabelFont {
    resizable: bool,
    min_size: u32,
    max_size: u32,
}

impl ChartConfig {
    /// Build the pie-chart description for the given sections, each slice
    /// sized by its section's microsecond total.
    #[must_use]
    pub fn from_sections(sections: &[SectionTotal]) -> ChartConfig {
        let (labels, background_color, data): (Vec<_>, Vec<_>, Vec<_>) = sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                (
                    section.id.to_string(),
                    palette::color_for(i),
                    section.micros,
                )
            })
            .multiunzip();

        ChartConfig {
            chart_type: "outlabeledPie",
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    background_color,
                    data,
                }],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: false,
                    outlabels: Outlabels {
                        text: "%l %p",
                        color: "white",
                        stretch: 35,
                        font: OutlabelFont {
                            resizable: true,
                            min_size: 12,
                            max_size: 18,
                        },
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SectionId;

    fn section(day: u32, part: u8, micros: u64) -> SectionTotal {
        SectionTotal {
            id: SectionId { day, part },
            micros,
        }
    }

    #[test]
    fn test_serialized_shape() {
        let chart = ChartConfig::from_sections(&[section(1, 1, 500)]);
        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(
            json,
            r##"{"type":"outlabeledPie","data":{"labels":["Day 1.1"],"datasets":[{"backgroundColor":["#c42cb2"],"data":[500]}]},"options":{"plugins":{"legend":false,"outlabels":{"text":"%l %p","color":"white","stretch":35,"font":{"resizable":true,"minSize":12,"maxSize":18}}}}}"##
        );
    }

    #[test]
    fn test_parallel_lists_match_section_count() {
        let sections: Vec<_> = (1..=25u32)
            .map(|day| section(day, 1 + (day % 2) as u8, u64::from(day) * 10))
            .collect();
        let chart = ChartConfig::from_sections(&sections);
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["data"]["labels"].as_array().unwrap().len(), 25);
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["backgroundColor"].as_array().unwrap().len(), 25);
        assert_eq!(dataset["data"].as_array().unwrap().len(), 25);
    }

    #[test]
    fn test_colors_follow_section_order() {
        let chart = ChartConfig::from_sections(&[section(1, 1, 1), section(1, 2, 2)]);
        let value = serde_json::to_value(&chart).unwrap();
        let colors = value["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap()
            .clone();
        assert_eq!(colors[0], "#c42cb2");
        assert_eq!(colors[1], "#065535");
    }

    #[test]
    fn test_empty_sections_serialize_to_empty_lists() {
        let chart = ChartConfig::from_sections(&[]);
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["data"]["labels"].as_array().unwrap().len(), 0);
    }
}
