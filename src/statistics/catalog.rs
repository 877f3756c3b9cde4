use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ChartConfig, render_bar_chart};
use crate::core::{ChartLayout, DataPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{ContainerRef, Renderer};

use super::{QueryScope, StatisticsQuery, StatisticsSeries};

/// Everything needed to request and draw one statistics chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub container: ContainerRef,
    pub endpoint: String,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: StatisticsSeries,
    pub scope: QueryScope,
}

impl ChartDefinition {
    #[must_use]
    pub fn config(&self) -> ChartConfig {
        ChartConfig::new(
            self.width,
            self.height,
            self.title.clone(),
            self.x_label.clone(),
            self.y_label.clone(),
        )
    }

    #[must_use]
    pub fn query(&self) -> StatisticsQuery {
        self.scope.query()
    }

    /// JSON body to send to `endpoint`.
    pub fn query_payload(&self) -> ChartResult<String> {
        self.query().to_payload()
    }
}

/// Ordered mapping from chart id to its definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartCatalog {
    pub charts: IndexMap<String, ChartDefinition>,
}

impl ChartCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart(mut self, id: impl Into<String>, definition: ChartDefinition) -> Self {
        self.insert(id, definition);
        self
    }

    /// Adds or replaces a chart; replaced charts keep their position.
    pub fn insert(&mut self, id: impl Into<String>, definition: ChartDefinition) {
        self.charts.insert(id.into(), definition);
    }

    /// Daily transfer charts: data volume and number of files for `date`.
    #[must_use]
    pub fn statistics_today(date: NaiveDate) -> Self {
        let scope = QueryScope::day(date);
        Self::new()
            .with_chart(
                "data_today",
                ChartDefinition {
                    container: ContainerRef::new("#plot_data_today"),
                    endpoint: "/rest/statistics/data_per_day".to_owned(),
                    width: 800,
                    height: 300,
                    title: "Transferred data".to_owned(),
                    x_label: "Time".to_owned(),
                    y_label: "Data [kB]".to_owned(),
                    series: StatisticsSeries::Data,
                    scope,
                },
            )
            .with_chart(
                "number_files_today",
                ChartDefinition {
                    container: ContainerRef::new("#plot_number_files_today"),
                    endpoint: "/rest/statistics/number_files_per_day".to_owned(),
                    width: 800,
                    height: 300,
                    title: "Transferred files".to_owned(),
                    x_label: "Time".to_owned(),
                    y_label: "Number".to_owned(),
                    series: StatisticsSeries::Files,
                    scope,
                },
            )
    }

    pub fn get(&self, id: &str) -> ChartResult<&ChartDefinition> {
        self.charts
            .get(id)
            .ok_or_else(|| ChartError::UnknownChart(id.to_owned()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Renders `data` with the definition registered under `id`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        id: &str,
        data: &[DataPoint],
    ) -> ChartResult<ChartLayout> {
        let definition = self.get(id)?;
        debug!(chart = id, endpoint = %definition.endpoint, "rendering catalog chart");
        render_bar_chart(renderer, data, &definition.container, &definition.config())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart catalog: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart catalog: {e}")))
    }
}
