use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Histogram carried by an aggregated statistics envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsSeries {
    /// Transferred data volume per bin.
    Data,
    /// Number of transferred files per bin.
    Files,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatisticsPayload {
    Series(Vec<DataPoint>),
    Envelope(StatisticsEnvelope),
}

#[derive(Debug, Deserialize)]
struct StatisticsEnvelope {
    status: String,
    #[serde(default)]
    hist_data: Vec<DataPoint>,
    #[serde(default)]
    hist_file: Vec<DataPoint>,
}

/// Decodes a statistics response into chart data.
///
/// Accepts a bare `[{bin, value}, ..]` array or the aggregated envelope
/// `{status, hist_data, hist_file}`, from which `series` picks the histogram.
pub fn decode_statistics_response(
    input: &str,
    series: StatisticsSeries,
) -> ChartResult<Vec<DataPoint>> {
    let payload: StatisticsPayload = serde_json::from_str(input).map_err(|e| {
        ChartError::InvalidData(format!("failed to parse statistics response: {e}"))
    })?;

    let points = match payload {
        StatisticsPayload::Series(points) => points,
        StatisticsPayload::Envelope(envelope) => {
            if envelope.status != "success" {
                return Err(ChartError::InvalidData(format!(
                    "statistics endpoint reported status `{}`",
                    envelope.status
                )));
            }
            match series {
                StatisticsSeries::Data => envelope.hist_data,
                StatisticsSeries::Files => envelope.hist_file,
            }
        }
    };

    debug!(points = points.len(), ?series, "statistics response decoded");
    Ok(points)
}
