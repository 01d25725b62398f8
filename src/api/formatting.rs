//! Search result formatting
//!
//! Distance labels follow the two display forms the client screens use:
//! whole meters under a kilometer and kilometers with a configurable
//! number of decimals beyond that. Ranking itself never depends on any of
//! this; formatting is applied to finished results only.

use crate::api::types::SearchResponse;
use crate::core::DISPLAY_ZERO_METERS;

/// Renders distances as short labels ("842 m", "12.6 km")
#[derive(Debug, Clone, Copy)]
pub struct DistanceFormatter {
    /// Decimal places for kilometer labels
    pub precision: u8,
}

impl Default for DistanceFormatter {
    fn default() -> Self {
        Self { precision: 1 }
    }
}

impl DistanceFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal places used for kilometer labels.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Render a distance the way list rows and map labels show it.
    ///
    /// Trig rounding can leave a coincident point a fraction of a
    /// micrometer away from zero; such values render as zero.
    pub fn format(&self, distance_meters: f64) -> String {
        if distance_meters < DISPLAY_ZERO_METERS {
            "0 m".to_string()
        } else if distance_meters < 1000.0 {
            format!("{:.0} m", distance_meters)
        } else {
            format!("{:.*} km", self.precision as usize, distance_meters / 1000.0)
        }
    }
}

/// Human-readable ranked list output
pub struct TextFormatter {
    /// Single line per result, no header
    pub compact: bool,
    distance: DistanceFormatter,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            compact: false,
            distance: DistanceFormatter::default(),
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use compact single-line rows without the header block.
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Default::default()
        }
    }

    /// Replace the distance formatter used for the rows.
    pub fn with_distance_formatter(mut self, distance: DistanceFormatter) -> Self {
        self.distance = distance;
        self
    }

    /// Format a search response as a ranked text listing.
    pub fn format_text(&self, response: &SearchResponse) -> String {
        let mut output = String::new();

        if !self.compact {
            output.push_str(&format!(
                "Reference: {:.6}, {:.6}\n",
                response.reference.latitude, response.reference.longitude
            ));
            output.push_str(&format!(
                "Results:   {} of {}\n",
                response.results.len(),
                response.total_candidates
            ));
        }

        for (index, ranked) in response.results.iter().enumerate() {
            let marker = if ranked.is_nearest { " (nearest)" } else { "" };
            if self.compact {
                output.push_str(&format!(
                    "{}. {} {}{}\n",
                    index + 1,
                    ranked.entity.display_name,
                    self.distance.format(ranked.distance_meters),
                    marker
                ));
            } else {
                output.push_str(&format!(
                    "{:>3}. {} [{}] {}{}\n",
                    index + 1,
                    ranked.entity.display_name,
                    ranked.entity.id,
                    self.distance.format(ranked.distance_meters),
                    marker
                ));
            }
        }

        output
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format a search response as a JSON string.
    pub fn format_json(&self, response: &SearchResponse) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(response)
        } else {
            serde_json::to_string(response)
        }
    }
}
