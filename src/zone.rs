use serde::{Deserialize, Serialize};

fn default_soil_weight() -> f64 {
    0.4
}

fn default_sunlight_weight() -> f64 {
    0.2
}

fn default_moisture_weight() -> f64 {
    0.3
}

fn default_green_cover_weight() -> f64 {
    -0.1
}

/// Coefficients of the Green Suitability Score.
///
/// Existing green cover carries a negative weight: zones that are already planted are
/// less in need of new planting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_soil_weight")]
    pub soil: f64,
    #[serde(default = "default_sunlight_weight")]
    pub sunlight: f64,
    #[serde(default = "default_moisture_weight")]
    pub moisture: f64,
    #[serde(default = "default_green_cover_weight")]
    pub green_cover: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            soil: default_soil_weight(),
            sunlight: default_sunlight_weight(),
            moisture: default_moisture_weight(),
            green_cover: default_green_cover_weight(),
        }
    }
}

/// One candidate planting zone. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: i32,
    name: String,
    soil_quality: f64,
    sunlight_hours: f64,
    moisture_level: f64,
    existing_green_cover: f64,
}

impl Zone {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        soil_quality: f64,
        sunlight_hours: f64,
        moisture_level: f64,
        existing_green_cover: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            soil_quality,
            sunlight_hours,
            moisture_level,
            existing_green_cover,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn soil_quality(&self) -> f64 {
        self.soil_quality
    }

    pub fn sunlight_hours(&self) -> f64 {
        self.sunlight_hours
    }

    pub fn moisture_level(&self) -> f64 {
        self.moisture_level
    }

    pub fn existing_green_cover(&self) -> f64 {
        self.existing_green_cover
    }

    /// Green Suitability Score under the default weights.
    pub fn score(&self) -> f64 {
        self.score_with(&ScoreWeights::default())
    }

    pub fn score_with(&self, weights: &ScoreWeights) -> f64 {
        self.soil_quality * weights.soil
            + self.moisture_level * weights.moisture
            + self.sunlight_hours * weights.sunlight
            + self.existing_green_cover * weights.green_cover
    }

    pub fn ranked(&self, rank: usize, weights: &ScoreWeights) -> RankedZone {
        RankedZone {
            rank,
            id: self.id,
            name: self.name.clone(),
            score: self.score_with(weights),
            soil_quality: self.soil_quality,
            sunlight_hours: self.sunlight_hours,
            moisture_level: self.moisture_level,
            existing_green_cover: self.existing_green_cover,
        }
    }
}

/// Flattened view of a zone at its position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedZone {
    pub rank: usize,
    pub id: i32,
    pub name: String,
    pub score: f64,
    pub soil_quality: f64,
    pub sunlight_hours: f64,
    pub moisture_level: f64,
    pub existing_green_cover: f64,
}
