//! # Casting Jobs
//!
//! A `CastingJob` groups the cushions poured in one session so the operator
//! can weigh out total polyol and isocyanate at once. Jobs live in memory
//! only; JSON serialization exists so front-ends can print them.
//!
//! ## Structure
//!
//! ```text
//! CastingJob
//! ├── meta: JobMetadata (job id, operator, timestamps)
//! ├── settings: CalculatorSettings (density and entry defaults)
//! └── items: HashMap<Uuid, JobItem> (cushion input × quantity)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cushion_core::job::{CastingJob, JobItem};
//! use cushion_core::presets::find_preset;
//!
//! let mut job = CastingJob::new("Line 2", "J-1042");
//! let (mold, preset) = find_preset("DN40-T40-L250").unwrap();
//! job.add_item(JobItem::new("Rack A", preset.to_input(mold, 150.0), 12));
//!
//! let totals = job.totals().unwrap();
//! assert!(totals.polyol_kg > 0.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculations::{calculate, round_to, CushionInput, CushionResult};
use crate::calculations::cushion::MASS_DECIMALS;
use crate::errors::{CalcError, CalcResult};
use crate::settings::CalculatorSettings;

/// A batch of cushions poured together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastingJob {
    pub meta: JobMetadata,

    pub settings: CalculatorSettings,

    /// Line items keyed by UUID
    pub items: HashMap<Uuid, JobItem>,
}

impl CastingJob {
    /// Create an empty job with default settings.
    pub fn new(operator: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        CastingJob {
            meta: JobMetadata {
                job_id: job_id.into(),
                operator: operator.into(),
                created: now,
                modified: now,
            },
            settings: CalculatorSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a line item. Returns the UUID assigned to it.
    pub fn add_item(&mut self, item: JobItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a line item by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> CalcResult<JobItem> {
        let item = self
            .items
            .remove(id)
            .ok_or_else(|| CalcError::item_not_found(id))?;
        self.touch();
        Ok(item)
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&JobItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total pour for the whole job.
    ///
    /// Each item is calculated on its own, its rounded per-piece masses are
    /// multiplied by the quantity, and the sums are rounded to 2 dp. Fails on
    /// the first invalid item.
    pub fn totals(&self) -> CalcResult<JobTotals> {
        let mut totals = JobTotals::default();

        for (id, item) in &self.items {
            let per_piece = item.calculate()?;
            let qty = f64::from(item.quantity);

            debug!(%id, label = %item.label, quantity = item.quantity, "adding job item");

            totals.pieces += u64::from(item.quantity);
            totals.finished_mass_kg += per_piece.finished_mass_kg * qty;
            totals.required_mass_kg += per_piece.required_mass_kg * qty;
            totals.polyol_kg += per_piece.polyol_kg * qty;
            totals.isocyanate_kg += per_piece.isocyanate_kg * qty;
        }

        totals.finished_mass_kg = round_to(totals.finished_mass_kg, MASS_DECIMALS);
        totals.required_mass_kg = round_to(totals.required_mass_kg, MASS_DECIMALS);
        totals.polyol_kg = round_to(totals.polyol_kg, MASS_DECIMALS);
        totals.isocyanate_kg = round_to(totals.isocyanate_kg, MASS_DECIMALS);

        Ok(totals)
    }
}

/// Job header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Work order / job number
    pub job_id: String,

    /// Person pouring the job
    pub operator: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// One cushion size and how many of it to pour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobItem {
    /// User label (e.g., "Rack A", "Line 3 supports")
    pub label: String,

    pub input: CushionInput,

    /// Number of identical cushions, at least 1
    pub quantity: u32,
}

impl JobItem {
    pub fn new(label: impl Into<String>, input: CushionInput, quantity: u32) -> Self {
        JobItem {
            label: label.into(),
            input,
            quantity,
        }
    }

    /// Per-piece result; rejects a zero quantity.
    pub fn calculate(&self) -> CalcResult<CushionResult> {
        if self.quantity == 0 {
            return Err(CalcError::invalid_input(
                "quantity",
                "0",
                format!("Item '{}' must have at least one piece", self.label),
            ));
        }
        calculate(&self.input)
    }
}

/// Summed pour for a job (kg, 2 dp).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JobTotals {
    /// Sum of item quantities; wider than `JobItem::quantity` so it cannot wrap
    pub pieces: u64,
    pub finished_mass_kg: f64,
    pub required_mass_kg: f64,
    pub polyol_kg: f64,
    pub isocyanate_kg: f64,
}
