//! CSV plan loader.
//!
//! # CSV format
//!
//! One row per plan element, in plan order.  Rows of different persons may
//! interleave; each person's elements keep their relative order.
//!
//! ```csv
//! person_id,element,activity_type,segment,mode
//! 1,activity,home,12,
//! 1,leg,,,walk
//! 1,leg,,,car
//! 1,leg,,,walk
//! 1,activity,work,57,
//! ```
//!
//! `activity` rows require `segment`; `leg` rows require `mode`.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use pk_core::{PersonId, SegmentId, TransportMode};

use crate::{DailyPlan, PlanElement, PopulationError, PopulationResult};

#[derive(Deserialize)]
struct PlanRecord {
    person_id:     u32,
    element:       String,
    activity_type: Option<String>,
    segment:       Option<u32>,
    mode:          Option<String>,
}

/// Load one [`DailyPlan`] per person, in order of first appearance.
pub fn load_plans_csv(path: &Path) -> PopulationResult<Vec<DailyPlan>> {
    let file = std::fs::File::open(path)?;
    load_plans_reader(file)
}

/// Like [`load_plans_csv`] but accepts any `Read` source.
pub fn load_plans_reader<R: Read>(reader: R) -> PopulationResult<Vec<DailyPlan>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut plans: Vec<DailyPlan> = Vec::new();
    let mut slot: FxHashMap<PersonId, usize> = FxHashMap::default();

    for (line, result) in csv_reader.deserialize::<PlanRecord>().enumerate() {
        let row = result.map_err(|e| PopulationError::Parse(e.to_string()))?;
        let element = parse_element(row.element.trim(), &row, line + 2)?;

        let i = *slot.entry(PersonId(row.person_id)).or_insert_with(|| {
            plans.push(DailyPlan::new(PersonId(row.person_id), Vec::new()));
            plans.len() - 1
        });
        plans[i].elements.push(element);
    }

    Ok(plans)
}

fn parse_element(kind: &str, row: &PlanRecord, line: usize) -> PopulationResult<PlanElement> {
    match kind {
        "activity" => {
            let segment = row.segment.ok_or_else(|| {
                PopulationError::Parse(format!("line {line}: activity without segment"))
            })?;
            Ok(PlanElement::Activity {
                kind:    row.activity_type.clone().unwrap_or_default(),
                segment: SegmentId(segment),
            })
        }
        "leg" => {
            let mode = row
                .mode
                .as_deref()
                .ok_or_else(|| PopulationError::Parse(format!("line {line}: leg without mode")))?
                .parse::<TransportMode>()
                .map_err(|e| PopulationError::Parse(format!("line {line}: {e}")))?;
            Ok(PlanElement::Leg { mode })
        }
        other => Err(PopulationError::Parse(format!(
            "line {line}: invalid element {other:?}: expected \"activity\" or \"leg\""
        ))),
    }
}
