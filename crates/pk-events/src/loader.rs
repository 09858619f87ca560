//! CSV event loader.
//!
//! # CSV format
//!
//! One row per event, in simulation order.  Columns not used by an event
//! type may be left empty.
//!
//! ```csv
//! time,type,person,vehicle,segment,mode
//! 0,transit driver starts,,900,,
//! 21600,entered traffic,1,1,12,car
//! 22200,left traffic,1,1,57,car
//! 22140,vehicle starts parking search,,1,57,
//! 22200,vehicle ends parking search,,1,57,
//! ```
//!
//! | `type`                           | Event                              |
//! |----------------------------------|------------------------------------|
//! | `entered traffic`                | `ParkingEvent::Unpark`             |
//! | `left traffic`                   | `ParkingEvent::Park`               |
//! | `transit driver starts`          | `MobsimEvent::TransitDriverStarts` |
//! | `vehicle starts parking search`  | `SearchEvent::Started`             |
//! | `vehicle ends parking search`    | `SearchEvent::Ended`               |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pk_core::{PersonId, SegmentId, Time, TransportMode, VehicleId};

use crate::{EventError, EventResult, MobsimEvent, ParkingEvent, SearchEvent, TrafficEvent};

#[derive(Deserialize)]
struct EventRecord {
    time:    u64,
    #[serde(rename = "type")]
    kind:    String,
    person:  Option<u32>,
    vehicle: Option<u32>,
    segment: Option<u32>,
    mode:    Option<String>,
}

/// Load all events of a CSV file, preserving row order.
pub fn load_events_csv(path: &Path) -> EventResult<Vec<MobsimEvent>> {
    let file = std::fs::File::open(path)?;
    load_events_reader(file)
}

/// Like [`load_events_csv`] but accepts any `Read` source.
pub fn load_events_reader<R: Read>(reader: R) -> EventResult<Vec<MobsimEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();

    for (line, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
        let row = result.map_err(|e| EventError::Parse(e.to_string()))?;
        events.push(parse_event(&row, line + 2)?);
    }

    Ok(events)
}

fn parse_event(row: &EventRecord, line: usize) -> EventResult<MobsimEvent> {
    let time = Time(row.time);
    let missing = |column: &str| EventError::Parse(format!("line {line}: {:?} needs {column}", row.kind));
    let vehicle = row.vehicle.map(VehicleId).ok_or_else(|| missing("vehicle"));

    match row.kind.trim() {
        "transit driver starts" => Ok(MobsimEvent::TransitDriverStarts { time, vehicle: vehicle? }),
        "vehicle starts parking search" => {
            Ok(MobsimEvent::Search(SearchEvent::Started { time, vehicle: vehicle? }))
        }
        "vehicle ends parking search" => {
            Ok(MobsimEvent::Search(SearchEvent::Ended { time, vehicle: vehicle? }))
        }
        kind @ ("entered traffic" | "left traffic") => {
            let mode = row
                .mode
                .as_deref()
                .ok_or_else(|| missing("mode"))?
                .parse::<TransportMode>()
                .map_err(|e| EventError::Parse(format!("line {line}: {e}")))?;
            let traffic = TrafficEvent {
                time,
                person:  row.person.map(PersonId).ok_or_else(|| missing("person"))?,
                vehicle: vehicle?,
                segment: row.segment.map(SegmentId).ok_or_else(|| missing("segment"))?,
                mode,
            };
            let event = if kind == "entered traffic" {
                ParkingEvent::Unpark(traffic)
            } else {
                ParkingEvent::Park(traffic)
            };
            Ok(MobsimEvent::Parking(event))
        }
        other => Err(EventError::Parse(format!("line {line}: unknown event type {other:?}"))),
    }
}
