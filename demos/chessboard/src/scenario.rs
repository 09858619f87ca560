//! Synthetic commuters: home in the west, work in the east, one round trip
//! by car per day.  A handful of buses drive through as well and must be
//! ignored by the recorder.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use pk_core::{PersonId, SegmentId, Time, TransportMode, VehicleId};
use pk_events::{MobsimEvent, ParkingEvent, SearchEvent, TrafficEvent};
use pk_population::{DailyPlan, PlanElement};

const BUSES: u32 = 4;
/// Bus vehicle ids start here, above any person id.
const BUS_VEHICLE_BASE: u32 = 100_000;

pub struct Commuter {
    pub person: PersonId,
    pub home:   SegmentId,
    pub work:   SegmentId,
}

pub struct Population {
    pub commuters: Vec<Commuter>,
}

impl Population {
    pub fn generate(persons: u32, west: &[SegmentId], east: &[SegmentId], seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let commuters = (0..persons)
            .map(|p| Commuter {
                person: PersonId(p),
                home:   west[rng.gen_range(0..west.len())],
                work:   east[rng.gen_range(0..east.len())],
            })
            .collect();
        Self { commuters }
    }

    /// `home → walk → car → walk → work → walk → car → walk → home`.
    pub fn plans(&self) -> Vec<DailyPlan> {
        let act = |kind: &str, segment| PlanElement::Activity { kind: kind.to_owned(), segment };
        let leg = |mode| PlanElement::Leg { mode };
        self.commuters
            .iter()
            .map(|c| {
                DailyPlan::new(
                    c.person,
                    vec![
                        act("home", c.home),
                        leg(TransportMode::Walk),
                        leg(TransportMode::Car),
                        leg(TransportMode::Walk),
                        act("work", c.work),
                        leg(TransportMode::Walk),
                        leg(TransportMode::Car),
                        leg(TransportMode::Walk),
                        act("home", c.home),
                    ],
                )
            })
            .collect()
    }

    /// One simulated day, time ordered.  `seed` only moves departure times
    /// and search durations; homes and workplaces stay fixed.
    pub fn day(&self, seed: u64) -> Vec<MobsimEvent> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut events = Vec::with_capacity(self.commuters.len() * 6 + BUSES as usize * 3);

        for c in &self.commuters {
            let vehicle = VehicleId(c.person.0);
            let leave_home = Time::from_hms(6, 30, 0).offset(rng.gen_range(0..7_200));
            let arrive_work = leave_home.offset(rng.gen_range(600..1_800));
            let leave_work = Time::from_hms(16, 0, 0).offset(rng.gen_range(0..7_200));
            let arrive_home = leave_work.offset(rng.gen_range(600..1_800));

            for (depart, arrive, from, to) in [
                (leave_home, arrive_work, c.home, c.work),
                (leave_work, arrive_home, c.work, c.home),
            ] {
                let traffic = |time, segment| TrafficEvent {
                    time,
                    person: c.person,
                    vehicle,
                    segment,
                    mode: TransportMode::Car,
                };
                let search = rng.gen_range(0..=600);
                let search_start = Time(arrive.secs().saturating_sub(search));
                events.push(MobsimEvent::Parking(ParkingEvent::Unpark(traffic(depart, from))));
                events.push(MobsimEvent::Search(SearchEvent::Started { time: search_start, vehicle }));
                events.push(MobsimEvent::Search(SearchEvent::Ended { time: arrive, vehicle }));
                events.push(MobsimEvent::Parking(ParkingEvent::Park(traffic(arrive, to))));
            }
        }

        for b in 0..BUSES {
            let vehicle = VehicleId(BUS_VEHICLE_BASE + b);
            let start = Time::from_hms(5, 0, 0).offset(b as u64 * 900);
            let bus = |time| TrafficEvent {
                time,
                person: PersonId(BUS_VEHICLE_BASE + b),
                vehicle,
                segment: SegmentId(1),
                mode: TransportMode::Car,
            };
            events.push(MobsimEvent::TransitDriverStarts { time: start, vehicle });
            events.push(MobsimEvent::Parking(ParkingEvent::Unpark(bus(start.offset(60)))));
            events.push(MobsimEvent::Parking(ParkingEvent::Park(bus(start.offset(3_600)))));
        }

        // Stable: a search start generated before its end at the same second
        // stays first.
        events.sort_by_key(MobsimEvent::time);
        events
    }
}
