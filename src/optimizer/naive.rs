use crate::domain::{Appliance, Schedule, HOURS_PER_DAY};

/// Earliest-start reference schedule.
///
/// Each flexible appliance is assigned the hours
/// `earliest_start .. earliest_start + duration_hours`, modulo 24. The
/// `latest_end` bound is ignored on purpose: when the duration pushes past
/// the window's end the naive run simply spills over. This is the defined
/// comparison baseline for savings, not a feasible schedule in general.
pub fn naive_schedule(appliances: &[Appliance]) -> Schedule {
    let mut schedule = Schedule::new();
    for appliance in appliances.iter().filter(|a| a.flexible) {
        let hours = (0..appliance.duration_hours)
            .map(|i| (appliance.earliest_start + i) % HOURS_PER_DAY)
            .collect();
        schedule.insert(appliance.name.clone(), hours);
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flexible(name: &str, duration: u8, start: u8, end: u8) -> Appliance {
        Appliance {
            name: name.into(),
            power_kw: 1.0,
            duration_hours: duration,
            flexible: true,
            earliest_start: start,
            latest_end: end,
        }
    }

    #[test]
    fn assigns_consecutive_hours_from_earliest_start() {
        let schedule = naive_schedule(&[flexible("washer", 3, 6, 10)]);
        assert_eq!(schedule.hours_for("washer"), &[6, 7, 8]);
    }

    #[test]
    fn wraps_past_midnight() {
        let schedule = naive_schedule(&[flexible("ev", 4, 22, 6)]);
        assert_eq!(schedule.hours_for("ev"), &[0, 1, 22, 23]);
    }

    #[test]
    fn can_run_outside_the_nominal_window() {
        // duration 4 from hour 10 spills past latest_end 12; that spill is
        // part of the defined baseline behavior.
        let schedule = naive_schedule(&[flexible("dryer", 4, 10, 12)]);
        assert_eq!(schedule.hours_for("dryer"), &[10, 11, 12, 13]);
    }

    #[test]
    fn skips_non_flexible_appliances() {
        let mut fridge = flexible("fridge", 24, 0, 24);
        fridge.flexible = false;
        let schedule = naive_schedule(&[fridge]);
        assert!(schedule.is_empty());
    }
}
