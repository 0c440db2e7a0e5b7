//! Colombian national holidays for 2026.
//!
//! Fixed-date observances plus the Ley Emiliani holidays, which move to the
//! following Monday when they fall on any other weekday. The shifted dates
//! below are already resolved for 2026.

use chrono::NaiveDate;
use std::collections::HashSet;

pub fn colombia_2026() -> HashSet<NaiveDate> {
    let mut holidays = HashSet::new();
    let mut add = |m: u32, d: u32| {
        holidays.insert(NaiveDate::from_ymd_opt(2026, m, d).expect("valid holiday date"));
    };

    add(1, 1); // Año Nuevo
    add(1, 12); // Reyes Magos (trasladado del 6 de enero)
    add(3, 23); // San José (trasladado del 19 de marzo)
    add(4, 2); // Jueves Santo
    add(4, 3); // Viernes Santo
    add(5, 1); // Día del Trabajo
    add(5, 18); // Ascensión del Señor (trasladado)
    add(6, 8); // Corpus Christi (trasladado)
    add(6, 15); // Sagrado Corazón (trasladado)
    add(6, 29); // San Pedro y San Pablo
    add(7, 20); // Día de la Independencia
    add(8, 7); // Batalla de Boyacá
    add(8, 17); // Asunción de la Virgen (trasladado del 15 de agosto)
    add(10, 12); // Día de la Raza
    add(11, 2); // Todos los Santos (trasladado del 1 de noviembre)
    add(11, 16); // Independencia de Cartagena (trasladado del 11 de noviembre)
    add(12, 8); // Inmaculada Concepción
    add(12, 25); // Navidad

    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn eighteen_national_holidays() {
        assert_eq!(colombia_2026().len(), 18);
    }

    #[test]
    fn emiliani_holidays_observe_on_monday() {
        let shifted = [
            (1u32, 12u32),
            (3, 23),
            (5, 18),
            (6, 8),
            (6, 15),
            (8, 17),
            (11, 2),
            (11, 16),
        ];
        let holidays = colombia_2026();
        for (m, d) in shifted {
            let date = NaiveDate::from_ymd_opt(2026, m, d).expect("valid date");
            assert!(holidays.contains(&date), "{date} missing");
            assert_eq!(date.weekday(), Weekday::Mon, "{date} should observe Monday");
        }
    }
}
