//! Holy-day precedence.
//!
//! The candidates for a date are the moveable holy day falling on it, the
//! fixed holy day falling on it, and the ordinary day. [`PRECEDENCE_RULES`] is
//! evaluated in order and the first rule that fires decides the observance.

use super::holy_days::{FixedHolyDay, HolyDayRank, MoveableHolyDay};

/// Everything competing for a single date.
#[derive(Debug, Clone, Copy)]
pub struct Candidates {
    pub is_sunday: bool,
    pub moveable: Option<&'static MoveableHolyDay>,
    pub fixed: Option<&'static FixedHolyDay>,
}

/// The winning identity of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    HolyDay {
        name: &'static str,
        rank: HolyDayRank,
        collect_key: &'static str,
    },
    Ordinary,
}

/// One precedence rule.
#[derive(Clone, Copy)]
pub struct PrecedenceRule {
    pub name: &'static str,
    pub apply: fn(&Candidates) -> Option<Observance>,
}

impl std::fmt::Debug for PrecedenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrecedenceRule").field("name", &self.name).finish()
    }
}

fn moveable_feast_wins(c: &Candidates) -> Option<Observance> {
    c.moveable.map(|h| Observance::HolyDay {
        name: h.name,
        rank: h.rank,
        collect_key: h.collect_key,
    })
}

fn fixed_holy_day_wins(c: &Candidates) -> Option<Observance> {
    let h = c.fixed?;
    if c.is_sunday && h.rank == HolyDayRank::Minor {
        return None;
    }
    Some(Observance::HolyDay {
        name: h.name,
        rank: h.rank,
        collect_key: h.collect_key,
    })
}

fn ordinary_day(_: &Candidates) -> Option<Observance> {
    Some(Observance::Ordinary)
}

/// Precedence in priority order. The last rule always fires.
pub const PRECEDENCE_RULES: [PrecedenceRule; 3] = [
    PrecedenceRule { name: "moveable-feast", apply: moveable_feast_wins },
    PrecedenceRule { name: "fixed-holy-day", apply: fixed_holy_day_wins },
    PrecedenceRule { name: "ordinary-day", apply: ordinary_day },
];

/// Apply [`PRECEDENCE_RULES`] to the candidates.
pub fn observance(candidates: &Candidates) -> Observance {
    PRECEDENCE_RULES
        .iter()
        .find_map(|rule| (rule.apply)(candidates))
        .unwrap_or(Observance::Ordinary)
}
