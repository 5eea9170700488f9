//! Eligibility filter and best-candidate selection.
//!
//! Pure over a roster snapshot: nothing here touches the store.
//!
//! RULES:
//!   - The roster is iterated in ascending id order.
//!   - An employee is eligible iff current_hours + task.hours <= 40.
//!   - The best score is replaced only by a strictly greater score,
//!     so ties go to the lower id.

use crate::{
    employee::Employee,
    scoring::score,
    skill::Skill,
    types::{Hours, MAX_WEEKLY_HOURS},
};

/// The uncommitted winner of a selection round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub employee:       &'a Employee,
    pub score:          i64,
    pub eligible_count: usize,
}

pub fn is_eligible(employee: &Employee, task_hours: Hours) -> bool {
    employee.projected_hours(task_hours) <= MAX_WEEKLY_HOURS
}

/// Select the best eligible employee, or `None` when everyone is over capacity.
pub fn select<'a>(
    roster: &'a [Employee],
    required: Skill,
    task_hours: Hours,
) -> Option<Selection<'a>> {
    let mut best: Option<(&Employee, i64)> = None;
    let mut eligible_count = 0;

    for employee in roster.iter().filter(|e| is_eligible(e, task_hours)) {
        eligible_count += 1;
        let candidate = score(employee, required);
        log::debug!(
            "selection: {} scored {candidate} for {required}",
            employee.name
        );
        match best {
            Some((_, best_score)) if candidate <= best_score => {}
            _ => best = Some((employee, candidate)),
        }
    }

    best.map(|(employee, score)| Selection {
        employee,
        score,
        eligible_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: i64, expertise: Skill, reliability: i64, current_hours: Hours) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            expertise,
            reliability,
            seed_hours: current_hours,
            current_hours,
        }
    }

    #[test]
    fn eligibility_gate_is_inclusive_at_forty() {
        let e = emp(1, Skill::DataAnalytics, 5, 35);
        assert!(!is_eligible(&e, 10));
        assert!(is_eligible(&e, 5));
    }

    #[test]
    fn picks_highest_score() {
        let roster = vec![
            emp(1, Skill::SoftwareDevelopment, 9, 12), // 50+45-24 = 71
            emp(2, Skill::SoftwareDevelopment, 10, 28), // 50+50-56 = 44
            emp(3, Skill::DataAnalytics, 10, 0),        // 50
        ];
        let pick = select(&roster, Skill::SoftwareDevelopment, 8).unwrap();
        assert_eq!(pick.employee.id, 1);
        assert_eq!(pick.score, 71);
        assert_eq!(pick.eligible_count, 3);
    }

    #[test]
    fn ties_keep_the_lower_id() {
        let roster = vec![
            emp(4, Skill::QualityAssurance, 8, 10),
            emp(9, Skill::QualityAssurance, 8, 10),
        ];
        let pick = select(&roster, Skill::QualityAssurance, 2).unwrap();
        assert_eq!(pick.employee.id, 4);
    }

    #[test]
    fn ineligible_employees_are_not_counted() {
        let roster = vec![
            emp(1, Skill::UiUxDesign, 10, 38), // 38+5 > 40
            emp(2, Skill::UiUxDesign, 1, 30),  // 5-60+50 = -5
        ];
        let pick = select(&roster, Skill::UiUxDesign, 5).unwrap();
        assert_eq!(pick.employee.id, 2);
        assert_eq!(pick.score, -5);
        assert_eq!(pick.eligible_count, 1);
    }

    #[test]
    fn negative_scores_still_win_when_alone() {
        let roster = vec![emp(1, Skill::HardwareEngineering, 1, 39)];
        let pick = select(&roster, Skill::DataAnalytics, 1).unwrap();
        assert_eq!(pick.score, 5 - 78);
    }

    #[test]
    fn nobody_eligible_yields_none() {
        let roster = vec![
            emp(1, Skill::UiUxDesign, 10, 40),
            emp(2, Skill::DataAnalytics, 10, 40),
        ];
        assert!(select(&roster, Skill::UiUxDesign, 1).is_none());
        assert!(select(&[], Skill::UiUxDesign, 1).is_none());
    }
}
