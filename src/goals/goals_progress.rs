use crate::goals::goals_model::{ActionStep, GoalStatus};

/// Weighted completion percentage for a set of action steps.
///
/// Steps with a non-zero target weigh in at that target with the current
/// value as their contribution; binary steps weigh 1 and contribute 1 when
/// completed. A declared target of zero carries no weight at all, so a goal
/// whose every step targets zero reports 0% instead of dividing by zero.
/// Rounds half away from zero (the `Math.round` convention) and clamps to
/// `[0, 100]`.
pub fn calculate_progress(steps: &[ActionStep]) -> i32 {
    if steps.is_empty() {
        return 0;
    }

    let mut total_weight: i64 = 0;
    let mut completed_weight: i64 = 0;

    for step in steps {
        match step.target_value {
            Some(target) if target != 0 => {
                total_weight += target;
                completed_weight += step.current_value;
            }
            Some(_) => {}
            None => {
                total_weight += 1;
                if step.completed {
                    completed_weight += 1;
                }
            }
        }
    }

    if total_weight == 0 {
        return 0;
    }

    let percent = (completed_weight as f64 / total_weight as f64) * 100.0;
    (percent.round() as i32).clamp(0, 100)
}

/// Derives the progress/status pair to persist after a step edit.
///
/// The status is always recomputed: 100% means completed, anything less
/// means active. A manually paused goal therefore goes back to active (or
/// completed) on any step edit; one function owns that rule so it can be
/// revisited in one place.
pub fn apply_step_update(steps: &[ActionStep]) -> (i32, GoalStatus) {
    let progress = calculate_progress(steps);
    let status = if progress == 100 {
        GoalStatus::Completed
    } else {
        GoalStatus::Active
    };
    (progress, status)
}

/// Flips a step's completion state.
///
/// Quantifiable steps snap their current value to the target when completed
/// and back to zero when not.
pub fn toggle_step(step: &mut ActionStep) {
    step.completed = !step.completed;
    if let Some(target) = step.target_value {
        step.current_value = if step.completed { target } else { 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_step(id: &str, completed: bool) -> ActionStep {
        ActionStep {
            id: id.to_string(),
            description: format!("step {}", id),
            completed,
            target_value: None,
            current_value: 0,
        }
    }

    fn quantified_step(id: &str, target: i64, current: i64) -> ActionStep {
        ActionStep {
            id: id.to_string(),
            description: format!("step {}", id),
            completed: current >= target && target > 0,
            target_value: Some(target),
            current_value: current,
        }
    }

    #[test]
    fn empty_step_list_is_zero_percent() {
        assert_eq!(calculate_progress(&[]), 0);
    }

    #[test]
    fn single_binary_step_is_all_or_nothing() {
        assert_eq!(calculate_progress(&[binary_step("1", true)]), 100);
        assert_eq!(calculate_progress(&[binary_step("1", false)]), 0);
    }

    #[test]
    fn mixed_steps_weight_by_target() {
        // weight 10 + 1 = 11, contribution 5 + 1 = 6 -> round(600/11) = 55
        let steps = vec![quantified_step("1", 10, 5), binary_step("2", true)];
        assert_eq!(calculate_progress(&steps), 55);
    }

    #[test]
    fn all_zero_targets_do_not_divide_by_zero() {
        let steps = vec![quantified_step("1", 0, 5), quantified_step("2", 0, 0)];
        assert_eq!(calculate_progress(&steps), 0);
    }

    #[test]
    fn zero_target_step_is_excluded_from_the_mix() {
        let steps = vec![quantified_step("1", 0, 5), binary_step("2", true)];
        assert_eq!(calculate_progress(&steps), 100);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1/8 complete = 12.5 -> 13
        let steps = vec![
            binary_step("1", true),
            quantified_step("2", 7, 0),
        ];
        assert_eq!(calculate_progress(&steps), 13);
    }

    #[test]
    fn result_is_idempotent_for_the_same_input() {
        let steps = vec![quantified_step("1", 10, 5), binary_step("2", true)];
        assert_eq!(calculate_progress(&steps), calculate_progress(&steps));
    }

    #[test]
    fn overshooting_current_values_cap_at_one_hundred() {
        let steps = vec![quantified_step("1", 10, 15)];
        assert_eq!(calculate_progress(&steps), 100);
    }

    #[test]
    fn step_update_completes_only_at_exactly_one_hundred() {
        let (progress, status) = apply_step_update(&[binary_step("1", true)]);
        assert_eq!(progress, 100);
        assert_eq!(status, GoalStatus::Completed);

        let steps = vec![quantified_step("1", 100, 99)];
        let (progress, status) = apply_step_update(&steps);
        assert_eq!(progress, 99);
        assert_eq!(status, GoalStatus::Active);
    }

    #[test]
    fn toggling_snaps_quantifiable_steps_to_target() {
        let mut step = quantified_step("1", 20, 0);
        toggle_step(&mut step);
        assert!(step.completed);
        assert_eq!(step.current_value, 20);

        toggle_step(&mut step);
        assert!(!step.completed);
        assert_eq!(step.current_value, 0);
    }

    #[test]
    fn toggling_binary_steps_leaves_current_value_alone() {
        let mut step = binary_step("1", false);
        toggle_step(&mut step);
        assert!(step.completed);
        assert_eq!(step.current_value, 0);
    }
}
