use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shoppersim::population::{
    age_in_years, filter_ages, generate_population, generate_seeded, PopulationError,
    PopulationPlan,
};
use shoppersim::profiles::ReplayProfileSource;

use crate::{born_aged, reference_day};

#[test]
fn default_run_has_one_hundred_adults() {
    let population = generate_seeded(2024, &PopulationPlan::default(), reference_day()).unwrap();
    assert_eq!(population.records.len(), 100);
    for record in &population.records {
        assert!(
            18 < record.age && record.age < 99,
            "age {} escaped the window",
            record.age
        );
    }
    assert_eq!(population.attempts, 100 + population.rejected);
}

#[test]
fn exact_boundary_ages_are_rejected() {
    assert_eq!(age_in_years(born_aged(18), reference_day()), 18);
    assert_eq!(age_in_years(born_aged(99), reference_day()), 99);

    let plan = PopulationPlan {
        size: 2,
        ..PopulationPlan::default()
    };
    let mut source =
        ReplayProfileSource::from_birthdates([18, 99, 19, 99, 18, 98].into_iter().map(born_aged));
    let acc = filter_ages(&mut source, &plan, reference_day()).unwrap();
    assert_eq!(acc.ages, vec![19, 98]);
    assert_eq!(acc.attempts, 6);
}

#[test]
fn only_boundary_profiles_exhaust_the_source() {
    let plan = PopulationPlan {
        size: 1,
        ..PopulationPlan::default()
    };
    let mut source = ReplayProfileSource::from_birthdates(vec![born_aged(18), born_aged(99)]);
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_population(&mut source, &mut rng, &plan, reference_day()).unwrap_err();
    assert!(matches!(err, PopulationError::Source(_)));
}

proptest! {
    #[test]
    fn accepted_ages_are_the_in_window_prefix(ages in prop::collection::vec(0i64..120, 1..200)) {
        let in_window: Vec<i64> = ages.iter().copied().filter(|a| 18 < *a && *a < 99).collect();
        prop_assume!(!in_window.is_empty());
        let plan = PopulationPlan {
            size: in_window.len(),
            max_attempts: Some(ages.len() as u64),
            ..PopulationPlan::default()
        };
        let mut source = ReplayProfileSource::from_birthdates(ages.iter().copied().map(born_aged));
        let acc = filter_ages(&mut source, &plan, reference_day()).unwrap();
        prop_assert_eq!(acc.ages, in_window);
    }
}
