use rand::rngs::StdRng;
use rand::SeedableRng;

use macro_tracker_rs::models::{FoodItem, Macro, TargetProfile};
use macro_tracker_rs::planner::{suggest, SuggestConfig, SCORE_EPSILON};
use macro_tracker_rs::TrackerError;

fn food(name: &str, cal: f64, p: f64, c: f64, f: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        serving_size: "1 unit".to_string(),
        calories: cal,
        protein: p,
        carbs: c,
        fats: f,
        default_quantity: 1.0,
    }
}

fn pantry() -> Vec<FoodItem> {
    vec![
        food("Chicken Breast", 239.0, 27.0, 0.0, 14.0),
        food("White Rice", 130.0, 2.7, 28.0, 0.3),
        food("Avocado", 160.0, 2.0, 9.0, 15.0),
        food("Greek Yogurt", 59.0, 10.0, 3.6, 0.4),
        food("Almonds", 579.0, 21.0, 22.0, 50.0),
        food("Banana", 89.0, 1.1, 23.0, 0.3),
    ]
}

fn day_targets() -> TargetProfile {
    TargetProfile::from([
        (Macro::Calories, 700.0),
        (Macro::Protein, 45.0),
        (Macro::Carbs, 60.0),
        (Macro::Fats, 25.0),
    ])
}

#[test]
fn identical_seed_gives_identical_result() {
    let config = SuggestConfig::default();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);

    let a = suggest(&pantry(), &day_targets(), &config, &mut rng_a).unwrap();
    let b = suggest(&pantry(), &day_targets(), &config, &mut rng_b).unwrap();

    assert_eq!(a.score, b.score);
    assert_eq!(a.meal.len(), b.meal.len());
    for (ca, cb) in a.meal.components.iter().zip(&b.meal.components) {
        assert_eq!(ca.food.name, cb.food.name);
        assert_eq!(ca.quantity, cb.quantity);
    }
}

#[test]
fn doubling_the_budget_never_worsens_the_score() {
    for seed in 0..10 {
        let small = SuggestConfig {
            trials: 250,
            ..Default::default()
        };
        let large = SuggestConfig {
            trials: 500,
            ..Default::default()
        };

        let mut rng_small = StdRng::seed_from_u64(seed);
        let mut rng_large = StdRng::seed_from_u64(seed);

        let a = suggest(&pantry(), &day_targets(), &small, &mut rng_small).unwrap();
        let b = suggest(&pantry(), &day_targets(), &large, &mut rng_large).unwrap();

        assert!(
            b.score <= a.score,
            "seed {}: {} trials scored {:.6}, {} trials scored {:.6}",
            seed,
            small.trials,
            a.score,
            large.trials,
            b.score
        );
    }
}

#[test]
fn scores_are_never_negative() {
    let config = SuggestConfig {
        trials: 100,
        ..Default::default()
    };
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = suggest(&pantry(), &day_targets(), &config, &mut rng).unwrap();
        assert!(result.score >= 0.0);
    }
}

#[test]
fn exact_match_is_found_when_achievable() {
    // A doubled plus the zero filler hits Calories/Protein exactly, and the
    // zero-target macros have zero totals, so the optimum scores 0.
    let catalog = vec![
        food("Block", 100.0, 10.0, 0.0, 0.0),
        food("Filler", 0.0, 0.0, 0.0, 0.0),
    ];
    let targets = TargetProfile::from([
        (Macro::Calories, 200.0),
        (Macro::Protein, 20.0),
        (Macro::Carbs, 0.0),
        (Macro::Fats, 0.0),
    ]);
    let config = SuggestConfig {
        trials: 2000,
        portion_sizes: vec![1.0, 2.0],
        max_items: 2,
    };

    let mut rng = StdRng::seed_from_u64(99);
    let result = suggest(&catalog, &targets, &config, &mut rng).unwrap();

    assert!(result.score < 1e-9, "score was {}", result.score);
    let totals = result.meal.totals();
    assert!((totals.calories - 200.0).abs() < 1e-9);
    assert!((totals.protein - 20.0).abs() < 1e-9);
}

#[test]
fn zero_targets_give_large_finite_scores() {
    // Every candidate carries carbs and fats, so the epsilon guard turns the
    // zero targets into huge relative errors instead of a division by zero.
    let catalog = vec![
        food("Bread", 265.0, 9.0, 49.0, 3.2),
        food("Pasta", 131.0, 5.0, 25.0, 1.1),
    ];
    let targets = TargetProfile::from([(Macro::Carbs, 0.0), (Macro::Fats, 0.0)]);

    let mut rng = StdRng::seed_from_u64(5);
    let result = suggest(&catalog, &targets, &SuggestConfig::default(), &mut rng).unwrap();

    assert!(result.score.is_finite());
    assert!(result.score > 1e6);
}

#[test]
fn one_item_catalog_is_rejected() {
    let catalog = vec![food("Lonely", 100.0, 10.0, 10.0, 10.0)];
    let mut rng = StdRng::seed_from_u64(1);

    let err = suggest(&catalog, &day_targets(), &SuggestConfig::default(), &mut rng).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidCatalog(_)));
}

#[test]
fn empty_catalog_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = suggest(&[], &day_targets(), &SuggestConfig::default(), &mut rng).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidCatalog(_)));
}

#[test]
fn only_targeted_macros_are_scored() {
    let targets = TargetProfile::from([(Macro::Calories, 500.0)]);
    let config = SuggestConfig {
        trials: 500,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(17);
    let result = suggest(&pantry(), &targets, &config, &mut rng).unwrap();

    // Whatever protein/carbs/fats the winning meal carries, the score is the
    // calories term alone.
    let totals = result.meal.totals();
    let expected = (totals.calories - 500.0).abs() / (500.0 + SCORE_EPSILON);
    assert!((result.score - expected).abs() < 1e-12);
}

#[test]
fn ties_keep_the_first_candidate() {
    // All-zero foods make every candidate score identically, so the
    // incumbent from the first trial must survive any budget.
    let catalog = vec![
        food("Air", 0.0, 0.0, 0.0, 0.0),
        food("Vacuum", 0.0, 0.0, 0.0, 0.0),
        food("Nothing", 0.0, 0.0, 0.0, 0.0),
    ];
    let targets = TargetProfile::from([(Macro::Calories, 100.0)]);

    let one_trial = SuggestConfig {
        trials: 1,
        ..Default::default()
    };
    let many_trials = SuggestConfig {
        trials: 1000,
        ..Default::default()
    };

    let mut rng_one = StdRng::seed_from_u64(8);
    let mut rng_many = StdRng::seed_from_u64(8);

    let first = suggest(&catalog, &targets, &one_trial, &mut rng_one).unwrap();
    let best = suggest(&catalog, &targets, &many_trials, &mut rng_many).unwrap();

    assert_eq!(first.score, best.score);
    assert_eq!(first.meal.len(), best.meal.len());
    for (a, b) in first.meal.components.iter().zip(&best.meal.components) {
        assert_eq!(a.food.name, b.food.name);
        assert_eq!(a.quantity, b.quantity);
    }
}
